//! Success envelope shared by every resource route.
//!
//! Responses carry a `message` plus whichever of `data`, `changes` and `id`
//! the operation produces; absent parts are omitted rather than `null`.

use serde::{Serialize, Serializer};

/// Message sent with every successful read or write.
pub const SUCCESS: &str = "success";

/// JSON body of a 200 response.
///
/// # Examples
/// ```
/// use election_backend::inbound::http::envelope::Envelope;
///
/// let body = Envelope::<()>::message("deleted").with_changes(1).with_id("4");
/// assert_eq!(
///     serde_json::to_value(&body).unwrap(),
///     serde_json::json!({ "message": "deleted", "changes": 1, "id": "4" })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    changes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl<T> Envelope<T> {
    /// `{message: "success", data}`.
    pub fn success(data: T) -> Self {
        Self {
            message: SUCCESS,
            data: Some(data),
            changes: None,
            id: None,
        }
    }

    /// A bare message, used for not-found and delete outcomes.
    pub fn message(message: &'static str) -> Self {
        Self {
            message,
            data: None,
            changes: None,
            id: None,
        }
    }

    #[must_use]
    pub fn with_changes(mut self, changes: usize) -> Self {
        self.changes = Some(changes);
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Result of a get-by-id lookup. A missing row serialises as `{}`.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundRow<T>(pub Option<T>);

impl<T: Serialize> Serialize for FoundRow<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(row) => row.serialize(serializer),
            None => serde_json::Map::new().serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn success_wraps_data() {
        let body = Envelope::success(json!([{ "id": 1 }]));
        assert_eq!(
            serde_json::to_value(&body).expect("serialise"),
            json!({ "message": "success", "data": [{ "id": 1 }] })
        );
    }

    #[rstest]
    fn not_found_carries_only_the_message() {
        let body = Envelope::<()>::message("Voter not found");
        assert_eq!(
            serde_json::to_value(&body).expect("serialise"),
            json!({ "message": "Voter not found" })
        );
    }

    #[rstest]
    fn updates_report_changes_alongside_data() {
        let body = Envelope::success(json!({ "email": "a@b.com" })).with_changes(1);
        assert_eq!(
            serde_json::to_value(&body).expect("serialise"),
            json!({ "message": "success", "data": { "email": "a@b.com" }, "changes": 1 })
        );
    }

    #[rstest]
    #[case(FoundRow(None), json!({}))]
    #[case(FoundRow(Some(json!({ "id": 3 }))), json!({ "id": 3 }))]
    fn found_row_serialises_absence_as_empty_object(
        #[case] row: FoundRow<serde_json::Value>,
        #[case] expected: serde_json::Value,
    ) {
        assert_eq!(serde_json::to_value(&row).expect("serialise"), expected);
    }
}
