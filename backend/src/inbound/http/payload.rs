//! Request body extraction for write routes.
//!
//! Clients post either JSON objects or URL-encoded forms. Both are reduced
//! to a [`Record`] so the validation gate sees one shape. Bodies with no
//! recognised content type read as an empty record and fail validation
//! rather than parsing.

use actix_web::web::Bytes;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use serde_json::Value;
use tracing::debug;

use crate::domain::{Error, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    /// Media types compare case-insensitively.
    fn of(req: &HttpRequest) -> Self {
        let media_type = req.content_type();
        if media_type.eq_ignore_ascii_case("application/json") {
            Self::Json
        } else if media_type.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
            Self::Form
        } else {
            Self::Other
        }
    }
}

/// Body of a create or update request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmittedRecord(Record);

impl SubmittedRecord {
    pub fn as_record(&self) -> &Record {
        &self.0
    }

    pub fn into_inner(self) -> Record {
        self.0
    }

    fn parse(kind: BodyKind, body: &[u8]) -> Result<Self, Error> {
        match kind {
            BodyKind::Json => parse_json(body).map(Self),
            BodyKind::Form => Ok(Self(parse_form(body))),
            BodyKind::Other => Ok(Self::default()),
        }
    }
}

fn parse_json(body: &[u8]) -> Result<Record, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Record::new());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(record)) => Ok(record),
        Ok(_) => Err(Error::invalid_request("request body must be a JSON object")),
        Err(error) => Err(Error::invalid_request(error.to_string())),
    }
}

fn parse_form(body: &[u8]) -> Record {
    url::form_urlencoded::parse(body)
        .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
        .collect()
}

impl FromRequest for SubmittedRecord {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let kind = BodyKind::of(req);
        let body = Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = body.await.map_err(|error| {
                debug!(%error, "failed to read request body");
                Error::invalid_request(error.to_string())
            })?;
            Self::parse(kind, &bytes)
        })
    }
}
