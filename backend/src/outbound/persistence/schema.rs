//! Diesel table definitions for the election schema.
//!
//! These must match `backend/migrations`. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Political parties. Read-only from the API's point of view.
    parties (id) {
        id -> Int4,
        #[max_length = 50]
        name -> Varchar,
        description -> Nullable<Text>,
    }
}

diesel::table! {
    /// Candidates, optionally affiliated with a party.
    candidates (id) {
        id -> Int4,
        #[max_length = 30]
        first_name -> Varchar,
        #[max_length = 30]
        last_name -> Varchar,
        industry_connected -> Bool,
        /// Nulled when the referenced party is deleted.
        party_id -> Nullable<Int4>,
    }
}

diesel::table! {
    /// Registered voters.
    voters (id) {
        id -> Int4,
        #[max_length = 30]
        first_name -> Varchar,
        #[max_length = 30]
        last_name -> Varchar,
        #[max_length = 50]
        email -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(candidates -> parties (party_id));

diesel::allow_tables_to_appear_in_same_query!(candidates, parties, voters);
