//! Outbound adapters implementing the domain's repository ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel.

pub mod persistence;
