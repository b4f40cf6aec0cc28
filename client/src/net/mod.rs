//! Networking modules for the gallery's JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls against the host server, `types` defines the
//! shared wire schema (also used by the server), and `error` holds the error
//! taxonomy surfaced to guests.

pub mod api;
pub mod error;
pub mod types;
