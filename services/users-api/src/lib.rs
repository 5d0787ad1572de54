//! Users API service
//!
//! A single `user` resource served over HTTP: lookup, creation, upsert on
//! `PUT`, JSON Patch updates, deletion and a paged listing, with JSON and
//! XML representations chosen by content negotiation.

pub mod error;
pub mod models;
pub mod patch;
pub mod repositories;
pub mod representation;
pub mod routes;
pub mod state;
pub mod validation;

pub use routes::create_router;
pub use state::AppState;
