//! Common library for the users service
//!
//! This crate provides the building blocks shared by the service crates:
//! server configuration, repository error types and the page window used
//! by paged listings.

pub mod error;
pub mod paging;
pub mod settings;

pub use error::{RepositoryError, RepositoryResult};
pub use paging::PageList;
pub use settings::ServerConfig;
