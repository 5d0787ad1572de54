//! Integration tests for the shared building blocks
//!
//! These tests exercise the public surface of the crate the way the
//! service crates consume it.

use common::{PageList, RepositoryError, ServerConfig};
use uuid::Uuid;

/// Walking every page in turn visits each item exactly once, in order
#[test]
fn test_walking_pages_visits_every_item_once() {
    let source: Vec<usize> = (0..47).collect();
    let page_size = 5;

    let mut page_number = 1;
    let mut seen = Vec::new();
    loop {
        let page = PageList::from_slice(&source, page_number, page_size);
        seen.extend_from_slice(page.items());
        if !page.has_next() {
            break;
        }
        page_number += 1;
    }

    assert_eq!(seen, source);
    assert_eq!(page_number, 10);
}

#[test]
fn test_repository_error_display() {
    let id = Uuid::nil();
    let err = RepositoryError::NotFound(id);
    assert_eq!(err.to_string(), format!("Record {id} not found"));
}

#[test]
fn test_default_bind_address() {
    assert_eq!(ServerConfig::default().bind_address(), "localhost:5000");
}
