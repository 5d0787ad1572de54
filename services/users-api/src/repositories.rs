//! In-memory user repository
//!
//! Records live in an insertion-ordered table behind a single
//! reader/writer lock: every mutation holds the write guard for its whole
//! read-modify-write sequence, so readers never observe a partial write.

use std::sync::Arc;

use common::{PageList, RepositoryError, RepositoryResult};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::{NewUser, UserChanges, UserEntity};

/// User repository backed by a guarded in-memory table
#[derive(Clone, Default)]
pub struct UserRepository {
    users: Arc<RwLock<Vec<UserEntity>>>,
}

impl UserRepository {
    /// Create a new, empty user repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Option<UserEntity> {
        let users = self.users.read().await;
        users.iter().find(|user| user.id == id).cloned()
    }

    /// Store a new user under a freshly generated ID
    pub async fn insert(&self, user: NewUser) -> UserEntity {
        let mut users = self.users.write().await;

        let mut id = Uuid::new_v4();
        while id.is_nil() || users.iter().any(|existing| existing.id == id) {
            id = Uuid::new_v4();
        }

        let user = user.into_entity(id);
        users.push(user.clone());
        debug!("Inserted user {}", id);

        user
    }

    /// Replace the editable fields of an existing user
    pub async fn update(&self, id: Uuid, changes: UserChanges) -> RepositoryResult<UserEntity> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        user.apply(changes);
        debug!("Updated user {}", id);

        Ok(user.clone())
    }

    /// Update the user if it exists, otherwise create it under `id`.
    ///
    /// Returns the stored record and whether it was inserted.
    pub async fn update_or_insert(&self, id: Uuid, changes: UserChanges) -> (UserEntity, bool) {
        let mut users = self.users.write().await;

        if let Some(user) = users.iter_mut().find(|user| user.id == id) {
            user.apply(changes);
            debug!("Updated user {} in place", id);
            return (user.clone(), false);
        }

        let user = UserEntity::from_changes(id, changes);
        users.push(user.clone());
        debug!("Inserted user {} with a caller-supplied id", id);

        (user, true)
    }

    /// Delete a user by ID. Deleting a missing user does nothing.
    pub async fn delete(&self, id: Uuid) {
        let mut users = self.users.write().await;
        users.retain(|user| user.id != id);
    }

    /// Get one page of users in insertion order
    pub async fn get_page(&self, page_number: usize, page_size: usize) -> PageList<UserEntity> {
        let users = self.users.read().await;
        PageList::from_slice(&users, page_number, page_size)
    }
}
