//! User records as stored by the repository

use uuid::Uuid;

pub mod dto;
pub mod pagination;

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntity {
    pub id: Uuid,
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub games_played: i32,
    pub current_game_id: Option<Uuid>,
}

impl UserEntity {
    /// Build a record for `id` out of its editable fields.
    ///
    /// Records created this way have an empty login: the login is only
    /// ever supplied on creation.
    pub fn from_changes(id: Uuid, changes: UserChanges) -> Self {
        Self {
            id,
            login: String::new(),
            first_name: changes.first_name,
            last_name: changes.last_name,
            games_played: changes.games_played,
            current_game_id: changes.current_game_id,
        }
    }

    /// Overwrite every editable field, keeping id and login
    pub fn apply(&mut self, changes: UserChanges) {
        self.first_name = changes.first_name;
        self.last_name = changes.last_name;
        self.games_played = changes.games_played;
        self.current_game_id = changes.current_game_id;
    }

    /// `lastName firstName`, as shown to clients
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

/// Fields of a user before the repository assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub games_played: i32,
    pub current_game_id: Option<Uuid>,
}

impl NewUser {
    pub fn into_entity(self, id: Uuid) -> UserEntity {
        UserEntity {
            id,
            login: self.login,
            first_name: self.first_name,
            last_name: self.last_name,
            games_played: self.games_played,
            current_game_id: self.current_game_id,
        }
    }
}

/// Editable fields replaced by update, upsert and patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChanges {
    pub first_name: String,
    pub last_name: String,
    pub games_played: i32,
    pub current_game_id: Option<Uuid>,
}
