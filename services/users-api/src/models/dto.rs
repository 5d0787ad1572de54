//! Wire models for the users endpoints and their mapping to records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{NewUser, UserChanges, UserEntity};
use crate::validation::{ValidationErrors, bind_field, require_text};

/// User as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub login: String,
    pub full_name: String,
    pub games_played: i32,
    pub current_game_id: Option<Uuid>,
}

impl From<&UserEntity> for UserDto {
    fn from(user: &UserEntity) -> Self {
        Self {
            id: user.id,
            login: user.login.clone(),
            full_name: user.full_name(),
            games_played: user.games_played,
            current_game_id: user.current_game_id,
        }
    }
}

/// Body of `POST /api/users`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUserDto {
    pub login: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub games_played: i32,
    pub current_game_id: Option<Uuid>,
}

impl PostUserDto {
    /// Bind every field of `document`, recording type errors in `errors`
    pub fn bind(document: &Map<String, Value>, errors: &mut ValidationErrors) -> Self {
        Self {
            login: bind_field(document, "login", errors),
            first_name: bind_field(document, "firstName", errors),
            last_name: bind_field(document, "lastName", errors),
            games_played: bind_field(document, "gamesPlayed", errors).unwrap_or_default(),
            current_game_id: bind_field(document, "currentGameId", errors),
        }
    }

    /// Apply the required-field rules on top of the binding errors
    pub fn into_new_user(self, mut errors: ValidationErrors) -> Result<NewUser, ValidationErrors> {
        let login = require_text(self.login, "login", &mut errors);
        let first_name = require_text(self.first_name, "firstName", &mut errors);
        let last_name = require_text(self.last_name, "lastName", &mut errors);

        match (login, first_name, last_name) {
            (Some(login), Some(first_name), Some(last_name)) => errors.into_result(NewUser {
                login,
                first_name,
                last_name,
                games_played: self.games_played,
                current_game_id: self.current_game_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Body of `PUT /api/users/{id}` and target of `PATCH /api/users/{id}`.
///
/// The default value is the blank draft a patch document is applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub games_played: i32,
    pub current_game_id: Option<Uuid>,
}

impl UpdateUserDto {
    /// Wire names of every field, as targeted by patch paths
    pub const FIELDS: [&'static str; 4] = ["firstName", "lastName", "gamesPlayed", "currentGameId"];

    /// Bind every field of `document`, recording type errors in `errors`
    pub fn bind(document: &Map<String, Value>, errors: &mut ValidationErrors) -> Self {
        Self {
            first_name: bind_field(document, "firstName", errors),
            last_name: bind_field(document, "lastName", errors),
            games_played: bind_field(document, "gamesPlayed", errors).unwrap_or_default(),
            current_game_id: bind_field(document, "currentGameId", errors),
        }
    }

    /// Apply the required-field rules on top of the binding errors
    pub fn into_changes(self, mut errors: ValidationErrors) -> Result<UserChanges, ValidationErrors> {
        let first_name = require_text(self.first_name, "firstName", &mut errors);
        let last_name = require_text(self.last_name, "lastName", &mut errors);

        match (first_name, last_name) {
            (Some(first_name), Some(last_name)) => errors.into_result(UserChanges {
                first_name,
                last_name,
                games_played: self.games_played,
                current_game_id: self.current_game_id,
            }),
            _ => Err(errors),
        }
    }
}
