//! Users API routes
//!
//! ```text
//! GET|HEAD /api/users/{id}
//! POST     /api/users
//! PUT      /api/users/{id}
//! PATCH    /api/users/{id}
//! DELETE   /api/users/{id}
//! GET      /api/users?pageNumber=&pageSize=
//! OPTIONS  /api/users
//! ```

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Host, Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    models::{
        dto::{PostUserDto, UpdateUserDto, UserDto},
        pagination::{PaginationHeader, UsersQuery},
    },
    patch::{apply_to_blank, parse_patch},
    representation::Representation,
    validation::{ValidationErrors, parse_document, validate_login},
};

const USERS_PATH: &str = "/api/users";

/// Header carrying the JSON-encoded pagination metadata of a listing
pub const PAGINATION_HEADER: &str = "x-pagination";

/// Create the router for the users API
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            USERS_PATH,
            get(get_users).post(create_user).options(options_for_users),
        )
        .route(
            "/api/users/:id",
            get(get_user_by_id)
                .head(head_user_by_id)
                .put(update_user)
                .patch(partially_update_user)
                .delete(delete_user),
        )
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "users-api"
    }))
}

/// Absolute links to the users resources
struct Links {
    base: String,
}

impl Links {
    /// Use the request's authority, or the configured address without one
    fn new(host: Option<Host>, state: &AppState) -> Self {
        let authority = match host {
            Some(Host(host)) => host,
            None => state.config.bind_address(),
        };
        Self {
            base: format!("http://{authority}"),
        }
    }

    fn user(&self, id: Uuid) -> String {
        format!("{}{USERS_PATH}/{id}", self.base)
    }

    fn users_page(&self, page_number: usize, page_size: usize) -> String {
        format!(
            "{}{USERS_PATH}?pageNumber={page_number}&pageSize={page_size}",
            self.base
        )
    }
}

fn header_value(value: &str) -> ApiResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| {
        error!("Invalid header value {:?}: {}", value, e);
        ApiError::InternalServerError
    })
}

/// `201 Created` with a `Location` pointing at the user and its id as body
fn created(representation: Representation, links: &Links, id: Uuid) -> ApiResult<Response> {
    let mut response = representation.render(StatusCode::CREATED, "guid", &id)?;
    response
        .headers_mut()
        .insert(header::LOCATION, header_value(&links.user(id))?);
    Ok(response)
}

/// Get a user by ID
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let user = state
        .user_repository
        .find_by_id(id)
        .await
        .ok_or(ApiError::NotFound)?;

    let representation = Representation::negotiate(&headers)?;
    representation.render(StatusCode::OK, "UserDto", &UserDto::from(&user))
}

/// Probe a user's existence without transferring it
pub async fn head_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    state
        .user_repository
        .find_by_id(id)
        .await
        .ok_or(ApiError::NotFound)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, Representation::Json.content_type()),
            (header::CONTENT_LENGTH, "0"),
        ],
    )
        .into_response())
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    host: Option<Host>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let document =
        parse_document(&body).ok_or_else(|| ApiError::BadRequest("A user is required".into()))?;

    let representation = Representation::negotiate(&headers)?;

    let mut errors = ValidationErrors::new();
    let dto = PostUserDto::bind(&document, &mut errors);
    let new_user = dto
        .into_new_user(errors)
        .map_err(|errors| ApiError::ValidationFailed(errors, representation))?;

    if let Err(message) = validate_login(&new_user.login) {
        let mut errors = ValidationErrors::new();
        errors.add("login", message);
        return Err(ApiError::ValidationFailed(errors, representation));
    }

    let user = state.user_repository.insert(new_user).await;
    info!("Created user {} with login {}", user.id, user.login);

    created(representation, &Links::new(host, &state), user.id)
}

/// Replace a user, creating it under the given ID when it does not exist.
///
/// Only the creating branch carries a body, so an unacceptable `Accept`
/// still lets an existing user be replaced and refuses only the insert.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    host: Option<Host>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let document =
        parse_document(&body).ok_or_else(|| ApiError::BadRequest("A user is required".into()))?;

    if id.is_nil() {
        return Err(ApiError::BadRequest("The user id must not be empty".into()));
    }

    let mut errors = ValidationErrors::new();
    let dto = UpdateUserDto::bind(&document, &mut errors);
    let representation = Representation::negotiate(&headers);
    let changes = match dto.into_changes(errors) {
        Ok(changes) => changes,
        Err(errors) => return Err(ApiError::validation(errors, representation)),
    };

    let Ok(representation) = representation else {
        return match state.user_repository.update(id, changes).await {
            Ok(_) => {
                info!("Replaced user {}", id);
                Ok(StatusCode::NO_CONTENT.into_response())
            }
            Err(_) => Err(ApiError::NotAcceptable),
        };
    };

    let (_, inserted) = state.user_repository.update_or_insert(id, changes).await;

    if inserted {
        info!("Created user {} through PUT", id);
        created(representation, &Links::new(host, &state), id)
    } else {
        info!("Replaced user {}", id);
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}

/// Apply a JSON Patch document to a blank update model and store the result
pub async fn partially_update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let patch = parse_patch(&body)
        .ok_or_else(|| ApiError::BadRequest("A patch document is required".into()))?;

    let (draft, errors) = apply_to_blank(&patch);

    if id.is_nil() {
        return Err(ApiError::NotFound);
    }

    let changes = draft
        .into_changes(errors)
        .map_err(|errors| ApiError::validation(errors, Representation::negotiate(&headers)))?;

    if state.user_repository.find_by_id(id).await.is_none() {
        return Err(ApiError::NotFound);
    }

    state.user_repository.update(id, changes).await?;
    info!("Patched user {}", id);

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Delete a user by ID
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    if state.user_repository.find_by_id(id).await.is_none() {
        return Err(ApiError::NotFound);
    }

    state.user_repository.delete(id).await;
    info!("Deleted user {}", id);

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Get one page of users, with pagination metadata in `X-Pagination`
pub async fn get_users(
    State(state): State<AppState>,
    host: Option<Host>,
    headers: HeaderMap,
    Query(query): Query<UsersQuery>,
) -> ApiResult<Response> {
    let page = state
        .user_repository
        .get_page(query.page_number(), query.page_size())
        .await;

    if page.is_empty() {
        return Err(ApiError::NotFound);
    }

    let representation = Representation::negotiate(&headers)?;

    let links = Links::new(host, &state);
    let metadata = PaginationHeader::for_page(&page, |number, size| links.users_page(number, size));
    let metadata = serde_json::to_string(&metadata).map_err(|e| {
        error!("Failed to encode pagination header: {}", e);
        ApiError::InternalServerError
    })?;

    let users: Vec<UserDto> = page.items().iter().map(UserDto::from).collect();
    let mut response =
        representation.render_list(StatusCode::OK, "ArrayOfUserDto", "UserDto", &users)?;
    response
        .headers_mut()
        .insert(PAGINATION_HEADER, header_value(&metadata)?);

    Ok(response)
}

/// Advertise the methods supported on the users collection
pub async fn options_for_users() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, "GET, POST, OPTIONS")])
}
