//! User endpoints
//!
//! - `GET    /api/users`       list every user
//! - `POST   /api/users`       create, 201 with the assigned id
//! - `GET    /api/users/{id}`  fetch one
//! - `PUT    /api/users/{id}`  merge supplied fields and save
//! - `DELETE /api/users/{id}`  remove, 204

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{decode_json, JsonBody, RawBody, UserId};
use crate::models::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::state::AppState;

/// GET /api/users - list all users
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state
        .store()
        .list_all()
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to retrieve users"))?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /api/users - create a new user
async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let new_user = req.validate()?;
    let user = state
        .store()
        .insert(new_user)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to create user"))?;

    tracing::info!(id = user.id, "created user");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /api/users/{id} - get a single user
async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .store()
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to retrieve user"))?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/users/{id} - update name and/or email
///
/// The body is read raw and decoded only after the lookup, so an unknown
/// id is reported as 404 even when the body is not valid JSON.
async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    RawBody(body): RawBody,
) -> Result<Json<UserResponse>, ApiError> {
    let store = state.store();
    let mut user = store
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to retrieve user"))?;

    let req: UpdateUserRequest = decode_json(&body)?;
    let changes = req.validate()?;
    changes.apply(&mut user);

    let user = store
        .update(&user)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to update user"))?;

    tracing::info!(id = user.id, "updated user");
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/users/{id} - delete a user
async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<StatusCode, ApiError> {
    state
        .store()
        .delete_by_id(id)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to delete user"))?;

    tracing::info!(id, "deleted user");
    Ok(StatusCode::NO_CONTENT)
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
