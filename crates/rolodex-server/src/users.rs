//! CRUD handlers for the users resource

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use http::StatusCode;
use rolodex_core::ApiError;
use rolodex_store::{Collection, User};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{classify_store_error, error_response};

/// Build the users router
pub(crate) fn router(users: Collection<User>) -> Router {
    Router::new()
        .route("/api/users", routing::get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            routing::get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(users)
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    username: Option<String>,
    email: Option<String>,
}

impl UserPayload {
    fn into_fields(self) -> Result<(String, String), ApiError> {
        match (self.username, self.email) {
            (Some(username), Some(email)) => Ok((username, email)),
            _ => Err(ApiError::validation("username and email are mandatory")),
        }
    }
}

/// Handle `GET /api/users`
async fn list_users(State(users): State<Collection<User>>) -> Response {
    Json(users.list()).into_response()
}

/// Handle `POST /api/users`
async fn create_user(
    State(users): State<Collection<User>>,
    Json(payload): Json<UserPayload>,
) -> Response {
    match payload.into_fields() {
        Ok((username, email)) => {
            let user = User {
                id: Uuid::new_v4(),
                username,
                email,
            };
            users.insert(user.id, user.clone());
            tracing::debug!(id = %user.id, "user created");
            (StatusCode::CREATED, Json(user)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// Handle `GET /api/users/{id}`
async fn get_user(State(users): State<Collection<User>>, Path(id): Path<Uuid>) -> Response {
    match users.get(id) {
        Ok(user) => Json(user).into_response(),
        Err(e) => error_response(&classify_store_error(&e)),
    }
}

/// Handle `PUT /api/users/{id}`
async fn update_user(
    State(users): State<Collection<User>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UserPayload>,
) -> Response {
    let (username, email) = match payload.into_fields() {
        Ok(fields) => fields,
        Err(e) => return error_response(&e),
    };

    let user = User { id, username, email };
    match users.replace(id, user.clone()) {
        Ok(()) => Json(user).into_response(),
        Err(e) => error_response(&classify_store_error(&e)),
    }
}

/// Handle `DELETE /api/users/{id}`
async fn delete_user(State(users): State<Collection<User>>, Path(id): Path<Uuid>) -> Response {
    match users.remove(id) {
        Ok(user) => Json(user).into_response(),
        Err(e) => error_response(&classify_store_error(&e)),
    }
}
