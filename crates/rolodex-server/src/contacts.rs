//! CRUD handlers for the contacts resource

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use http::StatusCode;
use rolodex_core::ApiError;
use rolodex_store::{Collection, Contact};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{classify_store_error, error_response};

/// Build the contacts router
pub(crate) fn router(contacts: Collection<Contact>) -> Router {
    Router::new()
        .route("/api/contacts", routing::get(list_contacts).post(create_contact))
        .route(
            "/api/contacts/{id}",
            routing::get(get_contact).put(update_contact).delete(delete_contact),
        )
        .with_state(contacts)
}

/// Create/update payload; all fields are required but arrive optional so
/// a missing field surfaces as a classified validation failure instead of
/// a deserialization rejection
#[derive(Debug, Deserialize)]
struct ContactPayload {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl ContactPayload {
    fn into_fields(self) -> Result<(String, String, String), ApiError> {
        match (self.name, self.email, self.phone) {
            (Some(name), Some(email), Some(phone)) => Ok((name, email, phone)),
            _ => Err(ApiError::validation("name, email and phone are all mandatory")),
        }
    }
}

/// Handle `GET /api/contacts`
async fn list_contacts(State(contacts): State<Collection<Contact>>) -> Response {
    Json(contacts.list()).into_response()
}

/// Handle `POST /api/contacts`
async fn create_contact(
    State(contacts): State<Collection<Contact>>,
    Json(payload): Json<ContactPayload>,
) -> Response {
    match payload.into_fields() {
        Ok((name, email, phone)) => {
            let contact = Contact {
                id: Uuid::new_v4(),
                name,
                email,
                phone,
            };
            contacts.insert(contact.id, contact.clone());
            tracing::debug!(id = %contact.id, "contact created");
            (StatusCode::CREATED, Json(contact)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// Handle `GET /api/contacts/{id}`
async fn get_contact(
    State(contacts): State<Collection<Contact>>,
    Path(id): Path<Uuid>,
) -> Response {
    match contacts.get(id) {
        Ok(contact) => Json(contact).into_response(),
        Err(e) => error_response(&classify_store_error(&e)),
    }
}

/// Handle `PUT /api/contacts/{id}`
async fn update_contact(
    State(contacts): State<Collection<Contact>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ContactPayload>,
) -> Response {
    let (name, email, phone) = match payload.into_fields() {
        Ok(fields) => fields,
        Err(e) => return error_response(&e),
    };

    let contact = Contact { id, name, email, phone };
    match contacts.replace(id, contact.clone()) {
        Ok(()) => Json(contact).into_response(),
        Err(e) => error_response(&classify_store_error(&e)),
    }
}

/// Handle `DELETE /api/contacts/{id}`
async fn delete_contact(
    State(contacts): State<Collection<Contact>>,
    Path(id): Path<Uuid>,
) -> Response {
    match contacts.remove(id) {
        Ok(contact) => Json(contact).into_response(),
        Err(e) => error_response(&classify_store_error(&e)),
    }
}
