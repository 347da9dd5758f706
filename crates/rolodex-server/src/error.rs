//! Terminal error-writing path
//!
//! Every failed request flows through [`error_response`], which performs
//! exactly one write: the classified JSON body when the status code maps
//! to a known kind, or a bare status line (logged for operators) when it
//! does not.

use axum::Json;
use axum::response::{IntoResponse, Response};
use rolodex_core::ApiError;
use rolodex_store::StoreError;

/// Write the single response for a failed request
pub(crate) fn error_response(err: &ApiError) -> Response {
    match err.body() {
        Some(body) => (err.status(), Json(body)).into_response(),
        None => {
            tracing::warn!(
                status = %err.status(),
                message = err.message(),
                "unclassified error, no response body written"
            );
            err.status().into_response()
        }
    }
}

/// Map a store failure to its classified kind
pub(crate) fn classify_store_error(err: &StoreError) -> ApiError {
    match err {
        StoreError::NotFound { .. } => ApiError::not_found(err.to_string()),
        StoreError::UnsupportedScheme { .. } => ApiError::internal(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use rolodex_core::ErrorBody;
    use uuid::Uuid;

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn classified_error_writes_one_json_body() {
        let err = ApiError::not_found("no such contact");
        let response = error_response(&err);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response
                .headers()
                .get(http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );

        let body: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.title, "Not Found");
        assert_eq!(body.message, "no such contact");
    }

    #[tokio::test]
    async fn each_classified_kind_writes_its_title_once() {
        let cases = [
            (ApiError::validation("v"), 400, "Validation Failed"),
            (ApiError::unauthorized("u"), 401, "Unauthorized"),
            (ApiError::forbidden("f"), 403, "forbidden"),
            (ApiError::not_found("n"), 404, "Not Found"),
            (ApiError::internal("i"), 500, "server error"),
        ];

        for (err, status, title) in cases {
            let response = error_response(&err);
            assert_eq!(response.status().as_u16(), status);

            // One well-formed JSON document, so exactly one body was written
            let raw = body_bytes(response).await;
            let body: ErrorBody = serde_json::from_slice(&raw).unwrap();
            assert_eq!(body.title, title);
        }
    }

    #[tokio::test]
    async fn unclassified_error_writes_no_body() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, "upstream broke");
        let response = error_response(&err);
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn validation_error_keeps_its_message() {
        let err = ApiError::validation("name, email and phone are all mandatory");
        let response = error_response(&err);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.title, "Validation Failed");
        assert_eq!(body.message, "name, email and phone are all mandatory");
    }

    #[test]
    fn missing_document_classifies_as_not_found() {
        let err = StoreError::NotFound {
            collection: "contacts",
            id: Uuid::new_v4(),
        };
        let classified = classify_store_error(&err);
        assert_eq!(classified.status(), StatusCode::NOT_FOUND);
        assert!(classified.message().contains("contacts"));
    }
}
