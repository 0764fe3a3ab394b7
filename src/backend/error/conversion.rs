/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers and middleware can return it
 * directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 401
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
