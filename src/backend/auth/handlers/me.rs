/**
 * Current Identity Handler
 *
 * GET /api/me echoes the identity the access guard bound to this request.
 * It never touches the credential store: the token alone is the proof.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {"user_id": 1, "login": "alice"}
/// ```
pub async fn get_me(AuthUser(user): AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: user.user_id,
        login: user.login,
    })
}
