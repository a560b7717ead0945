//! Basic authentication middleware for operator routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates operator requests using HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(username:password)
/// ```
///
/// Credentials are validated by
/// [`crate::application::services::AuthService`] against injected
/// configuration values; no credential state lives in the database.
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Basic`) if:
/// - The Authorization header is missing or malformed
/// - The username or password does not match
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let req = Request::from_parts(parts, body);

    st.auth_service
        .verify(&username, password.as_deref().unwrap_or_default())?;

    Ok(next.run(req).await)
}
