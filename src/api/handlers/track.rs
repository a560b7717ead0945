//! Handler for the public tracking endpoint.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Template for the educational notice shown after a recorded visit.
///
/// Renders `templates/notice.html` with the campaign name and the
/// recording timestamp. The page is static and collects nothing.
#[derive(Template, WebTemplate)]
#[template(path = "notice.html")]
struct NoticeTemplate {
    campaign_name: String,
    recorded_at: String,
}

/// Records a tracking-link visit and shows the awareness notice.
///
/// # Endpoint
///
/// `GET /t/{token}` - public, unauthenticated.
///
/// # Request Flow
///
/// 1. Resolve client IP (X-Forwarded-For preferred) and user agent
/// 2. Look up the target by exact token, joined with its campaign
/// 3. Append one click row; every visit counts, repeats included
/// 4. Render the notice page
///
/// # Errors
///
/// An unknown token returns 404 with the literal body `Invalid token.` and
/// records nothing. Storage failures surface as a plain 500; there is no
/// retry on this path.
pub async fn track_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Response {
    let ip = client_ip(&headers, addr);
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    match state
        .tracking_service
        .record_visit(&token, Some(ip), user_agent)
        .await
    {
        Ok(visit) => NoticeTemplate {
            campaign_name: visit.campaign_name,
            recorded_at: visit.clicked_at.to_rfc3339(),
        }
        .into_response(),
        Err(AppError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, "Invalid token.").into_response()
        }
        Err(e) => e.into_response(),
    }
}
