//! Best-effort client address resolution.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Resolves the client IP for click metadata.
///
/// Prefers the first entry of `X-Forwarded-For` when present (the value a
/// reverse proxy reports for the original client), falling back to the peer
/// socket address. The value is best-effort and stored as free text.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| peer.ip().to_string())
}
