#![allow(dead_code)]

use axum::extract::ConnectInfo;
use base64::Engine as _;
use chrono::Utc;
use phishsim::state::AppState;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;

pub const TEST_ADMIN_USER: &str = "admin";
pub const TEST_ADMIN_PASS: &str = "test-password";
pub const TEST_BASE_URL: &str = "http://phish.test";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(pool),
        TEST_BASE_URL.to_string(),
        TEST_ADMIN_USER.to_string(),
        TEST_ADMIN_PASS.to_string(),
    )
}

pub fn basic_auth() -> String {
    basic_auth_for(TEST_ADMIN_USER, TEST_ADMIN_PASS)
}

pub fn basic_auth_for(user: &str, pass: &str) -> String {
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(format!("{user}:{pass}"))
    )
}

pub async fn create_test_campaign(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO campaigns (name, description, email_subject, email_html, created_at)
        VALUES (?, NULL, 'Security Check', '<p>Test</p>', ?)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_target(
    pool: &SqlitePool,
    campaign_id: i64,
    email: &str,
    token: &str,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO targets (campaign_id, name, email, token, created_at)
        VALUES (?, NULL, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(campaign_id)
    .bind(email)
    .bind(token)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_click(pool: &SqlitePool, target_id: i64) {
    sqlx::query("INSERT INTO clicks (target_id, clicked_at, ip, user_agent) VALUES (?, ?, NULL, NULL)")
        .bind(target_id)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_targets(pool: &SqlitePool, campaign_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM targets WHERE campaign_id = ?")
        .bind(campaign_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_clicks(pool: &SqlitePool, target_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clicks WHERE target_id = ?")
        .bind(target_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_all_clicks(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clicks")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn target_tokens(pool: &SqlitePool, campaign_id: i64) -> Vec<String> {
    sqlx::query_scalar::<_, String>(
        "SELECT token FROM targets WHERE campaign_id = ? ORDER BY id ASC",
    )
    .bind(campaign_id)
    .fetch_all(pool)
    .await
    .unwrap()
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// `TestServer` without a real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
