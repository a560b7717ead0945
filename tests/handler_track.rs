mod common;

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use phishsim::api::handlers::track_handler;
use sqlx::SqlitePool;

fn track_app(state: phishsim::AppState) -> Router {
    Router::new()
        .route("/t/{token}", get(track_handler))
        .layer(common::MockConnectInfoLayer)
        .with_state(state)
}

#[sqlx::test]
async fn test_visit_records_click_and_shows_notice(pool: SqlitePool) {
    let campaign_id = common::create_test_campaign(&pool, "Q1 Awareness").await;
    let target_id = common::create_test_target(&pool, campaign_id, "a@x.com", "tok-visit").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(track_app(state)).unwrap();

    let response = server
        .get("/t/tok-visit")
        .add_header("User-Agent", "TestBot/1.0")
        .await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("Q1 Awareness"));

    assert_eq!(common::count_clicks(&pool, target_id).await, 1);

    let user_agent = sqlx::query_scalar::<_, Option<String>>(
        "SELECT user_agent FROM clicks WHERE target_id = ?",
    )
    .bind(target_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(user_agent.as_deref(), Some("TestBot/1.0"));
}

#[sqlx::test]
async fn test_repeat_visits_accumulate(pool: SqlitePool) {
    let campaign_id = common::create_test_campaign(&pool, "Q1 Awareness").await;
    let target_id = common::create_test_target(&pool, campaign_id, "a@x.com", "tok-repeat").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(track_app(state)).unwrap();

    for expected in 1..=3 {
        let response = server.get("/t/tok-repeat").await;
        response.assert_status_ok();
        assert_eq!(common::count_clicks(&pool, target_id).await, expected);
    }
}

#[sqlx::test]
async fn test_unknown_token_returns_404_and_records_nothing(pool: SqlitePool) {
    let campaign_id = common::create_test_campaign(&pool, "Q1 Awareness").await;
    common::create_test_target(&pool, campaign_id, "a@x.com", "tok-real").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(track_app(state)).unwrap();

    let response = server.get("/t/tok-bogus").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Invalid token.");
    assert_eq!(common::count_all_clicks(&pool).await, 0);
}

#[sqlx::test]
async fn test_click_ip_prefers_forwarded_for(pool: SqlitePool) {
    let campaign_id = common::create_test_campaign(&pool, "Q1 Awareness").await;
    let target_id = common::create_test_target(&pool, campaign_id, "a@x.com", "tok-xff").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(track_app(state)).unwrap();

    let response = server
        .get("/t/tok-xff")
        .add_header("X-Forwarded-For", "203.0.113.9, 198.51.100.2")
        .await;

    response.assert_status_ok();

    let ip = sqlx::query_scalar::<_, Option<String>>("SELECT ip FROM clicks WHERE target_id = ?")
        .bind(target_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(ip.as_deref(), Some("203.0.113.9"));
}

#[sqlx::test]
async fn test_click_ip_falls_back_to_peer_address(pool: SqlitePool) {
    let campaign_id = common::create_test_campaign(&pool, "Q1 Awareness").await;
    let target_id = common::create_test_target(&pool, campaign_id, "a@x.com", "tok-peer").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(track_app(state)).unwrap();

    let response = server.get("/t/tok-peer").await;

    response.assert_status_ok();

    let ip = sqlx::query_scalar::<_, Option<String>>("SELECT ip FROM clicks WHERE target_id = ?")
        .bind(target_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    // MockConnectInfoLayer pins the peer address
    assert_eq!(ip.as_deref(), Some("127.0.0.1"));
}

#[sqlx::test]
async fn test_long_user_agent_is_truncated(pool: SqlitePool) {
    let campaign_id = common::create_test_campaign(&pool, "Q1 Awareness").await;
    let target_id = common::create_test_target(&pool, campaign_id, "a@x.com", "tok-ua").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(track_app(state)).unwrap();

    let long_agent = "x".repeat(800);
    let response = server
        .get("/t/tok-ua")
        .add_header("User-Agent", long_agent)
        .await;

    response.assert_status_ok();

    let user_agent = sqlx::query_scalar::<_, Option<String>>(
        "SELECT user_agent FROM clicks WHERE target_id = ?",
    )
    .bind(target_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(user_agent.unwrap().len(), 500);
}
