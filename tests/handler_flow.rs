mod common;

use axum::routing::{get, post};
use axum::{Router, middleware};
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use phishsim::api::handlers::{
    campaign_stats_handler, create_campaign_handler, export_campaign_handler, track_handler,
    upload_targets_handler,
};
use phishsim::api::middleware::auth;
use sqlx::SqlitePool;

fn full_app(state: phishsim::AppState) -> Router {
    let admin_routes = Router::new()
        .route("/campaign/create", post(create_campaign_handler))
        .route("/campaign/{id}/upload", post(upload_targets_handler))
        .route("/campaign/{id}/export", get(export_campaign_handler))
        .route("/campaign/{id}/stats", get(campaign_stats_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/t/{token}", get(track_handler))
        .merge(admin_routes)
        .layer(common::MockConnectInfoLayer)
        .with_state(state)
}

#[sqlx::test]
async fn test_campaign_report_reflects_recorded_clicks(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(full_app(state)).unwrap();

    // Create the campaign
    let response = server
        .post("/campaign/create")
        .add_header("Authorization", common::basic_auth())
        .form(&[
            ("name", "Q1 Awareness"),
            ("email_subject", "Security Check"),
            ("email_html", "<p>Test</p>"),
        ])
        .await;
    assert_eq!(response.status_code(), 201);
    let campaign_id = response.json::<serde_json::Value>()["id"].as_i64().unwrap();

    // Import two recipients
    let form = MultipartForm::new().add_part(
        "targets_csv",
        Part::bytes(b"email,name\na@x.com,Alice\nb@x.com,\n".to_vec())
            .file_name("targets.csv")
            .mime_type("text/csv"),
    );
    let response = server
        .post(&format!("/campaign/{campaign_id}/upload"))
        .add_header("Authorization", common::basic_auth())
        .multipart(form)
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["imported"], 2);

    let tokens = common::target_tokens(&pool, campaign_id).await;
    assert_eq!(tokens.len(), 2);
    assert_ne!(tokens[0], tokens[1]);
    let (token_a, token_b) = (&tokens[0], &tokens[1]);

    // Alice clicks twice, the second target once
    for token in [token_a, token_a, token_b] {
        let response = server.get(&format!("/t/{token}")).await;
        response.assert_status_ok();
        assert!(response.text().contains("Q1 Awareness"));
    }

    // The exported report joins recipients to their click counts
    let response = server
        .get(&format!("/campaign/{campaign_id}/export"))
        .add_header("Authorization", common::basic_auth())
        .await;
    response.assert_status_ok();

    let text = response.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);

    let row_a: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(row_a[1], "Q1 Awareness");
    assert_eq!(row_a[3], "Alice");
    assert_eq!(row_a[4], "a@x.com");
    assert_eq!(row_a[5], token_a.as_str());
    assert_eq!(row_a[6], "2");
    assert_eq!(row_a[7], format!("{}/t/{token_a}", common::TEST_BASE_URL));

    let row_b: Vec<&str> = lines[2].split(',').collect();
    assert_eq!(row_b[3], "");
    assert_eq!(row_b[4], "b@x.com");
    assert_eq!(row_b[6], "1");
    assert_eq!(row_b[7], format!("{}/t/{token_b}", common::TEST_BASE_URL));

    // And the aggregate view agrees: 3 clicks over 2 targets
    let response = server
        .get(&format!("/campaign/{campaign_id}/stats"))
        .add_header("Authorization", common::basic_auth())
        .await;
    response.assert_status_ok();
    let stats: serde_json::Value = response.json();
    assert_eq!(stats["targets"], 2);
    assert_eq!(stats["clicks"], 3);
    assert_eq!(stats["click_rate"], 150.0);
}
