mod common;

use chrono::Utc;
use linkpulse::infrastructure::cache::CacheService;

#[tokio::test]
async fn test_redirect_success() {
    let ctx = common::create_test_state();
    common::seed_link(
        &ctx.link_repo,
        "redirect1",
        "https://example.com/target",
        "u1",
        Utc::now(),
    );
    let server = common::test_server(ctx.state);

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let ctx = common::create_test_state();
    let server = common::test_server(ctx.state);

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_records_click_with_metadata() {
    let mut ctx = common::create_test_state();
    common::seed_link(
        &ctx.link_repo,
        "tracked1",
        "https://example.com/t",
        "u1",
        Utc::now(),
    );
    let server = common::test_server(ctx.state);

    server
        .get("/tracked1")
        .add_header("User-Agent", "integration-test/1.0")
        .add_header("Referer", "https://news.example/")
        .await
        .assert_status(axum::http::StatusCode::TEMPORARY_REDIRECT);

    let event = ctx.click_rx.recv().await.unwrap();
    assert_eq!(event.code, "tracked1");
    assert_eq!(event.user_agent.as_deref(), Some("integration-test/1.0"));
    assert_eq!(event.referer.as_deref(), Some("https://news.example/"));
    assert!(event.latency_ms >= 0.0);
}

#[tokio::test]
async fn test_redirect_unknown_code_sends_no_click() {
    let mut ctx = common::create_test_state();
    let server = common::test_server(ctx.state);

    server.get("/ghost123").await.assert_status_not_found();

    assert!(ctx.click_rx.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_populates_cache_on_first_access() {
    let ctx = common::create_test_state();
    common::seed_link(
        &ctx.link_repo,
        "cached12",
        "https://example.com/c",
        "u1",
        Utc::now(),
    );
    let cache = ctx.cache.clone();
    let server = common::test_server(ctx.state);

    // Nothing cached at creation time.
    assert_eq!(cache.stats().hits, 0);

    server.get("/cached12").await; // miss, populates
    server.get("/cached12").await; // hit

    let stats = cache.stats();
    assert_eq!(stats.requests, 2);
    assert_eq!(stats.hits, 1);
}

#[tokio::test]
async fn test_redirect_not_found_does_not_cache_negative_result() {
    let ctx = common::create_test_state();
    let cache = ctx.cache.clone();
    let link_repo = ctx.link_repo.clone();
    let server = common::test_server(ctx.state);

    server.get("/latecode").await.assert_status_not_found();

    // Creating the link afterwards must make it resolvable: the earlier
    // not-found was never cached.
    common::seed_link(
        &link_repo,
        "latecode",
        "https://example.com/late",
        "u1",
        Utc::now(),
    );

    let response = server.get("/latecode").await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/late");

    // First call was a miss, second was a store-backed miss as well.
    assert_eq!(cache.stats().hits, 0);
}
