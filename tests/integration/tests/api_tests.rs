//! API Integration Tests
//!
//! The greeting, missing-configuration and unreachable-backend tests need no
//! external services. Live-backend tests additionally read
//! TEST_POSTGRES_URL, TEST_MYSQL_URL, TEST_REDIS_URL and TEST_MONGODB_URL and
//! skip when those are unset.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_text, live_target, unreachable_target, TestServer, SUCCESS_BODY, UNREACHABLE_PREFIX,
};
use probe_common::BackendTargets;
use probe_core::Backend;
use reqwest::StatusCode;

// ============================================================================
// Greeting Tests
// ============================================================================

#[tokio::test]
async fn test_greeting_echoes_path() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/foo").await.unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "Hello! you've requested /foo\n");
}

#[tokio::test]
async fn test_greeting_for_root() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/").await.unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "Hello! you've requested /\n");
}

#[tokio::test]
async fn test_greeting_for_deep_path() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/a/b/c").await.unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "Hello! you've requested /a/b/c\n");
}

// ============================================================================
// Missing Configuration Tests
// ============================================================================

#[tokio::test]
async fn test_mysql_without_target() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/mysql").await.unwrap();
    let body = assert_text(response, StatusCode::NOT_IMPLEMENTED).await.unwrap();
    assert_eq!(body, "no MYSQL_URL env var");
}

#[tokio::test]
async fn test_every_backend_without_target() {
    let server = TestServer::start().await.expect("Failed to start server");

    for backend in Backend::ALL {
        let response = server.get(backend.path()).await.unwrap();
        let body = assert_text(response, StatusCode::NOT_IMPLEMENTED)
            .await
            .unwrap();
        assert_eq!(body, format!("no {} env var", backend.env_var()));
    }
}

#[tokio::test]
async fn test_probe_accepts_post() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/redis").await.unwrap();
    let body = assert_text(response, StatusCode::NOT_IMPLEMENTED).await.unwrap();
    assert_eq!(body, "no REDIS_URL env var");
}

// ============================================================================
// Unreachable Backend Tests
// ============================================================================

async fn assert_unreachable(backend: Backend) {
    let targets = BackendTargets::default().with(backend, unreachable_target(backend));
    let server = TestServer::start_with_targets(targets)
        .await
        .expect("Failed to start server");

    let response = server.get(backend.path()).await.unwrap();
    let body = assert_text(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert!(body.starts_with(UNREACHABLE_PREFIX), "{backend}: {body}");
    assert!(body.len() > UNREACHABLE_PREFIX.len(), "{backend}: missing driver error");
}

#[tokio::test]
async fn test_redis_unreachable() {
    assert_unreachable(Backend::Redis).await;
}

#[tokio::test]
async fn test_postgres_unreachable() {
    assert_unreachable(Backend::Postgres).await;
}

#[tokio::test]
async fn test_mysql_unreachable() {
    assert_unreachable(Backend::MySql).await;
}

#[tokio::test]
async fn test_mongo_unreachable() {
    assert_unreachable(Backend::Mongo).await;
}

#[tokio::test]
async fn test_invalid_target_is_a_connectivity_failure() {
    let targets = BackendTargets::default().with(Backend::Postgres, "definitely not a url");
    let server = TestServer::start_with_targets(targets)
        .await
        .expect("Failed to start server");

    let response = server.get("/postgres").await.unwrap();
    let body = assert_text(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert!(body.starts_with(UNREACHABLE_PREFIX), "{body}");
}

// ============================================================================
// Live Backend Tests
// ============================================================================

async fn assert_reachable(backend: Backend) {
    let Some(target) = live_target(backend) else {
        return;
    };

    let server = TestServer::start_with_targets(BackendTargets::default().with(backend, target))
        .await
        .expect("Failed to start server");

    let response = server.get(backend.path()).await.unwrap();
    let body = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, SUCCESS_BODY);
}

#[tokio::test]
async fn test_postgres_reachable() {
    assert_reachable(Backend::Postgres).await;
}

#[tokio::test]
async fn test_mysql_reachable() {
    assert_reachable(Backend::MySql).await;
}

#[tokio::test]
async fn test_redis_reachable() {
    assert_reachable(Backend::Redis).await;
}

#[tokio::test]
async fn test_mongo_reachable() {
    assert_reachable(Backend::Mongo).await;
}

#[tokio::test]
async fn test_repeated_probes_are_independent() {
    let Some(target) = live_target(Backend::Redis) else {
        return;
    };

    let server =
        TestServer::start_with_targets(BackendTargets::default().with(Backend::Redis, target))
            .await
            .expect("Failed to start server");

    for _ in 0..3 {
        let response = server.get("/redis").await.unwrap();
        let body = assert_text(response, StatusCode::OK).await.unwrap();
        assert_eq!(body, SUCCESS_BODY);
    }
}
