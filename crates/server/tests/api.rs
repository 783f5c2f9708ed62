//! HTTP surface tests
//!
//! Handlers are driven through the router's response path so status codes and
//! JSON bodies are checked exactly as a client would see them.

use axum::body::to_bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use rust_decimal_macros::dec;
use serde_json::Value;
use tierbank_core::{Balance, RateTier, RateTierResolver, Tier, TierSchedule};
use tierbank_server::handler::{self, RateQuery};
use tierbank_config::ConfigLoader;
use tierbank_server::AppState;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_is_up() {
    let response = handler::health().await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "status": "UP" }));
}

#[tokio::test]
async fn test_rate_lookup() {
    let response = handler::rate(
        State(AppState::default()),
        Query(RateQuery {
            balance: dec!(1500),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["balance"], "1500");
    assert_eq!(body["rate"], "0.015");
    assert_eq!(body["percent"], "1.5");
}

#[tokio::test]
async fn test_rate_boundaries() {
    let state = AppState::default();
    for (balance, expected) in [
        (dec!(999.99), RateTier::BASIC),
        (dec!(1000), RateTier::SILVER),
        (dec!(9999.99), RateTier::SILVER),
        (dec!(10000), RateTier::GOLD),
    ] {
        let json = handler::rate(State(state.clone()), Query(RateQuery { balance }))
            .await
            .unwrap();
        assert_eq!(json.0.rate, expected, "balance {balance}");
    }
}

#[tokio::test]
async fn test_negative_balance_is_bad_request() {
    let response = handler::rate(
        State(AppState::default()),
        Query(RateQuery { balance: dec!(-1) }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid argument"));
}

#[tokio::test]
async fn test_tiers_reflect_custom_schedule() {
    let schedule = TierSchedule::new(vec![
        Tier::new(Balance::ZERO, RateTier::new(dec!(0.001)).unwrap()),
        Tier::new(Balance::new(dec!(100)).unwrap(), RateTier::new(dec!(0.04)).unwrap()),
    ])
    .unwrap();
    let state = AppState::with_resolver(RateTierResolver::with_schedule(schedule));

    let response = handler::tiers(State(state)).await.into_response();
    let body = body_json(response).await;
    assert_eq!(
        body,
        serde_json::json!([
            { "min_balance": "0", "rate": "0.001" },
            { "min_balance": "100", "rate": "0.04" }
        ])
    );
}

async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_router_over_tcp() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, tierbank_server::app(AppState::default()))
            .await
            .unwrap();
    });

    let health = raw_get(addr, "/health").await;
    assert!(health.starts_with("HTTP/1.1 200"));
    assert!(health.contains(r#"{"status":"UP"}"#));

    let rate = raw_get(addr, "/api/rate?balance=10000").await;
    assert!(rate.starts_with("HTTP/1.1 200"));
    assert!(rate.contains(r#""rate":"0.02""#));

    let negative = raw_get(addr, "/api/rate?balance=-1").await;
    assert!(negative.starts_with("HTTP/1.1 400"));

    let missing = raw_get(addr, "/api/rate").await;
    assert!(missing.starts_with("HTTP/1.1 400"));
}

const LOW_TIERS: &str = r#"
[[tiers]]
min_balance = "0"
rate = "0.001"

[[tiers]]
min_balance = "100"
rate = "0.04"
"#;

async fn rate_of(state: &AppState, balance: rust_decimal::Decimal) -> RateTier {
    handler::rate(State(state.clone()), Query(RateQuery { balance }))
        .await
        .unwrap()
        .0
        .rate
}

#[tokio::test]
async fn test_reload_swaps_schedule() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "").unwrap();
    let state = AppState::new(ConfigLoader::load_file(file.path()).unwrap()).unwrap();
    assert_eq!(rate_of(&state, dec!(500)).await, RateTier::BASIC);

    std::fs::write(file.path(), LOW_TIERS).unwrap();
    let response = handler::reload(State(state.clone())).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    assert_eq!(rate_of(&state, dec!(500)).await.fraction(), dec!(0.04));
    assert_eq!(rate_of(&state, dec!(99)).await.fraction(), dec!(0.001));
}

#[tokio::test]
async fn test_failed_reload_keeps_current_schedule() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), LOW_TIERS).unwrap();
    let state = AppState::new(ConfigLoader::load_file(file.path()).unwrap()).unwrap();

    // does not start at zero
    std::fs::write(file.path(), "[[tiers]]\nmin_balance = \"5\"\nrate = \"0.01\"\n").unwrap();
    let response = handler::reload(State(state.clone())).await.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(rate_of(&state, dec!(500)).await.fraction(), dec!(0.04));
}

#[tokio::test]
async fn test_reload_without_config_file() {
    let response = handler::reload(State(AppState::default())).await.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(rate_of(&AppState::default(), dec!(1000)).await, RateTier::SILVER);
}

#[tokio::test]
async fn test_reload_route_over_tcp() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "").unwrap();
    let state = AppState::new(ConfigLoader::load_file(file.path()).unwrap()).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, tierbank_server::app(state)).await.unwrap();
    });

    std::fs::write(file.path(), LOW_TIERS).unwrap();
    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"POST /admin/reload HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    assert!(response.starts_with("HTTP/1.1 200"));

    let rate = raw_get(addr, "/api/rate?balance=500").await;
    assert!(rate.contains(r#""rate":"0.04""#));
}
