mod common;

use quaver_client::{HttpClient, Method, Params, QuaverError, Route};
use serde_json::json;

#[tokio::test]
async fn ok_response_body_is_returned_as_json() {
    let api = common::spawn().await;
    let client = HttpClient::new(api.config(), None);

    let body = client.make_request(&Route::get("/stats")).await.unwrap();

    assert_eq!(body, json!({ "path": "/v1/stats", "query": [] }));
}

#[tokio::test]
async fn status_500_is_api_down() {
    let api = common::spawn().await;
    let client = HttpClient::new(api.config(), None);

    let err = client.make_request(&Route::get("/down")).await.unwrap_err();

    assert!(matches!(err, QuaverError::ApiDown), "got {err:?}");
}

#[tokio::test]
async fn other_failures_keep_status_and_reason() {
    let api = common::spawn().await;
    let client = HttpClient::new(api.config(), None);

    match client.make_request(&Route::get("/missing")).await {
        Err(QuaverError::Status { status, reason }) => {
            assert_eq!(status, 404);
            assert_eq!(reason, "Not Found");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let err = client.make_request(&Route::get("/teapot")).await.unwrap_err();
    assert_eq!(err.to_string(), "418 I'm a teapot");
}

#[tokio::test]
async fn repeated_query_keys_reach_the_server() {
    let api = common::spawn().await;
    let client = HttpClient::new(api.config(), None);
    let params = Params::new()
        .with("name", "alice")
        .with("id", 42)
        .with("name", "bob");

    let body = client
        .make_request(&Route::create("/users", Method::Get, Some(params)))
        .await
        .unwrap();

    assert_eq!(
        body["query"],
        json!([["name", "alice"], ["id", "42"], ["name", "bob"]])
    );
    assert_eq!(api.state.requests(), ["/v1/users?name=alice&id=42&name=bob"]);
}

#[tokio::test]
async fn injected_session_is_used_and_closed_once() {
    let api = common::spawn().await;
    let client = HttpClient::new(api.config(), Some(reqwest::Client::new()));

    client.make_request(&Route::get("/stats")).await.unwrap();

    assert!(client.close());
    assert!(!client.close());
    assert!(matches!(
        client.make_request(&Route::get("/stats")).await,
        Err(QuaverError::Closed)
    ));
}

#[tokio::test]
async fn lazy_session_serves_concurrent_requests() {
    let api = common::spawn().await;
    let client = HttpClient::new(api.config(), None);
    let route = Route::get("/stats");

    let (a, b) = tokio::join!(client.make_request(&route), client.make_request(&route));

    assert!(a.is_ok() && b.is_ok());
    assert_eq!(api.state.requests().len(), 2);
    assert!(client.close());
}
