//! Local stand-in for the Quaver API used by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use quaver_client::{ClientConfig, Quaver};
use serde_json::{Value, json};

#[derive(Default)]
pub struct ServerState {
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    /// Path and query of every request, in arrival order.
    pub requests: Mutex<Vec<String>>,
}

impl ServerState {
    fn record(&self, uri: &Uri) {
        let line = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_default();
        self.requests.lock().unwrap().push(line);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn enter(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
    }

    fn leave(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct MockApi {
    pub base_url: String,
    pub state: Arc<ServerState>,
}

impl MockApi {
    pub fn quaver(&self) -> Quaver {
        Quaver::with_config(ClientConfig::default().with_base_url(&self.base_url), None)
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::default().with_base_url(&self.base_url)
    }
}

pub async fn spawn() -> MockApi {
    let state = Arc::new(ServerState::default());
    let app = Router::new()
        .route("/v1/users", get(users))
        .route("/v1/users/full/{key}", get(full_user))
        .route("/v1/users/search/{query}", get(search_user))
        .route("/v1/users/scores/{kind}", get(echo))
        .route("/v1/users/graph/rank", get(echo))
        .route("/v1/mapsets/maps/search", get(echo))
        .route("/v1/mapsets/ranked", get(echo))
        .route("/v1/mapsets/{id}", get(mapset))
        .route("/v1/stats", get(echo))
        .route("/v1/down", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/v1/teapot", get(|| async { StatusCode::IM_A_TEAPOT }))
        .fallback(fallback)
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{addr}/v1"),
        state,
    }
}

fn query_pairs(uri: &Uri) -> Vec<(String, String)> {
    url::form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
        .into_owned()
        .collect()
}

fn known_user_id(name: &str) -> Option<u64> {
    match name {
        "alice" => Some(1),
        "bob" => Some(2),
        _ => None,
    }
}

async fn echo(State(state): State<Arc<ServerState>>, uri: Uri) -> Json<Value> {
    state.record(&uri);
    Json(json!({ "path": uri.path(), "query": query_pairs(&uri) }))
}

/// Echo for every path without a dedicated route; `.../missing` is a 404.
async fn fallback(
    State(state): State<Arc<ServerState>>,
    uri: Uri,
) -> Result<Json<Value>, StatusCode> {
    state.record(&uri);
    if uri.path().ends_with("/missing") {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({ "path": uri.path(), "query": query_pairs(&uri) })))
}

async fn users(State(state): State<Arc<ServerState>>, uri: Uri) -> Json<Value> {
    state.record(&uri);
    let pairs = query_pairs(&uri);
    let users: Vec<Value> = pairs
        .iter()
        .filter_map(|(key, value)| match key.as_str() {
            // A malformed record: the lookup answers without an ID.
            "name" if value == "ghost" => Some(json!({ "username": value })),
            "name" => known_user_id(value).map(|id| json!({ "id": id, "username": value })),
            "id" => Some(json!({ "id": value.parse::<u64>().unwrap(), "username": format!("user{value}") })),
            _ => None,
        })
        .collect();
    Json(json!({ "status": 200, "users": users, "query": pairs }))
}

async fn full_user(
    State(state): State<Arc<ServerState>>,
    Path(key): Path<String>,
    uri: Uri,
) -> Result<Json<Value>, StatusCode> {
    state.record(&uri);
    state.enter();
    // The first requested profile answers last.
    let delay = if key == "alice" { 150 } else { 10 };
    tokio::time::sleep(Duration::from_millis(delay)).await;
    state.leave();

    if key == "broken" {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(json!({ "user": { "info": { "username": key } } })))
}

async fn search_user(
    State(state): State<Arc<ServerState>>,
    Path(query): Path<String>,
    uri: Uri,
) -> Json<Value> {
    state.record(&uri);
    let users: Vec<Value> = ["alice", "bob"]
        .into_iter()
        .filter(|name| name.contains(query.as_str()))
        .map(|name| json!({ "id": known_user_id(name), "username": name }))
        .collect();
    Json(json!({ "status": 200, "users": users }))
}

async fn mapset(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
    uri: Uri,
) -> Result<Json<Value>, StatusCode> {
    state.record(&uri);
    state.enter();
    tokio::time::sleep(Duration::from_millis(60 / (id + 1))).await;
    state.leave();

    if id == 0 {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(json!({ "mapset": { "id": id } })))
}
