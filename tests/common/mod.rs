#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

/*-------------------------------------------------------------------------------------------------
  Mock Announced-Prefixes Registry
-------------------------------------------------------------------------------------------------*/

const DATA_CALL_PATH: &str = "/data/announced-prefixes/data.json";

/// Canned response for one `resource` (AS number).
#[derive(Clone, Debug)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}

impl Response {
    pub fn prefixes(prefixes: &[&str]) -> Self {
        Self {
            status: StatusCode::OK,
            body: announced_prefixes_json(prefixes),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        }
    }
}

/// Query parameters of one request received by the registry.
#[derive(Clone, Debug, Deserialize)]
pub struct RegistryRequest {
    pub resource: Option<String>,
    pub starttime: Option<String>,
}

#[derive(Clone)]
struct RegistryState {
    routes: Arc<HashMap<String, Response>>,
    requests: Arc<Mutex<Vec<RegistryRequest>>>,
}

/// Announced-prefixes data call served by axum on a loopback port. The server runs on its
/// own runtime thread so both sync and async tests can use it. Unknown resources get a 404.
pub struct MockRegistry {
    address: SocketAddr,
    requests: Arc<Mutex<Vec<RegistryRequest>>>,
}

impl MockRegistry {
    pub fn start(routes: &[(u32, Response)]) -> Self {
        let state = RegistryState {
            routes: Arc::new(
                routes
                    .iter()
                    .map(|(as_number, response)| (as_number.to_string(), response.clone()))
                    .collect(),
            ),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = Arc::clone(&state.requests);

        let app = Router::new()
            .route(DATA_CALL_PATH, get(announced_prefixes))
            .with_state(state);

        let (address_sender, address_receiver) = mpsc::channel();
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                address_sender.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });
        let address = address_receiver.recv().unwrap();

        Self { address, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}{}", self.address, DATA_CALL_PATH)
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RegistryRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn announced_prefixes(
    State(state): State<RegistryState>,
    Query(request): Query<RegistryRequest>,
) -> impl IntoResponse {
    let response = request
        .resource
        .as_ref()
        .and_then(|resource| state.routes.get(resource).cloned())
        .unwrap_or_else(|| Response::status(404, "Not Found"));

    state.requests.lock().unwrap().push(request);

    (
        response.status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
}

/// URL of a loopback port with nothing listening on it.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", address, DATA_CALL_PATH)
}

/*-------------------------------------------------------------------------------------------------
  Response Bodies
-------------------------------------------------------------------------------------------------*/

pub fn announced_prefixes_json(prefixes: &[&str]) -> String {
    let prefixes: Vec<serde_json::Value> = prefixes
        .iter()
        .map(|prefix| serde_json::json!({ "prefix": prefix, "timelines": [] }))
        .collect();

    serde_json::json!({
        "status": "ok",
        "data": { "prefixes": prefixes, "resource": "test" }
    })
    .to_string()
}
