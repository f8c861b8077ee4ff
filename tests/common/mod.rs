//! Shared test fixtures for the storefront SDK integration tests.
//!
//! Provides `start_fake_api()` which serves a small sample catalog over HTTP
//! from a local axum server, shaped like the public storefront API: unknown
//! product ids answer 200 with an empty body, and writes echo their payload
//! without persisting it.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use storefront_sdk::StorefrontSdk;

pub const USERNAME: &str = "johnd";
pub const PASSWORD: &str = "m38rmF$";
pub const TOKEN: &str = "fake-jwt-token";
/// A user whose login succeeds without a token in the body.
pub const TOKENLESS_USER: &str = "tokenless";
/// Id the server assigns to every created product.
pub const CREATED_ID: i64 = 21;

/// Mutable server state, inspectable from tests.
#[derive(Debug, Default)]
pub struct ApiState {
    pub products: Vec<Value>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    /// `(method, path)` of every request, in arrival order.
    pub requests: Vec<(String, String)>,
    /// Body of the last POST or PUT.
    pub last_body: Option<Value>,
}

type Shared = Arc<Mutex<ApiState>>;

pub struct FakeApi {
    pub base_url: String,
    pub state: Shared,
}

impl FakeApi {
    /// An SDK pointed at this server with an in-memory session.
    pub fn sdk(&self) -> StorefrontSdk {
        StorefrontSdk::builder()
            .base_url(&self.base_url)
            .in_memory_session()
            .build()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_writes = fail;
    }

    pub fn last_body(&self) -> Option<Value> {
        self.state.lock().unwrap().last_body.clone()
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().requests.clone()
    }
}

pub fn sample_products() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://img.example/1.jpg",
            "rating": {"rate": 3.9, "count": 120}
        }),
        json!({
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "description": "Slim-fitting style, contrast raglan long sleeve.",
            "category": "men's clothing",
            "image": "https://img.example/2.jpg",
            "rating": {"rate": 4.1, "count": 259}
        }),
        json!({
            "id": 3,
            "title": "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet",
            "price": 695,
            "description": "From our Legends Collection.",
            "category": "jewelery",
            "image": "https://img.example/3.jpg"
        }),
        json!({
            "id": 4,
            "title": "WD 2TB Elements Portable External Hard Drive",
            "price": 64,
            "description": "USB 3.0 and USB 2.0 compatibility.",
            "category": "electronics",
            "image": "https://img.example/4.jpg"
        }),
        json!({
            "id": 5,
            "title": "Opna Women's Short Sleeve Moisture",
            "price": 7.95,
            "description": "100% Polyester, machine wash.",
            "category": "Women's Clothing",
            "image": "https://img.example/5.jpg"
        }),
        // partial record: accepted as-is
        json!({"id": 6, "title": "Mystery Box"}),
    ]
}

/// Route SDK logs to the test writer. Set `RUST_LOG=storefront_sdk=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Start the fake API on an ephemeral port in a background thread.
pub fn start_fake_api() -> FakeApi {
    init_tracing();
    let state: Shared = Arc::new(Mutex::new(ApiState {
        products: sample_products(),
        ..Default::default()
    }));

    let app = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/auth/login", post(login))
        .with_state(state.clone());

    let (tx, rx) = std::sync::mpsc::channel::<SocketAddr>();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    let addr = rx.recv().unwrap();

    FakeApi {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// Base URL where nothing listens.
pub fn unreachable_base_url() -> String {
    // bind and drop to get a free port
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn record(state: &Shared, method: &str, path: String) {
    state
        .lock()
        .unwrap()
        .requests
        .push((method.to_string(), path));
}

async fn list_products(State(state): State<Shared>) -> Response {
    record(&state, "GET", "/products".into());
    let s = state.lock().unwrap();
    if s.fail_reads {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(Value::Array(s.products.clone())).into_response()
}

async fn get_product(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    record(&state, "GET", format!("/products/{}", id));
    let s = state.lock().unwrap();
    if s.fail_reads {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    match s.products.iter().find(|p| p["id"] == id) {
        Some(p) => Json(p.clone()).into_response(),
        None => (StatusCode::OK, "").into_response(),
    }
}

async fn create_product(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    record(&state, "POST", "/products".into());
    let mut s = state.lock().unwrap();
    s.last_body = Some(body.clone());
    if s.fail_writes {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let mut echo = body;
    echo["id"] = json!(CREATED_ID);
    Json(echo).into_response()
}

async fn update_product(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    record(&state, "PUT", format!("/products/{}", id));
    let mut s = state.lock().unwrap();
    s.last_body = Some(body.clone());
    if s.fail_writes {
        return StatusCode::BAD_REQUEST.into_response();
    }
    let mut echo = body;
    echo["id"] = json!(id);
    Json(echo).into_response()
}

async fn delete_product(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    record(&state, "DELETE", format!("/products/{}", id));
    let s = state.lock().unwrap();
    if s.fail_writes {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let found = s.products.iter().find(|p| p["id"] == id).cloned();
    Json(found.unwrap_or(Value::Null)).into_response()
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    record(&state, "POST", "/auth/login".into());
    let username = body["username"].as_str().unwrap_or("");
    let password = body["password"].as_str().unwrap_or("");
    if username == TOKENLESS_USER {
        return Json(json!({})).into_response();
    }
    if username == USERNAME && password == PASSWORD {
        Json(json!({ "token": TOKEN })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "username or password is incorrect").into_response()
    }
}
