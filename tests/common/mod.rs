//! Shared test fixtures for the storefront SDK integration tests.
//!
//! Provides `TestServer`, an in-process axum storefront serving a small
//! fixed catalog on an ephemeral port, plus failure-mode variants (every
//! route 500s, every route answers a JSON `null`) and an
//! `unreachable_base_url()` helper for connection-refused scenarios.

use std::collections::HashMap;
use std::net::TcpListener as StdTcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use storefront_sdk::StorefrontClient;
use tokio::runtime::Runtime;

// ---------------------------------------------------------------------------
// TestServer
// ---------------------------------------------------------------------------

/// An in-process storefront API bound to an ephemeral port.
///
/// The runtime serving the app lives inside the fixture; keep the
/// `TestServer` alive for the duration of the test.
pub struct TestServer {
    pub base_url: String,
    fixture: Arc<Fixture>,
    _rt: Runtime,
}

#[allow(dead_code)]
impl TestServer {
    /// Serve the canned storefront catalog.
    pub fn serve() -> Self {
        Self::start(storefront_routes())
    }

    /// Serve a storefront where every route answers 500 with a non-JSON
    /// body.
    pub fn serve_failing() -> Self {
        Self::start(Router::new().fallback(|| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
        }))
    }

    /// Serve a storefront where every route answers 200 with a JSON
    /// `null` body.
    pub fn serve_null() -> Self {
        Self::start(Router::new().fallback(|| async { Json(Value::Null) }))
    }

    fn start(routes: Router<Arc<Fixture>>) -> Self {
        let fixture = Arc::new(Fixture::new());
        let app = routes
            .layer(middleware::from_fn_with_state(
                fixture.clone(),
                count_hits,
            ))
            .with_state(fixture.clone());

        let rt = Runtime::new().unwrap();
        let listener = rt.block_on(async {
            tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap()
        });
        let addr = listener.local_addr().unwrap();
        rt.spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api", addr),
            fixture,
            _rt: rt,
        }
    }

    /// A client pointed at this server.
    pub fn client(&self) -> StorefrontClient {
        StorefrontClient::builder()
            .api_base(&self.base_url)
            .build()
    }

    /// Number of requests the server has answered.
    pub fn hit_count(&self) -> usize {
        self.fixture.hits.load(Ordering::SeqCst)
    }
}

/// A base URL no server listens on: binds an ephemeral port, records it
/// and drops the listener, so requests are refused.
#[allow(dead_code)]
pub fn unreachable_base_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}

// ---------------------------------------------------------------------------
// Fixture state
// ---------------------------------------------------------------------------

struct Fixture {
    hits: AtomicUsize,
    registered_emails: Mutex<Vec<String>>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            hits: AtomicUsize::new(0),
            registered_emails: Mutex::new(vec!["taken@example.com".to_string()]),
        }
    }
}

async fn count_hits(State(fx): State<Arc<Fixture>>, req: Request, next: Next) -> Response {
    fx.hits.fetch_add(1, Ordering::SeqCst);
    next.run(req).await
}

// ---------------------------------------------------------------------------
// Canned catalog
// ---------------------------------------------------------------------------

#[allow(dead_code)]
pub const FICTION: &str = "cat-fiction";
#[allow(dead_code)]
pub const PROGRAMMING: &str = "cat-programming";

fn categories() -> Vec<Value> {
    vec![
        json!({"_id": FICTION, "name": "Fiction"}),
        json!({"_id": PROGRAMMING, "name": "Programming"}),
    ]
}

fn category_value(id: &str) -> Value {
    categories()
        .into_iter()
        .find(|c| c["_id"] == id)
        .unwrap()
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    category: &str,
    stock: i64,
    sold: i64,
    created_at: &str,
) -> Value {
    json!({
        "_id": id,
        "name": name,
        "description": description,
        "price": price,
        "category": category_value(category),
        "stock": stock,
        "sold": sold,
        "createdAt": created_at,
        "images": [],
    })
}

/// Eight products across two categories. Orderings are distinct per sort
/// key and prices cover the $10-$19 bucket with exactly three entries.
fn products() -> Vec<Value> {
    vec![
        product(
            "p1",
            "The Silent Harbor",
            "A lighthouse keeper's last season.",
            12,
            FICTION,
            10,
            40,
            "2024-01-05T00:00:00Z",
        ),
        product(
            "p2",
            "River of Glass",
            "Two families, one bridge, forty years.",
            8,
            FICTION,
            5,
            55,
            "2024-02-11T00:00:00Z",
        ),
        product(
            "p3",
            "Practical Rust",
            "Ownership, lifetimes and APIs that hold up.",
            35,
            PROGRAMMING,
            7,
            23,
            "2024-03-02T00:00:00Z",
        ),
        product(
            "p4",
            "Async Patterns",
            "Executors, backpressure and cancellation.",
            42,
            PROGRAMMING,
            0,
            61,
            "2024-03-19T00:00:00Z",
        ),
        product(
            "p5",
            "The Clockmaker",
            "A village watches its hours run backwards.",
            15,
            FICTION,
            3,
            12,
            "2024-04-08T00:00:00Z",
        ),
        product(
            "p6",
            "Database Internals Primer",
            "Storage engines from pages to snapshots.",
            28,
            PROGRAMMING,
            9,
            35,
            "2024-05-21T00:00:00Z",
        ),
        product(
            "p7",
            "Letters from Nowhere",
            "Postcards arrive from a town not on any map.",
            19,
            FICTION,
            2,
            8,
            "2024-06-30T00:00:00Z",
        ),
        product(
            "p8",
            "Systems Thinking",
            "Feedback loops for people who ship software.",
            22,
            PROGRAMMING,
            6,
            47,
            "2024-07-14T00:00:00Z",
        ),
    ]
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

fn storefront_routes() -> Router<Arc<Fixture>> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/categories", get(list_categories))
        .route("/api/products/by/search", post(filtered_products))
        .route("/api/products/search", get(search_products))
        .route("/api/product/{id}", get(read_product))
        .route("/api/products/related/{id}", get(related_products))
        .route("/api/braintree/getToken/{user_id}", get(braintree_token))
        .route("/api/braintree/payment/{user_id}", post(braintree_payment))
        .route("/api/order/create/{user_id}", post(create_order))
        .route("/api/signup", post(signup))
}

async fn list_products(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let sort_by = params.get("sortBy").map(String::as_str).unwrap_or("_id");
    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(6);

    let mut items = products();
    match sort_by {
        "sold" => items.sort_by_key(|p| std::cmp::Reverse(p["sold"].as_i64().unwrap_or(0))),
        "createdAt" => items.sort_by(|a, b| {
            b["createdAt"]
                .as_str()
                .unwrap_or("")
                .cmp(a["createdAt"].as_str().unwrap_or(""))
        }),
        _ => {}
    }
    items.truncate(limit);
    Json(Value::Array(items))
}

async fn list_categories() -> Json<Value> {
    Json(Value::Array(categories()))
}

async fn filtered_products(Json(body): Json<Value>) -> Json<Value> {
    let limit = body["limit"].as_u64().unwrap_or(6) as usize;
    let skip = body["skip"].as_u64().unwrap_or(0) as usize;
    let category_filter: Vec<&str> = body["filters"]["category"]
        .as_array()
        .map(|ids| ids.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let price_filter: Vec<i64> = body["filters"]["price"]
        .as_array()
        .map(|range| range.iter().filter_map(Value::as_i64).collect())
        .unwrap_or_default();

    let matching: Vec<Value> = products()
        .into_iter()
        .filter(|p| {
            category_filter.is_empty()
                || category_filter.contains(&p["category"]["_id"].as_str().unwrap_or(""))
        })
        .filter(|p| {
            if price_filter.len() < 2 {
                return true;
            }
            let price = p["price"].as_i64().unwrap_or(0);
            price >= price_filter[0] && price <= price_filter[1]
        })
        .collect();

    let page: Vec<Value> = matching.into_iter().skip(skip).take(limit).collect();
    Json(json!({"data": page, "size": page.len()}))
}

async fn search_products(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let needle = params
        .get("search")
        .map(|s| s.to_lowercase())
        .unwrap_or_default();
    let category = params.get("category").map(String::as_str).unwrap_or("");

    let results: Vec<Value> = products()
        .into_iter()
        .filter(|p| {
            needle.is_empty()
                || p["name"]
                    .as_str()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&needle)
                || p["description"]
                    .as_str()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&needle)
        })
        .filter(|p| {
            category.is_empty()
                || category == "All"
                || p["category"]["_id"].as_str().unwrap_or("") == category
        })
        .collect();
    Json(Value::Array(results))
}

async fn read_product(Path(id): Path<String>) -> Response {
    match products().into_iter().find(|p| p["_id"] == id.as_str()) {
        Some(p) => Json(p).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Product not found"})),
        )
            .into_response(),
    }
}

async fn related_products(Path(id): Path<String>) -> Response {
    let all = products();
    let Some(target) = all.iter().find(|p| p["_id"] == id.as_str()) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Product not found"})),
        )
            .into_response();
    };
    let category = target["category"]["_id"].clone();
    let related: Vec<Value> = all
        .iter()
        .filter(|p| p["category"]["_id"] == category && p["_id"] != id.as_str())
        .take(6)
        .cloned()
        .collect();
    Json(Value::Array(related)).into_response()
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}

async fn braintree_token(Path(_user_id): Path<String>, headers: HeaderMap) -> Response {
    if bearer_token(&headers).is_none() {
        return unauthorized();
    }
    Json(json!({"clientToken": "sandbox-client-token", "success": true})).into_response()
}

async fn braintree_payment(
    Path(_user_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if bearer_token(&headers).is_none() {
        return unauthorized();
    }
    Json(json!({
        "success": true,
        "transaction": {"id": "txn-0001", "amount": body["amount"]}
    }))
    .into_response()
}

async fn create_order(
    Path(_user_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if bearer_token(&headers).is_none() {
        return unauthorized();
    }
    let mut order = body["order"].clone();
    order["_id"] = json!("order-0001");
    Json(order).into_response()
}

async fn signup(State(fx): State<Arc<Fixture>>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or("").to_string();
    let mut emails = fx.registered_emails.lock().unwrap();
    if emails.contains(&email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Email already exists"})),
        )
            .into_response();
    }
    emails.push(email.clone());
    Json(json!({"name": body["name"], "email": email})).into_response()
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Unauthorized"})),
    )
        .into_response()
}
