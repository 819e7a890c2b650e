//! Integration tests for the PKart console.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pkart-integration-tests
//! ```
//!
//! Everything runs in-process: [`FakeCatalog`] is a small axum service that
//! speaks the catalog wire format and records every request it receives,
//! and [`spawn_console`] serves the real console router against it on an
//! ephemeral port.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{OriginalUri, Path, Query, State},
    http::{HeaderMap, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use pkart_console::{
    catalog::HttpCatalogClient,
    config::{CatalogConfig, ConsoleConfig},
    routes,
    state::AppState,
};
use secrecy::SecretString;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// One request received by the fake catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct CatalogData {
    admins: Vec<Value>,
    products: Vec<Value>,
    next_id: i64,
    fail_products: Option<StatusCode>,
    requests: Vec<RecordedRequest>,
}

/// In-process catalog service mounted under `/api/`.
#[derive(Clone)]
pub struct FakeCatalog {
    addr: SocketAddr,
    data: Arc<Mutex<CatalogData>>,
}

impl FakeCatalog {
    /// Start the service on an ephemeral port.
    pub async fn start() -> Self {
        let data = Arc::new(Mutex::new(CatalogData {
            next_id: 1,
            ..CatalogData::default()
        }));

        let api = Router::new()
            .route("/admins", get(list_admins))
            .route("/products", get(list_products).post(create_product))
            .route("/products/{id}", axum::routing::put(update_product).delete(delete_product))
            .with_state(data.clone());
        let app = Router::new().nest("/api", api);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake catalog");
        let addr = listener.local_addr().expect("Fake catalog has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr, data }
    }

    /// Base URL to configure the console with.
    pub fn url(&self) -> String {
        format!("http://{}/api/", self.addr)
    }

    fn data(&self) -> MutexGuard<'_, CatalogData> {
        self.data.lock().expect("Fake catalog lock poisoned")
    }

    pub fn add_admin(&self, email: &str, password: &str, name: Option<&str>) {
        self.data().admins.push(json!({
            "admin_email": email,
            "admin_password": password,
            "admin_name": name,
        }));
    }

    /// Add a product and return its id.
    pub fn add_product(&self, name: &str, price: f64, image_url: &str) -> i64 {
        let mut data = self.data();
        let id = data.next_id;
        data.next_id += 1;
        data.products.push(json!({
            "product_id": id,
            "product_name": name,
            "price": price,
            "image_url": image_url,
        }));
        id
    }

    /// Answer every product list request with `status`.
    pub fn fail_products(&self, status: u16) {
        self.data().fail_products =
            Some(StatusCode::from_u16(status).expect("Invalid status code"));
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.data().requests.clone()
    }

    /// Requests matching `method` and `path` (relative to `/api`).
    pub fn requests_to(&self, method: &Method, path: &str) -> Vec<RecordedRequest> {
        let full = format!("/api{path}");
        self.requests()
            .into_iter()
            .filter(|r| r.method == *method && r.path == full)
            .collect()
    }

    /// Current product names, in insertion order.
    pub fn product_names(&self) -> Vec<String> {
        self.data()
            .products
            .iter()
            .filter_map(|p| p["product_name"].as_str().map(str::to_string))
            .collect()
    }
}

type Data = Arc<Mutex<CatalogData>>;

fn record(
    data: &Data,
    method: Method,
    uri: &OriginalUri,
    headers: &HeaderMap,
    body: Option<Value>,
) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    data.lock()
        .expect("Fake catalog lock poisoned")
        .requests
        .push(RecordedRequest {
            method,
            path: uri.0.path().to_string(),
            query: uri.0.query().map(str::to_string),
            authorization,
            body,
        });
}

async fn list_admins(
    State(data): State<Data>,
    uri: OriginalUri,
    headers: HeaderMap,
) -> Json<Vec<Value>> {
    record(&data, Method::GET, &uri, &headers, None);
    Json(data.lock().expect("Fake catalog lock poisoned").admins.clone())
}

#[derive(Deserialize)]
struct SortParam {
    sort: Option<u8>,
}

fn price_of(product: &Value) -> f64 {
    product["price"].as_f64().unwrap_or_default()
}

async fn list_products(
    State(data): State<Data>,
    uri: OriginalUri,
    headers: HeaderMap,
    Query(param): Query<SortParam>,
) -> Response {
    record(&data, Method::GET, &uri, &headers, None);
    let guard = data.lock().expect("Fake catalog lock poisoned");
    if let Some(status) = guard.fail_products {
        return (status, "catalog unavailable").into_response();
    }

    let mut products = guard.products.clone();
    match param.sort.unwrap_or(1) {
        2 => products.sort_by(|a, b| {
            a["product_name"]
                .as_str()
                .unwrap_or_default()
                .cmp(b["product_name"].as_str().unwrap_or_default())
        }),
        3 => products.sort_by(|a, b| price_of(a).total_cmp(&price_of(b))),
        4 => products.sort_by(|a, b| price_of(b).total_cmp(&price_of(a))),
        _ => products.sort_by_key(|p| p["product_id"].as_i64().unwrap_or_default()),
    }
    Json(products).into_response()
}

async fn create_product(
    State(data): State<Data>,
    uri: OriginalUri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    record(&data, Method::POST, &uri, &headers, Some(body.clone()));
    let mut guard = data.lock().expect("Fake catalog lock poisoned");
    let id = guard.next_id;
    guard.next_id += 1;
    let mut product = body;
    product["product_id"] = json!(id);
    guard.products.push(product);
    StatusCode::CREATED
}

async fn update_product(
    State(data): State<Data>,
    uri: OriginalUri,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> StatusCode {
    record(&data, Method::PUT, &uri, &headers, Some(body.clone()));
    let mut guard = data.lock().expect("Fake catalog lock poisoned");
    match guard
        .products
        .iter_mut()
        .find(|p| p["product_id"].as_i64() == Some(id))
    {
        Some(product) => {
            for field in ["product_name", "price", "image_url"] {
                product[field] = body[field].clone();
            }
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_product(
    State(data): State<Data>,
    uri: OriginalUri,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> StatusCode {
    record(&data, Method::DELETE, &uri, &headers, None);
    let mut guard = data.lock().expect("Fake catalog lock poisoned");
    let before = guard.products.len();
    guard
        .products
        .retain(|p| p["product_id"].as_i64() != Some(id));
    if guard.products.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Catalog client configuration pointing at `catalog`.
pub fn catalog_config(catalog: &FakeCatalog, token: Option<&str>) -> CatalogConfig {
    let mut config = CatalogConfig::new(&catalog.url()).expect("Fake catalog URL is valid");
    config.api_token = token.map(SecretString::from);
    config
}

/// Serve the console against `catalog` and return its base URL.
pub async fn spawn_console(catalog: &FakeCatalog) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind console");
    let port = listener
        .local_addr()
        .expect("Console has no address")
        .port();

    let config = ConsoleConfig::local(port, catalog_config(catalog, None));
    let client = HttpCatalogClient::new(&config.catalog).expect("Failed to create catalog client");
    let app = routes::app(AppState::new(config, Arc::new(client)));

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://127.0.0.1:{port}")
}

/// Browser-like client that keeps the session cookie.
pub fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
