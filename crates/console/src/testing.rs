//! Test doubles shared by handler and service tests.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use pkart_core::{Product, ProductDraft, ProductId, SortKey};
use secrecy::SecretString;
use tower::ServiceExt;

use crate::{
    catalog::{AdminCredential, CatalogApi, CatalogError},
    config::{CatalogConfig, ConsoleConfig},
    state::AppState,
};

/// One call received by [`RecordingCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCall {
    ListAdmins,
    ListProducts(SortKey),
    Delete(ProductId),
    Create(ProductDraft),
    Update(ProductId, ProductDraft),
}

type ListHook = Box<dyn Fn(SortKey) + Send + Sync>;

/// In-memory catalog that records every call it receives.
#[derive(Default)]
pub struct RecordingCatalog {
    admins: Vec<AdminCredential>,
    products: Vec<Product>,
    admins_fail: bool,
    products_fail: Option<u16>,
    delete_fails: bool,
    on_list: Option<ListHook>,
    calls: Mutex<Vec<CatalogCall>>,
}

impl RecordingCatalog {
    pub fn with_admin(mut self, email: &str, password: &str, name: Option<&str>) -> Self {
        self.admins.push(AdminCredential {
            email: email.to_string(),
            password: SecretString::from(password),
            name: name.map(str::to_string),
        });
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub const fn failing_admins(mut self) -> Self {
        self.admins_fail = true;
        self
    }

    pub const fn failing_products(mut self, status: u16) -> Self {
        self.products_fail = Some(status);
        self
    }

    pub const fn failing_delete(mut self) -> Self {
        self.delete_fails = true;
        self
    }

    /// Run `hook` while a product list fetch is in flight.
    pub fn on_list(mut self, hook: impl Fn(SortKey) + Send + Sync + 'static) -> Self {
        self.on_list = Some(Box::new(hook));
        self
    }

    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn admin_fetches(&self) -> usize {
        self.count(|call| matches!(call, CatalogCall::ListAdmins))
    }

    pub fn list_fetches(&self) -> usize {
        self.count(|call| matches!(call, CatalogCall::ListProducts(_)))
    }

    fn count(&self, pred: impl Fn(&CatalogCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: CatalogCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CatalogApi for RecordingCatalog {
    async fn list_admins(&self) -> Result<Vec<AdminCredential>, CatalogError> {
        self.record(CatalogCall::ListAdmins);
        if self.admins_fail {
            return Err(CatalogError::Api {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(self.admins.clone())
    }

    async fn list_products(&self, sort: SortKey) -> Result<Vec<Product>, CatalogError> {
        self.record(CatalogCall::ListProducts(sort));
        if let Some(hook) = &self.on_list {
            hook(sort);
        }
        if let Some(status) = self.products_fail {
            return Err(CatalogError::Api {
                status,
                message: String::new(),
            });
        }
        Ok(self.products.clone())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        self.record(CatalogCall::Delete(id));
        if self.delete_fails {
            return Err(CatalogError::NotFound(format!("product {id}")));
        }
        Ok(())
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<(), CatalogError> {
        self.record(CatalogCall::Create(draft.clone()));
        Ok(())
    }

    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<(), CatalogError> {
        self.record(CatalogCall::Update(id, draft.clone()));
        Ok(())
    }
}

/// State wired to `catalog`, with a config that never reaches the network.
pub fn test_state(catalog: Arc<RecordingCatalog>) -> AppState {
    let config = ConsoleConfig::local(3001, CatalogConfig::new("http://127.0.0.1:9").unwrap());
    AppState::new(config, catalog)
}

/// Collect a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `name=value` pair of the session cookie set by `response`, if any.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with(crate::middleware::session::SESSION_COOKIE_NAME))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

/// Sign in through the login form and return the session cookie.
pub async fn sign_in(app: &Router, email: &str, password: &str) -> Option<String> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("email", email)
        .append_pair("password", password)
        .finish();
    let request = Request::post("/auth/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    response
        .headers()
        .contains_key("HX-Redirect")
        .then(|| session_cookie(&response))
        .flatten()
}
