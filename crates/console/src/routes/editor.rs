//! Add and update product forms.
//!
//! Both forms post plain HTML and get the full shell back, showing either
//! the validation or catalog error next to the submitted values, or the
//! saved draft above an empty form.

use axum::{
    Form, Router,
    extract::State,
    response::IntoResponse,
    routing::post,
};
use pkart_core::{ProductDraft, ProductId, ShellState, Tab};
use serde::Deserialize;
use tracing::instrument;

use super::shell::{TabContent, page};
use crate::{middleware::RequireAdminAuth, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", post(create))
        .route("/products/update", post(update))
}

/// Which of the two product forms is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    Update,
}

impl EditorMode {
    const fn tab(self) -> Tab {
        match self {
            Self::Add => Tab::AddProduct,
            Self::Update => Tab::UpdateProduct,
        }
    }
}

/// Raw form fields, as typed.
#[derive(Debug, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image_url: String,
}

/// Product form as rendered into the shell.
#[derive(Debug, Clone)]
pub struct ProductFormView {
    pub heading: &'static str,
    pub action: &'static str,
    pub submit_label: &'static str,
    pub saved_message: &'static str,
    pub needs_id: bool,
    pub product_id: String,
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub error: Option<String>,
    /// Draft accepted by the catalog on the previous submit.
    pub saved: Option<ProductDraft>,
}

impl ProductFormView {
    /// Empty form.
    pub fn blank(mode: EditorMode) -> Self {
        let (heading, action, submit_label, saved_message) = match mode {
            EditorMode::Add => ("Add Product", "/products", "Add Product", "Product added."),
            EditorMode::Update => (
                "Update Product",
                "/products/update",
                "Update Product",
                "Product updated.",
            ),
        };

        Self {
            heading,
            action,
            submit_label,
            saved_message,
            needs_id: mode == EditorMode::Update,
            product_id: String::new(),
            name: String::new(),
            price: String::new(),
            image_url: String::new(),
            error: None,
            saved: None,
        }
    }

    /// Form re-shown with the submitted values and an error.
    fn rejected(mode: EditorMode, form: ProductForm, error: String) -> Self {
        Self {
            product_id: form.product_id,
            name: form.product_name,
            price: form.price,
            image_url: form.image_url,
            error: Some(error),
            ..Self::blank(mode)
        }
    }

    /// Cleared form with the saved draft shown above it.
    fn saved(mode: EditorMode, draft: ProductDraft) -> Self {
        Self {
            saved: Some(draft),
            ..Self::blank(mode)
        }
    }
}

/// Render the editor tab for `admin` with `form`.
fn editor_page(admin: RequireAdminAuth, mode: EditorMode, form: ProductFormView) -> impl IntoResponse {
    let RequireAdminAuth(admin) = admin;
    let mut shell = ShellState::new(Some(admin));
    shell.select_tab(mode.tab());
    page(&shell, TabContent::Editor(form))
}

/// Create product handler.
#[instrument(skip(admin, state, form))]
pub async fn create(
    admin: RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> impl IntoResponse {
    let mode = EditorMode::Add;

    let draft = match ProductDraft::parse(&form.product_name, &form.price, &form.image_url) {
        Ok(draft) => draft,
        Err(e) => {
            let view = ProductFormView::rejected(mode, form, e.to_string());
            return editor_page(admin, mode, view);
        }
    };

    let view = match state.catalog().create_product(&draft).await {
        Ok(()) => {
            tracing::info!(name = %draft.name, price = %draft.price, "Product created");
            ProductFormView::saved(mode, draft)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create product");
            ProductFormView::rejected(mode, form, e.to_string())
        }
    };

    editor_page(admin, mode, view)
}

/// Update product handler.
#[instrument(skip(admin, state, form))]
pub async fn update(
    admin: RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> impl IntoResponse {
    let mode = EditorMode::Update;

    let Ok(id) = form.product_id.parse::<ProductId>() else {
        let view =
            ProductFormView::rejected(mode, form, "Product ID must be a whole number".to_string());
        return editor_page(admin, mode, view);
    };
    let draft = match ProductDraft::parse(&form.product_name, &form.price, &form.image_url) {
        Ok(draft) => draft,
        Err(e) => {
            let view = ProductFormView::rejected(mode, form, e.to_string());
            return editor_page(admin, mode, view);
        }
    };

    let view = match state.catalog().update_product(id, &draft).await {
        Ok(()) => {
            tracing::info!(product_id = %id, name = %draft.name, "Product updated");
            ProductFormView::saved(mode, draft)
        }
        Err(e) => {
            tracing::error!(product_id = %id, error = %e, "Failed to update product");
            ProductFormView::rejected(mode, form, e.to_string())
        }
    };

    editor_page(admin, mode, view)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use pkart_core::Price;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    use super::*;
    use crate::routes::app;
    use crate::testing::{CatalogCall, RecordingCatalog, body_text, sign_in, test_state};

    fn catalog() -> Arc<RecordingCatalog> {
        Arc::new(RecordingCatalog::default().with_admin("ops@pkart.in", "K3ttle!", None))
    }

    async fn submit(app: Router, uri: &str, body: &str, cookie: Option<&str>) -> Response {
        let mut request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        app.oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_requires_admin() {
        let catalog = catalog();
        let app = app(test_state(catalog.clone()));

        let response = submit(
            app,
            "/products",
            "product_name=Kettle&price=10&image_url=%2Fk.png",
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/?login=1");
        assert!(catalog.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_valid_draft() {
        let catalog = catalog();
        let app = app(test_state(catalog.clone()));
        let cookie = sign_in(&app, "ops@pkart.in", "K3ttle!").await.unwrap();

        let response = submit(
            app,
            "/products",
            "product_name=Copper+Kettle&price=1499.5&image_url=%2Fimg%2Fkettle.png",
            Some(&cookie),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("Product added."));
        assert!(body.contains("1499.50 /RS"));
        assert_eq!(
            catalog.calls().last(),
            Some(&CatalogCall::Create(ProductDraft {
                name: "Copper Kettle".to_string(),
                price: Price::new(Decimal::new(14995, 1)),
                image_url: "/img/kettle.png".to_string(),
            }))
        );
    }

    #[tokio::test]
    async fn test_invalid_draft_makes_no_remote_call() {
        let catalog = catalog();
        let app = app(test_state(catalog.clone()));
        let cookie = sign_in(&app, "ops@pkart.in", "K3ttle!").await.unwrap();
        let calls_after_login = catalog.calls().len();

        let body = body_text(
            submit(
                app,
                "/products",
                "product_name=Kettle&price=abc&image_url=%2Fk.png",
                Some(&cookie),
            )
            .await,
        )
        .await;

        assert!(body.contains("alert-danger"));
        assert!(body.contains("value=\"Kettle\""));
        assert_eq!(catalog.calls().len(), calls_after_login);
    }

    #[tokio::test]
    async fn test_update_sends_id_and_draft() {
        let catalog = catalog();
        let app = app(test_state(catalog.clone()));
        let cookie = sign_in(&app, "ops@pkart.in", "K3ttle!").await.unwrap();

        let body = body_text(
            submit(
                app,
                "/products/update",
                "product_id=12&product_name=Tea+Tin&price=250&image_url=%2Ftin.png",
                Some(&cookie),
            )
            .await,
        )
        .await;

        assert!(body.contains("Product updated."));
        assert!(matches!(
            catalog.calls().last(),
            Some(CatalogCall::Update(id, draft)) if *id == ProductId::new(12) && draft.name == "Tea Tin"
        ));
    }

    #[tokio::test]
    async fn test_update_rejects_non_numeric_id() {
        let catalog = catalog();
        let app = app(test_state(catalog.clone()));
        let cookie = sign_in(&app, "ops@pkart.in", "K3ttle!").await.unwrap();
        let calls_after_login = catalog.calls().len();

        let body = body_text(
            submit(
                app,
                "/products/update",
                "product_id=twelve&product_name=Tea+Tin&price=250&image_url=%2Ftin.png",
                Some(&cookie),
            )
            .await,
        )
        .await;

        assert!(body.contains("Product ID must be a whole number"));
        assert_eq!(catalog.calls().len(), calls_after_login);
    }
}
