//! Product list route handlers.
//!
//! The list is a public htmx fragment. The shell mounts it with a fresh
//! [`ListViewId`]; every fetch for that list (initial load, sort change,
//! re-fetch after delete) carries the id so out-of-order responses can be
//! discarded. A discarded response is answered with 204 No Content, which
//! htmx does not swap. A discarded re-fetch after a delete still closes the
//! confirmation modal.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{
        Path, Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use pkart_core::{ListState, ListViewId, Product, ProductId, SortKey};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::AppError, filters, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products/list", get(list))
        .route("/products/details", get(details))
        .route("/products/{id}/delete", get(confirm_delete).post(delete))
}

/// Which list a request belongs to and how it is sorted.
///
/// Sent as a query string by GET requests and as form fields by the delete
/// confirmation, via `hx-vals`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub view: Option<ListViewId>,
}

/// The list identity echoed back into every control of a rendered list.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListVals {
    pub sort: SortKey,
    pub view: ListViewId,
}

impl From<ListParams> for ListVals {
    fn from(params: ListParams) -> Self {
        Self {
            sort: params.sort,
            view: params.view.unwrap_or_default(),
        }
    }
}

/// One entry of the sort dropdown.
#[derive(Debug, Clone)]
pub struct SortOption {
    pub code: u8,
    pub label: &'static str,
    pub selected: bool,
}

impl SortOption {
    fn all(selected: SortKey) -> Vec<Self> {
        SortKey::ALL
            .into_iter()
            .map(|key| Self {
                code: key.code(),
                label: key.label(),
                selected: key == selected,
            })
            .collect()
    }
}

/// Product list fragment (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_list.html")]
pub struct ProductListTemplate {
    pub list_vals: ListVals,
    pub sort_options: Vec<SortOption>,
    pub state: ListState,
    /// Also clear the modal container (after a delete).
    pub close_modal: bool,
}

impl ProductListTemplate {
    fn new(list_vals: ListVals, state: ListState) -> Self {
        Self {
            list_vals,
            sort_options: SortOption::all(list_vals.sort),
            state,
            close_modal: false,
        }
    }
}

/// Out-of-band modal clear, sent alone when the list swap is skipped.
#[derive(Template, WebTemplate)]
#[template(path = "partials/modal_close.html")]
pub struct ModalCloseTemplate;

/// Product details modal fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_details.html")]
pub struct ProductDetailsTemplate {
    pub product: Product,
}

/// Delete confirmation modal fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/delete_confirm.html")]
pub struct DeleteConfirmTemplate {
    pub id: ProductId,
    pub list_vals: ListVals,
}

/// Fetch the list for `list_vals` under a fresh ticket.
///
/// Returns `None` when another fetch for the same list was issued while this
/// one was in flight.
async fn fetch_list(state: &AppState, list_vals: ListVals) -> Option<ListState> {
    let sequencer = state.lists().sequencer(list_vals.view);
    let ticket = sequencer.issue();

    let outcome = state.catalog().list_products(list_vals.sort).await;
    if let Err(e) = &outcome {
        tracing::error!(sort = list_vals.sort.code(), error = %e, "Failed to fetch products");
    }

    let resolved = sequencer.resolve(ticket, outcome);
    if resolved.is_none() {
        tracing::debug!(
            view = %list_vals.view,
            ticket = ticket.sequence(),
            "Discarding superseded product list response"
        );
    }
    resolved
}

/// Product list fragment handler.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;
    let list_vals = ListVals::from(params);

    Ok(match fetch_list(&state, list_vals).await {
        Some(list_state) => ProductListTemplate::new(list_vals, list_state).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// Details modal handler.
///
/// The card already holds the full record, so it is sent back as query
/// parameters and rendered without another catalog call.
#[instrument(skip_all)]
pub async fn details(Query(product): Query<Product>) -> impl IntoResponse {
    ProductDetailsTemplate { product }
}

/// Delete confirmation modal handler.
#[instrument]
pub async fn confirm_delete(
    Path(id): Path<ProductId>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<DeleteConfirmTemplate, AppError> {
    let Query(params) = params?;
    Ok(DeleteConfirmTemplate {
        id,
        list_vals: ListVals::from(params),
    })
}

/// Delete a product, then re-fetch the list it was shown in.
///
/// The re-fetch happens whether or not the delete succeeded; a failed
/// delete is only logged. The modal is closed in every case.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    params: Result<Form<ListParams>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(params) = params?;
    match state.catalog().delete_product(id).await {
        Ok(()) => tracing::info!(product_id = %id, "Product deleted"),
        Err(e) => tracing::error!(product_id = %id, error = %e, "Failed to delete product"),
    }

    let list_vals = ListVals::from(params);
    Ok(match fetch_list(&state, list_vals).await {
        Some(list_state) => {
            let mut template = ProductListTemplate::new(list_vals, list_state);
            template.close_modal = true;
            template.into_response()
        }
        None => ([("HX-Reswap", "none")], ModalCloseTemplate).into_response(),
    })
}
