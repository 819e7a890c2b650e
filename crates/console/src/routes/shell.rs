//! Console shell: navbar, sidebar tabs and the active tab's content.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use pkart_core::{CatalogStats, ListViewId, ShellState, SortKey, Tab};
use serde::Deserialize;
use tracing::instrument;

use super::editor::{EditorMode, ProductFormView};
use crate::{filters, middleware::OptionalAdminAuth, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Shell query parameters.
#[derive(Debug, Deserialize)]
pub struct ShellQuery {
    pub tab: Option<String>,
    /// `1` opens the login modal.
    pub login: Option<String>,
}

/// Sidebar link for one visible tab.
#[derive(Debug, Clone)]
pub struct TabLink {
    pub href: String,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Navbar badge for the signed-in admin.
#[derive(Debug, Clone)]
pub struct AdminBadge {
    pub name: String,
    pub email: String,
}

/// Statistics tab content.
#[derive(Debug, Clone, Default)]
pub struct HomeView {
    pub stats: Option<CatalogStats>,
    pub error: Option<String>,
}

/// A product list mounted into the products tab.
#[derive(Debug, Clone)]
pub struct ProductsMount {
    pub view: ListViewId,
    pub sort_code: u8,
}

impl ProductsMount {
    fn new() -> Self {
        Self {
            view: ListViewId::new(),
            sort_code: SortKey::default().code(),
        }
    }
}

/// What the main area shows.
#[derive(Debug, Clone)]
pub enum TabContent {
    Home(HomeView),
    Products(ProductsMount),
    Editor(ProductFormView),
}

/// Full console page.
#[derive(Template, WebTemplate)]
#[template(path = "shell.html")]
pub struct ShellTemplate {
    pub title: &'static str,
    pub admin: Option<AdminBadge>,
    pub tabs: Vec<TabLink>,
    /// Pre-filled email when the login modal is open.
    pub login_email: Option<String>,
    pub content: TabContent,
}

/// Render `shell` with `content` in the main area.
pub fn page(shell: &ShellState, content: TabContent) -> ShellTemplate {
    let active = shell.active_tab();
    let tabs = shell
        .visible_tabs()
        .into_iter()
        .map(|tab| TabLink {
            href: format!("/?tab={}", tab.as_str()),
            label: tab.label(),
            icon: tab.icon(),
            active: tab == active,
        })
        .collect();

    ShellTemplate {
        title: active.label(),
        admin: shell.admin().map(|admin| AdminBadge {
            name: admin.display_name().to_string(),
            email: admin.email.to_string(),
        }),
        tabs,
        login_email: shell.login_open().then(String::new),
        content,
    }
}

/// Statistics over the catalog, sorted by id.
async fn home_view(state: &AppState) -> HomeView {
    match state.catalog().list_products(SortKey::ById).await {
        Ok(products) => HomeView {
            stats: CatalogStats::from_products(&products),
            error: None,
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch products for statistics");
            HomeView {
                stats: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Console shell handler.
///
/// Unknown tab names and tabs hidden from signed-out visitors show the
/// products tab.
#[instrument(skip(admin, state))]
pub async fn index(
    OptionalAdminAuth(admin): OptionalAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<ShellQuery>,
) -> impl IntoResponse {
    let mut shell = ShellState::new(admin);
    let tab = query
        .tab
        .as_deref()
        .and_then(|name| name.parse::<Tab>().ok())
        .unwrap_or_default();
    shell.select_tab(tab);
    if query.login.as_deref() == Some("1") {
        shell.open_login();
    }

    let content = match shell.active_tab() {
        Tab::Home => TabContent::Home(home_view(&state).await),
        Tab::Products => TabContent::Products(ProductsMount::new()),
        Tab::AddProduct => TabContent::Editor(ProductFormView::blank(EditorMode::Add)),
        Tab::UpdateProduct => TabContent::Editor(ProductFormView::blank(EditorMode::Update)),
    };

    page(&shell, content)
}
