//! Authentication route handlers.
//!
//! The login modal posts email and password here; the credential check runs
//! server-side against the catalog's admin records. A rejected attempt
//! re-renders the modal with the email kept and no message.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    error::{AppError, clear_sentry_user, set_sentry_user},
    middleware::{
        auth::{LOGIN_PATH, is_htmx},
        clear_current_admin, set_current_admin,
    },
    services::{AdminAuthError, AdminAuthService},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(login_modal).post(login))
        .route("/auth/logout", post(logout))
}

/// Login form input.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login modal fragment (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/login_modal.html")]
pub struct LoginModalTemplate {
    pub login_email: String,
}

/// Login modal handler.
///
/// Without htmx the modal is shown inside the shell instead.
#[instrument(skip_all)]
pub async fn login_modal(headers: HeaderMap) -> Response {
    if is_htmx(&headers) {
        LoginModalTemplate {
            login_email: String::new(),
        }
        .into_response()
    } else {
        Redirect::to(LOGIN_PATH).into_response()
    }
}

/// Login handler.
///
/// On success the session id is cycled, the admin identity stored and the
/// browser sent back to the shell, where the admin tabs are now visible.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let htmx = is_htmx(&headers);

    match AdminAuthService::new(state.catalog())
        .authenticate(&form.email, &form.password)
        .await
    {
        Ok(admin) => {
            set_current_admin(&session, &admin).await?;
            set_sentry_user(admin.email.as_str());
            tracing::info!(email = %admin.email, "Admin signed in");

            if htmx {
                Ok((StatusCode::OK, [("HX-Redirect", "/")]).into_response())
            } else {
                Ok(Redirect::to("/").into_response())
            }
        }
        Err(e) => {
            match &e {
                AdminAuthError::Catalog(source) => {
                    tracing::error!(error = %source, "Failed to fetch admin records");
                }
                AdminAuthError::InvalidEmail(_) | AdminAuthError::NoMatch => {
                    tracing::info!(reason = %e, "Admin login rejected");
                }
            }

            if htmx {
                Ok(LoginModalTemplate {
                    login_email: form.email,
                }
                .into_response())
            } else {
                Ok(Redirect::to(LOGIN_PATH).into_response())
            }
        }
    }
}

/// Logout handler.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_current_admin(&session).await?;
    clear_sentry_user();
    tracing::info!("Admin signed out");
    Ok(Redirect::to("/"))
}
