//! View shell state: active tab, admin identity, login modal.

use serde::{Deserialize, Serialize};

use super::Tab;
use crate::types::Email;

/// The admin signed in to the console.
///
/// Stored in the server-side session once the login form matched an admin
/// record. Carries no credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    /// Email the admin signed in with.
    pub email: Email,
    /// Display name from the admin record, if the catalog provides one.
    pub name: Option<String>,
}

impl AdminIdentity {
    /// Name shown in the navbar badge, falling back to the email's local part.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self
                .email
                .as_str()
                .split('@')
                .next()
                .unwrap_or_else(|| self.email.as_str()),
        }
    }
}

/// Top-level console state for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    active_tab: Tab,
    admin: Option<AdminIdentity>,
    login_open: bool,
}

impl ShellState {
    /// Fresh shell on the default tab.
    #[must_use]
    pub fn new(admin: Option<AdminIdentity>) -> Self {
        Self {
            active_tab: Tab::default(),
            admin,
            login_open: false,
        }
    }

    /// Switch tabs.
    ///
    /// Tabs hidden from the current visitor fall back to [`Tab::Products`];
    /// the transition itself has no other guard.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = if self.is_visible(tab) {
            tab
        } else {
            Tab::Products
        };
    }

    /// Show the login modal. Ignored once signed in.
    pub fn open_login(&mut self) {
        self.login_open = self.admin.is_none();
    }

    /// Record a successful login; reveals the admin-only tabs.
    pub fn sign_in(&mut self, admin: AdminIdentity) {
        self.admin = Some(admin);
        self.login_open = false;
    }

    /// Forget the signed-in admin and return to the public tab.
    pub fn sign_out(&mut self) {
        self.admin = None;
        self.select_tab(self.active_tab);
    }

    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[must_use]
    pub const fn admin(&self) -> Option<&AdminIdentity> {
        self.admin.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.admin.is_some()
    }

    #[must_use]
    pub const fn login_open(&self) -> bool {
        self.login_open
    }

    /// Whether `tab` appears in the sidebar for this visitor.
    #[must_use]
    pub const fn is_visible(&self, tab: Tab) -> bool {
        !tab.requires_admin() || self.is_authenticated()
    }

    /// Sidebar tabs for this visitor, in display order.
    #[must_use]
    pub fn visible_tabs(&self) -> Vec<Tab> {
        Tab::ALL
            .into_iter()
            .filter(|tab| self.is_visible(*tab))
            .collect()
    }
}
