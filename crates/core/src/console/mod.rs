//! UI state model for the admin console.
//!
//! The console is two cooperating pieces: the view shell (tabs, login gate,
//! modals) and the product list (fetch lifecycle and sort key). Both are
//! plain state here; the console crate turns them into rendered views.

pub mod list;
pub mod shell;
pub mod sort;
pub mod tab;

pub use list::{FetchSequencer, ListState, ListViewId, RequestTicket};
pub use shell::{AdminIdentity, ShellState};
pub use sort::{SortKey, SortKeyError};
pub use tab::Tab;
