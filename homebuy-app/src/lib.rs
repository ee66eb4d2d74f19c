//! Application layer for the home-purchase comparison calculator.
//!
//! Owns the single per-session [`state::AppState`] (comparison table +
//! dialog), the add/edit dialog workflow, configuration loading, logging
//! setup, and the read-only view payload the presentation layer renders.

pub mod config;
pub mod dialog;
pub mod logging;
pub mod state;
pub mod view;

pub use config::AppConfig;
pub use dialog::{DialogState, DialogTarget, PropertyForm};
pub use state::{AppError, AppState};
pub use view::TableView;
