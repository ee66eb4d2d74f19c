//! The single owned application state for one session.
//!
//! All mutation happens synchronously through these methods, one user
//! event at a time; there is exactly one `AppState` per session and no
//! concurrent writer, so no interior locking is needed. Nothing here is
//! ever persisted.

use homebuy_core::models::{GlobalField, InputField, UnknownFieldError};
use homebuy_core::table::{ComparisonTable, TableError};
use thiserror::Error;

use crate::config::AppConfig;
use crate::dialog::{DialogState, DialogTarget};

/// Errors surfaced at the application boundary.
#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("no dialog is open")]
    NoDialogOpen,

    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// The comparison table plus the (at most one) open dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    table: ComparisonTable,
    dialog: Option<DialogState>,
}

impl AppState {
    /// Builds the session state from configuration: globals first, then
    /// the seed properties. A seed that fails validation is skipped with
    /// a warning rather than aborting the session.
    pub fn new(config: &AppConfig) -> Self {
        let mut table = ComparisonTable::new(config.globals);
        for seed in &config.seed_properties {
            if let Err(error) = table.add_column(seed.clone()) {
                tracing::warn!(name = %seed.name, %error, "skipping invalid seed property");
            }
        }
        Self {
            table,
            dialog: None,
        }
    }

    pub fn table(&self) -> &ComparisonTable {
        &self.table
    }

    pub fn dialog(&self) -> Option<&DialogState> {
        self.dialog.as_ref()
    }

    /// Mutable access to the open dialog's working form, for the
    /// presentation layer to write keystrokes into.
    pub fn dialog_mut(&mut self) -> Option<&mut DialogState> {
        self.dialog.as_mut()
    }

    // -------------------------------------------------------------------------
    // Table edits (string boundary)
    // -------------------------------------------------------------------------

    /// A direct table-cell edit: resolves the field name and merges the
    /// raw text into that column.
    pub fn handle_cell_edit(
        &mut self,
        index: usize,
        field_name: &str,
        raw: &str,
    ) -> Result<(), AppError> {
        let field = InputField::try_from(field_name)?;
        self.table.update_column_field(index, field, raw)?;
        Ok(())
    }

    /// An edit to one of the shared financial variables: re-applies the
    /// field to every column.
    pub fn handle_global_edit(
        &mut self,
        field_name: &str,
        raw: &str,
    ) -> Result<(), AppError> {
        let field = GlobalField::try_from(field_name)?;
        self.table.update_global_variable(field, raw);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Dialog workflow
    // -------------------------------------------------------------------------

    /// Closed → Open(new), seeded from the current globals. Replaces any
    /// dialog already open.
    pub fn open_new_dialog(&mut self) {
        self.dialog = Some(DialogState::open_new(self.table.globals()));
    }

    /// Closed → Open(edit, index), seeded from that column's inputs.
    pub fn open_edit_dialog(
        &mut self,
        index: usize,
    ) -> Result<(), AppError> {
        let input = self.table.get_column(index)?;
        self.dialog = Some(DialogState::open_edit(index, input));
        Ok(())
    }

    /// Attempts to save the open dialog.
    ///
    /// Returns `Ok(true)` when the property was written (appended for
    /// `New`, replaced for `Edit`) and the dialog closed. Returns
    /// `Ok(false)` when required fields were missing: the dialog stays
    /// open with `missing_fields` set for the inline error.
    pub fn save_dialog(&mut self) -> Result<bool, AppError> {
        let dialog = self.dialog.as_mut().ok_or(AppError::NoDialogOpen)?;

        let input = match dialog.form.to_input() {
            Ok(input) => input,
            Err(missing) => {
                tracing::debug!(?missing, "dialog save blocked on missing fields");
                dialog.missing_fields = true;
                return Ok(false);
            }
        };

        match dialog.target {
            DialogTarget::New => self.table.add_column(input)?,
            DialogTarget::Edit(index) => self.table.replace_column(index, input)?,
        }
        self.dialog = None;
        Ok(true)
    }

    /// Open(...) → Closed, discarding the working form unconditionally.
    pub fn cancel_dialog(&mut self) {
        self.dialog = None;
    }
}
