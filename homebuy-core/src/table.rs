//! The in-memory comparison table: one projected column per property.
//!
//! The table owns the shared [`GlobalFinancialVariables`] and an ordered
//! list of [`PropertyProjection`] data columns. Every mutation re-runs
//! the projection engine for the affected column(s), so the derived
//! fields on a stored column are always consistent with its raw inputs.
//!
//! Columns hold data only — row labels and the header row are a display
//! concern and live entirely in the presentation layer.

use thiserror::Error;

use crate::calculations::{PropertyProjection, project};
use crate::models::{
    GlobalField, GlobalFinancialVariables, InputField, PropertyInput, ValidationError,
};
use crate::parse::parse_amount;

/// Errors surfaced by [`ComparisonTable`] operations.
///
/// Unparseable numeric text is deliberately *not* an error: it is the
/// keystroke-leniency no-op described on [`ComparisonTable::update_column_field`].
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    /// The column index does not reference an existing property.
    #[error("no column at index {index} (table has {len})")]
    ColumnOutOfBounds { index: usize, len: usize },

    /// The input failed validation and the table was left unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Ordered collection of projected property columns sharing one set of
/// global financial variables.
///
/// Created at session start with the seed properties, mutated in place
/// on every edit, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    globals: GlobalFinancialVariables,
    columns: Vec<PropertyProjection>,
}

impl ComparisonTable {
    /// Creates an empty table sharing the given global variables.
    pub fn new(globals: GlobalFinancialVariables) -> Self {
        Self {
            globals,
            columns: Vec::new(),
        }
    }

    /// The data columns, in display order.
    pub fn columns(&self) -> &[PropertyProjection] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The current shared financial variables.
    pub fn globals(&self) -> &GlobalFinancialVariables {
        &self.globals
    }

    /// Appends a new property column.
    ///
    /// The input is validated first (non-empty name, finite numerics);
    /// on failure the table is unchanged and the error is returned
    /// rather than inserting partial data.
    pub fn add_column(
        &mut self,
        input: PropertyInput,
    ) -> Result<(), TableError> {
        input.validate()?;
        tracing::info!(name = %input.name, index = self.columns.len(), "adding property column");
        self.columns.push(project(&input));
        Ok(())
    }

    /// Merges a single edited field into a column and re-projects it.
    ///
    /// An out-of-range `index` is an error. For numeric fields, `raw`
    /// text that does not parse as a finite number makes the whole call
    /// a no-op (`Ok`, table unchanged): form controls call this on every
    /// keystroke, and partial entry like `"1,2"` or `""` must neither
    /// throw nor clobber the stored value.
    pub fn update_column_field(
        &mut self,
        index: usize,
        field: InputField,
        raw: &str,
    ) -> Result<(), TableError> {
        let len = self.columns.len();
        let column = self
            .columns
            .get_mut(index)
            .ok_or(TableError::ColumnOutOfBounds { index, len })?;

        let mut input = column.input.clone();
        match field {
            InputField::Name => input.name = raw.to_string(),
            InputField::Numeric(numeric) => match parse_amount(raw) {
                Some(value) => input.set_numeric(numeric, value),
                None => {
                    tracing::debug!(index, field = %field, raw, "ignoring non-numeric edit");
                    return Ok(());
                }
            },
        }

        tracing::debug!(index, field = %field, "column field updated");
        *column = project(&input);
        Ok(())
    }

    /// Merges a new value into the global variables and re-applies the
    /// field to every column.
    ///
    /// Every column gets the new value, including columns whose dialog
    /// previously set the field individually: the model intentionally
    /// does not track "overridden" versus "inherited" per column, so the
    /// next global update uniformly wins. Unparseable `raw` text is the
    /// same silent no-op as on [`Self::update_column_field`].
    pub fn update_global_variable(
        &mut self,
        field: GlobalField,
        raw: &str,
    ) {
        let Some(value) = parse_amount(raw) else {
            tracing::debug!(field = %field, raw, "ignoring non-numeric global edit");
            return;
        };

        tracing::info!(field = %field, value, columns = self.columns.len(), "global variable updated");
        self.globals.set(field, value);
        for column in &mut self.columns {
            let mut input = column.input.clone();
            input.set_numeric(field.numeric_field(), value);
            *column = project(&input);
        }
    }

    /// The stored raw inputs of a column, for seeding the edit dialog.
    pub fn get_column(
        &self,
        index: usize,
    ) -> Result<&PropertyInput, TableError> {
        self.columns
            .get(index)
            .map(|c| &c.input)
            .ok_or(TableError::ColumnOutOfBounds {
                index,
                len: self.columns.len(),
            })
    }

    /// Re-derives and overwrites a whole column, as the edit dialog's
    /// save does. Validates before writing; on failure the column keeps
    /// its previous contents.
    pub fn replace_column(
        &mut self,
        index: usize,
        input: PropertyInput,
    ) -> Result<(), TableError> {
        if index >= self.columns.len() {
            return Err(TableError::ColumnOutOfBounds {
                index,
                len: self.columns.len(),
            });
        }
        input.validate()?;
        tracing::info!(name = %input.name, index, "replacing property column");
        self.columns[index] = project(&input);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::NumericField;

    fn sample_input(name: &str) -> PropertyInput {
        PropertyInput {
            name: name.to_string(),
            start_asset: 150_000.0,
            asking: 565_000.0,
            offer: 545_000.0,
            down_payment_pct: 25.0,
            closing: 10_000.0,
            interest_rate: 3.25,
            maintenance: 574.0,
        }
    }

    fn three_property_table() -> ComparisonTable {
        let mut table = ComparisonTable::new(GlobalFinancialVariables::default());
        table.add_column(sample_input("88 Bleecker St 6B")).unwrap();
        table.add_column(sample_input("20 Pine St 1508")).unwrap();
        table.add_column(sample_input("99 John St 410")).unwrap();
        table
    }

    // =========================================================================
    // add_column
    // =========================================================================

    #[test]
    fn add_column_projects_and_appends() {
        let mut table = ComparisonTable::new(GlobalFinancialVariables::default());

        table.add_column(sample_input("88 Bleecker St 6B")).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.columns()[0], project(&sample_input("88 Bleecker St 6B")));
    }

    #[test]
    fn add_column_rejects_empty_name_without_mutating() {
        let mut table = three_property_table();
        let mut input = sample_input("");

        let err = table.add_column(input.clone()).unwrap_err();
        assert_eq!(err, TableError::Validation(ValidationError::EmptyName));
        assert_eq!(table.len(), 3);

        input.name = " ".to_string();
        assert!(table.add_column(input).is_err());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn add_column_rejects_undefined_numeric_without_mutating() {
        let mut table = three_property_table();
        let mut input = sample_input("1 Wall St 2A");
        input.maintenance = f64::NAN;

        let err = table.add_column(input).unwrap_err();

        assert_eq!(
            err,
            TableError::Validation(ValidationError::NonFiniteField(NumericField::Maintenance))
        );
        assert_eq!(table.len(), 3);
    }

    // =========================================================================
    // update_column_field
    // =========================================================================

    #[test]
    fn update_round_trips_through_get_column() {
        let mut table = three_property_table();

        table
            .update_column_field(1, InputField::Numeric(NumericField::Offer), "530000")
            .unwrap();

        let stored = table.get_column(1).unwrap().clone();
        assert_eq!(stored.offer, 530_000.0);
        // Derived fields match a fresh projection of the merged input.
        assert_eq!(table.columns()[1], project(&stored));
    }

    #[test]
    fn update_is_idempotent() {
        let mut table = three_property_table();
        let field = InputField::Numeric(NumericField::InterestRate);

        table.update_column_field(0, field, "4.5").unwrap();
        let once = table.clone();
        table.update_column_field(0, field, "4.5").unwrap();

        assert_eq!(table, once);
    }

    #[test]
    fn non_numeric_keystroke_is_a_no_op() {
        let mut table = three_property_table();
        let before = table.clone();

        table
            .update_column_field(0, InputField::Numeric(NumericField::Offer), "abc")
            .unwrap();
        table
            .update_column_field(0, InputField::Numeric(NumericField::Offer), "")
            .unwrap();

        assert_eq!(table, before);
    }

    #[test]
    fn name_edits_take_any_text_and_leave_numbers_alone() {
        let mut table = three_property_table();
        let derived_before = table.columns()[2].monthly_loan;

        table.update_column_field(2, InputField::Name, "99 John St PH").unwrap();

        assert_eq!(table.get_column(2).unwrap().name, "99 John St PH");
        assert_eq!(table.columns()[2].monthly_loan, derived_before);
    }

    #[test]
    fn update_rejects_out_of_range_index() {
        let mut table = three_property_table();

        let err = table
            .update_column_field(3, InputField::Name, "nope")
            .unwrap_err();

        assert_eq!(err, TableError::ColumnOutOfBounds { index: 3, len: 3 });
    }

    #[test]
    fn only_the_edited_column_changes() {
        let mut table = three_property_table();
        let untouched = table.columns()[0].clone();

        table
            .update_column_field(1, InputField::Numeric(NumericField::Maintenance), "900")
            .unwrap();

        assert_eq!(table.columns()[0], untouched);
    }

    // =========================================================================
    // update_global_variable
    // =========================================================================

    #[test]
    fn global_update_applies_uniformly_to_all_columns() {
        let mut table = three_property_table();
        // Column 1 diverged through its own edit first.
        table
            .update_column_field(1, InputField::Numeric(NumericField::InterestRate), "5.0")
            .unwrap();

        table.update_global_variable(GlobalField::InterestRate, "4.0");

        assert_eq!(table.globals().interest_rate, 4.0);
        for column in table.columns() {
            assert_eq!(column.input.interest_rate, 4.0);
            // Derived fields were re-run with the new rate.
            assert_eq!(*column, project(&column.input));
        }
        // Same inputs now, so the dependent figures agree across columns.
        let first = &table.columns()[0];
        for column in &table.columns()[1..] {
            assert_eq!(column.monthly_loan, first.monthly_loan);
        }
    }

    #[test]
    fn non_numeric_global_edit_is_a_no_op() {
        let mut table = three_property_table();
        let before = table.clone();

        table.update_global_variable(GlobalField::Closing, "abc");

        assert_eq!(table, before);
    }

    // =========================================================================
    // get_column / replace_column
    // =========================================================================

    #[test]
    fn get_column_rejects_out_of_range_index() {
        let table = three_property_table();

        assert_eq!(
            table.get_column(7).unwrap_err(),
            TableError::ColumnOutOfBounds { index: 7, len: 3 }
        );
    }

    #[test]
    fn replace_column_overwrites_and_rederives() {
        let mut table = three_property_table();
        let mut input = sample_input("20 Pine St 1508");
        input.offer = 500_000.0;
        input.down_payment_pct = 20.0;

        table.replace_column(1, input.clone()).unwrap();

        assert_eq!(table.columns()[1], project(&input));
        assert_eq!(table.columns()[1].down_payment_dollar, 100_000.0);
    }

    #[test]
    fn replace_column_validates_before_writing() {
        let mut table = three_property_table();
        let before = table.clone();

        let err = table.replace_column(1, sample_input("")).unwrap_err();

        assert_eq!(err, TableError::Validation(ValidationError::EmptyName));
        assert_eq!(table, before);
    }
}
