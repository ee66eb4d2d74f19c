//! The add/edit property dialog: working form and state machine.
//!
//! The dialog holds a working copy of one property as raw text, the way
//! the form controls deliver it. Nothing touches the table until save,
//! and save only goes through when every required field is present;
//! otherwise the dialog stays open with `missing_fields` set so the
//! presentation layer can show an inline error.

use homebuy_core::models::{GlobalFinancialVariables, NumericField, PropertyInput};
use homebuy_core::parse::parse_amount;

/// Which column a dialog save will write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTarget {
    /// Append a brand-new property.
    New,
    /// Replace the column at this index.
    Edit(usize),
}

/// Raw text working copy of a property being added or edited.
///
/// Fields stay `String` until save so partial numeric entry never
/// throws; parsing happens once, in [`PropertyForm::to_input`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyForm {
    pub name: String,
    pub start_asset: String,
    pub asking: String,
    pub offer: String,
    pub down_payment_pct: String,
    pub closing: String,
    pub interest_rate: String,
    pub maintenance: String,
}

impl PropertyForm {
    /// A blank form pre-seeded with the current global variables, for
    /// the "add property" dialog: a brand-new property is assumed to
    /// share the defaults.
    pub fn from_globals(globals: &GlobalFinancialVariables) -> Self {
        Self {
            start_asset: globals.start_asset.to_string(),
            closing: globals.closing.to_string(),
            interest_rate: globals.interest_rate.to_string(),
            ..Self::default()
        }
    }

    /// A form seeded with a column's stored inputs, for the edit dialog.
    pub fn from_input(input: &PropertyInput) -> Self {
        Self {
            name: input.name.clone(),
            start_asset: input.start_asset.to_string(),
            asking: input.asking.to_string(),
            offer: input.offer.to_string(),
            down_payment_pct: input.down_payment_pct.to_string(),
            closing: input.closing.to_string(),
            interest_rate: input.interest_rate.to_string(),
            maintenance: input.maintenance.to_string(),
        }
    }

    fn numeric_entries(&self) -> [(NumericField, &str); 7] {
        [
            (NumericField::StartAsset, self.start_asset.as_str()),
            (NumericField::Asking, self.asking.as_str()),
            (NumericField::Offer, self.offer.as_str()),
            (NumericField::DownPaymentPct, self.down_payment_pct.as_str()),
            (NumericField::Closing, self.closing.as_str()),
            (NumericField::InterestRate, self.interest_rate.as_str()),
            (NumericField::Maintenance, self.maintenance.as_str()),
        ]
    }

    /// Collects the form into a [`PropertyInput`].
    ///
    /// Returns the list of offending field names when the name is blank
    /// or any numeric field is empty/unparseable; the caller keeps the
    /// dialog open and flags them.
    pub fn to_input(&self) -> Result<PropertyInput, Vec<&'static str>> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }

        let mut input = PropertyInput {
            name: self.name.trim().to_string(),
            start_asset: 0.0,
            asking: 0.0,
            offer: 0.0,
            down_payment_pct: 0.0,
            closing: 0.0,
            interest_rate: 0.0,
            maintenance: 0.0,
        };
        for (field, raw) in self.numeric_entries() {
            match parse_amount(raw) {
                Some(value) => input.set_numeric(field, value),
                None => missing.push(field.as_str()),
            }
        }

        if missing.is_empty() { Ok(input) } else { Err(missing) }
    }
}

/// Transient state of an open dialog. Dropped on save or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogState {
    pub target: DialogTarget,
    pub form: PropertyForm,
    /// Set when the last save attempt had missing/unparseable fields.
    pub missing_fields: bool,
}

impl DialogState {
    /// Open(new): working data seeded from the current globals.
    pub fn open_new(globals: &GlobalFinancialVariables) -> Self {
        Self {
            target: DialogTarget::New,
            form: PropertyForm::from_globals(globals),
            missing_fields: false,
        }
    }

    /// Open(edit): working data seeded from the column being edited.
    pub fn open_edit(
        index: usize,
        input: &PropertyInput,
    ) -> Self {
        Self {
            target: DialogTarget::Edit(index),
            form: PropertyForm::from_input(input),
            missing_fields: false,
        }
    }
}
