use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fields::NumericField;

/// Error returned when a [`PropertyInput`] fails validation before being
/// written into the comparison table.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// The property name is empty or whitespace-only.
    #[error("property name must not be empty")]
    EmptyName,

    /// A numeric field holds a non-finite value (NaN or infinity).
    #[error("field '{0}' is not a finite number")]
    NonFiniteField(NumericField),
}

/// One property's raw editable fields.
///
/// Currency amounts and percentages are plain `f64`; the calculation
/// layer consumes them as-is and the display layer owns all formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInput {
    /// Free-text label for the property (address, listing name).
    pub name: String,

    /// Liquid assets on hand before the purchase.
    pub start_asset: f64,

    /// Listed asking price.
    pub asking: f64,

    /// Offer actually made.
    pub offer: f64,

    /// Down payment as a percentage of the offer.
    pub down_payment_pct: f64,

    /// Estimated closing costs.
    pub closing: f64,

    /// Annual interest rate, as a percentage.
    pub interest_rate: f64,

    /// Monthly maintenance / common charges.
    pub maintenance: f64,
}

impl PropertyInput {
    /// Reads a numeric field by its typed name.
    pub fn numeric(
        &self,
        field: NumericField,
    ) -> f64 {
        match field {
            NumericField::StartAsset => self.start_asset,
            NumericField::Asking => self.asking,
            NumericField::Offer => self.offer,
            NumericField::DownPaymentPct => self.down_payment_pct,
            NumericField::Closing => self.closing,
            NumericField::InterestRate => self.interest_rate,
            NumericField::Maintenance => self.maintenance,
        }
    }

    /// Writes a numeric field by its typed name.
    pub fn set_numeric(
        &mut self,
        field: NumericField,
        value: f64,
    ) {
        match field {
            NumericField::StartAsset => self.start_asset = value,
            NumericField::Asking => self.asking = value,
            NumericField::Offer => self.offer = value,
            NumericField::DownPaymentPct => self.down_payment_pct = value,
            NumericField::Closing => self.closing = value,
            NumericField::InterestRate => self.interest_rate = value,
            NumericField::Maintenance => self.maintenance = value,
        }
    }

    /// Validates the input before it is written into the table.
    ///
    /// Rules:
    /// - name is required and must not be blank
    /// - every numeric field must be a finite number
    ///
    /// Anything beyond that (negative prices, implausible rates) is
    /// deliberately accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        for field in NumericField::ALL {
            if !self.numeric(field).is_finite() {
                return Err(ValidationError::NonFiniteField(field));
            }
        }
        Ok(())
    }
}
