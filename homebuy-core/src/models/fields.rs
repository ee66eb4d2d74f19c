//! Field addressing for the string boundary.
//!
//! Form controls identify the field they edit by name (`"offer"`,
//! `"interestRate"`, ...). These enums give those names a typed
//! representation so the table model never matches on raw strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a field name from the presentation layer does not
/// match any known field.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown field name '{0}'")]
pub struct UnknownFieldError(pub String);

/// The numeric input fields of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericField {
    StartAsset,
    Asking,
    Offer,
    DownPaymentPct,
    Closing,
    InterestRate,
    Maintenance,
}

impl NumericField {
    /// All numeric fields, in input-form order.
    pub const ALL: [NumericField; 7] = [
        NumericField::StartAsset,
        NumericField::Asking,
        NumericField::Offer,
        NumericField::DownPaymentPct,
        NumericField::Closing,
        NumericField::InterestRate,
        NumericField::Maintenance,
    ];

    /// The field name used by the presentation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            NumericField::StartAsset => "startAsset",
            NumericField::Asking => "asking",
            NumericField::Offer => "offer",
            NumericField::DownPaymentPct => "downPaymentPct",
            NumericField::Closing => "closing",
            NumericField::InterestRate => "interestRate",
            NumericField::Maintenance => "maintenance",
        }
    }
}

impl TryFrom<&str> for NumericField {
    type Error = UnknownFieldError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        NumericField::ALL
            .into_iter()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| UnknownFieldError(name.to_string()))
    }
}

impl fmt::Display for NumericField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any editable input field of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputField {
    Name,
    Numeric(NumericField),
}

impl InputField {
    pub fn as_str(self) -> &'static str {
        match self {
            InputField::Name => "name",
            InputField::Numeric(n) => n.as_str(),
        }
    }
}

impl TryFrom<&str> for InputField {
    type Error = UnknownFieldError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        if name == "name" {
            return Ok(InputField::Name);
        }
        NumericField::try_from(name).map(InputField::Numeric)
    }
}

impl fmt::Display for InputField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The input fields shared by default across all properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlobalField {
    StartAsset,
    Closing,
    InterestRate,
}

impl GlobalField {
    pub const ALL: [GlobalField; 3] = [
        GlobalField::StartAsset,
        GlobalField::Closing,
        GlobalField::InterestRate,
    ];

    pub fn as_str(self) -> &'static str {
        self.numeric_field().as_str()
    }

    /// The per-property field this global variable feeds.
    pub fn numeric_field(self) -> NumericField {
        match self {
            GlobalField::StartAsset => NumericField::StartAsset,
            GlobalField::Closing => NumericField::Closing,
            GlobalField::InterestRate => NumericField::InterestRate,
        }
    }
}

impl TryFrom<&str> for GlobalField {
    type Error = UnknownFieldError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        GlobalField::ALL
            .into_iter()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| UnknownFieldError(name.to_string()))
    }
}

impl fmt::Display for GlobalField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
