use serde::{Deserialize, Serialize};

use super::fields::GlobalField;

/// Financial variables shared across every property by default.
///
/// A brand-new property starts from these values; an individual property
/// may diverge through its own edit dialog, but the next global update
/// overwrites the field on every column again (no sticky overrides).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalFinancialVariables {
    pub start_asset: f64,
    pub closing: f64,
    pub interest_rate: f64,
}

impl GlobalFinancialVariables {
    pub fn get(
        &self,
        field: GlobalField,
    ) -> f64 {
        match field {
            GlobalField::StartAsset => self.start_asset,
            GlobalField::Closing => self.closing,
            GlobalField::InterestRate => self.interest_rate,
        }
    }

    pub fn set(
        &mut self,
        field: GlobalField,
        value: f64,
    ) {
        match field {
            GlobalField::StartAsset => self.start_asset = value,
            GlobalField::Closing => self.closing = value,
            GlobalField::InterestRate => self.interest_rate = value,
        }
    }
}

impl Default for GlobalFinancialVariables {
    fn default() -> Self {
        Self {
            start_asset: 150_000.0,
            closing: 10_000.0,
            interest_rate: 3.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn get_and_set_agree_for_every_global_field() {
        let mut globals = GlobalFinancialVariables::default();

        for (i, field) in GlobalField::ALL.into_iter().enumerate() {
            globals.set(field, 1_000.0 + i as f64);
            assert_eq!(globals.get(field), 1_000.0 + i as f64);
        }
    }
}
