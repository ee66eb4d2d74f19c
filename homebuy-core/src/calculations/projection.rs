//! The projection engine: raw property inputs to a derived financial
//! profile.
//!
//! # Derivation
//!
//! All derived figures come from the raw inputs in one pass:
//!
//! | Field                 | Derivation                                        |
//! |-----------------------|---------------------------------------------------|
//! | `down_payment_dollar` | `down_payment_pct / 100 × offer`                  |
//! | `money_left`          | `start_asset − down_payment_dollar − closing`     |
//! | `loan_amount`         | `offer − down_payment_dollar`                     |
//! | `monthly_interest_rate` | `(interest_rate / 100) / 12`                    |
//! | `monthly_loan`        | 360-month annuity payment on `loan_amount`        |
//! | `monthly`             | `maintenance + monthly_loan`                      |
//! | `post_closing_asset`  | `money_left / monthly` (months of reserve)        |
//!
//! # Degenerate inputs
//!
//! [`project`] is total over finite inputs and never panics. When the
//! arithmetic has no finite answer (a zero `monthly` cost makes the
//! reserve division undefined; a monthly rate of −2 zeroes the annuity
//! denominator) the affected fields carry IEEE non-finite
//! values (`NaN`/`±∞`), exactly as the divisions produce them.
//! [`PropertyProjection::is_degenerate`] reports this so a caller can
//! surface it; the display layer renders such fields as "—".
//!
//! # Example
//!
//! ```
//! use homebuy_core::models::PropertyInput;
//! use homebuy_core::calculations::project;
//!
//! let input = PropertyInput {
//!     name: "88 Bleecker St 6B".to_string(),
//!     start_asset: 150000.0,
//!     asking: 565000.0,
//!     offer: 545000.0,
//!     down_payment_pct: 25.0,
//!     closing: 10000.0,
//!     interest_rate: 3.25,
//!     maintenance: 574.0,
//! };
//!
//! let projection = project(&input);
//!
//! assert_eq!(projection.down_payment_dollar, 136250.0);
//! assert_eq!(projection.loan_amount, 408750.0);
//! assert_eq!(projection.money_left, 3750.0);
//! assert!(!projection.is_degenerate());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::common::{amortized_payment, monthly_rate};
use crate::models::PropertyInput;

/// A property's raw inputs plus every derived financial figure.
///
/// Deterministic pure function of the embedded [`PropertyInput`] and
/// nothing else; rebuilt wholesale whenever any input changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyProjection {
    /// The raw inputs this projection was derived from.
    pub input: PropertyInput,

    /// Down payment in dollars.
    pub down_payment_dollar: f64,

    /// Cash remaining after down payment and closing costs.
    pub money_left: f64,

    /// Principal borrowed.
    pub loan_amount: f64,

    /// Monthly interest rate (annual percentage / 100 / 12).
    pub monthly_interest_rate: f64,

    /// Monthly mortgage payment over the 360-month term.
    pub monthly_loan: f64,

    /// Total monthly cost: maintenance plus mortgage payment.
    pub monthly: f64,

    /// Post-closing reserve, in months of `monthly` affordability.
    pub post_closing_asset: f64,
}

impl PropertyProjection {
    /// True when any derived field is non-finite.
    pub fn is_degenerate(&self) -> bool {
        ![
            self.down_payment_dollar,
            self.money_left,
            self.loan_amount,
            self.monthly_interest_rate,
            self.monthly_loan,
            self.monthly,
            self.post_closing_asset,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Computes the full derived profile for one property.
///
/// Pure and side-effect free; the argument is cloned into the result
/// untouched. See the module docs for the derivation and the
/// degenerate-input policy.
pub fn project(input: &PropertyInput) -> PropertyProjection {
    let down_payment_dollar = input.down_payment_pct / 100.0 * input.offer;
    let money_left = input.start_asset - down_payment_dollar - input.closing;
    let loan_amount = input.offer - down_payment_dollar;
    let monthly_interest_rate = monthly_rate(input.interest_rate);
    let monthly_loan = amortized_payment(loan_amount, monthly_interest_rate);
    let monthly = input.maintenance + monthly_loan;
    let post_closing_asset = money_left / monthly;

    PropertyProjection {
        input: input.clone(),
        down_payment_dollar,
        money_left,
        loan_amount,
        monthly_interest_rate,
        monthly_loan,
        monthly,
        post_closing_asset,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bleecker_input() -> PropertyInput {
        PropertyInput {
            name: "88 Bleecker St 6B".to_string(),
            start_asset: 150_000.0,
            asking: 565_000.0,
            offer: 545_000.0,
            down_payment_pct: 25.0,
            closing: 10_000.0,
            interest_rate: 3.25,
            maintenance: 574.0,
        }
    }

    // =========================================================================
    // Concrete scenario
    // =========================================================================

    #[test]
    fn bleecker_scenario_derives_documented_figures() {
        let projection = project(&bleecker_input());

        assert_eq!(projection.down_payment_dollar, 136_250.0);
        assert_eq!(projection.loan_amount, 408_750.0);
        assert_eq!(projection.money_left, 3_750.0);
        assert_eq!(projection.monthly_interest_rate, 3.25 / 100.0 / 12.0);

        // Independent evaluation of the 360-month annuity at 3.25/1200,
        // matched to ±0.01.
        let r = 3.25 / 1_200.0;
        let growth = (1.0_f64 + r).powf(360.0);
        let expected_loan = 408_750.0 * r * growth / (growth - 1.0);
        assert!((projection.monthly_loan - expected_loan).abs() < 0.01);

        assert_eq!(projection.monthly, 574.0 + projection.monthly_loan);
        assert!(
            (projection.post_closing_asset - 3_750.0 / projection.monthly).abs() < f64::EPSILON
        );
    }

    // =========================================================================
    // Properties
    // =========================================================================

    #[test]
    fn projection_is_deterministic() {
        let input = bleecker_input();

        assert_eq!(project(&input), project(&input));
    }

    #[test]
    fn projection_does_not_mutate_its_input() {
        let input = bleecker_input();
        let before = input.clone();

        let _ = project(&input);

        assert_eq!(input, before);
    }

    #[test]
    fn zero_interest_splits_loan_over_term_exactly() {
        let mut input = bleecker_input();
        input.interest_rate = 0.0;

        let projection = project(&input);

        assert_eq!(projection.monthly_loan, projection.loan_amount / 360.0);
        assert!(!projection.is_degenerate());
    }

    // =========================================================================
    // Degenerate inputs
    // =========================================================================

    #[test]
    fn zero_monthly_cost_yields_non_finite_reserve() {
        // Fully cash-funded (offer covered by the down payment) with no
        // maintenance: monthly cost is 0 and months-of-reserve has no
        // finite answer.
        let mut input = bleecker_input();
        input.down_payment_pct = 100.0;
        input.maintenance = 0.0;

        let projection = project(&input);

        assert_eq!(projection.loan_amount, 0.0);
        assert_eq!(projection.monthly, 0.0);
        assert!(!projection.post_closing_asset.is_finite());
        assert!(projection.is_degenerate());
    }

    #[test]
    fn zero_annuity_denominator_obeys_non_finite_policy() {
        // A monthly rate of -2 makes (1+r)^360 exactly 1, so the annuity
        // denominator is 0. interest_rate = -2400 produces that rate.
        let mut input = bleecker_input();
        input.interest_rate = -2_400.0;

        let projection = project(&input);

        assert!(!projection.monthly_loan.is_finite());
        assert!(projection.is_degenerate());
    }
}
