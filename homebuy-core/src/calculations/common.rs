//! Shared mortgage arithmetic.
//!
//! These helpers are the closed-form pieces the projection engine is
//! built from: the annual-percentage to monthly-rate conversion and the
//! standard fixed-rate annuity payment.

/// Loan term of a 30-year fixed mortgage, in months. Not configurable.
pub const LOAN_TERM_MONTHS: i32 = 360;

/// Converts an annual interest rate in percent to a monthly rate.
///
/// # Examples
///
/// ```
/// use homebuy_core::calculations::common::monthly_rate;
///
/// assert_eq!(monthly_rate(3.25), 3.25 / 100.0 / 12.0);
/// assert_eq!(monthly_rate(0.0), 0.0);
/// ```
pub fn monthly_rate(annual_pct: f64) -> f64 {
    annual_pct / 100.0 / 12.0
}

/// Monthly payment of a fixed-rate loan, by the standard annuity formula:
///
/// ```text
/// payment = principal × r × (1+r)^n / ((1+r)^n − 1)
/// ```
///
/// where `r` is the monthly rate and `n` = [`LOAN_TERM_MONTHS`]. At
/// `r = 0` the formula degenerates to an even split of the principal
/// over the term.
///
/// Total over IEEE inputs: rates at or below −1 have no meaningful
/// annuity (at exactly −2 the denominator vanishes and the payment is
/// non-finite); whatever the arithmetic produces is returned as-is and
/// the caller decides how to surface it.
pub fn amortized_payment(
    principal: f64,
    monthly_rate: f64,
) -> f64 {
    if monthly_rate == 0.0 {
        return principal / f64::from(LOAN_TERM_MONTHS);
    }
    let growth = (1.0 + monthly_rate).powi(LOAN_TERM_MONTHS);
    principal * monthly_rate * growth / (growth - 1.0)
}
