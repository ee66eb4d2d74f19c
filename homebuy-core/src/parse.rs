//! Tolerant parsing of numeric form text.
//!
//! Form controls deliver raw text, often mid-keystroke ("1,2", "$", "").
//! The table model must never throw while the user is typing, so parse
//! failures here are reported as `None` and the caller treats the edit
//! as a no-op.

/// Normalizes form text for numeric parsing: trims whitespace and strips
/// the decorations a currency/percent input carries (`$`, `%`, comma
/// thousands separators).
fn normalize_amount_input(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '%'))
        .collect()
}

/// Parses form text into a finite `f64`.
///
/// Handles comma thousands separators and `$`/`%` decorations
/// (e.g. `"$1,234.56"`). Returns `None` for empty, unparseable, or
/// non-finite input; the parse failure is logged at debug level since
/// partial numeric entry during typing is expected, not exceptional.
pub fn parse_amount(s: &str) -> Option<f64> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return None;
    }
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        Ok(v) => {
            tracing::debug!(input = %s, value = v, "non-finite amount ignored");
            None
        }
        Err(e) => {
            tracing::debug!(input = %s, "unparseable amount ignored: {}", e);
            None
        }
    }
}
