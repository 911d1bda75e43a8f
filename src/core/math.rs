//! Division helpers shared by every ratio in the crate.
//!
//! A zero or non-finite denominator yields `None` instead of NaN or infinity so
//! callers decide explicitly what an undefined ratio means for them.

/// Returns `numerator / denominator`, or `None` when the result is undefined.
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return None;
    }
    Some(numerator / denominator)
}

/// Expresses `part` as a percentage of `total`, treating an undefined ratio as 0.
pub fn percent_of(part: f64, total: f64) -> f64 {
    ratio(part, total).map(|value| value * 100.0).unwrap_or(0.0)
}

/// Formats an amount with thousands separators and no decimals, e.g. `12,500`.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
