//! Price and billing-frequency normalization.

use crate::domain::model::Frequency;
use regex::Regex;
use std::sync::LazyLock;

pub const MONTHS_PER_YEAR: f64 = 12.0;

// ASCII digits only; `\d` would also match other Unicode digit classes.
static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+").expect("price pattern is valid"));

static YEARLY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)year|annu").expect("yearly pattern is valid"));

/// Returns the leftmost decimal number (`9.99`, `1234.5`) in `value`.
///
/// Whole numbers without a decimal point are not recognized, so `"$10"`
/// yields `None`. Any currency symbol around the number is ignored.
pub fn find_price(value: &str) -> Option<f64> {
    PRICE_PATTERN
        .find(value)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Classifies billing text as yearly when it mentions "year" or "annu"
/// (annual, annually, per annum) in any case, monthly otherwise.
pub fn find_frequency(value: &str) -> Frequency {
    if YEARLY_PATTERN.is_match(value) {
        Frequency::Yearly
    } else {
        Frequency::Monthly
    }
}

/// Converts `price`, billed every `frequency`, to the equivalent price
/// billed every `target`.
pub fn target_frequency_price(price: f64, frequency: Frequency, target: Frequency) -> f64 {
    if frequency == target {
        return price;
    }
    match target {
        Frequency::Yearly => price * MONTHS_PER_YEAR,
        Frequency::Monthly => price / MONTHS_PER_YEAR,
    }
}
