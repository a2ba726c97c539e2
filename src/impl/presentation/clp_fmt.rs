use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Format a CLP amount with thousands separators and the currency symbol.
///
/// CLP has no minor unit (exponent 0), so amounts are rounded to whole
/// pesos for display. Uses the en locale (1,000) regardless of the user's
/// locale, for consistency across reports.
pub(crate) fn format_clp(amount: f64) -> String {
    let rounded = (amount.round() as i64).to_formatted_string(&Locale::en);
    format!("{} {}", rounded, Currency::CLP.symbol())
}
