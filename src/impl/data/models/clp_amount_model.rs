use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidClpAmount;

/// Decimal-string amount as the backend ledger encodes it ("12500.00",
/// "1,250", "(500)"). Thousands separators are stripped; a parenthesized
/// value is negative.
#[derive(Debug)]
pub(crate) struct ClpAmountModel(pub f64);

impl FromStr for ClpAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let is_negative = raw.trim().starts_with("(") && raw.trim().ends_with(")");
        let numeric_part = raw.trim().trim_matches(|c| c == '(' || c == ')');
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|_| InvalidClpAmount::new(numeric_part))?;
        Ok(ClpAmountModel(if is_negative { -amount } else { amount }))
    }
}

impl ClpAmountModel {
    /// Lenient parse for optional per-role amounts: an unparsable string is
    /// coerced to 0 instead of rejected (reporting tool, not a ledger of
    /// record).
    pub(crate) fn lenient(s: &str) -> f64 {
        Self::from_str(s).map(Into::into).unwrap_or(0.0)
    }
}

impl Into<f64> for ClpAmountModel {
    fn into(self) -> f64 {
        self.0
    }
}
