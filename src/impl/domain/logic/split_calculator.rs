use fractic_server_error::ServerError;

use crate::{
    entities::{CommissionBreakdown, CommissionRates, RateOverrides},
    errors::UnbalancedCommissionRates,
};

/// Splits one document's sale price between the three stakeholders.
///
/// The POS and certifier shares are rounded half-away-from-zero
/// (`f64::round`); administration takes whatever is left
/// (`price - pos - certifier`), so it absorbs the rounding remainder and
/// the shares always sum exactly to the price. Administration is the
/// reconciliation account; the remainder must never go anywhere else.
pub(crate) struct SplitCalculator {
    default_rates: CommissionRates,
}

impl SplitCalculator {
    pub(crate) fn new(default_rates: CommissionRates) -> Self {
        Self { default_rates }
    }

    pub(crate) fn split(
        &self,
        price: u64,
        custom_rates: Option<&RateOverrides>,
    ) -> Result<CommissionBreakdown, ServerError> {
        let rates = match custom_rates {
            Some(overrides) => self.default_rates.with_overrides(overrides),
            None => self.default_rates,
        };
        if !rates.is_balanced() {
            return Err(UnbalancedCommissionRates::new(
                rates.pos_rate,
                rates.certifier_rate,
                rates.admin_rate,
                rates.sum(),
            ));
        }

        let pos = (price as f64 * rates.pos_rate).round() as i64;
        let certifier = (price as f64 * rates.certifier_rate).round() as i64;
        let admin = price as i64 - pos - certifier;

        Ok(CommissionBreakdown {
            pos,
            certifier,
            admin,
            total: price as i64,
        })
    }
}
