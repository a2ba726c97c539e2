use super::commission_rates::RateOverrides;

/// One sold document as seen by the aggregator: its price and the rate
/// overrides negotiated for it, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSale {
    /// Sale price in whole CLP.
    pub price: u64,
    pub custom_rates: Option<RateOverrides>,
}

impl DocumentSale {
    pub fn new(price: u64) -> Self {
        Self {
            price,
            custom_rates: None,
        }
    }

    pub fn with_rates(price: u64, custom_rates: RateOverrides) -> Self {
        Self {
            price,
            custom_rates: Some(custom_rates),
        }
    }
}
