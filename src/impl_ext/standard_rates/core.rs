use crate::entities::CommissionRates;

/// Standard network split: 40% POS operator, 35% certifier, 25%
/// administration. Engines default to this table unless a custom one is
/// injected.
pub const STANDARD_RATES: CommissionRates = CommissionRates {
    pos_rate: 0.40,
    certifier_rate: 0.35,
    admin_rate: 0.25,
};
