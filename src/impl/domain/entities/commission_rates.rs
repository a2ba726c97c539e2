use serde_derive::Deserialize;

/// Fraction of a document's sale price owed to each stakeholder.
///
/// A rate table is only usable when the three fractions add up to 1.0
/// (within [`CommissionRates::TOLERANCE`]); the split calculator rejects
/// unbalanced tables before doing any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CommissionRates {
    pub pos_rate: f64,
    pub certifier_rate: f64,
    pub admin_rate: f64,
}

impl CommissionRates {
    /// Allowed deviation of the rate sum from 1.0.
    pub const TOLERANCE: f64 = 0.01;

    pub fn sum(&self) -> f64 {
        self.pos_rate + self.certifier_rate + self.admin_rate
    }

    pub fn is_balanced(&self) -> bool {
        (self.sum() - 1.0).abs() <= Self::TOLERANCE
    }

    /// Per-field merge: overridden fields replace, unspecified fields keep
    /// the values of `self`.
    pub fn with_overrides(&self, overrides: &RateOverrides) -> CommissionRates {
        CommissionRates {
            pos_rate: overrides.pos_rate.unwrap_or(self.pos_rate),
            certifier_rate: overrides.certifier_rate.unwrap_or(self.certifier_rate),
            admin_rate: overrides.admin_rate.unwrap_or(self.admin_rate),
        }
    }
}

/// Partial rate table, merged onto a full one with
/// [`CommissionRates::with_overrides`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RateOverrides {
    pub pos_rate: Option<f64>,
    pub certifier_rate: Option<f64>,
    pub admin_rate: Option<f64>,
}

/// The three parties a document sale is split between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StakeholderRole {
    /// Vecino: retail point-of-sale partner selling the document.
    Pos,
    /// Certificador: licensed professional certifying the document.
    Certifier,
    Admin,
}
