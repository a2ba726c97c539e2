/// What-if extrapolation of a point of sale's earnings. Estimates, not
/// settled amounts, so no rounding is applied anywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarningsProjection {
    pub daily_earnings: f64,
    pub monthly_earnings: f64,
    pub yearly_earnings: f64,
    pub documents_per_month: f64,
}
