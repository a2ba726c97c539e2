use crate::entities::EarningsProjection;

pub(crate) const DEFAULT_WORKING_DAYS_PER_MONTH: f64 = 22.0;

/// Extrapolates daily volume/price assumptions into daily, monthly, and
/// yearly earnings. Estimates for "what-if" widgets; no rounding.
pub(crate) fn project(
    avg_docs_per_day: f64,
    avg_doc_price: f64,
    commission_rate: f64,
    working_days_per_month: f64,
) -> EarningsProjection {
    let daily_earnings = avg_docs_per_day * avg_doc_price * commission_rate;
    let monthly_earnings = daily_earnings * working_days_per_month;
    EarningsProjection {
        daily_earnings,
        monthly_earnings,
        yearly_earnings: monthly_earnings * 12.0,
        documents_per_month: avg_docs_per_day * working_days_per_month,
    }
}
