use fractic_server_error::ServerError;
use ron::from_str;

use crate::{entities::CommissionRates, errors::InvalidRon};

/// Parses a RON rate-table file, e.g.
/// `(pos_rate: 0.40, certifier_rate: 0.35, admin_rate: 0.25)`.
///
/// An unbalanced table loads fine; it is rejected at calculation time, when
/// the split calculator checks the merged rates.
pub(crate) trait RatesRonDatasource {
    fn from_string(&self, s: &str) -> Result<CommissionRates, ServerError>;
}

pub(crate) struct RatesRonDatasourceImpl;

impl RatesRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RatesRonDatasource for RatesRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<CommissionRates, ServerError> {
        from_str(s).map_err(|e| InvalidRon::with_debug("CommissionRates", &e))
    }
}
