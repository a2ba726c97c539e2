use fractic_server_error::ServerError;

use crate::entities::{CommissionBreakdown, DocumentSale};

use super::split_calculator::SplitCalculator;

/// Sums per-document splits into portfolio totals. Each sale's own rate
/// overrides apply independently; there is no cross-document merging.
pub(crate) struct Aggregator<'a> {
    calculator: &'a SplitCalculator,
}

impl<'a> Aggregator<'a> {
    pub(crate) fn new(calculator: &'a SplitCalculator) -> Self {
        Self { calculator }
    }

    pub(crate) fn aggregate(
        &self,
        sales: &[DocumentSale],
    ) -> Result<CommissionBreakdown, ServerError> {
        sales
            .iter()
            .try_fold(CommissionBreakdown::ZERO, |acc, sale| {
                let b = self.calculator.split(sale.price, sale.custom_rates.as_ref())?;
                Ok(CommissionBreakdown {
                    pos: acc.pos + b.pos,
                    certifier: acc.certifier + b.certifier,
                    admin: acc.admin + b.admin,
                    total: acc.total + b.total,
                })
            })
    }
}
