use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::ledger_repository_impl::LedgerRepositoryImpl,
    domain::{
        logic::settlement_planner::SettlementPlanner,
        repositories::ledger_repository::LedgerRepository,
    },
    entities::SettlementPlan,
};

/// Ingests a ledger snapshot and turns its unpaid records into a batch
/// settlement plan.
#[async_trait]
pub(crate) trait SettlementUsecase: Send + Sync {
    fn plan_from_json(&self, records_json: &str) -> Result<SettlementPlan, ServerError>;

    fn plan_from_csv(&self, records_csv: &str) -> Result<SettlementPlan, ServerError>;

    async fn plan_from_file<P>(&self, path: P) -> Result<SettlementPlan, ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}

pub(crate) struct SettlementUsecaseImpl<
    R1 = LedgerRepositoryImpl, // Default.
> where
    R1: LedgerRepository,
{
    ledger_repository: R1,
}

#[async_trait]
impl<R1> SettlementUsecase for SettlementUsecaseImpl<R1>
where
    R1: LedgerRepository,
{
    fn plan_from_json(&self, records_json: &str) -> Result<SettlementPlan, ServerError> {
        let records = self.ledger_repository.records_from_json(records_json)?;
        Ok(SettlementPlanner::new().plan(&records))
    }

    fn plan_from_csv(&self, records_csv: &str) -> Result<SettlementPlan, ServerError> {
        let records = self.ledger_repository.records_from_csv(records_csv)?;
        Ok(SettlementPlanner::new().plan(&records))
    }

    async fn plan_from_file<P>(&self, path: P) -> Result<SettlementPlan, ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let records = self.ledger_repository.records_from_file(path).await?;
        Ok(SettlementPlanner::new().plan(&records))
    }
}

impl SettlementUsecaseImpl {
    pub(crate) fn new() -> Self {
        SettlementUsecaseImpl {
            ledger_repository: LedgerRepositoryImpl::new(),
        }
    }
}
