use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{CommissionRecord, CommissionRates};

/// Read-only access to backend ledger snapshots (commission records) and
/// rate-table configuration. The ledger itself is owned elsewhere; this
/// crate only parses what it is handed.
#[async_trait]
pub(crate) trait LedgerRepository: Send + Sync {
    fn records_from_json(&self, s: &str) -> Result<Vec<CommissionRecord>, ServerError>;

    fn records_from_csv(&self, s: &str) -> Result<Vec<CommissionRecord>, ServerError>;

    /// Dispatches on the file extension (.json or .csv).
    async fn records_from_file<P>(&self, path: P) -> Result<Vec<CommissionRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync;

    fn rates_from_ron(&self, s: &str) -> Result<CommissionRates, ServerError>;

    async fn rates_from_file<P>(&self, path: P) -> Result<CommissionRates, ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}
