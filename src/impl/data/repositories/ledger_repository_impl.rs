use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        rates_ron_datasource::{RatesRonDatasource, RatesRonDatasourceImpl},
        records_csv_datasource::{RecordsCsvDatasource, RecordsCsvDatasourceImpl},
        records_json_datasource::{RecordsJsonDatasource, RecordsJsonDatasourceImpl},
    },
    domain::repositories::ledger_repository::LedgerRepository,
    entities::{CommissionRecord, CommissionRates},
    errors::{ReadError, UnsupportedSnapshotFormat},
};

pub(crate) struct LedgerRepositoryImpl<
    DS1 = RecordsJsonDatasourceImpl, // Defaults.
    DS2 = RecordsCsvDatasourceImpl,
    DS3 = RatesRonDatasourceImpl,
> where
    DS1: RecordsJsonDatasource + Send + Sync,
    DS2: RecordsCsvDatasource + Send + Sync,
    DS3: RatesRonDatasource + Send + Sync,
{
    records_json_datasource: DS1,
    records_csv_datasource: DS2,
    rates_datasource: DS3,
}

#[async_trait]
impl<DS1, DS2, DS3> LedgerRepository for LedgerRepositoryImpl<DS1, DS2, DS3>
where
    DS1: RecordsJsonDatasource + Send + Sync,
    DS2: RecordsCsvDatasource + Send + Sync,
    DS3: RatesRonDatasource + Send + Sync,
{
    fn records_from_json(&self, s: &str) -> Result<Vec<CommissionRecord>, ServerError> {
        self.records_json_datasource.from_string(s)
    }

    fn records_from_csv(&self, s: &str) -> Result<Vec<CommissionRecord>, ServerError> {
        self.records_csv_datasource.from_string(s)
    }

    async fn records_from_file<P>(&self, path: P) -> Result<Vec<CommissionRecord>, ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        match extension.as_str() {
            "json" => self.records_from_json(&contents),
            "csv" => self.records_from_csv(&contents),
            other => Err(UnsupportedSnapshotFormat::new(other)),
        }
    }

    fn rates_from_ron(&self, s: &str) -> Result<CommissionRates, ServerError> {
        self.rates_datasource.from_string(s)
    }

    async fn rates_from_file<P>(&self, path: P) -> Result<CommissionRates, ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.rates_from_ron(&contents)
    }
}

impl LedgerRepositoryImpl {
    pub(crate) fn new() -> Self {
        LedgerRepositoryImpl {
            records_json_datasource: RecordsJsonDatasourceImpl::new(),
            records_csv_datasource: RecordsCsvDatasourceImpl::new(),
            rates_datasource: RatesRonDatasourceImpl::new(),
        }
    }
}
