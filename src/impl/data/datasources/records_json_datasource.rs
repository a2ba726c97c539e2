use std::str::FromStr as _;

use fractic_server_error::ServerError;
use serde_derive::Deserialize;

use crate::{
    data::models::{clp_amount_model::ClpAmountModel, iso_timestamp_model::ISOTimestampModel},
    entities::{CommissionRecord, RecordId},
    errors::InvalidJson,
};

/// Wire shape of one commission row as the backend ledger serves it
/// (Spanish field names, string-encoded decimal amounts).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommissionRecordModel {
    id: u64,
    created_at: ISOTimestampModel,
    #[serde(default)]
    vecino_id: Option<String>,
    #[serde(default)]
    certificador_id: Option<String>,
    #[serde(default)]
    vecino_amount: Option<String>,
    #[serde(default)]
    certificador_amount: Option<String>,
    #[serde(default)]
    admin_amount: Option<String>,
    total_amount: String,
    is_paid: bool,
}

impl CommissionRecordModel {
    fn into_record(self) -> Result<CommissionRecord, ServerError> {
        Ok(CommissionRecord {
            id: RecordId(self.id),
            created_at: self.created_at.into(),
            pos_id: self.vecino_id,
            certifier_id: self.certificador_id,
            // Optional amounts are lenient (unparsable coerces to 0); the
            // required total is strict.
            pos_amount: self.vecino_amount.as_deref().map(ClpAmountModel::lenient),
            certifier_amount: self
                .certificador_amount
                .as_deref()
                .map(ClpAmountModel::lenient),
            admin_amount: self.admin_amount.as_deref().map(ClpAmountModel::lenient),
            total_amount: ClpAmountModel::from_str(&self.total_amount)?.into(),
            is_paid: self.is_paid,
        })
    }
}

pub(crate) trait RecordsJsonDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<CommissionRecord>, ServerError>;
}

pub(crate) struct RecordsJsonDatasourceImpl;

impl RecordsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RecordsJsonDatasource for RecordsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<CommissionRecord>, ServerError> {
        let models: Vec<CommissionRecordModel> =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("commission records", &e))?;
        models.into_iter().map(|m| m.into_record()).collect()
    }
}
