use std::str::FromStr as _;

use fractic_server_error::ServerError;

use crate::{
    data::models::{clp_amount_model::ClpAmountModel, iso_timestamp_model::ISOTimestampModel},
    entities::{CommissionRecord, RecordId},
    errors::{InvalidCsv, InvalidCsvContent},
};

/// Parses the ledger's CSV settlement export. Columns:
/// id, createdAt, vecinoId, certificadorId, vecinoAmount,
/// certificadorAmount, adminAmount, totalAmount, isPaid.
pub(crate) trait RecordsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<CommissionRecord>, ServerError>;
}

pub(crate) struct RecordsCsvDatasourceImpl;

impl RecordsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

fn optional(field: Option<&str>) -> Option<&str> {
    match field {
        Some(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

impl RecordsCsvDatasource for RecordsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<CommissionRecord>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_created_at = r.get(1).unwrap_or("");
                    let raw_pos_id = optional(r.get(2));
                    let raw_certifier_id = optional(r.get(3));
                    let raw_pos_amount = optional(r.get(4));
                    let raw_certifier_amount = optional(r.get(5));
                    let raw_admin_amount = optional(r.get(6));
                    let raw_total_amount = r.get(7).unwrap_or("0");
                    let raw_is_paid = r.get(8).unwrap_or("false");

                    // Parse.
                    let id: u64 = raw_id
                        .parse()
                        .map_err(|_| InvalidCsvContent::new("invalid record id"))?;
                    let created_at: ISOTimestampModel =
                        ISOTimestampModel::from_str(raw_created_at)?;
                    let total_amount: ClpAmountModel =
                        ClpAmountModel::from_str(raw_total_amount)?;
                    let is_paid = matches!(raw_is_paid.trim(), "true" | "1");

                    // Build.
                    Ok(CommissionRecord {
                        id: RecordId(id),
                        created_at: created_at.into(),
                        pos_id: raw_pos_id.map(Into::into),
                        certifier_id: raw_certifier_id.map(Into::into),
                        pos_amount: raw_pos_amount.map(ClpAmountModel::lenient),
                        certifier_amount: raw_certifier_amount.map(ClpAmountModel::lenient),
                        admin_amount: raw_admin_amount.map(ClpAmountModel::lenient),
                        total_amount: total_amount.into(),
                        is_paid,
                    })
                })
            })
            .collect()
    }
}
