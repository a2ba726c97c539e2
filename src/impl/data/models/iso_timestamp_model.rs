use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::InvalidIsoTimestamp;

/// Creation timestamp as the backend ledger encodes it. Accepts full RFC
/// 3339 ("2025-03-04T12:30:00.000Z"), a naive datetime without offset, or a
/// bare date (taken as midnight).
#[derive(Debug)]
pub(crate) struct ISOTimestampModel(NaiveDateTime);

impl FromStr for ISOTimestampModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(ISOTimestampModel(dt.naive_utc()));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(ISOTimestampModel(dt));
        }
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| InvalidIsoTimestamp::with_debug(s, &e))?;
        Ok(ISOTimestampModel(d.and_hms_opt(0, 0, 0).unwrap_or_default()))
    }
}

impl<'de> Deserialize<'de> for ISOTimestampModel {
    fn deserialize<D>(deserializer: D) -> Result<ISOTimestampModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISOTimestampModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Into<NaiveDateTime> for ISOTimestampModel {
    fn into(self) -> NaiveDateTime {
        self.0
    }
}
