//! Wire model for license records.

use chrono::{NaiveDate, NaiveDateTime};
use keymint_key::LicenseKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Expiration stamped on every payload: `9999-12-31T23:59:59`.
///
/// The server treats licenses as never-expiring; activity is driven by the
/// `active` flag instead.
#[must_use]
pub fn never_expires() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .expect("valid constant timestamp")
}

/// How often the server refills an account's validation points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplenishInterval {
    /// Every ten seconds.
    TenSeconds,
    /// Every minute.
    Minute,
    /// Every hour.
    #[default]
    Hour,
    /// Every day.
    Day,
}

impl ReplenishInterval {
    /// Wire name, e.g. `HOUR`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TenSeconds => "TEN_SECONDS",
            Self::Minute => "MINUTE",
            Self::Hour => "HOUR",
            Self::Day => "DAY",
        }
    }
}

impl fmt::Display for ReplenishInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplenishInterval {
    type Err = UnknownInterval;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TEN_SECONDS" => Ok(Self::TenSeconds),
            "MINUTE" => Ok(Self::Minute),
            "HOUR" => Ok(Self::Hour),
            "DAY" => Ok(Self::Day),
            other => Err(UnknownInterval(other.to_string())),
        }
    }
}

/// Error for unrecognized replenish interval names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown replenish interval {0:?}")]
pub struct UnknownInterval(pub String);

/// A license record as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    /// Server-assigned record id; all mutations address this.
    pub id: i64,
    /// Whether the license currently validates.
    pub active: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub ip_limit: u32,
    #[serde(default)]
    pub license_scope: Option<String>,
    pub expiration_date: NaiveDateTime,
    pub validation_points: u32,
    pub validation_limit: u32,
    pub replenish_amount: u32,
    pub replenish_interval: ReplenishInterval,
    /// The derived key the record was created under.
    pub license_key: LicenseKey,
}

/// The body POSTed or PATCHed to the server.
///
/// Same shape as [`LicenseRecord`] minus the id; `name` is left out of the
/// JSON entirely when absent (updates built from panel options carry none).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseDraft {
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub notes: Option<String>,
    pub ip_limit: u32,
    pub license_scope: Option<String>,
    pub expiration_date: NaiveDateTime,
    pub validation_points: u32,
    pub validation_limit: u32,
    pub replenish_amount: u32,
    pub replenish_interval: ReplenishInterval,
    pub license_key: LicenseKey,
}

impl LicenseDraft {
    /// Rebuilds an update body from a fetched record, setting the active
    /// flag. Replenish amount is refreshed to the record's validation points
    /// and the expiration re-stamped; panel-driven updates always send the
    /// full field set.
    #[must_use]
    pub fn from_record(record: &LicenseRecord, active: bool) -> Self {
        Self {
            active,
            name: record.name.clone(),
            notes: record.notes.clone(),
            ip_limit: record.ip_limit,
            license_scope: record.license_scope.clone(),
            expiration_date: never_expires(),
            validation_points: record.validation_points,
            validation_limit: record.validation_limit,
            replenish_amount: record.validation_points,
            replenish_interval: record.replenish_interval,
            license_key: record.license_key.clone(),
        }
    }
}
