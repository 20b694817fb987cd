//! Core types for lifecycle data and classification results

use chrono::NaiveDate;
use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};

/// Date format used by the endoflife.date API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A lifecycle boundary as delivered by the provider.
///
/// The API expresses the same field as a calendar date ("the boundary falls
/// on this day"), a boolean ("the boundary has/hasn't occurred"), or omits it
/// entirely. Exactly one variant holds; consumers match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrFlag {
    /// A concrete calendar date
    Date(NaiveDate),
    /// An unconditional flag
    Flag(bool),
    /// Field missing, null, or unparseable
    #[default]
    Absent,
}

impl DateOrFlag {
    /// Returns the date if this boundary is a concrete date
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DateOrFlag::Date(d) => Some(*d),
            DateOrFlag::Flag(_) | DateOrFlag::Absent => None,
        }
    }
}

impl<'de> Deserialize<'de> for DateOrFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            // An unparseable date string degrades to Absent rather than
            // failing the whole record.
            Some(serde_json::Value::String(s)) => NaiveDate::parse_from_str(&s, DATE_FORMAT)
                .map(DateOrFlag::Date)
                .unwrap_or(DateOrFlag::Absent),
            Some(serde_json::Value::Bool(b)) => DateOrFlag::Flag(b),
            _ => DateOrFlag::Absent,
        })
    }
}

/// Normalizes the `cycle` field, which the API delivers as either a string
/// ("1.20") or a bare number (8.1).
fn cycle_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("invalid cycle format: {other}"))),
    }
}

/// One maintenance cycle of a product from the endoflife.date API
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleRecord {
    #[serde(deserialize_with = "cycle_string")]
    pub cycle: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub eol: DateOrFlag,
    #[serde(default)]
    pub latest: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub support: DateOrFlag,
    #[serde(default)]
    pub discontinued: DateOrFlag,
}

/// Risk tier of a classified image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Critical,
    Warning,
    Info,
    Ok,
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Critical => "CRITICAL",
            Status::Warning => "WARNING",
            Status::Info => "INFO",
            Status::Ok => "OK",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification result for a container image
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EolReport {
    pub product: String,
    pub version: String,
    pub status: Status,
    pub description: String,
    pub recommendation: String,
    pub link: String,
    pub eol_date: String,
    pub support_end_date: String,
    pub days_remaining: i64,
    pub latest: String,
}

impl EolReport {
    /// Report for a product absent from the provider's database
    pub fn product_not_found(product: &str, version: &str) -> Self {
        Self {
            description: format!("Product '{product}' not found in EOL database"),
            ..Self::unknown(product, version)
        }
    }

    /// Report for a version the matcher could not resolve within a known product
    pub fn version_not_found(product: &str, version: &str, latest: &str) -> Self {
        Self {
            description: format!("Version '{version}' not found for product '{product}'"),
            latest: latest.to_string(),
            ..Self::unknown(product, version)
        }
    }

    fn unknown(product: &str, version: &str) -> Self {
        Self {
            product: product.to_string(),
            version: version.to_string(),
            status: Status::Unknown,
            description: String::new(),
            recommendation: String::new(),
            link: String::new(),
            eol_date: String::new(),
            support_end_date: String::new(),
            days_remaining: -1,
            latest: String::new(),
        }
    }
}
