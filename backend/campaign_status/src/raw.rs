//! Boundary between external campaign data and the engine.
//!
//! Indexer and subgraph payloads arrive as loosely-typed JSON: timestamps
//! may be integers, decimal strings or RFC 3339 strings, and base-unit
//! amounts are usually decimal strings because they overflow JSON numbers.
//! Everything is validated here, once, so the engine only ever sees a
//! well-formed [`CampaignRecord`] and definite [`ExecutionFlags`].

use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{Result, StatusError};
use crate::types::{CampaignRecord, ExecutionFlags};

/// A campaign ("yeeter") as returned by the indexer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCampaign {
    pub id: String,
    #[serde(default)]
    pub dao: Option<RawDao>,
    pub start_time: Value,
    pub end_time: Value,
    pub goal: Value,
    #[serde(alias = "balance")]
    pub safe_balance: Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDao {
    pub id: String,
    #[serde(default)]
    pub share_token_symbol: Option<String>,
}

/// Finalization flags as read from the chain; any of them may be unavailable.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExecutionFlags {
    #[serde(default)]
    pub can_execute: Option<bool>,
    #[serde(default)]
    pub executed: Option<bool>,
    #[serde(default)]
    pub goal_achieved: Option<bool>,
}

impl From<RawExecutionFlags> for ExecutionFlags {
    fn from(raw: RawExecutionFlags) -> Self {
        ExecutionFlags::coalesce(raw.executed, raw.can_execute, raw.goal_achieved)
    }
}

impl TryFrom<RawCampaign> for CampaignRecord {
    type Error = StatusError;

    fn try_from(raw: RawCampaign) -> Result<Self> {
        let start_time = parse_timestamp("startTime", &raw.start_time)?;
        let end_time = parse_timestamp("endTime", &raw.end_time)?;
        let goal = parse_amount("goal", &raw.goal)?;
        let balance = parse_amount("safeBalance", &raw.safe_balance)?;

        let mut record = CampaignRecord::new(start_time, end_time, goal, balance)?;
        record.id = raw.id;
        if let Some(dao) = raw.dao {
            record.dao_id = dao.id;
            record.share_token_symbol = dao.share_token_symbol;
        }
        Ok(record)
    }
}

impl RawCampaign {
    pub fn into_record(self) -> Result<CampaignRecord> {
        CampaignRecord::try_from(self)
    }
}

/// Decode and validate a single campaign JSON object.
pub fn decode_campaign(json: &str) -> Result<CampaignRecord> {
    let raw: RawCampaign = serde_json::from_str(json)?;
    raw.into_record()
}

/// Decode execution flags from a JSON object, coalescing missing fields.
pub fn decode_execution_flags(json: &str) -> Result<ExecutionFlags> {
    let raw: RawExecutionFlags = serde_json::from_str(json)?;
    Ok(raw.into())
}

/// Validate a batch of raw campaigns, dropping (and logging) malformed ones.
pub fn decode_campaigns(raw: Vec<RawCampaign>) -> Vec<CampaignRecord> {
    let total = raw.len();
    let records: Vec<CampaignRecord> = raw
        .into_iter()
        .filter_map(|campaign| {
            let id = campaign.id.clone();
            match campaign.into_record() {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping campaign {id}: {e}");
                    None
                }
            }
        })
        .collect();
    debug!("Decoded {} of {} campaigns", records.len(), total);
    records
}

/// Unix seconds from an integer, a decimal string or an RFC 3339 string.
fn parse_timestamp(field: &str, value: &Value) -> Result<u64> {
    match value {
        Value::Number(n) => n.as_u64().ok_or_else(|| {
            StatusError::InvalidRecord(format!("{field} is not a non-negative integer ({n})"))
        }),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(secs) = s.parse::<u64>() {
                return Ok(secs);
            }
            parse_iso_to_unix(s).ok_or_else(|| {
                StatusError::InvalidRecord(format!("{field} is not a timestamp ({s:?})"))
            })
        }
        other => Err(StatusError::InvalidRecord(format!(
            "{field} has unexpected type ({other})"
        ))),
    }
}

/// Base-unit amount from a decimal string or a JSON integer.
fn parse_amount(field: &'static str, value: &Value) -> Result<u128> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(StatusError::InvalidRecord(format!(
                "{field} has unexpected type ({other})"
            )))
        }
    };

    if let Ok(signed) = text.parse::<i128>() {
        return u128::try_from(signed).map_err(|_| StatusError::NegativeAmount {
            field,
            value: text.clone(),
        });
    }
    if let Ok(unsigned) = text.parse::<u128>() {
        return Ok(unsigned);
    }
    if text.starts_with('-') {
        return Err(StatusError::NegativeAmount { field, value: text });
    }
    Err(StatusError::InvalidRecord(format!(
        "{field} is not a base-unit integer ({text:?})"
    )))
}

fn parse_iso_to_unix(s: &str) -> Option<u64> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .and_then(|dt| u64::try_from(dt.timestamp()).ok())
}
