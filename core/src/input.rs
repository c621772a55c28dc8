use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::error::DataError;
use crate::time::{parse_date, DateContext};

/// Parses `START..END` into an inclusive date range. Either side accepts
/// anything [`parse_date`] does. An inverted range is returned as-is.
pub fn parse_range(input: &str, ctx: &DateContext) -> Result<(NaiveDate, NaiveDate), DataError> {
    let (start, end) = input
        .split_once("..")
        .ok_or_else(|| DataError::InvalidRange(input.to_string()))?;
    if start.trim().is_empty() || end.trim().is_empty() {
        return Err(DataError::InvalidRange(input.to_string()));
    }
    Ok((parse_date(start, ctx)?, parse_date(end, ctx)?))
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}
