use chrono::{Duration, Local, NaiveDate};

use crate::error::DataError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What relative date words are resolved against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateContext {
    pub today: NaiveDate,
    /// First and last logged dates, if any logs are loaded.
    pub bounds: Option<(NaiveDate, NaiveDate)>,
}

impl DateContext {
    pub fn now(bounds: Option<(NaiveDate, NaiveDate)>) -> Self {
        Self {
            today: Local::now().date_naive(),
            bounds,
        }
    }
}

/// Parses a user supplied date.
///
/// Accepts `YYYY-MM-DD`, `today`, `yesterday`, `first`/`latest` (dataset
/// bounds) and offsets from today such as `-3d` or `+1w`. The result is not
/// checked against the dataset bounds.
pub fn parse_date(input: &str, ctx: &DateContext) -> Result<NaiveDate, DataError> {
    let input = input.trim();
    let invalid = || DataError::InvalidDate(input.to_string());

    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(ctx.today),
        "yesterday" | "yes" => return Ok(ctx.today - Duration::days(1)),
        "first" => return ctx.bounds.map(|(first, _)| first).ok_or(DataError::EmptyDataset),
        "latest" | "last" => return ctx.bounds.map(|(_, last)| last).ok_or(DataError::EmptyDataset),
        _ => {}
    }

    if let Some(offset) = parse_offset(input) {
        let offset = offset.ok_or_else(invalid)?;
        return ctx.today.checked_add_signed(offset).ok_or_else(invalid);
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

// Some(None) means the input looked like an offset but was malformed.
fn parse_offset(input: &str) -> Option<Option<Duration>> {
    let sign = match input.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let body = &input[1..];
    let Some(unit) = body.chars().last() else {
        return Some(None);
    };
    let num_str = &body[..body.len() - unit.len_utf8()];
    let count: i64 = match num_str.parse() {
        Ok(n) => n,
        Err(_) => return Some(None),
    };

    let duration = match unit.to_ascii_lowercase() {
        'd' => Duration::try_days(sign * count),
        'w' => Duration::try_weeks(sign * count),
        _ => None,
    };
    Some(duration)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> DateContext {
        DateContext {
            today: NaiveDate::from_ymd_opt(2024, 12, 10).unwrap(),
            bounds: Some((
                NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 12, 7).unwrap(),
            )),
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(parse_date("2024-12-03", &ctx()).unwrap(), date("2024-12-03"));
        assert_eq!(parse_date(" 2025-01-31 ", &ctx()).unwrap(), date("2025-01-31"));
        assert!(parse_date("2024-13-01", &ctx()).is_err());
        assert!(parse_date("03/12/2024", &ctx()).is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_date("today", &ctx()).unwrap(), date("2024-12-10"));
        assert_eq!(parse_date("Yesterday", &ctx()).unwrap(), date("2024-12-09"));
        assert_eq!(parse_date("first", &ctx()).unwrap(), date("2024-12-01"));
        assert_eq!(parse_date("latest", &ctx()).unwrap(), date("2024-12-07"));
    }

    #[test]
    fn test_bounds_keywords_need_data() {
        let empty = DateContext { bounds: None, ..ctx() };
        assert!(matches!(parse_date("latest", &empty), Err(DataError::EmptyDataset)));
    }

    #[test]
    fn test_parse_offsets() {
        assert_eq!(parse_date("-3d", &ctx()).unwrap(), date("2024-12-07"));
        assert_eq!(parse_date("+1w", &ctx()).unwrap(), date("2024-12-17"));
        assert_eq!(parse_date("-10d", &ctx()).unwrap(), date("2024-11-30"));
        assert!(matches!(parse_date("-d", &ctx()), Err(DataError::InvalidDate(_))));
        assert!(matches!(parse_date("+2m", &ctx()), Err(DataError::InvalidDate(_))));
    }

    #[test]
    fn test_offset_with_multibyte_unit_is_invalid() {
        assert!(matches!(parse_date("-1é", &ctx()), Err(DataError::InvalidDate(_))));
        assert!(matches!(parse_date("+é", &ctx()), Err(DataError::InvalidDate(_))));
        assert!(matches!(parse_date("-", &ctx()), Err(DataError::InvalidDate(_))));
    }
}
