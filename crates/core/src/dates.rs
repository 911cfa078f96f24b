//! Publish-date parsing and interchange-format rendering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Failure to read a source date under any accepted shape.
///
/// Callers treat this like any other missing-field extraction failure: the
/// record is skipped with a diagnostic, the run continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("unrecognized date format: {0:?}")]
    Unrecognized(String),
}

/// 12-hour clock shape used by the Hugo theme's `<span title="...">` dates.
const CLOCK_FORMAT: &str = "%b %d, %Y %I:%M %p";

/// Parse a source date into a UTC instant.
///
/// Accepted shapes, in order:
///
/// 1. `"Jun 12, 2023 08:40 PM UTC"` — clock time plus named zone abbreviation
/// 2. `"Jun 12, 2023 08:40 PM +0000"` — clock time plus numeric offset
/// 3. RFC 3339 (front-matter dates)
/// 4. `"2023-06-12 20:40:00"` and bare `"2023-06-12"`
///
/// For shapes 1 and 2 the zone token is validated but **not** converted: the
/// clock time is read as UTC whatever the token says. The upstream exporter
/// asserted rather than computed the offset, and importers built against its
/// output expect that, so the behavior is kept. RFC 3339 offsets carry no
/// such compatibility constraint and are converted normally.
pub fn parse_post_date(raw: &str) -> Result<DateTime<Utc>, DateError> {
    let text = raw.trim();

    if let Some(naive) = parse_clock_with_zone(text) {
        return Ok(naive.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(DateError::Unrecognized(raw.to_string()))
}

fn parse_clock_with_zone(text: &str) -> Option<NaiveDateTime> {
    let (clock, zone) = text.rsplit_once(' ')?;
    if !is_zone_token(zone) {
        return None;
    }
    NaiveDateTime::parse_from_str(clock, CLOCK_FORMAT).ok()
}

/// A zone token is a short alphabetic abbreviation (`UTC`, `GMT`, `CEST`) or
/// a `+HHMM`/`-HHMM` numeric offset. Three letters minimum, so the `AM`/`PM`
/// meridiem of a zone-less clock is never mistaken for one.
fn is_zone_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    let named =
        (3..=5).contains(&token.len()) && bytes.iter().all(|b| b.is_ascii_alphabetic());
    let numeric = token.len() == 5
        && (bytes[0] == b'+' || bytes[0] == b'-')
        && bytes[1..].iter().all(|b| b.is_ascii_digit());
    named || numeric
}

/// Render the `pubDate` interchange timestamp: `Mon, 12 Jun 2023 20:40:00 +0000`.
pub fn format_pub_date(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S +0000").to_string()
}

/// Render the `wp:post_date` timestamp: `2023-06-12 20:40:00`.
pub fn format_post_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M:%S").to_string()
}
