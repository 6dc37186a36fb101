//! Timestamp formats used by the dex artifacts.
//!
//! All timestamps are UTC with second precision. The canonical external form
//! is `2022-12-10 06:10:04Z`; the JSON artifact writes `2022-12-10T06:10:04Z`.
//! Readers accept either.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};

/// Canonical form used by the TSV and Markdown views and the `keg` file.
pub const ISO_DATE_FMT: &str = "%Y-%m-%d %H:%M:%SZ";

/// Form written inside `nodes.json`.
pub const JSON_DATE_FMT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Minute precision form used by the terminal view.
pub const SHORT_DATE_FMT: &str = "%Y-%m-%d %H:%MZ";

/// Pattern matching [`ISO_DATE_FMT`] inside free text.
pub const ISO_DATE_PATTERN: &str = r"\d{4}-\d\d-\d\d \d\d:\d\d:\d\dZ";

pub fn format_iso(t: &DateTime<Utc>) -> String {
    t.format(ISO_DATE_FMT).to_string()
}

pub fn format_json(t: &DateTime<Utc>) -> String {
    t.format(JSON_DATE_FMT).to_string()
}

/// Parse either accepted form.
pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, ISO_DATE_FMT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, JSON_DATE_FMT))
        .map(|naive| naive.and_utc())
}

/// Drop sub-second precision.
pub fn truncate(t: DateTime<Utc>) -> DateTime<Utc> {
    t.trunc_subsecs(0)
}

/// Serde reader for timestamps in the JSON artifact.
pub(crate) mod json {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, de};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
    }
}
