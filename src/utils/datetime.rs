use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::error::{WpError, WpResult};

pub fn date_from_str(s: &str) -> WpResult<NaiveDate> {
    const FORMATS: &[&str] = &[
        "%Y-%m-%d",
        "%Y%m%d",
        "%m/%d/%Y",
        "%B %d, %Y",
        "%b %d, %Y",
        "%Y-%m-%dT%H:%M:%S%.f", // ISO 8601 Extended
    ];

    let s = s.trim();
    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        // RFC 3339
        return Ok(datetime.date_naive());
    }

    Err(WpError::Invalid {
        code: "INVALID_DATE",
        message: format!("Unable to parse date '{s}'"),
    })
}

pub fn date_to_str(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Snapshot timestamp in local time, the input is returned unchanged when unparsable
pub fn timestamp_to_local_str(s: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(s.trim()) {
        return datetime
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%dT%H:%M:%S%.f") {
        return datetime.format("%Y-%m-%d %H:%M:%S").to_string();
    }

    s.to_string()
}
