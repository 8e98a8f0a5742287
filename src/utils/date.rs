use chrono::{DateTime, Utc};

/// Format used on the `**Last updated:**` line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
