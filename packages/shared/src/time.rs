use chrono::{DateTime, Local, SecondsFormat, TimeZone};

/// Current wall-clock time in the server's local timezone.
pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// Format a timestamp as ISO 8601 (RFC 3339) with microsecond precision.
pub fn to_iso8601<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    datetime.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Current local time formatted as ISO 8601.
pub fn now_iso8601() -> String {
    to_iso8601(&now_local())
}
