// `::serde` is the external crate; this module shadows the name.
use ::serde::Serializer;
use chrono::{DateTime, SecondsFormat, Utc};

/// Wire format for every timestamp: RFC 3339, UTC `Z`, milliseconds.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
