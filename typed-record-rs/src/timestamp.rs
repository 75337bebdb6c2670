//! Timestamp field values
//!
//! The service exchanges timestamps as fractional epoch seconds. Values are
//! kept as `chrono::DateTime<Utc>` truncated to whole milliseconds, so equality
//! agrees with the wire form.

use std::fmt;

use chrono::{DateTime, SecondsFormat, SubsecRound, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::describe::Describe;
use crate::field::{FieldKind, FieldType};
use crate::hash::StructuralHash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wrap a date-time, dropping anything below the millisecond
    pub fn new(value: DateTime<Utc>) -> Self {
        Self(value.trunc_subsecs(3))
    }

    /// Build from epoch milliseconds; `None` when out of range
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Build from fractional epoch seconds, rounded to the millisecond
    pub fn from_epoch_seconds(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        Self::from_millis((seconds * 1000.0).round() as i64)
    }

    pub fn millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn epoch_seconds(&self) -> f64 {
        self.millis() as f64 / 1000.0
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::new(value)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Describe for Timestamp {
    fn describe_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl StructuralHash for Timestamp {
    fn structural_hash(&self) -> i32 {
        self.millis().structural_hash()
    }
}

impl FieldType for Timestamp {
    fn kind() -> FieldKind {
        FieldKind::Timestamp
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.epoch_seconds())
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch seconds or an RFC 3339 timestamp")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Timestamp, E> {
        Timestamp::from_epoch_seconds(value)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {}", value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Timestamp, E> {
        self.visit_f64(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Timestamp, E> {
        self.visit_f64(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Timestamp, E> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| Timestamp::new(dt.with_timezone(&Utc)))
            .map_err(|e| E::custom(format!("invalid timestamp '{}': {}", value, e)))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}
