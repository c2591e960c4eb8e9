//! `chrono` timestamps stored as BSON dates.
//!
//! Use with `#[serde(with = "database::mongodb::timestamp")]`. The driver
//! writes and reads documents with non-human-readable (de)serializers, so
//! those get a native BSON date and the range/sort semantics that come with
//! it. JSON stays RFC 3339.

use chrono::{DateTime, SubsecRound, TimeZone, Utc};
use mongodb::bson::{self, Bson};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// Current time truncated to the millisecond precision of a BSON date.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub fn to_bson_datetime(dt: DateTime<Utc>) -> Bson {
    Bson::DateTime(bson::DateTime::from_millis(dt.timestamp_millis()))
}

pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    if serializer.is_human_readable() {
        dt.serialize(serializer)
    } else {
        bson::DateTime::from_millis(dt.timestamp_millis()).serialize(serializer)
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    if deserializer.is_human_readable() {
        return DateTime::<Utc>::deserialize(deserializer);
    }
    let millis = bson::DateTime::deserialize(deserializer)?.timestamp_millis();
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {millis}")))
}

/// Same as the parent module for `Option<DateTime<Utc>>`; `None` is BSON null.
pub mod option {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Wrapped(#[serde(with = "crate::mongodb::timestamp")] DateTime<Utc>);

    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        dt.map(Wrapped).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|w| w.0))
    }
}
