//! Lenient (de)serialization for stored timestamps.
//!
//! Records loaded from durable storage must come back with real date
//! values. A malformed textual timestamp degrades to the sentinel instant
//! (logged as a warning) instead of failing the record or the collection
//! it sits in.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel for timestamps that could not be parsed from storage.
pub fn invalid_timestamp() -> NaiveDateTime {
    invalid_date().and_hms_opt(0, 0, 0).unwrap()
}

/// Sentinel for calendar dates that could not be parsed from storage.
pub fn invalid_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

pub mod lenient_datetime {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, ser: S) -> Result<S::Ok, S::Error> {
        value.serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(de)?;
        Ok(raw.parse::<NaiveDateTime>().unwrap_or_else(|err| {
            tracing::warn!("unparseable timestamp \"{raw}\": {err}; using sentinel");
            invalid_timestamp()
        }))
    }
}

pub mod lenient_date {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
        value.serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(de)?;
        Ok(raw.parse::<NaiveDate>().unwrap_or_else(|err| {
            tracing::warn!("unparseable date \"{raw}\": {err}; using sentinel");
            invalid_date()
        }))
    }
}

pub mod lenient_date_opt {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<NaiveDate>, ser: S) -> Result<S::Ok, S::Error> {
        value.serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(de)?;
        Ok(raw.map(|s| {
            s.parse::<NaiveDate>().unwrap_or_else(|err| {
                tracing::warn!("unparseable date \"{s}\": {err}; using sentinel");
                invalid_date()
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "lenient_datetime")]
        at: NaiveDateTime,
    }

    #[derive(Serialize, Deserialize)]
    struct Dated {
        #[serde(with = "lenient_date")]
        on: NaiveDate,
    }

    #[test]
    fn valid_timestamp_round_trips() {
        let json = r#"{"at":"2026-03-20T15:30:00"}"#;
        let stamped: Stamped = serde_json::from_str(json).unwrap();
        assert_eq!(
            stamped.at,
            NaiveDate::from_ymd_opt(2026, 3, 20)
                .unwrap()
                .and_hms_opt(15, 30, 0)
                .unwrap()
        );
        assert_eq!(serde_json::to_string(&stamped).unwrap(), json);
    }

    #[test]
    fn malformed_timestamp_degrades_to_sentinel() {
        let stamped: Stamped = serde_json::from_str(r#"{"at":"not a time"}"#).unwrap();
        assert_eq!(stamped.at, invalid_timestamp());
    }

    #[test]
    fn malformed_date_degrades_to_sentinel() {
        let dated: Dated = serde_json::from_str(r#"{"on":"2026-13-99"}"#).unwrap();
        assert_eq!(dated.on, invalid_date());
    }

    #[test]
    fn valid_date_round_trips() {
        let json = r#"{"on":"2026-03-20"}"#;
        let dated: Dated = serde_json::from_str(json).unwrap();
        assert_eq!(dated.on, NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        assert_eq!(serde_json::to_string(&dated).unwrap(), json);
    }
}
