/// Serde adapter for datetimes as the REST backend actually emits them.
///
/// The backend is not consistent: review dates arrive as naive ISO 8601
/// (`2025-08-05T12:30:00`), request dates as RFC 2822 (`Tue, 05 Aug 2025
/// 12:30:00 GMT`), and anything we write back is RFC 3339. Accept all three,
/// always serialize RFC 3339.
pub mod wire_date {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ser.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D>(de: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(de)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("unrecognized datetime: {s}")))
    }

    /// Parse a backend datetime string in any of its observed shapes.
    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Some(dt.with_timezone(&Utc));
        }
        // Naive ISO without offset, the shape datetime.isoformat() produces.
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::wire_date;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339() {
        let dt = wire_date::parse("2025-08-05T12:30:00+00:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 8, 5));
    }

    #[test]
    fn parses_rfc2822() {
        let dt = wire_date::parse("Tue, 05 Aug 2025 12:30:00 GMT").unwrap();
        assert_eq!((dt.day(), dt.hour()), (5, 12));
    }

    #[test]
    fn parses_naive_isoformat() {
        let dt = wire_date::parse("2025-08-05T12:30:00.123456").unwrap();
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn rejects_garbage() {
        assert!(wire_date::parse("yesterday").is_none());
    }
}
