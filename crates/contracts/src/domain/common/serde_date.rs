//! serde helper for `NaiveDate` as YYYY-MM-DD

use chrono::NaiveDate;
use serde::{self, Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%d";

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let s = date.format(FORMAT).to_string();
    serializer.serialize_str(&s)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
}

/// Parse a stored date column. Stored dates are free text, so this may fail.
pub fn parse(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), FORMAT).ok()
}

/// Same as the module, for `Option<NaiveDate>` fields
pub mod option {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_some(&d.format(super::FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        match s {
            Some(s) => NaiveDate::parse_from_str(&s, super::FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Holder {
        #[serde(with = "super")]
        day: NaiveDate,
        #[serde(with = "super::option", default)]
        maybe: Option<NaiveDate>,
    }

    #[test]
    fn test_date_is_written_as_iso_day() {
        let h = Holder {
            day: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            maybe: None,
        };
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"day":"2024-01-01","maybe":null}"#);
    }

    #[test]
    fn test_rejects_non_iso_date() {
        let res: Result<Holder, _> = serde_json::from_str(r#"{"day":"01.01.2024"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_stored_date() {
        assert_eq!(parse("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse(" 2024-03-01 "), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(parse("yesterday"), None);
    }
}
