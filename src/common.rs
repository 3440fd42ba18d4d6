use serde::{de, ser, Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// Global node identifier used by the GraphQL API, exposed on most REST resources
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

/// A git object id (commit sha)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Oid(String);

impl Oid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Oid {
    fn from(sha: String) -> Self {
        Oid(sha)
    }
}

impl From<&str> for Oid {
    fn from(sha: &str) -> Self {
        Oid(sha.to_owned())
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

impl DateTime {
    pub fn from_timestamp(secs: i64) -> Option<Self> {
        use chrono::{offset::LocalResult, TimeZone};

        match chrono::Utc.timestamp_opt(secs, 0) {
            LocalResult::Single(datetime) => Some(DateTime(datetime)),
            _ => None,
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn as_chrono(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DateTime {
    fn from(datetime: chrono::DateTime<chrono::Utc>) -> Self {
        DateTime(datetime)
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.0.to_rfc3339())
        } else {
            serializer.serialize_i64(self.0.timestamp())
        }
    }
}

// Timestamps from Github can either be in unix epoch time or a string format, push event payloads
// use the former for `created_at` and `pushed_at`
impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct DateTimeVisitor;
        impl<'de> de::Visitor<'de> for DateTimeVisitor {
            type Value = DateTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "date time string or seconds since unix epoch")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(DateTime(
                    v.parse().map_err(|e| E::custom(format!("{}", e)))?,
                ))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                DateTime::from_timestamp(v)
                    .ok_or_else(|| E::custom(format!("'{}' is not a legal timestamp", v)))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let secs = i64::try_from(v)
                    .map_err(|_| E::custom(format!("'{}' is not a legal timestamp", v)))?;
                self.visit_i64(secs)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(DateTimeVisitor)
        } else {
            deserializer.deserialize_i64(DateTimeVisitor)
        }
    }
}

#[cfg(test)]
mod test {
    use super::DateTime;

    #[test]
    fn datetime_from_string_or_epoch() {
        let from_str: DateTime = serde_json::from_str(r#""2013-02-27T19:35:32Z""#).unwrap();
        let from_epoch: DateTime = serde_json::from_str("1361993732").unwrap();

        assert_eq!(from_str, from_epoch);
        assert_eq!(from_str.timestamp(), 1361993732);
    }

    #[test]
    fn datetime_out_of_range_epoch() {
        let too_large = format!("{}", u64::MAX);
        assert!(serde_json::from_str::<DateTime>(&too_large).is_err());
    }

    #[test]
    fn datetime_serializes_as_rfc3339() {
        let datetime = DateTime::from_timestamp(1361993732).unwrap();
        let json = serde_json::to_string(&datetime).unwrap();

        assert_eq!(json, r#""2013-02-27T19:35:32+00:00""#);
        assert_eq!(serde_json::from_str::<DateTime>(&json).unwrap(), datetime);
    }
}
