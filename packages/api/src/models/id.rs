//! Serde helpers for backend identifiers.
//!
//! Different backend endpoints send the same identifier as a JSON number
//! (`"ClassID": 10`) or as a string (`"ClassID": "10"`). Both are accepted
//! and normalized to `i64`.

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;

pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(*value)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IdVisitor)
}

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer id or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::custom(format!("id {v} out of range")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        if v.fract() == 0.0 && v.is_finite() {
            Ok(v as i64)
        } else {
            Err(E::custom(format!("id {v} is not an integer")))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::custom(format!("id {v:?} is not numeric")))
    }
}

/// Boolean flags the backend sends as `0`/`1`.
pub mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Bool(bool),
            Int(i64),
        }

        Ok(match Flag::deserialize(deserializer)? {
            Flag::Bool(b) => b,
            Flag::Int(n) => n != 0,
        })
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }
}

/// Identifiers kept as text (login ids), sent as either a number or a string.
pub mod text {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Int(i64),
    }

    impl From<Text> for String {
        fn from(t: Text) -> Self {
            match t {
                Text::Str(s) => s,
                Text::Int(n) => n.to_string(),
            }
        }
    }

    pub fn serialize<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Text::deserialize(deserializer)?.into())
    }

    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Text>::deserialize(deserializer)?.map(String::from))
    }
}

/// User roles, sent as a numeric code (`2`), a numeric string (`"2"`) or a
/// role name (`"professor"`). Unknown values fall back to
/// [`Role::Student`].
pub mod role {
    use serde::{Deserialize, Deserializer};
    use store::Role;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    impl From<Raw> for Role {
        fn from(raw: Raw) -> Self {
            let role = match &raw {
                Raw::Int(n) => u8::try_from(*n).ok().and_then(Role::from_code),
                Raw::Str(s) => match s.trim().parse::<u8>() {
                    Ok(code) => Role::from_code(code),
                    Err(_) => Role::parse(s),
                },
            };
            role.unwrap_or_else(|| {
                match raw {
                    Raw::Int(n) => tracing::warn!("Unknown user type {n}, assuming student"),
                    Raw::Str(s) => tracing::warn!("Unknown user type {s:?}, assuming student"),
                }
                Role::Student
            })
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Role, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Raw::deserialize(deserializer)?.into())
    }

    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Raw>::deserialize(deserializer)?.map(Role::from))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(with = "super")]
        id: i64,
        #[serde(with = "super::flag")]
        on: bool,
    }

    #[test]
    fn test_number_and_string_ids() {
        let a: Row = serde_json::from_str(r#"{"id": 10, "on": 1}"#).unwrap();
        let b: Row = serde_json::from_str(r#"{"id": "10", "on": 0}"#).unwrap();
        assert_eq!(a.id, 10);
        assert_eq!(b.id, 10);
        assert!(a.on);
        assert!(!b.on);
    }

    #[test]
    fn test_text_ids() {
        #[derive(Deserialize)]
        struct Login {
            #[serde(with = "super::text")]
            user: String,
            #[serde(default, deserialize_with = "super::text::deserialize_opt")]
            alt: Option<String>,
        }

        let a: Login = serde_json::from_str(r#"{"user": 2019203001, "alt": "x"}"#).unwrap();
        assert_eq!(a.user, "2019203001");
        assert_eq!(a.alt.as_deref(), Some("x"));

        let b: Login = serde_json::from_str(r#"{"user": "kim"}"#).unwrap();
        assert_eq!(b.user, "kim");
        assert!(b.alt.is_none());
    }

    #[test]
    fn test_non_numeric_id_rejected() {
        assert!(serde_json::from_str::<Row>(r#"{"id": "cs101", "on": 0}"#).is_err());
    }

    #[test]
    fn test_role_forms() {
        #[derive(Deserialize)]
        struct User {
            #[serde(deserialize_with = "super::role::deserialize")]
            role: store::Role,
        }

        let parse = |json: &str| serde_json::from_str::<User>(json).unwrap().role;
        assert_eq!(parse(r#"{"role": 0}"#), store::Role::Admin);
        assert_eq!(parse(r#"{"role": "2"}"#), store::Role::Professor);
        assert_eq!(parse(r#"{"role": "professor"}"#), store::Role::Professor);
        assert_eq!(parse(r#"{"role": "Admin"}"#), store::Role::Admin);
        assert_eq!(parse(r#"{"role": 9}"#), store::Role::Student);
        assert_eq!(parse(r#"{"role": "guest"}"#), store::Role::Student);
    }
}
