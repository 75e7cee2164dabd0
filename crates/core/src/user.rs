use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::id::UserId;

/// Age of a user.
///
/// Input that does not parse as a whole number is kept as [`Age::NaN`] rather
/// than rejected. `NaN` serializes to JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Age {
    Years(i64),
    NaN,
}

impl Age {
    /// Coerce a loosely-typed request value into an age.
    ///
    /// Strings are trimmed and parsed with the standard `i64` parser; finite
    /// floats are truncated toward zero.
    pub fn coerce(value: &Value) -> Self {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Age::Years(i)
                } else {
                    match n.as_f64() {
                        Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => {
                            Age::Years(f.trunc() as i64)
                        }
                        _ => Age::NaN,
                    }
                }
            }
            Value::String(s) => s.trim().parse::<i64>().map(Age::Years).unwrap_or(Age::NaN),
            _ => Age::NaN,
        }
    }

    pub fn years(&self) -> Option<i64> {
        match self {
            Age::Years(y) => Some(*y),
            Age::NaN => None,
        }
    }
}

impl core::fmt::Display for Age {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Age::Years(y) => core::fmt::Display::fmt(y, f),
            Age::NaN => f.write_str("NaN"),
        }
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.years().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<i64>::deserialize(deserializer)?.map_or(Age::NaN, Age::Years))
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: Age,
    pub origin_place: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, age: Age, origin_place: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            origin_place: origin_place.into(),
        }
    }

    /// Case-insensitive comparison against an already-lowercased name.
    pub fn matches_name(&self, lowered: &str) -> bool {
        self.name.to_lowercase() == lowered
    }
}

/// Create input. Fields stay untyped until validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub origin_place: Option<Value>,
}

/// Update input. Only `age` and `originPlace` are mutable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub origin_place: Option<Value>,
}
