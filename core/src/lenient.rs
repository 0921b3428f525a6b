//! Scalar wrappers tolerant of the vendor's inconsistent JSON encodings.
//!
//! # Design
//! The vendor may send the same logical value as a bare JSON scalar, as a
//! quoted string, or as a placeholder (`"-"`, and `""` for booleans) meaning
//! "no value". Every wrapper first reads the token into `Raw`, a small tagged
//! union of the JSON scalar kinds, then hands it to a per-kind normalization
//! function. Placeholders normalize to the zero value; anything else that does
//! not fit is a decode error, so a target is either fully written or rejected.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Vendor sentinel for an absent value.
pub const PLACEHOLDER: &str = "-";

/// Timestamp layouts, tried in order.
const TIME_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Canonical layout used when serializing a timestamp back to JSON.
const TIME_OUTPUT_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.f";

#[derive(Debug, Error, PartialEq)]
pub enum ScalarError {
    #[error("{kind}: parsing {raw}: unknown value")]
    Unparsable { kind: &'static str, raw: String },
}

fn unparsable(kind: &'static str, raw: &Raw) -> ScalarError {
    ScalarError::Unparsable {
        kind,
        raw: raw.to_string(),
    }
}

/// A JSON scalar token as read off the wire.
#[derive(Debug, Clone, PartialEq)]
enum Raw {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Raw::Null => f.write_str("null"),
            Raw::Bool(b) => write!(f, "{b}"),
            Raw::Int(n) => write!(f, "{n}"),
            Raw::UInt(n) => write!(f, "{n}"),
            Raw::Float(n) => write!(f, "{n}"),
            Raw::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl<'de> Deserialize<'de> for Raw {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = Raw;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON scalar or a string holding one")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Raw, E> {
                Ok(Raw::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<Raw, E> {
                Ok(Raw::Null)
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Raw, E> {
                Ok(Raw::Bool(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Raw, E> {
                Ok(Raw::Int(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Raw, E> {
                Ok(Raw::UInt(value))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Raw, E> {
                Ok(Raw::Float(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Raw, E> {
                Ok(Raw::Text(value.to_owned()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Raw, E> {
                Ok(Raw::Text(value))
            }
        }

        deserializer.deserialize_any(RawVisitor)
    }
}

fn parse_bool(raw: &Raw) -> Result<bool, ScalarError> {
    const KIND: &str = "LenientBool";
    match raw {
        Raw::Bool(b) => Ok(*b),
        Raw::Int(1) | Raw::UInt(1) => Ok(true),
        Raw::Int(0) | Raw::UInt(0) => Ok(false),
        Raw::Text(s) => {
            let s = s.as_str();
            if s.is_empty() || s == PLACEHOLDER || s == "0" || s.eq_ignore_ascii_case("false") {
                Ok(false)
            } else if s == "1" || s.eq_ignore_ascii_case("true") {
                Ok(true)
            } else {
                Err(unparsable(KIND, raw))
            }
        }
        _ => Err(unparsable(KIND, raw)),
    }
}

fn parse_integer<N>(raw: &Raw, kind: &'static str) -> Result<N, ScalarError>
where
    N: Default + FromStr + TryFrom<i64> + TryFrom<u64>,
{
    match raw {
        Raw::Null => Ok(N::default()),
        Raw::Int(n) => N::try_from(*n).map_err(|_| unparsable(kind, raw)),
        Raw::UInt(n) => N::try_from(*n).map_err(|_| unparsable(kind, raw)),
        Raw::Text(s) if s == PLACEHOLDER => Ok(N::default()),
        // FromStr would take a leading '+'; the vendor's base-10 form has none.
        Raw::Text(s) if s.trim().starts_with('+') => Err(unparsable(kind, raw)),
        Raw::Text(s) => s.trim().parse().map_err(|_| unparsable(kind, raw)),
        Raw::Bool(_) | Raw::Float(_) => Err(unparsable(kind, raw)),
    }
}

fn parse_float(raw: &Raw) -> Result<f64, ScalarError> {
    const KIND: &str = "LenientF64";
    match raw {
        Raw::Null => Ok(0.0),
        Raw::Int(n) => Ok(*n as f64),
        Raw::UInt(n) => Ok(*n as f64),
        Raw::Float(n) => Ok(*n),
        Raw::Text(s) if s == PLACEHOLDER => Ok(0.0),
        Raw::Text(s) => s
            .replace(',', "")
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| unparsable(KIND, raw)),
        Raw::Bool(_) => Err(unparsable(KIND, raw)),
    }
}

fn parse_time(raw: &Raw) -> Result<Option<NaiveDateTime>, ScalarError> {
    match raw {
        Raw::Text(s) if s == PLACEHOLDER => Ok(None),
        Raw::Text(s) => Ok(TIME_LAYOUTS
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())),
        _ => Err(unparsable("LenientTime", raw)),
    }
}

macro_rules! lenient_scalar {
    ($(#[$meta:meta])* $name:ident($inner:ty), $parse:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
        pub struct $name(pub $inner);

        impl $name {
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = Raw::deserialize(deserializer)?;
                $parse(&raw).map(Self).map_err(de::Error::custom)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }
    };
}

lenient_scalar!(
    /// Boolean sent as `true`/`false`, `1`/`0`, quoted or bare.
    LenientBool(bool),
    parse_bool
);

lenient_scalar!(
    /// 32-bit integer, possibly quoted.
    LenientInt(i32),
    |raw| parse_integer::<i32>(raw, "LenientInt")
);

lenient_scalar!(
    /// 64-bit integer, possibly quoted.
    LenientI64(i64),
    |raw| parse_integer::<i64>(raw, "LenientI64")
);

lenient_scalar!(
    /// Float, possibly quoted with thousands separators (`"1,234.5"`).
    LenientF64(f64),
    parse_float
);

impl Eq for LenientBool {}
impl Eq for LenientInt {}
impl Eq for LenientI64 {}

/// Vendor timestamp. `None` is the zero time: the vendor's "no date".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LenientTime(pub Option<NaiveDateTime>);

impl LenientTime {
    pub fn get(self) -> Option<NaiveDateTime> {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_none()
    }
}

impl From<NaiveDateTime> for LenientTime {
    fn from(value: NaiveDateTime) -> Self {
        Self(Some(value))
    }
}

impl<'de> Deserialize<'de> for LenientTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Raw::deserialize(deserializer)?;
        parse_time(&raw).map(Self).map_err(de::Error::custom)
    }
}

impl Serialize for LenientTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(time) => serializer.collect_str(&time.format(TIME_OUTPUT_LAYOUT)),
            None => serializer.serialize_str(PLACEHOLDER),
        }
    }
}
