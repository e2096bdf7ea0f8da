//! Filename casing policy definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Casing transform applied to a filename after character filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CasingPolicy {
    /// Keep casing, strip whitespace (default).
    #[default]
    None,
    /// Lower-case everything.
    Lower,
    /// Upper-case everything.
    Upper,
    /// `my file` becomes `myFile`.
    Camel,
    /// `my file.TXT` becomes `MyFile.txt`.
    Pascal,
    /// Lower-case and append today's date to the stem.
    Date,
}

impl fmt::Display for CasingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CasingPolicy::None => write!(f, "none"),
            CasingPolicy::Lower => write!(f, "lower"),
            CasingPolicy::Upper => write!(f, "upper"),
            CasingPolicy::Camel => write!(f, "camel"),
            CasingPolicy::Pascal => write!(f, "pascal"),
            CasingPolicy::Date => write!(f, "date"),
        }
    }
}

impl FromStr for CasingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "none" => Ok(CasingPolicy::None),
            "lower" => Ok(CasingPolicy::Lower),
            "upper" => Ok(CasingPolicy::Upper),
            "camel" => Ok(CasingPolicy::Camel),
            "pascal" => Ok(CasingPolicy::Pascal),
            "date" => Ok(CasingPolicy::Date),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for CasingPolicy {
    type Error = Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CasingPolicy> for String {
    fn from(policy: CasingPolicy) -> Self {
        policy.to_string()
    }
}
