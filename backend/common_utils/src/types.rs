//! Types that can be used in other crates

use std::{fmt, str::FromStr};

use error_stack::{report, ResultExt};

use crate::errors::ParsingError;

/// Amount in the lowest denomination of the currency, kept as the string sent on the wire
#[derive(Default, Debug, serde::Deserialize, serde::Serialize, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct StringMinorUnit(String);

impl StringMinorUnit {
    /// Wraps a value without validating it
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StringMinorUnit {
    type Err = error_stack::Report<ParsingError>;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(report!(ParsingError::MinorUnitParsingError))
                .attach_printable_lazy(|| format!("`{value}` is not a non-negative integer"));
        }
        Ok(Self(value.to_owned()))
    }
}

impl From<&str> for StringMinorUnit {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for StringMinorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
