//! Contact phone number in international format

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{DEFAULT_CONTACT_PHONE_NUMBER, MAX_PHONE_DIGITS};
use crate::{Error, Result};

/// Validated phone number: a leading `+` followed only by ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse and validate a number such as `+15551540430`.
    ///
    /// Surrounding whitespace is ignored. Anything else that is not a `+`
    /// followed by 1 to 15 digits is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_phone(input, "empty"));
        }

        let digits = trimmed
            .strip_prefix('+')
            .ok_or_else(|| Error::invalid_phone(input, "must start with '+' and the country code"))?;

        if digits.is_empty() {
            return Err(Error::invalid_phone(input, "no digits after '+'"));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(Error::invalid_phone(input, format!("unexpected character {:?}", bad)));
        }
        if digits.len() > MAX_PHONE_DIGITS {
            return Err(Error::invalid_phone(
                input,
                format!("{} digits (max {})", digits.len(), MAX_PHONE_DIGITS),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The number without its leading `+`
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PhoneNumber {
    fn default() -> Self {
        Self(DEFAULT_CONTACT_PHONE_NUMBER.to_string())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
