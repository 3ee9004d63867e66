//! Click-to-chat deep link

use std::fmt;

use serde::Serialize;

use super::PhoneNumber;
use crate::constants::DEEP_LINK_BASE;

/// URL that opens a chat with a given number in the messaging client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeepLink(String);

impl DeepLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeepLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build the deep link for `phone`: the base URL followed by the digits
/// of the number, its leading `+` dropped.
pub fn build_deep_link(phone: &PhoneNumber) -> DeepLink {
    DeepLink(format!("{}{}", DEEP_LINK_BASE, phone.digits()))
}
