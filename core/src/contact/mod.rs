//! Contact destination: phone number and the deep link derived from it

mod deep_link;
mod phone;

pub use deep_link::{build_deep_link, DeepLink};
pub use phone::PhoneNumber;
