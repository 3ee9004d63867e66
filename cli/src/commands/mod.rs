//! CLI command implementations.

mod link;
mod qr;
mod serve;

pub use link::show_link;
pub use qr::write_qr;
pub use serve::serve;
