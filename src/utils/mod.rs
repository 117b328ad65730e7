//! Shared HTML helpers.
//!
//! - `html` - escaping
//! - `typography` - curly quotes, dashes and ellipses in plain text

pub mod html;
pub mod typography;
