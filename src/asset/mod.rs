//! Staging of assets referenced from rendered text.
//!
//! - [`SlugAllocator`] - collision-safe output names
//! - [`AssetResolver`] - local/remote classification, copy, memoization
//! - [`GeneratedFiles`] - manifest of everything written in a run

mod error;
mod generated;
mod resolve;
mod slug;

pub use error::AssetError;
pub use generated::GeneratedFiles;
pub use resolve::{AssetResolver, FileLookup, is_remote};
pub use slug::SlugAllocator;
