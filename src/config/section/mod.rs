//! Sections of the album document.
//!
//! | Module    | Field                  | Purpose                          |
//! |-----------|------------------------|----------------------------------|
//! | `album`   | (root)                 | Title, artist, about, track list |
//! | `track`   | `tracks[]`             | Audio file, duration, lyrics     |
//! | `artwork` | `artwork`              | Cover images per pixel density   |
//! | `theme`   | `theme`                | Colors and font                  |

mod album;
mod artwork;
mod theme;
mod track;

pub use album::Album;
pub use artwork::Artwork;
pub use theme::Theme;
pub use track::Track;
