//! Data model for the video catalog and user playlists
//!
//! These types are independent of how the catalog is loaded and of how
//! commands reach the session.

mod library;
mod playlist;
mod video;

pub use library::{Catalog, Library};
pub use playlist::Playlist;
pub use video::{TagStyle, Video};
