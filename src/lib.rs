//! Video Player - command-driven playback and playlist session
//!
//! This library simulates a video player over a read-only catalog: one
//! playback slot, user playlists, and advisory moderation flags, with every
//! state change reported as a line of text.

pub mod catalog;
pub mod command;
pub mod model;
pub mod session;

pub use command::Command;
pub use model::{Catalog, Library, Playlist, Video};
pub use session::{Session, SessionConfig};
