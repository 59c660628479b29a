//! Moderation flags
//!
//! Flags are advisory: a flagged video still shows up in listings and
//! searches and can still be played.

use super::error::{CommandError, CommandResult, Reason};
use super::{Session, VideoPicker};
use crate::model::Catalog;
use std::collections::hash_map::Entry;

impl<C: Catalog, P: VideoPicker> Session<C, P> {
    /// Flag a video, with the configured default reason when none is given
    pub fn flag(&mut self, video_id: &str, reason: Option<&str>) -> CommandResult {
        let video = self
            .catalog
            .get(video_id)
            .ok_or_else(|| CommandError::rejected("flag video", Reason::VideoNotFound))?;

        match self.flags.entry(video_id.to_string()) {
            Entry::Occupied(_) => Err(CommandError::rejected("flag video", Reason::AlreadyFlagged)),
            Entry::Vacant(slot) => {
                let reason = reason.unwrap_or(&self.config.default_flag_reason);
                slot.insert(reason.to_string());
                log::debug!("Flagged {} ({})", video_id, reason);
                Ok(vec![format!(
                    "Successfully flagged video: {} (Reason: {})",
                    video.title, reason
                )])
            }
        }
    }

    /// Remove the flag from a video
    pub fn allow(&mut self, video_id: &str) -> CommandResult {
        let action = "remove flag from video";
        let video = self
            .catalog
            .get(video_id)
            .ok_or_else(|| CommandError::rejected(action, Reason::VideoNotFound))?;

        if self.flags.remove(video_id).is_none() {
            return Err(CommandError::rejected(action, Reason::NotFlagged));
        }

        log::debug!("Allowed {}", video_id);
        Ok(vec![format!("Successfully removed flag from video: {}", video.title)])
    }

    pub fn is_flagged(&self, video_id: &str) -> bool {
        self.flags.contains_key(video_id)
    }

    /// The reason a video was flagged, if it is
    pub fn flag_reason(&self, video_id: &str) -> Option<&str> {
        self.flags.get(video_id).map(String::as_str)
    }
}
