//! Rejected-command errors
//!
//! A rejected command never changes session state. Its `Display` output is
//! the exact message shown to the user.

use thiserror::Error;

/// A command the session refused to carry out
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// `Cannot <action>: <reason>`
    #[error("Cannot {action}: {reason}")]
    Rejected { action: String, reason: Reason },

    /// Pausing a video that is already paused
    #[error("Video already paused: {title}")]
    AlreadyPaused { title: String },
}

/// Why a command was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    DuplicatePlaylist,

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("Video is not flagged")]
    NotFlagged,
}

/// Broad classification of rejections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A video ID or playlist name is unknown
    ReferenceNotFound,

    /// Name already used, video already a member, or video already flagged
    DuplicateEntity,

    /// The playback state does not allow the command
    InvalidStateTransition,

    /// The video is not a member of the target playlist
    MembershipViolation,
}

impl Reason {
    pub fn kind(self) -> ErrorKind {
        match self {
            Reason::VideoNotFound | Reason::PlaylistNotFound => ErrorKind::ReferenceNotFound,
            Reason::DuplicatePlaylist | Reason::AlreadyInPlaylist | Reason::AlreadyFlagged => {
                ErrorKind::DuplicateEntity
            }
            Reason::NothingPlaying | Reason::NotPaused => ErrorKind::InvalidStateTransition,
            // Allowing an unflagged video is a lookup miss in the flag table
            Reason::NotFlagged => ErrorKind::ReferenceNotFound,
            Reason::NotInPlaylist => ErrorKind::MembershipViolation,
        }
    }
}

impl CommandError {
    pub(crate) fn rejected(action: impl Into<String>, reason: Reason) -> Self {
        CommandError::Rejected {
            action: action.into(),
            reason,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Rejected { reason, .. } => reason.kind(),
            CommandError::AlreadyPaused { .. } => ErrorKind::InvalidStateTransition,
        }
    }

    /// The rejection reason, if this is a `Cannot ...` error
    pub fn reason(&self) -> Option<Reason> {
        match self {
            CommandError::Rejected { reason, .. } => Some(*reason),
            CommandError::AlreadyPaused { .. } => None,
        }
    }
}

/// Result type for session commands: the lines to report on success
pub type CommandResult = std::result::Result<Vec<String>, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message() {
        let err = CommandError::rejected("add video to My List", Reason::AlreadyInPlaylist);
        assert_eq!(err.to_string(), "Cannot add video to My List: Video already added");
        assert_eq!(err.kind(), ErrorKind::DuplicateEntity);
    }

    #[test]
    fn test_already_paused_message() {
        let err = CommandError::AlreadyPaused {
            title: "Amazing Cats".to_string(),
        };
        assert_eq!(err.to_string(), "Video already paused: Amazing Cats");
        assert_eq!(err.kind(), ErrorKind::InvalidStateTransition);
        assert_eq!(err.reason(), None);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Reason::VideoNotFound.kind(), ErrorKind::ReferenceNotFound);
        assert_eq!(Reason::PlaylistNotFound.kind(), ErrorKind::ReferenceNotFound);
        assert_eq!(Reason::DuplicatePlaylist.kind(), ErrorKind::DuplicateEntity);
        assert_eq!(Reason::AlreadyFlagged.kind(), ErrorKind::DuplicateEntity);
        assert_eq!(Reason::NotPaused.kind(), ErrorKind::InvalidStateTransition);
        assert_eq!(Reason::NotInPlaylist.kind(), ErrorKind::MembershipViolation);
    }
}
