//! Session configuration

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Configuration for a playback session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Reason stored by `flag` when the caller gives none
    pub default_flag_reason: String,
}

impl SessionConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            default_flag_reason: DEFAULT_FLAG_REASON.to_string(),
        }
    }

    /// Set the reason used for flags without an explicit one
    pub fn with_default_flag_reason(mut self, reason: impl Into<String>) -> Self {
        self.default_flag_reason = reason.into();
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
