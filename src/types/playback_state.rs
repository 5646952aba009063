/// Ephemeral per-clip playback state. One instance per clip controller,
/// never shared between controllers and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Cached projection of the decoder's play/pause state. Refreshed on
    /// every toggle and on end-of-track; the decoder stays authoritative.
    pub is_playing: bool,
    pub is_looping: bool,
    /// Current position in seconds.
    pub position: f64,
    /// Total duration in seconds; 0.0 until the decoder has prerolled
    /// enough to report it.
    pub duration: f64,
    /// Set once the source turned out to be missing or undecodable. The
    /// clip's controls render inert from then on.
    pub load_error: Option<String>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            is_playing: false,
            is_looping: false,
            position: 0.0,
            duration: 0.0,
            load_error: None,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a time in seconds as `m:ss`, seconds zero-padded, minutes not.
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_pads_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(5.0), "0:05");
        assert_eq!(format_time(9.9), "0:09");
        assert_eq!(format_time(65.0), "1:05");
    }

    #[test]
    fn test_format_time_minutes_unpadded() {
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn test_format_time_negative_clamps_to_zero() {
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = PlaybackState::new();
        assert!(!state.is_playing);
        assert!(!state.is_looping);
        assert_eq!(state.position, 0.0);
        assert_eq!(state.duration, 0.0);
        assert!(state.load_error.is_none());
    }
}
