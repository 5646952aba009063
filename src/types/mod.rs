pub mod catalogue;
pub mod playback_state;
