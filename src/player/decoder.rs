/// Notifications a decoder emits while loading or playing a source.
/// Drained by the owning clip controller once per UI frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoderEvent {
    /// Fires once the source has prerolled far enough for the total
    /// duration to be known, in seconds.
    MetadataReady { duration: f64 },
    /// Fires while playing, at whatever granularity the decoder provides.
    PositionChanged(f64),
    /// The track reached its end.
    Ended,
    /// The source is missing or undecodable. Terminal for this source.
    Failed(String),
}

/// Contract of the platform playback primitive, as seen by a clip
/// controller. Requests are fire-and-forget; their effect is observed
/// through the polled events and the `is_paused` query.
///
/// The trait exists so controller logic can be exercised against a fake
/// decoder without a media pipeline.
pub trait Decoder {
    fn request_play(&mut self);
    fn request_pause(&mut self);
    fn set_position(&mut self, seconds: f64);
    /// Live play/pause state of the decoder itself. Authoritative over any
    /// cached UI state; queried before every toggle decision.
    fn is_paused(&self) -> bool;
    /// Drains all pending notifications.
    fn poll(&mut self) -> Vec<DecoderEvent>;
}
