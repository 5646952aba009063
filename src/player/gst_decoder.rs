use gstreamer as gst;

use gst::prelude::*;
use thiserror::Error;

use crate::player::decoder::{Decoder, DecoderEvent};

#[derive(Debug, Error)]
pub enum DecoderError {
    #[error("cannot resolve source '{path}': {source}")]
    Source {
        path: String,
        source: std::io::Error,
    },
    #[error("cannot build media uri: {0}")]
    Uri(#[from] gst::glib::Error),
    #[error("failed to create playbin element: {0}")]
    Element(#[from] gst::glib::BoolError),
    #[error("playbin has no message bus")]
    NoBus,
}

/// GStreamer-backed decoder for one audio source. Owns a `playbin`
/// pipeline exclusively; dropping the decoder tears the pipeline down, so
/// no message can reach a controller after it is gone.
pub struct GstDecoder {
    playbin: gst::Element,
    bus: gst::Bus,
    last_duration: Option<f64>,
}

impl GstDecoder {
    /// Builds a playbin for the given file path and prerolls it paused so
    /// the duration becomes queryable without audible playback.
    pub fn new(source: &str) -> Result<Self, DecoderError> {
        let path = std::fs::canonicalize(source).map_err(|e| DecoderError::Source {
            path: source.to_string(),
            source: e,
        })?;
        let uri = gst::glib::filename_to_uri(&path, None)?;
        let playbin = gst::ElementFactory::make("playbin").build()?;
        playbin.set_property("uri", uri.as_str());
        let bus = playbin.bus().ok_or(DecoderError::NoBus)?;
        playbin.set_state(gst::State::Paused).ok();
        log::debug!("prerolling {}", uri);
        Ok(Self {
            playbin,
            bus,
            last_duration: None,
        })
    }

    fn query_duration_secs(&self) -> Option<f64> {
        self.playbin
            .query_duration::<gst::ClockTime>()
            .map(|d| d.nseconds() as f64 / 1e9)
    }
}

impl Decoder for GstDecoder {
    fn request_play(&mut self) {
        self.playbin.set_state(gst::State::Playing).ok();
    }

    fn request_pause(&mut self) {
        self.playbin.set_state(gst::State::Paused).ok();
    }

    fn set_position(&mut self, seconds: f64) {
        let target = gst::ClockTime::from_nseconds((seconds.max(0.0) * 1e9) as u64);
        self.playbin
            .seek_simple(gst::SeekFlags::FLUSH | gst::SeekFlags::ACCURATE, target)
            .ok();
    }

    fn is_paused(&self) -> bool {
        // An in-flight async state change counts as its target state, the
        // same way the toggle would read it once the change lands.
        let (_, current, pending) = self.playbin.state(gst::ClockTime::ZERO);
        let effective = if pending == gst::State::VoidPending {
            current
        } else {
            pending
        };
        effective != gst::State::Playing
    }

    fn poll(&mut self) -> Vec<DecoderEvent> {
        let mut events = Vec::new();
        while let Some(msg) = self.bus.pop() {
            match msg.view() {
                // AsyncDone covers the initial preroll; DurationChanged
                // covers sources whose duration is refined mid-stream.
                gst::MessageView::AsyncDone(_) | gst::MessageView::DurationChanged(_) => {
                    if let Some(duration) = self.query_duration_secs() {
                        if self.last_duration != Some(duration) {
                            self.last_duration = Some(duration);
                            events.push(DecoderEvent::MetadataReady { duration });
                        }
                    }
                }
                gst::MessageView::Eos(_) => events.push(DecoderEvent::Ended),
                gst::MessageView::Error(err) => {
                    events.push(DecoderEvent::Failed(err.error().to_string()));
                }
                _ => (),
            }
        }
        if !self.is_paused() {
            if let Some(pos) = self.playbin.query_position::<gst::ClockTime>() {
                events.push(DecoderEvent::PositionChanged(pos.nseconds() as f64 / 1e9));
            }
        }
        events
    }
}

impl Drop for GstDecoder {
    fn drop(&mut self) {
        let _ = self.playbin.set_state(gst::State::Null);
    }
}
