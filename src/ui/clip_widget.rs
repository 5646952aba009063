use eframe::egui;

use crate::player::decoder::{Decoder, DecoderEvent};
use crate::types::catalogue::ClipDescriptor;
use crate::types::playback_state::{PlaybackState, format_time};

/// Owns the playback lifecycle of exactly one catalogue clip: one decoder,
/// one `PlaybackState`, one rendered control row. Controllers share nothing
/// with each other.
pub struct ClipController<D: Decoder> {
    pub descriptor: ClipDescriptor,
    pub state: PlaybackState,
    /// None when the decoder could not even be constructed for this source;
    /// `state.load_error` carries the reason in that case.
    decoder: Option<D>,
}

impl<D: Decoder> ClipController<D> {
    pub fn new(descriptor: ClipDescriptor, decoder: D) -> Self {
        Self {
            descriptor,
            state: PlaybackState::new(),
            decoder: Some(decoder),
        }
    }

    /// Controller for a clip whose decoder failed to construct. Renders as
    /// an inert row with the failure reason.
    pub fn failed(descriptor: ClipDescriptor, reason: String) -> Self {
        let mut state = PlaybackState::new();
        state.load_error = Some(reason);
        Self {
            descriptor,
            state,
            decoder: None,
        }
    }

    /// Starts or pauses playback depending on the decoder's live state.
    /// The decoder is queried rather than the cached `is_playing` because
    /// playback can stop for reasons outside user action (end of track).
    pub fn toggle_play_pause(&mut self) {
        if self.state.load_error.is_some() {
            return;
        }
        let Some(decoder) = self.decoder.as_mut() else {
            return;
        };
        if decoder.is_paused() {
            decoder.request_play();
            self.state.is_playing = true;
        } else {
            decoder.request_pause();
            self.state.is_playing = false;
        }
    }

    /// Seeks to the start and forces a pause, whatever the current state.
    pub fn reset(&mut self) {
        if self.state.load_error.is_some() {
            return;
        }
        let Some(decoder) = self.decoder.as_mut() else {
            return;
        };
        decoder.set_position(0.0);
        decoder.request_pause();
        self.state.position = 0.0;
        self.state.is_playing = false;
    }

    pub fn toggle_loop(&mut self) {
        if self.state.load_error.is_some() {
            return;
        }
        self.state.is_looping = !self.state.is_looping;
    }

    /// Drains pending decoder notifications into the playback state.
    /// Called once per UI frame by the app shell.
    pub fn process_events(&mut self) {
        let Some(decoder) = self.decoder.as_mut() else {
            return;
        };
        for event in decoder.poll() {
            match event {
                DecoderEvent::MetadataReady { duration } => {
                    self.state.duration = duration;
                }
                DecoderEvent::PositionChanged(position) => {
                    self.state.position = if self.state.duration > 0.0 {
                        position.clamp(0.0, self.state.duration)
                    } else {
                        position.max(0.0)
                    };
                }
                DecoderEvent::Ended => {
                    self.state.position = 0.0;
                    if self.state.is_looping {
                        // Restart from the top without a state transition.
                        decoder.set_position(0.0);
                        decoder.request_play();
                    } else {
                        decoder.set_position(0.0);
                        decoder.request_pause();
                        self.state.is_playing = false;
                    }
                }
                DecoderEvent::Failed(reason) => {
                    log::warn!(
                        "clip {} '{}' failed: {}",
                        self.descriptor.id,
                        self.descriptor.label,
                        reason
                    );
                    self.state.is_playing = false;
                    self.state.load_error = Some(reason);
                }
            }
        }
    }

    /// Renders the clip row: label, the three controls, and the time text.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let error = self.state.load_error.clone();
        ui.group(|ui| {
            ui.set_min_width(280.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&self.descriptor.label).strong());
                ui.horizontal(|ui| {
                    let play_label = if self.state.is_playing { "Pause" } else { "Play" };
                    if ui
                        .add_enabled(error.is_none(), egui::Button::new(play_label))
                        .clicked()
                    {
                        self.toggle_play_pause();
                    }
                    if ui
                        .add_enabled(error.is_none(), egui::Button::new("Reset"))
                        .clicked()
                    {
                        self.reset();
                    }
                    let loop_label = if self.state.is_looping {
                        "Loop On"
                    } else {
                        "Loop Off"
                    };
                    if ui
                        .add_enabled(
                            error.is_none(),
                            egui::SelectableLabel::new(self.state.is_looping, loop_label),
                        )
                        .clicked()
                    {
                        self.toggle_loop();
                    }
                });
                match error {
                    Some(reason) => {
                        ui.label(
                            egui::RichText::new(format!("failed to load: {}", reason))
                                .color(egui::Color32::RED)
                                .size(10.0),
                        );
                    }
                    None => {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} / {}",
                                format_time(self.state.position),
                                format_time(self.state.duration)
                            ))
                            .color(egui::Color32::GRAY),
                        );
                    }
                }
            });
        });
    }
}
