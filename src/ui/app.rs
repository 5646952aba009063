use eframe::egui;

use crate::player::gst_decoder::GstDecoder;
use crate::types::catalogue::ClipDescriptor;
use crate::ui::clip_widget::ClipController;

/// Root application state: one clip controller per catalogue entry,
/// instantiated once at startup.
pub struct SoundboardApp {
    controllers: Vec<ClipController<GstDecoder>>,
}

impl SoundboardApp {
    pub fn new(catalogue: Vec<ClipDescriptor>) -> Self {
        let controllers = catalogue
            .into_iter()
            .map(|descriptor| match GstDecoder::new(&descriptor.source) {
                Ok(decoder) => ClipController::new(descriptor, decoder),
                Err(e) => {
                    log::warn!(
                        "clip {} '{}' could not be opened: {}",
                        descriptor.id,
                        descriptor.source,
                        e
                    );
                    ClipController::failed(descriptor, e.to_string())
                }
            })
            .collect();
        Self { controllers }
    }
}

impl eframe::App for SoundboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for controller in &mut self.controllers {
            controller.process_events();
        }

        egui::TopBottomPanel::top("heading_panel").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Quiz Show Soundboard");
            });
        });

        egui::TopBottomPanel::bottom("footer_panel").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Sound cues for the quiz-show control desk")
                        .size(10.0)
                        .color(egui::Color32::GRAY),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                // Two clip cards per row.
                for row in self.controllers.chunks_mut(2) {
                    ui.horizontal(|ui| {
                        for controller in row {
                            controller.show(ui);
                        }
                    });
                }
            });
        });

        // Keep position displays ticking while anything is audible.
        if self.controllers.iter().any(|c| c.state.is_playing) {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
