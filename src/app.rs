use std::time::Instant;

use crate::player::{BUNDLED_SOUND, ErrorModal, PlaybackController, PlayerControls, REFRESH_INTERVAL};

/// The single player screen.
pub struct PlayerApp {
    controller: PlaybackController,
    error_modal: ErrorModal,
}

impl PlayerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Set theme to dark
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        // Install the phosphor icon font for the transport button
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut controller = PlaybackController::new();
        controller.initialize(BUNDLED_SOUND);

        Self {
            controller,
            error_modal: ErrorModal::new(),
        }
    }
}

impl eframe::App for PlayerApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Dispatch engine events and fire the refresh tick if one is due
        self.controller.poll(Instant::now());

        if let Some(message) = self.controller.take_alert() {
            self.error_modal.open(&message);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.heading("Music Player");
            });
            ui.add_space(32.0);

            PlayerControls::render(&mut self.controller, ui);
        });

        self.error_modal.show(ctx);

        // The refresh timer is driven by the repaint loop while playing
        if self.controller.timer_running() {
            ctx.request_repaint_after(REFRESH_INTERVAL);
        }
    }
}
