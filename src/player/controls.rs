use egui::{Color32, CornerRadius, Frame, RichText, Ui, widgets::Slider};
use egui_phosphor::regular;

use super::controller::PlaybackController;

/// The three playback widgets: elapsed-time label, scrubber slider, and
/// play/pause toggle button.
pub struct PlayerControls;

impl PlayerControls {
    /// Render the player controls UI
    pub fn render(controller: &mut PlaybackController, ui: &mut Ui) {
        Frame::new()
            .inner_margin(16.0)
            .fill(ui.visuals().window_fill)
            .corner_radius(CornerRadius::same(6))
            .show(ui, |ui| {
                let state = controller.widgets().clone();

                // Elapsed-time label
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&state.time_label).monospace().size(28.0));
                });

                ui.add_space(16.0);

                // Scrubber slider, bounded to the asset duration. The widget
                // reports every change while dragged and once more on release.
                let mut value = state.slider_value;
                let max = if state.slider_max > 0.0 {
                    state.slider_max
                } else {
                    1.0
                };
                let response = ui
                    .scope(|ui| {
                        ui.spacing_mut().slider_width = ui.available_width();
                        ui.add(Slider::new(&mut value, 0.0..=max).show_value(false).text(""))
                    })
                    .inner;

                if response.changed() {
                    controller.slider_changed(value, response.dragged());
                }
                // Settling call when the value did not move on the release frame;
                // a changed() release already seeked above.
                if response.drag_stopped() && !response.changed() {
                    controller.slider_changed(value, false);
                }

                ui.add_space(16.0);

                // Play/pause button with phosphor icons
                let (icon, active_color) = if state.selected {
                    (regular::PAUSE_CIRCLE, Color32::from_rgb(255, 200, 100))
                } else {
                    (regular::PLAY_CIRCLE, Color32::from_rgb(100, 255, 150))
                };
                let icon_color = if controller.engine_ready() {
                    active_color
                } else {
                    Color32::from_gray(150)
                };

                ui.vertical_centered(|ui| {
                    let rich_text = RichText::new(icon.to_string()).size(48.0).color(icon_color);
                    if ui.add(egui::Button::new(rich_text)).clicked() {
                        controller.toggle();
                    }
                });
            });
    }
}
