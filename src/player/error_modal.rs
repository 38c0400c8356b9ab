use egui::{Button, Color32, Context, RichText, Window};

/// Modal alert surfaced when the engine reports a decode fault.
/// A single acknowledgement button dismisses it.
pub struct ErrorModal {
    pub open: bool,
    pub title: String,
    pub message: String,
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorModal {
    pub fn new() -> Self {
        Self {
            open: false,
            title: "Notice".to_owned(),
            message: String::new(),
        }
    }

    /// Open the alert with the engine's error description
    pub fn open(&mut self, message: &str) {
        self.message = message.to_owned();
        self.open = true;
    }

    /// Show the alert
    pub fn show(&mut self, ctx: &Context) {
        if !self.open {
            return;
        }

        Window::new(&self.title)
            .min_width(280.0)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(&self.message);
                    ui.add_space(20.0);

                    if ui
                        .add(
                            Button::new(RichText::new("OK").color(Color32::from_rgb(255, 255, 255)))
                                .fill(Color32::from_rgb(70, 100, 220)),
                        )
                        .clicked()
                    {
                        self.open = false;
                    }
                });
            });
    }
}
