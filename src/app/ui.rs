use super::DropZoneApp;
use eframe::egui::{self, Color32, RichText, Stroke};

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);

impl DropZoneApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.heading("GZ File Drop Zone");
                ui.add_space(5.0);
                ui.label(
                    RichText::new("Drop files to send their names to the processing backend")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });

            ui.add_space(20.0);
            self.render_drop_area(ui);
            ui.add_space(20.0);

            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    let button =
                        egui::Button::new("📤 Submit File Names").min_size(egui::vec2(200.0, 40.0));
                    if ui.add(button).clicked() {
                        self.submit();
                    }
                    if ui.button("🗑 Clear File Names").clicked() {
                        self.reset();
                    }
                });
            });

            ui.add_space(10.0);
            ui.label(self.state.get_status_text());
        });
    }

    fn render_drop_area(&self, ui: &mut egui::Ui) {
        let stroke = if self.state.dragging {
            Stroke::new(2.0, ACCENT)
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke
        };

        egui::Frame::group(ui.style())
            .stroke(stroke)
            .fill(ui.style().visuals.extreme_bg_color)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(ui.available_width(), 200.0));

                if self.state.shows_processed_list() {
                    ui.label(RichText::new("Processed files").strong());
                    ui.add_space(8.0);
                    self.render_names(ui, &self.state.status.processed_files, "✅");
                } else {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("Drag files here").size(18.0));
                    });
                    ui.add_space(8.0);
                    self.render_names(ui, &self.state.pending_files, "📄");
                }
            });
    }

    fn render_names(&self, ui: &mut egui::Ui, names: &[String], icon: &str) {
        egui::ScrollArea::vertical()
            .max_height(300.0)
            .show(ui, |ui| {
                for name in names {
                    ui.horizontal(|ui| {
                        ui.label(icon);
                        ui.label(name);
                    });
                    ui.add_space(4.0);
                }
            });
    }
}
