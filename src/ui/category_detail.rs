//! Category detail screen: the commands of one category

use eframe::egui;

use crate::core::config::UiConfig;
use crate::core::navigator::CommandRow;

const ROW_HEIGHT: f32 = 100.0;
const NAME_WIDTH: f32 = 200.0;
const DESCRIPTION_WIDTH: f32 = 300.0;

pub struct CategoryDetailPanel;

impl CategoryDetailPanel {
    pub fn show(ui: &mut egui::Ui, category: &str, rows: &[CommandRow], style: &UiConfig) {
        ui.heading(category);
        ui.add_space(4.0);

        if rows.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                ui.label(format!("No commands in {} yet", category));
                ui.label("Use Add Command to create one");
            });
            return;
        }

        for row in rows {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.set_min_height(ROW_HEIGHT);
                ui.horizontal_centered(|ui| {
                    ui.add_sized(
                        [NAME_WIDTH, 0.0],
                        egui::Label::new(
                            egui::RichText::new(&row.name)
                                .size(style.language_font_size)
                                .monospace(),
                        ),
                    );
                    ui.scope(|ui| {
                        ui.set_min_width(DESCRIPTION_WIDTH);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&row.description)
                                    .size(style.category_font_size),
                            )
                            .wrap(),
                        );
                    });
                });
            });
        }
    }
}
