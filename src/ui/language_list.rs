//! Language list screen: one row per language with a button per category

use eframe::egui;

use crate::core::config::UiConfig;
use crate::core::navigator::LanguageRow;

const ROW_HEIGHT: f32 = 100.0;
const LABEL_WIDTH: f32 = 200.0;

pub struct LanguageListPanel;

impl LanguageListPanel {
    /// Show all language rows, returning the category the user clicked
    pub fn show(ui: &mut egui::Ui, rows: &[LanguageRow], style: &UiConfig) -> Option<String> {
        if rows.is_empty() {
            Self::show_empty(ui);
            return None;
        }

        let mut selected = None;
        for row in rows {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.set_min_height(ROW_HEIGHT);
                ui.horizontal_centered(|ui| {
                    ui.add_sized(
                        [LABEL_WIDTH, 0.0],
                        egui::Label::new(
                            egui::RichText::new(&row.name).size(style.language_font_size),
                        ),
                    );
                    for category in &row.categories {
                        let text = egui::RichText::new(category).size(style.category_font_size);
                        if ui.button(text).clicked() {
                            selected = Some(category.clone());
                        }
                    }
                });
            });
        }
        selected
    }

    fn show_empty(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label("No languages yet");
            ui.label("Use Add Language to create one");
        });
    }
}
