//! Status bar showing where the stores live

use eframe::egui;

use crate::core::navigator::ViewSnapshot;
use crate::core::state::StorePaths;

pub struct StatusBar;

impl StatusBar {
    pub fn show(ui: &mut egui::Ui, paths: &StorePaths, snapshot: &ViewSnapshot) {
        ui.horizontal(|ui| {
            ui.label(Self::summary(snapshot));
            ui.separator();
            ui.weak(paths.catalog.display().to_string())
                .on_hover_text("Language catalog");
            ui.weak(paths.commands.display().to_string())
                .on_hover_text("Command book");
        });
    }

    fn summary(snapshot: &ViewSnapshot) -> String {
        let count = snapshot.row_count();
        let plural = if count == 1 { "" } else { "s" };
        match snapshot {
            ViewSnapshot::Languages(_) => format!("{} language{}", count, plural),
            ViewSnapshot::Commands { category, .. } => {
                format!("{} command{} in {}", count, plural, category)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigator::{CommandRow, LanguageRow};

    #[test]
    fn test_summary_pluralizes() {
        let one = ViewSnapshot::Languages(vec![LanguageRow {
            name: "Python".to_string(),
            categories: Vec::new(),
        }]);
        assert_eq!(StatusBar::summary(&one), "1 language");
        assert_eq!(StatusBar::summary(&ViewSnapshot::Languages(Vec::new())), "0 languages");

        let commands = ViewSnapshot::Commands {
            category: "Shell".to_string(),
            rows: vec![
                CommandRow {
                    name: "ls".to_string(),
                    description: "list".to_string(),
                },
                CommandRow {
                    name: "cd".to_string(),
                    description: "change dir".to_string(),
                },
            ],
        };
        assert_eq!(StatusBar::summary(&commands), "2 commands in Shell");
    }
}
