//! Toolbar with the actions available on the active screen

use eframe::egui;

use crate::core::flow::FlowKind;
use crate::core::navigator::ViewSnapshot;

/// What the user picked from the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarEvent {
    Start(FlowKind),
    GoBack,
}

pub struct ToolbarPanel;

impl ToolbarPanel {
    const LANGUAGE_TOOLS: [(&'static str, FlowKind); 4] = [
        ("Add Language", FlowKind::AddLanguage),
        ("Remove Language", FlowKind::RemoveLanguage),
        ("Add Type", FlowKind::AddCategory),
        ("Remove Type", FlowKind::RemoveCategory),
    ];

    const COMMAND_TOOLS: [(&'static str, FlowKind); 3] = [
        ("Add Command", FlowKind::AddCommand),
        ("Remove Command", FlowKind::RemoveCommand),
        ("Edit Command", FlowKind::EditCommand),
    ];

    /// Show the toolbar for the screen described by `snapshot`
    pub fn show(ui: &mut egui::Ui, snapshot: &ViewSnapshot) -> Option<ToolbarEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            let tools: &[(&str, FlowKind)] = match snapshot {
                ViewSnapshot::Languages(_) => &Self::LANGUAGE_TOOLS,
                ViewSnapshot::Commands { .. } => &Self::COMMAND_TOOLS,
            };
            for (label, kind) in tools {
                if ui.button(*label).clicked() {
                    event = Some(ToolbarEvent::Start(*kind));
                }
            }
            if let ViewSnapshot::Commands { .. } = snapshot {
                if ui.button("Go Back").on_hover_text("Esc").clicked() {
                    event = Some(ToolbarEvent::GoBack);
                }
            }
        });

        event
    }
}
