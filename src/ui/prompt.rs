//! Modal prompt asking the current question of a flow

use eframe::egui;

use crate::core::flow::{Flow, Prompt};

const INPUT_WIDTH: f32 = 280.0;

/// How the user closed the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Confirmed(String),
    Cancelled,
}

/// Dialog state for one prompt of a flow
pub struct PromptDialog {
    flow: Flow,
    input: String,
    selected: usize,
    focus_requested: bool,
}

impl PromptDialog {
    pub fn new(flow: Flow) -> Self {
        Self {
            flow,
            input: String::new(),
            selected: 0,
            focus_requested: false,
        }
    }

    pub fn into_flow(self) -> Flow {
        self.flow
    }

    fn answer(&self) -> String {
        match self.flow.prompt() {
            Prompt::Text { .. } => self.input.clone(),
            Prompt::Choice { options, .. } => {
                options.get(self.selected).cloned().unwrap_or_default()
            }
        }
    }

    /// Show the dialog; returns `Some` once the user confirmed or cancelled
    pub fn show(&mut self, ctx: &egui::Context) -> Option<PromptOutcome> {
        let (enter, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
            )
        });
        let mut confirm = false;
        let mut cancel = false;

        egui::Window::new(self.flow.prompt().title())
            .id(egui::Id::new("prompt_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                match self.flow.prompt() {
                    Prompt::Text { label, .. } => {
                        ui.label(*label);
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut self.input).desired_width(INPUT_WIDTH),
                        );
                        if !self.focus_requested {
                            response.request_focus();
                            self.focus_requested = true;
                        }
                    }
                    Prompt::Choice { label, options, .. } => {
                        ui.label(*label);
                        let current = options.get(self.selected).map(String::as_str).unwrap_or("");
                        egui::ComboBox::from_id_salt("prompt_choice")
                            .width(INPUT_WIDTH)
                            .selected_text(current)
                            .show_ui(ui, |ui| {
                                for (index, option) in options.iter().enumerate() {
                                    ui.selectable_value(&mut self.selected, index, option.as_str());
                                }
                            });
                    }
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    if ui.button("OK").clicked() {
                        confirm = true;
                    }
                });
            });

        if cancel || escape {
            Some(PromptOutcome::Cancelled)
        } else if confirm || enter {
            Some(PromptOutcome::Confirmed(self.answer()))
        } else {
            None
        }
    }
}
