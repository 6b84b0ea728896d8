//! Main application state and UI coordination

use std::path::PathBuf;

use eframe::egui;

use crate::core::config::{AppConfig, Theme};
use crate::core::error::StoreError;
use crate::core::flow::{Flow, FlowKind, Step};
use crate::core::navigator::ViewSnapshot;
use crate::core::state::{Action, AppState};
use crate::ui::{
    category_detail::CategoryDetailPanel,
    dialogs,
    language_list::LanguageListPanel,
    prompt::{PromptDialog, PromptOutcome},
    status_bar::StatusBar,
    toolbar::{ToolbarEvent, ToolbarPanel},
};

/// Something the user asked for during a frame, handled once drawing is done
#[derive(Debug)]
enum UiEvent {
    StartFlow(FlowKind),
    Apply(Action),
    OpenDataFolder,
    ChangeDataFolder,
    Reload,
    SetTheme(Theme),
}

/// Main application state
pub struct CheatNotesApp {
    /// Stores and navigation
    state: AppState,
    /// What the central panel draws, rebuilt after every change
    snapshot: ViewSnapshot,
    /// Prompt of the flow in progress
    prompt: Option<PromptDialog>,
    /// Application configuration
    config: AppConfig,
}

impl CheatNotesApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, state: AppState) -> Self {
        Self::apply_theme(&cc.egui_ctx, config.ui.theme);
        let snapshot = state.snapshot();

        Self {
            state,
            snapshot,
            prompt: None,
            config,
        }
    }

    fn apply_theme(ctx: &egui::Context, theme: Theme) {
        let visuals = match theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };
        ctx.set_visuals(visuals);
    }

    /// Rebuild the view from the stores
    fn refresh(&mut self) {
        self.snapshot = self.state.snapshot();
    }

    fn report(&self, error: &StoreError) {
        if error.is_user_facing() {
            tracing::warn!("Rejected: {}", error);
            dialogs::show_error("Cannot do that", &error.to_string());
        } else {
            tracing::error!("Store failure: {}", error);
            dialogs::show_error("Could not save changes", &error.to_string());
        }
    }

    fn dispatch(&mut self, action: Action) {
        let summary = format!("{:?}", action);
        match self.state.apply(action) {
            Ok(()) => {
                tracing::info!("Applied {}", summary);
                self.refresh();
            }
            Err(e) => self.report(&e),
        }
    }

    fn start_flow(&mut self, kind: FlowKind) {
        match Flow::start(kind, &self.state) {
            Ok(flow) => self.prompt = Some(PromptDialog::new(flow)),
            Err(e) => self.report(&e),
        }
    }

    fn advance(&mut self, flow: Flow, outcome: PromptOutcome) {
        let answer = match outcome {
            PromptOutcome::Confirmed(answer) => answer,
            PromptOutcome::Cancelled => {
                tracing::debug!("Cancelled {:?} flow", flow.kind());
                return;
            }
        };
        match flow.submit(answer, &self.state) {
            Ok(Step::Next(flow)) => self.prompt = Some(PromptDialog::new(flow)),
            Ok(Step::Done(action)) => self.dispatch(action),
            Ok(Step::Aborted) => {}
            Err(e) => self.report(&e),
        }
    }

    /// Reopen the stores, optionally from another data folder
    fn reload(&mut self, data_dir: Option<PathBuf>) {
        let mut config = self.config.clone();
        if data_dir.is_some() {
            config.data_dir = data_dir;
        }

        match AppState::open(config.store_paths()) {
            Ok(state) => {
                tracing::info!("Loaded stores from {}", config.data_dir().display());
                self.state = state;
                self.prompt = None;
                if config != self.config {
                    self.config = config;
                    self.save_config();
                }
                self.refresh();
            }
            Err(e) => self.report(&e),
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {:#}", e);
        }
    }

    fn open_data_folder(&self) {
        let dir = self.config.data_dir();
        if let Err(e) = open::that(&dir) {
            tracing::error!("Failed to open {}: {}", dir.display(), e);
            dialogs::show_error("Could not open data folder", &e.to_string());
        }
    }

    fn handle(&mut self, ctx: &egui::Context, event: UiEvent) {
        match event {
            UiEvent::StartFlow(kind) => self.start_flow(kind),
            UiEvent::Apply(action) => self.dispatch(action),
            UiEvent::OpenDataFolder => self.open_data_folder(),
            UiEvent::ChangeDataFolder => {
                if let Some(dir) = dialogs::pick_folder(&self.config.data_dir()) {
                    self.reload(Some(dir));
                }
            }
            UiEvent::Reload => self.reload(None),
            UiEvent::SetTheme(theme) => {
                Self::apply_theme(ctx, theme);
                self.config.ui.theme = theme;
                self.save_config();
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Data Folder").clicked() {
                        events.push(UiEvent::OpenDataFolder);
                        ui.close();
                    }
                    if ui.button("Change Data Folder...").clicked() {
                        events.push(UiEvent::ChangeDataFolder);
                        ui.close();
                    }
                    if ui.button("Reload From Disk").clicked() {
                        events.push(UiEvent::Reload);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let theme = self.config.ui.theme;
                    if ui.selectable_label(theme == Theme::Dark, "Dark Theme").clicked() {
                        events.push(UiEvent::SetTheme(Theme::Dark));
                        ui.close();
                    }
                    if ui.selectable_label(theme == Theme::Light, "Light Theme").clicked() {
                        events.push(UiEvent::SetTheme(Theme::Light));
                        ui.close();
                    }
                });
            });
        });
    }
}

impl eframe::App for CheatNotesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        // Escape belongs to the prompt while one is open
        if self.prompt.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if let ViewSnapshot::Commands { .. } = self.snapshot {
                events.push(UiEvent::Apply(Action::GoBack));
            }
        }

        self.render_menu_bar(ctx, &mut events);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_enabled_ui(self.prompt.is_none(), |ui| {
                match ToolbarPanel::show(ui, &self.snapshot) {
                    Some(ToolbarEvent::Start(kind)) => events.push(UiEvent::StartFlow(kind)),
                    Some(ToolbarEvent::GoBack) => events.push(UiEvent::Apply(Action::GoBack)),
                    None => {}
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            StatusBar::show(ui, self.state.paths(), &self.snapshot);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("rows_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_enabled_ui(self.prompt.is_none(), |ui| match &self.snapshot {
                        ViewSnapshot::Languages(rows) => {
                            if let Some(category) =
                                LanguageListPanel::show(ui, rows, &self.config.ui)
                            {
                                events.push(UiEvent::Apply(Action::OpenCategory { category }));
                            }
                        }
                        ViewSnapshot::Commands { category, rows } => {
                            CategoryDetailPanel::show(ui, category, rows, &self.config.ui);
                        }
                    });
                });
        });

        let outcome = self.prompt.as_mut().and_then(|dialog| dialog.show(ctx));
        if let Some(outcome) = outcome {
            if let Some(dialog) = self.prompt.take() {
                self.advance(dialog.into_flow(), outcome);
            }
        }

        for event in events {
            self.handle(ctx, event);
        }
    }
}
