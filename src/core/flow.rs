//! Multi-step input flows behind each toolbar action
//!
//! A flow asks one question at a time. Confirming an answer either asks the
//! next question or yields a complete [`Action`]. Cancelling simply drops the
//! flow, and an empty text answer aborts it, so nothing is ever applied from a
//! partially answered flow.

use super::error::{EntryKind, StoreError, StoreResult};
use super::state::{Action, AppState};

/// Toolbar operations that gather input before acting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    AddLanguage,
    RemoveLanguage,
    AddCategory,
    RemoveCategory,
    AddCommand,
    RemoveCommand,
    EditCommand,
}

/// A question shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Text {
        title: &'static str,
        label: &'static str,
    },
    Choice {
        title: &'static str,
        label: &'static str,
        options: Vec<String>,
    },
}

impl Prompt {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Text { title, .. } | Self::Choice { title, .. } => *title,
        }
    }

    fn text(title: &'static str, label: &'static str) -> Self {
        Self::Text { title, label }
    }

    fn choice(
        title: &'static str,
        label: &'static str,
        options: Vec<String>,
        kind: EntryKind,
    ) -> StoreResult<Self> {
        if options.is_empty() {
            return Err(StoreError::NothingToSelect(kind));
        }
        Ok(Self::Choice {
            title,
            label,
            options,
        })
    }
}

/// Result of answering the current prompt
#[derive(Debug)]
pub enum Step {
    Next(Flow),
    Done(Action),
    Aborted,
}

/// An in-progress flow
#[derive(Debug, Clone)]
pub struct Flow {
    kind: FlowKind,
    category: Option<String>,
    answers: Vec<String>,
    prompt: Prompt,
}

impl Flow {
    /// Begin a flow, computing its first prompt from the current state
    pub fn start(kind: FlowKind, state: &AppState) -> StoreResult<Self> {
        let category = state.navigator().current_category().map(str::to_string);
        let prompt = match kind {
            FlowKind::AddLanguage => Prompt::text("Add Language", "Enter a new language"),
            FlowKind::RemoveLanguage => Prompt::choice(
                "Remove Language",
                "Languages:",
                state.catalog().names(),
                EntryKind::Language,
            )?,
            FlowKind::AddCategory | FlowKind::RemoveCategory => Prompt::choice(
                "Select Language",
                "Languages:",
                state.catalog().names(),
                EntryKind::Language,
            )?,
            FlowKind::AddCommand => {
                Self::require_category(&category)?;
                Prompt::text("Add Command", "Enter a new command")
            }
            FlowKind::RemoveCommand | FlowKind::EditCommand => {
                let current = Self::require_category(&category)?;
                let title = if kind == FlowKind::RemoveCommand {
                    "Remove Command"
                } else {
                    "Edit Command"
                };
                let options = state
                    .commands()
                    .get(current)
                    .map(|set| set.names())
                    .unwrap_or_default();
                Prompt::choice(title, "Commands:", options, EntryKind::Command)?
            }
        };
        tracing::debug!("Starting {:?} flow", kind);
        Ok(Self {
            kind,
            category,
            answers: Vec::new(),
            prompt,
        })
    }

    fn require_category(category: &Option<String>) -> StoreResult<&str> {
        category
            .as_deref()
            .ok_or(StoreError::NothingToSelect(EntryKind::Category))
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Answer the current prompt
    pub fn submit(mut self, answer: String, state: &AppState) -> StoreResult<Step> {
        if answer.is_empty() {
            tracing::debug!("Empty answer, aborting {:?} flow", self.kind);
            return Ok(Step::Aborted);
        }
        if let Prompt::Choice { options, .. } = &self.prompt {
            if !options.contains(&answer) {
                return Err(StoreError::not_found(self.choice_kind(), answer));
            }
        }
        self.answers.push(answer);

        let step = match (self.kind, self.answers.len()) {
            (FlowKind::AddCategory, 1) => {
                self.prompt = Prompt::text("Add Type", "Enter the type you want to add");
                Step::Next(self)
            }
            (FlowKind::RemoveCategory, 1) => {
                let language = &self.answers[0];
                let options = state
                    .catalog()
                    .get(language)
                    .ok_or_else(|| StoreError::not_found(EntryKind::Language, language.as_str()))?
                    .categories()
                    .to_vec();
                self.prompt = Prompt::choice("Remove Type", "Types:", options, EntryKind::Category)?;
                Step::Next(self)
            }
            (FlowKind::AddCommand, 1) => {
                self.prompt = Prompt::text("Add Description", "Enter the description");
                Step::Next(self)
            }
            (FlowKind::EditCommand, 1) => {
                self.prompt = Prompt::text("Edit Description", "Enter the description");
                Step::Next(self)
            }
            _ => Step::Done(self.into_action()?),
        };
        Ok(step)
    }

    fn choice_kind(&self) -> EntryKind {
        match (self.kind, self.answers.len()) {
            (FlowKind::RemoveCategory, 1) => EntryKind::Category,
            (FlowKind::RemoveCommand | FlowKind::EditCommand, 0) => EntryKind::Command,
            _ => EntryKind::Language,
        }
    }

    fn into_action(self) -> StoreResult<Action> {
        let category = self.category;
        let mut answers = self.answers.into_iter();
        let mut next = move || answers.next().unwrap_or_default();
        let action = match self.kind {
            FlowKind::AddLanguage => Action::AddLanguage { name: next() },
            FlowKind::RemoveLanguage => Action::RemoveLanguage { name: next() },
            FlowKind::AddCategory => Action::AddCategory {
                language: next(),
                category: next(),
            },
            FlowKind::RemoveCategory => Action::RemoveCategory {
                language: next(),
                category: next(),
            },
            FlowKind::AddCommand => Action::AddCommand {
                category: category.ok_or(StoreError::NothingToSelect(EntryKind::Category))?,
                name: next(),
                description: next(),
            },
            FlowKind::RemoveCommand => Action::RemoveCommand {
                category: category.ok_or(StoreError::NothingToSelect(EntryKind::Category))?,
                name: next(),
            },
            FlowKind::EditCommand => Action::EditCommand {
                category: category.ok_or(StoreError::NothingToSelect(EntryKind::Category))?,
                name: next(),
                description: next(),
            },
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::StorePaths;
    use tempfile::TempDir;

    fn state_in(dir: &TempDir) -> AppState {
        AppState::open(StorePaths::new(dir.path(), "data_file", "commands_file")).unwrap()
    }

    fn answer(flow: Flow, text: &str, state: &AppState) -> Step {
        flow.submit(text.to_string(), state).unwrap()
    }

    fn expect_next(step: Step) -> Flow {
        match step {
            Step::Next(flow) => flow,
            other => panic!("expected another prompt, got {:?}", other),
        }
    }

    #[test]
    fn test_add_language_single_step() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);

        let flow = Flow::start(FlowKind::AddLanguage, &state).unwrap();
        assert_eq!(flow.prompt().title(), "Add Language");

        match answer(flow, "Python", &state) {
            Step::Done(action) => assert_eq!(
                action,
                Action::AddLanguage {
                    name: "Python".to_string()
                }
            ),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_empty_text_aborts() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);

        let flow = Flow::start(FlowKind::AddLanguage, &state).unwrap();

        assert!(matches!(answer(flow, "", &state), Step::Aborted));
    }

    #[test]
    fn test_remove_language_needs_languages() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);

        assert!(matches!(
            Flow::start(FlowKind::RemoveLanguage, &state),
            Err(StoreError::NothingToSelect(EntryKind::Language))
        ));
    }

    #[test]
    fn test_add_category_two_steps() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        state
            .apply(Action::AddLanguage {
                name: "Python".to_string(),
            })
            .unwrap();

        let flow = Flow::start(FlowKind::AddCategory, &state).unwrap();
        assert!(matches!(flow.prompt(), Prompt::Choice { options, .. } if options == &["Python"]));

        let flow = expect_next(answer(flow, "Python", &state));
        assert_eq!(flow.prompt().title(), "Add Type");

        match answer(flow, "Strings", &state) {
            Step::Done(action) => assert_eq!(
                action,
                Action::AddCategory {
                    language: "Python".to_string(),
                    category: "Strings".to_string(),
                }
            ),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_remove_category_offers_language_categories() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        state
            .apply(Action::AddLanguage {
                name: "Python".to_string(),
            })
            .unwrap();
        for category in ["Strings", "Lists"] {
            state
                .apply(Action::AddCategory {
                    language: "Python".to_string(),
                    category: category.to_string(),
                })
                .unwrap();
        }

        let flow = Flow::start(FlowKind::RemoveCategory, &state).unwrap();
        let flow = expect_next(answer(flow, "Python", &state));

        assert_eq!(
            flow.prompt(),
            &Prompt::Choice {
                title: "Remove Type",
                label: "Types:",
                options: vec!["Strings".to_string(), "Lists".to_string()],
            }
        );
    }

    #[test]
    fn test_remove_category_without_categories_fails() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        state
            .apply(Action::AddLanguage {
                name: "Python".to_string(),
            })
            .unwrap();

        let flow = Flow::start(FlowKind::RemoveCategory, &state).unwrap();

        assert!(matches!(
            flow.submit("Python".to_string(), &state),
            Err(StoreError::NothingToSelect(EntryKind::Category))
        ));
    }

    #[test]
    fn test_unknown_choice_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        state
            .apply(Action::AddLanguage {
                name: "Python".to_string(),
            })
            .unwrap();

        let flow = Flow::start(FlowKind::RemoveLanguage, &state).unwrap();

        assert!(matches!(
            flow.submit("Go".to_string(), &state),
            Err(StoreError::NotFound {
                kind: EntryKind::Language,
                ..
            })
        ));
    }

    #[test]
    fn test_command_flows_use_current_category() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        assert!(Flow::start(FlowKind::AddCommand, &state).is_err());

        state
            .apply(Action::OpenCategory {
                category: "Strings".to_string(),
            })
            .unwrap();
        let flow = Flow::start(FlowKind::AddCommand, &state).unwrap();
        let flow = expect_next(answer(flow, "upper", &state));
        assert_eq!(flow.prompt().title(), "Add Description");

        match answer(flow, "Converts to uppercase", &state) {
            Step::Done(action) => assert_eq!(
                action,
                Action::AddCommand {
                    category: "Strings".to_string(),
                    name: "upper".to_string(),
                    description: "Converts to uppercase".to_string(),
                }
            ),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_add_command_empty_description_aborts_whole_flow() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        state
            .apply(Action::OpenCategory {
                category: "Strings".to_string(),
            })
            .unwrap();

        let flow = Flow::start(FlowKind::AddCommand, &state).unwrap();
        let flow = expect_next(answer(flow, "upper", &state));

        assert!(matches!(answer(flow, "", &state), Step::Aborted));
    }

    #[test]
    fn test_edit_command_lists_existing_commands() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        state
            .apply(Action::OpenCategory {
                category: "Shell".to_string(),
            })
            .unwrap();
        assert!(matches!(
            Flow::start(FlowKind::EditCommand, &state),
            Err(StoreError::NothingToSelect(EntryKind::Command))
        ));

        state
            .apply(Action::AddCommand {
                category: "Shell".to_string(),
                name: "run".to_string(),
                description: "runs it".to_string(),
            })
            .unwrap();
        let flow = Flow::start(FlowKind::EditCommand, &state).unwrap();
        let flow = expect_next(answer(flow, "run", &state));

        match answer(flow, "executes it", &state) {
            Step::Done(action) => {
                state.apply(action).unwrap();
            }
            other => panic!("unexpected step {:?}", other),
        }
        assert_eq!(
            state.commands().get("Shell").unwrap().description("run"),
            Some("executes it")
        );
    }
}
