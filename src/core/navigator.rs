//! Two-screen navigation and the snapshot the UI renders from

use super::catalog::LanguageCatalog;
use super::command_book::CommandBook;

/// Which screen is active
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    LanguageList,
    CategoryDetail { category: String },
}

/// Tracks the active screen and the selected category
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    view: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Category shown by the detail screen, if it is active
    pub fn current_category(&self) -> Option<&str> {
        match &self.view {
            View::CategoryDetail { category } => Some(category.as_str()),
            View::LanguageList => None,
        }
    }

    pub fn open_category(&mut self, category: &str) {
        tracing::debug!("Opening category {}", category);
        self.view = View::CategoryDetail {
            category: category.to_string(),
        };
    }

    pub fn back(&mut self) {
        tracing::debug!("Returning to language list");
        self.view = View::LanguageList;
    }

    /// Build the rows of the active screen from the current store contents
    pub fn snapshot(&self, catalog: &LanguageCatalog, commands: &CommandBook) -> ViewSnapshot {
        match &self.view {
            View::LanguageList => ViewSnapshot::Languages(
                catalog
                    .iter()
                    .map(|language| LanguageRow {
                        name: language.name.clone(),
                        categories: language.categories().to_vec(),
                    })
                    .collect(),
            ),
            View::CategoryDetail { category } => ViewSnapshot::Commands {
                category: category.clone(),
                rows: commands
                    .get(category)
                    .map(|set| {
                        set.iter()
                            .map(|command| CommandRow {
                                name: command.name.clone(),
                                description: command.description.clone(),
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        }
    }
}

/// One row of the language list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow {
    pub name: String,
    pub categories: Vec<String>,
}

/// One row of the category detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRow {
    pub name: String,
    pub description: String,
}

/// Immutable copy of everything the active screen displays.
///
/// Rebuilt from scratch after every mutation or navigation step, so what is
/// drawn always matches the stores exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSnapshot {
    Languages(Vec<LanguageRow>),
    Commands {
        category: String,
        rows: Vec<CommandRow>,
    },
}

impl ViewSnapshot {
    pub fn row_count(&self) -> usize {
        match self {
            Self::Languages(rows) => rows.len(),
            Self::Commands { rows, .. } => rows.len(),
        }
    }
}
