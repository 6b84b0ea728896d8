//! Application state: both stores, where they live, and the active screen

use std::path::{Path, PathBuf};

use super::catalog::LanguageCatalog;
use super::command_book::CommandBook;
use super::error::StoreResult;
use super::navigator::{Navigator, ViewSnapshot};
use super::persist;

/// A single user request, fully gathered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddLanguage { name: String },
    RemoveLanguage { name: String },
    AddCategory { language: String, category: String },
    RemoveCategory { language: String, category: String },
    AddCommand { category: String, name: String, description: String },
    RemoveCommand { category: String, name: String },
    EditCommand { category: String, name: String, description: String },
    OpenCategory { category: String },
    GoBack,
}

/// Locations of the two persisted stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub catalog: PathBuf,
    pub commands: PathBuf,
}

impl StorePaths {
    pub fn new(dir: &Path, catalog_file: &str, commands_file: &str) -> Self {
        Self {
            catalog: dir.join(catalog_file),
            commands: dir.join(commands_file),
        }
    }
}

/// Everything the application knows, owned in one place
#[derive(Debug)]
pub struct AppState {
    catalog: LanguageCatalog,
    commands: CommandBook,
    navigator: Navigator,
    paths: StorePaths,
}

impl AppState {
    /// Load both stores, creating empty files for any that are missing
    pub fn open(paths: StorePaths) -> StoreResult<Self> {
        let catalog = persist::load_or_init(&paths.catalog)?;
        let commands = persist::load_or_init(&paths.commands)?;
        Ok(Self {
            catalog,
            commands,
            navigator: Navigator::new(),
            paths,
        })
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn commands(&self) -> &CommandBook {
        &self.commands
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.navigator.snapshot(&self.catalog, &self.commands)
    }

    /// Apply an action.
    ///
    /// Store mutations run against a copy which is written to disk before it
    /// replaces the in-memory store. On error neither memory nor disk change.
    pub fn apply(&mut self, action: Action) -> StoreResult<()> {
        tracing::debug!("Applying {:?}", action);
        match action {
            Action::AddLanguage { name } => {
                self.update_catalog(|catalog| catalog.add_language(&name))
            }
            Action::RemoveLanguage { name } => {
                self.update_catalog(|catalog| catalog.remove_language(&name).map(|_| ()))
            }
            Action::AddCategory { language, category } => {
                self.update_catalog(|catalog| catalog.add_category(&language, &category))
            }
            Action::RemoveCategory { language, category } => {
                self.update_catalog(|catalog| catalog.remove_category(&language, &category))
            }
            Action::AddCommand {
                category,
                name,
                description,
            } => self.update_commands(|book| book.add_command(&category, &name, &description)),
            Action::RemoveCommand { category, name } => {
                self.update_commands(|book| book.remove_command(&category, &name).map(|_| ()))
            }
            Action::EditCommand {
                category,
                name,
                description,
            } => self.update_commands(|book| book.edit_command(&category, &name, &description)),
            Action::OpenCategory { category } => {
                self.navigator.open_category(&category);
                Ok(())
            }
            Action::GoBack => {
                self.navigator.back();
                Ok(())
            }
        }
    }

    fn update_catalog<F>(&mut self, mutate: F) -> StoreResult<()>
    where
        F: FnOnce(&mut LanguageCatalog) -> StoreResult<()>,
    {
        let mut next = self.catalog.clone();
        mutate(&mut next)?;
        persist::write_atomic(&self.paths.catalog, &next)?;
        self.catalog = next;
        Ok(())
    }

    fn update_commands<F>(&mut self, mutate: F) -> StoreResult<()>
    where
        F: FnOnce(&mut CommandBook) -> StoreResult<()>,
    {
        let mut next = self.commands.clone();
        mutate(&mut next)?;
        persist::write_atomic(&self.paths.commands, &next)?;
        self.commands = next;
        Ok(())
    }
}
