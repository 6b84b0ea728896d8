//! Command book: named commands and their descriptions, grouped by category
//!
//! Categories here are a single namespace shared by every language in the
//! catalog. Two languages listing a category with the same name see the same
//! commands.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::error::{EntryKind, StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub description: String,
}

/// Commands of one category, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSet {
    commands: Vec<Command>,
}

impl CommandSet {
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.commands.iter().map(|c| c.name.clone()).collect()
    }

    #[allow(dead_code)]
    pub fn description(&self, name: &str) -> Option<&str> {
        self.commands
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.description.as_str())
    }

    fn upsert(&mut self, name: &str, description: &str) {
        match self.commands.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.description = description.to_string(),
            None => self.commands.push(Command {
                name: name.to_string(),
                description: description.to_string(),
            }),
        }
    }
}

/// Ordered mapping from category name to its commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandBook {
    categories: Vec<(String, CommandSet)>,
}

impl CommandBook {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Commands of a category, `None` if nothing was ever added to it
    pub fn get(&self, category: &str) -> Option<&CommandSet> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, set)| set)
    }

    fn get_mut(&mut self, category: &str) -> Option<&mut CommandSet> {
        self.categories
            .iter_mut()
            .find(|(name, _)| name == category)
            .map(|(_, set)| set)
    }

    /// Set `category/name` to `description`, creating the category on first use
    pub fn add_command(&mut self, category: &str, name: &str, description: &str) -> StoreResult<()> {
        if name.is_empty() {
            return Err(StoreError::EmptyInput("command name"));
        }
        if description.is_empty() {
            return Err(StoreError::EmptyInput("command description"));
        }
        match self.get_mut(category) {
            Some(set) => set.upsert(name, description),
            None => {
                let mut set = CommandSet::default();
                set.upsert(name, description);
                self.categories.push((category.to_string(), set));
            }
        }
        Ok(())
    }

    /// Remove a command and return it
    pub fn remove_command(&mut self, category: &str, name: &str) -> StoreResult<Command> {
        let set = self
            .get_mut(category)
            .ok_or_else(|| StoreError::not_found(EntryKind::Command, name))?;
        let index = set
            .commands
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| StoreError::not_found(EntryKind::Command, name))?;
        Ok(set.commands.remove(index))
    }

    /// Replace the description of an existing command
    pub fn edit_command(&mut self, category: &str, name: &str, description: &str) -> StoreResult<()> {
        if description.is_empty() {
            return Err(StoreError::EmptyInput("command description"));
        }
        let command = self
            .get_mut(category)
            .and_then(|set| set.commands.iter_mut().find(|c| c.name == name))
            .ok_or_else(|| StoreError::not_found(EntryKind::Command, name))?;
        command.description = description.to_string();
        Ok(())
    }
}

impl Serialize for CommandSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.commands.iter().map(|c| (&c.name, &c.description)))
    }
}

impl<'de> Deserialize<'de> for CommandSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let commands = raw
            .into_iter()
            .map(|(name, value)| match value {
                Value::String(description) => Ok(Command { name, description }),
                other => Err(D::Error::custom(format!(
                    "description of '{name}' must be a string, found {other}"
                ))),
            })
            .collect::<Result<_, D::Error>>()?;
        Ok(Self { commands })
    }
}

impl Serialize for CommandBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.categories.iter().map(|(name, set)| (name, set)))
    }
}

impl<'de> Deserialize<'de> for CommandBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let categories = raw
            .into_iter()
            .map(|(name, value)| {
                let set = CommandSet::deserialize(value).map_err(D::Error::custom)?;
                Ok((name, set))
            })
            .collect::<Result<_, D::Error>>()?;
        Ok(Self { categories })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_command_creates_category() {
        let mut book = CommandBook::new();
        book.add_command("Strings", "upper", "Converts to uppercase").unwrap();

        assert_eq!(
            serde_json::to_string(&book).unwrap(),
            r#"{"Strings":{"upper":"Converts to uppercase"}}"#
        );
    }

    #[test]
    fn test_add_command_requires_name_and_description() {
        let mut book = CommandBook::new();
        assert!(book.add_command("Strings", "", "text").is_err());
        assert!(book.add_command("Strings", "upper", "").is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn test_edit_is_last_write_wins() {
        let mut book = CommandBook::new();
        book.add_command("Shell", "run", "runs it").unwrap();
        book.edit_command("Shell", "run", "executes it").unwrap();

        assert_eq!(book.get("Shell").unwrap().description("run"), Some("executes it"));
    }

    #[test]
    fn test_add_existing_name_overwrites_in_place() {
        let mut book = CommandBook::new();
        book.add_command("Shell", "ls", "list").unwrap();
        book.add_command("Shell", "cd", "change dir").unwrap();
        book.add_command("Shell", "ls", "list files").unwrap();

        let set = book.get("Shell").unwrap();
        assert_eq!(set.names(), vec!["ls", "cd"]);
        assert_eq!(set.description("ls"), Some("list files"));
    }

    #[test]
    fn test_remove_missing_command_is_not_found() {
        let mut book = CommandBook::new();
        book.add_command("Shell", "ls", "list").unwrap();
        let before = book.clone();

        assert!(matches!(
            book.remove_command("Shell", "rm"),
            Err(StoreError::NotFound {
                kind: EntryKind::Command,
                ..
            })
        ));
        assert!(book.remove_command("Git", "ls").is_err());
        assert_eq!(book, before);
    }

    #[test]
    fn test_edit_missing_command_is_not_found() {
        let mut book = CommandBook::new();
        assert!(matches!(
            book.edit_command("Shell", "ls", "list"),
            Err(StoreError::NotFound { .. })
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn test_remove_keeps_empty_category() {
        let mut book = CommandBook::new();
        book.add_command("Shell", "ls", "list").unwrap();
        let removed = book.remove_command("Shell", "ls").unwrap();

        assert_eq!(removed.description, "list");
        assert_eq!(serde_json::to_string(&book).unwrap(), r#"{"Shell":{}}"#);
    }

    #[test]
    fn test_deserialize_keeps_order_and_rejects_bad_description() {
        let book: CommandBook =
            serde_json::from_str(r#"{"Git": {"push": "upload", "add": "stage"}}"#).unwrap();
        assert_eq!(book.get("Git").unwrap().names(), vec!["push", "add"]);

        let bad: Result<CommandBook, _> = serde_json::from_str(r#"{"Git": {"push": 1}}"#);
        assert!(bad.is_err());
    }
}
