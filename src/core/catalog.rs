//! Language catalog: languages and the categories listed under each

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::error::{EntryKind, StoreError, StoreResult};

/// A language and its categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    /// `None` until the first category is added
    pub categories: Option<Vec<String>>,
}

impl Language {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categories: None,
        }
    }

    /// Categories in display order, empty when none were ever added
    pub fn categories(&self) -> &[String] {
        self.categories.as_deref().unwrap_or_default()
    }
}

/// Ordered mapping from language name to its category list.
///
/// Stored on disk as a JSON object whose values are arrays of strings or
/// `null`. Insertion order is kept, so rows render in the order languages
/// were created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

impl LanguageCatalog {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.languages.iter().map(|l| l.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.name == name)
    }

    fn get_mut(&mut self, name: &str) -> StoreResult<&mut Language> {
        self.languages
            .iter_mut()
            .find(|l| l.name == name)
            .ok_or_else(|| StoreError::not_found(EntryKind::Language, name))
    }

    /// Add a language with no categories.
    ///
    /// An existing language of the same name keeps its position but loses its
    /// categories.
    pub fn add_language(&mut self, name: &str) -> StoreResult<()> {
        if name.is_empty() {
            return Err(StoreError::EmptyInput("language name"));
        }
        match self.languages.iter_mut().find(|l| l.name == name) {
            Some(existing) => existing.categories = None,
            None => self.languages.push(Language::new(name)),
        }
        Ok(())
    }

    /// Remove a language and return it
    pub fn remove_language(&mut self, name: &str) -> StoreResult<Language> {
        let index = self
            .languages
            .iter()
            .position(|l| l.name == name)
            .ok_or_else(|| StoreError::not_found(EntryKind::Language, name))?;
        Ok(self.languages.remove(index))
    }

    /// Append a category to a language, creating its list if absent
    pub fn add_category(&mut self, language: &str, category: &str) -> StoreResult<()> {
        if category.is_empty() {
            return Err(StoreError::EmptyInput("category name"));
        }
        let entry = self.get_mut(language)?;
        entry
            .categories
            .get_or_insert_with(Vec::new)
            .push(category.to_string());
        Ok(())
    }

    /// Remove the first occurrence of a category from a language's list.
    ///
    /// A language whose list was never created has nothing to remove and
    /// reports the category as not found.
    pub fn remove_category(&mut self, language: &str, category: &str) -> StoreResult<()> {
        let entry = self.get_mut(language)?;
        let categories = entry
            .categories
            .as_mut()
            .ok_or_else(|| StoreError::not_found(EntryKind::Category, category))?;
        let index = categories
            .iter()
            .position(|c| c == category)
            .ok_or_else(|| StoreError::not_found(EntryKind::Category, category))?;
        categories.remove(index);
        Ok(())
    }
}

impl Serialize for LanguageCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.languages.iter().map(|l| (&l.name, &l.categories)))
    }
}

impl<'de> Deserialize<'de> for LanguageCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let languages = raw
            .into_iter()
            .map(|(name, value)| {
                let categories = serde_json::from_value(value).map_err(D::Error::custom)?;
                Ok(Language { name, categories })
            })
            .collect::<Result<_, D::Error>>()?;
        Ok(Self { languages })
    }
}
