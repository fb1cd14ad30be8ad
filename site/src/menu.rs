use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// menu content tree
//
// the navigation hierarchy is nav entries -> categories -> items, and is at most two levels
// deep below the top-level entries.  everything here is immutable once a MenuTree has been
// validated, and the only way to get a MenuTree is through validation
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MenuCategory {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Vec<MenuItem>,
}

// a top-level navigation entry
//
// the presence of the category list is the sole discriminator between a plain link and an
// expandable entry, so "categories = []" is rejected at validation rather than silently
// treated as a link
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct NavEntry {
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<MenuCategory>>,
}

impl NavEntry {
    pub fn link(name: impl Into<String>, path: impl Into<String>) -> Self {
        NavEntry {
            name: name.into(),
            path: path.into(),
            description: None,
            categories: None,
        }
    }

    pub fn expandable(
        name: impl Into<String>,
        path: impl Into<String>,
        categories: Vec<MenuCategory>,
    ) -> Self {
        NavEntry {
            name: name.into(),
            path: path.into(),
            description: None,
            categories: Some(categories),
        }
    }

    pub fn is_expandable(&self) -> bool {
        self.categories.is_some()
    }

    /// Categories of an expandable entry, or an empty slice for a plain link.
    pub fn categories(&self) -> &[MenuCategory] {
        self.categories.as_deref().unwrap_or(&[])
    }

    pub fn find_category(&self, name: &str) -> Option<&MenuCategory> {
        self.categories().iter().find(|c| c.name == name)
    }

    pub fn category_index(&self, name: &str) -> Option<usize> {
        self.categories().iter().position(|c| c.name == name)
    }
}

impl From<&MenuItem> for NavEntry {
    fn from(item: &MenuItem) -> Self {
        NavEntry {
            name: item.name.clone(),
            path: item.path.clone(),
            description: item.description.clone(),
            categories: None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    #[error("navigation menu has no entries")]
    NoEntries,

    #[error("duplicate navigation entry {0:?}")]
    DuplicateEntry(String),

    #[error("expandable entry {entry:?} has an empty category list")]
    EmptyCategories { entry: String },

    #[error("category {category:?} under {entry:?} has no items")]
    EmptyItems { entry: String, category: String },

    #[error("duplicate category {category:?} under {entry:?}")]
    DuplicateCategory { entry: String, category: String },

    #[error("{name:?} has non-absolute path {path:?}")]
    RelativePath { name: String, path: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuTree {
    entries: Vec<NavEntry>,
}

impl MenuTree {
    pub fn new(entries: Vec<NavEntry>) -> Result<Self, MenuError> {
        if entries.is_empty() {
            return Err(MenuError::NoEntries);
        }

        let mut names = HashSet::new();

        for entry in entries.iter() {
            if !names.insert(entry.name.as_str()) {
                return Err(MenuError::DuplicateEntry(entry.name.clone()));
            }

            check_path(&entry.name, &entry.path)?;

            let Some(categories) = &entry.categories else {
                continue;
            };

            if categories.is_empty() {
                return Err(MenuError::EmptyCategories {
                    entry: entry.name.clone(),
                });
            }

            let mut category_names = HashSet::new();

            for category in categories.iter() {
                if !category_names.insert(category.name.as_str()) {
                    return Err(MenuError::DuplicateCategory {
                        entry: entry.name.clone(),
                        category: category.name.clone(),
                    });
                }

                if category.items.is_empty() {
                    return Err(MenuError::EmptyItems {
                        entry: entry.name.clone(),
                        category: category.name.clone(),
                    });
                }

                for item in category.items.iter() {
                    check_path(&item.name, &item.path)?;
                }
            }
        }

        Ok(MenuTree { entries })
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn find_entry(&self, name: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// The entry whose categories populate the desktop mega menu.
    pub fn mega_entry(&self) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.is_expandable())
    }

    // the same product may be listed under several categories, so the first match wins
    pub fn find_item_by_path(&self, path: &str) -> Option<(&MenuCategory, &MenuItem)> {
        self.entries
            .iter()
            .flat_map(|e| e.categories().iter())
            .find_map(|c| c.items.iter().find(|i| i.path == path).map(|i| (c, i)))
    }
}

fn check_path(name: &str, path: &str) -> Result<(), MenuError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(MenuError::RelativePath {
            name: name.to_owned(),
            path: path.to_owned(),
        })
    }
}
