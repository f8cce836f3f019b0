// SPDX-License-Identifier: MPL-2.0
//! Static content registry: the ordered display lists the sections render.
//!
//! The registry is pure data. It is loaded once at startup — either the
//! built-in defaults or a TOML override — validated, and never mutated
//! afterwards. Sections iterate the lists in order and perform no filtering,
//! sorting, or derived computation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

mod defaults;

/// A single static entry rendered as one visual card or icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    /// Unique within its list.
    pub name: String,
    /// Asset path relative to the configured assets directory.
    pub image: String,
    /// Rendered width in pixels.
    pub width: u32,
    /// Rendered height in pixels.
    pub height: u32,
    /// Must equal the item's position in its list.
    pub order: usize,
    /// External link opened when the item is activated.
    #[serde(default)]
    pub link: Option<String>,
}

/// One titled row of skill icons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub items: Vec<DisplayItem>,
}

/// The full registry consumed by the section renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<DisplayItem>,
    pub socials: Vec<DisplayItem>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// The registry the application ships with.
    pub fn builtin() -> Self {
        Self {
            skills: defaults::skills(),
            projects: defaults::projects(),
            socials: defaults::socials(),
        }
    }

    /// Parses and validates a registry from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let registry: Registry = toml::from_str(contents)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Loads and validates a registry override file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Checks the registry invariants: names unique within each list,
    /// order indexes matching list positions, non-zero dimensions.
    pub fn validate(&self) -> Result<()> {
        for category in &self.skills {
            validate_list(&format!("skills/{}", category.title), &category.items)?;
        }
        validate_list("projects", &self.projects)?;
        validate_list("socials", &self.socials)?;
        Ok(())
    }
}

fn validate_list(list_name: &str, items: &[DisplayItem]) -> Result<()> {
    let mut seen = HashSet::new();
    for (position, item) in items.iter().enumerate() {
        if !seen.insert(item.name.as_str()) {
            return Err(Error::Content(format!(
                "duplicate item '{}' in list '{}'",
                item.name, list_name
            )));
        }
        if item.order != position {
            return Err(Error::Content(format!(
                "item '{}' in list '{}' has order {} but sits at position {}",
                item.name, list_name, item.order, position
            )));
        }
        if item.width == 0 || item.height == 0 {
            return Err(Error::Content(format!(
                "item '{}' in list '{}' has zero dimensions",
                item.name, list_name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(order: usize, name: &str) -> DisplayItem {
        DisplayItem {
            name: name.to_string(),
            image: format!("skills/{}.png", name.to_lowercase()),
            width: 40,
            height: 40,
            order,
            link: None,
        }
    }

    #[test]
    fn builtin_registry_is_valid() {
        let registry = Registry::builtin();
        registry.validate().expect("builtin registry must validate");
        assert_eq!(registry.skills.len(), 3);
        assert!(!registry.projects.is_empty());
    }

    #[test]
    fn builtin_projects_all_carry_links() {
        let registry = Registry::builtin();
        assert!(registry.projects.iter().all(|p| p.link.is_some()));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let items = vec![sample_item(0, "React"), sample_item(1, "React")];
        let err = validate_list("skills/test", &items).unwrap_err();
        assert!(matches!(err, Error::Content(message) if message.contains("duplicate")));
    }

    #[test]
    fn order_must_match_position() {
        let items = vec![sample_item(0, "React"), sample_item(5, "Go")];
        let err = validate_list("skills/test", &items).unwrap_err();
        assert!(matches!(err, Error::Content(message) if message.contains("order")));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let mut item = sample_item(0, "React");
        item.width = 0;
        let err = validate_list("skills/test", &[item]).unwrap_err();
        assert!(matches!(err, Error::Content(message) if message.contains("dimensions")));
    }

    #[test]
    fn list_order_is_preserved() {
        let registry = Registry::builtin();
        let first_row = &registry.skills[0].items;
        let names: Vec<&str> = first_row.iter().map(|i| i.name.as_str()).collect();
        let mut sorted_by_order: Vec<&DisplayItem> = first_row.iter().collect();
        sorted_by_order.sort_by_key(|i| i.order);
        let ordered_names: Vec<&str> = sorted_by_order.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ordered_names);
    }

    #[test]
    fn toml_round_trip_preserves_registry() {
        let registry = Registry::builtin();
        let text = toml::to_string(&registry).expect("serialization failed");
        let parsed = Registry::from_toml_str(&text).expect("parse failed");
        assert_eq!(parsed, registry);
    }

    #[test]
    fn invalid_toml_override_is_rejected() {
        let text = r#"
            projects = []
            socials = []

            [[skills]]
            title = "Core"

            [[skills.items]]
            name = "React"
            image = "skills/react.png"
            width = 40
            height = 40
            order = 3
        "#;
        assert!(Registry::from_toml_str(text).is_err());
    }
}
