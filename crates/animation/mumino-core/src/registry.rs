//! Preset and selector registries.
//!
//! Presets are looked up by name; the selector table maps the same names to
//! the attribute selectors dispatch queries, grouped by category.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;
use crate::preset::{Animation, PresetId};

/// Named animations available to dispatch.
#[derive(Default)]
pub struct PresetRegistry {
    presets: IndexMap<String, Box<dyn Animation>>,
}

impl fmt::Debug for PresetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresetRegistry")
            .field("names", &self.presets.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl PresetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in line, word and letter presets.
    pub fn builtin() -> Self {
        let mut reg = Self::new();
        for id in PresetId::ALL {
            reg.register(id.as_str(), Box::new(id.preset()));
        }
        reg
    }

    /// Register `animation` under `name`, returning any animation it replaces.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        animation: Box<dyn Animation>,
    ) -> Option<Box<dyn Animation>> {
        self.presets.insert(name.into(), animation)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Animation> {
        self.presets.get(name).map(|a| a.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Selector groups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Animations that split text.
    Text,
    Reveal,
    /// Groups and lists animated in sequence.
    Stagger,
    /// Pointer-driven; never dispatched on scroll.
    Hover,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Text,
        Category::Reveal,
        Category::Stagger,
        Category::Hover,
    ];

    /// Whether dispatch binds this category and reports its unmatched selectors.
    pub fn is_scroll_driven(self) -> bool {
        !matches!(self, Category::Hover)
    }
}

/// Ordered mapping from animation name to selector, per category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectorTable {
    categories: IndexMap<Category, IndexMap<String, String>>,
}

impl SelectorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text entries for every preset in `presets`, using the configured marker attribute.
    pub fn from_registry(config: &Config, presets: &PresetRegistry) -> Self {
        let mut table = Self::new();
        for name in presets.names() {
            table.insert(Category::Text, name, config.selector_for(name));
        }
        table
    }

    pub fn insert(
        &mut self,
        category: Category,
        name: impl Into<String>,
        selector: impl Into<String>,
    ) -> Option<String> {
        self.categories
            .entry(category)
            .or_default()
            .insert(name.into(), selector.into())
    }

    pub fn remove(&mut self, category: Category, name: &str) -> Option<String> {
        self.categories
            .get_mut(&category)
            .and_then(|entries| entries.shift_remove(name))
    }

    pub fn get(&self, category: Category, name: &str) -> Option<&str> {
        self.categories
            .get(&category)
            .and_then(|entries| entries.get(name))
            .map(String::as_str)
    }

    /// `(category, name, selector)` in category order, then insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &str, &str)> {
        Category::ALL.into_iter().flat_map(move |category| {
            self.categories
                .get(&category)
                .into_iter()
                .flat_map(move |entries| {
                    entries
                        .iter()
                        .map(move |(name, sel)| (category, name.as_str(), sel.as_str()))
                })
        })
    }

    /// True when `selector` is registered under a scroll-driven category.
    pub fn is_configured(&self, selector: &str) -> bool {
        self.entries()
            .any(|(category, _, sel)| category.is_scroll_driven() && sel == selector)
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::Preset;
    use crate::trigger::TriggerProfile;

    #[test]
    fn builtin_registry_has_catalog_in_order() {
        let reg = PresetRegistry::builtin();
        assert_eq!(reg.len(), 60);
        assert_eq!(reg.names().next(), Some("line01"));
        assert_eq!(reg.names().last(), Some("letter20"));
        assert_eq!(reg.get("word12").map(|a| a.name()), Some("word12"));
        assert!(reg.get("hero").is_none());
    }

    #[test]
    fn custom_names_can_reuse_presets() {
        let mut reg = PresetRegistry::new();
        let scrubbed: Preset = PresetId::Line06.preset().with_profile(TriggerProfile::Scrub);
        assert!(reg.register("hero", Box::new(scrubbed)).is_none());
        let hero = reg.get("hero").unwrap();
        assert_eq!(hero.profile(), TriggerProfile::Scrub);
        assert_eq!(hero.name(), "line06");
    }

    #[test]
    fn selector_table_tracks_configured_categories() {
        let cfg = Config::default();
        let mut reg = PresetRegistry::new();
        reg.register("line01", Box::new(PresetId::Line01.preset()));
        let mut table = SelectorTable::from_registry(&cfg, &reg);
        table.insert(Category::Hover, "lift", "[data-ani=\"hover-lift\"]");
        table.insert(Category::Reveal, "fadeUp", "[data-ani=\"reveal-up\"]");

        assert_eq!(table.get(Category::Text, "line01"), Some("[data-ani=\"line01\"]"));
        assert!(table.is_configured("[data-ani=\"line01\"]"));
        assert!(table.is_configured("[data-ani=\"reveal-up\"]"));
        assert!(!table.is_configured("[data-ani=\"hover-lift\"]"));
        assert!(!table.is_configured(".ad-hoc"));

        let order: Vec<_> = table.entries().map(|(c, n, _)| (c, n)).collect();
        assert_eq!(
            order,
            vec![
                (Category::Text, "line01"),
                (Category::Reveal, "fadeUp"),
                (Category::Hover, "lift"),
            ]
        );
        assert_eq!(table.remove(Category::Hover, "lift").as_deref(), Some("[data-ani=\"hover-lift\"]"));
        assert_eq!(table.len(), 2);
    }
}
