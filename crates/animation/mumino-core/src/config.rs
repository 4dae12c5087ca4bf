//! Runtime configuration for mumino-core.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::diagnostics::DiagnosticsCfg;

/// What dispatch does with an element that already carries a binding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RebindPolicy {
    /// Leave the existing binding alone and report the element as skipped.
    #[default]
    Skip,
    /// Release the existing binding (observers and timeline) and bind again.
    Replace,
}

/// Configuration for attribute names, trigger thresholds and dispatch policy.
/// Every field has a default, so hosts may pass a partial object.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Marker attribute naming the preset (`data-ani="line01"`).
    pub animation_attribute: String,
    /// Per-element delay attribute, integer milliseconds.
    pub delay_attribute: String,
    /// Viewport mark the element's top must cross to start playing.
    pub start_position: String,
    /// Ask the observer library to draw debug markers.
    pub markers: bool,
    pub rebind: RebindPolicy,
    /// Per-preset trigger profile names keyed by preset name. Names are
    /// resolved when the animator is built; unknown ones are logged and dropped.
    pub profile_overrides: IndexMap<String, String>,
    pub diagnostics: DiagnosticsCfg,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation_attribute: "data-ani".to_string(),
            delay_attribute: "data-ani-delay".to_string(),
            start_position: "90%".to_string(),
            markers: false,
            rebind: RebindPolicy::default(),
            profile_overrides: IndexMap::new(),
            diagnostics: DiagnosticsCfg::default(),
        }
    }
}

impl Config {
    /// Attribute selector matching elements marked with `name`.
    pub fn selector_for(&self, name: &str) -> String {
        format!("[{}=\"{}\"]", self.animation_attribute, name)
    }
}
