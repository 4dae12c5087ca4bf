//! Developer-facing dispatch messages, logged and optionally kept in the report.

use log::Level;
use serde::{Deserialize, Serialize};

use crate::ids::ElementId;

/// Diagnostics configuration.
/// When enabled, every message the runner logs is also recorded in the dispatch report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsCfg {
    pub enabled: bool,
}

impl Default for DiagnosticsCfg {
    fn default() -> Self {
        DiagnosticsCfg { enabled: true }
    }
}

/// One developer-facing message emitted during dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub element: Option<ElementId>,
}

/// Log `message` at `level` and record it when diagnostics are enabled.
pub(crate) fn emit(
    cfg: &DiagnosticsCfg,
    sink: &mut Vec<Diagnostic>,
    level: Level,
    element: Option<ElementId>,
    message: String,
) {
    log::log!(level, "{message}");
    if cfg.enabled {
        sink.push(Diagnostic {
            level,
            message,
            element,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_diagnostics_only_log() {
        let mut sink = Vec::new();
        let cfg = DiagnosticsCfg { enabled: false };
        emit(&cfg, &mut sink, Level::Info, None, "quiet".into());
        assert!(sink.is_empty());

        emit(
            &DiagnosticsCfg::default(),
            &mut sink,
            Level::Warn,
            Some(ElementId(3)),
            "loud".into(),
        );
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].level, Level::Warn);
        assert_eq!(sink[0].element, Some(ElementId(3)));
    }
}
