//! Error taxonomy for binding animations to elements.

use thiserror::Error;

use crate::ids::ElementId;

/// Errors raised while segmenting, building or attaching one element's animation.
///
/// None of these escape the dispatch runner: they are caught per element,
/// logged and recorded in the dispatch report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    /// Unknown trigger profile, unmapped preset name or invalid settings.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The splitter could not segment the element.
    #[error("segmentation failed for element {element}: {reason}")]
    Segmentation { element: ElementId, reason: String },
    /// A tween payload was rejected, either by validation or by the engine.
    #[error("tween construction failed: {0}")]
    TweenConstruction(String),
    /// The viewport observer refused a registration.
    #[error("observer registration failed: {0}")]
    Observer(String),
}

impl AnimationError {
    pub fn segmentation(element: ElementId, reason: impl Into<String>) -> Self {
        AnimationError::Segmentation {
            element,
            reason: reason.into(),
        }
    }

    pub fn tween(reason: impl Into<String>) -> Self {
        AnimationError::TweenConstruction(reason.into())
    }
}

/// Errors produced while parsing textual configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid trigger profile '{0}'")]
    Profile(String),
    #[error("invalid scroll position '{0}'")]
    ScrollPosition(String),
    #[error("invalid split type '{0}'; valid options are: lines, words, chars")]
    Granularity(String),
    #[error("unknown preset '{0}'")]
    Preset(String),
}

impl From<ParseError> for AnimationError {
    fn from(err: ParseError) -> Self {
        AnimationError::Configuration(err.to_string())
    }
}
