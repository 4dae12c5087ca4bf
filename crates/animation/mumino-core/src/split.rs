//! Text segmentation boundary.
//!
//! The splitter library turns an element's text into line, word and character
//! fragments. The core validates what it asks for and consumes the fragment
//! handles the adapter hands back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AnimationError, ParseError};
use crate::ids::ElementId;

/// Fragment granularity produced by the splitter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Lines,
    Words,
    Chars,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Granularity::Lines, Granularity::Words, Granularity::Chars];

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Lines => "lines",
            Granularity::Words => "words",
            Granularity::Chars => "chars",
        }
    }

    /// Class the splitter puts on generated fragments of this kind.
    pub fn fragment_class(self) -> &'static str {
        match self {
            Granularity::Lines => "line",
            Granularity::Words => "word",
            Granularity::Chars => "char",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" => Ok(Granularity::Lines),
            "words" => Ok(Granularity::Words),
            "chars" => Ok(Granularity::Chars),
            _ => Err(ParseError::Granularity(s.to_string())),
        }
    }
}

/// A validated, non-empty, duplicate-free set of granularities in request order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitRequest {
    types: Vec<Granularity>,
}

impl SplitRequest {
    pub fn new(types: &[Granularity]) -> Result<Self, ParseError> {
        if types.is_empty() {
            return Err(ParseError::Granularity(String::new()));
        }
        let mut out = Vec::with_capacity(types.len());
        for t in types {
            if !out.contains(t) {
                out.push(*t);
            }
        }
        Ok(Self { types: out })
    }

    /// Validate split type names, case-insensitively.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, ParseError> {
        let types = names
            .iter()
            .map(|n| n.as_ref().parse())
            .collect::<Result<Vec<Granularity>, _>>()?;
        Self::new(&types)
    }

    pub fn types(&self) -> &[Granularity] {
        &self.types
    }

    pub fn contains(&self, g: Granularity) -> bool {
        self.types.contains(&g)
    }

    /// Comma-separated form the splitter library accepts (`"lines, words"`).
    pub fn types_string(&self) -> String {
        self.types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Fragment handles produced by one split.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragments {
    pub lines: Vec<ElementId>,
    pub words: Vec<ElementId>,
    pub chars: Vec<ElementId>,
    /// Characters grouped by their parent word, parallel to `words`.
    /// Empty when characters were not requested.
    pub chars_by_word: Vec<Vec<ElementId>>,
}

impl Fragments {
    pub fn of(&self, g: Granularity) -> &[ElementId] {
        match g {
            Granularity::Lines => &self.lines,
            Granularity::Words => &self.words,
            Granularity::Chars => &self.chars,
        }
    }
}

/// External text splitter.
///
/// Implementations must be idempotent per element: splitting an element that
/// was already split reverts the previous fragments first.
pub trait TextSplitter {
    fn split(
        &mut self,
        element: ElementId,
        request: &SplitRequest,
    ) -> Result<Fragments, AnimationError>;

    /// Restore the element's original markup. Default: nothing to undo.
    fn revert(&mut self, _element: ElementId) {}
}
