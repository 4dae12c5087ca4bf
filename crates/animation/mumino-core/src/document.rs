//! Read-only view of the host document.

use crate::ids::ElementId;

/// Adapters (browser DOM, in-memory pages) implement this and hand it to the
/// animator. The core only reads: it never mutates the document directly.
pub trait Document {
    /// All elements matching an attribute selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<ElementId>;

    /// Raw attribute value, `None` when the attribute is absent.
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Whether the element is still attached to the document.
    fn contains(&self, element: ElementId) -> bool;

    /// Short human-readable description used in diagnostics.
    fn describe(&self, element: ElementId) -> String {
        element.to_string()
    }
}
