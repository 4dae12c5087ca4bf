//! Element handles and the browser-backed [`Document`].

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Map;
use mumino_core::{Document, ElementId, IdAllocator};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// Identity map between DOM elements and the ids the core works with.
/// Containers and generated fragments share one id space.
pub struct ElementTable {
    ids: IdAllocator,
    nodes: Vec<Element>,
    index: Map,
}

pub type SharedElements = Rc<RefCell<ElementTable>>;

impl ElementTable {
    pub fn shared() -> SharedElements {
        Rc::new(RefCell::new(Self {
            ids: IdAllocator::new(),
            nodes: Vec::new(),
            index: Map::new(),
        }))
    }

    /// Id for `element`, allocating one on first sight.
    pub fn intern(&mut self, element: &Element) -> ElementId {
        let key: &JsValue = element.as_ref();
        if let Some(id) = self.index.get(key).as_f64() {
            return ElementId(id as u32);
        }
        let id = self.ids.alloc_element();
        self.nodes.push(element.clone());
        self.index.set(key, &JsValue::from(id.0));
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id.0 as usize)
    }

    /// Interns every element of a JS array, skipping non-elements.
    pub fn intern_array(&mut self, items: &js_sys::Array) -> Vec<ElementId> {
        items
            .iter()
            .filter_map(|v| v.dyn_into::<Element>().ok())
            .map(|el| self.intern(&el))
            .collect()
    }

    pub fn to_array(&self, ids: &[ElementId]) -> js_sys::Array {
        ids.iter()
            .filter_map(|id| self.get(*id))
            .map(|el| JsValue::from(el.clone()))
            .collect()
    }
}

pub struct DomDocument {
    document: web_sys::Document,
    elements: SharedElements,
}

impl DomDocument {
    pub fn new(document: web_sys::Document, elements: SharedElements) -> Self {
        Self { document, elements }
    }
}

impl Document for DomDocument {
    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("invalid selector {selector}: {err:?}");
                return Vec::new();
            }
        };
        let mut table = self.elements.borrow_mut();
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|el| table.intern(&el))
            .collect()
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.elements.borrow().get(element)?.get_attribute(name)
    }

    fn contains(&self, element: ElementId) -> bool {
        match self.elements.borrow().get(element) {
            Some(el) => {
                let node: &web_sys::Node = el.as_ref();
                self.document.contains(Some(node))
            }
            None => false,
        }
    }

    fn describe(&self, element: ElementId) -> String {
        let table = self.elements.borrow();
        let Some(el) = table.get(element) else {
            return element.to_string();
        };
        let mut out = el.tag_name().to_ascii_lowercase();
        let id = el.id();
        if !id.is_empty() {
            out.push('#');
            out.push_str(&id);
        }
        let class = el.class_name();
        if let Some(first) = class.split_whitespace().next() {
            out.push('.');
            out.push_str(first);
        }
        format!("<{out}> {element}")
    }
}
