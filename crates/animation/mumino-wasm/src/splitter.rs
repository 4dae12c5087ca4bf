//! [`TextSplitter`] over the global `SplitType`.

use hashbrown::HashMap;
use js_sys::{Array, Object, Reflect};
use mumino_core::{AnimationError, ElementId, Fragments, SplitRequest, TextSplitter};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::SharedElements;

#[wasm_bindgen]
extern "C" {
    pub type SplitType;

    #[wasm_bindgen(constructor, catch)]
    fn new(target: &JsValue, options: &JsValue) -> Result<SplitType, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn lines(this: &SplitType) -> JsValue;

    #[wasm_bindgen(method, getter)]
    fn words(this: &SplitType) -> JsValue;

    #[wasm_bindgen(method, getter)]
    fn chars(this: &SplitType) -> JsValue;

    #[wasm_bindgen(method)]
    fn revert(this: &SplitType);
}

pub struct SplitTypeSplitter {
    elements: SharedElements,
    instances: HashMap<ElementId, SplitType>,
}

impl SplitTypeSplitter {
    pub fn new(elements: SharedElements) -> Self {
        Self {
            elements,
            instances: HashMap::new(),
        }
    }

    fn intern(&self, fragments: JsValue) -> Vec<ElementId> {
        match fragments.dyn_into::<Array>() {
            Ok(items) => self.elements.borrow_mut().intern_array(&items),
            Err(_) => Vec::new(),
        }
    }

    /// Character fragments grouped by the word that contains them.
    fn chars_by_word(&self, words: &[ElementId]) -> Vec<Vec<ElementId>> {
        let word_nodes: Vec<Element> = {
            let table = self.elements.borrow();
            words.iter().filter_map(|w| table.get(*w).cloned()).collect()
        };
        word_nodes
            .iter()
            .map(|word| match word.query_selector_all(".char") {
                Ok(list) => {
                    let mut table = self.elements.borrow_mut();
                    (0..list.length())
                        .filter_map(|i| list.item(i))
                        .filter_map(|node| node.dyn_into::<Element>().ok())
                        .map(|el| table.intern(&el))
                        .collect()
                }
                Err(_) => Vec::new(),
            })
            .collect()
    }
}

impl TextSplitter for SplitTypeSplitter {
    fn split(
        &mut self,
        element: ElementId,
        request: &SplitRequest,
    ) -> Result<Fragments, AnimationError> {
        self.revert(element);
        let target = self
            .elements
            .borrow()
            .get(element)
            .cloned()
            .ok_or_else(|| AnimationError::segmentation(element, "element is not interned"))?;

        let options = Object::new();
        let types = JsValue::from_str(&request.types_string());
        Reflect::set(&options, &"types".into(), &types)
            .and_then(|_| Reflect::set(&options, &"absolute".into(), &JsValue::FALSE))
            .map_err(|e| AnimationError::segmentation(element, format!("{e:?}")))?;

        let split = SplitType::new(&target, &options)
            .map_err(|e| AnimationError::segmentation(element, format!("SplitType: {e:?}")))?;

        let mut fragments = Fragments {
            lines: self.intern(split.lines()),
            words: self.intern(split.words()),
            chars: self.intern(split.chars()),
            chars_by_word: Vec::new(),
        };
        if !fragments.chars.is_empty() && !fragments.words.is_empty() {
            fragments.chars_by_word = self.chars_by_word(&fragments.words);
        }
        self.instances.insert(element, split);
        Ok(fragments)
    }

    fn revert(&mut self, element: ElementId) {
        if let Some(split) = self.instances.remove(&element) {
            split.revert();
        }
    }
}
