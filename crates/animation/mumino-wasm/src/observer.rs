//! [`ScrollObserver`] over the global `ScrollTrigger`.
//!
//! Callbacks only enqueue `(ObserverId, ScrollEvent)` pairs; the runtime drains
//! the queue once it is not already borrowed (see `crate::pump`).

use std::cell::RefCell;
use std::collections::VecDeque;

use hashbrown::HashMap;
use js_sys::Reflect;
use mumino_core::{
    AnimationError, IdAllocator, ObserverId, ObserverSpec, ScrollEvent, ScrollObserver,
};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use crate::dom::SharedElements;

#[wasm_bindgen]
extern "C" {
    pub type Trigger;

    #[wasm_bindgen(js_namespace = ScrollTrigger, js_name = create, catch)]
    fn scroll_trigger_create(vars: &JsValue) -> Result<Trigger, JsValue>;

    #[wasm_bindgen(method)]
    fn kill(this: &Trigger);
}

thread_local! {
    static EVENTS: RefCell<VecDeque<(ObserverId, ScrollEvent)>> = RefCell::new(VecDeque::new());
}

fn enqueue(id: ObserverId, event: ScrollEvent) {
    EVENTS.with(|q| q.borrow_mut().push_back((id, event)));
}

/// Pop the oldest queued event.
pub fn next_event() -> Option<(ObserverId, ScrollEvent)> {
    EVENTS.with(|q| q.borrow_mut().pop_front())
}

type Callback = Closure<dyn FnMut(JsValue)>;

struct Registration {
    trigger: Trigger,
    _callbacks: Vec<Callback>,
}

pub struct ScrollTriggerObserver {
    elements: SharedElements,
    ids: IdAllocator,
    live: HashMap<ObserverId, Registration>,
    /// Killed registrations whose closures may still be on the JS stack.
    retired: Vec<Registration>,
}

const EDGE_CALLBACKS: [(&str, ScrollEvent); 4] = [
    ("onEnter", ScrollEvent::Enter),
    ("onLeave", ScrollEvent::Leave),
    ("onEnterBack", ScrollEvent::EnterBack),
    ("onLeaveBack", ScrollEvent::LeaveBack),
];

impl ScrollTriggerObserver {
    pub fn new(elements: SharedElements) -> Self {
        Self {
            elements,
            ids: IdAllocator::new(),
            live: HashMap::new(),
            retired: Vec::new(),
        }
    }

    /// Drop closures of killed triggers. Call only from outside observer callbacks.
    pub fn collect_retired(&mut self) {
        self.retired.clear();
    }

    fn vars(&self, spec: &ObserverSpec) -> Result<JsValue, AnimationError> {
        let vars = spec
            .serialize(&swb::Serializer::json_compatible())
            .map_err(|e| AnimationError::Observer(format!("serialize error: {e}")))?;
        let trigger = self
            .elements
            .borrow()
            .get(spec.trigger)
            .cloned()
            .ok_or_else(|| AnimationError::Observer(format!("unknown trigger {}", spec.trigger)))?;
        set(&vars, "trigger", &trigger)?;
        Reflect::delete_property::<JsValue>(vars.unchecked_ref(), &"timeline".into())
            .map_err(|e| AnimationError::Observer(format!("{e:?}")))?;
        Ok(vars)
    }
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), AnimationError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| AnimationError::Observer(format!("cannot set {key}: {e:?}")))
}

impl ScrollObserver for ScrollTriggerObserver {
    fn register(&mut self, spec: &ObserverSpec) -> Result<ObserverId, AnimationError> {
        let id = self.ids.alloc_observer();
        let vars = self.vars(spec)?;
        let mut callbacks = Vec::new();

        for (key, event) in EDGE_CALLBACKS {
            if spec.respond(event).is_none() {
                continue;
            }
            let cb: Callback = Closure::new(move |_: JsValue| {
                enqueue(id, event);
                crate::pump();
            });
            set(&vars, key, cb.as_ref())?;
            callbacks.push(cb);
        }
        if spec.scrub.is_some() {
            let cb: Callback = Closure::new(move |this: JsValue| {
                let progress = Reflect::get(&this, &"progress".into())
                    .ok()
                    .and_then(|p| p.as_f64())
                    .unwrap_or(0.0);
                enqueue(id, ScrollEvent::Progress(progress as f32));
                crate::pump();
            });
            set(&vars, "onUpdate", cb.as_ref())?;
            callbacks.push(cb);
        }

        let trigger = scroll_trigger_create(&vars)
            .map_err(|e| AnimationError::Observer(format!("ScrollTrigger.create: {e:?}")))?;
        self.live.insert(
            id,
            Registration {
                trigger,
                _callbacks: callbacks,
            },
        );
        Ok(id)
    }

    fn unregister(&mut self, id: ObserverId) {
        if let Some(reg) = self.live.remove(&id) {
            reg.trigger.kill();
            self.retired.push(reg);
        }
    }
}
