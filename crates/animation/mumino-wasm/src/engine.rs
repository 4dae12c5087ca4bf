//! [`TweenEngine`] over the global `gsap`.

use js_sys::{Object, Reflect};
use mumino_core::tween::{Measure, Position};
use mumino_core::{
    AnimationError, ElementId, IdAllocator, Property, TimelineCommand, TimelineId, TimelineSpec,
    TweenEngine, TweenMode, TweenStep, TweenValue,
};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom::SharedElements;

#[wasm_bindgen]
extern "C" {
    pub type Timeline;

    #[wasm_bindgen(js_namespace = gsap, js_name = set, catch)]
    fn gsap_set(targets: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = gsap, js_name = timeline, catch)]
    fn gsap_timeline(vars: &JsValue) -> Result<Timeline, JsValue>;

    #[wasm_bindgen(method, js_name = from, catch)]
    fn add_from(this: &Timeline, targets: &JsValue, vars: &JsValue, position: &JsValue)
        -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = to, catch)]
    fn add_to(this: &Timeline, targets: &JsValue, vars: &JsValue, position: &JsValue)
        -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method)]
    fn play(this: &Timeline) -> JsValue;

    #[wasm_bindgen(method)]
    fn restart(this: &Timeline) -> JsValue;

    #[wasm_bindgen(method)]
    fn pause(this: &Timeline) -> JsValue;

    #[wasm_bindgen(method)]
    fn progress(this: &Timeline, value: f64) -> JsValue;

    #[wasm_bindgen(method)]
    fn kill(this: &Timeline);
}

fn js_err(context: &str, err: JsValue) -> AnimationError {
    AnimationError::tween(format!("{context}: {err:?}"))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, AnimationError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| AnimationError::tween(format!("serialize error: {e}")))
}

fn property_key(prop: Property) -> Result<String, AnimationError> {
    match serde_json::to_value(prop) {
        Ok(serde_json::Value::String(key)) => Ok(key),
        _ => Err(AnimationError::tween(format!("unnamed property {prop:?}"))),
    }
}

pub struct GsapEngine {
    elements: SharedElements,
    ids: IdAllocator,
    /// Indexed by `TimelineId`; killed slots are `None`.
    timelines: Vec<Option<Timeline>>,
}

impl GsapEngine {
    pub fn new(elements: SharedElements) -> Self {
        Self {
            elements,
            ids: IdAllocator::new(),
            timelines: Vec::new(),
        }
    }

    /// Distance between a fragment's centre and its container's centre, as the
    /// magnetic presets measure it.
    fn center_distance(&self, owner: ElementId, target: ElementId) -> f64 {
        let table = self.elements.borrow();
        let center = table
            .get(owner)
            .and_then(|el| el.dyn_ref::<HtmlElement>())
            .map_or(0.0, |el| f64::from(el.offset_width()) / 2.0);
        let Some(el) = table.get(target) else {
            return 0.0;
        };
        let rect = el.get_bounding_client_rect();
        (center - (rect.left() + rect.width() / 2.0)).abs()
    }

    /// Engine vars for `step`, with deferred measurements resolved.
    fn vars(&self, owner: ElementId, step: &TweenStep) -> Result<JsValue, AnimationError> {
        let vars = to_js(&step.vars)?;
        for (prop, value) in &step.vars.props {
            let TweenValue::Measure {
                measure: Measure::CenterDistance,
            } = value
            else {
                continue;
            };
            let target = step.targets.first().copied().unwrap_or(owner);
            let distance = self.center_distance(owner, target);
            Reflect::set(
                &vars,
                &JsValue::from_str(&property_key(*prop)?),
                &JsValue::from_f64(distance),
            )
            .map_err(|e| js_err("measure", e))?;
        }
        Ok(vars)
    }

    fn timeline(&self, id: TimelineId) -> Option<&Timeline> {
        self.timelines.get(id.0 as usize)?.as_ref()
    }
}

impl TweenEngine for GsapEngine {
    fn set(
        &mut self,
        target: ElementId,
        props: &[(Property, TweenValue)],
    ) -> Result<(), AnimationError> {
        let vars = Object::new();
        for (prop, value) in props {
            Reflect::set(&vars, &JsValue::from_str(&property_key(*prop)?), &to_js(value)?)
                .map_err(|e| js_err("set", e))?;
        }
        let el = self
            .elements
            .borrow()
            .get(target)
            .cloned()
            .ok_or_else(|| AnimationError::tween(format!("unknown element {target}")))?;
        gsap_set(&el, &vars).map_err(|e| js_err("gsap.set", e))?;
        Ok(())
    }

    fn create_timeline(&mut self, spec: &TimelineSpec) -> Result<TimelineId, AnimationError> {
        let options = Object::new();
        Reflect::set(&options, &"paused".into(), &JsValue::TRUE)
            .map_err(|e| js_err("timeline options", e))?;
        let tl = gsap_timeline(&options).map_err(|e| js_err("gsap.timeline", e))?;

        for step in &spec.steps {
            let targets = self.elements.borrow().to_array(&step.targets);
            let vars = self.vars(spec.owner, step)?;
            let position = match step.position {
                Position::Append => JsValue::UNDEFINED,
                Position::At(t) => JsValue::from_f64(f64::from(t)),
            };
            let added = match step.mode {
                TweenMode::From => tl.add_from(&targets, &vars, &position),
                TweenMode::To => tl.add_to(&targets, &vars, &position),
            };
            if let Err(err) = added {
                tl.kill();
                return Err(js_err("timeline step", err));
            }
        }

        let id = self.ids.alloc_timeline();
        self.timelines.push(Some(tl));
        Ok(id)
    }

    fn control(&mut self, timeline: TimelineId, command: TimelineCommand) {
        let Some(tl) = self.timeline(timeline) else {
            log::debug!("control on unknown timeline {timeline:?}");
            return;
        };
        match command {
            TimelineCommand::Play => {
                tl.play();
            }
            TimelineCommand::Restart => {
                tl.restart();
            }
            TimelineCommand::Pause => {
                tl.pause();
            }
            TimelineCommand::Reset => {
                tl.progress(0.0);
                tl.pause();
            }
            TimelineCommand::Seek {
                progress,
                smoothing,
            } if smoothing > 0.0 => {
                let vars = Object::new();
                let props: [(&str, JsValue); 4] = [
                    ("progress", JsValue::from_f64(f64::from(progress))),
                    ("duration", JsValue::from_f64(f64::from(smoothing))),
                    ("ease", JsValue::from_str("power3.out")),
                    ("overwrite", JsValue::TRUE),
                ];
                for (key, value) in props {
                    if Reflect::set(&vars, &JsValue::from_str(key), &value).is_err() {
                        return;
                    }
                }
                gsap_to(tl, &vars);
            }
            TimelineCommand::Seek { progress, .. } => {
                tl.progress(f64::from(progress));
            }
        }
    }

    fn kill(&mut self, timeline: TimelineId) {
        if let Some(slot) = self.timelines.get_mut(timeline.0 as usize) {
            if let Some(tl) = slot.take() {
                tl.kill();
            }
        }
    }
}
