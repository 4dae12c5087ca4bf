//! Mumino for the browser.
//!
//! Runs the core animator over the page's `gsap`, `ScrollTrigger` and
//! `SplitType` globals. One runtime lives per page (thread-local); observer
//! callbacks queue their events and [`pump`] feeds them to the animator.

use std::cell::RefCell;

use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use mumino_core::{
    Animator, ArrowState, Config, DispatchReport, PresetId, Services, ARROW_DISABLED_CLASS,
};

mod dom;
mod engine;
mod logger;
mod observer;
mod splitter;

pub use dom::{DomDocument, ElementTable};
pub use engine::GsapEngine;
pub use observer::ScrollTriggerObserver;
pub use splitter::SplitTypeSplitter;

type Runtime = Animator<DomDocument, SplitTypeSplitter, GsapEngine, ScrollTriggerObserver>;

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Feed queued observer events to the runtime. A no-op while the runtime is
/// already borrowed; the outer call drains the queue when it finishes.
pub(crate) fn pump() {
    RUNTIME.with(|cell| {
        let Ok(mut guard) = cell.try_borrow_mut() else {
            return;
        };
        let Some(runtime) = guard.as_mut() else {
            return;
        };
        while let Some((id, event)) = observer::next_event() {
            runtime.notify(id, event);
        }
    });
}

fn build_runtime(config: Config) -> Result<Runtime, JsError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsError::new("no document available"))?;
    let elements = ElementTable::shared();
    let services = Services {
        document: DomDocument::new(document, elements.clone()),
        splitter: SplitTypeSplitter::new(elements.clone()),
        engine: GsapEngine::new(elements.clone()),
        observer: ScrollTriggerObserver::new(elements),
    };
    Animator::new(config, services).map_err(|e| JsError::new(&e.to_string()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FailureSummary {
    element: Option<u32>,
    preset: String,
    stage: String,
    error: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportSummary {
    animated: Vec<u32>,
    skipped: Vec<u32>,
    failures: Vec<FailureSummary>,
    diagnostics: Vec<String>,
}

impl From<&DispatchReport> for ReportSummary {
    fn from(report: &DispatchReport) -> Self {
        Self {
            animated: report.animated.iter().map(|e| e.0).collect(),
            skipped: report.skipped.iter().map(|e| e.0).collect(),
            failures: report
                .failures
                .iter()
                .map(|f| FailureSummary {
                    element: f.element.map(|e| e.0),
                    preset: f.preset.clone(),
                    stage: format!("{:?}", f.stage),
                    error: f.error.to_string(),
                })
                .collect(),
            diagnostics: report
                .diagnostics
                .iter()
                .map(|d| format!("{}: {}", d.level, d.message))
                .collect(),
        }
    }
}

fn summarize(report: &DispatchReport) -> Result<JsValue, JsError> {
    ReportSummary::from(report)
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("report serialize error: {e}")))
}

fn with_runtime<R>(f: impl FnOnce(&mut Runtime) -> R) -> Result<R, JsError> {
    let out = RUNTIME.with(|cell| -> Result<R, JsError> {
        let mut guard = cell.borrow_mut();
        let runtime = guard
            .as_mut()
            .ok_or_else(|| JsError::new("mumino is not initialized"))?;
        let out = f(runtime);
        runtime.services_mut().observer.collect_retired();
        Ok(out)
    });
    pump();
    out
}

/// Build the runtime (first call) and bind every marked element.
/// Pass a config object or undefined/null for defaults. Returns a report
/// `{ animated, skipped, failures, diagnostics }`.
#[wasm_bindgen]
pub fn initialize(config: JsValue) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let cfg: Option<Config> = if jsvalue_is_undefined_or_null(&config) {
        None
    } else {
        Some(swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?)
    };

    RUNTIME.with(|cell| -> Result<(), JsError> {
        let mut guard = cell.borrow_mut();
        if guard.is_none() {
            *guard = Some(build_runtime(cfg.unwrap_or_default())?);
        } else if cfg.is_some() {
            log::warn!("already initialized; ignoring new config");
        }
        Ok(())
    })?;

    let report = with_runtime(|runtime| runtime.run())?;
    summarize(&report)
}

/// Bind `preset` to every element matching an arbitrary CSS selector.
#[wasm_bindgen]
pub fn animate(selector: &str, preset: &str) -> Result<JsValue, JsError> {
    let report = with_runtime(|runtime| runtime.run_selector(selector, preset, preset))?;
    summarize(&report)
}

/// Release bindings whose elements were removed from the page. Returns how many.
#[wasm_bindgen(js_name = releaseDetached)]
pub fn release_detached() -> Result<u32, JsError> {
    with_runtime(|runtime| runtime.release_detached() as u32)
}

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type Splide;

    #[wasm_bindgen(method, getter)]
    fn index(this: &Splide) -> i32;

    #[wasm_bindgen(method, getter)]
    fn length(this: &Splide) -> u32;

    #[wasm_bindgen(method)]
    fn on(this: &Splide, events: &str, handler: &JsValue);
}

/// Disable a Splide carousel's previous/next arrows at its first/last slide.
#[wasm_bindgen(js_name = hideArrowsAtEnds)]
pub fn hide_arrows_at_ends(splide: Splide) {
    let handle = splide.clone();
    let on_update = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |prev: JsValue, next: JsValue| {
        let (Some(prev), Some(next)) = (
            prev.dyn_ref::<web_sys::Element>(),
            next.dyn_ref::<web_sys::Element>(),
        ) else {
            return;
        };
        let state = ArrowState::at(handle.index(), handle.length());
        for (arrow, disabled) in [(prev, state.prev_disabled), (next, state.next_disabled)] {
            if let Err(err) = arrow.class_list().toggle_with_force(ARROW_DISABLED_CLASS, disabled) {
                log::debug!("arrow class toggle failed: {err:?}");
            }
        }
    });
    splide.on("arrows:updated", on_update.as_ref());
    // Lives as long as the carousel.
    on_update.forget();
}

/// Arrow state for a carousel at `index` of `len` slides, as `{ prevDisabled, nextDisabled }`.
#[wasm_bindgen(js_name = arrowState)]
pub fn arrow_state(index: i32, len: u32) -> Result<JsValue, JsError> {
    swb::to_value(&ArrowState::at(index, len)).map_err(|e| JsError::new(&e.to_string()))
}

/// Names of the built-in presets, in catalog order.
#[wasm_bindgen(js_name = presetNames)]
pub fn preset_names() -> Array {
    PresetId::ALL
        .iter()
        .map(|id| JsValue::from_str(id.as_str()))
        .collect()
}

/// ABI guard for hosts to verify compatibility.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
