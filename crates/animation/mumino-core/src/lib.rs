//! Mumino Core (engine-agnostic)
//!
//! Scroll-triggered text animations: a trigger factory that maps viewport
//! events onto paused timelines, a declarative preset table, and a dispatch
//! runner that binds presets to marked elements. The tween engine, text
//! splitter, viewport observer and document are injected through the traits
//! in [`document`], [`split`], [`timeline`] and [`trigger`]; adapters
//! (wasm, tests) implement them.

pub mod carousel;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod ids;
pub mod preset;
pub mod registry;
pub mod runner;
pub mod split;
pub mod timeline;
pub mod trigger;
pub mod tween;

// Re-exports for consumers (adapters)
pub use carousel::{ArrowState, ARROW_DISABLED_CLASS};
pub use config::{Config, RebindPolicy};
pub use diagnostics::{Diagnostic, DiagnosticsCfg};
pub use document::Document;
pub use error::{AnimationError, ParseError};
pub use ids::{ElementId, IdAllocator, ObserverId, TimelineId};
pub use preset::{Animation, Layout, Preset, PresetId, PropValue, TweenTemplate};
pub use registry::{Category, PresetRegistry, SelectorTable};
pub use runner::{
    parse_delay, Animator, Binding, BindingState, DispatchReport, Failure, Services,
};
pub use split::{Fragments, Granularity, SplitRequest, TextSplitter};
pub use timeline::{TimelineCommand, TimelineSpec, TweenEngine};
pub use trigger::{
    ObserverHandle, ObserverSpec, ScrollEvent, ScrollObserver, ScrollPosition, Scrub,
    TriggerFactory, TriggerProfile,
};
pub use tween::{Property, Stagger, StaggerFrom, TweenMode, TweenStep, TweenValue};
