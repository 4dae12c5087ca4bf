//! Dispatch runner: resolves marked elements to presets and owns their bindings.
//!
//! Methods:
//! - new, run (selector table), run_selector (ad hoc), bind
//! - notify (observer events → timeline commands), release, release_detached

use hashbrown::HashMap;
use indexmap::IndexMap;
use log::Level;

use crate::config::{Config, RebindPolicy};
use crate::diagnostics::{emit, Diagnostic};
use crate::document::Document;
use crate::error::AnimationError;
use crate::ids::{ElementId, ObserverId, TimelineId};
use crate::preset::Animation;
use crate::registry::{PresetRegistry, SelectorTable};
use crate::split::{SplitRequest, TextSplitter};
use crate::timeline::{TimelineCommand, TweenEngine};
use crate::trigger::{ObserverHandle, ScrollEvent, ScrollObserver, TriggerFactory, TriggerProfile};
use crate::tween::{Property, TweenValue};

/// Parse a delay attribute: leading integer milliseconds, converted to seconds.
///
/// Absent or non-numeric values yield 0. Trailing garbage is ignored (`"500ms"`
/// is 0.5) and negative values pass through.
pub fn parse_delay(raw: Option<&str>) -> f32 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0.0;
    }
    match digits[..end].parse::<f64>() {
        Ok(ms) => (sign * ms / 1000.0) as f32,
        Err(_) => 0.0,
    }
}

/// Per-element lifecycle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BindingState {
    Unbound,
    Segmented,
    TimelineBuilt,
    /// Observers registered, timeline paused at 0 awaiting the first event.
    TriggerAttached,
    Paused,
    Playing,
    /// Progress 0, paused, after leaving back above the start.
    Reset,
    Scrubbing { progress: f32 },
}

impl BindingState {
    /// State after the engine executes `command`. Reset only follows Playing.
    pub fn apply(self, command: TimelineCommand) -> Self {
        match command {
            TimelineCommand::Play | TimelineCommand::Restart => BindingState::Playing,
            TimelineCommand::Pause => BindingState::Paused,
            TimelineCommand::Reset => match self {
                BindingState::Playing => BindingState::Reset,
                other => other,
            },
            TimelineCommand::Seek { progress, .. } => BindingState::Scrubbing { progress },
        }
    }
}

/// One element bound to a built timeline and its observers.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub element: ElementId,
    /// Registry name the element was bound with.
    pub preset: String,
    pub profile: TriggerProfile,
    pub delay: f32,
    pub timeline: TimelineId,
    pub observers: Vec<ObserverHandle>,
    pub state: BindingState,
}

/// An element (or a whole selector) that could not be bound.
#[derive(Clone, Debug, PartialEq)]
pub struct Failure {
    /// `None` when the preset name itself did not resolve.
    pub element: Option<ElementId>,
    pub preset: String,
    /// Last lifecycle state reached before the error.
    pub stage: BindingState,
    pub error: AnimationError,
}

/// Outcome of one dispatch pass. Errors are collected here instead of propagated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatchReport {
    pub animated: Vec<ElementId>,
    /// Elements left alone because they were already bound.
    pub skipped: Vec<ElementId>,
    pub failures: Vec<Failure>,
    pub diagnostics: Vec<Diagnostic>,
}

impl DispatchReport {
    pub fn merge(&mut self, other: DispatchReport) {
        self.animated.extend(other.animated);
        self.skipped.extend(other.skipped);
        self.failures.extend(other.failures);
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The collaborators an animator drives.
#[derive(Debug)]
pub struct Services<D, S, E, O> {
    pub document: D,
    pub splitter: S,
    pub engine: E,
    pub observer: O,
}

/// Binds presets to marked elements and routes observer events to their timelines.
pub struct Animator<D, S, E, O> {
    config: Config,
    triggers: TriggerFactory,
    /// Profile overrides that resolved to a known profile.
    overrides: IndexMap<String, TriggerProfile>,
    presets: PresetRegistry,
    selectors: SelectorTable,
    services: Services<D, S, E, O>,
    bindings: HashMap<ElementId, Binding>,
    observers: HashMap<ObserverId, ElementId>,
}

impl<D, S, E, O> Animator<D, S, E, O>
where
    D: Document,
    S: TextSplitter,
    E: TweenEngine,
    O: ScrollObserver,
{
    /// Animator over the built-in presets, with one text selector per preset.
    pub fn new(config: Config, services: Services<D, S, E, O>) -> Result<Self, AnimationError> {
        Self::with_presets(config, PresetRegistry::builtin(), services)
    }

    pub fn with_presets(
        config: Config,
        presets: PresetRegistry,
        services: Services<D, S, E, O>,
    ) -> Result<Self, AnimationError> {
        let triggers = TriggerFactory::new(&config)?;
        let mut overrides = IndexMap::new();
        for (name, raw) in &config.profile_overrides {
            let profile = match raw.parse::<TriggerProfile>() {
                Ok(profile) => profile,
                Err(err) => {
                    log::error!("ignoring profile override for '{name}': {err}");
                    continue;
                }
            };
            if !presets.contains(name) {
                log::warn!("profile override '{profile}' names unknown preset '{name}'");
            }
            overrides.insert(name.clone(), profile);
        }
        let selectors = SelectorTable::from_registry(&config, &presets);
        Ok(Self {
            config,
            triggers,
            overrides,
            presets,
            selectors,
            services,
            bindings: HashMap::new(),
            observers: HashMap::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn presets(&self) -> &PresetRegistry {
        &self.presets
    }

    pub fn selectors(&self) -> &SelectorTable {
        &self.selectors
    }

    pub fn selectors_mut(&mut self) -> &mut SelectorTable {
        &mut self.selectors
    }

    pub fn services(&self) -> &Services<D, S, E, O> {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut Services<D, S, E, O> {
        &mut self.services
    }

    /// Register a custom animation and a text selector for it.
    pub fn register(&mut self, name: &str, animation: Box<dyn Animation>) {
        self.presets.register(name, animation);
        self.selectors.insert(
            crate::registry::Category::Text,
            name,
            self.config.selector_for(name),
        );
    }

    pub fn binding(&self, element: ElementId) -> Option<&Binding> {
        self.bindings.get(&element)
    }

    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    /// Current lifecycle state; `Unbound` for unknown elements.
    pub fn state(&self, element: ElementId) -> BindingState {
        self.bindings
            .get(&element)
            .map_or(BindingState::Unbound, |b| b.state)
    }

    /// Dispatch every scroll-driven entry of the selector table.
    pub fn run(&mut self) -> DispatchReport {
        let entries: Vec<(String, String)> = self
            .selectors
            .entries()
            .filter(|(category, _, _)| category.is_scroll_driven())
            .map(|(_, name, sel)| (name.to_string(), sel.to_string()))
            .collect();
        let mut report = DispatchReport::default();
        for (name, selector) in &entries {
            let pass = self.run_selector(selector, name, name);
            report.merge(pass);
        }
        log::debug!(
            "dispatch: {} animated, {} skipped, {} failed",
            report.animated.len(),
            report.skipped.len(),
            report.failures.len()
        );
        report
    }

    /// Bind `preset` to every element matching `selector`. `label` names the
    /// animation in diagnostics.
    pub fn run_selector(&mut self, selector: &str, preset: &str, label: &str) -> DispatchReport {
        let mut report = DispatchReport::default();
        let diag = self.config.diagnostics.clone();

        if !self.presets.contains(preset) {
            let message = format!("No matching animation found for: {preset}");
            emit(&diag, &mut report.diagnostics, Level::Warn, None, message.clone());
            report.failures.push(Failure {
                element: None,
                preset: preset.to_string(),
                stage: BindingState::Unbound,
                error: AnimationError::Configuration(message),
            });
            return report;
        }

        let elements = self.services.document.query_all(selector);
        if elements.is_empty() {
            if self.selectors.is_configured(selector) {
                emit(
                    &diag,
                    &mut report.diagnostics,
                    Level::Info,
                    None,
                    format!("No elements found for \"{label}\" animation with selector: {selector}"),
                );
            }
            return report;
        }

        emit(
            &diag,
            &mut report.diagnostics,
            Level::Info,
            None,
            format!("Animating {} {label} element(s)", elements.len()),
        );

        for element in elements {
            if self.bindings.contains_key(&element) {
                match self.config.rebind {
                    RebindPolicy::Skip => {
                        log::debug!("{element} already bound, skipping");
                        report.skipped.push(element);
                        continue;
                    }
                    RebindPolicy::Replace => {
                        self.release(element);
                    }
                }
            }

            let raw = self
                .services
                .document
                .attribute(element, &self.config.delay_attribute);
            let delay = parse_delay(raw.as_deref());

            match self.bind(element, preset, delay) {
                Ok(()) => report.animated.push(element),
                Err((stage, error)) => {
                    let what = self.services.document.describe(element);
                    emit(
                        &diag,
                        &mut report.diagnostics,
                        Level::Warn,
                        Some(element),
                        format!("Failed to animate {label} element {what}: {error}"),
                    );
                    report.failures.push(Failure {
                        element: Some(element),
                        preset: preset.to_string(),
                        stage,
                        error,
                    });
                }
            }
        }
        report
    }

    /// Segment, build and attach one element. On error, everything created so
    /// far is undone and the last state reached is returned with the error.
    pub fn bind(
        &mut self,
        element: ElementId,
        preset: &str,
        delay: f32,
    ) -> Result<(), (BindingState, AnimationError)> {
        let mut stage = BindingState::Unbound;
        let animation = self.presets.get(preset).ok_or_else(|| {
            (
                stage,
                AnimationError::Configuration(format!("unknown preset '{preset}'")),
            )
        })?;
        let profile = self
            .overrides
            .get(preset)
            .copied()
            .unwrap_or_else(|| animation.profile());

        if !self.services.document.contains(element) {
            return Err((stage, AnimationError::segmentation(element, "element not found")));
        }
        let request = SplitRequest::new(animation.split())
            .map_err(|err| (stage, AnimationError::segmentation(element, err.to_string())))?;
        let fragments = self
            .services
            .splitter
            .split(element, &request)
            .map_err(|err| (stage, err))?;
        stage = BindingState::Segmented;

        let Services {
            splitter,
            engine,
            observer,
            ..
        } = &mut self.services;
        let built = animation
            .build(element, &fragments, delay)
            .and_then(|spec| {
                engine.set(element, &[(Property::Opacity, TweenValue::Number(1.0))])?;
                engine.create_timeline(&spec)
            });
        let timeline = match built {
            Ok(tl) => tl,
            Err(err) => {
                splitter.revert(element);
                return Err((stage, err));
            }
        };
        stage = BindingState::TimelineBuilt;

        let handles = match self.triggers.attach(observer, profile, element, timeline) {
            Ok(handles) => handles,
            Err(err) => {
                engine.kill(timeline);
                splitter.revert(element);
                return Err((stage, err));
            }
        };

        for h in &handles {
            self.observers.insert(h.id, element);
        }
        log::debug!(
            "bound {element} to '{preset}' ({profile}, delay {delay}s, {} observer(s))",
            handles.len()
        );
        self.bindings.insert(
            element,
            Binding {
                element,
                preset: preset.to_string(),
                profile,
                delay,
                timeline,
                observers: handles,
                state: BindingState::TriggerAttached,
            },
        );
        Ok(())
    }

    /// Route an observer event to its binding. Returns the command sent to the engine.
    pub fn notify(&mut self, observer: ObserverId, event: ScrollEvent) -> Option<TimelineCommand> {
        let element = *self.observers.get(&observer)?;
        let binding = self.bindings.get_mut(&element)?;
        let handle = binding.observers.iter_mut().find(|h| h.id == observer)?;
        let command = handle.deliver(event);
        if handle.is_spent() {
            self.services.observer.unregister(observer);
            self.observers.remove(&observer);
            binding.observers.retain(|h| h.id != observer);
        }
        let command = command?;
        binding.state = binding.state.apply(command);
        self.services.engine.control(binding.timeline, command);
        Some(command)
    }

    /// Dispose an element's observers and timeline and restore its markup.
    pub fn release(&mut self, element: ElementId) -> bool {
        let Some(binding) = self.bindings.remove(&element) else {
            return false;
        };
        for h in &binding.observers {
            self.services.observer.unregister(h.id);
            self.observers.remove(&h.id);
        }
        self.services.engine.kill(binding.timeline);
        self.services.splitter.revert(element);
        log::debug!("released {element} ('{}')", binding.preset);
        true
    }

    /// Release every binding whose element has left the document.
    pub fn release_detached(&mut self) -> usize {
        let detached: Vec<ElementId> = self
            .bindings
            .keys()
            .copied()
            .filter(|el| !self.services.document.contains(*el))
            .collect();
        detached.into_iter().filter(|el| self.release(*el)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_uses_leading_integer_milliseconds() {
        assert_eq!(parse_delay(Some("500")), 0.5);
        assert_eq!(parse_delay(None), 0.0);
        assert_eq!(parse_delay(Some("abc")), 0.0);
        assert_eq!(parse_delay(Some("")), 0.0);
        assert_eq!(parse_delay(Some("  750px")), 0.75);
        assert_eq!(parse_delay(Some("1.9")), 0.001);
        assert_eq!(parse_delay(Some("-250")), -0.25);
        assert_eq!(parse_delay(Some("-")), 0.0);
    }

    #[test]
    fn reset_only_follows_playing() {
        let attached = BindingState::TriggerAttached;
        assert_eq!(attached.apply(TimelineCommand::Reset), attached);
        let playing = attached.apply(TimelineCommand::Play);
        assert_eq!(playing, BindingState::Playing);
        assert_eq!(playing.apply(TimelineCommand::Reset), BindingState::Reset);
        assert_eq!(
            BindingState::Reset.apply(TimelineCommand::Restart),
            BindingState::Playing
        );
        assert_eq!(
            playing.apply(TimelineCommand::Seek {
                progress: 0.25,
                smoothing: 0.0
            }),
            BindingState::Scrubbing { progress: 0.25 }
        );
    }

    #[test]
    fn report_merge_accumulates() {
        let mut a = DispatchReport {
            animated: vec![ElementId(1)],
            ..DispatchReport::default()
        };
        a.merge(DispatchReport {
            skipped: vec![ElementId(2)],
            ..DispatchReport::default()
        });
        assert_eq!(a.animated, vec![ElementId(1)]);
        assert_eq!(a.skipped, vec![ElementId(2)]);
        assert!(a.is_clean());
    }
}
