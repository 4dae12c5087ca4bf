#![allow(dead_code)]
//! In-memory collaborators built from page fixtures.

use std::collections::{BTreeMap, HashMap, HashSet};

use mumino_core::{
    AnimationError, Animator, Config, Document, ElementId, Fragments, Granularity, IdAllocator,
    ObserverId, ObserverSpec, Property, ScrollEvent, ScrollObserver, Services, SplitRequest,
    TextSplitter, TimelineCommand, TimelineId, TimelineSpec, TweenEngine, TweenValue,
};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Page {
    pub title: String,
    pub elements: Vec<PageElement>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PageElement {
    pub id: u32,
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub text: String,
    /// The splitter fails on this element.
    #[serde(default)]
    pub broken: bool,
}

pub fn load_page(name: &str) -> Page {
    mumino_test_fixtures::pages::load(name).expect("load page fixture")
}

pub fn load_config(name: &str) -> Config {
    mumino_test_fixtures::configs::load(name).expect("load config fixture")
}

/// Parse `[attr="value"]`; anything else matches nothing.
fn parse_attribute_selector(selector: &str) -> Option<(&str, &str)> {
    let inner = selector.strip_prefix('[')?.strip_suffix(']')?;
    let (attr, value) = inner.split_once('=')?;
    Some((attr, value.trim_matches('"')))
}

#[derive(Debug, Default)]
pub struct FakeDocument {
    pub elements: Vec<PageElement>,
    pub detached: HashSet<ElementId>,
}

impl FakeDocument {
    pub fn new(page: &Page) -> Self {
        Self {
            elements: page.elements.clone(),
            detached: HashSet::new(),
        }
    }

    pub fn detach(&mut self, element: ElementId) {
        self.detached.insert(element);
    }

    fn find(&self, element: ElementId) -> Option<&PageElement> {
        self.elements.iter().find(|e| e.id == element.0)
    }
}

impl Document for FakeDocument {
    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let Some((attr, value)) = parse_attribute_selector(selector) else {
            return Vec::new();
        };
        self.elements
            .iter()
            .filter(|e| e.attributes.get(attr).map(String::as_str) == Some(value))
            .map(|e| ElementId(e.id))
            .filter(|id| !self.detached.contains(id))
            .collect()
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.find(element)?.attributes.get(name).cloned()
    }

    fn contains(&self, element: ElementId) -> bool {
        self.find(element).is_some() && !self.detached.contains(&element)
    }

    fn describe(&self, element: ElementId) -> String {
        match self.find(element) {
            Some(e) => format!("<{}> {element}", e.tag),
            None => element.to_string(),
        }
    }
}

/// Splits on newlines (lines), whitespace (words) and characters.
#[derive(Debug)]
pub struct FakeSplitter {
    texts: HashMap<ElementId, (String, bool)>,
    next_fragment: u32,
    pub splits: Vec<(ElementId, String)>,
    pub reverted: Vec<ElementId>,
}

impl FakeSplitter {
    pub fn new(page: &Page) -> Self {
        Self {
            texts: page
                .elements
                .iter()
                .map(|e| (ElementId(e.id), (e.text.clone(), e.broken)))
                .collect(),
            next_fragment: 1000,
            splits: Vec::new(),
            reverted: Vec::new(),
        }
    }

    fn fragment(&mut self) -> ElementId {
        let id = ElementId(self.next_fragment);
        self.next_fragment += 1;
        id
    }
}

impl TextSplitter for FakeSplitter {
    fn split(
        &mut self,
        element: ElementId,
        request: &SplitRequest,
    ) -> Result<Fragments, AnimationError> {
        let (text, broken) = self
            .texts
            .get(&element)
            .cloned()
            .ok_or_else(|| AnimationError::segmentation(element, "element not found"))?;
        if broken {
            return Err(AnimationError::segmentation(element, "text could not be measured"));
        }
        self.splits.push((element, request.types_string()));

        let mut out = Fragments::default();
        if request.contains(Granularity::Lines) {
            for _ in text.lines() {
                let id = self.fragment();
                out.lines.push(id);
            }
        }
        let words: Vec<&str> = text.split_whitespace().collect();
        if request.contains(Granularity::Words) {
            for _ in &words {
                let id = self.fragment();
                out.words.push(id);
            }
        }
        if request.contains(Granularity::Chars) {
            for word in &words {
                let mut group = Vec::new();
                for _ in word.chars() {
                    let id = self.fragment();
                    group.push(id);
                }
                out.chars.extend(group.iter().copied());
                out.chars_by_word.push(group);
            }
        }
        Ok(out)
    }

    fn revert(&mut self, element: ElementId) {
        self.reverted.push(element);
    }
}

/// Minimal playback model of a paused timeline.
#[derive(Clone, Debug)]
pub struct Playback {
    pub spec: TimelineSpec,
    pub progress: f32,
    pub playing: bool,
    /// Number of times playback started (play or restart).
    pub plays: u32,
    pub killed: bool,
    pub commands: Vec<TimelineCommand>,
}

#[derive(Debug, Default)]
pub struct FakeEngine {
    pub timelines: Vec<Playback>,
    pub sets: Vec<(ElementId, Vec<(Property, TweenValue)>)>,
    /// Owners whose timelines the engine rejects.
    pub reject: HashSet<ElementId>,
}

impl FakeEngine {
    pub fn playback(&self, id: TimelineId) -> &Playback {
        &self.timelines[id.0 as usize]
    }

    pub fn live(&self) -> usize {
        self.timelines.iter().filter(|t| !t.killed).count()
    }

    /// Run a timeline to its end, as the engine would once playback completes.
    pub fn finish(&mut self, id: TimelineId) {
        let tl = &mut self.timelines[id.0 as usize];
        tl.progress = 1.0;
        tl.playing = false;
    }
}

impl TweenEngine for FakeEngine {
    fn set(
        &mut self,
        target: ElementId,
        props: &[(Property, TweenValue)],
    ) -> Result<(), AnimationError> {
        self.sets.push((target, props.to_vec()));
        Ok(())
    }

    fn create_timeline(&mut self, spec: &TimelineSpec) -> Result<TimelineId, AnimationError> {
        if self.reject.contains(&spec.owner) {
            return Err(AnimationError::tween("engine rejected the timeline"));
        }
        let id = TimelineId(self.timelines.len() as u32);
        self.timelines.push(Playback {
            spec: spec.clone(),
            progress: 0.0,
            playing: false,
            plays: 0,
            killed: false,
            commands: Vec::new(),
        });
        Ok(id)
    }

    fn control(&mut self, timeline: TimelineId, command: TimelineCommand) {
        let Some(tl) = self.timelines.get_mut(timeline.0 as usize) else {
            return;
        };
        tl.commands.push(command);
        match command {
            // Resuming a finished timeline has nothing left to play.
            TimelineCommand::Play if tl.progress >= 1.0 => {}
            TimelineCommand::Play => {
                tl.playing = true;
                tl.plays += 1;
            }
            TimelineCommand::Restart => {
                tl.progress = 0.0;
                tl.playing = true;
                tl.plays += 1;
            }
            TimelineCommand::Pause => tl.playing = false,
            TimelineCommand::Reset => {
                tl.progress = 0.0;
                tl.playing = false;
            }
            TimelineCommand::Seek { progress, .. } => {
                tl.progress = progress;
                tl.playing = false;
            }
        }
    }

    fn kill(&mut self, timeline: TimelineId) {
        if let Some(tl) = self.timelines.get_mut(timeline.0 as usize) {
            tl.killed = true;
            tl.playing = false;
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeObserver {
    ids: IdAllocator,
    pub live: Vec<(ObserverId, ObserverSpec)>,
    pub registered: usize,
    /// Triggers whose registrations are refused.
    pub refuse: HashSet<ElementId>,
}

impl FakeObserver {
    pub fn for_element(&self, element: ElementId) -> Vec<ObserverId> {
        self.live
            .iter()
            .filter(|(_, spec)| spec.trigger == element)
            .map(|(id, _)| *id)
            .collect()
    }
}

impl ScrollObserver for FakeObserver {
    fn register(&mut self, spec: &ObserverSpec) -> Result<ObserverId, AnimationError> {
        if self.refuse.contains(&spec.trigger) {
            return Err(AnimationError::Observer(format!(
                "cannot observe {}",
                spec.trigger
            )));
        }
        let id = self.ids.alloc_observer();
        self.live.push((id, spec.clone()));
        self.registered += 1;
        Ok(id)
    }

    fn unregister(&mut self, id: ObserverId) {
        self.live.retain(|(live, _)| *live != id);
    }
}

pub type TestAnimator = Animator<FakeDocument, FakeSplitter, FakeEngine, FakeObserver>;

pub fn services(page: &Page) -> Services<FakeDocument, FakeSplitter, FakeEngine, FakeObserver> {
    Services {
        document: FakeDocument::new(page),
        splitter: FakeSplitter::new(page),
        engine: FakeEngine::default(),
        observer: FakeObserver::default(),
    }
}

pub fn animator(page: &str, config: Config) -> TestAnimator {
    Animator::new(config, services(&load_page(page))).expect("build animator")
}

/// Deliver `event` to every observer of `element`, in registration order.
pub fn deliver(
    animator: &mut TestAnimator,
    element: u32,
    event: ScrollEvent,
) -> Vec<TimelineCommand> {
    let ids: Vec<ObserverId> = animator
        .binding(ElementId(element))
        .map(|b| b.observers.iter().map(|h| h.id).collect())
        .unwrap_or_default();
    ids.into_iter()
        .filter_map(|id| animator.notify(id, event))
        .collect()
}

pub fn playback(animator: &TestAnimator, element: u32) -> Playback {
    let binding = animator.binding(ElementId(element)).expect("element is bound");
    animator.services().engine.playback(binding.timeline).clone()
}
