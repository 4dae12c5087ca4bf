//! Trigger factory: viewport observer registrations for paused timelines.
//!
//! Each [`TriggerProfile`] expands into one or more [`ObserverSpec`]s whose
//! callbacks are plain [`TimelineCommand`]s. The observer library only reports
//! [`ScrollEvent`]s; mapping them onto the timeline happens in
//! [`ObserverHandle::deliver`], so every profile behaves the same regardless of
//! which adapter drives it.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::error::{AnimationError, ParseError};
use crate::ids::{ElementId, ObserverId, TimelineId};
use crate::timeline::TimelineCommand;

/// Fixed scroll behaviours a timeline can be attached with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerProfile {
    /// Play on entry from below, reset when leaving back past the top, restart on re-entry.
    #[default]
    Default,
    /// Restart from 0 on every entry, either direction.
    ReplayOnEntry,
    /// Play on first entry, then stop listening.
    FireOnce,
    /// Progress follows scroll offset across the trigger span.
    Scrub,
    /// Element pinned for the span while progress follows scroll offset.
    Pinned,
}

impl TriggerProfile {
    pub const ALL: [TriggerProfile; 5] = [
        TriggerProfile::Default,
        TriggerProfile::ReplayOnEntry,
        TriggerProfile::FireOnce,
        TriggerProfile::Scrub,
        TriggerProfile::Pinned,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TriggerProfile::Default => "default",
            TriggerProfile::ReplayOnEntry => "replayOnEntry",
            TriggerProfile::FireOnce => "fireOnce",
            TriggerProfile::Scrub => "scrub",
            TriggerProfile::Pinned => "pinned",
        }
    }

    /// Whether progress is a continuous function of scroll offset.
    pub fn is_continuous(self) -> bool {
        matches!(self, TriggerProfile::Scrub | TriggerProfile::Pinned)
    }
}

impl fmt::Display for TriggerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerProfile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TriggerProfile::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::Profile(s.to_string()))
    }
}

/// Edge of the trigger element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

/// Point in the viewport (or a length, for relative ends).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Mark {
    Top,
    Center,
    Bottom,
    Percent(f32),
    Pixels(f32),
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Top => f.write_str("top"),
            Mark::Center => f.write_str("center"),
            Mark::Bottom => f.write_str("bottom"),
            Mark::Percent(p) => write!(f, "{p}%"),
            Mark::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

impl FromStr for Mark {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::ScrollPosition(s.to_string());
        let s = s.trim();
        let number = |raw: &str| raw.trim().parse::<f32>().ok().filter(|v| v.is_finite());
        match s {
            "top" => Ok(Mark::Top),
            "center" => Ok(Mark::Center),
            "bottom" => Ok(Mark::Bottom),
            _ => {
                if let Some(raw) = s.strip_suffix('%') {
                    number(raw).map(Mark::Percent).ok_or_else(err)
                } else if let Some(raw) = s.strip_suffix("px") {
                    number(raw).map(Mark::Pixels).ok_or_else(err)
                } else {
                    Err(err())
                }
            }
        }
    }
}

/// Observer start/end threshold in the observer library's syntax.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScrollPosition {
    /// `"<element edge> <viewport mark>"`, e.g. `"top 90%"`.
    Edges { element: Edge, viewport: Mark },
    /// `"+=<length>"` past the start, e.g. `"+=100%"`.
    Relative(Mark),
}

impl ScrollPosition {
    pub const fn edges(element: Edge, viewport: Mark) -> Self {
        ScrollPosition::Edges { element, viewport }
    }
}

impl fmt::Display for ScrollPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollPosition::Edges { element, viewport } => {
                let edge = match element {
                    Edge::Top => "top",
                    Edge::Center => "center",
                    Edge::Bottom => "bottom",
                };
                write!(f, "{edge} {viewport}")
            }
            ScrollPosition::Relative(len) => write!(f, "+={len}"),
        }
    }
}

impl FromStr for ScrollPosition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(rest) = trimmed.strip_prefix("+=") {
            return match rest.parse::<Mark>()? {
                len @ (Mark::Percent(_) | Mark::Pixels(_)) => Ok(ScrollPosition::Relative(len)),
                _ => Err(ParseError::ScrollPosition(s.to_string())),
            };
        }
        let mut parts = trimmed.split_whitespace();
        let (Some(edge), Some(mark), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseError::ScrollPosition(s.to_string()));
        };
        let element = match edge {
            "top" => Edge::Top,
            "center" => Edge::Center,
            "bottom" => Edge::Bottom,
            _ => return Err(ParseError::ScrollPosition(s.to_string())),
        };
        Ok(ScrollPosition::Edges {
            element,
            viewport: mark.parse()?,
        })
    }
}

impl Serialize for ScrollPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How scroll offset drives timeline progress.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Scrub {
    /// Progress jumps straight to the scroll position.
    Linked,
    /// Progress catches up over the given number of seconds.
    Smoothed(f32),
}

impl Scrub {
    pub fn smoothing(self) -> f32 {
        match self {
            Scrub::Linked => 0.0,
            Scrub::Smoothed(s) => s,
        }
    }
}

impl Serialize for Scrub {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scrub::Linked => serializer.serialize_bool(true),
            Scrub::Smoothed(s) => serializer.serialize_f32(*s),
        }
    }
}

/// Viewport events reported by the observer library.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScrollEvent {
    /// Start threshold crossed scrolling down.
    Enter,
    /// End threshold crossed scrolling down.
    Leave,
    /// End threshold crossed scrolling up.
    EnterBack,
    /// Start threshold crossed scrolling up.
    LeaveBack,
    /// Scroll offset within the span, 0..=1.
    Progress(f32),
}

/// One observer registration.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverSpec {
    pub trigger: ElementId,
    pub timeline: TimelineId,
    pub start: ScrollPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<ScrollPosition>,
    pub markers: bool,
    /// Unregister after the first activation.
    pub once: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_enter: Option<TimelineCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_leave: Option<TimelineCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_enter_back: Option<TimelineCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_leave_back: Option<TimelineCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrub: Option<Scrub>,
    pub pin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anticipate_pin: Option<f32>,
}

impl ObserverSpec {
    fn new(trigger: ElementId, timeline: TimelineId, start: ScrollPosition, markers: bool) -> Self {
        Self {
            trigger,
            timeline,
            start,
            end: None,
            markers,
            once: false,
            on_enter: None,
            on_leave: None,
            on_enter_back: None,
            on_leave_back: None,
            scrub: None,
            pin: false,
            anticipate_pin: None,
        }
    }

    /// The command this registration issues for `event`, ignoring `once` bookkeeping.
    pub fn respond(&self, event: ScrollEvent) -> Option<TimelineCommand> {
        match event {
            ScrollEvent::Enter => self.on_enter,
            ScrollEvent::Leave => self.on_leave,
            ScrollEvent::EnterBack => self.on_enter_back,
            ScrollEvent::LeaveBack => self.on_leave_back,
            ScrollEvent::Progress(p) if p.is_finite() => {
                self.scrub.map(|scrub| TimelineCommand::Seek {
                    progress: p.clamp(0.0, 1.0),
                    smoothing: scrub.smoothing(),
                })
            }
            ScrollEvent::Progress(_) => None,
        }
    }
}

/// A live registration returned by the factory.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverHandle {
    pub id: ObserverId,
    pub spec: ObserverSpec,
    spent: bool,
}

impl ObserverHandle {
    pub fn new(id: ObserverId, spec: ObserverSpec) -> Self {
        Self {
            id,
            spec,
            spent: false,
        }
    }

    /// Map an event onto a command. A `once` registration goes inert after its first activation.
    pub fn deliver(&mut self, event: ScrollEvent) -> Option<TimelineCommand> {
        if self.spent {
            return None;
        }
        let command = self.spec.respond(event);
        if self.spec.once && matches!(event, ScrollEvent::Enter | ScrollEvent::EnterBack) {
            self.spent = true;
        }
        command
    }

    pub fn is_spent(&self) -> bool {
        self.spent
    }
}

/// External viewport observer / pinning library.
pub trait ScrollObserver {
    fn register(&mut self, spec: &ObserverSpec) -> Result<ObserverId, AnimationError>;

    /// Dispose a registration. Unknown ids are ignored.
    fn unregister(&mut self, id: ObserverId);
}

/// Builds observer registrations for the five profiles.
#[derive(Clone, Debug)]
pub struct TriggerFactory {
    start_mark: Mark,
    markers: bool,
}

impl TriggerFactory {
    pub fn new(config: &Config) -> Result<Self, ParseError> {
        Ok(Self {
            start_mark: config.start_position.parse()?,
            markers: config.markers,
        })
    }

    /// Registrations for `profile`, without touching the observer.
    pub fn specs(
        &self,
        profile: TriggerProfile,
        element: ElementId,
        timeline: TimelineId,
    ) -> Vec<ObserverSpec> {
        let start = ScrollPosition::edges(Edge::Top, self.start_mark);
        let span_end = Some(ScrollPosition::edges(Edge::Bottom, Mark::Top));
        let base = ObserverSpec::new(element, timeline, start, self.markers);
        match profile {
            TriggerProfile::Default => {
                let mut reset = ObserverSpec::new(
                    element,
                    timeline,
                    ScrollPosition::edges(Edge::Top, Mark::Bottom),
                    self.markers,
                );
                reset.on_leave_back = Some(TimelineCommand::Reset);
                vec![
                    reset,
                    ObserverSpec {
                        end: span_end,
                        on_enter: Some(TimelineCommand::Play),
                        on_enter_back: Some(TimelineCommand::Restart),
                        ..base
                    },
                ]
            }
            TriggerProfile::ReplayOnEntry => vec![ObserverSpec {
                end: span_end,
                on_enter: Some(TimelineCommand::Restart),
                on_enter_back: Some(TimelineCommand::Restart),
                ..base
            }],
            TriggerProfile::FireOnce => vec![ObserverSpec {
                end: span_end,
                once: true,
                on_enter: Some(TimelineCommand::Play),
                ..base
            }],
            TriggerProfile::Scrub => vec![ObserverSpec {
                end: span_end,
                scrub: Some(Scrub::Smoothed(1.0)),
                ..base
            }],
            TriggerProfile::Pinned => vec![ObserverSpec {
                end: Some(ScrollPosition::Relative(Mark::Percent(100.0))),
                scrub: Some(Scrub::Linked),
                pin: true,
                anticipate_pin: Some(1.0),
                ..base
            }],
        }
    }

    /// Register `profile`'s observers. On failure, registrations made so far are disposed.
    pub fn attach(
        &self,
        observer: &mut dyn ScrollObserver,
        profile: TriggerProfile,
        element: ElementId,
        timeline: TimelineId,
    ) -> Result<Vec<ObserverHandle>, AnimationError> {
        let mut handles: Vec<ObserverHandle> = Vec::new();
        for spec in self.specs(profile, element, timeline) {
            match observer.register(&spec) {
                Ok(id) => handles.push(ObserverHandle::new(id, spec)),
                Err(err) => {
                    for h in &handles {
                        observer.unregister(h.id);
                    }
                    return Err(err);
                }
            }
        }
        Ok(handles)
    }

    /// Attach by profile name. Unknown names and registration failures are
    /// logged and yield no registrations.
    pub fn attach_named(
        &self,
        observer: &mut dyn ScrollObserver,
        name: &str,
        element: ElementId,
        timeline: TimelineId,
    ) -> Vec<ObserverHandle> {
        let profile = match name.parse::<TriggerProfile>() {
            Ok(p) => p,
            Err(err) => {
                log::error!("{err}");
                return Vec::new();
            }
        };
        self.attach(observer, profile, element, timeline)
            .unwrap_or_else(|err| {
                log::error!("failed to attach '{profile}' trigger to {element}: {err}");
                Vec::new()
            })
    }

    pub fn attach_replay_on_entry(
        &self,
        observer: &mut dyn ScrollObserver,
        element: ElementId,
        timeline: TimelineId,
    ) -> Result<Vec<ObserverHandle>, AnimationError> {
        self.attach(observer, TriggerProfile::ReplayOnEntry, element, timeline)
    }

    pub fn attach_fire_once(
        &self,
        observer: &mut dyn ScrollObserver,
        element: ElementId,
        timeline: TimelineId,
    ) -> Result<Vec<ObserverHandle>, AnimationError> {
        self.attach(observer, TriggerProfile::FireOnce, element, timeline)
    }

    pub fn attach_scrub(
        &self,
        observer: &mut dyn ScrollObserver,
        element: ElementId,
        timeline: TimelineId,
    ) -> Result<Vec<ObserverHandle>, AnimationError> {
        self.attach(observer, TriggerProfile::Scrub, element, timeline)
    }

    pub fn attach_pinned(
        &self,
        observer: &mut dyn ScrollObserver,
        element: ElementId,
        timeline: TimelineId,
    ) -> Result<Vec<ObserverHandle>, AnimationError> {
        self.attach(observer, TriggerProfile::Pinned, element, timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        next: u32,
        live: Vec<ObserverId>,
        refuse_after: Option<usize>,
    }

    impl ScrollObserver for Recorder {
        fn register(&mut self, _spec: &ObserverSpec) -> Result<ObserverId, AnimationError> {
            if self.refuse_after == Some(self.live.len()) {
                return Err(AnimationError::Observer("refused".into()));
            }
            let id = ObserverId(self.next);
            self.next += 1;
            self.live.push(id);
            Ok(id)
        }

        fn unregister(&mut self, id: ObserverId) {
            self.live.retain(|l| *l != id);
        }
    }

    fn factory() -> TriggerFactory {
        TriggerFactory::new(&Config::default()).unwrap()
    }

    #[test]
    fn profile_names_round_trip() {
        for p in TriggerProfile::ALL {
            assert_eq!(p.as_str().parse::<TriggerProfile>(), Ok(p));
        }
        assert_eq!(
            "bounce".parse::<TriggerProfile>(),
            Err(ParseError::Profile("bounce".into()))
        );
    }

    #[test]
    fn scroll_positions_parse_and_display() {
        for s in ["top 90%", "top bottom", "bottom top", "center 120px", "+=100%"] {
            let pos: ScrollPosition = s.parse().unwrap();
            assert_eq!(pos.to_string(), s);
        }
        assert!("top".parse::<ScrollPosition>().is_err());
        assert!("side 90%".parse::<ScrollPosition>().is_err());
        assert!("+=top".parse::<ScrollPosition>().is_err());
        assert!("top abc%".parse::<ScrollPosition>().is_err());
    }

    #[test]
    fn default_profile_splits_reset_and_play() {
        let specs = factory().specs(TriggerProfile::Default, ElementId(1), TimelineId(7));
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].start.to_string(), "top bottom");
        assert_eq!(specs[0].on_leave_back, Some(TimelineCommand::Reset));
        assert_eq!(specs[1].start.to_string(), "top 90%");
        assert_eq!(specs[1].end.map(|e| e.to_string()), Some("bottom top".into()));
        assert_eq!(specs[1].on_enter, Some(TimelineCommand::Play));
        assert_eq!(specs[1].on_enter_back, Some(TimelineCommand::Restart));
        assert!(specs.iter().all(|s| s.timeline == TimelineId(7)));
    }

    #[test]
    fn start_position_comes_from_config() {
        let cfg = Config {
            start_position: "75%".into(),
            markers: true,
            ..Config::default()
        };
        let specs = TriggerFactory::new(&cfg)
            .unwrap()
            .specs(TriggerProfile::FireOnce, ElementId(0), TimelineId(0));
        assert_eq!(specs[0].start.to_string(), "top 75%");
        assert!(specs[0].markers);

        let bad = Config {
            start_position: "lots".into(),
            ..Config::default()
        };
        assert!(TriggerFactory::new(&bad).is_err());
    }

    #[test]
    fn pinned_spans_one_viewport() {
        let specs = factory().specs(TriggerProfile::Pinned, ElementId(0), TimelineId(0));
        assert_eq!(specs.len(), 1);
        assert!(specs[0].pin);
        assert_eq!(specs[0].end.map(|e| e.to_string()), Some("+=100%".into()));
        assert_eq!(specs[0].scrub, Some(Scrub::Linked));
    }

    #[test]
    fn fire_once_goes_inert() {
        let spec = factory().specs(TriggerProfile::FireOnce, ElementId(0), TimelineId(0));
        let mut handle = ObserverHandle::new(ObserverId(0), spec[0].clone());
        assert_eq!(handle.deliver(ScrollEvent::Enter), Some(TimelineCommand::Play));
        assert!(handle.is_spent());
        for _ in 0..5 {
            assert_eq!(handle.deliver(ScrollEvent::Enter), None);
        }
    }

    #[test]
    fn scrub_maps_progress_and_clamps() {
        let spec = factory().specs(TriggerProfile::Scrub, ElementId(0), TimelineId(0));
        assert_eq!(
            spec[0].respond(ScrollEvent::Progress(1.4)),
            Some(TimelineCommand::Seek {
                progress: 1.0,
                smoothing: 1.0
            })
        );
        assert_eq!(spec[0].respond(ScrollEvent::Progress(f32::NAN)), None);
        assert_eq!(spec[0].respond(ScrollEvent::Enter), None);
    }

    #[test]
    fn attach_rolls_back_partial_registrations() {
        let mut rec = Recorder {
            refuse_after: Some(1),
            ..Recorder::default()
        };
        let res = factory().attach(&mut rec, TriggerProfile::Default, ElementId(0), TimelineId(0));
        assert!(matches!(res, Err(AnimationError::Observer(_))));
        assert!(rec.live.is_empty());
    }

    #[test]
    fn unknown_profile_name_yields_nothing() {
        let mut rec = Recorder::default();
        let handles = factory().attach_named(&mut rec, "sideways", ElementId(0), TimelineId(0));
        assert!(handles.is_empty());
        assert!(rec.live.is_empty());

        let handles = factory().attach_named(&mut rec, "scrub", ElementId(0), TimelineId(0));
        assert_eq!(handles.len(), 1);
    }

    #[test]
    fn shorthand_helpers_pick_their_profile() {
        let mut rec = Recorder::default();
        let f = factory();
        assert!(f.attach_fire_once(&mut rec, ElementId(0), TimelineId(0)).unwrap()[0].spec.once);
        assert!(f.attach_pinned(&mut rec, ElementId(0), TimelineId(0)).unwrap()[0].spec.pin);
        assert!(f.attach_scrub(&mut rec, ElementId(0), TimelineId(0)).unwrap()[0].spec.scrub.is_some());
        let replay = f.attach_replay_on_entry(&mut rec, ElementId(0), TimelineId(0)).unwrap();
        assert_eq!(replay[0].spec.on_enter, Some(TimelineCommand::Restart));
        assert_eq!(replay[0].spec.on_enter_back, Some(TimelineCommand::Restart));
        assert_eq!(rec.live.len(), 4);
    }
}
