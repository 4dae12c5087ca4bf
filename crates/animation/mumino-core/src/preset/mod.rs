//! Animation presets: split granularity + trigger profile + tween layout.
//!
//! Built-in presets are plain data (see [`catalog`]); anything implementing
//! [`Animation`] can be registered alongside them.

pub mod catalog;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AnimationError, ParseError};
use crate::ids::ElementId;
use crate::split::{Fragments, Granularity};
use crate::timeline::TimelineSpec;
use crate::trigger::TriggerProfile;
use crate::tween::{
    Measure, Position, Property, Stagger, TweenMode, TweenStep, TweenValue, TweenVars,
};

/// Capability shared by every preset: what to split, how to trigger, what to schedule.
pub trait Animation {
    fn name(&self) -> &str;

    fn split(&self) -> &[Granularity];

    fn profile(&self) -> TriggerProfile {
        TriggerProfile::Default
    }

    /// Resolve the tween steps for one element's fragments.
    fn build(
        &self,
        owner: ElementId,
        fragments: &Fragments,
        delay: f32,
    ) -> Result<TimelineSpec, AnimationError>;
}

macro_rules! preset_ids {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Built-in preset identifiers, named after their marker attribute value.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum PresetId {
            $(#[serde(rename = $name)] $variant),*
        }

        impl PresetId {
            pub const ALL: &'static [PresetId] = &[$(PresetId::$variant),*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(PresetId::$variant => $name),*
                }
            }
        }
    };
}

preset_ids! {
    Line01 => "line01", Line02 => "line02", Line03 => "line03", Line04 => "line04",
    Line05 => "line05", Line06 => "line06", Line07 => "line07", Line08 => "line08",
    Line09 => "line09", Line10 => "line10", Line11 => "line11", Line12 => "line12",
    Line13 => "line13", Line14 => "line14", Line15 => "line15", Line16 => "line16",
    Line17 => "line17", Line18 => "line18", Line19 => "line19", Line20 => "line20",
    Word01 => "word01", Word02 => "word02", Word03 => "word03", Word04 => "word04",
    Word05 => "word05", Word06 => "word06", Word07 => "word07", Word08 => "word08",
    Word09 => "word09", Word10 => "word10", Word11 => "word11", Word12 => "word12",
    Word13 => "word13", Word14 => "word14", Word15 => "word15", Word16 => "word16",
    Word17 => "word17", Word18 => "word18", Word19 => "word19", Word20 => "word20",
    Letter01 => "letter01", Letter02 => "letter02", Letter03 => "letter03", Letter04 => "letter04",
    Letter05 => "letter05", Letter06 => "letter06", Letter07 => "letter07", Letter08 => "letter08",
    Letter09 => "letter09", Letter10 => "letter10", Letter11 => "letter11", Letter12 => "letter12",
    Letter13 => "letter13", Letter14 => "letter14", Letter15 => "letter15", Letter16 => "letter16",
    Letter17 => "letter17", Letter18 => "letter18", Letter19 => "letter19", Letter20 => "letter20",
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetId::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::Preset(s.to_string()))
    }
}

/// A property value, possibly depending on the fragment's index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PropValue {
    Num(f32),
    Text(&'static str),
    /// `even` for even indices, `odd` for odd ones.
    Alternate(f32, f32),
    AlternateText(&'static str, &'static str),
    /// Cycle through the list by index.
    Cycle(&'static [&'static str]),
    /// `(index * step) % modulo`.
    Stepped { step: f32, modulo: f32 },
    /// Uniform random in `[min, max]`, drawn by the engine per target.
    Random { min: f32, max: f32 },
    /// Distance from the container's horizontal centre, measured by the engine.
    CenterDistance,
}

impl PropValue {
    pub fn resolve(&self, index: usize) -> TweenValue {
        let even = index % 2 == 0;
        match *self {
            PropValue::Num(n) => TweenValue::Number(n),
            PropValue::Text(t) => TweenValue::Text(t.to_string()),
            PropValue::Alternate(a, b) => TweenValue::Number(if even { a } else { b }),
            PropValue::AlternateText(a, b) => TweenValue::Text((if even { a } else { b }).to_string()),
            PropValue::Cycle(items) => match items {
                [] => TweenValue::Text(String::new()),
                _ => TweenValue::Text(items[index % items.len()].to_string()),
            },
            PropValue::Stepped { step, modulo } => TweenValue::Number((index as f32 * step) % modulo),
            PropValue::Random { min, max } => TweenValue::Text(format!("random({min}, {max})")),
            PropValue::CenterDistance => TweenValue::Measure {
                measure: Measure::CenterDistance,
            },
        }
    }
}

/// Unresolved tween over one fragment set.
#[derive(Copy, Clone, Debug)]
pub struct TweenTemplate {
    pub target: Granularity,
    pub mode: TweenMode,
    pub props: &'static [(Property, PropValue)],
    pub duration: f32,
    pub ease: &'static str,
    pub stagger: Option<Stagger>,
    pub origin: Option<&'static str>,
}

impl TweenTemplate {
    pub const fn from_vars(
        target: Granularity,
        props: &'static [(Property, PropValue)],
        duration: f32,
        ease: &'static str,
    ) -> Self {
        Self {
            target,
            mode: TweenMode::From,
            props,
            duration,
            ease,
            stagger: None,
            origin: None,
        }
    }

    pub const fn to_vars(
        target: Granularity,
        props: &'static [(Property, PropValue)],
        duration: f32,
        ease: &'static str,
    ) -> Self {
        Self {
            mode: TweenMode::To,
            ..Self::from_vars(target, props, duration, ease)
        }
    }

    pub const fn stagger(self, stagger: Stagger) -> Self {
        Self {
            stagger: Some(stagger),
            ..self
        }
    }

    /// Per-item stagger in seconds.
    pub const fn each(self, each: f32) -> Self {
        self.stagger(Stagger::Each(each))
    }

    pub const fn origin(self, origin: &'static str) -> Self {
        Self {
            origin: Some(origin),
            ..self
        }
    }

    fn vars(&self, index: usize, delay: Option<f32>) -> TweenVars {
        let mut vars = TweenVars::new(self.duration, self.ease);
        for (prop, value) in self.props {
            vars.props.insert(*prop, value.resolve(index));
        }
        vars.delay = delay;
        vars.stagger = self.stagger;
        vars.transform_origin = self.origin.map(str::to_string);
        vars
    }

    fn step(&self, targets: Vec<ElementId>, index: usize, delay: Option<f32>, position: Position) -> TweenStep {
        TweenStep {
            targets,
            mode: self.mode,
            vars: self.vars(index, delay),
            position,
        }
    }
}

/// Where per-fragment steps are placed on the timeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// At time 0.
    Start,
    /// At the entry delay.
    Delay,
}

/// How a preset's templates are laid out across fragments.
#[derive(Copy, Clone, Debug)]
pub enum Layout {
    /// One step over the whole fragment set, delayed by the entry delay.
    Staggered(TweenTemplate),
    /// Steps appended in order; the first carries the entry delay.
    Chain(&'static [TweenTemplate]),
    /// One step per fragment, delayed by `delay + index * offset`.
    PerFragment {
        tween: TweenTemplate,
        offset: f32,
        anchor: Anchor,
    },
    /// One step per word over that word's characters, placed at `delay + index * step`.
    PerWord { tween: TweenTemplate, step: f32 },
    /// A chain per fragment, appended; each chain starts after `delay + index * step`.
    Sequence {
        chain: &'static [TweenTemplate],
        step: f32,
    },
}

impl Layout {
    /// Granularities the layout reads fragments from.
    pub fn targets(&self) -> Vec<Granularity> {
        match self {
            Layout::Staggered(t) | Layout::PerFragment { tween: t, .. } => vec![t.target],
            Layout::PerWord { .. } => vec![Granularity::Words, Granularity::Chars],
            Layout::Chain(chain) | Layout::Sequence { chain, .. } => {
                chain.iter().map(|t| t.target).collect()
            }
        }
    }

    fn schedule(&self, spec: &mut TimelineSpec, fragments: &Fragments, delay: f32) {
        match self {
            Layout::Staggered(t) => {
                spec.push(t.step(fragments.of(t.target).to_vec(), 0, Some(delay), Position::Append));
            }
            Layout::Chain(chain) => {
                for (i, t) in chain.iter().enumerate() {
                    let d = if i == 0 { Some(delay) } else { None };
                    spec.push(t.step(fragments.of(t.target).to_vec(), 0, d, Position::Append));
                }
            }
            Layout::PerFragment {
                tween,
                offset,
                anchor,
            } => {
                let at = match anchor {
                    Anchor::Start => 0.0,
                    Anchor::Delay => delay,
                };
                for (i, frag) in fragments.of(tween.target).iter().enumerate() {
                    let d = delay + i as f32 * offset;
                    spec.push(tween.step(vec![*frag], i, Some(d), Position::At(at)));
                }
            }
            Layout::PerWord { tween, step } => {
                for (i, chars) in fragments.chars_by_word.iter().enumerate() {
                    let at = delay + i as f32 * step;
                    spec.push(tween.step(chars.clone(), i, None, Position::At(at)));
                }
            }
            Layout::Sequence { chain, step } => {
                let Some(first) = chain.first() else {
                    return;
                };
                for (i, frag) in fragments.of(first.target).iter().enumerate() {
                    for (k, t) in chain.iter().enumerate() {
                        let d = if k == 0 {
                            Some(delay + i as f32 * step)
                        } else {
                            None
                        };
                        spec.push(t.step(vec![*frag], i, d, Position::Append));
                    }
                }
            }
        }
    }
}

/// A built-in preset.
#[derive(Copy, Clone, Debug)]
pub struct Preset {
    pub id: PresetId,
    pub description: &'static str,
    pub split: &'static [Granularity],
    pub profile: TriggerProfile,
    pub layout: Layout,
}

impl Preset {
    pub const fn new(
        id: PresetId,
        description: &'static str,
        split: &'static [Granularity],
        layout: Layout,
    ) -> Self {
        Self {
            id,
            description,
            split,
            profile: TriggerProfile::Default,
            layout,
        }
    }

    pub const fn with_profile(self, profile: TriggerProfile) -> Self {
        Self { profile, ..self }
    }
}

impl Animation for Preset {
    fn name(&self) -> &str {
        self.id.as_str()
    }

    fn split(&self) -> &[Granularity] {
        self.split
    }

    fn profile(&self) -> TriggerProfile {
        self.profile
    }

    fn build(
        &self,
        owner: ElementId,
        fragments: &Fragments,
        delay: f32,
    ) -> Result<TimelineSpec, AnimationError> {
        let mut spec = TimelineSpec::new(owner);
        self.layout.schedule(&mut spec, fragments, delay);
        spec.validate()?;
        Ok(spec)
    }
}
