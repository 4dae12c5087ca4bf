//! Timeline contracts: what the core asks the tween engine to build and do.

use serde::Serialize;

use crate::error::AnimationError;
use crate::ids::{ElementId, TimelineId};
use crate::tween::{Position, Property, TweenStep, TweenValue};

/// Playback commands issued in response to observer events.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum TimelineCommand {
    /// Resume forward from the current progress.
    Play,
    /// Jump to progress 0 and play forward.
    Restart,
    Pause,
    /// Jump to progress 0 and pause.
    Reset,
    /// Move the progress cursor, easing towards it over `smoothing` seconds.
    Seek { progress: f32, smoothing: f32 },
}

/// A paused timeline: an ordered list of steps owned by one element.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSpec {
    pub owner: ElementId,
    pub steps: Vec<TweenStep>,
}

impl TimelineSpec {
    pub fn new(owner: ElementId) -> Self {
        Self {
            owner,
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, step: TweenStep) {
        self.steps.push(step);
    }

    /// Total length in seconds, placing `Append` steps at the running end.
    pub fn duration(&self) -> f32 {
        let mut end = 0.0f32;
        for step in &self.steps {
            let start = match step.position {
                Position::Append => end,
                Position::At(t) => t.max(0.0),
            };
            end = end.max(start + step.length());
        }
        end
    }

    pub fn validate(&self) -> Result<(), AnimationError> {
        self.steps.iter().try_for_each(TweenStep::validate)
    }

    /// Every fragment touched by the timeline, in first-use order.
    pub fn targets(&self) -> Vec<ElementId> {
        let mut out: Vec<ElementId> = Vec::new();
        for step in &self.steps {
            for t in &step.targets {
                if !out.contains(t) {
                    out.push(*t);
                }
            }
        }
        out
    }
}

/// External tweening engine.
///
/// Timelines are created paused; the core drives them exclusively through
/// [`TweenEngine::control`].
pub trait TweenEngine {
    /// Immediately set properties on an element (no tween).
    fn set(
        &mut self,
        target: ElementId,
        props: &[(Property, TweenValue)],
    ) -> Result<(), AnimationError>;

    /// Build a paused timeline holding `spec`'s steps.
    fn create_timeline(&mut self, spec: &TimelineSpec) -> Result<TimelineId, AnimationError>;

    fn control(&mut self, timeline: TimelineId, command: TimelineCommand);

    /// Stop and discard a timeline. Unknown ids are ignored.
    fn kill(&mut self, timeline: TimelineId);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::{Stagger, TweenMode, TweenVars};

    fn step(position: Position, duration: f32, targets: u32) -> TweenStep {
        let mut vars = TweenVars::new(duration, "none");
        vars.stagger = Some(Stagger::Each(0.5));
        TweenStep {
            targets: (0..targets).map(ElementId).collect(),
            mode: TweenMode::From,
            vars,
            position,
        }
    }

    #[test]
    fn duration_appends_and_overlaps() {
        let mut spec = TimelineSpec::new(ElementId(99));
        spec.push(step(Position::Append, 1.0, 3)); // 0 .. 2
        spec.push(step(Position::Append, 1.0, 1)); // 2 .. 3
        spec.push(step(Position::At(0.0), 1.0, 1)); // 0 .. 1, inside
        assert_eq!(spec.duration(), 3.0);
        assert_eq!(spec.targets(), vec![ElementId(0), ElementId(1), ElementId(2)]);
    }

    #[test]
    fn commands_serialize_tagged() {
        let v = serde_json::to_value(TimelineCommand::Seek {
            progress: 0.5,
            smoothing: 1.0,
        })
        .unwrap();
        assert_eq!(v, serde_json::json!({ "op": "seek", "progress": 0.5, "smoothing": 1.0 }));
        let v = serde_json::to_value(TimelineCommand::Reset).unwrap();
        assert_eq!(v, serde_json::json!({ "op": "reset" }));
    }
}
