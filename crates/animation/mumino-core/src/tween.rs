//! Tween payloads handed to the engine.
//!
//! Steps serialize to the engine's plain-object vocabulary (`yPercent`,
//! `stagger: { amount, from }`, `transformOrigin`, ...) so adapters can pass
//! them through without translation.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::AnimationError;
use crate::ids::ElementId;

/// Animatable property names understood by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    Opacity,
    AutoAlpha,
    X,
    Y,
    XPercent,
    YPercent,
    Z,
    Scale,
    ScaleX,
    ScaleY,
    Rotation,
    RotationX,
    RotationY,
    SkewX,
    Filter,
    Color,
    ClipPath,
    LetterSpacing,
    Width,
    Padding,
    BorderRight,
    TransformPerspective,
}

/// Deferred measurements the engine resolves against live layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Measure {
    /// Horizontal distance between the fragment's centre and its container's centre.
    CenterDistance,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TweenValue {
    Number(f32),
    Text(String),
    Measure { measure: Measure },
}

impl From<f32> for TweenValue {
    fn from(v: f32) -> Self {
        TweenValue::Number(v)
    }
}

impl From<&str> for TweenValue {
    fn from(v: &str) -> Self {
        TweenValue::Text(v.to_string())
    }
}

/// `from` tweens animate from the given values to the current state, `to` tweens the other way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TweenMode {
    From,
    To,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerFrom {
    Start,
    Center,
    End,
    Edges,
    Random,
}

/// Timing offset across the targets of one step.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Stagger {
    /// Seconds between consecutive targets.
    Each(f32),
    Spec(StaggerSpec),
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct StaggerSpec {
    /// Total seconds distributed across all targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub each: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<StaggerFrom>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<i32>,
    #[serde(skip_serializing_if = "is_false")]
    pub yoyo: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl StaggerSpec {
    pub const fn amount(amount: f32) -> Self {
        Self {
            amount: Some(amount),
            each: None,
            from: None,
            ease: None,
            repeat: None,
            yoyo: false,
        }
    }

    pub const fn each(each: f32) -> Self {
        Self {
            amount: None,
            each: Some(each),
            from: None,
            ease: None,
            repeat: None,
            yoyo: false,
        }
    }

    pub const fn from(self, from: StaggerFrom) -> Self {
        Self {
            from: Some(from),
            ..self
        }
    }

    pub const fn ease(self, ease: &'static str) -> Self {
        Self {
            ease: Some(ease),
            ..self
        }
    }

    pub const fn yoyo(self, repeat: i32) -> Self {
        Self {
            repeat: Some(repeat),
            yoyo: true,
            ..self
        }
    }

    pub const fn build(self) -> Stagger {
        Stagger::Spec(self)
    }
}

impl Stagger {
    /// Start offset of the last of `count` targets.
    pub fn total(&self, count: usize) -> f32 {
        if count < 2 {
            return 0.0;
        }
        let gaps = (count - 1) as f32;
        match self {
            Stagger::Each(each) => each * gaps,
            Stagger::Spec(spec) => match (spec.amount, spec.each) {
                (Some(amount), _) => amount,
                (None, Some(each)) => each * gaps,
                (None, None) => 0.0,
            },
        }
    }

    /// Per-target play count (repeat + 1).
    fn cycles(&self) -> f32 {
        match self {
            Stagger::Spec(StaggerSpec {
                repeat: Some(r), ..
            }) if *r > 0 => (*r + 1) as f32,
            _ => 1.0,
        }
    }

    fn validate(&self) -> Result<(), AnimationError> {
        let values = match self {
            Stagger::Each(each) => vec![*each],
            Stagger::Spec(spec) => spec.amount.into_iter().chain(spec.each).collect(),
        };
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(AnimationError::tween(format!("invalid stagger {self:?}")));
        }
        Ok(())
    }
}

/// Where a step lands on its timeline.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Position {
    /// After everything already on the timeline.
    Append,
    /// Absolute offset in seconds.
    At(f32),
}

/// Engine vars for one step (`{ opacity: 0, duration: 1, ease: "power2.out", ... }`).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars {
    #[serde(flatten)]
    pub props: IndexMap<Property, TweenValue>,
    pub duration: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f32>,
    pub ease: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<Stagger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_origin: Option<String>,
}

impl TweenVars {
    pub fn new(duration: f32, ease: impl Into<String>) -> Self {
        Self {
            props: IndexMap::new(),
            duration,
            delay: None,
            ease: ease.into(),
            stagger: None,
            transform_origin: None,
        }
    }

    pub fn with(mut self, prop: Property, value: impl Into<TweenValue>) -> Self {
        self.props.insert(prop, value.into());
        self
    }
}

/// One resolved tween: targets plus vars plus placement.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenStep {
    pub targets: Vec<ElementId>,
    pub mode: TweenMode,
    pub vars: TweenVars,
    pub position: Position,
}

impl TweenStep {
    /// Seconds from the step's position until its last target finishes.
    pub fn length(&self) -> f32 {
        let delay = self.vars.delay.unwrap_or(0.0);
        let (stagger, cycles) = match &self.vars.stagger {
            Some(s) => (s.total(self.targets.len()), s.cycles()),
            None => (0.0, 1.0),
        };
        (delay + stagger + self.vars.duration * cycles).max(0.0)
    }

    /// Reject payloads the engine would choke on.
    pub fn validate(&self) -> Result<(), AnimationError> {
        let vars = &self.vars;
        if !vars.duration.is_finite() || vars.duration < 0.0 {
            return Err(AnimationError::tween(format!(
                "duration must be a non-negative number, got {}",
                vars.duration
            )));
        }
        if let Some(delay) = vars.delay {
            if !delay.is_finite() {
                return Err(AnimationError::tween(format!("delay is not finite: {delay}")));
            }
        }
        if let Position::At(t) = self.position {
            if !t.is_finite() {
                return Err(AnimationError::tween(format!("position is not finite: {t}")));
            }
        }
        if vars.ease.trim().is_empty() {
            return Err(AnimationError::tween("empty ease name"));
        }
        if let Some(stagger) = &vars.stagger {
            stagger.validate()?;
        }
        for (prop, value) in &vars.props {
            match value {
                TweenValue::Number(n) if !n.is_finite() => {
                    return Err(AnimationError::tween(format!("{prop:?} is not finite: {n}")));
                }
                TweenValue::Text(t) if t.trim().is_empty() => {
                    return Err(AnimationError::tween(format!("{prop:?} has an empty value")));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn step(targets: usize, vars: TweenVars) -> TweenStep {
        TweenStep {
            targets: (0..targets as u32).map(ElementId).collect(),
            mode: TweenMode::From,
            vars,
            position: Position::Append,
        }
    }

    #[test]
    fn vars_serialize_as_engine_object() {
        let mut vars = TweenVars::new(1.5, "power2.out")
            .with(Property::YPercent, 100.0)
            .with(Property::Filter, "blur(20px)");
        vars.delay = Some(0.5);
        vars.stagger = Some(StaggerSpec::amount(0.5).from(StaggerFrom::Random).build());
        vars.transform_origin = Some("left center".into());
        let v = serde_json::to_value(&vars).unwrap();
        assert_eq!(
            v,
            json!({
                "yPercent": 100.0,
                "filter": "blur(20px)",
                "duration": 1.5,
                "delay": 0.5,
                "ease": "power2.out",
                "stagger": { "amount": 0.5, "from": "random" },
                "transformOrigin": "left center"
            })
        );
    }

    #[test]
    fn stagger_totals() {
        assert_eq!(Stagger::Each(0.5).total(5), 2.0);
        assert_eq!(StaggerSpec::amount(0.3).build().total(10), 0.3);
        assert_eq!(StaggerSpec::amount(0.3).build().total(1), 0.0);
        assert_eq!(StaggerSpec::each(0.25).build().total(3), 0.5);
    }

    #[test]
    fn length_includes_delay_stagger_and_repeats() {
        let mut vars = TweenVars::new(1.0, "none");
        vars.delay = Some(0.5);
        vars.stagger = Some(StaggerSpec::each(0.25).yoyo(1).build());
        assert_eq!(step(3, vars).length(), 0.5 + 0.5 + 2.0);
    }

    #[test]
    fn validate_rejects_malformed_payloads() {
        let bad_duration = step(1, TweenVars::new(-1.0, "none"));
        assert!(matches!(
            bad_duration.validate(),
            Err(AnimationError::TweenConstruction(_))
        ));

        let nan_prop = step(1, TweenVars::new(1.0, "none").with(Property::Scale, f32::NAN));
        assert!(nan_prop.validate().is_err());

        let empty_text = step(1, TweenVars::new(1.0, "none").with(Property::Color, " "));
        assert!(empty_text.validate().is_err());

        let mut neg_stagger = TweenVars::new(1.0, "none");
        neg_stagger.stagger = Some(Stagger::Each(-0.1));
        assert!(step(2, neg_stagger).validate().is_err());

        let ok = step(2, TweenVars::new(1.0, "power1.out").with(Property::Opacity, 0.0));
        assert!(ok.validate().is_ok());
    }
}
