//! Built-in text presets: twenty each for lines, words and letters.

use super::{Anchor, Layout, Preset, PresetId, PropValue::*, TweenTemplate};
use crate::split::Granularity::{self, *};
use crate::tween::{Property::*, Stagger, StaggerFrom, StaggerSpec};

const LINES: &[Granularity] = &[Lines];
const WORDS: &[Granularity] = &[Words];
const WORDS_CHARS: &[Granularity] = &[Words, Chars];
const CHARS_WORDS: &[Granularity] = &[Chars, Words];

const RAINBOW: &[&str] = &[
    "#ff0000", "#ff7f00", "#ffff00", "#00ff00", "#0000ff", "#4b0082", "#8f00ff",
];

const TYPEWRITER: &[TweenTemplate] = &[
    TweenTemplate::from_vars(Chars, &[(Opacity, Num(0.0))], 0.05, "none").each(0.03),
    TweenTemplate::to_vars(Words, &[(BorderRight, Text("none"))], 0.1, "power1.out"),
];

const fn glitch(target: Granularity) -> [TweenTemplate; 3] {
    [
        TweenTemplate::from_vars(target, &[(Opacity, Num(0.0)), (SkewX, Num(20.0))], 0.1, "power1.inOut"),
        TweenTemplate::to_vars(target, &[(SkewX, Num(-20.0))], 0.1, "power1.inOut"),
        TweenTemplate::to_vars(target, &[(SkewX, Num(0.0))], 0.1, "power1.out"),
    ]
}

const GLITCH_WORDS: &[TweenTemplate] = &glitch(Words);
const GLITCH_CHARS: &[TweenTemplate] = &glitch(Chars);

const fn amount(amount: f32) -> Stagger {
    StaggerSpec::amount(amount).build()
}

const fn from(
    target: Granularity,
    props: &'static [(crate::tween::Property, super::PropValue)],
    duration: f32,
    ease: &'static str,
) -> TweenTemplate {
    TweenTemplate::from_vars(target, props, duration, ease)
}

impl PresetId {
    /// Definition of a built-in preset.
    pub fn preset(self) -> Preset {
        use PresetId as P;
        let (description, split, layout) = match self {
            P::Line01 => (
                "Elegant fade in with scale",
                LINES,
                Layout::Staggered(
                    from(Lines, &[(Opacity, Num(0.0)), (Scale, Num(0.95))], 1.2, "power2.out")
                        .stagger(amount(0.4)),
                ),
            ),
            P::Line02 => (
                "Slide up reveal with fade",
                LINES,
                Layout::Staggered(
                    from(Lines, &[(YPercent, Num(100.0)), (Opacity, Num(0.0))], 1.0, "power3.out")
                        .stagger(amount(0.3)),
                ),
            ),
            P::Line03 => (
                "Cascade from left with rotation",
                LINES,
                Layout::Staggered(
                    from(
                        Lines,
                        &[(XPercent, Num(-50.0)), (Opacity, Num(0.0)), (Rotation, Num(-5.0))],
                        1.2,
                        "power2.inOut",
                    )
                    .stagger(amount(0.25)),
                ),
            ),
            P::Line04 => (
                "Elastic bounce entrance",
                LINES,
                Layout::Staggered(
                    from(
                        Lines,
                        &[(YPercent, Num(-100.0)), (Opacity, Num(0.0))],
                        1.5,
                        "elastic.out(1, 0.5)",
                    )
                    .stagger(amount(0.4)),
                ),
            ),
            P::Line05 => (
                "Smooth scale reveal",
                LINES,
                Layout::Staggered(
                    from(Lines, &[(Scale, Num(1.2)), (Opacity, Num(0.0))], 1.0, "back.out(1.7)")
                        .stagger(amount(0.3)),
                ),
            ),
            P::Line06 => (
                "Staggered blur reveal",
                LINES,
                Layout::Staggered(
                    from(
                        Lines,
                        &[(Filter, Text("blur(20px)")), (Opacity, Num(0.0))],
                        1.2,
                        "power2.out",
                    )
                    .stagger(amount(0.4)),
                ),
            ),
            P::Line07 => (
                "Diagonal slide with fade",
                LINES,
                Layout::Staggered(
                    from(
                        Lines,
                        &[(XPercent, Num(-30.0)), (YPercent, Num(100.0)), (Opacity, Num(0.0))],
                        1.1,
                        "power3.out",
                    )
                    .stagger(amount(0.35)),
                ),
            ),
            P::Line08 => (
                "Flip reveal",
                LINES,
                Layout::Staggered(
                    from(Lines, &[(RotationX, Num(-90.0)), (Opacity, Num(0.0))], 1.3, "power2.out")
                        .stagger(amount(0.4))
                        .origin("center center"),
                ),
            ),
            P::Line09 => (
                "Squeeze and fade",
                LINES,
                Layout::Staggered(
                    from(
                        Lines,
                        &[(ScaleX, Num(1.5)), (ScaleY, Num(0.5)), (Opacity, Num(0.0))],
                        1.0,
                        "power2.out",
                    )
                    .stagger(amount(0.3)),
                ),
            ),
            P::Line10 => (
                "Slide alternating sides",
                LINES,
                Layout::PerFragment {
                    tween: from(
                        Lines,
                        &[(XPercent, Alternate(-100.0, 100.0)), (Opacity, Num(0.0))],
                        1.0,
                        "power2.out",
                    ),
                    offset: 0.15,
                    anchor: Anchor::Start,
                },
            ),
            P::Line11 => (
                "Wave effect",
                LINES,
                Layout::Staggered(
                    from(
                        Lines,
                        &[(YPercent, Num(50.0)), (Rotation, Num(5.0)), (Opacity, Num(0.0))],
                        1.2,
                        "power2.out",
                    )
                    .stagger(StaggerSpec::amount(0.5).ease("sine.inOut").build()),
                ),
            ),
            P::Line12 => (
                "Zoom perspective",
                LINES,
                Layout::Staggered(
                    from(Lines, &[(Z, Num(-500.0)), (Opacity, Num(0.0))], 1.4, "power2.out")
                        .stagger(amount(0.4))
                        .origin("center center"),
                ),
            ),
            P::Line13 => (
                "Curtain reveal",
                LINES,
                Layout::Staggered(
                    from(Lines, &[(ClipPath, Text("inset(0 100% 0 0)"))], 1.2, "power3.inOut")
                        .stagger(amount(0.4)),
                ),
            ),
            P::Line14 => (
                "Spiral entrance",
                LINES,
                Layout::Staggered(
                    from(
                        Lines,
                        &[(Rotation, Num(180.0)), (Scale, Num(0.0)), (Opacity, Num(0.0))],
                        1.3,
                        "back.out(1.7)",
                    )
                    .stagger(amount(0.4))
                    .origin("center center"),
                ),
            ),
            P::Line15 => (
                "Bounce cascade",
                LINES,
                Layout::Staggered(
                    from(Lines, &[(YPercent, Num(-200.0)), (Opacity, Num(0.0))], 1.2, "bounce.out")
                        .stagger(amount(0.5)),
                ),
            ),
            P::Line16 => (
                "Smooth slide with rotation",
                LINES,
                Layout::Staggered(
                    from(
                        Lines,
                        &[(XPercent, Num(-50.0)), (Rotation, Num(-15.0)), (Opacity, Num(0.0))],
                        1.1,
                        "power3.out",
                    )
                    .stagger(amount(0.3))
                    .origin("left center"),
                ),
            ),
            P::Line17 => (
                "Split reveal",
                LINES,
                Layout::PerFragment {
                    tween: from(
                        Lines,
                        &[(ClipPath, AlternateText("inset(0 100% 0 0)", "inset(0 0 0 100%)"))],
                        1.2,
                        "power2.inOut",
                    ),
                    offset: 0.1,
                    anchor: Anchor::Start,
                },
            ),
            P::Line18 => (
                "Elastic swing",
                LINES,
                Layout::Staggered(
                    from(
                        Lines,
                        &[(Rotation, Num(15.0)), (YPercent, Num(100.0)), (Opacity, Num(0.0))],
                        1.5,
                        "elastic.out(1, 0.3)",
                    )
                    .stagger(amount(0.4))
                    .origin("left bottom"),
                ),
            ),
            P::Line19 => (
                "Fade with letter spacing",
                LINES,
                Layout::Staggered(
                    from(
                        Lines,
                        &[(LetterSpacing, Text("0.5em")), (Opacity, Num(0.0))],
                        1.2,
                        "power2.out",
                    )
                    .stagger(amount(0.3)),
                ),
            ),
            P::Line20 => (
                "Perspective flip cascade",
                LINES,
                Layout::Staggered(
                    from(Lines, &[(RotationY, Num(-90.0)), (Opacity, Num(0.0))], 1.4, "power3.out")
                        .stagger(amount(0.4))
                        .origin("left center"),
                ),
            ),

            P::Word01 => (
                "Elegant fade up with blur",
                WORDS,
                Layout::Staggered(
                    from(
                        Words,
                        &[(Filter, Text("blur(3px)")), (Opacity, Num(0.0)), (YPercent, Num(50.0))],
                        0.8,
                        "power2.out",
                    )
                    .each(0.03),
                ),
            ),
            P::Word02 => (
                "Bounce scale entrance",
                WORDS,
                Layout::Staggered(
                    from(Words, &[(Scale, Num(0.3)), (Opacity, Num(0.0))], 0.8, "back.out(1.7)")
                        .each(0.05),
                ),
            ),
            P::Word03 => (
                "Slide from sides alternating",
                WORDS,
                Layout::PerFragment {
                    tween: from(
                        Words,
                        &[(XPercent, Alternate(-100.0, 100.0)), (Opacity, Num(0.0))],
                        0.7,
                        "power2.out",
                    ),
                    offset: 0.05,
                    anchor: Anchor::Start,
                },
            ),
            P::Word04 => ("Typewriter effect with cursor", WORDS_CHARS, Layout::Chain(TYPEWRITER)),
            P::Word05 => (
                "3D rotation reveal",
                WORDS,
                Layout::Staggered(
                    from(Words, &[(RotationY, Num(-90.0)), (Opacity, Num(0.0))], 0.8, "power2.out")
                        .each(0.04)
                        .origin("left center"),
                ),
            ),
            P::Word06 => (
                "Elastic drop in",
                WORDS,
                Layout::Staggered(
                    from(
                        Words,
                        &[(YPercent, Num(-100.0)), (Opacity, Num(0.0))],
                        1.2,
                        "elastic.out(1, 0.3)",
                    )
                    .each(0.06),
                ),
            ),
            P::Word07 => (
                "Letter spacing reveal",
                WORDS,
                Layout::Staggered(
                    from(
                        Words,
                        &[(LetterSpacing, Text("0.5em")), (Opacity, Num(0.0))],
                        1.0,
                        "power2.out",
                    )
                    .each(0.04),
                ),
            ),
            P::Word08 => (
                "Spiral entrance",
                WORDS,
                Layout::Staggered(
                    from(
                        Words,
                        &[(Scale, Num(0.0)), (Rotation, Num(180.0)), (Opacity, Num(0.0))],
                        0.8,
                        "back.out(1.7)",
                    )
                    .each(0.05)
                    .origin("center center"),
                ),
            ),
            P::Word09 => (
                "Slide up with character cascade",
                WORDS_CHARS,
                Layout::PerWord {
                    tween: from(Chars, &[(YPercent, Num(100.0)), (Opacity, Num(0.0))], 0.5, "power2.out")
                        .each(0.02),
                    step: 0.1,
                },
            ),
            P::Word10 => (
                "Wave motion",
                WORDS,
                Layout::Staggered(
                    from(
                        Words,
                        &[(YPercent, Num(50.0)), (Rotation, Num(5.0)), (Opacity, Num(0.0))],
                        1.0,
                        "power2.out",
                    )
                    .stagger(StaggerSpec::amount(0.5).ease("sine.inOut").build()),
                ),
            ),
            P::Word11 => (
                "Squeeze pop",
                WORDS,
                Layout::Staggered(
                    from(Words, &[(Scale, Num(1.5)), (Opacity, Num(0.0))], 0.7, "back.out(2)")
                        .each(0.04),
                ),
            ),
            P::Word12 => (
                "Random position fade",
                WORDS,
                Layout::PerFragment {
                    tween: from(
                        Words,
                        &[
                            (X, Random { min: -50.0, max: 50.0 }),
                            (Y, Random { min: -50.0, max: 50.0 }),
                            (Opacity, Num(0.0)),
                        ],
                        0.8,
                        "power2.out",
                    ),
                    offset: 0.0,
                    anchor: Anchor::Delay,
                },
            ),
            P::Word13 => (
                "Flip and slide",
                WORDS,
                Layout::Staggered(
                    from(
                        Words,
                        &[(RotationX, Num(90.0)), (YPercent, Num(100.0)), (Opacity, Num(0.0))],
                        0.9,
                        "power2.out",
                    )
                    .each(0.05)
                    .origin("center bottom"),
                ),
            ),
            P::Word14 => (
                "Zoom perspective",
                WORDS,
                Layout::Staggered(
                    from(
                        Words,
                        &[(Z, Num(-500.0)), (Opacity, Num(0.0)), (TransformPerspective, Num(500.0))],
                        1.0,
                        "power2.out",
                    )
                    .each(0.06),
                ),
            ),
            P::Word15 => (
                "Elastic swing",
                WORDS,
                Layout::Staggered(
                    from(
                        Words,
                        &[(Rotation, Num(45.0)), (Opacity, Num(0.0))],
                        1.2,
                        "elastic.out(1, 0.3)",
                    )
                    .each(0.05)
                    .origin("center bottom"),
                ),
            ),
            P::Word16 => (
                "Cross fade",
                WORDS,
                Layout::PerFragment {
                    tween: from(
                        Words,
                        &[
                            (XPercent, Alternate(-20.0, 20.0)),
                            (YPercent, Alternate(-50.0, 50.0)),
                            (Rotation, Alternate(-15.0, 15.0)),
                            (Opacity, Num(0.0)),
                        ],
                        0.8,
                        "power2.out",
                    ),
                    offset: 0.05,
                    anchor: Anchor::Delay,
                },
            ),
            P::Word17 => (
                "Character rotation cascade",
                WORDS_CHARS,
                Layout::PerWord {
                    tween: from(Chars, &[(Rotation, Num(180.0)), (Opacity, Num(0.0))], 0.6, "back.out(1.7)")
                        .each(0.03)
                        .origin("center center"),
                    step: 0.1,
                },
            ),
            P::Word18 => (
                "Bounce scatter",
                WORDS,
                Layout::Staggered(
                    from(Words, &[(Scale, Num(0.0)), (Opacity, Num(0.0))], 0.8, "bounce.out")
                        .stagger(StaggerSpec::amount(0.5).from(StaggerFrom::Random).build()),
                ),
            ),
            P::Word19 => (
                "Glitch effect",
                WORDS,
                Layout::Sequence {
                    chain: GLITCH_WORDS,
                    step: 0.1,
                },
            ),
            P::Word20 => (
                "Smooth scale wave",
                WORDS,
                Layout::Staggered(
                    from(Words, &[(Scale, Num(0.7)), (Opacity, Num(0.0))], 1.0, "power2.out")
                        .stagger(StaggerSpec::amount(0.6).ease("sine.inOut").build()),
                ),
            ),

            P::Letter01 => (
                "Elegant fade with scale and color",
                CHARS_WORDS,
                Layout::Staggered(
                    from(
                        Chars,
                        &[(Scale, Num(0.2)), (Opacity, Num(0.0)), (Color, Text("#64748b"))],
                        0.8,
                        "back.out(1.7)",
                    )
                    .each(0.02)
                    .origin("center center"),
                ),
            ),
            P::Letter02 => (
                "Cascade drop with bounce",
                CHARS_WORDS,
                Layout::Staggered(
                    from(Chars, &[(YPercent, Num(-100.0)), (Opacity, Num(0.0))], 1.0, "bounce.out")
                        .each(0.03),
                ),
            ),
            P::Letter03 => (
                "Spiral in with fade",
                CHARS_WORDS,
                Layout::Staggered(
                    from(
                        Chars,
                        &[(Rotation, Num(180.0)), (Scale, Num(0.0)), (Opacity, Num(0.0))],
                        0.8,
                        "power2.out",
                    )
                    .each(0.02)
                    .origin("center center"),
                ),
            ),
            P::Letter04 => (
                "Wave motion",
                CHARS_WORDS,
                Layout::Staggered(
                    from(
                        Chars,
                        &[(YPercent, Num(50.0)), (Rotation, Num(15.0)), (Opacity, Num(0.0))],
                        1.0,
                        "power2.out",
                    )
                    .stagger(StaggerSpec::each(0.03).ease("sine.inOut").build()),
                ),
            ),
            P::Letter05 => (
                "3D flip reveal",
                CHARS_WORDS,
                Layout::Staggered(
                    from(Chars, &[(RotationY, Num(-90.0)), (Opacity, Num(0.0))], 0.8, "power3.out")
                        .each(0.02)
                        .origin("left center"),
                ),
            ),
            P::Letter06 => (
                "Elastic stretch",
                CHARS_WORDS,
                Layout::Staggered(
                    from(Chars, &[(ScaleY, Num(3.0)), (Opacity, Num(0.0))], 1.2, "elastic.out(1, 0.3)")
                        .each(0.03),
                ),
            ),
            P::Letter07 => (
                "Random position scatter",
                CHARS_WORDS,
                Layout::PerFragment {
                    tween: from(
                        Chars,
                        &[
                            (X, Random { min: -50.0, max: 50.0 }),
                            (Y, Random { min: -50.0, max: 50.0 }),
                            (Opacity, Num(0.0)),
                        ],
                        1.0,
                        "power2.out",
                    ),
                    offset: 0.0,
                    anchor: Anchor::Delay,
                },
            ),
            P::Letter08 => (
                "Typewriter with cursor",
                CHARS_WORDS,
                Layout::Staggered(
                    from(
                        Chars,
                        &[(Width, Num(0.0)), (Opacity, Num(0.0)), (Padding, Num(0.0))],
                        0.05,
                        "none",
                    )
                    .each(0.03),
                ),
            ),
            P::Letter09 => (
                "Cross fade with rotation",
                CHARS_WORDS,
                Layout::PerFragment {
                    tween: from(
                        Chars,
                        &[(Rotation, Alternate(-45.0, 45.0)), (Opacity, Num(0.0))],
                        0.8,
                        "power2.out",
                    ),
                    offset: 0.02,
                    anchor: Anchor::Delay,
                },
            ),
            P::Letter10 => (
                "Blur cascade",
                CHARS_WORDS,
                Layout::Staggered(
                    from(
                        Chars,
                        &[(Filter, Text("blur(10px)")), (Opacity, Num(0.0))],
                        0.8,
                        "power2.out",
                    )
                    .each(0.02),
                ),
            ),
            P::Letter11 => (
                "Squeeze pop",
                CHARS_WORDS,
                Layout::Staggered(
                    from(
                        Chars,
                        &[(ScaleX, Num(2.0)), (ScaleY, Num(0.5)), (Opacity, Num(0.0))],
                        0.8,
                        "back.out(1.7)",
                    )
                    .each(0.02),
                ),
            ),
            P::Letter12 => (
                "Domino effect",
                CHARS_WORDS,
                Layout::Staggered(
                    from(Chars, &[(RotationX, Num(-90.0)), (Opacity, Num(0.0))], 0.8, "power2.out")
                        .each(0.03)
                        .origin("50% 0%"),
                ),
            ),
            P::Letter13 => (
                "Rainbow wave",
                CHARS_WORDS,
                Layout::PerFragment {
                    tween: from(
                        Chars,
                        &[(Color, Cycle(RAINBOW)), (YPercent, Num(50.0)), (Opacity, Num(0.0))],
                        1.0,
                        "power2.out",
                    ),
                    offset: 0.03,
                    anchor: Anchor::Delay,
                },
            ),
            P::Letter14 => (
                "Perspective zoom",
                CHARS_WORDS,
                Layout::Staggered(
                    from(
                        Chars,
                        &[(Z, Num(-1000.0)), (Opacity, Num(0.0)), (TransformPerspective, Num(1000.0))],
                        1.2,
                        "power2.out",
                    )
                    .each(0.02),
                ),
            ),
            P::Letter15 => (
                "Spring bounce",
                CHARS_WORDS,
                Layout::Staggered(
                    from(Chars, &[(Scale, Num(3.0)), (Opacity, Num(0.0))], 1.0, "elastic.out(1, 0.3)")
                        .each(0.03),
                ),
            ),
            P::Letter16 => (
                "Swirl in",
                CHARS_WORDS,
                Layout::PerFragment {
                    tween: from(
                        Chars,
                        &[
                            (Rotation, Stepped { step: 30.0, modulo: 360.0 }),
                            (Scale, Num(0.0)),
                            (Opacity, Num(0.0)),
                        ],
                        1.0,
                        "back.out(1.7)",
                    ),
                    offset: 0.02,
                    anchor: Anchor::Delay,
                },
            ),
            P::Letter17 => (
                "Matrix rain",
                CHARS_WORDS,
                Layout::Staggered(
                    from(Chars, &[(YPercent, Num(-200.0)), (Opacity, Num(0.0))], 1.0, "power2.out")
                        .stagger(StaggerSpec::amount(1.0).from(StaggerFrom::Random).build()),
                ),
            ),
            P::Letter18 => (
                "Glitch reveal",
                CHARS_WORDS,
                Layout::Sequence {
                    chain: GLITCH_CHARS,
                    step: 0.03,
                },
            ),
            P::Letter19 => (
                "Magnetic attraction",
                CHARS_WORDS,
                Layout::PerFragment {
                    tween: from(Chars, &[(X, CenterDistance), (Opacity, Num(0.0))], 1.0, "power2.out"),
                    offset: 0.02,
                    anchor: Anchor::Delay,
                },
            ),
            P::Letter20 => (
                "Pulse wave",
                CHARS_WORDS,
                Layout::Staggered(
                    from(Chars, &[(Scale, Num(0.0)), (Opacity, Num(0.0))], 0.6, "power2.out").stagger(
                        StaggerSpec::each(0.02).ease("sine.inOut").yoyo(1).build(),
                    ),
                ),
            ),
        };
        Preset::new(self, description, split, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ElementId;
    use crate::preset::Animation;
    use crate::split::Fragments;
    use crate::tween::{Position, Property, TweenValue};

    fn chars(n: u32) -> Fragments {
        Fragments {
            chars: (0..n).map(ElementId).collect(),
            words: vec![ElementId(100)],
            chars_by_word: vec![(0..n).map(ElementId).collect()],
            ..Fragments::default()
        }
    }

    #[test]
    fn split_sets_follow_family() {
        for id in PresetId::ALL {
            let expected = match id.as_str() {
                "word04" | "word09" | "word17" => WORDS_CHARS,
                n if n.starts_with("line") => LINES,
                n if n.starts_with("word") => WORDS,
                _ => CHARS_WORDS,
            };
            assert_eq!(id.preset().split, expected, "{id}");
        }
    }

    #[test]
    fn rainbow_cycles_through_seven_colours() {
        let spec = PresetId::Letter13.preset().build(ElementId(0), &chars(9), 0.5).unwrap();
        let colour = |i: usize| spec.steps[i].vars.props.get(&Property::Color).cloned();
        assert_eq!(colour(0), Some(TweenValue::Text("#ff0000".into())));
        assert_eq!(colour(7), colour(0));
        assert_eq!(colour(8), Some(TweenValue::Text("#ff7f00".into())));
        assert!(spec.steps.iter().all(|s| s.position == Position::At(0.5)));
    }

    #[test]
    fn swirl_steps_rotation_by_thirty_degrees() {
        let spec = PresetId::Letter16.preset().build(ElementId(0), &chars(14), 0.0).unwrap();
        let angle = |i: usize| spec.steps[i].vars.props.get(&Property::Rotation).cloned();
        assert_eq!(angle(1), Some(TweenValue::Number(30.0)));
        assert_eq!(angle(12), Some(TweenValue::Number(0.0)));
    }

    #[test]
    fn pulse_wave_repeats_with_yoyo() {
        let spec = PresetId::Letter20.preset().build(ElementId(0), &chars(3), 0.0).unwrap();
        let json = serde_json::to_value(&spec.steps[0].vars).unwrap();
        assert_eq!(json["stagger"]["repeat"], 1);
        assert_eq!(json["stagger"]["yoyo"], true);
        assert_eq!(json["stagger"]["ease"], "sine.inOut");
    }

    #[test]
    fn glitch_sequence_restarts_per_character() {
        let spec = PresetId::Letter18.preset().build(ElementId(0), &chars(2), 0.0).unwrap();
        assert_eq!(spec.steps.len(), 6);
        assert_eq!(spec.steps[3].vars.delay, Some(0.03));
        assert_eq!(
            spec.steps[5].vars.props.get(&Property::SkewX),
            Some(&TweenValue::Number(0.0))
        );
    }
}
