mod common;

use std::collections::BTreeMap;

use common::{playback, services, Page, PageElement, TestAnimator};
use mumino_core::{Animator, Config, PresetId};
use serde_json::json;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// One element per built-in preset, ids 100.. in catalog order.
fn catalog_page() -> Page {
    let elements = PresetId::ALL
        .iter()
        .enumerate()
        .map(|(i, id)| PageElement {
            id: 100 + i as u32,
            tag: "h2".into(),
            attributes: BTreeMap::from([("data-ani".to_string(), id.as_str().to_string())]),
            text: "Every preset\ngets its turn".into(),
            broken: false,
        })
        .collect();
    Page {
        title: "catalog".into(),
        elements,
    }
}

fn element_of(id: PresetId) -> u32 {
    100 + PresetId::ALL.iter().position(|p| *p == id).unwrap() as u32
}

fn bound_catalog() -> TestAnimator {
    let mut anim = Animator::new(Config::default(), services(&catalog_page())).unwrap();
    let report = anim.run();
    assert!(report.is_clean(), "{:?}", report.failures);
    assert_eq!(report.animated.len(), 60);
    anim
}

fn step_json(anim: &TestAnimator, id: PresetId, step: usize) -> serde_json::Value {
    serde_json::to_value(&playback(anim, element_of(id)).spec.steps[step]).unwrap()
}

#[test]
fn every_preset_builds_a_paused_timeline_over_fragments() {
    let anim = bound_catalog();
    for id in PresetId::ALL {
        let pb = playback(&anim, element_of(*id));
        assert!(!pb.spec.steps.is_empty(), "{id} has no steps");
        assert!(pb.spec.duration() > 0.0, "{id} has zero duration");
        assert!(!pb.playing);
        for target in pb.spec.targets() {
            assert!(target.0 >= 1000, "{id} animates the container itself");
        }
    }
}

#[test]
fn steps_serialize_in_engine_vocabulary() {
    let anim = bound_catalog();

    let line08 = step_json(&anim, PresetId::Line08, 0);
    assert_eq!(line08["mode"], "from");
    assert_eq!(line08["vars"]["ease"], "power2.out");
    assert_eq!(line08["vars"]["transformOrigin"], "center center");
    assert_eq!(line08["vars"]["rotationX"], -90.0);
    assert_eq!(line08["vars"]["delay"], 0.0);

    let word18 = step_json(&anim, PresetId::Word18, 0);
    assert_eq!(word18["vars"]["stagger"]["from"], "random");
    assert_eq!(word18["vars"]["stagger"]["amount"], 0.5);

    let word12 = step_json(&anim, PresetId::Word12, 0);
    assert_eq!(word12["vars"]["x"], "random(-50, 50)");

    let letter19 = step_json(&anim, PresetId::Letter19, 0);
    assert_eq!(letter19["vars"]["x"], json!({ "measure": "centerDistance" }));

    let word04 = step_json(&anim, PresetId::Word04, 1);
    assert_eq!(word04["mode"], "to");
    assert_eq!(word04["vars"]["borderRight"], "none");
}

#[test]
fn alternating_presets_overlap_from_time_zero() {
    let anim = bound_catalog();
    let pb = playback(&anim, element_of(PresetId::Line10));
    assert_eq!(pb.spec.steps.len(), 2);
    approx(pb.spec.duration(), 0.15 + 1.0, 1e-6);
}

#[test]
fn glitch_chains_append_per_word() {
    let anim = bound_catalog();
    let pb = playback(&anim, element_of(PresetId::Word19));
    // Five words ("Every preset / gets its turn"), three steps each.
    assert_eq!(pb.spec.steps.len(), 15);
    // Each chain waits for its delay after the previous one finishes.
    let expected: f32 = (0..5).map(|i| i as f32 * 0.1 + 0.3).sum();
    approx(expected, 2.5, 1e-6);
    approx(pb.spec.duration(), expected, 1e-5);
}
