// Profile table: totality, fallback behavior and sizing.

use gravity_core::{scaled_radius, Emotion, InteractionMode, ProfileTable};

#[test]
fn lookup_is_total_for_every_emotion() {
    let table = ProfileTable::new();
    for e in Emotion::ALL {
        let p = table.lookup(e);
        assert!(
            p.friction > 0.0 && p.friction <= 1.0,
            "friction out of range for {e:?}"
        );
        assert!(p.radius_multiplier > 0.0, "non-positive multiplier for {e:?}");
    }
}

#[test]
fn labels_round_trip() {
    for e in Emotion::ALL {
        assert_eq!(Emotion::from_label(e.label()), e);
    }
}

#[test]
fn unknown_label_resolves_to_neutral() {
    assert_eq!(Emotion::from_label("giddy"), Emotion::Neutral);
    assert_eq!(Emotion::from_label(""), Emotion::Neutral);

    let table = ProfileTable::new();
    assert_eq!(
        table.lookup(Emotion::from_label("giddy")),
        table.lookup(Emotion::Neutral)
    );
}

#[test]
fn interaction_modes_match_design() {
    let table = ProfileTable::new();
    assert_eq!(table.lookup(Emotion::Joy).mode, InteractionMode::Attract);
    assert_eq!(table.lookup(Emotion::Sadness).mode, InteractionMode::Repel);
    assert_eq!(table.lookup(Emotion::Anger).mode, InteractionMode::Agitate);
    assert_eq!(table.lookup(Emotion::Fear).mode, InteractionMode::Flee);
    assert_eq!(table.lookup(Emotion::Energy).mode, InteractionMode::Orbit);
    assert_eq!(table.lookup(Emotion::Neutral).mode, InteractionMode::Nudge);
}

#[test]
fn gravity_bias_directions_match_design() {
    let table = ProfileTable::new();
    assert!(table.lookup(Emotion::Joy).gravity < 0.0, "joy should float");
    assert!(table.lookup(Emotion::Energy).gravity < 0.0, "energy should float");
    assert!(table.lookup(Emotion::Sadness).gravity > 0.0, "sadness should sink");
    assert_eq!(table.lookup(Emotion::Anger).gravity, 0.0);
}

// Property: radius grows (weakly) with score for a fixed emotion and is
// always positive.
#[test]
fn radius_is_positive_and_monotonic_in_score() {
    let table = ProfileTable::new();
    for e in Emotion::ALL {
        let profile = table.lookup(e);
        let mut prev = scaled_radius(0.0, profile);
        assert!(prev > 0.0);
        for step in 1..=10 {
            let r = scaled_radius(step as f32 / 10.0, profile);
            assert!(r >= prev, "radius not monotonic for {e:?} at step {step}");
            prev = r;
        }
    }
}

#[test]
fn bad_scores_clamp_instead_of_propagating() {
    let table = ProfileTable::new();
    let p = table.lookup(Emotion::Neutral);
    assert_eq!(scaled_radius(7.3, p), scaled_radius(1.0, p));
    assert_eq!(scaled_radius(-2.0, p), scaled_radius(0.0, p));
    assert_eq!(scaled_radius(f32::NAN, p), scaled_radius(0.0, p));
    assert!(scaled_radius(f32::NAN, p) > 0.0);
}
