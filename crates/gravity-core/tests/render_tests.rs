// Scene walk against a recording painter: layering, dimming, connections.

use glam::Vec2;
use gravity_core::constants::{CONNECTION_ALPHA, CONNECTION_RADIUS, DIM_ALPHA, SELECTION_RING_OFFSET};
use gravity_core::render::{connection_pairs, draw_scene, truncate_excerpt, Painter};
use gravity_core::{
    DataPoint, Emotion, Filter, InteractionState, Particle, ProfileTable, Viewport,
};

fn particle(emotion: Emotion, pos: Vec2, text: &str) -> Particle {
    Particle {
        point: DataPoint {
            text: text.to_string(),
            emotion: emotion.label().to_string(),
            score: 0.5,
        },
        emotion,
        pos,
        vel: Vec2::ZERO,
        radius: 10.0,
        hovered: false,
    }
}

#[derive(Default)]
struct RecordingPainter {
    trails: usize,
    glows: Vec<(Vec2, f32, f32)>,
    discs: Vec<(Vec2, f32, f32)>,
    lines: Vec<(Vec2, Vec2, f32)>,
    rings: Vec<(Vec2, f32)>,
    callouts: Vec<String>,
}

impl Painter for RecordingPainter {
    fn trail(&mut self, _view: Viewport, _alpha: f32) {
        self.trails += 1;
    }
    fn glow(&mut self, center: Vec2, radius: f32, _color: [u8; 3], alpha: f32) {
        self.glows.push((center, radius, alpha));
    }
    fn disc(&mut self, center: Vec2, radius: f32, _color: [u8; 3], alpha: f32) {
        self.discs.push((center, radius, alpha));
    }
    fn line(&mut self, from: Vec2, to: Vec2, _color: [u8; 3], alpha: f32, _width: f32) {
        self.lines.push((from, to, alpha));
    }
    fn ring(&mut self, center: Vec2, radius: f32, _color: [u8; 3], _width: f32) {
        self.rings.push((center, radius));
    }
    fn callout(&mut self, _anchor: Vec2, text: &str) {
        self.callouts.push(text.to_string());
    }
}

fn scene() -> Vec<Particle> {
    vec![
        particle(Emotion::Joy, Vec2::new(100.0, 100.0), "first joy"),
        particle(Emotion::Joy, Vec2::new(150.0, 100.0), "second joy"),
        particle(Emotion::Sadness, Vec2::new(120.0, 100.0), "one sadness"),
    ]
}

#[test]
fn one_trail_then_glow_and_disc_per_particle() {
    let table = ProfileTable::new();
    let ps = scene();
    let state = InteractionState::default();
    let mut painter = RecordingPainter::default();

    draw_scene(&ps, &state, Viewport::new(800.0, 600.0), &table, &mut painter);

    assert_eq!(painter.trails, 1);
    assert_eq!(painter.glows.len(), 3);
    assert_eq!(painter.discs.len(), 3);
    // glow halo sits behind a core twice its size
    assert_eq!(painter.glows[0].1, ps[0].radius * 2.0);
    // insertion order is z-order
    assert_eq!(painter.discs[2].0, ps[2].pos);
}

#[test]
fn filter_dims_particles_but_never_removes_them() {
    let table = ProfileTable::new();
    let ps = scene();
    let state = InteractionState {
        filter: Filter::Only(Emotion::Joy),
        ..Default::default()
    };
    let mut painter = RecordingPainter::default();

    draw_scene(&ps, &state, Viewport::new(800.0, 600.0), &table, &mut painter);

    assert_eq!(painter.discs.len(), 3, "dimmed, not dropped");
    assert!(painter.discs[0].2 > 0.9);
    assert!(painter.discs[1].2 > 0.9);
    assert!((painter.discs[2].2 - DIM_ALPHA).abs() < 1e-6);
}

#[test]
fn filtered_connection_graph_has_no_foreign_endpoints() {
    let table = ProfileTable::new();
    let ps = scene();
    let state = InteractionState {
        filter: Filter::Only(Emotion::Joy),
        ..Default::default()
    };
    let mut painter = RecordingPainter::default();

    draw_scene(&ps, &state, Viewport::new(800.0, 600.0), &table, &mut painter);

    // only the joy pair links; the sadness particle between them is skipped
    assert_eq!(painter.lines.len(), 1);
    let (from, to, alpha) = painter.lines[0];
    assert_eq!(from, ps[0].pos);
    assert_eq!(to, ps[1].pos);
    let expected = (1.0 - 50.0 / CONNECTION_RADIUS) * CONNECTION_ALPHA;
    assert!((alpha - expected).abs() < 1e-5, "opacity fades with distance");
}

#[test]
fn connection_pairs_respect_the_distance_threshold() {
    let ps = vec![
        particle(Emotion::Joy, Vec2::new(100.0, 100.0), "a"),
        particle(Emotion::Joy, Vec2::new(400.0, 100.0), "b"),
    ];
    assert!(connection_pairs(&ps, Filter::All).is_empty());

    let ps = vec![
        particle(Emotion::Joy, Vec2::new(100.0, 100.0), "a"),
        particle(Emotion::Joy, Vec2::new(150.0, 100.0), "b"),
    ];
    let pairs = connection_pairs(&ps, Filter::All);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, 0);
    assert_eq!(pairs[0].1, 1);
    assert!((pairs[0].2 - 50.0).abs() < 1e-4);
}

#[test]
fn selection_ring_wraps_the_selected_particle() {
    let table = ProfileTable::new();
    let ps = scene();
    let state = InteractionState {
        selected: Some(2),
        ..Default::default()
    };
    let mut painter = RecordingPainter::default();

    draw_scene(&ps, &state, Viewport::new(800.0, 600.0), &table, &mut painter);

    assert_eq!(painter.rings.len(), 1);
    assert_eq!(painter.rings[0].0, ps[2].pos);
    assert_eq!(painter.rings[0].1, ps[2].radius + SELECTION_RING_OFFSET);
}

#[test]
fn stale_selection_index_is_ignored() {
    let table = ProfileTable::new();
    let ps = scene();
    let state = InteractionState {
        selected: Some(10),
        ..Default::default()
    };
    let mut painter = RecordingPainter::default();

    draw_scene(&ps, &state, Viewport::new(800.0, 600.0), &table, &mut painter);
    assert!(painter.rings.is_empty());
}

#[test]
fn hover_callout_shows_an_excerpt_unless_selected() {
    let table = ProfileTable::new();
    let mut ps = scene();
    ps[1].hovered = true;
    let mut painter = RecordingPainter::default();

    draw_scene(
        &ps,
        &InteractionState::default(),
        Viewport::new(800.0, 600.0),
        &table,
        &mut painter,
    );
    assert_eq!(painter.callouts, vec!["second joy".to_string()]);

    // a hovered particle that is also selected keeps only the ring
    let state = InteractionState {
        selected: Some(1),
        ..Default::default()
    };
    let mut painter = RecordingPainter::default();
    draw_scene(&ps, &state, Viewport::new(800.0, 600.0), &table, &mut painter);
    assert!(painter.callouts.is_empty());
    assert_eq!(painter.rings.len(), 1);
}

#[test]
fn excerpts_truncate_with_an_ellipsis() {
    assert_eq!(truncate_excerpt("short", 48), "short");

    let long = "a".repeat(80);
    let cut = truncate_excerpt(&long, 48);
    assert!(cut.ends_with('…'));
    assert!(cut.chars().count() <= 48);

    // multi-byte input never splits a character
    let emoji = "😀".repeat(60);
    let cut = truncate_excerpt(&emoji, 10);
    assert!(cut.chars().count() <= 10);
}
