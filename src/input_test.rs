use super::*;
use crate::consts::VERTEX_SIZE;
use crate::graph::Edge;

// =============================================================
// Helpers
// =============================================================

fn click(graph: &mut Graph, x: f64, y: f64) -> Interaction {
    apply_pointer_up(graph, PointerUp::new(x, y), VERTEX_SIZE, SelectPolicy::First)
}

fn scenario_a() -> Graph {
    let mut g = Graph::new();
    click(&mut g, 100.0, 100.0);
    click(&mut g, 200.0, 100.0);
    click(&mut g, 100.0, 200.0);
    g
}

fn assert_invariants(g: &Graph) {
    assert!(g.vertices().iter().filter(|v| v.active).count() <= 1);
    for (i, e) in g.edges().iter().enumerate() {
        assert_ne!(e.a, e.b);
        assert!(e.a < g.len() && e.b < g.len());
        for other in &g.edges()[i + 1..] {
            assert!(!other.joins(e.a, e.b), "duplicate edge {e:?}");
        }
    }
}

// =============================================================
// InteractionState
// =============================================================

#[test]
fn empty_graph_is_idle() {
    assert_eq!(InteractionState::of(&Graph::new()), InteractionState::Idle);
    assert_eq!(InteractionState::default(), InteractionState::Idle);
}

#[test]
fn first_click_anchors() {
    let mut g = Graph::new();
    click(&mut g, 10.0, 10.0);
    assert_eq!(InteractionState::of(&g), InteractionState::Anchored(0));
}

// =============================================================
// Vertex creation
// =============================================================

#[test]
fn first_click_creates_vertex_without_edge() {
    let mut g = Graph::new();
    let out = click(&mut g, 100.0, 100.0);
    assert_eq!(out, Interaction::VertexCreated { id: 0, edge_from: None });
    assert_eq!(g.len(), 1);
    assert!(g.edges().is_empty());
    assert!(g.vertices()[0].active);
}

#[test]
fn miss_connects_new_vertex_to_previous_anchor() {
    let mut g = Graph::new();
    click(&mut g, 100.0, 100.0);
    let out = click(&mut g, 200.0, 100.0);
    assert_eq!(out, Interaction::VertexCreated { id: 1, edge_from: Some(0) });
    assert_eq!(g.edges(), &[Edge::new(1, 0)]);
    assert_eq!(g.active(), Some(1));
}

#[test]
fn scenario_a_builds_a_path() {
    let g = scenario_a();
    assert_eq!(g.len(), 3);
    assert_eq!(g.edges(), &[Edge::new(1, 0), Edge::new(2, 1)]);
    assert_eq!(g.active(), Some(2));
    assert!(!g.vertices()[0].active);
    assert!(!g.vertices()[1].active);
}

// =============================================================
// Hitting existing vertices
// =============================================================

#[test]
fn revisiting_along_existing_edge_adds_nothing() {
    let mut g = scenario_a();
    click(&mut g, 2.0 + 100.0, 100.0 - 3.0);
    // Vertex 2 was active; {0, 2} is new, so connect it.
    assert_eq!(g.len(), 3);
    assert_eq!(g.active(), Some(0));

    // Clicking back along an existing edge adds nothing.
    click(&mut g, 200.0, 100.0);
    let out = click(&mut g, 101.0, 101.0);
    assert_eq!(out, Interaction::Connected { target: 0, from: 1, edge_added: false });
    assert_eq!(g.len(), 3);
    assert_eq!(g.edges().len(), 3);
    assert_eq!(g.active(), Some(0));
    assert!(!g.vertices()[1].active);
    assert!(!g.vertices()[2].active);
}

#[test]
fn hit_on_other_vertex_adds_missing_edge() {
    let mut g = scenario_a();
    let out = click(&mut g, 100.0, 100.0);
    assert_eq!(out, Interaction::Connected { target: 0, from: 2, edge_added: true });
    assert!(g.has_edge(0, 2));
    assert_eq!(g.edges().len(), 3);
}

#[test]
fn clicking_active_vertex_is_noop_reanchor() {
    let mut g = scenario_a();
    let before = g.edges().to_vec();
    let out = click(&mut g, 100.0, 200.0);
    assert_eq!(out, Interaction::Reanchored { target: 2 });
    assert_eq!(g.edges(), before.as_slice());
    assert_eq!(g.active(), Some(2));
    assert!(!out.mutated_topology());
}

#[test]
fn hit_while_idle_only_reanchors() {
    let mut g = scenario_a();
    g.clear_active();
    let out = click(&mut g, 200.0, 100.0);
    assert_eq!(out, Interaction::Reanchored { target: 1 });
    assert_eq!(g.edges().len(), 2);
    assert_eq!(g.active(), Some(1));
}

// =============================================================
// Interaction helpers
// =============================================================

#[test]
fn interaction_anchor_is_active_vertex() {
    let mut g = Graph::new();
    let out = click(&mut g, 0.0, 0.0);
    assert_eq!(out.anchor(), 0);
    let out = click(&mut g, 50.0, 0.0);
    assert_eq!(out.anchor(), 1);
    let out = click(&mut g, 0.0, 0.0);
    assert_eq!(out.anchor(), 0);
}

#[test]
fn mutated_topology_reports_changes() {
    assert!(Interaction::VertexCreated { id: 0, edge_from: None }.mutated_topology());
    assert!(Interaction::Connected { target: 0, from: 1, edge_added: true }.mutated_topology());
    assert!(!Interaction::Connected { target: 0, from: 1, edge_added: false }.mutated_topology());
}

// =============================================================
// transition
// =============================================================

#[test]
fn transition_is_pure_over_owned_graph() {
    let g = scenario_a();
    let snapshot = g.clone();
    let (next, out) = transition(g, PointerUp::new(300.0, 300.0), VERTEX_SIZE, SelectPolicy::First);
    assert_eq!(out, Interaction::VertexCreated { id: 3, edge_from: Some(2) });
    assert_eq!(next.len(), snapshot.len() + 1);
    assert_eq!(snapshot.len(), 3);
}

// =============================================================
// Invariants over click sequences
// =============================================================

#[test]
fn invariants_hold_over_long_click_sequence() {
    let mut g = Graph::new();
    // A deterministic walk that revisits vertices often.
    let spots = [(0.0, 0.0), (60.0, 0.0), (60.0, 60.0), (0.0, 60.0), (30.0, 30.0)];
    let mut seed: u64 = 17;
    for _ in 0..200 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        let idx = usize::try_from(seed >> 61).unwrap_or(0) % spots.len();
        let (x, y) = spots[idx];
        click(&mut g, x + 1.0, y - 1.0);
        assert_invariants(&g);
        assert_eq!(g.vertices().iter().filter(|v| v.active).count(), 1);
    }
    assert!(g.len() <= spots.len());
}

#[test]
fn nearest_policy_drives_transition() {
    let mut g = Graph::new();
    click(&mut g, 0.0, 0.0);
    click(&mut g, 8.0, 0.0);
    // 8 units apart: both boxes contain x = 5.
    let out = apply_pointer_up(&mut g, PointerUp::new(5.0, 0.0), VERTEX_SIZE, SelectPolicy::Nearest);
    assert_eq!(out, Interaction::Reanchored { target: 1 });
    let out = apply_pointer_up(&mut g, PointerUp::new(5.0, 0.0), VERTEX_SIZE, SelectPolicy::First);
    assert_eq!(out, Interaction::Connected { target: 0, from: 1, edge_added: false });
}
