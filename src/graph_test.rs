#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn graph_with(points: &[(f64, f64)]) -> Graph {
    let mut g = Graph::new();
    for &(x, y) in points {
        g.push_vertex(Point::new(x, y));
    }
    g
}

// =============================================================
// Edge
// =============================================================

#[test]
fn edge_joins_is_unordered() {
    let e = Edge::new(1, 4);
    assert!(e.joins(1, 4));
    assert!(e.joins(4, 1));
    assert!(!e.joins(1, 2));
}

#[test]
fn edge_touches_both_endpoints() {
    let e = Edge::new(2, 3);
    assert!(e.touches(2));
    assert!(e.touches(3));
    assert!(!e.touches(0));
}

#[test]
fn edge_other_returns_opposite_endpoint() {
    let e = Edge::new(2, 3);
    assert_eq!(e.other(2), Some(3));
    assert_eq!(e.other(3), Some(2));
    assert_eq!(e.other(7), None);
}

// =============================================================
// Vertices
// =============================================================

#[test]
fn new_graph_is_empty() {
    let g = Graph::new();
    assert!(g.is_empty());
    assert_eq!(g.len(), 0);
    assert!(g.edges().is_empty());
    assert_eq!(g.active(), None);
}

#[test]
fn push_vertex_returns_sequential_ids() {
    let mut g = Graph::new();
    assert_eq!(g.push_vertex(Point::new(0.0, 0.0)), 0);
    assert_eq!(g.push_vertex(Point::new(5.0, 0.0)), 1);
    assert_eq!(g.push_vertex(Point::new(9.0, 9.0)), 2);
    assert_eq!(g.len(), 3);
}

#[test]
fn push_vertex_makes_new_vertex_the_only_active_one() {
    let g = graph_with(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
    assert_eq!(g.active(), Some(2));
    assert_eq!(g.vertices().iter().filter(|v| v.active).count(), 1);
}

#[test]
fn vertex_stores_position() {
    let g = graph_with(&[(12.5, 40.0)]);
    let v = g.vertex(0).copied().unwrap();
    assert_eq!(v.x, 12.5);
    assert_eq!(v.y, 40.0);
    assert_eq!(v.position(), Point::new(12.5, 40.0));
}

#[test]
fn vertex_out_of_range_is_none() {
    let g = graph_with(&[(0.0, 0.0)]);
    assert!(g.vertex(1).is_none());
}

// =============================================================
// Active flag
// =============================================================

#[test]
fn set_active_moves_flag() {
    let mut g = graph_with(&[(0.0, 0.0), (10.0, 0.0)]);
    assert!(g.set_active(0));
    assert_eq!(g.active(), Some(0));
    assert!(!g.vertices()[1].active);
}

#[test]
fn set_active_rejects_unknown_id() {
    let mut g = graph_with(&[(0.0, 0.0)]);
    assert!(!g.set_active(3));
    assert_eq!(g.active(), Some(0));
}

#[test]
fn clear_active_leaves_none_active() {
    let mut g = graph_with(&[(0.0, 0.0), (10.0, 0.0)]);
    g.clear_active();
    assert_eq!(g.active(), None);
}

// =============================================================
// Edges
// =============================================================

#[test]
fn add_edge_inserts_once() {
    let mut g = graph_with(&[(0.0, 0.0), (10.0, 0.0)]);
    assert!(g.add_edge(1, 0));
    assert!(!g.add_edge(1, 0));
    assert!(!g.add_edge(0, 1));
    assert_eq!(g.edges(), &[Edge::new(1, 0)]);
}

#[test]
fn add_edge_refuses_self_loop() {
    let mut g = graph_with(&[(0.0, 0.0)]);
    assert!(!g.add_edge(0, 0));
    assert!(g.edges().is_empty());
}

#[test]
fn add_edge_refuses_dangling_ids() {
    let mut g = graph_with(&[(0.0, 0.0), (10.0, 0.0)]);
    assert!(!g.add_edge(0, 2));
    assert!(!g.add_edge(5, 1));
    assert!(g.edges().is_empty());
}

#[test]
fn has_edge_is_unordered() {
    let mut g = graph_with(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
    g.add_edge(2, 0);
    assert!(g.has_edge(0, 2));
    assert!(g.has_edge(2, 0));
    assert!(!g.has_edge(0, 1));
}

#[test]
fn edges_preserve_insertion_order() {
    let mut g = graph_with(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
    g.add_edge(1, 0);
    g.add_edge(2, 1);
    g.add_edge(0, 2);
    assert_eq!(g.edges(), &[Edge::new(1, 0), Edge::new(2, 1), Edge::new(0, 2)]);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_drops_everything() {
    let mut g = graph_with(&[(0.0, 0.0), (10.0, 0.0)]);
    g.add_edge(0, 1);
    g.clear();
    assert!(g.is_empty());
    assert!(g.edges().is_empty());
    assert_eq!(g.active(), None);
}

#[test]
fn ids_restart_after_clear() {
    let mut g = graph_with(&[(0.0, 0.0), (10.0, 0.0)]);
    g.clear();
    assert_eq!(g.push_vertex(Point::new(1.0, 1.0)), 0);
}
