//! Direction angles of the edges leaving a pivot.
//!
//! `atan2` yields `(-π, π]`; shifting by `π` puts every direction on the
//! single unbroken range `(0, 2π]`, so the angles around one anchor can be
//! sorted and compared directly.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use std::f64::consts::PI;

use crate::graph::{Graph, Vertex};
use crate::pivot::PivotGroup;

/// Normalized direction from `anchor` toward `other`, in `(0, 2π]`.
#[must_use]
pub fn direction(anchor: &Vertex, other: &Vertex) -> f64 {
    (other.y - anchor.y).atan2(other.x - anchor.x) + PI
}

/// Directions of every incident edge of `pivot`, sorted ascending.
///
/// Edges whose far endpoint is missing from `graph` are skipped.
#[must_use]
pub fn pivot_angles(graph: &Graph, pivot: &PivotGroup) -> Vec<f64> {
    let Some(anchor) = graph.vertex(pivot.anchor) else {
        return Vec::new();
    };
    let mut angles: Vec<f64> = pivot
        .incident
        .iter()
        .filter_map(|e| graph.vertex(e.to))
        .map(|other| direction(anchor, other))
        .collect();
    angles.sort_by(f64::total_cmp);
    angles
}
