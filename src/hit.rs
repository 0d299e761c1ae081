#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::graph::{Vertex, VertexId};

/// How to choose between several vertices whose hit boxes all contain the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectPolicy {
    /// Earliest-created vertex wins.
    #[default]
    First,
    /// Smallest `|dx| + |dy|` wins; ties go to the earliest-created vertex.
    Nearest,
}

/// Whether `pt` falls inside the square hit box of side `size` around `v`.
/// Both axes are tested with a strict `<` against half the size.
#[must_use]
pub fn vertex_contains(v: &Vertex, pt: Point, size: f64) -> bool {
    let half = size * 0.5;
    (v.x - pt.x).abs() < half && (v.y - pt.y).abs() < half
}

/// Find the vertex under `pt`, if any.
#[must_use]
pub fn select(vertices: &[Vertex], pt: Point, size: f64, policy: SelectPolicy) -> Option<VertexId> {
    let mut hits = vertices
        .iter()
        .enumerate()
        .filter(|(_, v)| vertex_contains(v, pt, size));

    match policy {
        SelectPolicy::First => hits.next().map(|(i, _)| i),
        SelectPolicy::Nearest => {
            let mut best: Option<(VertexId, f64)> = None;
            for (i, v) in hits {
                let dist = (v.x - pt.x).abs() + (v.y - pt.y).abs();
                if best.is_none_or(|(_, d)| dist < d) {
                    best = Some((i, dist));
                }
            }
            best.map(|(i, _)| i)
        }
    }
}
