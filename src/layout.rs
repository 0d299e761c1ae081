//! Arc layout: turns the sorted edge angles around each pivot into arcs and
//! degree labels.
//!
//! A two-edge pivot has exactly one visual angle. Its sorted pair is swapped
//! when going through the `0/2π` boundary is the shorter sweep, and a single
//! arc is drawn at a fixed radius with no label.
//!
//! A pivot with three or more edges gets one arc per gap between consecutive
//! sorted angles, plus the wraparound gap from the largest angle back to the
//! smallest. The radius shrinks as the gap grows, from 34 for a vanishing gap
//! down to 10 for a full turn, so that small angles sharing a pivot stay
//! apart. Every gap is labelled with its size in degrees.
//!
//! All angles are the normalized directions from [`crate::angle`], so arcs
//! and labels land in the vertically opposite angle of the one formed by the
//! edges. Vertical angles are equal, so the measured value is unchanged.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::angle;
use crate::consts::{GAP_ARC_MIN_RADIUS, GAP_ARC_RADIUS_SPAN, LABEL_RADIUS, TAU, TWO_EDGE_ARC_RADIUS};
use crate::geom::Point;
use crate::graph::{Graph, VertexId};
use crate::pivot::{self, PivotGroup};

/// Amount added to a negative gap before it drives the arc radius.
///
/// Sorted consecutive gaps are never negative, so this only affects the
/// wraparound gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapCorrection {
    /// Add `π`. Matches the radius of earlier releases, but disagrees with the
    /// degree label and can push the wraparound arc past the usual radius range.
    HalfTurn,
    /// Add `2π`, the same correction the degree label applies.
    #[default]
    FullTurn,
}

impl WrapCorrection {
    /// Radians added to a negative gap.
    #[must_use]
    pub fn amount(self) -> f64 {
        match self {
            Self::HalfTurn => TAU / 2.0,
            Self::FullTurn => TAU,
        }
    }
}

/// A circular arc swept from `start` to `end` in the canvas' positive angle direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start: f64,
    pub end: f64,
}

/// Text drawn centered on `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point,
}

/// One labelled gap around a pivot with three or more edges.
#[derive(Debug, Clone, PartialEq)]
pub struct GapArc {
    pub arc: Arc,
    /// Gap in radians after the wrap correction; drives the radius.
    pub gap: f64,
    /// Gap in degrees, in `[0, 360)`.
    pub degrees: f64,
    pub label: Label,
}

/// Drawable geometry for a single pivot.
#[derive(Debug, Clone, PartialEq)]
pub enum PivotLayout {
    /// Two incident edges: one unlabelled arc.
    Single { anchor: VertexId, arc: Arc },
    /// Three or more incident edges: one labelled arc per gap.
    Gaps { anchor: VertexId, gaps: Vec<GapArc> },
}

impl PivotLayout {
    /// The pivot vertex this layout belongs to.
    #[must_use]
    pub fn anchor(&self) -> VertexId {
        match self {
            Self::Single { anchor, .. } | Self::Gaps { anchor, .. } => *anchor,
        }
    }
}

/// Order a sorted pair so that sweeping from the first to the second covers
/// the smaller of the two angles they form.
#[must_use]
pub fn order_pair(a0: f64, a1: f64) -> (f64, f64) {
    let direct = (a0 - a1).abs();
    let wrapped = (a1 - (a0 + TAU)).abs();
    if wrapped < direct { (a1, a0) } else { (a0, a1) }
}

/// Radius for a gap of `gap` radians: `(1 - gap/2π)² · 24 + 10`.
#[must_use]
pub fn gap_radius(gap: f64) -> f64 {
    (1.0 - gap / TAU).powi(2) * GAP_ARC_RADIUS_SPAN + GAP_ARC_MIN_RADIUS
}

/// Signed difference `next - current` converted to degrees in `[0, 360)`.
#[must_use]
pub fn gap_degrees(current: f64, next: f64) -> f64 {
    let degrees = (next - current) / TAU * 360.0;
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}

/// Label text for a gap, e.g. `"90.0°"`.
#[must_use]
pub fn format_degrees(degrees: f64) -> String {
    format!("{degrees:.1}°")
}

/// Lay out the gap from `current` to `next` around `center`.
#[must_use]
pub fn gap_arc(center: Point, current: f64, next: f64, correction: WrapCorrection) -> GapArc {
    let diff = next - current;
    let gap = if diff < 0.0 { diff + correction.amount() } else { diff };
    let degrees = gap_degrees(current, next);
    let radius = gap_radius(gap);

    // Halfway along the signed difference; a negative difference points the
    // midpoint across the pivot, so the label radius is flipped back.
    let mid = current + diff * 0.5;
    let label_radius = if diff < 0.0 { -LABEL_RADIUS } else { LABEL_RADIUS };

    GapArc {
        arc: Arc { center, radius, start: current, end: next },
        gap,
        degrees,
        label: Label { text: format_degrees(degrees), position: center.polar_offset(mid, label_radius) },
    }
}

/// Lay out the sorted `angles` of a pivot at `center`.
///
/// Returns `None` for fewer than two angles.
#[must_use]
pub fn layout_angles(anchor: VertexId, center: Point, angles: &[f64], correction: WrapCorrection) -> Option<PivotLayout> {
    match *angles {
        [] | [_] => None,
        [a0, a1] => {
            let (start, end) = order_pair(a0, a1);
            Some(PivotLayout::Single {
                anchor,
                arc: Arc { center, radius: TWO_EDGE_ARC_RADIUS, start, end },
            })
        }
        _ => {
            let n = angles.len();
            let gaps = (0..n)
                .map(|i| gap_arc(center, angles[i], angles[(i + 1) % n], correction))
                .collect();
            Some(PivotLayout::Gaps { anchor, gaps })
        }
    }
}

/// Lay out a single pivot.
#[must_use]
pub fn layout_pivot(graph: &Graph, pivot: &PivotGroup, correction: WrapCorrection) -> Option<PivotLayout> {
    let center = graph.vertex(pivot.anchor)?.position();
    let angles = angle::pivot_angles(graph, pivot);
    layout_angles(pivot.anchor, center, &angles, correction)
}

/// Lay out every pivot of `graph`, in vertex order.
#[must_use]
pub fn layout_graph(graph: &Graph, correction: WrapCorrection) -> Vec<PivotLayout> {
    pivot::find_pivots(graph)
        .iter()
        .filter_map(|p| layout_pivot(graph, p, correction))
        .collect()
}
