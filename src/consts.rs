//! Shared numeric constants for the angle engine.

use std::f64::consts::PI;

// ── Math ────────────────────────────────────────────────────────

/// One full turn in radians.
pub const TAU: f64 = 2.0 * PI;

// ── Hit-testing ─────────────────────────────────────────────────

/// Side length of the square drawn for a vertex, also its hit box.
pub const VERTEX_SIZE: f64 = 12.0;

// ── Arc layout ──────────────────────────────────────────────────

/// Radius of the single arc drawn at a two-edge pivot.
pub const TWO_EDGE_ARC_RADIUS: f64 = 24.0;

/// Smallest radius a gap arc can collapse to (a gap of a full turn).
pub const GAP_ARC_MIN_RADIUS: f64 = 10.0;

/// Extra radius added for a vanishing gap, scaled by `(1 - gap/2π)²`.
pub const GAP_ARC_RADIUS_SPAN: f64 = 24.0;

/// Distance from the anchor to a gap's degree label.
pub const LABEL_RADIUS: f64 = 36.0;

// ── Canvas sizing ───────────────────────────────────────────────

/// Canvas never grows wider than this many CSS pixels.
pub const CANVAS_MAX_WIDTH: f64 = 860.0;

/// Canvas never shrinks narrower than this many CSS pixels.
pub const CANVAS_MIN_WIDTH: f64 = 320.0;

/// Share of the window width used between the two width limits.
pub const CANVAS_WIDTH_RATIO: f64 = 0.95;

/// Share of the window height reserved below the canvas.
pub const CANVAS_BOTTOM_MARGIN_RATIO: f64 = 0.08;
