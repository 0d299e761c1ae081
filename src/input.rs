//! Input model: the pointer-up event and the click state machine.
//!
//! Every click is a single pointer-up at canvas-local coordinates. The machine
//! has two states, derived from the graph rather than stored beside it:
//! `Idle` when no vertex is active (only before the first click or after a
//! clear) and `Anchored` when exactly one is. A click either lands on an
//! existing vertex or creates a new one, and in both cases connects the
//! result to the previous anchor before making it the new anchor.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::graph::{Graph, VertexId};
use crate::hit::{self, SelectPolicy};

/// Pointer released at a canvas-local position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerUp {
    pub x: f64,
    pub y: f64,
}

impl PointerUp {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Current state of the click state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No vertex is active; the next click starts a fresh chain.
    #[default]
    Idle,
    /// A vertex is active and will be connected to the next click.
    Anchored(VertexId),
}

impl InteractionState {
    /// Read the state off the graph's active flag.
    #[must_use]
    pub fn of(graph: &Graph) -> Self {
        graph.active().map_or(Self::Idle, Self::Anchored)
    }
}

/// What a single pointer-up did to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The click missed every vertex, so a new one was appended.
    /// `edge_from` is the previous anchor it was connected to.
    VertexCreated { id: VertexId, edge_from: Option<VertexId> },
    /// The click hit `target`; `edge_added` reports whether `{target, from}`
    /// was new.
    Connected { target: VertexId, from: VertexId, edge_added: bool },
    /// The click hit a vertex with nothing to connect it to: either the
    /// active vertex itself, or any vertex while idle.
    Reanchored { target: VertexId },
}

impl Interaction {
    /// The vertex that is active after the click.
    #[must_use]
    pub fn anchor(self) -> VertexId {
        match self {
            Self::VertexCreated { id, .. } => id,
            Self::Connected { target, .. } | Self::Reanchored { target } => target,
        }
    }

    /// Whether the click added a vertex or an edge.
    #[must_use]
    pub fn mutated_topology(self) -> bool {
        match self {
            Self::VertexCreated { .. } => true,
            Self::Connected { edge_added, .. } => edge_added,
            Self::Reanchored { .. } => false,
        }
    }
}

/// Apply one pointer-up to `graph` in place.
///
/// `hit_size` is the vertex hit-box side length and `policy` decides between
/// overlapping hit boxes.
pub fn apply_pointer_up(graph: &mut Graph, event: PointerUp, hit_size: f64, policy: SelectPolicy) -> Interaction {
    let pt = event.point();
    let target = hit::select(graph.vertices(), pt, hit_size, policy);
    let previous = graph.active();
    graph.clear_active();

    let Some(target) = target else {
        let id = graph.push_vertex(pt);
        if let Some(from) = previous {
            graph.add_edge(id, from);
        }
        return Interaction::VertexCreated { id, edge_from: previous };
    };

    graph.set_active(target);
    match previous {
        Some(from) if from != target => {
            let edge_added = graph.add_edge(target, from);
            Interaction::Connected { target, from, edge_added }
        }
        _ => Interaction::Reanchored { target },
    }
}

/// Pure form of [`apply_pointer_up`]: consumes a graph and returns the
/// updated graph together with what happened.
#[must_use]
pub fn transition(mut graph: Graph, event: PointerUp, hit_size: f64, policy: SelectPolicy) -> (Graph, Interaction) {
    let interaction = apply_pointer_up(&mut graph, event, hit_size, policy);
    (graph, interaction)
}
