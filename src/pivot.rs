#[cfg(test)]
#[path = "pivot_test.rs"]
mod pivot_test;

use crate::graph::{Graph, VertexId};

/// An edge seen from one of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientedEdge {
    pub from: VertexId,
    pub to: VertexId,
}

/// A vertex with two or more incident edges, each oriented away from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotGroup {
    pub anchor: VertexId,
    pub incident: Vec<OrientedEdge>,
}

/// Edges touching `anchor`, oriented so `from == anchor`, in edge insertion order.
#[must_use]
pub fn incident_edges(graph: &Graph, anchor: VertexId) -> Vec<OrientedEdge> {
    graph
        .edges()
        .iter()
        .filter_map(|e| e.other(anchor).map(|to| OrientedEdge { from: anchor, to }))
        .collect()
}

/// Every vertex with at least two incident edges, in vertex order.
#[must_use]
pub fn find_pivots(graph: &Graph) -> Vec<PivotGroup> {
    (0..graph.len())
        .filter_map(|anchor| {
            let incident = incident_edges(graph, anchor);
            (incident.len() >= 2).then_some(PivotGroup { anchor, incident })
        })
        .collect()
}
