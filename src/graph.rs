//! Graph model: vertices, edges, and the in-memory store that owns them.
//!
//! Vertices live in an append-only sequence and are identified by their
//! index, which is never reused. Edges are unordered pairs of distinct vertex
//! ids kept in insertion order. Every mutation path preserves three
//! invariants: edge endpoints index existing vertices and differ, no two
//! edges join the same pair, and at most one vertex is active.
//!
//! The interaction state machine is the only writer during a session; the
//! pivot finder and renderer read through `vertices` and `edges`.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use crate::geom::Point;

/// Index of a vertex in creation order.
pub type VertexId = usize;

/// A clicked point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Horizontal position in canvas-local pixels.
    pub x: f64,
    /// Vertical position in canvas-local pixels (positive = down).
    pub y: f64,
    /// Whether this is the vertex the next edge will start from.
    pub active: bool,
}

impl Vertex {
    /// Position of the vertex as a point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// An unordered connection between two distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
}

impl Edge {
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self { a, b }
    }

    /// Whether this edge joins `x` and `y` in either order.
    #[must_use]
    pub fn joins(&self, x: VertexId, y: VertexId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// Whether `v` is one of the two endpoints.
    #[must_use]
    pub fn touches(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint.
    #[must_use]
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if self.a == v {
            Some(self.b)
        } else if self.b == v {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Vertex sequence plus edge set.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an active vertex at `pt`, deactivating every other vertex.
    /// Returns the new vertex's id.
    pub fn push_vertex(&mut self, pt: Point) -> VertexId {
        self.clear_active();
        self.vertices.push(Vertex { x: pt.x, y: pt.y, active: true });
        self.vertices.len() - 1
    }

    /// Add the edge `{a, b}` unless it already exists.
    ///
    /// Returns `true` if an edge was inserted. Self-loops and ids that do not
    /// name an existing vertex are refused and return `false`.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        if a == b || a >= self.vertices.len() || b >= self.vertices.len() {
            return false;
        }
        if self.has_edge(a, b) {
            return false;
        }
        self.edges.push(Edge::new(a, b));
        true
    }

    /// Whether an edge joins `a` and `b` in either order.
    #[must_use]
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edges.iter().any(|e| e.joins(a, b))
    }

    /// The currently active vertex, if any.
    #[must_use]
    pub fn active(&self) -> Option<VertexId> {
        self.vertices.iter().position(|v| v.active)
    }

    /// Make `id` the only active vertex. Returns false if `id` doesn't exist.
    pub fn set_active(&mut self, id: VertexId) -> bool {
        if id >= self.vertices.len() {
            return false;
        }
        self.clear_active();
        self.vertices[id].active = true;
        true
    }

    /// Deactivate every vertex.
    pub fn clear_active(&mut self) {
        for v in &mut self.vertices {
            v.active = false;
        }
    }

    /// Drop every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    /// Return a vertex by id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// All vertices in creation order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
