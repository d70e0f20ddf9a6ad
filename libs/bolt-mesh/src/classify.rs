//! # Edge Role Classification
//!
//! Pure topology queries over a bolt's index layout: given an edge of an
//! already-built mesh, decide whether it runs along the thread's outer
//! crest, its inner root groove, or one of the two end caps.
//!
//! The predicates assume the vertex stride pattern the builder produces for
//! a threaded body (no shoulder): a base cap ring of `subdivisions`
//! vertices followed by interleaved root/crest pairs, with
//! `eol = vcount - 2 * subdivisions + 1` marking the crest where the top
//! cap begins. `offset` is the index of the bolt's first vertex inside the
//! containing mesh, so several bolts can be packed into one mesh and
//! queried independently; an edge outside the bolt's range is simply not a
//! member of any role.
//!
//! Membership is a closed-form check against the stride sets (parity and
//! bounds), so each call is O(1) for the rim roles and O(subdivisions) for
//! the caps. Calls are independent and safe to evaluate concurrently over a
//! batch of edges.

use serde::{Deserialize, Serialize};

/// An undirected edge between two vertices of a mesh, by absolute index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// One endpoint's vertex index.
    pub v1: u32,
    /// The other endpoint's vertex index.
    pub v2: u32,
}

impl Edge {
    /// Creates an edge between two vertex indices.
    pub fn new(v1: u32, v2: u32) -> Self {
        Self { v1, v2 }
    }
}

/// Role of an edge within a bolt's thread topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeRole {
    /// The edge runs along the thread's outer crest.
    Outer,
    /// The edge runs along the thread's inner root groove.
    Inner,
    /// The edge lies on one of the two flat end caps.
    Cap,
    /// The edge belongs to neither rim nor cap (or not to this bolt).
    None,
}

/// Classifies an edge of a bolt's mesh.
///
/// Roles overlap at the seam vertices (the indented cap vertex and `eol`
/// belong to every stride set), so the cap verdict takes precedence over
/// outer, and outer over inner.
///
/// # Arguments
///
/// * `offset` - Index of this bolt's first vertex in the containing mesh
/// * `edge` - Edge between two absolute vertex indices
/// * `subdivisions` - Angular resolution the bolt was built with
/// * `vcount` - Vertex count of the bolt's threaded body
///
/// # Example
///
/// ```rust
/// use bolt_mesh::classify::{classify_edge, Edge, EdgeRole};
///
/// // Default bolt: 8 subdivisions, 86 vertices, eol = 71.
/// assert_eq!(classify_edge(0, Edge::new(0, 71), 8, 86), EdgeRole::Cap);
/// assert_eq!(classify_edge(0, Edge::new(9, 11), 8, 86), EdgeRole::Outer);
/// assert_eq!(classify_edge(0, Edge::new(8, 10), 8, 86), EdgeRole::Inner);
/// ```
pub fn classify_edge(offset: u32, edge: Edge, subdivisions: u32, vcount: u32) -> EdgeRole {
    if is_cap(offset, edge, subdivisions, vcount) {
        EdgeRole::Cap
    } else if is_outer(offset, edge, subdivisions, vcount) {
        EdgeRole::Outer
    } else if is_inner(offset, edge, subdivisions, vcount) {
        EdgeRole::Inner
    } else {
        EdgeRole::None
    }
}

/// Returns true if the edge runs along the thread's outer crest.
///
/// Both endpoints must lie on the crest stride: local index 0 or `eol`, or
/// any of `subdivisions + 1, subdivisions + 3, ..` up to `vcount`.
pub fn is_outer(offset: u32, edge: Edge, subdivisions: u32, vcount: u32) -> bool {
    let Some((v1, v2)) = local_indices(offset, edge) else {
        return false;
    };
    let n = i64::from(subdivisions);
    let vc = i64::from(vcount);
    on_rim_stride(v1, n + 1, n, vc) && on_rim_stride(v2, n + 1, n, vc)
}

/// Returns true if the edge runs along the thread's inner root groove.
///
/// Identical to [`is_outer`] but with the stride starting at
/// `subdivisions`, the root positions of the interleaved pairs.
pub fn is_inner(offset: u32, edge: Edge, subdivisions: u32, vcount: u32) -> bool {
    let Some((v1, v2)) = local_indices(offset, edge) else {
        return false;
    };
    let n = i64::from(subdivisions);
    let vc = i64::from(vcount);
    on_rim_stride(v1, n, n, vc) && on_rim_stride(v2, n, n, vc)
}

/// Returns true if the edge lies on one of the two flat end caps.
///
/// Each endpoint must match a base cap position `i` or a top cap position
/// `eol + 2i` for some subdivision index `i`.
pub fn is_cap(offset: u32, edge: Edge, subdivisions: u32, vcount: u32) -> bool {
    let Some((v1, v2)) = local_indices(offset, edge) else {
        return false;
    };
    let n = i64::from(subdivisions);
    let eol = i64::from(vcount) - 2 * n + 1;
    on_cap(v1, n, eol) && on_cap(v2, n, eol)
}

/// Translates both endpoints to bolt-local indices; `None` when the edge
/// starts before this bolt's range (non-membership, not an error).
fn local_indices(offset: u32, edge: Edge) -> Option<(i64, i64)> {
    let v1 = i64::from(edge.v1) - i64::from(offset);
    let v2 = i64::from(edge.v2) - i64::from(offset);
    (v1 >= 0 && v2 >= 0).then_some((v1, v2))
}

/// Membership in a rim stride set: the two seam vertices (0 and `eol`)
/// plus the arithmetic progression `start, start + 2, ..` bounded by
/// `vcount`.
fn on_rim_stride(v: i64, start: i64, subdivisions: i64, vcount: i64) -> bool {
    let eol = vcount - 2 * subdivisions + 1;
    v == 0 || v == eol || (v >= start && v <= vcount && (v - start) % 2 == 0)
}

/// Membership in either cap ring: base positions `[0, subdivisions)` or
/// top cap positions `eol, eol + 2, ..` for one ring's worth of strides.
fn on_cap(v: i64, subdivisions: i64, eol: i64) -> bool {
    (0..subdivisions).contains(&v)
        || (v >= eol && v <= eol + 2 * (subdivisions - 1) && (v - eol) % 2 == 0)
}
