//! # Bolt Mesh
//!
//! Procedural mesh generation for threaded cylindrical bolts.
//!
//! ## Architecture
//!
//! ```text
//! BoltParams → bolt (vertex rings + face assembly) → Mesh
//!                                                      ↓
//!                        classify (edge role queries over the index layout)
//! ```
//!
//! Two independent pieces compose by plain data flow:
//!
//! - **Builder**: [`generate`] lays out vertex rings along a helix with a
//!   smooth ramp-in and ramp-out, then stitches them into a consistently
//!   wound polygon mesh. Pure function: parameters in, mesh out.
//! - **Classifier**: [`classify_edge`] answers, for an edge of an existing
//!   mesh, whether it runs along the thread's outer crest, its inner root
//!   groove, or one of the two end caps. It consumes the builder's index
//!   layout; it produces no geometry.
//!
//! The host environment owns everything beyond the mesh value: scene
//! objects, undo, and UI live on its side of the boundary.
//!
//! ## Usage
//!
//! ```rust
//! use bolt_mesh::{generate, BoltParams};
//!
//! let mesh = generate(&BoltParams::default())?;
//! assert_eq!(mesh.vertex_count(), 86);
//! # Ok::<(), bolt_mesh::MeshError>(())
//! ```

pub mod bolt;
pub mod classify;
pub mod error;
pub mod mesh;

pub use bolt::{create_bolt, BoltParams, RingRange, RingRole, ThreadLayout};
pub use classify::{classify_edge, is_cap, is_inner, is_outer, Edge, EdgeRole};
pub use error::MeshError;
pub use mesh::{Face, Mesh};

/// Generates a threaded bolt mesh.
///
/// This is the sole construction entry point; hosts turn the returned
/// vertices and faces into a renderable scene object.
///
/// # Arguments
///
/// * `params` - Bolt parameters; see [`BoltParams`]
///
/// # Returns
///
/// A mesh containing vertices and mixed quad/triangle faces.
///
/// # Example
///
/// ```rust
/// use bolt_mesh::{generate, BoltParams};
///
/// let mesh = generate(&BoltParams {
///     shoulder: 0.5,
///     ..Default::default()
/// })?;
/// assert_eq!(mesh.vertex_count(), 94);
/// # Ok::<(), bolt_mesh::MeshError>(())
/// ```
pub fn generate(params: &BoltParams) -> Result<Mesh, MeshError> {
    bolt::create_bolt(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_bolt() {
        let mesh = generate(&BoltParams::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 86);
        assert_eq!(mesh.face_count(), 80);
        assert!(mesh.validate());
    }

    #[test]
    fn test_generate_rejects_flat_bolt() {
        let params = BoltParams {
            loops: 1,
            ..Default::default()
        };
        assert!(generate(&params).is_err());
    }

    #[test]
    fn test_generated_layout_feeds_classifier() {
        let params = BoltParams::default();
        let mesh = generate(&params).unwrap();
        let layout = params.layout();

        let vcount = mesh.vertex_count() as u32;
        assert_eq!(vcount, layout.thread_vertex_count());

        // The seam-to-seam edge closes the boundary between the two caps.
        let edge = Edge::new(0, layout.eol());
        assert_eq!(
            classify_edge(0, edge, params.subdivisions, vcount),
            EdgeRole::Cap
        );
    }
}
