//! # Bolt Primitive
//!
//! Generates the threaded bolt mesh: a helical thread with smooth ramp-in
//! and ramp-out joining two flat end caps, and an optional cylindrical
//! shoulder.
//!
//! ## Algorithm
//!
//! 1. Vertices are appended in five ordered phases (base cap, ramp-in,
//!    steady turns, ramp-out, shoulder); see [`layout`] for the resulting
//!    index layout and `vertices` for the phases.
//! 2. Faces are assembled afterwards from the layout's symbolic ring
//!    boundaries: a cap band, two quads per spiral band, closure triangles
//!    at the top cap seam, and a shoulder band.
//!
//! The thread groove runs between the crest ring (full radius) and the
//! root ring (radius minus the indentation).

mod faces;
mod layout;
mod vertices;


pub use layout::{RingRange, RingRole, ThreadLayout};

use config::constants::{
    DEFAULT_IDENT, DEFAULT_LOOPS, DEFAULT_RADIUS, DEFAULT_SHOULDER, DEFAULT_STEP,
    DEFAULT_SUBDIVISIONS, MIN_LOOPS, MIN_SUBDIVISIONS,
};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Parameters for bolt generation.
///
/// Serializable so hosts can persist parameter presets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoltParams {
    /// Distance from the axis to the thread crest
    pub radius: f64,
    /// Angular resolution per ring
    pub subdivisions: u32,
    /// Axial distance covered by one full thread loop
    pub step: f64,
    /// Number of helical turns
    pub loops: u32,
    /// Radial indentation of the thread root (thread depth)
    pub ident: f64,
    /// Axial length of the terminal shoulder; 0 disables it
    pub shoulder: f64,
}

impl Default for BoltParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            subdivisions: DEFAULT_SUBDIVISIONS,
            step: DEFAULT_STEP,
            loops: DEFAULT_LOOPS,
            ident: DEFAULT_IDENT,
            shoulder: DEFAULT_SHOULDER,
        }
    }
}

impl BoltParams {
    /// The index layout this parameter set produces.
    pub fn layout(&self) -> ThreadLayout {
        ThreadLayout::new(self.subdivisions, self.loops, self.shoulder > 0.0)
    }
}

/// Creates a threaded bolt mesh.
///
/// # Arguments
///
/// * `params` - Bolt parameters; see [`BoltParams`]
///
/// # Returns
///
/// A mesh whose vertex and face order is deterministic: identical
/// parameters yield bit-identical output.
///
/// # Example
///
/// ```rust
/// use bolt_mesh::bolt::{create_bolt, BoltParams};
///
/// let mesh = create_bolt(&BoltParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 86);
/// assert_eq!(mesh.face_count(), 80);
/// ```
pub fn create_bolt(params: &BoltParams) -> Result<Mesh, MeshError> {
    if params.radius <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "bolt radius must be positive: {}",
            params.radius
        )));
    }

    if params.subdivisions < MIN_SUBDIVISIONS {
        return Err(MeshError::invalid_parameter(format!(
            "bolt subdivisions must be at least {}: {}",
            MIN_SUBDIVISIONS, params.subdivisions
        )));
    }

    if params.step <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "bolt step must be positive: {}",
            params.step
        )));
    }

    if params.loops < MIN_LOOPS {
        return Err(MeshError::invalid_parameter(format!(
            "bolt loops must be at least {}: {}",
            MIN_LOOPS, params.loops
        )));
    }

    if params.ident < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "bolt ident must be non-negative: {}",
            params.ident
        )));
    }

    if params.shoulder < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "bolt shoulder must be non-negative: {}",
            params.shoulder
        )));
    }

    let layout = params.layout();
    let mut mesh = Mesh::with_capacity(
        layout.vertex_count() as usize,
        layout.face_count() as usize,
    );

    vertices::emit(&mut mesh, params, &layout);
    faces::emit(&mut mesh, &layout);

    debug_assert_eq!(mesh.face_count() as u32, layout.face_count());

    Ok(mesh)
}
