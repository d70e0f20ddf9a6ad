//! # Vertex Emission
//!
//! Lays out the bolt's vertices in five ordered phases, appending to one
//! growing buffer so that the indices match [`ThreadLayout`](super::layout::ThreadLayout)
//! exactly:
//!
//! 1. Base cap ring, with the single indented seam vertex at index 0
//! 2. Ramp-in: the first loop, axial rise accelerating from the flat cap
//! 3. Steady turns: constant pitch, alternating root/crest
//! 4. Ramp-out: the final loop, roots rising by half-steps while every
//!    crest sits on the flat top cap
//! 5. Optional shoulder ring at full radius
//!
//! The axial displacement of the steady turns is accumulated, not computed
//! in closed form, so the ramp-out continues from the exact running value.

use std::f64::consts::PI;

use glam::DVec3;

use crate::mesh::Mesh;

use super::layout::ThreadLayout;
use super::BoltParams;

/// Cylindrical parametrization used throughout: angle, radius, axial offset.
#[inline]
fn ring_point(angle: f64, radius: f64, z: f64) -> DVec3 {
    DVec3::new(radius * angle.sin(), radius * angle.cos(), z)
}

/// Appends all bolt vertices to `mesh` in layout order.
pub(super) fn emit(mesh: &mut Mesh, params: &BoltParams, layout: &ThreadLayout) {
    let n = layout.subdivisions();
    let nf = n as f64;
    let step = params.step;
    let radius = params.radius;
    let root_radius = params.radius - params.ident;

    // Base cap ring. The ring starts one angular step early so the seam
    // vertex at index 0 sits where the thread groove begins.
    for i in 0..n {
        let angle = PI * 2.0 * (i as f64 - 1.0) / nf;
        let r = if i == 0 { root_radius } else { radius };
        mesh.add_vertex(ring_point(angle, r, 0.0));
    }
    debug_assert_eq!(mesh.vertex_count() as u32, layout.base_cap_ring().end);

    // Ramp-in: the root rises linearly, the crest twice as fast, so the
    // helix leaves the flat cap smoothly.
    for i in 0..n {
        let angle = PI * 2.0 * i as f64 / nf;
        let h = (i as f64 + 1.0) * step / (nf * 2.0);
        mesh.add_vertex(ring_point(angle, root_radius, h));
        mesh.add_vertex(ring_point(angle, radius, h * 2.0));
    }
    debug_assert_eq!(mesh.vertex_count() as u32, layout.ramp_in_ring().end);

    // Steady turns: one step of axial displacement per full loop.
    let half_step = step / 2.0;
    let mut disp = 0.0;
    for _ in 0..layout.loops().saturating_sub(2) {
        for i in 0..n {
            let angle = PI * 2.0 * i as f64 / nf;
            disp += step / nf;
            mesh.add_vertex(ring_point(angle, root_radius, disp + half_step));
            mesh.add_vertex(ring_point(angle, radius, disp + half_step * 2.0));
        }
    }
    debug_assert_eq!(mesh.vertex_count() as u32, layout.turn_ring().end);

    // Ramp-out: roots keep climbing by half-steps, crests flatten onto the
    // top cap height. One pair fewer than a full ring; the crest of the
    // last steady pair (eol) completes the top cap.
    let top_height = disp + half_step * 2.0;
    let mut root_height = disp + half_step;
    for i in 0..n - 1 {
        root_height += step / nf / 2.0;
        let angle = PI * 2.0 * i as f64 / nf;
        mesh.add_vertex(ring_point(angle, root_radius, root_height));
        mesh.add_vertex(ring_point(angle, radius, top_height));
    }
    debug_assert_eq!(mesh.vertex_count() as u32, layout.thread_vertex_count());

    // Shoulder ring: plain cylinder cap at full radius, angularly aligned
    // with the base cap.
    if layout.has_shoulder() {
        for i in 0..n {
            let angle = PI * 2.0 * (i as f64 - 1.0) / nf;
            mesh.add_vertex(ring_point(angle, radius, top_height + params.shoulder));
        }
    }
    debug_assert_eq!(mesh.vertex_count() as u32, layout.vertex_count());
}
