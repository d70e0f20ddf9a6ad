//! # Face Assembly
//!
//! Stitches the vertex rings into a consistently wound polygon mesh. All
//! index arithmetic is read from [`ThreadLayout`](super::layout::ThreadLayout);
//! this module only decides which rings connect to which.
//!
//! Face order matches vertex phase order: the shoulder band (when present)
//! is emitted first, then the cap band, then the spiral bands with the
//! closure triangles at the final band. Index ordering within each face is
//! part of the mesh contract: every face is wound so its normal points away
//! from the bolt axis.

use crate::mesh::Mesh;

use super::layout::ThreadLayout;

/// Appends all bolt faces to `mesh`.
pub(super) fn emit(mesh: &mut Mesh, layout: &ThreadLayout) {
    shoulder_band(mesh, layout);
    cap_band(mesh, layout);
    spiral_bands(mesh, layout);
}

/// Quad band joining the shoulder ring to the top cap, wrap-around at the
/// seam. No-op when the shoulder is disabled.
fn shoulder_band(mesh: &mut Mesh, layout: &ThreadLayout) {
    if !layout.has_shoulder() {
        return;
    }
    let n = layout.subdivisions();
    mesh.add_quad(
        layout.shoulder_vertex(n - 1),
        layout.shoulder_vertex(0),
        layout.top_cap(0),
        layout.top_cap(n - 1),
    );
    for i in 0..n - 1 {
        mesh.add_quad(
            layout.shoulder_vertex(i),
            layout.shoulder_vertex(i + 1),
            layout.top_cap(i + 1),
            layout.top_cap(i),
        );
    }
}

/// Band joining the base cap ring to the ramp-in pairs.
///
/// The seam vertex (cap index 0) is indented to root radius, so the first
/// subdivision is stitched with two triangles instead of a quad; the last
/// quad wraps back around to it.
fn cap_band(mesh: &mut Mesh, layout: &ThreadLayout) {
    let n = layout.subdivisions();

    mesh.add_triangle(layout.cap(1), layout.cap(0), layout.root(0));
    mesh.add_triangle(layout.cap(0), layout.crest(0), layout.root(0));

    for i in 1..n {
        let high = layout.cap((i + 1) % n);
        mesh.add_quad(high, layout.cap(i), layout.root(i - 1), layout.root(i));
        mesh.add_quad(
            layout.root(i),
            layout.root(i - 1),
            layout.crest(i - 1),
            layout.crest(i),
        );
    }
}

/// Two quads per band joining pair `t` to the pair one full turn above it,
/// walking the whole helix; the final band also seals the ramp-out's odd
/// vertex count against the top cap seam with two triangles.
fn spiral_bands(mesh: &mut Mesh, layout: &ThreadLayout) {
    let n = layout.subdivisions();
    let bands = layout.spiral_band_count();
    let eol = layout.eol();

    for t in 0..bands {
        let prev = if t == 0 {
            layout.cap(0)
        } else {
            layout.crest(t - 1)
        };
        let below = layout.root(t + n - 1);
        let above = layout.root(t + n);

        mesh.add_quad(layout.crest(t), prev, below, above);
        mesh.add_quad(above, below, layout.crest(t + n - 1), layout.crest(t + n));

        if t == bands - 1 {
            mesh.add_triangle(eol, layout.crest(t), above);
            mesh.add_triangle(eol, above, layout.crest(t + n));
        }
    }
}
