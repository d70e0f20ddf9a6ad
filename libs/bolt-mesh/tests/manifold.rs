//! End-to-end mesh topology properties of the generated bolt.

use std::collections::HashMap;

use glam::DVec3;

use bolt_mesh::{classify_edge, generate, BoltParams, Edge, EdgeRole, Mesh};

/// Counts how many faces share each undirected edge.
fn edge_face_counts(mesh: &Mesh) -> HashMap<(u32, u32), u32> {
    let mut counts = HashMap::new();
    for face in mesh.faces() {
        for (a, b) in face.edges() {
            let key = (a.min(b), a.max(b));
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

/// Newell's formula for the (unnormalized) polygon normal.
fn newell_normal(mesh: &Mesh, indices: &[u32]) -> DVec3 {
    let mut normal = DVec3::ZERO;
    for i in 0..indices.len() {
        let p = mesh.vertex(indices[i]);
        let q = mesh.vertex(indices[(i + 1) % indices.len()]);
        normal.x += (p.y - q.y) * (p.z + q.z);
        normal.y += (p.z - q.z) * (p.x + q.x);
        normal.z += (p.x - q.x) * (p.y + q.y);
    }
    normal
}

fn centroid(mesh: &Mesh, indices: &[u32]) -> DVec3 {
    let sum: DVec3 = indices.iter().map(|&i| mesh.vertex(i)).sum();
    sum / indices.len() as f64
}

#[test]
fn thread_strips_are_manifold() {
    let params = BoltParams::default();
    let mesh = generate(&params).unwrap();
    let counts = edge_face_counts(&mesh);

    // No edge is shared by more than two faces.
    assert!(counts.values().all(|&c| c <= 2));

    // The mesh is open exactly at the two cap rings.
    let boundary: Vec<_> = counts
        .iter()
        .filter(|(_, &c)| c == 1)
        .map(|(&e, _)| e)
        .collect();
    assert_eq!(boundary.len() as u32, 2 * params.subdivisions);

    let vcount = mesh.vertex_count() as u32;
    for (a, b) in boundary {
        assert_eq!(
            classify_edge(0, Edge::new(a, b), params.subdivisions, vcount),
            EdgeRole::Cap,
            "boundary edge ({a}, {b}) should lie on a cap"
        );
    }
}

#[test]
fn shouldered_bolt_is_open_at_base_and_shoulder() {
    let params = BoltParams {
        shoulder: 0.5,
        ..Default::default()
    };
    let mesh = generate(&params).unwrap();
    let layout = params.layout();
    let counts = edge_face_counts(&mesh);

    assert!(counts.values().all(|&c| c <= 2));

    let shoulder_start = layout.thread_vertex_count();
    let mut base_edges = 0;
    let mut shoulder_edges = 0;
    for (&(a, b), &c) in &counts {
        if c != 1 {
            continue;
        }
        if b < params.subdivisions {
            base_edges += 1;
        } else if a >= shoulder_start {
            shoulder_edges += 1;
        } else {
            panic!("boundary edge ({a}, {b}) off both open rings");
        }
    }
    assert_eq!(base_edges, params.subdivisions);
    assert_eq!(shoulder_edges, params.subdivisions);

    // The top cap ring is interior once the shoulder band covers it.
    for i in 0..params.subdivisions {
        let a = layout.top_cap(i);
        let b = layout.top_cap((i + 1) % params.subdivisions);
        let key = (a.min(b), a.max(b));
        assert_eq!(counts.get(&key), Some(&2));
    }
}

#[test]
fn all_faces_wind_outward() {
    let cases = [
        BoltParams::default(),
        BoltParams {
            shoulder: 0.5,
            ..Default::default()
        },
        BoltParams {
            radius: 2.5,
            subdivisions: 12,
            step: 0.4,
            loops: 7,
            ident: 0.2,
            shoulder: 1.0,
        },
        BoltParams {
            subdivisions: 3,
            loops: 2,
            ..Default::default()
        },
    ];

    for params in cases {
        let mesh = generate(&params).unwrap();
        for (i, face) in mesh.faces().iter().enumerate() {
            let normal = newell_normal(&mesh, face.indices());
            let radial = centroid(&mesh, face.indices());
            let dot = normal.x * radial.x + normal.y * radial.y;
            assert!(
                dot >= -1.0e-9,
                "face {i} of {params:?} winds inward (dot = {dot})"
            );
        }
    }
}

#[test]
fn face_indices_are_valid_and_distinct() {
    for loops in 2..8 {
        let params = BoltParams {
            loops,
            ..Default::default()
        };
        let mesh = generate(&params).unwrap();
        assert!(mesh.validate());
    }
}

#[test]
fn packed_bolts_classify_independently() {
    let params = BoltParams::default();
    let first = generate(&params).unwrap();
    let second = generate(&params).unwrap();

    let mut packed = first;
    let offset = packed.merge(&second);
    assert_eq!(offset, 86);

    let sub = params.subdivisions;
    let vcount = params.layout().thread_vertex_count();

    // A crest edge of the second bolt, addressed through its offset.
    let crest = Edge::new(offset + sub + 1, offset + sub + 3);
    assert_eq!(classify_edge(offset, crest, sub, vcount), EdgeRole::Outer);

    // The same absolute edge does not belong to the first bolt's crest.
    assert_eq!(classify_edge(0, crest, sub, vcount), EdgeRole::None);

    // Edges of the first bolt sit before the second bolt's range.
    let early = Edge::new(0, 1);
    assert_eq!(classify_edge(offset, early, sub, vcount), EdgeRole::None);
    assert_eq!(classify_edge(0, early, sub, vcount), EdgeRole::Cap);
}

#[test]
fn host_export_round_trip() {
    let mesh = generate(&BoltParams::default()).unwrap();

    let flat = mesh.vertices_f32();
    assert_eq!(flat.len(), mesh.vertex_count() * 3);

    // 76 quads fan into two triangles each, plus 4 native triangles.
    let indices = mesh.triangulated_indices();
    assert_eq!(indices.len(), (76 * 2 + 4) * 3);
    let vcount = mesh.vertex_count() as u32;
    assert!(indices.iter().all(|&i| i < vcount));
}
