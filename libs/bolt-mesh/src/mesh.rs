//! # Mesh Data Structure
//!
//! Core mesh representation with vertices and mixed triangle/quad faces.

use glam::DVec3;

/// A polygon face referencing mesh vertices by index.
///
/// Thread geometry is mostly quad strips; triangles appear only where the
/// ramp-out seals against the top cap. Winding order within a face is
/// significant: all faces are wound so their normals point away from the
/// bolt axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// A three-sided face.
    Triangle([u32; 3]),
    /// A four-sided face.
    Quad([u32; 4]),
}

impl Face {
    /// Returns the vertex indices in winding order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        match self {
            Face::Triangle(ix) => ix,
            Face::Quad(ix) => ix,
        }
    }

    /// Returns the number of vertices in the face (3 or 4).
    #[inline]
    pub fn arity(&self) -> usize {
        self.indices().len()
    }

    /// Iterates the face's perimeter edges as directed index pairs,
    /// including the closing edge back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let ix = self.indices();
        (0..ix.len()).map(move |i| (ix[i], ix[(i + 1) % ix.len()]))
    }
}

/// A polygon mesh with vertices and mixed triangle/quad faces.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the host boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use bolt_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Polygon faces (3 or 4 indices each)
    faces: Vec<Face>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push(Face::Triangle([v0, v1, v2]));
    }

    /// Adds a quad by vertex indices.
    pub fn add_quad(&mut self, v0: u32, v1: u32, v2: u32, v3: u32) {
        self.faces.push(Face::Quad([v0, v1, v2, v3]));
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> Face {
        self.faces[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Merges another mesh into this one, offsetting its face indices.
    ///
    /// This is how several bolts are packed into one shared mesh; the
    /// returned offset is the base index of the merged mesh's first vertex,
    /// the value the edge classifier expects for that bolt.
    pub fn merge(&mut self, other: &Mesh) -> u32 {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for face in &other.faces {
            let shifted = match face {
                Face::Triangle([a, b, c]) => Face::Triangle([a + offset, b + offset, c + offset]),
                Face::Quad([a, b, c, d]) => {
                    Face::Quad([a + offset, b + offset, c + offset, d + offset])
                }
            };
            self.faces.push(shifted);
        }

        offset
    }

    /// Validates the mesh indexing invariants.
    ///
    /// Checks:
    /// - All face indices are valid
    /// - No face repeats an index within itself
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for face in &self.faces {
            let ix = face.indices();

            if ix.iter().any(|&v| v >= vertex_count) {
                return false;
            }

            for i in 0..ix.len() {
                for j in i + 1..ix.len() {
                    if ix[i] == ix[j] {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as a flat u32 array for GPU.
    ///
    /// Quads are fanned into two triangles about their first vertex;
    /// existing triangles pass through unchanged. Winding is preserved.
    pub fn triangulated_indices(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.faces.len() * 6);
        for face in &self.faces {
            match face {
                Face::Triangle([a, b, c]) => result.extend_from_slice(&[*a, *b, *c]),
                Face::Quad([a, b, c, d]) => {
                    result.extend_from_slice(&[*a, *b, *c]);
                    result.extend_from_slice(&[*a, *c, *d]);
                }
            }
        }
        result
    }
}
