//! # Thread Index Layout
//!
//! Ring descriptors for the bolt's vertex buffer.
//!
//! The builder appends vertices in five ordered phases, so every later
//! phase refers to earlier vertices purely by index arithmetic. This module
//! owns that arithmetic: face assembly and tests read ring boundaries
//! symbolically (`cap`, `root`, `crest`, `eol`, `top_cap`) instead of
//! recomputing offsets at each use site.
//!
//! ## Index layout
//!
//! With `n` subdivisions and `l` loops, the threaded body occupies
//! `n*(2l + 1) - 2` indices:
//!
//! ```text
//! [0, n)              base cap ring (index 0 is the indented seam vertex)
//! [n, 3n)             ramp-in pairs, interleaved root/crest
//! [3n, 3n + 2n(l-2))  steady turn pairs
//! [.., body_end)      ramp-out pairs (n - 1 of them)
//! [body_end, +n)      shoulder ring, only when the shoulder is enabled
//! ```
//!
//! Root/crest pairs are numbered globally across ramp-in, turns, and
//! ramp-out: pair `p` occupies indices `n + 2p` (root) and `n + 2p + 1`
//! (crest). The top cap is the crest of the last steady pair (`eol`)
//! followed by the ramp-out crests, a stride-2 run `eol, eol+2, ..`.

/// Role of a vertex ring within the bolt's index layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingRole {
    /// The flat ring at z = 0, including the indented seam vertex.
    BaseCap,
    /// The first helical loop, rising from the base cap.
    RampIn,
    /// The steady-state helical turns.
    Turn,
    /// The final loop, flattening onto the top cap.
    RampOut,
    /// The optional cylindrical shoulder ring.
    ShoulderCap,
}

/// A contiguous, role-tagged index range in the vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingRange {
    /// Which ring of the bolt this range holds.
    pub role: RingRole,
    /// First vertex index of the range.
    pub start: u32,
    /// One past the last vertex index of the range.
    pub end: u32,
}

impl RingRange {
    /// Number of vertices in the range.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns true if the range holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Symbolic index layout for one bolt's vertex buffer.
///
/// Constructed once per build from the subdivision and loop counts; all
/// accessors are pure index arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadLayout {
    subdivisions: u32,
    loops: u32,
    has_shoulder: bool,
}

impl ThreadLayout {
    /// Creates the layout for a bolt with the given resolution.
    ///
    /// Callers are expected to have validated `subdivisions >= 3` and
    /// `loops >= 2`; the arithmetic here assumes both.
    pub fn new(subdivisions: u32, loops: u32, has_shoulder: bool) -> Self {
        Self {
            subdivisions,
            loops,
            has_shoulder,
        }
    }

    /// Angular resolution per ring.
    #[inline]
    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    /// Number of helical turns.
    #[inline]
    pub fn loops(&self) -> u32 {
        self.loops
    }

    /// Whether a shoulder ring follows the threaded body.
    #[inline]
    pub fn has_shoulder(&self) -> bool {
        self.has_shoulder
    }

    /// Index of the i-th base cap vertex.
    #[inline]
    pub fn cap(&self, i: u32) -> u32 {
        i
    }

    /// Index of the root vertex of global pair `p`.
    #[inline]
    pub fn root(&self, p: u32) -> u32 {
        self.subdivisions + 2 * p
    }

    /// Index of the crest vertex of global pair `p`.
    #[inline]
    pub fn crest(&self, p: u32) -> u32 {
        self.subdivisions + 2 * p + 1
    }

    /// Total number of root/crest pairs across ramp-in, turns, and ramp-out.
    #[inline]
    pub fn pair_count(&self) -> u32 {
        self.subdivisions * self.loops - 1
    }

    /// Number of spiral quad bands stitched between vertically adjacent
    /// pairs; the closure triangles attach at the last band.
    #[inline]
    pub fn spiral_band_count(&self) -> u32 {
        self.subdivisions * (self.loops - 1) - 1
    }

    /// Vertex count of the threaded body (caps and helix, no shoulder).
    ///
    /// This is the `vcount` the edge classifier expects.
    #[inline]
    pub fn thread_vertex_count(&self) -> u32 {
        self.subdivisions * (2 * self.loops + 1) - 2
    }

    /// Total vertex count including the shoulder ring when enabled.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        let shoulder = if self.has_shoulder {
            self.subdivisions
        } else {
            0
        };
        self.thread_vertex_count() + shoulder
    }

    /// Total face count: `2 * subdivisions * loops` for the threaded body,
    /// plus one quad per subdivision for the shoulder band.
    #[inline]
    pub fn face_count(&self) -> u32 {
        let shoulder = if self.has_shoulder {
            self.subdivisions
        } else {
            0
        };
        2 * self.subdivisions * self.loops + shoulder
    }

    /// Index of the crest vertex that opens the top cap: the crest of the
    /// last steady pair, where the ramp-out begins.
    ///
    /// Equal to `thread_vertex_count() - 2 * subdivisions + 1`, the same
    /// expression the edge classifier derives from `vcount`.
    #[inline]
    pub fn eol(&self) -> u32 {
        self.thread_vertex_count() - 2 * self.subdivisions + 1
    }

    /// Index of the i-th top cap vertex (stride-2 run starting at `eol`).
    #[inline]
    pub fn top_cap(&self, i: u32) -> u32 {
        self.eol() + 2 * i
    }

    /// Index of the i-th shoulder ring vertex.
    ///
    /// When the shoulder is disabled the top cap stands in for the shoulder
    /// ring, mirroring how the builder reuses it.
    #[inline]
    pub fn shoulder_vertex(&self, i: u32) -> u32 {
        if self.has_shoulder {
            self.thread_vertex_count() + i
        } else {
            self.top_cap(i)
        }
    }

    /// The base cap ring range.
    pub fn base_cap_ring(&self) -> RingRange {
        RingRange {
            role: RingRole::BaseCap,
            start: 0,
            end: self.subdivisions,
        }
    }

    /// The ramp-in ring range (first helical loop).
    pub fn ramp_in_ring(&self) -> RingRange {
        RingRange {
            role: RingRole::RampIn,
            start: self.subdivisions,
            end: 3 * self.subdivisions,
        }
    }

    /// The steady turn range; empty when `loops == 2`.
    pub fn turn_ring(&self) -> RingRange {
        RingRange {
            role: RingRole::Turn,
            start: 3 * self.subdivisions,
            end: 3 * self.subdivisions + 2 * self.subdivisions * (self.loops - 2),
        }
    }

    /// The ramp-out ring range (final helical loop).
    pub fn ramp_out_ring(&self) -> RingRange {
        RingRange {
            role: RingRole::RampOut,
            start: self.turn_ring().end,
            end: self.thread_vertex_count(),
        }
    }

    /// The shoulder ring range, when the shoulder is enabled.
    pub fn shoulder_ring(&self) -> Option<RingRange> {
        self.has_shoulder.then(|| RingRange {
            role: RingRole::ShoulderCap,
            start: self.thread_vertex_count(),
            end: self.vertex_count(),
        })
    }

    /// All ring ranges in buffer order.
    pub fn rings(&self) -> Vec<RingRange> {
        let mut rings = vec![
            self.base_cap_ring(),
            self.ramp_in_ring(),
            self.turn_ring(),
            self.ramp_out_ring(),
        ];
        if let Some(shoulder) = self.shoulder_ring() {
            rings.push(shoulder);
        }
        rings
    }
}
