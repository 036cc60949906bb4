//! Vertex identifier.

use std::fmt;
use std::num::TryFromIntError;

/// Vertex identifier (matrix row/column index).
///
/// Equality and ordering are by identifier only, so an ordered set of
/// vertices iterates from the lowest index upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Vertex(pub u32);

impl Vertex {
    /// Create a new vertex.
    pub const fn new(id: u32) -> Self {
        Vertex(id)
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Index into a matrix row or column.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Vertex {
    fn from(id: u32) -> Self {
        Vertex(id)
    }
}

impl TryFrom<usize> for Vertex {
    type Error = TryFromIntError;

    fn try_from(id: usize) -> Result<Self, Self::Error> {
        u32::try_from(id).map(Vertex)
    }
}

impl From<Vertex> for usize {
    fn from(v: Vertex) -> Self {
        v.0 as usize
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
