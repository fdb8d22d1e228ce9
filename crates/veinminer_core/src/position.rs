//! Integer voxel positions.
//!
//! ## Packed Format
//!
//! A position packs into a single `u64` for storage and transmission:
//!
//! ```text
//!  63            38 37            12 11       0
//! ┌────────────────┬────────────────┬──────────┐
//! │   x (26 bits)  │   z (26 bits)  │ y (12 b) │
//! └────────────────┴────────────────┴──────────┘
//! ```
//!
//! Each field is two's complement; coordinates outside the field range wrap.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::face::BlockFace;

const X_BITS: u32 = 26;
const Z_BITS: u32 = 26;
const Y_BITS: u32 = 12;

const X_SHIFT: u32 = Z_BITS + Y_BITS;
const Z_SHIFT: u32 = Y_BITS;

const X_MASK: u64 = (1 << X_BITS) - 1;
const Z_MASK: u64 = (1 << Z_BITS) - 1;
const Y_MASK: u64 = (1 << Y_BITS) - 1;

/// A block position in the world grid.
///
/// Ordering is lexicographic on `(x, y, z)`; traversal tie-breaks rely on it.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BlockPosition {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate (vertical).
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl BlockPosition {
    /// The world origin.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Creates a new position.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns this position shifted by the given deltas.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Returns the neighbouring position across `face`.
    #[inline]
    #[must_use]
    pub const fn relative(self, face: BlockFace) -> Self {
        let (dx, dy, dz) = face.offsets();
        self.offset(dx, dy, dz)
    }

    /// Squared euclidean distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        let dz = i64::from(self.z) - i64::from(other.z);
        dx * dx + dy * dy + dz * dz
    }

    /// Packs this position into 64 bits.
    #[inline]
    #[must_use]
    pub const fn pack(self) -> u64 {
        ((self.x as u64 & X_MASK) << X_SHIFT)
            | ((self.z as u64 & Z_MASK) << Z_SHIFT)
            | (self.y as u64 & Y_MASK)
    }

    /// Unpacks a position produced by [`BlockPosition::pack`].
    #[inline]
    #[must_use]
    pub const fn unpack(packed: u64) -> Self {
        let signed = packed as i64;
        // Arithmetic shifts sign-extend each field.
        let x = signed >> X_SHIFT;
        let z = (signed << X_BITS) >> (X_BITS + Z_SHIFT);
        let y = (signed << (X_BITS + Z_BITS)) >> (X_BITS + Z_BITS);
        Self::new(x as i32, y as i32, z as i32)
    }
}

impl fmt::Display for BlockPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for BlockPosition {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}
