//! Block faces and neighbour directions.
//!
//! Six axis-aligned faces plus the twelve planar diagonals. Traversal picks
//! either the 6 axis faces or all 18 from [`BlockFace::directions`].

use serde::{Deserialize, Serialize};

/// A face of a block, or a direction to a neighbouring block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockFace {
    /// -Z
    North,
    /// +X
    East,
    /// +Z
    South,
    /// -X
    West,
    /// +Y
    Up,
    /// -Y
    Down,

    /// +X -Z
    NorthEast,
    /// -X -Z
    NorthWest,
    /// +X +Z
    SouthEast,
    /// -X +Z
    SouthWest,

    /// +Y -Z
    NorthUp,
    /// +X +Y
    EastUp,
    /// +Y +Z
    SouthUp,
    /// -X +Y
    WestUp,
    /// -Y -Z
    NorthDown,
    /// +X -Y
    EastDown,
    /// -Y +Z
    SouthDown,
    /// -X -Y
    WestDown,
}

impl BlockFace {
    /// The six axis-aligned faces.
    pub const AXIS: [Self; 6] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// All eighteen directions: axis faces first, then the planar diagonals.
    pub const ALL: [Self; 18] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::Up,
        Self::Down,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthUp,
        Self::EastUp,
        Self::SouthUp,
        Self::WestUp,
        Self::NorthDown,
        Self::EastDown,
        Self::SouthDown,
        Self::WestDown,
    ];

    /// The neighbour set for one traversal: 6 directions, or 18 when edges
    /// are included. Order is fixed.
    #[inline]
    #[must_use]
    pub fn directions(include_edges: bool) -> &'static [Self] {
        if include_edges {
            &Self::ALL
        } else {
            &Self::AXIS
        }
    }

    /// `(dx, dy, dz)` offsets of this direction.
    #[inline]
    #[must_use]
    pub const fn offsets(self) -> (i32, i32, i32) {
        match self {
            Self::North => (0, 0, -1),
            Self::East => (1, 0, 0),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::Up => (0, 1, 0),
            Self::Down => (0, -1, 0),
            Self::NorthEast => (1, 0, -1),
            Self::NorthWest => (-1, 0, -1),
            Self::SouthEast => (1, 0, 1),
            Self::SouthWest => (-1, 0, 1),
            Self::NorthUp => (0, 1, -1),
            Self::EastUp => (1, 1, 0),
            Self::SouthUp => (0, 1, 1),
            Self::WestUp => (-1, 1, 0),
            Self::NorthDown => (0, -1, -1),
            Self::EastDown => (1, -1, 0),
            Self::SouthDown => (0, -1, 1),
            Self::WestDown => (-1, -1, 0),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
            Self::NorthUp => Self::SouthDown,
            Self::EastUp => Self::WestDown,
            Self::SouthUp => Self::NorthDown,
            Self::WestUp => Self::EastDown,
            Self::NorthDown => Self::SouthUp,
            Self::EastDown => Self::WestUp,
            Self::SouthDown => Self::NorthUp,
            Self::WestDown => Self::EastUp,
        }
    }

    /// True for the four horizontal axis faces (walls).
    #[inline]
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::North | Self::East | Self::South | Self::West)
    }

    /// True for the six axis-aligned faces.
    #[inline]
    #[must_use]
    pub const fn is_axis(self) -> bool {
        self.is_horizontal() || matches!(self, Self::Up | Self::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_negates_offsets() {
        for face in BlockFace::ALL {
            let (dx, dy, dz) = face.offsets();
            assert_eq!(face.opposite().offsets(), (-dx, -dy, -dz), "{face:?}");
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn test_direction_sets() {
        assert_eq!(BlockFace::directions(false).len(), 6);
        assert_eq!(BlockFace::directions(true).len(), 18);
        assert!(BlockFace::directions(false).iter().all(|f| f.is_axis()));
        // No corner (3-axis) offsets in the 18-set
        for face in BlockFace::ALL {
            let (dx, dy, dz) = face.offsets();
            assert!(dx.abs() + dy.abs() + dz.abs() <= 2);
        }
    }

    #[test]
    fn test_horizontal_faces() {
        assert!(BlockFace::North.is_horizontal());
        assert!(!BlockFace::Up.is_horizontal());
        assert!(!BlockFace::NorthEast.is_horizontal());
    }
}
