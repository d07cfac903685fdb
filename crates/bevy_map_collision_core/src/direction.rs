//! Tile edge directions and blocking masks

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One edge of a tile. Y grows towards the south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Get the direction on the other side of the tile
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Single-direction mask
    pub fn mask(self) -> DirectionMask {
        match self {
            Direction::North => DirectionMask::NORTH,
            Direction::South => DirectionMask::SOUTH,
            Direction::East => DirectionMask::EAST,
            Direction::West => DirectionMask::WEST,
        }
    }
}

bitflags! {
    /// Set of solid tile edges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirectionMask: u8 {
        const NORTH = 0b0001;
        const SOUTH = 0b0010;
        const EAST  = 0b0100;
        const WEST  = 0b1000;
    }
}

impl DirectionMask {
    /// No blocked edge
    pub const NONE: Self = Self::empty();
    /// Every edge blocked
    pub const ALL: Self = Self::all();

    /// Check whether the edge facing `direction` is solid
    #[inline]
    pub fn blocks(self, direction: Direction) -> bool {
        self.contains(direction.mask())
    }
}

impl From<Direction> for DirectionMask {
    fn from(direction: Direction) -> Self {
        direction.mask()
    }
}

// Masks are stored as their raw bits in map documents.
impl Serialize for DirectionMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for DirectionMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        DirectionMask::from_bits(bits).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid direction mask bits: {:#06b}", bits))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn test_mask_blocks() {
        let mask = DirectionMask::NORTH | DirectionMask::EAST;
        assert!(mask.blocks(Direction::North));
        assert!(mask.blocks(Direction::East));
        assert!(!mask.blocks(Direction::South));
        assert!(!mask.blocks(Direction::West));

        assert!(Direction::ALL.iter().all(|d| DirectionMask::ALL.blocks(*d)));
        assert!(!Direction::ALL.iter().any(|d| DirectionMask::NONE.blocks(*d)));
    }

    #[test]
    fn test_mask_serializes_as_bits() {
        let mask = DirectionMask::SOUTH | DirectionMask::WEST;
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, "10");

        let parsed: DirectionMask = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, DirectionMask::NORTH | DirectionMask::EAST);
    }

    #[test]
    fn test_mask_rejects_unknown_bits() {
        assert!(serde_json::from_str::<DirectionMask>("16").is_err());
    }
}
