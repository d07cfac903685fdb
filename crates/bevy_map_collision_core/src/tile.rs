//! Packed tile cell encoding
//!
//! Each cell is [`TILE_SIZE`] bytes: a signed discriminator followed by two
//! payload bytes.
//!
//! | Discriminator | Meaning | Payload |
//! |---------------|---------|---------|
//! | `-1` | empty cell | unused |
//! | `-2` | autotile | `[variant, autotile index]` |
//! | `0..=127` | tileset tile, discriminator is the tileset index | unused by collision |
//!
//! Any other negative discriminator is a format error.

use serde::{Deserialize, Serialize};

/// Bytes used to encode one tile cell
pub const TILE_SIZE: usize = 3;

/// Discriminator for an empty cell
pub const EMPTY_SENTINEL: i8 = -1;

/// Discriminator for an autotile cell
pub const AUTOTILE_SENTINEL: i8 = -2;

/// Decoded contents of one layer cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileRef {
    #[default]
    Empty,
    /// Autotile, `index` is a position in the map's autotile list
    Autotile { index: u8, variant: u8 },
    /// Tileset tile, `tileset` is a position in the map's tileset list
    TilesetTile { tileset: u8 },
}

impl TileRef {
    /// Decode one cell. Returns the offending discriminator on failure.
    pub fn decode(cell: [u8; TILE_SIZE]) -> Result<Self, i8> {
        let discriminator = cell[0] as i8;
        match discriminator {
            EMPTY_SENTINEL => Ok(TileRef::Empty),
            AUTOTILE_SENTINEL => Ok(TileRef::Autotile {
                variant: cell[1],
                index: cell[2],
            }),
            d if d >= 0 => Ok(TileRef::TilesetTile { tileset: d as u8 }),
            d => Err(d),
        }
    }

    /// Encode into the packed cell format.
    ///
    /// Tileset indices must be below 128, larger ones have no encoding.
    pub fn encode(self) -> [u8; TILE_SIZE] {
        match self {
            TileRef::Empty => [EMPTY_SENTINEL as u8, 0, 0],
            TileRef::Autotile { index, variant } => [AUTOTILE_SENTINEL as u8, variant, index],
            TileRef::TilesetTile { tileset } => {
                debug_assert!(tileset < 0x80, "tileset index {tileset} cannot be encoded");
                [tileset & 0x7f, 0, 0]
            }
        }
    }

    /// Check if this cell holds no tile
    pub fn is_empty(&self) -> bool {
        matches!(self, TileRef::Empty)
    }
}
