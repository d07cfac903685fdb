//! Load-time errors for collision maps

use crate::layer::LayerKind;
use thiserror::Error;

/// Errors that abort building a collision map.
///
/// Queries never produce errors; anything malformed is rejected here so it
/// cannot turn into a wall the player walks through.
#[derive(Debug, Error)]
pub enum CollisionError {
    #[error("invalid tile discriminator {value} at ({x}, {y})")]
    InvalidDiscriminator { x: u32, y: u32, value: i8 },

    #[error("layer data has {found} bytes, expected {expected}")]
    LayerLength { expected: usize, found: usize },

    #[error("{layer:?} layer: {source}")]
    Layer {
        layer: LayerKind,
        #[source]
        source: Box<CollisionError>,
    },

    #[error("autotile '{0}' is referenced by the map but has no definition")]
    MissingAutotile(String),

    #[error("tileset '{0}' is referenced by the map but has no definition")]
    MissingTileset(String),

    #[error("tileset '{name}' blocking grid is {found:?}, expected {expected:?} (width, height)")]
    TilesetDimensions {
        name: String,
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("autotile index {index} at ({x}, {y}) is out of range ({count} autotiles)")]
    AutotileIndexOutOfRange {
        x: u32,
        y: u32,
        index: u8,
        count: usize,
    },

    #[error("tileset index {index} at ({x}, {y}) is out of range ({count} tilesets)")]
    TilesetIndexOutOfRange {
        x: u32,
        y: u32,
        index: u8,
        count: usize,
    },

    #[error("tile grid is {found:?}, map metadata says {expected:?} (width, height)")]
    GridDimensions {
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("map has zero width or height")]
    EmptyMap,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse map document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CollisionError {
    /// Tag an error with the layer it came from
    pub fn in_layer(self, layer: LayerKind) -> Self {
        CollisionError::Layer {
            layer,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CollisionError>;
