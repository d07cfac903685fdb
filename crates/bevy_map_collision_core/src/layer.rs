//! Tile layers and the three-layer tile grid

use crate::catalog::TileCatalogs;
use crate::error::{CollisionError, Result};
use crate::tile::{TileRef, TILE_SIZE};
use serde::{Deserialize, Serialize};

/// Which of the three stacked layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Bottom,
    Middle,
    Top,
}

impl LayerKind {
    /// Order in which layers are consulted for blocking. Top wins.
    pub const RESOLUTION_ORDER: [LayerKind; 3] =
        [LayerKind::Top, LayerKind::Middle, LayerKind::Bottom];

    /// Draw order, bottom first
    pub const DRAW_ORDER: [LayerKind; 3] =
        [LayerKind::Bottom, LayerKind::Middle, LayerKind::Top];
}

/// One decoded layer of tile references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    width: u32,
    height: u32,
    /// Row-major: index = y * width + x
    tiles: Vec<TileRef>,
}

impl TileLayer {
    /// Create a layer with every cell empty
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileRef::Empty; (width * height) as usize],
        }
    }

    /// Decode `height` rows of `width * TILE_SIZE` packed bytes
    pub fn decode(bytes: &[u8], width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * TILE_SIZE;
        if bytes.len() != expected {
            return Err(CollisionError::LayerLength {
                expected,
                found: bytes.len(),
            });
        }

        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for (i, cell) in bytes.chunks_exact(TILE_SIZE).enumerate() {
            let tile = TileRef::decode([cell[0], cell[1], cell[2]]).map_err(|value| {
                CollisionError::InvalidDiscriminator {
                    x: i as u32 % width,
                    y: i as u32 / width,
                    value,
                }
            })?;
            tiles.push(tile);
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Encode back into the packed byte format
    pub fn encode(&self) -> Vec<u8> {
        self.tiles.iter().flat_map(|t| t.encode()).collect()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the tile at a cell. Coordinates must be in range.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> TileRef {
        debug_assert!(x < self.width && y < self.height);
        self.tiles[(y * self.width + x) as usize]
    }

    /// Set the tile at a cell, ignoring out-of-range coordinates
    pub fn set(&mut self, x: u32, y: u32, tile: TileRef) {
        if x < self.width && y < self.height {
            self.tiles[(y * self.width + x) as usize] = tile;
        }
    }

    /// Iterate all non-empty tiles with their positions
    pub fn iter_tiles(&self) -> impl Iterator<Item = (u32, u32, TileRef)> + '_ {
        self.tiles.iter().enumerate().filter_map(|(idx, tile)| {
            (!tile.is_empty()).then(|| (idx as u32 % self.width, idx as u32 / self.width, *tile))
        })
    }
}

/// The three decoded layers of a map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    bottom: TileLayer,
    middle: TileLayer,
    top: TileLayer,
}

impl TileGrid {
    /// Build a grid from already-decoded layers of matching size
    pub fn from_layers(bottom: TileLayer, middle: TileLayer, top: TileLayer) -> Result<Self> {
        let width = bottom.width;
        let height = bottom.height;
        if width == 0 || height == 0 {
            return Err(CollisionError::EmptyMap);
        }
        for (kind, layer) in [(LayerKind::Middle, &middle), (LayerKind::Top, &top)] {
            if layer.width != width || layer.height != height {
                return Err(CollisionError::GridDimensions {
                    expected: (width, height),
                    found: (layer.width, layer.height),
                }
                .in_layer(kind));
            }
        }
        Ok(Self {
            width,
            height,
            bottom,
            middle,
            top,
        })
    }

    /// Decode all three packed layers
    pub fn decode(
        width: u32,
        height: u32,
        bottom: &[u8],
        middle: &[u8],
        top: &[u8],
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CollisionError::EmptyMap);
        }
        let decode = |bytes: &[u8], kind: LayerKind| {
            TileLayer::decode(bytes, width, height).map_err(|e| e.in_layer(kind))
        };
        Self::from_layers(
            decode(bottom, LayerKind::Bottom)?,
            decode(middle, LayerKind::Middle)?,
            decode(top, LayerKind::Top)?,
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a layer by kind
    pub fn layer(&self, kind: LayerKind) -> &TileLayer {
        match kind {
            LayerKind::Bottom => &self.bottom,
            LayerKind::Middle => &self.middle,
            LayerKind::Top => &self.top,
        }
    }

    /// Get the tile at a cell of a layer. Coordinates must be in range.
    #[inline]
    pub fn tile_at(&self, kind: LayerKind, x: u32, y: u32) -> TileRef {
        self.layer(kind).get(x, y)
    }

    /// Check every catalog index in the grid against the catalogs
    pub fn validate_indices(&self, catalogs: &TileCatalogs) -> Result<()> {
        let autotiles = catalogs.autotile_count();
        let tilesets = catalogs.tileset_count();
        for kind in LayerKind::DRAW_ORDER {
            for (x, y, tile) in self.layer(kind).iter_tiles() {
                match tile {
                    TileRef::Autotile { index, .. } if index as usize >= autotiles => {
                        return Err(CollisionError::AutotileIndexOutOfRange {
                            x,
                            y,
                            index,
                            count: autotiles,
                        }
                        .in_layer(kind));
                    }
                    TileRef::TilesetTile { tileset } if tileset as usize >= tilesets => {
                        return Err(CollisionError::TilesetIndexOutOfRange {
                            x,
                            y,
                            index: tileset,
                            count: tilesets,
                        }
                        .in_layer(kind));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}
