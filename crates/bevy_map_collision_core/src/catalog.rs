//! Autotile and tileset blocking catalogs
//!
//! Catalogs are built once per map from name-keyed definitions and indexed in
//! the order given by [`MapMetadata`].

use crate::direction::DirectionMask;
use crate::error::{CollisionError, Result};
use crate::metadata::MapMetadata;
use std::collections::HashMap;

/// Per-map-cell blocking grid for a tileset, rows of masks (`[y][x]`)
pub type TilesetBlocking = Vec<Vec<DirectionMask>>;

/// An autotile blocks the same edges wherever it is placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutotileDef {
    pub name: String,
    pub mask: DirectionMask,
}

/// A tileset with blocking resolved per map cell at load time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilesetDef {
    pub name: String,
    width: u32,
    /// Row-major: index = y * width + x
    masks: Vec<DirectionMask>,
}

impl TilesetDef {
    /// Flatten a `[y][x]` mask grid, checking it matches the map size
    pub fn new(
        name: String,
        blocking: &[Vec<DirectionMask>],
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let bad_row = blocking.iter().find(|row| row.len() as u32 != width);
        if blocking.len() as u32 != height || bad_row.is_some() {
            // Report the first row of the wrong width, if there is one.
            let found_width = bad_row.or(blocking.first()).map_or(0, |row| row.len() as u32);
            return Err(CollisionError::TilesetDimensions {
                name,
                expected: (width, height),
                found: (found_width, blocking.len() as u32),
            });
        }

        Ok(Self {
            name,
            width,
            masks: blocking.iter().flatten().copied().collect(),
        })
    }

    /// Blocking mask for the map cell at (x, y). Coordinates must be in range.
    #[inline]
    pub fn mask_at(&self, x: u32, y: u32) -> DirectionMask {
        self.masks[(y * self.width + x) as usize]
    }
}

/// Immutable autotile and tileset registries for one map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileCatalogs {
    autotiles: Vec<AutotileDef>,
    tilesets: Vec<TilesetDef>,
}

impl TileCatalogs {
    /// Build catalogs in metadata order.
    ///
    /// Every name the map references must have a definition.
    pub fn build(
        metadata: &MapMetadata,
        autotile_defs: &HashMap<String, DirectionMask>,
        tileset_defs: &HashMap<String, TilesetBlocking>,
    ) -> Result<Self> {
        let autotiles = metadata
            .autotiles
            .iter()
            .map(|name| {
                autotile_defs
                    .get(name)
                    .map(|mask| AutotileDef {
                        name: name.clone(),
                        mask: *mask,
                    })
                    .ok_or_else(|| CollisionError::MissingAutotile(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        let tilesets = metadata
            .tilesets
            .iter()
            .map(|name| {
                let blocking = tileset_defs
                    .get(name)
                    .ok_or_else(|| CollisionError::MissingTileset(name.clone()))?;
                TilesetDef::new(name.clone(), blocking, metadata.width, metadata.height)
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Built tile catalogs: {} autotiles, {} tilesets",
            autotiles.len(),
            tilesets.len()
        );

        Ok(Self {
            autotiles,
            tilesets,
        })
    }

    /// Get autotile by index
    pub fn autotile(&self, index: usize) -> Option<&AutotileDef> {
        self.autotiles.get(index)
    }

    /// Get tileset by index
    pub fn tileset(&self, index: usize) -> Option<&TilesetDef> {
        self.tilesets.get(index)
    }

    pub fn autotile_count(&self) -> usize {
        self.autotiles.len()
    }

    pub fn tileset_count(&self) -> usize {
        self.tilesets.len()
    }

    pub fn autotiles(&self) -> &[AutotileDef] {
        &self.autotiles
    }

    pub fn tilesets(&self) -> &[TilesetDef] {
        &self.tilesets
    }
}
