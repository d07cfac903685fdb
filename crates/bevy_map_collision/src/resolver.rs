//! Per-cell blocking resolution across the three layers

use bevy_map_collision_core::{DirectionMask, LayerKind, TileCatalogs, TileGrid, TileRef};

/// Resolves the effective blocked edges of a map cell.
///
/// Layers are scanned top, middle, bottom. The first non-empty cell decides
/// the mask outright, even when that mask is empty; empty cells fall through.
#[derive(Debug, Clone, Copy)]
pub struct BlockingResolver<'a> {
    catalogs: &'a TileCatalogs,
    grid: &'a TileGrid,
}

impl<'a> BlockingResolver<'a> {
    pub fn new(catalogs: &'a TileCatalogs, grid: &'a TileGrid) -> Self {
        Self { catalogs, grid }
    }

    /// Check if a tile coordinate lies on the map
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.grid.width() && (y as u32) < self.grid.height()
    }

    /// Effective blocked edges of the cell at (x, y).
    ///
    /// Cells off the map report [`DirectionMask::ALL`].
    pub fn blocked_dirs_of(&self, x: i32, y: i32) -> DirectionMask {
        if !self.in_bounds(x, y) {
            return DirectionMask::ALL;
        }
        let (x, y) = (x as u32, y as u32);

        LayerKind::RESOLUTION_ORDER
            .iter()
            .find_map(|&kind| self.mask_of(self.grid.tile_at(kind, x, y), x, y))
            .unwrap_or(DirectionMask::NONE)
    }

    /// The layer whose tile decides blocking at (x, y), if any
    pub fn resolving_layer(&self, x: i32, y: i32) -> Option<LayerKind> {
        if !self.in_bounds(x, y) {
            return None;
        }
        LayerKind::RESOLUTION_ORDER
            .into_iter()
            .find(|&kind| !self.grid.tile_at(kind, x as u32, y as u32).is_empty())
    }

    fn mask_of(&self, tile: TileRef, x: u32, y: u32) -> Option<DirectionMask> {
        // Indices were validated when the map was built; a miss still blocks.
        match tile {
            TileRef::Empty => None,
            TileRef::TilesetTile { tileset } => Some(
                self.catalogs
                    .tileset(tileset as usize)
                    .map_or(DirectionMask::ALL, |def| def.mask_at(x, y)),
            ),
            TileRef::Autotile { index, .. } => Some(
                self.catalogs
                    .autotile(index as usize)
                    .map_or(DirectionMask::ALL, |def| def.mask),
            ),
        }
    }
}
