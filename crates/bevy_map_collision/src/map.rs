//! Collision map owning the catalogs and tile grid of a loaded map

use crate::query::{BoxHit, CollisionQuery};
use crate::resolver::BlockingResolver;
use bevy_map_collision_core::{
    CollisionError, DirectionMask, MapDocument, MapMetadata, Result, TileCatalogs, TileGrid,
};

/// Immutable collision data for one loaded map.
///
/// Built once when the map loads and dropped when it unloads. Nothing is
/// mutated after construction, so a shared reference can be read from any
/// number of threads.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
pub struct CollisionMap {
    metadata: MapMetadata,
    catalogs: TileCatalogs,
    grid: TileGrid,
}

impl CollisionMap {
    /// Assemble a collision map, checking the grid against the metadata and catalogs
    pub fn new(metadata: MapMetadata, catalogs: TileCatalogs, grid: TileGrid) -> Result<Self> {
        if metadata.width == 0 || metadata.height == 0 {
            return Err(CollisionError::EmptyMap);
        }
        if grid.width() != metadata.width || grid.height() != metadata.height {
            return Err(CollisionError::GridDimensions {
                expected: (metadata.width, metadata.height),
                found: (grid.width(), grid.height()),
            });
        }
        grid.validate_indices(&catalogs)?;

        log::debug!(
            "Collision map ready: {}x{} tiles, {} autotiles, {} tilesets",
            metadata.width,
            metadata.height,
            catalogs.autotile_count(),
            catalogs.tileset_count()
        );

        Ok(Self {
            metadata,
            catalogs,
            grid,
        })
    }

    /// Build from a map document
    pub fn from_document(document: &MapDocument) -> Result<Self> {
        let catalogs = document.catalogs()?;
        let grid = document.grid()?;
        Self::new(document.metadata.clone(), catalogs, grid)
    }

    pub fn metadata(&self) -> &MapMetadata {
        &self.metadata
    }

    pub fn catalogs(&self) -> &TileCatalogs {
        &self.catalogs
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn width(&self) -> u32 {
        self.metadata.width
    }

    pub fn height(&self) -> u32 {
        self.metadata.height
    }

    /// Check if a tile coordinate lies on the map
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.metadata.contains(x, y)
    }

    pub fn resolver(&self) -> BlockingResolver<'_> {
        BlockingResolver::new(&self.catalogs, &self.grid)
    }

    pub fn query(&self) -> CollisionQuery<'_> {
        CollisionQuery::new(self.resolver())
    }

    /// Effective blocked edges of a cell (diagnostics)
    pub fn blocked_dirs_of(&self, x: i32, y: i32) -> DirectionMask {
        self.resolver().blocked_dirs_of(x, y)
    }

    /// See [`CollisionQuery::test_point`]
    pub fn test_point(&self, x0: f32, y0: f32, dx: f32, dy: f32) -> bool {
        self.query().test_point(x0, y0, dx, dy)
    }

    /// See [`CollisionQuery::test_box`]
    pub fn test_box(&self, x0: f32, y0: f32, dx: f32, dy: f32, size: f32) -> BoxHit {
        self.query().test_box(x0, y0, dx, dy, size)
    }

    /// Resolved mask of every cell as one hex digit, one map row per line
    pub fn debug_masks(&self) -> String {
        let resolver = self.resolver();
        let mut out = String::with_capacity(self.metadata.cell_count() + self.height() as usize);
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                out.push_str(&format!("{:x}", resolver.blocked_dirs_of(x, y).bits()));
            }
            out.push('\n');
        }
        out
    }
}
