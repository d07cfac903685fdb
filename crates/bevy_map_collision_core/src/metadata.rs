//! Map dimensions and the ordered tile catalogs a map uses

use serde::{Deserialize, Serialize};

/// Map size and catalog ordering.
///
/// Tile references store positions within `autotiles` and `tilesets`, not
/// global identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapMetadata {
    /// Width in tiles
    pub width: u32,
    /// Height in tiles
    pub height: u32,
    /// Autotile names, in index order
    #[serde(default)]
    pub autotiles: Vec<String>,
    /// Tileset names, in index order
    #[serde(default)]
    pub tilesets: Vec<String>,
}

impl MapMetadata {
    pub fn new(width: u32, height: u32, autotiles: Vec<String>, tilesets: Vec<String>) -> Self {
        Self {
            width,
            height,
            autotiles,
            tilesets,
        }
    }

    /// Number of cells per layer
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if a tile coordinate lies on the map
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let metadata = MapMetadata::new(3, 2, vec![], vec![]);
        assert!(metadata.contains(0, 0));
        assert!(metadata.contains(2, 1));
        assert!(!metadata.contains(3, 1));
        assert!(!metadata.contains(2, 2));
        assert!(!metadata.contains(-1, 0));
        assert!(!metadata.contains(0, -1));
        assert_eq!(metadata.cell_count(), 6);
    }
}
