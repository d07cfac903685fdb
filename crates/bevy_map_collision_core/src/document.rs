//! JSON map document carrying everything needed to build a collision map

use crate::catalog::{TileCatalogs, TilesetBlocking};
use crate::direction::DirectionMask;
use crate::error::Result;
use crate::layer::TileGrid;
use crate::metadata::MapMetadata;
use crate::tile::{TileRef, TILE_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Packed tile bytes for the three layers.
///
/// An empty vector stands for a layer with every cell empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerBytes {
    #[serde(default)]
    pub bottom: Vec<u8>,
    #[serde(default)]
    pub middle: Vec<u8>,
    #[serde(default)]
    pub top: Vec<u8>,
}

/// A map as produced by the map/tileset loaders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDocument {
    pub metadata: MapMetadata,
    #[serde(default)]
    pub layers: LayerBytes,
    /// Autotile name -> blocking mask
    #[serde(default)]
    pub autotiles: HashMap<String, DirectionMask>,
    /// Tileset name -> `[y][x]` blocking grid for this map
    #[serde(default)]
    pub tilesets: HashMap<String, TilesetBlocking>,
}

impl MapDocument {
    /// Create a document with all layers empty and no definitions
    pub fn new(metadata: MapMetadata) -> Self {
        Self {
            metadata,
            layers: LayerBytes::default(),
            autotiles: HashMap::new(),
            tilesets: HashMap::new(),
        }
    }

    /// Parse a document from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a document from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let document = Self::from_json_str(&content)?;
        log::debug!(
            "Loaded map document {:?} ({}x{})",
            path,
            document.metadata.width,
            document.metadata.height
        );
        Ok(document)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the catalogs described by this document
    pub fn catalogs(&self) -> Result<TileCatalogs> {
        TileCatalogs::build(&self.metadata, &self.autotiles, &self.tilesets)
    }

    /// Decode the layers described by this document
    pub fn grid(&self) -> Result<TileGrid> {
        let empty = empty_layer_bytes(self.metadata.cell_count());
        let pick = |bytes: &[u8]| -> Vec<u8> {
            if bytes.is_empty() {
                empty.clone()
            } else {
                bytes.to_vec()
            }
        };
        TileGrid::decode(
            self.metadata.width,
            self.metadata.height,
            &pick(&self.layers.bottom),
            &pick(&self.layers.middle),
            &pick(&self.layers.top),
        )
    }
}

fn empty_layer_bytes(cells: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(cells * TILE_SIZE);
    for _ in 0..cells {
        bytes.extend_from_slice(&TileRef::Empty.encode());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollisionError;
    use crate::layer::LayerKind;
    use std::env::temp_dir;

    const DOCUMENT: &str = r#"{
        "metadata": { "width": 2, "height": 1, "autotiles": ["fence"], "tilesets": ["house"] },
        "layers": { "bottom": [0, 0, 0, 255, 0, 0], "top": [255, 0, 0, 254, 1, 0] },
        "autotiles": { "fence": 12 },
        "tilesets": { "house": [[15, 0]] }
    }"#;

    #[test]
    fn test_parse_document() {
        let document = MapDocument::from_json_str(DOCUMENT).unwrap();
        assert_eq!(document.metadata.width, 2);
        assert_eq!(
            document.autotiles["fence"],
            DirectionMask::EAST | DirectionMask::WEST
        );
        assert!(document.layers.middle.is_empty());

        let catalogs = document.catalogs().unwrap();
        assert_eq!(catalogs.tileset(0).unwrap().mask_at(0, 0), DirectionMask::ALL);

        let grid = document.grid().unwrap();
        assert_eq!(
            grid.tile_at(LayerKind::Bottom, 0, 0),
            TileRef::TilesetTile { tileset: 0 }
        );
        assert_eq!(grid.tile_at(LayerKind::Middle, 1, 0), TileRef::Empty);
        assert_eq!(
            grid.tile_at(LayerKind::Top, 1, 0),
            TileRef::Autotile {
                index: 0,
                variant: 1
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_mask() {
        let json = DOCUMENT.replace("\"fence\": 12", "\"fence\": 200");
        assert!(matches!(
            MapDocument::from_json_str(&json),
            Err(CollisionError::Parse(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_dir().join("test_bevy_map_collision_document.json");
        let _ = std::fs::remove_file(&path);

        let document = MapDocument::from_json_str(DOCUMENT).unwrap();
        std::fs::write(&path, document.to_json_string().unwrap()).unwrap();

        let loaded = MapDocument::load(&path).unwrap();
        assert_eq!(loaded, document);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_dir().join("test_bevy_map_collision_missing.json");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(MapDocument::load(&path), Err(CollisionError::Io(_))));
    }
}
