//! bevy_map_collision_core - Core data structures for tile collision
//!
//! This crate decodes the packed three-layer tile format and builds the
//! blocking catalogs a map needs for collision queries:
//!
//! - **Directions** - tile edges and [`DirectionMask`] bitsets
//! - **Tiles** - the 3-byte cell encoding, decoded once into [`TileRef`]
//! - **Layers** - [`TileLayer`] and the bottom/middle/top [`TileGrid`]
//! - **Catalogs** - [`AutotileDef`] and [`TilesetDef`] registries in map order
//! - **Documents** - [`MapDocument`], the JSON form of all of the above
//!
//! The query side lives in `bevy_map_collision`.

pub mod catalog;
pub mod direction;
pub mod document;
pub mod error;
pub mod layer;
pub mod metadata;
pub mod tile;

pub use catalog::{AutotileDef, TileCatalogs, TilesetBlocking, TilesetDef};
pub use direction::{Direction, DirectionMask};
pub use document::{LayerBytes, MapDocument};
pub use error::{CollisionError, Result};
pub use layer::{LayerKind, TileGrid, TileLayer};
pub use metadata::MapMetadata;
pub use tile::{TileRef, AUTOTILE_SENTINEL, EMPTY_SENTINEL, TILE_SIZE};
