//! bevy_map_collision - Tile-grid collision queries
//!
//! Answers "can an entity move from here by this much without crossing a
//! solid tile edge?" against a three-layer tile map.
//!
//! - **Resolution** - [`BlockingResolver`] picks the blocking mask of a cell,
//!   top layer first
//! - **Queries** - [`CollisionQuery::test_point`] and
//!   [`CollisionQuery::test_box`] for single-axis movement
//! - **Maps** - [`CollisionMap`] owns a loaded map's catalogs and grid
//! - **Movement** - [`MoveResolver`] splits diagonal moves and slides boxes
//!   around corners
//!
//! # Example
//!
//! ```rust,ignore
//! use bevy_map_collision::{CollisionMap, MapDocument};
//!
//! let document = MapDocument::load(&path)?;
//! let map = CollisionMap::from_document(&document)?;
//!
//! if !map.test_point(x, y, 0.1, 0.0) {
//!     x += 0.1;
//! }
//! ```
//!
//! Enable the `bevy` feature to use [`CollisionMap`] as a Bevy resource.

pub mod location;
pub mod map;
pub mod movement;
pub mod query;
pub mod resolver;

pub use location::MapLocation;
pub use map::CollisionMap;
pub use movement::{CollisionSettings, MoveOutcome, MoveResolver};
pub use query::{BoxHit, CollisionQuery};
pub use resolver::BlockingResolver;

pub use bevy_map_collision_core::{
    CollisionError, Direction, DirectionMask, LayerKind, MapDocument, MapMetadata, Result,
    TileCatalogs, TileGrid, TileLayer, TileRef,
};
