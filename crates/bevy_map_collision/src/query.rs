//! Point and box movement queries
//!
//! Movement is single-axis: callers split diagonal motion into an X step and
//! a Y step. Positions are in tile units, so `floor` of a coordinate is the
//! tile index on that axis.

use crate::resolver::BlockingResolver;
use bevy_map_collision_core::{Direction, DirectionMask};

/// Result of a box query: one flag per leading corner.
///
/// For horizontal movement `first` is the corner at `y0 + half`, `second` the
/// corner at `y0 - half`. For vertical movement `first` is at `x0 + half`,
/// `second` at `x0 - half`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxHit {
    pub first: bool,
    pub second: bool,
}

impl BoxHit {
    pub const BOTH: Self = BoxHit {
        first: true,
        second: true,
    };

    /// At least one corner collides
    pub fn any(&self) -> bool {
        self.first || self.second
    }

    /// Both corners collide
    pub fn all(&self) -> bool {
        self.first && self.second
    }
}

impl From<BoxHit> for (bool, bool) {
    fn from(hit: BoxHit) -> Self {
        (hit.first, hit.second)
    }
}

/// Collision tests against the static tile map
#[derive(Debug, Clone, Copy)]
pub struct CollisionQuery<'a> {
    resolver: BlockingResolver<'a>,
}

impl<'a> CollisionQuery<'a> {
    pub fn new(resolver: BlockingResolver<'a>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &BlockingResolver<'a> {
        &self.resolver
    }

    /// Test moving a point from (x0, y0) by (dx, dy). Returns true on collision.
    ///
    /// Exactly one of `dx`, `dy` should be nonzero.
    pub fn test_point(&self, x0: f32, y0: f32, dx: f32, dy: f32) -> bool {
        let from = (x0.floor() as i32, y0.floor() as i32);
        let to = ((x0 + dx).floor() as i32, (y0 + dy).floor() as i32);

        // The map edge is a wall.
        if !self.resolver.in_bounds(to.0, to.1) {
            return true;
        }
        if from == to {
            return false;
        }

        let (exit, entry) = match (from.0 != to.0, from.1 != to.1) {
            (true, false) if to.0 > from.0 => (Direction::East, Direction::West),
            (true, false) => (Direction::West, Direction::East),
            (false, true) if to.1 > from.1 => (Direction::South, Direction::North),
            (false, true) => (Direction::North, Direction::South),
            _ => {
                log::debug!(
                    "test_point: diagonal tile crossing ({}, {}) -> ({}, {}) treated as collision",
                    from.0,
                    from.1,
                    to.0,
                    to.1
                );
                return true;
            }
        };

        let source = if self.resolver.in_bounds(from.0, from.1) {
            self.resolver.blocked_dirs_of(from.0, from.1)
        } else {
            DirectionMask::NONE
        };
        let destination = self.resolver.blocked_dirs_of(to.0, to.1);

        source.blocks(exit) || destination.blocks(entry)
    }

    /// Test moving an axis-aligned box of side `size` centred on (x0, y0).
    ///
    /// Only the two corners on the leading edge are tested. Diagonal movement
    /// always collides on both corners.
    pub fn test_box(&self, x0: f32, y0: f32, dx: f32, dy: f32, size: f32) -> BoxHit {
        if dx != 0.0 && dy != 0.0 {
            return BoxHit::BOTH;
        }

        let half = size / 2.0;
        if dy == 0.0 {
            let edge_x = x0 + sign(dx) * half;
            BoxHit {
                first: self.test_point(edge_x, y0 + half, dx, 0.0),
                second: self.test_point(edge_x, y0 - half, dx, 0.0),
            }
        } else {
            let edge_y = y0 + sign(dy) * half;
            BoxHit {
                first: self.test_point(x0 + half, edge_y, 0.0, dy),
                second: self.test_point(x0 - half, edge_y, 0.0, dy),
            }
        }
    }
}

/// Sign of `v`, with zero mapping to zero
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_map_collision_core::{MapMetadata, TileCatalogs, TileGrid, TileLayer, TileRef};
    use std::collections::HashMap;

    /// 3x1 map: tile 0 blocks EAST, tile 1 blocks NORTH, tile 2 open
    fn strip() -> (TileCatalogs, TileGrid) {
        let metadata = MapMetadata::new(3, 1, vec![], vec!["walls".to_string()]);
        let tilesets = HashMap::from([(
            "walls".to_string(),
            vec![vec![DirectionMask::EAST, DirectionMask::NORTH, DirectionMask::NONE]],
        )]);
        let catalogs = TileCatalogs::build(&metadata, &HashMap::new(), &tilesets).unwrap();

        let mut bottom = TileLayer::empty(3, 1);
        for x in 0..3 {
            bottom.set(x, 0, TileRef::TilesetTile { tileset: 0 });
        }
        let grid =
            TileGrid::from_layers(bottom, TileLayer::empty(3, 1), TileLayer::empty(3, 1)).unwrap();
        (catalogs, grid)
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(0.4), 1.0);
        assert_eq!(sign(-0.01), -1.0);
        assert_eq!(sign(0.0), 0.0);
    }

    #[test]
    fn test_point_within_tile() {
        let (catalogs, grid) = strip();
        let query = CollisionQuery::new(BlockingResolver::new(&catalogs, &grid));
        assert!(!query.test_point(0.2, 0.5, 0.3, 0.0));
        assert!(!query.test_point(0.9, 0.5, -0.8, 0.0));
    }

    #[test]
    fn test_point_exit_blocked() {
        let (catalogs, grid) = strip();
        let query = CollisionQuery::new(BlockingResolver::new(&catalogs, &grid));
        // Tile 0 blocks its east edge.
        assert!(query.test_point(0.9, 0.5, 0.2, 0.0));
        // Coming back west into tile 0 is also blocked by that edge.
        assert!(query.test_point(1.1, 0.5, -0.2, 0.0));
    }

    #[test]
    fn test_point_open_edge() {
        let (catalogs, grid) = strip();
        let query = CollisionQuery::new(BlockingResolver::new(&catalogs, &grid));
        // Tile 1 blocks only north, tile 2 nothing.
        assert!(!query.test_point(1.9, 0.5, 0.2, 0.0));
        assert!(!query.test_point(2.1, 0.5, -0.2, 0.0));
    }

    #[test]
    fn test_point_map_edge() {
        let (catalogs, grid) = strip();
        let query = CollisionQuery::new(BlockingResolver::new(&catalogs, &grid));
        assert!(query.test_point(2.9, 0.5, 0.2, 0.0));
        assert!(query.test_point(0.1, 0.5, -0.2, 0.0));
        assert!(query.test_point(2.5, 0.1, 0.0, -0.2));
        assert!(query.test_point(2.5, 0.9, 0.0, 0.2));
    }

    #[test]
    fn test_point_entering_from_off_map() {
        let (catalogs, grid) = strip();
        let query = CollisionQuery::new(BlockingResolver::new(&catalogs, &grid));
        // Source off the map contributes no mask; tile 2 has no south edge.
        assert!(!query.test_point(2.5, -0.1, 0.0, 0.2));
        // Tile 1 blocks north, so entering it from above collides.
        assert!(query.test_point(1.5, -0.1, 0.0, 0.2));
    }

    #[test]
    fn test_point_two_axis_crossing() {
        let (catalogs, grid) = strip();
        let query = CollisionQuery::new(BlockingResolver::new(&catalogs, &grid));
        assert!(query.test_point(1.9, -0.1, 0.2, 0.2));
    }

    #[test]
    fn test_box_diagonal() {
        let (catalogs, grid) = strip();
        let query = CollisionQuery::new(BlockingResolver::new(&catalogs, &grid));
        assert_eq!(query.test_box(1.5, 0.5, 0.1, 0.1, 0.5), BoxHit::BOTH);
        assert_eq!(
            <(bool, bool)>::from(query.test_box(2.5, 0.5, -0.01, 0.01, 0.5)),
            (true, true)
        );
    }

    #[test]
    fn test_box_leading_edge() {
        let (catalogs, grid) = strip();
        let query = CollisionQuery::new(BlockingResolver::new(&catalogs, &grid));

        // Box of size 0.5 centred in tile 1 moving east: leading edge at 1.75,
        // a 0.3 step crosses into tile 2, which is open.
        let hit = query.test_box(1.5, 0.5, 0.3, 0.0, 0.5);
        assert!(!hit.any());

        // Moving west from tile 1 crosses tile 0's blocked east edge.
        let hit = query.test_box(1.5, 0.5, -0.3, 0.0, 0.5);
        assert!(hit.all());

        // A short step that keeps the leading edge inside the tile is free.
        let hit = query.test_box(1.5, 0.5, -0.1, 0.0, 0.5);
        assert!(!hit.any());
    }

    #[test]
    fn test_box_vertical_corners_independent() {
        let (catalogs, grid) = strip();
        let query = CollisionQuery::new(BlockingResolver::new(&catalogs, &grid));

        // Straddling tiles 1 and 2 just above the map, moving south:
        // corner at x = 2.2 enters open tile 2, corner at x = 1.8 enters tile 1
        // through its blocked north edge.
        let hit = query.test_box(2.0, -0.3, 0.0, 0.2, 0.4);
        assert_eq!(
            hit,
            BoxHit {
                first: false,
                second: true
            }
        );
    }
}
