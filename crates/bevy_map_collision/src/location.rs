//! Entity location on a map

use serde::{Deserialize, Serialize};

/// Where an entity stands: map name plus position in tile units.
///
/// Locations are values. Moving an entity produces a new location which the
/// owner stores in place of the old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    pub map: String,
    pub x: f32,
    pub y: f32,
}

impl MapLocation {
    pub fn new(map: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            map: map.into(),
            x,
            y,
        }
    }

    /// Same map, new position
    #[must_use]
    pub fn with_position(&self, x: f32, y: f32) -> Self {
        Self {
            map: self.map.clone(),
            x,
            y,
        }
    }

    /// Same map, position offset by (dx, dy)
    #[must_use]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        self.with_position(self.x + dx, self.y + dy)
    }

    /// Tile containing this position
    pub fn tile(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_updates_by_replacement() {
        let start = MapLocation::new("village", 1.5, 2.25);
        let moved = start.translated(0.5, -1.0);

        assert_eq!(start, MapLocation::new("village", 1.5, 2.25));
        assert_eq!(moved.map, "village");
        assert_eq!(moved.tile(), (2, 1));
        assert_eq!(start.with_position(-0.5, 0.0).tile(), (-1, 0));
    }

    #[test]
    fn test_location_serde() {
        let location = MapLocation::new("cave", 3.0, 4.5);
        let json = serde_json::to_string(&location).unwrap();
        let parsed: MapLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, location);
    }
}
