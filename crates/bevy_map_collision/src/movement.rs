//! Box movement with corner sliding, built on the collision queries.
//!
//! Algorithm: "split then slide"
//! 1. Split the delta into an X step followed by a Y step
//! 2. Test the box's leading corners for the step
//! 3. Both corners clear: take the step
//! 4. Both corners blocked: stop on that axis
//! 5. One corner blocked: stop on that axis and nudge sideways towards the
//!    open corner, if the nudge itself is clear

use crate::location::MapLocation;
use crate::map::CollisionMap;
use crate::query::CollisionQuery;
use serde::{Deserialize, Serialize};

/// Tunables for box movement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    /// Side length of the entity's collision box, in tiles
    pub box_size: f32,
    /// Sideways distance applied when one corner is caught on a wall
    pub slide_nudge: f32,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            box_size: 0.8,
            slide_nudge: 0.05,
        }
    }
}

/// Result of a movement step
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveOutcome {
    pub x: f32,
    pub y: f32,
    /// The X step hit a wall
    pub blocked_x: bool,
    /// The Y step hit a wall
    pub blocked_y: bool,
    /// A corner slide nudge was applied
    pub slid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Axis {
    X,
    Y,
}

/// Moves boxes over a collision map
#[derive(Debug, Clone, Copy)]
pub struct MoveResolver<'a> {
    query: CollisionQuery<'a>,
    settings: CollisionSettings,
}

impl<'a> MoveResolver<'a> {
    pub fn new(map: &'a CollisionMap, settings: CollisionSettings) -> Self {
        Self {
            query: map.query(),
            settings,
        }
    }

    pub fn settings(&self) -> &CollisionSettings {
        &self.settings
    }

    /// Move a box centred on (x, y) by (dx, dy)
    pub fn step(&self, x: f32, y: f32, dx: f32, dy: f32) -> MoveOutcome {
        let mut outcome = MoveOutcome {
            x,
            y,
            ..Default::default()
        };
        if dx != 0.0 {
            outcome.blocked_x = self.step_axis(&mut outcome, Axis::X, dx);
        }
        if dy != 0.0 {
            outcome.blocked_y = self.step_axis(&mut outcome, Axis::Y, dy);
        }
        outcome
    }

    /// Move a location, returning its replacement and the step outcome
    pub fn step_location(
        &self,
        location: &MapLocation,
        dx: f32,
        dy: f32,
    ) -> (MapLocation, MoveOutcome) {
        let outcome = self.step(location.x, location.y, dx, dy);
        (location.with_position(outcome.x, outcome.y), outcome)
    }

    /// Returns true if the step was blocked
    fn step_axis(&self, outcome: &mut MoveOutcome, axis: Axis, delta: f32) -> bool {
        let size = self.settings.box_size;
        let hit = match axis {
            Axis::X => self.query.test_box(outcome.x, outcome.y, delta, 0.0, size),
            Axis::Y => self.query.test_box(outcome.x, outcome.y, 0.0, delta, size),
        };

        if !hit.any() {
            match axis {
                Axis::X => outcome.x += delta,
                Axis::Y => outcome.y += delta,
            }
            return false;
        }
        if hit.all() {
            return true;
        }

        // `first` is the corner on the positive side of the other axis.
        let nudge = if hit.first {
            -self.settings.slide_nudge
        } else {
            self.settings.slide_nudge
        };
        let clear = match axis {
            Axis::X => !self.query.test_box(outcome.x, outcome.y, 0.0, nudge, size).any(),
            Axis::Y => !self.query.test_box(outcome.x, outcome.y, nudge, 0.0, size).any(),
        };
        if clear {
            match axis {
                Axis::X => outcome.y += nudge,
                Axis::Y => outcome.x += nudge,
            }
            outcome.slid = true;
        }
        true
    }
}
