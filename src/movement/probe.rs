//! Movement domain: ground and wall contact probes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Answers "does anything solid overlap this box?".
pub trait OverlapQuery {
    fn overlaps(&self, center: Vec2, size: Vec2) -> bool;
}

impl OverlapQuery for [Rect] {
    fn overlaps(&self, center: Vec2, size: Vec2) -> bool {
        let probe = Rect::from_center_size(center, size);
        self.iter().any(|solid| !solid.intersect(probe).is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactSample {
    pub grounded: bool,
    pub touching_left: bool,
    pub touching_right: bool,
}

/// Probe boxes relative to the player's origin.
#[derive(Component, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct ProbeLayout {
    pub ground_offset: Vec2,
    pub ground_size: Vec2,
    pub left_wall_offset: Vec2,
    pub right_wall_offset: Vec2,
    pub wall_size: Vec2,
}

impl Default for ProbeLayout {
    fn default() -> Self {
        Self {
            ground_offset: Vec2::new(0.0, -0.75),
            ground_size: Vec2::new(0.7, 0.05),
            left_wall_offset: Vec2::new(-0.4, 0.0),
            right_wall_offset: Vec2::new(0.4, 0.0),
            wall_size: Vec2::new(0.1, 1.3),
        }
    }
}

impl ProbeLayout {
    pub fn sample<Q: OverlapQuery + ?Sized>(&self, origin: Vec2, query: &Q) -> ContactSample {
        ContactSample {
            grounded: query.overlaps(origin + self.ground_offset, self.ground_size),
            touching_left: query.overlaps(origin + self.left_wall_offset, self.wall_size),
            touching_right: query.overlaps(origin + self.right_wall_offset, self.wall_size),
        }
    }
}
