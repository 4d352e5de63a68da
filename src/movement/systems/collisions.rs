//! Movement domain: ground and wall overlap queries against the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, OverlapQuery};

/// Overlap queries against ground and wall colliders.
pub(crate) struct SolidOverlap<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SolidOverlap<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]),
        }
    }
}

impl OverlapQuery for SolidOverlap<'_, '_, '_> {
    fn overlaps(&self, center: Vec2, size: Vec2) -> bool {
        let probe = Collider::rectangle(size.x, size.y);
        !self
            .spatial_query
            .shape_intersections(&probe, center, 0.0, &self.filter)
            .is_empty()
    }
}
