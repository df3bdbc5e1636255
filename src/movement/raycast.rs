//! Movement domain: ray fan geometry and the ray query backend.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::ControllerTuning;

/// Nearest intersection reported by a ray query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub obstruction: Entity,
}

/// Spatial query used by the resolver.
///
/// Implementations return the single nearest hit within `max_distance`, or
/// `None`. Results must be stable for a static scene within one tick.
pub trait RayCaster {
    fn cast_ray(&mut self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<RayHit>;
}

/// Corners of the body box inset by the skin width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastOrigins {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

impl RaycastOrigins {
    pub fn around(center: Vec2, half_extents: Vec2, skin_width: f32) -> Self {
        let inset = half_extents - Vec2::splat(skin_width);
        let min = center - inset;
        let max = center + inset;
        Self {
            top_left: Vec2::new(min.x, max.y),
            top_right: max,
            bottom_left: min,
            bottom_right: Vec2::new(max.x, min.y),
        }
    }
}

/// Ray counts and spacing along each edge of the inset box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayFan {
    pub horizontal_count: usize,
    pub vertical_count: usize,
    /// Vertical step between the rays cast sideways.
    pub horizontal_spacing: f32,
    /// Horizontal step between the rays cast up or down.
    pub vertical_spacing: f32,
}

impl RayFan {
    pub fn new(half_extents: Vec2, tuning: &ControllerTuning) -> Self {
        let inset_size = (half_extents - Vec2::splat(tuning.skin_width)) * 2.0;
        let horizontal_count = tuning.horizontal_rays();
        let vertical_count = tuning.vertical_rays();
        Self {
            horizontal_count,
            vertical_count,
            horizontal_spacing: inset_size.y / (horizontal_count - 1) as f32,
            vertical_spacing: inset_size.x / (vertical_count - 1) as f32,
        }
    }
}

/// Ray backend over the avian2d spatial query pipeline.
pub struct LevelCaster<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: &'a SpatialQueryFilter,
}

impl<'a, 'w, 's> LevelCaster<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, filter: &'a SpatialQueryFilter) -> Self {
        Self {
            spatial_query,
            filter,
        }
    }
}

impl RayCaster for LevelCaster<'_, '_, '_> {
    fn cast_ray(&mut self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<RayHit> {
        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, self.filter)
            .map(|hit| RayHit {
                distance: hit.distance,
                obstruction: hit.entity,
            })
    }
}

/// One cast ray, kept for debug drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySegment {
    pub origin: Vec2,
    pub end: Vec2,
    pub hit: bool,
}

/// Wraps a caster and records every query when a trace buffer is supplied.
pub struct TracingCaster<'t, C> {
    inner: C,
    trace: Option<&'t mut Vec<RaySegment>>,
}

impl<'t, C: RayCaster> TracingCaster<'t, C> {
    pub fn new(inner: C, trace: Option<&'t mut Vec<RaySegment>>) -> Self {
        Self { inner, trace }
    }
}

impl<C: RayCaster> RayCaster for TracingCaster<'_, C> {
    fn cast_ray(&mut self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<RayHit> {
        let hit = self.inner.cast_ray(origin, direction, max_distance);
        if let Some(trace) = self.trace.as_deref_mut() {
            trace.push(RaySegment {
                origin,
                end: origin + direction * max_distance,
                hit: hit.is_some(),
            });
        }
        hit
    }
}

impl<C: RayCaster + ?Sized> RayCaster for &mut C {
    fn cast_ray(&mut self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<RayHit> {
        (**self).cast_ray(origin, direction, max_distance)
    }
}
