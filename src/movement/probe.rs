//! Movement domain: ray probes for ground and ceiling detection.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Result of a probe that found a qualifying surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitInfo {
    pub distance: f32,
    pub point: Vec2,
    pub normal: Vec2,
}

/// Anything that can answer a single filtered ray test.
pub trait RayCaster {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_range: f32,
        layers: LayerMask,
    ) -> Option<HitInfo>;
}

impl RayCaster for SpatialQuery<'_, '_> {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_range: f32,
        layers: LayerMask,
    ) -> Option<HitInfo> {
        let filter = SpatialQueryFilter::from_mask(layers);
        SpatialQuery::cast_ray(self, origin, direction, max_range, true, &filter).map(|hit| {
            HitInfo {
                distance: hit.distance,
                point: origin + *direction * hit.distance,
                normal: hit.normal,
            }
        })
    }
}

/// A single ray test relative to the owning body.
///
/// The last result is cached so the logical and physics passes read the same
/// snapshot until the next call to [`EnvironmentProbe::probe`].
#[derive(Debug, Clone)]
pub struct EnvironmentProbe {
    pub origin_offset: Vec2,
    pub max_range: f32,
    pub layer_filter: LayerMask,
    last_hit: Option<HitInfo>,
}

impl EnvironmentProbe {
    pub fn new(origin_offset: Vec2, max_range: f32, layer_filter: LayerMask) -> Self {
        Self {
            origin_offset,
            max_range,
            layer_filter,
            last_hit: None,
        }
    }

    /// Cast from `origin + origin_offset` along `direction`.
    /// Zero ranges, empty masks and zero-length directions never hit.
    pub fn probe(
        &mut self,
        caster: &impl RayCaster,
        origin: Vec2,
        direction: Vec2,
    ) -> Option<HitInfo> {
        self.last_hit = match Dir2::new(direction) {
            Ok(dir) if self.max_range > 0.0 && self.layer_filter.0 != 0 => {
                caster.cast_ray(origin + self.origin_offset, dir, self.max_range, self.layer_filter)
            }
            _ => None,
        };
        self.last_hit
    }

    pub fn hit(&self) -> bool {
        self.last_hit.is_some()
    }

    pub fn last_hit(&self) -> Option<HitInfo> {
        self.last_hit
    }

    /// World-space start and end of the ray, for gizmo drawing.
    pub fn ray_segment(&self, origin: Vec2, direction: Vec2) -> (Vec2, Vec2) {
        let start = origin + self.origin_offset;
        (start, start + direction.normalize_or_zero() * self.max_range)
    }
}
