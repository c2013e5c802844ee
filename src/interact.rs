//! Pointer interaction over tagged placements.
//!
//! The maze core never computes physics intersections itself; it only defines
//! what an interaction collaborator must answer: given a ray and a reach,
//! which tagged object is struck first. [`MarkerPicker`] is a reference
//! implementation good enough for tests and the demo; a real host substitutes
//! its physics engine.

use glam::Vec3;

use crate::constants::PICK_RADIUS;
use crate::map::builder::{InteractionTag, PlacementCommand};

/// A single ray cast into the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// A tagged placement struck by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub tag: InteractionTag,
    pub position: Vec3,
    /// Distance from the ray origin along its direction.
    pub distance: f32,
}

/// Resolves the nearest tagged object along a ray, within a maximum reach.
///
/// How intersection is computed is up to the implementation; callers only
/// rely on the returned tag and distance.
pub trait Picker {
    fn pick(&self, ray: Ray, max_distance: f32) -> Option<PickHit>;
}

/// Picker that treats every tagged placement as a sphere of fixed radius.
#[derive(Debug)]
pub struct MarkerPicker {
    markers: Vec<(InteractionTag, Vec3)>,
    radius: f32,
}

impl MarkerPicker {
    /// Indexes the tagged commands of a layout with the default pick radius.
    pub fn new(commands: &[PlacementCommand]) -> MarkerPicker {
        Self::with_radius(commands, PICK_RADIUS)
    }

    /// Indexes the tagged commands of a layout with a custom pick radius.
    pub fn with_radius(commands: &[PlacementCommand], radius: f32) -> MarkerPicker {
        let markers = commands
            .iter()
            .filter_map(|command| command.tag.map(|tag| (tag, command.position)))
            .collect();
        MarkerPicker { markers, radius }
    }

    /// Number of tagged placements in the index.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Picker for MarkerPicker {
    fn pick(&self, ray: Ray, max_distance: f32) -> Option<PickHit> {
        let direction = ray.direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }

        let mut nearest: Option<PickHit> = None;
        for &(tag, position) in &self.markers {
            let to_marker = position - ray.origin;
            let along = to_marker.dot(direction);
            if along < 0.0 || along > max_distance {
                continue;
            }
            // Perpendicular miss distance against the marker's sphere.
            let rejection = to_marker - direction * along;
            if rejection.length_squared() > self.radius * self.radius {
                continue;
            }
            if nearest.is_none_or(|hit| along < hit.distance) {
                nearest = Some(PickHit {
                    tag,
                    position,
                    distance: along,
                });
            }
        }
        nearest
    }
}
