//! This module contains all the constants used by the maze tooling.

/// Distance between neighboring cell centers along X and Z, in world units.
pub const CELL_SPACING: f32 = 4.0;
/// Vertical distance between floors, in world units.
pub const FLOOR_SPACING: f32 = 5.0;
/// Distance from a cell center to the face a wall sits on, in world units.
pub const WALL_OFFSET: f32 = 2.0;
/// Lift applied to trap door and stair markers so they clear the floor tile.
pub const MARKER_LIFT: f32 = 0.1;

/// How far a pointer ray reaches when picking trap doors and stairs.
pub const PICK_DISTANCE: f32 = 10.0;
/// Pick radius the reference marker picker gives each tagged placement.
pub const PICK_RADIUS: f32 = 1.0;

/// A three-floor, 5x5 maze summary in the export format, bundled for the
/// demo binary and the test suite.
pub const SAMPLE_SUMMARY: &str = include_str!("../assets/maze/summary.txt");
