//! Layout construction: turns parsed cell records into world-space placement commands.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use smallvec::SmallVec;
use strum::IntoEnumIterator;
use strum_macros::IntoStaticStr;
use tracing::debug;

use crate::constants::{CELL_SPACING, FLOOR_SPACING, MARKER_LIFT, WALL_OFFSET};
use crate::map::direction::Direction;
use crate::map::model::{CellId, CellRecord, MazeModel};

/// Spacing configuration for a generated layout.
///
/// These are world-unit distances, not physics; hosts with differently sized
/// prefabs override them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildConfig {
    /// Distance between neighboring cell centers along X and Z.
    pub cell_spacing: f32,
    /// Vertical distance between floors.
    pub floor_spacing: f32,
    /// How far a north or south wall sits from its cell center, along Z.
    pub wall_offset_ns: f32,
    /// How far an east or west wall sits from its cell center, along X.
    pub wall_offset_ew: f32,
    /// Lift applied to trap door and stair markers so they clear the floor tile.
    pub marker_lift: f32,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            cell_spacing: CELL_SPACING,
            floor_spacing: FLOOR_SPACING,
            wall_offset_ns: WALL_OFFSET,
            wall_offset_ew: WALL_OFFSET,
            marker_lift: MARKER_LIFT,
        }
    }
}

/// The kind of element a placement command instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum PlacementKind {
    Floor,
    Wall,
    TrapDoor,
    Stairs,
}

/// Identifier carried by placements the interaction layer must find again.
///
/// The static string forms (`"TrapDoor"`, `"Stair"`) match the tags the
/// original export used; collaborators should key off the enum itself rather
/// than compare strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum InteractionTag {
    TrapDoor,
    Stair,
}

/// One instantiation request for the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementCommand {
    pub kind: PlacementKind,
    pub position: Vec3,
    pub orientation: Quat,
    pub tag: Option<InteractionTag>,
}

/// Builder for converting a maze model into placement commands.
pub struct LayoutBuilder;

impl LayoutBuilder {
    /// Computes the full placement sequence for a maze.
    ///
    /// Commands come out in cell order; within a cell the floor tile comes
    /// first, then walls in north/south/east/west order, then the trap door
    /// and stair markers. Renderers may rely on that order, so it is fixed.
    pub fn build(model: &MazeModel, entrance: Vec3, config: &BuildConfig) -> Vec<PlacementCommand> {
        let mut commands = Vec::with_capacity(model.len() * 4);
        for record in model.cells() {
            commands.extend(Self::cell_commands(record, entrance, config));
        }
        debug!(cells = model.len(), commands = commands.len(), "Maze layout built");
        commands
    }

    /// World position of a cell's floor tile, offset from the entrance anchor.
    pub fn cell_base(id: CellId, entrance: Vec3, config: &BuildConfig) -> Vec3 {
        entrance
            + Vec3::new(
                id.col as f32 * config.cell_spacing,
                id.floor as f32 * config.floor_spacing,
                id.row as f32 * config.cell_spacing,
            )
    }

    /// Commands for a single cell, in emission order. At most seven.
    fn cell_commands(record: &CellRecord, entrance: Vec3, config: &BuildConfig) -> SmallVec<[PlacementCommand; 7]> {
        let base = Self::cell_base(record.id, entrance, config);
        let mut commands = SmallVec::new();

        commands.push(PlacementCommand {
            kind: PlacementKind::Floor,
            position: base,
            orientation: Quat::IDENTITY,
            tag: None,
        });

        for dir in Direction::iter() {
            if !record.walls.has(dir) {
                continue;
            }
            commands.push(PlacementCommand {
                kind: PlacementKind::Wall,
                position: base + Self::wall_offset(dir, config),
                orientation: Self::wall_orientation(dir),
                tag: None,
            });
        }

        let lift = Vec3::Y * config.marker_lift;
        if record.trap_door {
            commands.push(PlacementCommand {
                kind: PlacementKind::TrapDoor,
                position: base + lift,
                orientation: Quat::IDENTITY,
                tag: Some(InteractionTag::TrapDoor),
            });
        }
        if record.stairs {
            commands.push(PlacementCommand {
                kind: PlacementKind::Stairs,
                position: base + lift,
                orientation: Quat::IDENTITY,
                tag: Some(InteractionTag::Stair),
            });
        }

        commands
    }

    /// Offset of a wall from its cell's base position.
    fn wall_offset(dir: Direction, config: &BuildConfig) -> Vec3 {
        let reach = if dir.is_lateral() {
            config.wall_offset_ew
        } else {
            config.wall_offset_ns
        };
        dir.as_vec3() * reach
    }

    /// East and west walls are turned a quarter turn about the vertical axis.
    fn wall_orientation(dir: Direction) -> Quat {
        if dir.is_lateral() {
            Quat::from_rotation_y(FRAC_PI_2)
        } else {
            Quat::IDENTITY
        }
    }
}
