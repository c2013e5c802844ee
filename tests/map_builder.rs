use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use oubliette::constants::SAMPLE_SUMMARY;
use oubliette::map::builder::{BuildConfig, InteractionTag, LayoutBuilder, PlacementCommand, PlacementKind};
use oubliette::map::parser::SummaryParser;
use oubliette::map::render::Instantiator;
use pretty_assertions::assert_eq;

fn build(text: &str) -> Vec<PlacementCommand> {
    let parsed = SummaryParser::parse(text);
    LayoutBuilder::build(&parsed.model, Vec3::ZERO, &BuildConfig::default())
}

/// Collects placements instead of instantiating them, preserving order.
#[derive(Default)]
struct RecordingInstantiator {
    commands: Vec<PlacementCommand>,
}

impl Instantiator for RecordingInstantiator {
    fn place(&mut self, command: &PlacementCommand) {
        self.commands.push(*command);
    }
}

#[test]
fn test_reference_cell_layout() {
    let text = "Floor 0, Row 3, Col 3:\n  Walls: {'N': True, 'S': True, 'E': True, 'W': False}\n  TrapDoor: True\n  Stairs: False\n";
    let commands = build(text);

    let quarter = Quat::from_rotation_y(FRAC_PI_2);
    let expected = vec![
        PlacementCommand {
            kind: PlacementKind::Floor,
            position: Vec3::new(12.0, 0.0, 12.0),
            orientation: Quat::IDENTITY,
            tag: None,
        },
        PlacementCommand {
            kind: PlacementKind::Wall,
            position: Vec3::new(12.0, 0.0, 14.0),
            orientation: Quat::IDENTITY,
            tag: None,
        },
        PlacementCommand {
            kind: PlacementKind::Wall,
            position: Vec3::new(12.0, 0.0, 10.0),
            orientation: Quat::IDENTITY,
            tag: None,
        },
        PlacementCommand {
            kind: PlacementKind::Wall,
            position: Vec3::new(14.0, 0.0, 12.0),
            orientation: quarter,
            tag: None,
        },
        PlacementCommand {
            kind: PlacementKind::TrapDoor,
            position: Vec3::new(12.0, 0.1, 12.0),
            orientation: Quat::IDENTITY,
            tag: Some(InteractionTag::TrapDoor),
        },
    ];
    assert_eq!(commands, expected);
}

#[test]
fn test_bare_cell_emits_floor_only() {
    let commands = build("Floor 0, Row 0, Col 0:\n  Walls: {'N': False, 'S': False, 'E': False, 'W': False}\n  TrapDoor: False\n  Stairs: False\n");
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].kind, PlacementKind::Floor);
}

#[test]
fn test_full_cell_emits_seven_commands() {
    let commands = build("Floor 0, Row 0, Col 0:\n  Walls: {'N': True, 'S': True, 'E': True, 'W': True}\n  TrapDoor: True\n  Stairs: True\n");
    let kinds: Vec<PlacementKind> = commands.iter().map(|command| command.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PlacementKind::Floor,
            PlacementKind::Wall,
            PlacementKind::Wall,
            PlacementKind::Wall,
            PlacementKind::Wall,
            PlacementKind::TrapDoor,
            PlacementKind::Stairs,
        ]
    );
    assert_eq!(commands[5].tag, Some(InteractionTag::TrapDoor));
    assert_eq!(commands[6].tag, Some(InteractionTag::Stair));
}

#[test]
fn test_empty_input_builds_nothing() {
    let parsed = SummaryParser::parse("");
    let commands = LayoutBuilder::build(&parsed.model, Vec3::ZERO, &BuildConfig::default());
    assert_eq!(commands, vec![]);
    assert_eq!(parsed.warnings, vec![]);
}

#[test]
fn test_build_is_deterministic() {
    let first = build(SAMPLE_SUMMARY);
    let second = build(SAMPLE_SUMMARY);
    assert_eq!(first, second);
}

#[test]
fn test_floor_commands_follow_header_order() {
    // Scrambled coordinates on purpose; output must follow header order, not grid order.
    let text = "Floor 2, Row 4, Col 4:\nFloor 0, Row 0, Col 0:\nFloor 1, Row 2, Col 3:\n";
    let parsed = SummaryParser::parse(text);
    let commands = LayoutBuilder::build(&parsed.model, Vec3::ZERO, &BuildConfig::default());

    let floors: Vec<Vec3> = commands
        .iter()
        .filter(|command| command.kind == PlacementKind::Floor)
        .map(|command| command.position)
        .collect();
    assert_eq!(
        floors,
        vec![
            Vec3::new(16.0, 10.0, 16.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(12.0, 5.0, 8.0),
        ]
    );
}

#[test]
fn test_entrance_anchor_shifts_everything() {
    let text = "Floor 1, Row 2, Col 3:\n  Walls: {'N': True, 'S': False, 'E': False, 'W': False}\n";
    let parsed = SummaryParser::parse(text);
    let entrance = Vec3::new(100.0, -5.0, 7.0);
    let commands = LayoutBuilder::build(&parsed.model, entrance, &BuildConfig::default());

    assert_eq!(commands[0].position, Vec3::new(112.0, 0.0, 15.0));
    assert_eq!(commands[1].position, Vec3::new(112.0, 0.0, 17.0));
}

#[test]
fn test_custom_spacing_config() {
    let text = "Floor 1, Row 1, Col 1:\n  Walls: {'N': False, 'S': False, 'E': True, 'W': False}\n";
    let parsed = SummaryParser::parse(text);
    let config = BuildConfig {
        cell_spacing: 10.0,
        floor_spacing: 3.0,
        wall_offset_ns: 4.0,
        wall_offset_ew: 5.0,
        marker_lift: 0.25,
    };
    let commands = LayoutBuilder::build(&parsed.model, Vec3::ZERO, &config);

    assert_eq!(commands[0].position, Vec3::new(10.0, 3.0, 10.0));
    assert_eq!(commands[1].position, Vec3::new(15.0, 3.0, 10.0));
    assert_eq!(commands[1].orientation, Quat::from_rotation_y(FRAC_PI_2));
}

#[test]
fn test_landmark_places_nothing() {
    let commands = build("Floor 0, Row 2, Col 2:\n  Landmark: True\n");
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].kind, PlacementKind::Floor);
}

#[test]
fn test_sample_summary_command_counts() {
    // 75 floor tiles plus one command per wall and marker; spot-check the totals.
    let commands = build(SAMPLE_SUMMARY);
    let floors = commands.iter().filter(|c| c.kind == PlacementKind::Floor).count();
    let trap_doors = commands.iter().filter(|c| c.kind == PlacementKind::TrapDoor).count();
    let stairs = commands.iter().filter(|c| c.kind == PlacementKind::Stairs).count();

    assert_eq!(floors, 75);
    assert_eq!(trap_doors, 7);
    assert_eq!(stairs, 13);
}

#[test]
fn test_instantiator_receives_commands_in_order() {
    let commands = build(SAMPLE_SUMMARY);
    let mut sink = RecordingInstantiator::default();
    sink.place_all(&commands);
    assert_eq!(sink.commands, commands);
}
