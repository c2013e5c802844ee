use glam::Vec3;
use strum_macros::{AsRefStr, EnumIter};

/// The four compass directions a cell wall can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The four compass directions, in wall emission order.
    /// This is just a convenience constant for iterating over the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit vector pointing out of a cell through this wall.
    /// North is +Z, east is +X; floors stack along +Y.
    pub const fn as_vec3(self) -> Vec3 {
        match self {
            Direction::North => Vec3::Z,
            Direction::South => Vec3::NEG_Z,
            Direction::East => Vec3::X,
            Direction::West => Vec3::NEG_X,
        }
    }

    /// Whether walls on this side face along X and need a quarter turn about
    /// the vertical axis when placed.
    pub const fn is_lateral(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    /// Maps a summary wall key to a direction. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "N" => Some(Direction::North),
            "S" => Some(Direction::South),
            "E" => Some(Direction::East),
            "W" => Some(Direction::West),
            _ => None,
        }
    }
}
