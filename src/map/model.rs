//! The typed maze model produced by the summary parser.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use bitflags::bitflags;

use crate::map::direction::Direction;

/// Address of one cell: floor, then row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    pub floor: u32,
    pub row: u32,
    pub col: u32,
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(floor {}, row {}, col {})", self.floor, self.row, self.col)
    }
}

bitflags! {
    /// Which sides of a cell carry a wall.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WallSet: u8 {
        const NORTH = 1 << 0;
        const SOUTH = 1 << 1;
        const EAST = 1 << 2;
        const WEST = 1 << 3;
    }
}

impl WallSet {
    const fn flag(dir: Direction) -> WallSet {
        match dir {
            Direction::North => WallSet::NORTH,
            Direction::South => WallSet::SOUTH,
            Direction::East => WallSet::EAST,
            Direction::West => WallSet::WEST,
        }
    }

    /// Whether the wall on the given side is present.
    pub fn has(self, dir: Direction) -> bool {
        self.contains(Self::flag(dir))
    }

    /// Marks the wall on the given side as present.
    pub fn add(&mut self, dir: Direction) {
        self.insert(Self::flag(dir));
    }
}

/// One parsed maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRecord {
    pub id: CellId,
    pub walls: WallSet,
    pub trap_door: bool,
    pub stairs: bool,
    /// Present in summary exports but not placed by the layout builder yet; reserved.
    pub landmark: bool,
}

impl CellRecord {
    /// A record with no walls and no features.
    pub fn new(id: CellId) -> CellRecord {
        CellRecord {
            id,
            walls: WallSet::empty(),
            trap_door: false,
            stairs: false,
            landmark: false,
        }
    }
}

/// The complete parsed maze: cells in summary order plus a coordinate index.
///
/// Built once per load and immutable afterward; callers wanting a different
/// maze parse a new summary.
#[derive(Debug, Default)]
pub struct MazeModel {
    cells: Vec<CellRecord>,
    index: HashMap<CellId, usize>,
}

impl MazeModel {
    /// Appends a record, keeping summary order.
    ///
    /// Returns false when the id was already present. The duplicate is still
    /// kept in the sequence, but the index keeps resolving to the first
    /// record; deciding between duplicates is the caller's business.
    pub fn push(&mut self, record: CellRecord) -> bool {
        let slot = self.cells.len();
        self.cells.push(record);
        match self.index.entry(record.id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(slot);
                true
            }
        }
    }

    /// Cells in the order their headers appeared.
    pub fn cells(&self) -> &[CellRecord] {
        &self.cells
    }

    /// Addresses a cell by coordinate without scanning.
    pub fn get(&self, id: CellId) -> Option<&CellRecord> {
        self.index.get(&id).map(|&slot| &self.cells[slot])
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of floors spanned by the model, counting from floor zero.
    pub fn floor_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.id.floor)
            .max()
            .map_or(0, |top| top as usize + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(floor: u32, row: u32, col: u32) -> CellId {
        CellId { floor, row, col }
    }

    #[test]
    fn test_wall_set_add_and_has() {
        let mut walls = WallSet::empty();
        assert!(!walls.has(Direction::North));

        walls.add(Direction::North);
        walls.add(Direction::East);
        assert!(walls.has(Direction::North));
        assert!(walls.has(Direction::East));
        assert!(!walls.has(Direction::South));
        assert!(!walls.has(Direction::West));
    }

    #[test]
    fn test_push_and_get() {
        let mut model = MazeModel::default();
        assert!(model.push(CellRecord::new(id(0, 0, 0))));
        assert!(model.push(CellRecord::new(id(2, 4, 1))));

        assert_eq!(model.len(), 2);
        assert!(model.get(id(2, 4, 1)).is_some());
        assert!(model.get(id(1, 0, 0)).is_none());
    }

    #[test]
    fn test_duplicate_push_keeps_both_but_indexes_first() {
        let mut model = MazeModel::default();
        let mut first = CellRecord::new(id(0, 1, 1));
        first.trap_door = true;
        let second = CellRecord::new(id(0, 1, 1));

        assert!(model.push(first));
        assert!(!model.push(second));

        assert_eq!(model.len(), 2);
        assert!(model.get(id(0, 1, 1)).unwrap().trap_door);
    }

    #[test]
    fn test_floor_count() {
        let mut model = MazeModel::default();
        assert_eq!(model.floor_count(), 0);

        model.push(CellRecord::new(id(0, 0, 0)));
        model.push(CellRecord::new(id(2, 0, 0)));
        assert_eq!(model.floor_count(), 3);
    }
}
