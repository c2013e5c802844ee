//! Hand-off seam between the layout builder and the rendering collaborator.

use tracing::debug;

use crate::map::builder::PlacementCommand;

/// Receives placement commands and realizes them as scene objects.
///
/// The builder emits commands in a deterministic order; implementations must
/// preserve it, since interaction lookups may rely on registration order.
pub trait Instantiator {
    /// Realizes a single placement.
    fn place(&mut self, command: &PlacementCommand);

    /// Feeds every command of a layout through [`Instantiator::place`], in order.
    fn place_all(&mut self, commands: &[PlacementCommand]) {
        for command in commands {
            self.place(command);
        }
    }
}

/// Instantiator that only logs. Lets the demo binary show a layout without a scene.
#[derive(Debug, Default)]
pub struct LoggingInstantiator {
    /// Number of commands placed so far.
    pub placed: usize,
}

impl Instantiator for LoggingInstantiator {
    fn place(&mut self, command: &PlacementCommand) {
        self.placed += 1;
        debug!(
            kind = <&'static str>::from(command.kind),
            position = %command.position,
            tag = ?command.tag,
            "place"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::builder::{BuildConfig, LayoutBuilder};
    use crate::map::model::{CellId, CellRecord, MazeModel};
    use glam::Vec3;

    #[test]
    fn test_place_all_visits_every_command() {
        let mut model = MazeModel::default();
        let mut cell = CellRecord::new(CellId { floor: 0, row: 0, col: 0 });
        cell.trap_door = true;
        model.push(cell);
        model.push(CellRecord::new(CellId { floor: 0, row: 0, col: 1 }));

        let commands = LayoutBuilder::build(&model, Vec3::ZERO, &BuildConfig::default());
        let mut sink = LoggingInstantiator::default();
        sink.place_all(&commands);

        assert_eq!(sink.placed, commands.len());
    }
}
