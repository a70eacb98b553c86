//! Plain text rendering of an engine's grid, three characters per cell.

use crate::engine::MazeEngine;
use crate::grids::{CellKind, Direction};

impl From<CellKind> for char {
    fn from(kind: CellKind) -> char {
        match kind {
            CellKind::Entrance => 'S',
            CellKind::Exit => 'E',
            CellKind::Path => '*',
            CellKind::Cursor => '@',
            CellKind::Open => 'o',
            CellKind::Closed => '.',
            CellKind::Filled => '#',
            CellKind::Visited => ' ',
            CellKind::Frontier => '~',
            CellKind::Unvisited => ':',
        }
    }
}

/// Draws the maze as seen through the engine's read surface, one text row
/// per wall line and one per cell line.
pub fn render(engine: &MazeEngine) -> String {
    let grid = engine.grid();
    let (width, height) = (grid.dims.width, grid.dims.height);
    let mut out = String::with_capacity((width * 4 + 2) * (height * 2 + 1));

    for y in 0..height {
        out.push('+');
        for x in 0..width {
            let wall = grid.get_cell((x, y)).wall(Direction::North);
            out.push_str(if wall { "---+" } else { "   +" });
        }
        out.push('\n');

        let west = grid.get_cell((0, y)).wall(Direction::West);
        out.push(if west { '|' } else { ' ' });
        for x in 0..width {
            let glyph: char = engine.cell_kind((x, y)).into();
            out.push(' ');
            out.push(glyph);
            out.push(' ');
            let east = grid.get_cell((x, y)).wall(Direction::East);
            out.push(if east { '|' } else { ' ' });
        }
        out.push('\n');
    }

    out.push('+');
    for x in 0..width {
        let wall = grid.get_cell((x, height - 1)).wall(Direction::South);
        out.push_str(if wall { "---+" } else { "   +" });
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod test_renderer {
    use super::*;
    use crate::config::MazeConfig;
    use crate::generators::GeneratorKind;
    use crate::solvers::SolverKind;
    use rand::rngs::mock::StepRng;

    #[test]
    fn solved_north_east_maze() {
        let config = MazeConfig {
            width: 5,
            height: 5,
            generator: GeneratorKind::BinaryTree,
            solver: SolverKind::AStar,
            ..MazeConfig::default()
        };
        let mut engine = MazeEngine::new(&config, Box::new(StepRng::new(0, 0)));
        while engine.step() {}
        engine.start_solving();
        while engine.step() {}

        let text = render(&engine);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "+---+---+---+---+---+");
        assert_eq!(lines[1], "  S   *   *   *   * |");
        assert_eq!(lines[2], "+   +   +   +   +   +");
        assert_eq!(lines[3], "| . | . | . | . | * |");
        assert_eq!(lines[9], "| . | . | . | . | E  ");
        assert_eq!(lines[10], "+---+---+---+---+---+");
    }

    #[test]
    fn prim_start_shows_its_frontier() {
        let config = MazeConfig {
            width: 5,
            height: 5,
            ..MazeConfig::default()
        };
        let engine = MazeEngine::new(&config, Box::new(StepRng::new(0, 0)));
        let text = render(&engine);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "+---+---+---+---+---+");
        assert_eq!(lines[1], "  S | ~ | : | : | : |");
        assert_eq!(lines[2], "+---+---+---+---+---+");
        assert_eq!(lines[3], "| ~ | : | : | : | : |");
    }
}
