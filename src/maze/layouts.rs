//! Built-in boards (compile-time configs).

use std::rc::Rc;

use crate::core::coord::Coord;
use crate::error::{Result, SearchError};
use crate::maze::{Maze, PositionSearchProblem, PursuitState};

/// A board plus the placements both kinds of search start from.
#[derive(Debug, Clone)]
pub struct Layout {
    pub name: &'static str,
    pub maze: Rc<Maze>,
    pub pacman: Coord,
    /// Target cell for position search.
    pub goal: Coord,
    pub ghosts: Vec<Coord>,
    pub food: Vec<Coord>,
}

impl Layout {
    pub fn position_problem(&self) -> PositionSearchProblem<'_> {
        PositionSearchProblem::new(&self.maze, self.pacman, self.goal)
    }

    pub fn pursuit_state(&self) -> PursuitState {
        PursuitState::new(
            Rc::clone(&self.maze),
            self.pacman,
            self.ghosts.clone(),
            self.food.iter().copied(),
        )
    }
}

/// One-cell-wide corridor, five open cells.
pub fn corridor() -> Layout {
    Layout {
        name: "corridor",
        maze: Rc::new(Maze::bordered(7, 3)),
        pacman: Coord::new(1, 1),
        goal: Coord::new(5, 1),
        ghosts: vec![Coord::new(5, 1)],
        food: vec![Coord::new(3, 1)],
    }
}

/// A serpentine corridor with a single 16-step route from the bottom-left to the top-right.
pub fn tiny() -> Layout {
    let maze = Maze::bordered(7, 7)
        .with_wall_segment(Coord::new(2, 1), Coord::new(2, 4))
        .with_wall_segment(Coord::new(4, 2), Coord::new(4, 5));
    Layout {
        name: "tiny",
        maze: Rc::new(maze),
        pacman: Coord::new(1, 1),
        goal: Coord::new(5, 5),
        ghosts: vec![Coord::new(5, 5)],
        food: vec![Coord::new(1, 5), Coord::new(3, 1)],
    }
}

/// A wall-free 6x4 room.
pub fn open() -> Layout {
    Layout {
        name: "open",
        maze: Rc::new(Maze::bordered(8, 6)),
        pacman: Coord::new(1, 1),
        goal: Coord::new(6, 4),
        ghosts: vec![Coord::new(6, 4), Coord::new(6, 1)],
        food: vec![Coord::new(3, 2), Coord::new(1, 4), Coord::new(6, 2)],
    }
}

/// A room with a central block to run around.
pub fn arena() -> Layout {
    let maze = Maze::bordered(9, 7).with_wall_segment(Coord::new(3, 3), Coord::new(5, 3));
    Layout {
        name: "arena",
        maze: Rc::new(maze),
        pacman: Coord::new(1, 1),
        goal: Coord::new(7, 5),
        ghosts: vec![Coord::new(7, 5)],
        food: vec![
            Coord::new(4, 1),
            Coord::new(1, 5),
            Coord::new(7, 1),
            Coord::new(4, 5),
        ],
    }
}

const BUILT_INS: &[(&str, fn() -> Layout)] = &[
    ("corridor", corridor),
    ("tiny", tiny),
    ("open", open),
    ("arena", arena),
];

pub fn available_names() -> Vec<&'static str> {
    BUILT_INS.iter().map(|(n, _)| *n).collect()
}

pub fn by_name(name: &str) -> Result<Layout> {
    BUILT_INS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, build)| build())
        .ok_or_else(|| SearchError::UnknownLayout {
            name: name.to_string(),
        })
}
