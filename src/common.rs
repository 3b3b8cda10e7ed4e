use std::collections::HashSet;

/// Compass heading. Declaration order matters: turning left advances the
/// cycle east -> north -> west -> south, turning right walks it backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::East,
    Direction::North,
    Direction::West,
    Direction::South,
];

impl Direction {
    pub fn turn_left(self) -> Self {
        DIRECTIONS[(self as usize + 1) % 4]
    }

    pub fn turn_right(self) -> Self {
        DIRECTIONS[(self as usize + 3) % 4]
    }

    /// (row, col) delta of one step in this direction.
    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (0, 1),
            Direction::North => (-1, 0),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
        }
    }
}

/// Search-graph node. Cost depends on both position and facing, so the
/// facing is part of state identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub position: (usize, usize),
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub cost: usize,
    /// Tiles lying on at least one minimum-cost route; None for solvers
    /// that only compute the cost.
    pub tiles: Option<HashSet<(usize, usize)>>,
}
