use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{anyhow, Context, Result};

use crate::common::Direction;

#[derive(Debug, Clone)]
pub struct Tile {
    passable: bool,
}

impl Tile {
    pub fn is_passable(&self) -> bool {
        self.passable
    }
}

/// Rectangular maze grid. `#` cells are walls, everything else is open
/// floor; `S` and `E` additionally mark the start and goal tiles.
/// Built once at load time and never mutated during search.
#[derive(Debug, Clone)]
pub struct Map {
    pub height: usize,
    pub width: usize,
    pub grid: Vec<Vec<Tile>>,
    pub start: (usize, usize),
    pub goal: (usize, usize),
}

impl Map {
    pub fn from_file(path: &str) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open maze file {path:?}"))?;
        let reader = BufReader::new(file);

        let mut rows = Vec::new();
        for line in reader.lines() {
            rows.push(line?);
        }

        Self::from_rows(rows.iter().map(String::as_str))
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_rows(text.lines())
    }

    fn from_rows<'a>(rows: impl Iterator<Item = &'a str>) -> Result<Self> {
        let mut grid = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (row, line) in rows.filter(|line| !line.is_empty()).enumerate() {
            let mut tiles_row = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'S' => start = Some((row, col)),
                    'E' => goal = Some((row, col)),
                    _ => {}
                }
                tiles_row.push(Tile {
                    passable: ch != '#',
                });
            }
            grid.push(tiles_row);
        }

        Ok(Map {
            height: grid.len(),
            width: grid.first().map_or(0, Vec::len),
            grid,
            start: start.ok_or_else(|| anyhow!("maze has no start marker 'S'"))?,
            goal: goal.ok_or_else(|| anyhow!("maze has no goal marker 'E'"))?,
        })
    }

    pub fn is_passable(&self, x: usize, y: usize) -> bool {
        self.grid[x][y].is_passable()
    }

    /// Tile one step from `position` in `direction`, or None when the step
    /// leaves the grid or runs into a wall.
    pub fn next_tile(
        &self,
        position: (usize, usize),
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (dx, dy) = direction.offset();
        let new_x = position.0 as i32 + dx;
        let new_y = position.1 as i32 + dy;
        if new_x >= 0
            && new_y >= 0
            && new_x < self.height as i32
            && new_y < self.width as i32
            && self.grid[new_x as usize][new_y as usize].passable
        {
            Some((new_x as usize, new_y as usize))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
#####
#..E#
#.#.#
#S..#
#####";

    #[test]
    fn test_parse_maze() {
        let map = Map::from_text(FIXTURE).unwrap();

        assert_eq!(map.height, 5);
        assert_eq!(map.width, 5);
        assert_eq!(map.start, (3, 1));
        assert_eq!(map.goal, (1, 3));

        assert!(!map.is_passable(0, 0));
        assert!(!map.is_passable(2, 2));
        assert!(map.is_passable(3, 1));
        // Start and goal markers are themselves open floor.
        assert!(map.is_passable(map.start.0, map.start.1));
        assert!(map.is_passable(map.goal.0, map.goal.1));
    }

    #[test]
    fn test_next_tile_respects_walls_and_bounds() {
        let map = Map::from_text(FIXTURE).unwrap();

        assert_eq!(map.next_tile((3, 1), Direction::East), Some((3, 2)));
        assert_eq!(map.next_tile((3, 1), Direction::North), Some((2, 1)));
        // Wall below the start row.
        assert_eq!(map.next_tile((3, 1), Direction::South), None);
        assert_eq!(map.next_tile((3, 1), Direction::West), None);
        // Stepping off the grid edge.
        assert_eq!(map.next_tile((0, 0), Direction::North), None);
        assert_eq!(map.next_tile((4, 4), Direction::East), None);
    }

    #[test]
    fn test_missing_markers_are_errors() {
        assert!(Map::from_text("###\n#.#\n###").is_err());
        assert!(Map::from_text("###\n#S#\n###").is_err());
        assert!(Map::from_text("###\n#E#\n###").is_err());
    }

    #[test]
    fn test_read_maze_from_file() {
        let map = Map::from_file("input.txt").unwrap();

        assert_eq!(map.height, 15);
        assert_eq!(map.width, 15);
        assert_eq!(map.start, (13, 1));
        assert_eq!(map.goal, (1, 13));
    }
}
