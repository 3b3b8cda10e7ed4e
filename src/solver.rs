mod common;
mod shortest;
mod tiles;

pub use shortest::ShortestRoute;
pub use tiles::OptimalTiles;

use crate::common::Solution;

pub trait Solver {
    fn solve(&mut self) -> Option<Solution>;
}
