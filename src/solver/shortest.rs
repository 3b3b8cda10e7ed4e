use super::common::transitions;
use super::Solver;
use crate::common::{Direction, Solution, State};
use crate::map::Map;
use crate::stat::Stats;

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;
use tracing::{debug, instrument};

/// Uniform-cost search over (position, facing) states. Exits at the first
/// finalized state on the goal tile, which is optimal since the frontier
/// pops in non-decreasing cost order.
pub struct ShortestRoute {
    map: Map,
    stats: Stats,
}

impl ShortestRoute {
    pub fn new(map: &Map) -> Self {
        ShortestRoute {
            map: map.clone(),
            stats: Stats::default(),
        }
    }
}

impl Solver for ShortestRoute {
    #[instrument(skip_all, name = "shortest_route", fields(start = format!("{:?}", self.map.start), goal = format!("{:?}", self.map.goal)), level = "debug")]
    fn solve(&mut self) -> Option<Solution> {
        let total_solve_start_time = Instant::now();

        let mut finalized = HashSet::new();
        let mut front = BinaryHeap::new();
        front.push((
            Reverse(0),
            State {
                position: self.map.start,
                direction: Direction::East,
            },
        ));

        while let Some((Reverse(cost), state)) = front.pop() {
            if state.position == self.map.goal {
                self.stats.cost = cost;
                self.stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;
                self.stats.print();
                return Some(Solution { cost, tiles: None });
            }

            // A state is finalized at most once; later queue entries for it
            // carry an equal or worse cost.
            if !finalized.insert(state) {
                continue;
            }
            self.stats.expand_states += 1;

            for (step_cost, candidate) in transitions(&self.map, &state) {
                if !finalized.contains(&candidate) {
                    front.push((Reverse(cost + step_cost), candidate));
                }
            }
        }

        debug!("frontier drained without reaching the goal");
        None
    }
}
