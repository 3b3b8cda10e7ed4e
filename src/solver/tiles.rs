use super::common::transitions;
use super::Solver;
use crate::common::{Direction, Solution, State};
use crate::map::Map;
use crate::stat::Stats;

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;
use tracing::{debug, instrument};

/// Tie-aware variant of the uniform-cost search: records every predecessor
/// that reaches a state at its best known cost, keeps draining the frontier
/// until its cost strictly exceeds the best goal cost, then walks the
/// predecessor multimap backwards from every optimal goal state to collect
/// the tiles of all minimum-cost routes.
pub struct OptimalTiles {
    map: Map,
    stats: Stats,
}

impl OptimalTiles {
    pub fn new(map: &Map) -> Self {
        OptimalTiles {
            map: map.clone(),
            stats: Stats::default(),
        }
    }
}

impl Solver for OptimalTiles {
    #[instrument(skip_all, name = "optimal_tiles", fields(start = format!("{:?}", self.map.start), goal = format!("{:?}", self.map.goal)), level = "debug")]
    fn solve(&mut self) -> Option<Solution> {
        let total_solve_start_time = Instant::now();

        let initial_state = State {
            position: self.map.start,
            direction: Direction::East,
        };

        let mut best_cost = HashMap::new();
        best_cost.insert(initial_state, 0);
        let mut predecessors: HashMap<State, Vec<State>> = HashMap::new();

        let mut front = BinaryHeap::new();
        front.push((Reverse(0), initial_state));

        let mut end_states = HashSet::new();
        let mut lowest_cost: Option<usize> = None;

        while let Some((Reverse(cost), state)) = front.pop() {
            // Later branches can still tie the optimum, so keep going until
            // the frontier cost strictly exceeds the best goal cost.
            if lowest_cost.is_some_and(|lowest| cost > lowest) {
                break;
            }
            // Stale queue entry: the state was re-enqueued cheaper since.
            if best_cost.get(&state).is_some_and(|&best| cost > best) {
                continue;
            }

            if state.position == self.map.goal {
                // Several facings may tie on the goal tile.
                lowest_cost = Some(cost);
                end_states.insert(state);
                continue;
            }
            self.stats.expand_states += 1;

            for (step_cost, candidate) in transitions(&self.map, &state) {
                let candidate_cost = cost + step_cost;
                match best_cost.get(&candidate).copied() {
                    Some(best) if candidate_cost > best => {}
                    Some(best) if candidate_cost == best => {
                        // The same state can sit in the queue under several
                        // entries; keep the predecessor list duplicate-free.
                        let preds = predecessors.entry(candidate).or_default();
                        if !preds.contains(&state) {
                            preds.push(state);
                        }
                    }
                    _ => {
                        best_cost.insert(candidate, candidate_cost);
                        predecessors.insert(candidate, vec![state]);
                        front.push((Reverse(candidate_cost), candidate));
                    }
                }
            }
        }

        let lowest_cost = lowest_cost?;
        debug!("{} goal states tie the optimum", end_states.len());

        // Backward closure through the predecessor multimap. The start state
        // has no predecessors, so the walk bottoms out there.
        let mut tiles = HashSet::new();
        let mut visited = HashSet::new();
        let mut back_track: Vec<State> = end_states.into_iter().collect();
        while let Some(state) = back_track.pop() {
            if !visited.insert(state) {
                continue;
            }
            tiles.insert(state.position);
            if let Some(preds) = predecessors.get(&state) {
                back_track.extend(preds.iter().copied());
            }
        }

        self.stats.cost = lowest_cost;
        self.stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;
        self.stats.print();

        Some(Solution {
            cost: lowest_cost,
            tiles: Some(tiles),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::TURN_COST;
    use super::*;

    // Published example mazes with known answers.
    const FIRST_EXAMPLE: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############";

    const SECOND_EXAMPLE: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################";

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("trace")
            .try_init();
    }

    fn solve(map: &Map) -> Option<(usize, HashSet<(usize, usize)>)> {
        OptimalTiles::new(map)
            .solve()
            .map(|solution| (solution.cost, solution.tiles.unwrap()))
    }

    #[test]
    fn test_first_example() {
        init_tracing();
        let map = Map::from_text(FIRST_EXAMPLE).unwrap();
        let (cost, tiles) = solve(&map).unwrap();
        assert_eq!(cost, 7036);
        assert_eq!(tiles.len(), 45);
    }

    #[test]
    fn test_second_example() {
        init_tracing();
        let map = Map::from_text(SECOND_EXAMPLE).unwrap();
        let (cost, tiles) = solve(&map).unwrap();
        assert_eq!(cost, 11048);
        assert_eq!(tiles.len(), 64);
    }

    #[test]
    fn test_single_optimal_route() {
        init_tracing();
        let map = Map::from_text(
            "\
#######
#S....#
#.....#
#.....#
#.....#
#....E#
#######",
        )
        .unwrap();
        // Any extra staircase step costs another pair of rotations, so the
        // east-then-south route is the unique optimum.
        let (cost, tiles) = solve(&map).unwrap();
        assert_eq!(cost, 1008);
        assert_eq!(tiles.len(), 9);
        assert!(tiles.contains(&map.start));
        assert!(tiles.contains(&map.goal));
    }

    #[test]
    fn test_twin_corridors_both_reported() {
        init_tracing();
        let map = Map::from_text(
            "\
#######
#.....#
#S###E#
#.....#
#######",
        )
        .unwrap();

        // Both detours cost 6 moves and 3 rotations; the result must union
        // the tiles of both, not just the first route found.
        let (cost, tiles) = solve(&map).unwrap();
        assert_eq!(cost, 3006);
        assert_eq!(tiles.len(), 12);
        assert!(tiles.contains(&(1, 2)));
        assert!(tiles.contains(&(3, 2)));
    }

    #[test]
    fn test_unreachable_goal_yields_none() {
        init_tracing();
        let map = Map::from_text("#####\n#S#E#\n#####").unwrap();
        assert_eq!(solve(&map), None);
    }

    #[test]
    fn test_start_equals_goal_is_single_tile() {
        init_tracing();
        let mut map = Map::from_text("#####\n#S.E#\n#####").unwrap();
        map.goal = map.start;
        let (cost, tiles) = solve(&map).unwrap();
        assert_eq!(cost, 0);
        assert_eq!(tiles, HashSet::from([map.start]));
    }

    #[test]
    fn test_solve_is_deterministic() {
        init_tracing();
        let map = Map::from_text(FIRST_EXAMPLE).unwrap();
        let first = solve(&map);
        let second = solve(&map);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tile_set_covers_a_whole_shortest_route() {
        init_tracing();
        let map = Map::from_text(FIRST_EXAMPLE).unwrap();
        let (cost, tiles) = solve(&map).unwrap();

        // The union over all optimal routes can be no smaller than one
        // route's tile count: moves on a route = cost modulo the rotation
        // cost, plus one for the start tile.
        let straight_moves = cost % TURN_COST;
        assert!(tiles.len() >= straight_moves + 1);
    }
}
