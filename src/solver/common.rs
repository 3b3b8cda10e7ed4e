use crate::common::State;
use crate::map::Map;

pub(super) const MOVE_COST: usize = 1;
pub(super) const TURN_COST: usize = 1000;

/// Legal transitions out of `state`: one straight step when the next tile
/// is open, plus the two in-place rotations (always legal).
pub(super) fn transitions(map: &Map, state: &State) -> Vec<(usize, State)> {
    let mut result = Vec::with_capacity(3);
    if let Some(next_tile) = map.next_tile(state.position, state.direction) {
        result.push((
            MOVE_COST,
            State {
                position: next_tile,
                direction: state.direction,
            },
        ));
    }
    result.push((
        TURN_COST,
        State {
            position: state.position,
            direction: state.direction.turn_left(),
        },
    ));
    result.push((
        TURN_COST,
        State {
            position: state.position,
            direction: state.direction.turn_right(),
        },
    ));
    result
}
