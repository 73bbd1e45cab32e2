//! Pure index arithmetic. Nothing here mutates; callers commit the result.

use crate::state::PositionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Index reached by one step in `direction`, before the no-op checks.
fn candidate(state: &PositionState, circular: bool, direction: Direction) -> Option<usize> {
    let total = state.total_slides;
    if total == 0 {
        return None;
    }
    let step = state.step_size;
    let index = if circular {
        match direction {
            Direction::Next => (state.current_index + step) % total,
            Direction::Prev => (state.current_index + total - step % total) % total,
        }
    } else {
        match direction {
            Direction::Next => state.current_index.saturating_add(step).min(state.clamp_limit()),
            Direction::Prev => state.current_index.saturating_sub(step),
        }
    };
    Some(index)
}

/// Target index of one step, or `None` when the move is a no-op.
pub fn advance(state: &PositionState, circular: bool, direction: Direction) -> Option<usize> {
    if state.is_transitioning() {
        return None;
    }
    candidate(state, circular, direction).filter(|index| *index != state.current_index)
}

/// Target index for an indicator click on `group`, or `None` when the move
/// is a no-op. Out-of-range groups clamp to the last reachable position.
pub fn go_to(state: &PositionState, circular: bool, group: usize) -> Option<usize> {
    if state.is_transitioning() || state.total_slides == 0 {
        return None;
    }
    let limit = if circular {
        state.total_slides - 1
    } else {
        state.clamp_limit()
    };
    let index = group.saturating_mul(state.step_size).min(limit);
    (index != state.current_index).then_some(index)
}

/// Whether the edge control for `direction` should be operative. Circular
/// carousels never disable their controls.
pub fn is_operative(state: &PositionState, circular: bool, direction: Direction) -> bool {
    if circular {
        return true;
    }
    match direction {
        Direction::Prev => state.current_index > 0,
        Direction::Next => state.current_index < state.clamp_limit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TransitionState;

    fn at(index: usize, total: usize, step: usize) -> PositionState {
        PositionState {
            current_index: index,
            ..PositionState::new(total, step)
        }
    }

    #[test]
    fn circular_wraps_forward_and_back() {
        assert_eq!(advance(&at(4, 5, 1), true, Direction::Next), Some(0));
        assert_eq!(advance(&at(0, 5, 1), true, Direction::Prev), Some(4));
        assert_eq!(advance(&at(2, 5, 1), true, Direction::Next), Some(3));
    }

    #[test]
    fn circular_next_then_prev_returns_home() {
        for total in 2..8 {
            for start in 0..total {
                let state = at(start, total, 1);
                let forward = advance(&state, true, Direction::Next).unwrap();
                let back = advance(&at(forward, total, 1), true, Direction::Prev).unwrap();
                assert_eq!(back, start, "total={total} start={start}");
            }
        }
    }

    #[test]
    fn single_slide_circular_never_moves() {
        assert_eq!(advance(&at(0, 1, 1), true, Direction::Next), None);
        assert_eq!(advance(&at(0, 1, 1), true, Direction::Prev), None);
    }

    #[test]
    fn clamped_saturates_at_edges() {
        assert_eq!(advance(&at(0, 9, 3), false, Direction::Prev), None);
        assert_eq!(advance(&at(6, 9, 3), false, Direction::Next), None);
        assert_eq!(advance(&at(3, 9, 3), false, Direction::Next), Some(6));
        // Short final page: 10 slides, pages of 3, last start is 7.
        assert_eq!(advance(&at(6, 10, 3), false, Direction::Next), Some(7));
        assert_eq!(advance(&at(7, 10, 3), false, Direction::Prev), Some(4));
    }

    #[test]
    fn clamped_round_trip_breaks_at_bounds() {
        let forward = advance(&at(6, 10, 3), false, Direction::Next).unwrap();
        let back = advance(&at(forward, 10, 3), false, Direction::Prev).unwrap();
        assert_ne!(back, 6);
    }

    #[test]
    fn go_to_maps_groups_to_indices() {
        assert_eq!(go_to(&at(0, 9, 3), false, 2), Some(6));
        assert_eq!(go_to(&at(0, 9, 3), false, 5), Some(6));
        assert_eq!(go_to(&at(6, 9, 3), false, 2), None);
        assert_eq!(go_to(&at(0, 10, 3), false, 3), Some(7));
        assert_eq!(go_to(&at(0, 5, 1), true, 9), Some(4));
    }

    #[test]
    fn transitioning_blocks_everything() {
        let state = PositionState {
            transition: TransitionState::begin(0.5),
            ..at(1, 5, 1)
        };
        assert_eq!(advance(&state, true, Direction::Next), None);
        assert_eq!(go_to(&state, true, 3), None);
    }

    #[test]
    fn empty_carousel_is_inert() {
        assert_eq!(advance(&at(0, 0, 1), true, Direction::Next), None);
        assert_eq!(go_to(&at(0, 0, 1), false, 0), None);
    }

    #[test]
    fn control_enablement() {
        assert!(!is_operative(&at(0, 9, 3), false, Direction::Prev));
        assert!(is_operative(&at(0, 9, 3), false, Direction::Next));
        assert!(!is_operative(&at(6, 9, 3), false, Direction::Next));
        assert!(is_operative(&at(0, 5, 1), true, Direction::Prev));
    }
}
