#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransitionState {
    Idle,                             // Ready to accept a move
    Transitioning { remaining: f32 }, // Moves are dropped until the window closes
}

impl TransitionState {
    pub fn begin(duration: f32) -> Self {
        TransitionState::Transitioning {
            remaining: duration.max(0.0),
        }
    }

    /// Advance the window by `dt` seconds. Returns true when this call closed it.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self {
            TransitionState::Idle => false,
            TransitionState::Transitioning { remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    *self = TransitionState::Idle;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TransitionState::Transitioning { .. })
    }
}

/// Everything the position model needs to decide the next index.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PositionState {
    pub current_index: usize,
    pub step_size: usize,
    pub total_slides: usize,
    pub transition: TransitionState,
}

impl PositionState {
    pub fn new(total_slides: usize, step_size: usize) -> Self {
        Self {
            current_index: 0,
            step_size: step_size.max(1),
            total_slides,
            transition: TransitionState::Idle,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    /// Highest index a clamped carousel may rest on. The last page may be
    /// short, it is never snapped back to a full page boundary.
    pub fn clamp_limit(&self) -> usize {
        self.total_slides.saturating_sub(self.step_size)
    }

    /// Number of indicator-addressable groups.
    pub fn group_count(&self) -> usize {
        self.total_slides.div_ceil(self.step_size)
    }

    pub fn active_group(&self) -> usize {
        self.current_index / self.step_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_window_must_fully_elapse() {
        let mut transition = TransitionState::begin(0.5);
        assert!(!transition.tick(0.2));
        assert!(transition.is_active());
        assert!(!transition.tick(0.2));
        assert!(transition.tick(0.2));
        assert_eq!(transition, TransitionState::Idle);
        assert!(!transition.tick(1.0));
    }

    #[test]
    fn zero_length_window_closes_on_first_tick() {
        let mut transition = TransitionState::begin(0.0);
        assert!(transition.is_active());
        assert!(transition.tick(0.0));
    }

    #[test]
    fn group_math() {
        let state = PositionState::new(10, 3);
        assert_eq!(state.group_count(), 4);
        assert_eq!(state.clamp_limit(), 7);

        let state = PositionState { current_index: 7, ..state };
        assert_eq!(state.active_group(), 2);
    }

    #[test]
    fn step_size_is_at_least_one() {
        let state = PositionState::new(4, 0);
        assert_eq!(state.step_size, 1);
        assert_eq!(state.group_count(), 4);
    }

    #[test]
    fn fewer_slides_than_a_page() {
        let state = PositionState::new(2, 3);
        assert_eq!(state.clamp_limit(), 0);
        assert_eq!(state.group_count(), 1);
    }
}
