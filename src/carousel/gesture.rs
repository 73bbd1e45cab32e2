use super::position::Direction;

/// Tracks one horizontal drag from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    threshold: f32,
    start_x: Option<f32>,
}

impl Gesture {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the drag at `x`. A finger moving left pulls in the next slide.
    /// Drags no longer than the threshold, or without a matching begin, yield nothing.
    pub fn end(&mut self, x: f32) -> Option<Direction> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= self.threshold {
            return None;
        }
        if diff > 0.0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Prev)
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}
