/// Trailing-edge debounce over a cooperative clock: the latest value is
/// released once `wait` seconds pass without a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct Debounce<T> {
    wait: f32,
    pending: Option<(T, f32)>,
}

impl<T> Debounce<T> {
    pub fn new(wait: f32) -> Self {
        Self {
            wait: wait.max(0.0),
            pending: None,
        }
    }

    /// Replace whatever is pending and restart the quiet period.
    pub fn push(&mut self, value: T) {
        self.pending = Some((value, self.wait));
    }

    pub fn tick(&mut self, dt: f32) -> Option<T> {
        let (_, remaining) = self.pending.as_mut()?;
        *remaining -= dt;
        if *remaining <= 0.0 {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_latest_after_quiet_period() {
        let mut debounce = Debounce::new(0.25);
        debounce.push(1300.0);
        assert_eq!(debounce.tick(0.125), None);
        debounce.push(900.0);
        assert_eq!(debounce.tick(0.125), None);
        assert_eq!(debounce.tick(0.125), Some(900.0));
        assert_eq!(debounce.tick(1.0), None);
    }
}
