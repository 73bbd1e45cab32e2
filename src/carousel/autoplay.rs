#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseReason {
    Hover,  // Pointer is over the carousel
    Touch,  // A drag or touch gesture is in progress
    Hidden, // The page is not visible
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Timer {
    period: f32,
    elapsed: f32,
}

/// Repeating autoplay timer. At most one timer exists at any time and it only
/// runs while no pause reason is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Autoplay {
    period: Option<f32>,
    timer: Option<Timer>,
    hover: bool,
    touch: bool,
    hidden: bool,
}

impl Autoplay {
    pub fn new(period: Option<f32>) -> Self {
        Self {
            period: period.filter(|p| *p > 0.0),
            timer: None,
            hover: false,
            touch: false,
            hidden: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.hover || self.touch || self.hidden
    }

    fn flag(&mut self, reason: PauseReason) -> &mut bool {
        match reason {
            PauseReason::Hover => &mut self.hover,
            PauseReason::Touch => &mut self.touch,
            PauseReason::Hidden => &mut self.hidden,
        }
    }

    /// Replace any live timer with a fresh one, if allowed to run.
    pub fn start(&mut self) {
        self.stop();
        if self.is_paused() {
            return;
        }
        if let Some(period) = self.period {
            self.timer = Some(Timer {
                period,
                elapsed: 0.0,
            });
        }
    }

    pub fn stop(&mut self) {
        self.timer = None;
    }

    pub fn pause(&mut self, reason: PauseReason) {
        *self.flag(reason) = true;
        self.stop();
    }

    /// Clear `reason`. The timer comes back only when this was the last one
    /// holding it and it is not already running.
    pub fn resume(&mut self, reason: PauseReason) {
        *self.flag(reason) = false;
        if !self.is_paused() && !self.is_running() {
            self.start();
        }
    }

    /// Permanently disable. Used on teardown.
    pub fn cancel(&mut self) {
        self.stop();
        self.period = None;
    }

    /// Advance by `dt` seconds. Returns true when a period elapsed. Missed
    /// periods are dropped rather than replayed.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        timer.elapsed += dt;
        if timer.elapsed >= timer.period {
            timer.elapsed %= timer.period;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn fires_every_period() {
        let mut autoplay = Autoplay::new(Some(1.0));
        autoplay.start();
        assert!(!autoplay.tick(0.5));
        assert!(autoplay.tick(0.5));
        assert!(!autoplay.tick(0.75));
        assert!(autoplay.tick(0.25));
    }

    #[test]
    fn long_stall_fires_once() {
        let mut autoplay = Autoplay::new(Some(1.0));
        autoplay.start();
        assert!(autoplay.tick(3.5));
        assert!(!autoplay.tick(0.25));
        assert!(autoplay.tick(0.25));
    }

    #[test]
    fn disabled_never_runs() {
        let mut autoplay = Autoplay::new(None);
        autoplay.start();
        assert!(!autoplay.is_running());
        assert!(!autoplay.tick(100.0));
    }

    #[test]
    fn every_reason_must_clear() {
        let mut autoplay = Autoplay::new(Some(5.0));
        autoplay.start();
        autoplay.pause(PauseReason::Hover);
        autoplay.pause(PauseReason::Hidden);
        autoplay.resume(PauseReason::Hover);
        assert!(!autoplay.is_running());
        autoplay.resume(PauseReason::Hidden);
        assert!(autoplay.is_running());
    }

    #[test]
    fn resume_does_not_reset_a_running_timer() {
        let mut autoplay = Autoplay::new(Some(1.0));
        autoplay.start();
        autoplay.tick(0.75);
        autoplay.resume(PauseReason::Hover);
        assert!(autoplay.tick(0.25));
    }

    #[test]
    fn start_while_paused_stays_stopped() {
        let mut autoplay = Autoplay::new(Some(1.0));
        autoplay.pause(PauseReason::Touch);
        autoplay.start();
        assert!(!autoplay.is_running());
    }

    #[test]
    fn cancel_is_permanent() {
        let mut autoplay = Autoplay::new(Some(1.0));
        autoplay.start();
        autoplay.cancel();
        autoplay.start();
        autoplay.resume(PauseReason::Hover);
        assert!(!autoplay.is_running());
    }

    #[test]
    fn random_pause_resume_sequences_keep_one_timer_at_most() {
        let reasons = [PauseReason::Hover, PauseReason::Touch, PauseReason::Hidden];
        let mut rng = rand::rng();
        for _ in 0..200 {
            let mut autoplay = Autoplay::new(Some(5.0));
            autoplay.start();
            for _ in 0..rng.random_range(1..40) {
                let reason = reasons[rng.random_range(0..reasons.len())];
                match rng.random_range(0..3) {
                    0 => autoplay.pause(reason),
                    1 => autoplay.resume(reason),
                    _ => autoplay.start(),
                }
                // Running exactly when nothing holds it.
                assert_eq!(autoplay.is_running(), !autoplay.is_paused());
            }
        }
    }
}
