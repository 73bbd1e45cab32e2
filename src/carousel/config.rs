use crate::constants::*;

/// Viewport-width thresholds used to size a responsive page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub small: f32,
    pub medium: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small: BREAKPOINT_SMALL,
            medium: BREAKPOINT_MEDIUM,
        }
    }
}

impl Breakpoints {
    /// Slides per page for a viewport of `width`.
    pub fn step_for(&self, width: f32) -> usize {
        if width < self.small {
            1
        } else if width < self.medium {
            2
        } else {
            3
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepMode {
    Fixed(usize),
    Responsive(Breakpoints),
}

impl StepMode {
    /// Step size for the given viewport. Fixed modes ignore the width.
    pub fn resolve(&self, viewport_width: f32) -> usize {
        match self {
            StepMode::Fixed(step) => (*step).max(1),
            StepMode::Responsive(breakpoints) => breakpoints.step_for(viewport_width),
        }
    }

    pub fn is_responsive(&self) -> bool {
        matches!(self, StepMode::Responsive(_))
    }
}

/// Selects the carousel variant. The two presets cover the quote rotator and
/// the paged card strip; any other combination is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Wrap around at both ends instead of clamping.
    pub circular: bool,
    pub step: StepMode,
    /// Autoplay period in seconds, `None` to disable.
    pub autoplay: Option<f32>,
    /// Length of the transition window in seconds.
    pub transition: f32,
    pub swipe_threshold: f32,
    pub gap: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::quotes()
    }
}

impl CarouselConfig {
    /// Single-slide, circular, autoplaying.
    pub fn quotes() -> Self {
        Self {
            circular: true,
            step: StepMode::Fixed(1),
            autoplay: Some(AUTOPLAY_INTERVAL),
            transition: TRANSITION_DURATION,
            swipe_threshold: SWIPE_THRESHOLD,
            gap: SLIDE_GAP,
        }
    }

    /// Multi-slide pages sized from the viewport, clamped at both edges.
    pub fn pages() -> Self {
        Self {
            circular: false,
            step: StepMode::Responsive(Breakpoints::default()),
            autoplay: None,
            transition: TRANSITION_DURATION,
            swipe_threshold: SWIPE_THRESHOLD,
            gap: SLIDE_GAP,
        }
    }

    pub fn with_autoplay(mut self, period: Option<f32>) -> Self {
        self.autoplay = period.filter(|p| *p > 0.0);
        self
    }
}
