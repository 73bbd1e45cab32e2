//! Output seams between the controller and whatever draws it.
//!
//! A host hands the controller one boxed handle per structural element it
//! actually has. Only the track is required; the rest degrade to "feature off".

/// The strip holding every slide. Receives the single horizontal offset.
pub trait Track {
    fn translate(&mut self, offset: f32);
}

/// A prev or next button.
pub trait Control {
    fn set_enabled(&mut self, enabled: bool);
}

/// The row of page indicators.
pub trait IndicatorStrip {
    /// Drop every existing indicator and create one per label.
    fn rebuild(&mut self, labels: &[String]);
    /// Mark `active` as the current indicator and clear the others.
    fn sync(&mut self, active: usize);
}

/// Structural handles of one carousel, injected at attach time.
#[derive(Default)]
pub struct Container {
    pub track: Option<Box<dyn Track>>,
    pub slide_widths: Vec<f32>,
    pub prev: Option<Box<dyn Control>>,
    pub next: Option<Box<dyn Control>>,
    pub indicators: Option<Box<dyn IndicatorStrip>>,
}

impl Container {
    pub fn new(track: Box<dyn Track>, slide_widths: Vec<f32>) -> Self {
        Self {
            track: Some(track),
            slide_widths,
            ..Self::default()
        }
    }

    pub fn with_controls(mut self, prev: Box<dyn Control>, next: Box<dyn Control>) -> Self {
        self.prev = Some(prev);
        self.next = Some(next);
        self
    }

    pub fn with_indicators(mut self, indicators: Box<dyn IndicatorStrip>) -> Self {
        self.indicators = Some(indicators);
        self
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("track", &self.track.is_some())
            .field("slides", &self.slide_widths.len())
            .field("prev", &self.prev.is_some())
            .field("next", &self.next.is_some())
            .field("indicators", &self.indicators.is_some())
            .finish()
    }
}
