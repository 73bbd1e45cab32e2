use std::cell::RefCell;
use std::rc::Rc;

use quote_carousel::constants::TRANSITION_DURATION;
use quote_carousel::{Control, Direction, IndicatorStrip, Track};

/// What the controller last pushed out, plus the eased offset actually drawn.
#[derive(Debug, Default)]
pub struct CarouselView {
    pub labels: Vec<String>,
    pub active: Option<usize>,
    pub prev_enabled: bool,
    pub next_enabled: bool,

    target_offset: f32,
    start_offset: f32,
    pub offset: f32,
    animation_timer: f32,
    pub is_animating: bool,
}

impl CarouselView {
    fn retarget(&mut self, offset: f32) {
        if offset == self.target_offset {
            return;
        }
        self.start_offset = self.offset;
        self.target_offset = offset;
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = (self.animation_timer / TRANSITION_DURATION).min(1.0);
        let t = 1.0 - (1.0 - t).powi(3); // easeOutCubic

        self.offset = self.start_offset + (self.target_offset - self.start_offset) * t;

        if self.animation_timer >= TRANSITION_DURATION {
            self.is_animating = false;
            self.offset = self.target_offset;
        }
    }
}

pub type SharedView = Rc<RefCell<CarouselView>>;

pub struct ViewTrack(pub SharedView);

impl Track for ViewTrack {
    fn translate(&mut self, offset: f32) {
        self.0.borrow_mut().retarget(offset);
    }
}

pub struct ViewControl(pub SharedView, pub Direction);

impl Control for ViewControl {
    fn set_enabled(&mut self, enabled: bool) {
        let mut view = self.0.borrow_mut();
        match self.1 {
            Direction::Prev => view.prev_enabled = enabled,
            Direction::Next => view.next_enabled = enabled,
        }
    }
}

pub struct ViewIndicators(pub SharedView);

impl IndicatorStrip for ViewIndicators {
    fn rebuild(&mut self, labels: &[String]) {
        let mut view = self.0.borrow_mut();
        view.labels = labels.to_vec();
        view.active = None;
    }

    fn sync(&mut self, active: usize) {
        self.0.borrow_mut().active = Some(active);
    }
}
