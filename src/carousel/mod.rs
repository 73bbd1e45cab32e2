//! Carousel controller: one position model driving a track, its indicators
//! and its edge controls, fed by discrete inputs and a cooperative clock.

pub mod autoplay;
pub mod config;
pub mod debounce;
pub mod gesture;
pub mod indicators;
pub mod position;

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::engine::{Container, Control, Track};
use crate::slide::SlideCollection;
use crate::state::{PositionState, TransitionState};

pub use autoplay::{Autoplay, PauseReason};
pub use config::{Breakpoints, CarouselConfig, StepMode};
pub use debounce::Debounce;
pub use gesture::Gesture;
pub use indicators::{Indicator, IndicatorSet};
pub use position::Direction;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel container has no track")]
    MissingTrack,
    #[error("carousel container has no slides")]
    NoSlides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Everything a host can feed into a carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Prev,
    Next,
    Indicator(usize),
    /// Only honoured while the carousel holds focus.
    Key(Key),
    FocusGained,
    FocusLost,
    PointerEnter,
    PointerLeave,
    PointerDown { x: f32 },
    PointerUp { x: f32 },
    PointerCancel,
    VisibilityChanged { hidden: bool },
    Resize { width: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    PositionChanged { index: usize, group: usize },
}

struct Attached {
    config: CarouselConfig,
    slides: SlideCollection,
    position: PositionState,
    indicators: IndicatorSet,
    autoplay: Autoplay,
    gesture: Gesture,
    focused: bool,
    track: Box<dyn Track>,
    prev: Option<Box<dyn Control>>,
    next: Option<Box<dyn Control>>,
}

impl Attached {
    /// Push the current position out to every surface.
    fn render(&mut self) {
        let offset = self
            .slides
            .offset_of(self.position.current_index, self.config.gap);
        self.track.translate(offset);
        self.indicators.sync(self.position.active_group());

        let circular = self.config.circular;
        if let Some(prev) = self.prev.as_mut() {
            prev.set_enabled(position::is_operative(&self.position, circular, Direction::Prev));
        }
        if let Some(next) = self.next.as_mut() {
            next.set_enabled(position::is_operative(&self.position, circular, Direction::Next));
        }
    }

    fn rebuild_indicators(&mut self) {
        self.indicators
            .rebuild(self.position.group_count(), self.position.step_size);
    }

    /// Commit `target`, open the transition window and report the move.
    fn commit(&mut self, target: usize) -> CarouselEvent {
        self.position.current_index = target;
        self.position.transition = TransitionState::begin(self.config.transition);
        self.render();

        let group = self.position.active_group();
        debug!(index = target, group, "carousel moved");
        CarouselEvent::PositionChanged {
            index: target,
            group,
        }
    }

    fn advance(&mut self, direction: Direction) -> Option<CarouselEvent> {
        match position::advance(&self.position, self.config.circular, direction) {
            Some(target) => Some(self.commit(target)),
            None => {
                trace!(?direction, index = self.position.current_index, "advance dropped");
                None
            }
        }
    }

    fn go_to(&mut self, group: usize) -> Option<CarouselEvent> {
        match position::go_to(&self.position, self.config.circular, group) {
            Some(target) => Some(self.commit(target)),
            None => {
                trace!(group, index = self.position.current_index, "go_to dropped");
                None
            }
        }
    }

    /// Recompute the page size for a new viewport width. Unchanged sizes are
    /// ignored so toolbar show/hide does not reset the carousel.
    fn relayout(&mut self, width: f32) -> Option<CarouselEvent> {
        let step = self.config.step.resolve(width);
        if step == self.position.step_size {
            return None;
        }
        debug!(from = self.position.step_size, to = step, width, "carousel re-layout");

        let previous = self.position.current_index;
        self.position.step_size = step;
        self.position.current_index = 0;
        self.rebuild_indicators();
        self.render();

        (previous != 0).then_some(CarouselEvent::PositionChanged { index: 0, group: 0 })
    }
}

/// A carousel instance. Attaching to an incomplete container yields an inert
/// controller on which every operation is a silent no-op.
pub struct Carousel {
    inner: Option<Attached>,
    events: Vec<CarouselEvent>,
}

impl Carousel {
    /// Wire a carousel to `container`, failing when a required element is absent.
    pub fn try_attach(
        container: Container,
        config: CarouselConfig,
        viewport_width: f32,
    ) -> Result<Self, CarouselError> {
        let Container {
            track,
            slide_widths,
            prev,
            next,
            indicators,
        } = container;

        let track = track.ok_or(CarouselError::MissingTrack)?;
        if slide_widths.is_empty() {
            return Err(CarouselError::NoSlides);
        }

        let slides = SlideCollection::from_widths(slide_widths);
        let step = config.step.resolve(viewport_width);
        let mut attached = Attached {
            config,
            position: PositionState::new(slides.len(), step),
            slides,
            indicators: IndicatorSet::new(indicators),
            autoplay: Autoplay::new(config.autoplay),
            gesture: Gesture::new(config.swipe_threshold),
            focused: false,
            track,
            prev,
            next,
        };
        attached.rebuild_indicators();
        attached.render();
        attached.autoplay.start();

        debug!(
            slides = attached.slides.len(),
            step,
            circular = config.circular,
            autoplay = attached.autoplay.is_running(),
            "carousel attached"
        );
        Ok(Self {
            inner: Some(attached),
            events: Vec::new(),
        })
    }

    /// Like [`Carousel::try_attach`], but an incomplete container produces an
    /// inert carousel instead of an error.
    pub fn attach(container: Container, config: CarouselConfig, viewport_width: f32) -> Self {
        match Self::try_attach(container, config, viewport_width) {
            Ok(carousel) => carousel,
            Err(e) => {
                warn!("carousel left inert: {}", e);
                Self::inert()
            }
        }
    }

    pub fn inert() -> Self {
        Self {
            inner: None,
            events: Vec::new(),
        }
    }

    pub fn is_inert(&self) -> bool {
        self.inner.is_none()
    }

    pub fn state(&self) -> Option<PositionState> {
        self.inner.as_ref().map(|a| a.position)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.inner.as_ref().map(|a| a.position.current_index)
    }

    pub fn indicators(&self) -> Option<&IndicatorSet> {
        self.inner.as_ref().map(|a| &a.indicators)
    }

    pub fn is_focused(&self) -> bool {
        self.inner.as_ref().is_some_and(|a| a.focused)
    }

    pub fn is_autoplaying(&self) -> bool {
        self.inner.as_ref().is_some_and(|a| a.autoplay.is_running())
    }

    /// Route one input. Returns true when it moved the carousel.
    pub fn handle(&mut self, input: Input) -> bool {
        let Some(attached) = self.inner.as_mut() else {
            return false;
        };

        let event = match input {
            Input::Prev => edge(attached, Direction::Prev),
            Input::Next => edge(attached, Direction::Next),
            Input::Indicator(group) => attached.go_to(group),
            Input::Key(key) => {
                if !attached.focused {
                    return false;
                }
                match key {
                    Key::ArrowLeft => attached.advance(Direction::Prev),
                    Key::ArrowRight => attached.advance(Direction::Next),
                    Key::Other => None,
                }
            }
            Input::FocusGained => {
                attached.focused = true;
                None
            }
            Input::FocusLost => {
                attached.focused = false;
                None
            }
            Input::PointerEnter => {
                attached.autoplay.pause(PauseReason::Hover);
                None
            }
            Input::PointerLeave => {
                attached.autoplay.resume(PauseReason::Hover);
                None
            }
            Input::PointerDown { x } => {
                attached.gesture.begin(x);
                attached.autoplay.pause(PauseReason::Touch);
                None
            }
            Input::PointerUp { x } => {
                let swipe = attached.gesture.end(x);
                attached.autoplay.resume(PauseReason::Touch);
                swipe.and_then(|direction| attached.advance(direction))
            }
            Input::PointerCancel => {
                attached.gesture.cancel();
                attached.autoplay.resume(PauseReason::Touch);
                None
            }
            Input::VisibilityChanged { hidden } => {
                if hidden {
                    attached.autoplay.pause(PauseReason::Hidden);
                } else {
                    attached.autoplay.resume(PauseReason::Hidden);
                }
                None
            }
            Input::Resize { width } => attached.relayout(width),
        };

        match event {
            Some(event) => {
                self.events.push(event);
                true
            }
            None => false,
        }
    }

    /// Advance the clock by `dt` seconds: close an elapsed transition window,
    /// then let autoplay fire.
    pub fn tick(&mut self, dt: f32) {
        let Some(attached) = self.inner.as_mut() else {
            return;
        };

        if attached.position.transition.tick(dt) {
            trace!(index = attached.position.current_index, "transition settled");
        }
        if attached.autoplay.tick(dt) {
            if let Some(event) = attached.advance(Direction::Next) {
                self.events.push(event);
            }
        }
    }

    /// Take every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.events)
    }

    /// Cancel autoplay and release every surface. The carousel is inert afterwards.
    pub fn teardown(&mut self) {
        if let Some(mut attached) = self.inner.take() {
            attached.autoplay.cancel();
            attached.gesture.cancel();
            attached.indicators.detach();
            debug!(index = attached.position.current_index, "carousel torn down");
        }
    }
}

/// Prev/next control press. Disabled controls do nothing.
fn edge(attached: &mut Attached, direction: Direction) -> Option<CarouselEvent> {
    if !position::is_operative(&attached.position, attached.config.circular, direction) {
        trace!(?direction, "control disabled");
        return None;
    }
    attached.advance(direction)
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("state", &self.state())
            .field("pending_events", &self.events.len())
            .finish()
    }
}
