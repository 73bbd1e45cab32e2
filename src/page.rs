//! Application root: owns every carousel on the page and fans out page-wide
//! signals to them.

use tracing::{debug, info, warn};

use crate::carousel::{Carousel, CarouselConfig, CarouselEvent, Input, Key};
use crate::engine::Container;

pub type CarouselId = usize;

#[derive(Debug)]
pub struct Page {
    carousels: Vec<Carousel>,
    viewport_width: f32,
    hidden: bool,
    focused: Option<CarouselId>,
}

impl Page {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            carousels: Vec::new(),
            viewport_width,
            hidden: false,
            focused: None,
        }
    }

    /// Attach a carousel to `container`. A container that cannot be wired is
    /// logged and kept as an inert slot so ids stay stable and the rest of the
    /// page still initializes.
    pub fn mount(&mut self, container: Container, config: CarouselConfig) -> CarouselId {
        let id = self.carousels.len();
        let mut carousel = match Carousel::try_attach(container, config, self.viewport_width) {
            Ok(carousel) => carousel,
            Err(e) => {
                warn!(carousel = id, "carousel initialization skipped: {}", e);
                Carousel::inert()
            }
        };
        if self.hidden {
            carousel.handle(Input::VisibilityChanged { hidden: true });
        }
        self.carousels.push(carousel);
        id
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    pub fn carousel(&self, id: CarouselId) -> Option<&Carousel> {
        self.carousels.get(id)
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn focused(&self) -> Option<CarouselId> {
        self.focused
    }

    /// Route an input to one carousel.
    pub fn dispatch(&mut self, id: CarouselId, input: Input) -> bool {
        self.carousels
            .get_mut(id)
            .is_some_and(|carousel| carousel.handle(input))
    }

    /// Move keyboard focus. At most one carousel holds it.
    pub fn focus(&mut self, id: Option<CarouselId>) {
        if self.focused == id {
            return;
        }
        if let Some(previous) = self.focused.take() {
            self.dispatch(previous, Input::FocusLost);
        }
        if let Some(next) = id.filter(|id| *id < self.carousels.len()) {
            self.dispatch(next, Input::FocusGained);
            self.focused = Some(next);
        }
    }

    /// Arrow keys go to the focused carousel only.
    pub fn key(&mut self, key: Key) -> bool {
        match self.focused {
            Some(id) => self.dispatch(id, Input::Key(key)),
            None => false,
        }
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if self.hidden == hidden {
            return;
        }
        self.hidden = hidden;
        debug!(hidden, "page visibility changed");
        for carousel in self.carousels.iter_mut() {
            carousel.handle(Input::VisibilityChanged { hidden });
        }
    }

    pub fn resize(&mut self, width: f32) {
        self.viewport_width = width;
        for carousel in self.carousels.iter_mut() {
            carousel.handle(Input::Resize { width });
        }
    }

    pub fn tick(&mut self, dt: f32) {
        for carousel in self.carousels.iter_mut() {
            carousel.tick(dt);
        }
    }

    /// Events from every carousel, tagged with the carousel they came from.
    pub fn drain_events(&mut self) -> Vec<(CarouselId, CarouselEvent)> {
        self.carousels
            .iter_mut()
            .enumerate()
            .flat_map(|(id, carousel)| {
                carousel
                    .drain_events()
                    .into_iter()
                    .map(move |event| (id, event))
            })
            .collect()
    }

    /// Tear every carousel down. Nothing fires afterwards.
    pub fn unload(&mut self) {
        for carousel in self.carousels.iter_mut() {
            carousel.teardown();
        }
        self.focused = None;
        info!(carousels = self.carousels.len(), "page unloaded");
    }
}
