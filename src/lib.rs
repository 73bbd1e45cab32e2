//! Carousel controller for slide tracks: position tracking, indicator sync,
//! input routing, autoplay and responsive paging, independent of the toolkit
//! that draws it.

pub mod carousel;
pub mod constants;
pub mod engine;
pub mod page;
pub mod slide;
pub mod state;
pub mod texture_loader;

pub use carousel::{Carousel, CarouselConfig, CarouselError, CarouselEvent, Direction, Input, Key};
pub use engine::{Container, Control, IndicatorStrip, Track};
pub use page::Page;
