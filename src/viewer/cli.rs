use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use quote_carousel::constants::AUTOPLAY_INTERVAL;

/// Which carousels the window mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    Quotes, // Single-slide rotator with autoplay
    Pages,  // Responsive paged card strip
    Both,
}

impl Layout {
    pub fn shows_quotes(self) -> bool {
        matches!(self, Layout::Quotes | Layout::Both)
    }

    pub fn shows_pages(self) -> bool {
        matches!(self, Layout::Pages | Layout::Both)
    }
}

/// Interactive viewer for the quote rotator and the paged card strip.
#[derive(Debug, Parser)]
#[command(name = "carousel-viewer", version)]
pub struct Args {
    /// Directory of images for the card strip. Generated cards are used when omitted.
    pub image_dir: Option<PathBuf>,

    /// Carousels to show.
    #[arg(long, value_enum, default_value_t = Layout::Both)]
    pub layout: Layout,

    /// Number of generated cards when no image directory is given.
    #[arg(long, default_value_t = 9)]
    pub slides: usize,

    /// Disable quote autoplay.
    #[arg(long)]
    pub no_autoplay: bool,

    /// Autoplay period in seconds.
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL)]
    pub interval: f32,

    /// Shuffle quotes and images.
    #[arg(long)]
    pub shuffle: bool,
}

impl Args {
    pub fn autoplay(&self) -> Option<f32> {
        (!self.no_autoplay).then_some(self.interval)
    }
}
