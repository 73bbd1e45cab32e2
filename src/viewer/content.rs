use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};

use quote_carousel::texture_loader::{extension_of, load_sorted_image_paths, read_image, Orientation};

const QUOTES: &[(&str, &str)] = &[
    ("The horizon is not a line, it is an invitation.", "Raphael"),
    ("Every page turned is a step taken.", "A reader"),
    ("Small moves, repeated, become a direction.", "Anonymous"),
    ("We write to taste life twice.", "Anais Nin"),
    ("Not all those who wander are lost.", "J.R.R. Tolkien"),
];

const CARD_COLORS: &[Color] = &[
    Color::new(231, 111, 81, 255),
    Color::new(244, 162, 97, 255),
    Color::new(233, 196, 106, 255),
    Color::new(42, 157, 143, 255),
    Color::new(38, 70, 83, 255),
];

pub enum SlideContent {
    Quote { text: String, author: String },
    Card { title: String, color: Color },
    Image(Texture2D),
}

pub fn quote_slides(shuffle: bool) -> Vec<SlideContent> {
    let mut quotes: Vec<_> = QUOTES.to_vec();
    if shuffle {
        quotes.shuffle(&mut rand::rng());
    }
    quotes
        .into_iter()
        .map(|(text, author)| SlideContent::Quote {
            text: text.to_string(),
            author: author.to_string(),
        })
        .collect()
}

pub fn generated_cards(count: usize) -> Vec<SlideContent> {
    (0..count)
        .map(|i| SlideContent::Card {
            title: format!("Card {}", i + 1),
            color: CARD_COLORS[i % CARD_COLORS.len()],
        })
        .collect()
}

/// Image cards from `dir`. Files that fail to decode are skipped.
pub fn image_cards(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: &Path,
    shuffle: bool,
) -> Result<Vec<SlideContent>> {
    let mut paths = load_sorted_image_paths(dir)?;
    if shuffle {
        paths.shuffle(&mut rand::rng());
    }

    let mut slides = Vec::new();
    for path in paths {
        match load_texture(rl, thread, &path) {
            Ok(texture) => slides.push(SlideContent::Image(texture)),
            Err(e) => warn!(?path, "skipping image: {:#}", e),
        }
    }
    info!(count = slides.len(), ?dir, "image cards loaded");
    Ok(slides)
}

fn load_texture(rl: &mut RaylibHandle, thread: &RaylibThread, path: &Path) -> Result<Texture2D> {
    let (bytes, orientation) = read_image(path)?;
    let extension = format!(".{}", extension_of(path));

    let mut image = Image::load_image_from_mem(&extension, &bytes)
        .with_context(|| format!("failed to decode {:?}", path))?;

    match orientation {
        Orientation::Rotate180 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Orientation::Rotate90Cw => image.rotate_cw(),
        Orientation::Rotate90Ccw => image.rotate_ccw(),
        Orientation::Upright => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .with_context(|| format!("failed to create texture for {:?}", path))?;
    Ok(texture)
}

/// Greedy word wrap on character count.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

impl SlideContent {
    pub fn draw(&self, d: &mut impl RaylibDraw, rect: Rectangle) {
        match self {
            SlideContent::Quote { text, author } => {
                d.draw_rectangle_rec(rect, Color::new(250, 246, 240, 255));
                let mut y = rect.y as i32 + 40;
                for line in wrap(text, 36) {
                    d.draw_text(&line, rect.x as i32 + 40, y, 32, Color::DARKGRAY);
                    y += 40;
                }
                d.draw_text(
                    &format!("- {}", author),
                    rect.x as i32 + 40,
                    (rect.y + rect.height) as i32 - 60,
                    24,
                    Color::GRAY,
                );
            }
            SlideContent::Card { title, color } => {
                d.draw_rectangle_rec(rect, *color);
                d.draw_text(title, rect.x as i32 + 24, rect.y as i32 + 24, 28, Color::RAYWHITE);
            }
            SlideContent::Image(texture) => {
                d.draw_rectangle_rec(rect, Color::BLACK);
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;
                let scale = (rect.width / tex_width).min(rect.height / tex_height);
                let width = tex_width * scale;
                let height = tex_height * scale;
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(
                        rect.x + (rect.width - width) * 0.5,
                        rect.y + (rect.height - height) * 0.5,
                        width,
                        height,
                    ),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("Small moves, repeated, become a direction.", 16),
            vec!["Small moves,", "repeated, become", "a direction."]
        );
        assert!(wrap("   ", 10).is_empty());
    }
}
