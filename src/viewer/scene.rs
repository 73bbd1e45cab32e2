use std::cell::RefCell;
use std::rc::Rc;

use raylib::prelude::*;

use quote_carousel::constants::SLIDE_GAP;
use quote_carousel::page::CarouselId;
use quote_carousel::{CarouselConfig, Container, Direction, Input, Page};

use crate::viewer::content::SlideContent;
use crate::viewer::surfaces::{CarouselView, SharedView, ViewControl, ViewIndicators, ViewTrack};

const BUTTON_SIZE: f32 = 48.0;
const DOT_RADIUS: f32 = 7.0;
const DOT_SPACING: f32 = 26.0;

/// Where a click landed inside a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    Prev,
    Next,
    Indicator(usize),
    Track,
}

/// One carousel on screen: its slides, the shared view the controller writes
/// to, and the geometry used for drawing and hit testing.
pub struct Panel {
    pub id: CarouselId,
    view: SharedView,
    slides: Vec<SlideContent>,
    slide_width: f32,
    slide_height: f32,
    top: f32,
    pub hovered: bool,
    pub dragging: bool,
}

impl Panel {
    pub fn mount(
        page: &mut Page,
        config: CarouselConfig,
        slides: Vec<SlideContent>,
        slide_width: f32,
        slide_height: f32,
        top: f32,
    ) -> Self {
        let view: SharedView = Rc::new(RefCell::new(CarouselView::default()));
        let container = Container::new(
            Box::new(ViewTrack(view.clone())),
            vec![slide_width; slides.len()],
        )
        .with_controls(
            Box::new(ViewControl(view.clone(), Direction::Prev)),
            Box::new(ViewControl(view.clone(), Direction::Next)),
        )
        .with_indicators(Box::new(ViewIndicators(view.clone())));

        let id = page.mount(container, config);
        Self {
            id,
            view,
            slides,
            slide_width,
            slide_height,
            top,
            hovered: false,
            dragging: false,
        }
    }

    fn step(&self, page: &Page) -> usize {
        page.carousel(self.id)
            .and_then(|c| c.state())
            .map(|s| s.step_size)
            .unwrap_or(1)
    }

    /// Visible window onto the track, centred horizontally.
    pub fn region(&self, page: &Page, screen_width: f32) -> Rectangle {
        let step = self.step(page).min(self.slides.len().max(1)) as f32;
        let width = step * self.slide_width + (step - 1.0) * SLIDE_GAP;
        Rectangle::new((screen_width - width) * 0.5, self.top, width, self.slide_height)
    }

    fn prev_button(&self, region: Rectangle) -> Rectangle {
        Rectangle::new(
            region.x - BUTTON_SIZE - 16.0,
            region.y + (region.height - BUTTON_SIZE) * 0.5,
            BUTTON_SIZE,
            BUTTON_SIZE,
        )
    }

    fn next_button(&self, region: Rectangle) -> Rectangle {
        Rectangle::new(
            region.x + region.width + 16.0,
            region.y + (region.height - BUTTON_SIZE) * 0.5,
            BUTTON_SIZE,
            BUTTON_SIZE,
        )
    }

    fn dot_center(&self, region: Rectangle, index: usize, count: usize) -> Vector2 {
        let row_width = (count.saturating_sub(1)) as f32 * DOT_SPACING;
        Vector2::new(
            region.x + region.width * 0.5 - row_width * 0.5 + index as f32 * DOT_SPACING,
            region.y + region.height + 28.0,
        )
    }

    /// Outer bounds including controls and indicators, used for hover.
    pub fn bounds(&self, page: &Page, screen_width: f32) -> Rectangle {
        let region = self.region(page, screen_width);
        let prev = self.prev_button(region);
        Rectangle::new(
            prev.x,
            region.y,
            region.width + 2.0 * (BUTTON_SIZE + 16.0),
            region.height + 48.0,
        )
    }

    pub fn hit(&self, page: &Page, screen_width: f32, point: Vector2) -> Option<Hit> {
        let region = self.region(page, screen_width);
        if self.prev_button(region).check_collision_point_rec(point) {
            return Some(Hit::Prev);
        }
        if self.next_button(region).check_collision_point_rec(point) {
            return Some(Hit::Next);
        }
        let count = self.view.borrow().labels.len();
        for index in 0..count {
            let center = self.dot_center(region, index, count);
            if center.distance_to(point) <= DOT_RADIUS + 4.0 {
                return Some(Hit::Indicator(index));
            }
        }
        region.check_collision_point_rec(point).then_some(Hit::Track)
    }

    pub fn input_for(hit: Hit, x: f32) -> Input {
        match hit {
            Hit::Prev => Input::Prev,
            Hit::Next => Input::Next,
            Hit::Indicator(group) => Input::Indicator(group),
            Hit::Track => Input::PointerDown { x },
        }
    }

    pub fn update(&self, dt: f32) {
        self.view.borrow_mut().update(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, page: &Page, focused: bool) {
        let screen_width = d.get_screen_width() as f32;
        let region = self.region(page, screen_width);
        let view = self.view.borrow();

        {
            let mut s = d.begin_scissor_mode(
                region.x as i32,
                region.y as i32,
                region.width as i32,
                region.height as i32,
            );
            for (i, slide) in self.slides.iter().enumerate() {
                let x = region.x + view.offset + i as f32 * (self.slide_width + SLIDE_GAP);
                if x + self.slide_width < region.x || x > region.x + region.width {
                    continue;
                }
                slide.draw(&mut s, Rectangle::new(x, region.y, self.slide_width, self.slide_height));
            }
        }

        if focused {
            d.draw_rectangle_lines_ex(
                Rectangle::new(region.x - 4.0, region.y - 4.0, region.width + 8.0, region.height + 8.0),
                2.0,
                Color::SKYBLUE,
            );
        }

        draw_button(d, self.prev_button(region), "<", view.prev_enabled);
        draw_button(d, self.next_button(region), ">", view.next_enabled);

        let count = view.labels.len();
        for index in 0..count {
            let center = self.dot_center(region, index, count);
            let color = if view.active == Some(index) {
                Color::DARKGRAY
            } else {
                Color::LIGHTGRAY
            };
            d.draw_circle_v(center, DOT_RADIUS, color);
        }
    }
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, glyph: &str, enabled: bool) {
    let background = if enabled { Color::DARKGRAY } else { Color::LIGHTGRAY };
    d.draw_rectangle_rec(rect, background);
    d.draw_text(glyph, rect.x as i32 + 18, rect.y as i32 + 10, 28, Color::RAYWHITE);
}
