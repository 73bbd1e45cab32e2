/// One visual unit on the track. The controller only cares about where it sits
/// and how wide it was measured at attach time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub index: usize,
    pub width: f32,
}

impl Slide {
    pub fn new(index: usize, width: f32) -> Self {
        Self {
            index,
            width: width.max(0.0),
        }
    }
}

/// Ordered slides, fixed for the lifetime of a carousel.
#[derive(Debug, Clone, Default)]
pub struct SlideCollection {
    slides: Vec<Slide>,
}

impl SlideCollection {
    pub fn from_widths<I>(widths: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        let slides = widths
            .into_iter()
            .enumerate()
            .map(|(index, width)| Slide::new(index, width))
            .collect();
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Horizontal translation that brings `index` to the left edge of the
    /// viewport. Every earlier slide contributes its width plus one gap.
    pub fn offset_of(&self, index: usize, gap: f32) -> f32 {
        let distance: f32 = self
            .slides
            .iter()
            .take(index)
            .map(|slide| slide.width + gap)
            .sum();
        -distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_accumulate_width_and_gap() {
        let slides = SlideCollection::from_widths([300.0, 300.0, 300.0]);
        assert_eq!(slides.offset_of(0, 32.0), 0.0);
        assert_eq!(slides.offset_of(1, 32.0), -332.0);
        assert_eq!(slides.offset_of(2, 32.0), -664.0);
    }

    #[test]
    fn offsets_follow_measured_widths() {
        let slides = SlideCollection::from_widths([100.0, 250.0, 80.0]);
        assert_eq!(slides.offset_of(2, 10.0), -(110.0 + 260.0));
        // Past the end simply sums everything.
        assert_eq!(slides.offset_of(10, 0.0), -430.0);
    }

    #[test]
    fn negative_widths_are_floored() {
        let slides = SlideCollection::from_widths([-5.0, 20.0]);
        assert_eq!(slides.get(0).map(|s| s.width), Some(0.0));
        assert_eq!(slides.get(1).map(|s| s.index), Some(1));
        assert_eq!(slides.len(), 2);
    }
}
