use crate::engine::IndicatorStrip;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub group: usize,
    pub label: String,
    pub active: bool,
}

/// One indicator per group. Owns the optional strip it mirrors into.
pub struct IndicatorSet {
    indicators: Vec<Indicator>,
    strip: Option<Box<dyn IndicatorStrip>>,
}

impl IndicatorSet {
    pub fn new(strip: Option<Box<dyn IndicatorStrip>>) -> Self {
        Self {
            indicators: Vec::new(),
            strip,
        }
    }

    /// Discard every indicator and create `count` new ones, none active.
    pub fn rebuild(&mut self, count: usize, step_size: usize) {
        let noun = if step_size > 1 { "page" } else { "slide" };
        self.indicators = (0..count)
            .map(|group| Indicator {
                group,
                label: format!("Go to {noun} {}", group + 1),
                active: false,
            })
            .collect();

        if let Some(strip) = self.strip.as_mut() {
            let labels: Vec<String> = self.indicators.iter().map(|i| i.label.clone()).collect();
            strip.rebuild(&labels);
        }
    }

    /// Exactly one indicator active. Calling twice with the same group is a no-op.
    pub fn sync(&mut self, active_group: usize) {
        for indicator in self.indicators.iter_mut() {
            indicator.active = indicator.group == active_group;
        }
        if let Some(strip) = self.strip.as_mut() {
            strip.sync(active_group);
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.indicators.iter().find(|i| i.active).map(|i| i.group)
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.indicators.iter()
    }

    /// Release the mirrored strip. The logical set stays readable.
    pub fn detach(&mut self) {
        self.strip = None;
    }
}

impl std::fmt::Debug for IndicatorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorSet")
            .field("indicators", &self.indicators)
            .field("strip", &self.strip.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        rebuilds: Vec<Vec<String>>,
        syncs: Vec<usize>,
    }

    struct RecordingStrip(Rc<RefCell<Recorded>>);

    impl IndicatorStrip for RecordingStrip {
        fn rebuild(&mut self, labels: &[String]) {
            self.0.borrow_mut().rebuilds.push(labels.to_vec());
        }

        fn sync(&mut self, active: usize) {
            self.0.borrow_mut().syncs.push(active);
        }
    }

    #[test]
    fn rebuild_replaces_previous_set() {
        let log = Rc::new(RefCell::new(Recorded::default()));
        let mut set = IndicatorSet::new(Some(Box::new(RecordingStrip(log.clone()))));

        set.rebuild(5, 1);
        set.sync(2);
        set.rebuild(3, 2);

        assert_eq!(set.len(), 3);
        assert_eq!(set.active(), None);
        let log = log.borrow();
        assert_eq!(log.rebuilds.len(), 2);
        assert_eq!(log.rebuilds[0][0], "Go to slide 1");
        assert_eq!(log.rebuilds[1][2], "Go to page 3");
    }

    #[test]
    fn sync_is_idempotent() {
        let mut set = IndicatorSet::new(None);
        set.rebuild(4, 1);

        set.sync(1);
        let first: Vec<Indicator> = set.iter().cloned().collect();
        set.sync(1);
        let second: Vec<Indicator> = set.iter().cloned().collect();

        assert_eq!(first, second);
        assert_eq!(set.iter().filter(|i| i.active).count(), 1);
        assert_eq!(set.active(), Some(1));
    }

    #[test]
    fn detached_strip_stops_receiving() {
        let log = Rc::new(RefCell::new(Recorded::default()));
        let mut set = IndicatorSet::new(Some(Box::new(RecordingStrip(log.clone()))));
        set.rebuild(2, 1);
        set.detach();
        set.sync(1);

        assert!(log.borrow().syncs.is_empty());
        assert_eq!(set.active(), Some(1));
    }
}
