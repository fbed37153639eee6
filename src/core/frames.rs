//! Frame aggregator — measured story rectangles keyed by story id.
//!
//! Each rendered carousel item reports where it ended up.  Reports are merged
//! right-biased: a fresh measurement for an id replaces the old one but keeps
//! the id's original insertion slot, so iteration order is deterministic.
//! Within a measurement pass nothing is evicted and readers filter by
//! viewport; the host empties the aggregate when a new pass begins.

use std::collections::HashMap;

use super::geometry::Rect;
use super::story::StoryId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameAggregator {
    /// Insertion-ordered entries.
    entries: Vec<(StoryId, Rect)>,
    /// id → position in `entries`.
    index: HashMap<StoryId, usize>,
}

impl FrameAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single measurement (last write wins).
    pub fn report(&mut self, id: impl Into<StoryId>, rect: Rect) {
        let id = id.into();
        match self.index.get(&id) {
            Some(&slot) => self.entries[slot].1 = rect,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, rect));
            }
        }
    }

    /// Merge a partial mapping into the aggregate.
    pub fn merge<I, K>(&mut self, update: I)
    where
        I: IntoIterator<Item = (K, Rect)>,
        K: Into<StoryId>,
    {
        for (id, rect) in update {
            self.report(id, rect);
        }
    }

    /// Forget every measurement.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.index.get(id).map(|&slot| self.entries[slot].1)
    }

    /// Every known frame, stale ones included, in insertion order.
    pub fn snapshot(&self) -> &[(StoryId, Rect)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn newer_measurement_wins() {
        let mut frames = FrameAggregator::new();
        frames.report("story_0", Rect::new(0.0, 0.0, 80.0, 80.0));
        frames.report("story_1", Rect::new(90.0, 0.0, 80.0, 80.0));
        frames.merge([("story_0", Rect::new(-40.0, 0.0, 80.0, 80.0))]);

        assert_eq!(frames.len(), 2);
        assert_eq!(frames.get("story_0"), Some(Rect::new(-40.0, 0.0, 80.0, 80.0)));
        // Overwrite keeps the original slot.
        assert_eq!(frames.snapshot()[0].0, "story_0");
    }

    #[test]
    fn missing_id_is_absent() {
        let frames = FrameAggregator::new();
        assert!(frames.is_empty());
        assert_eq!(frames.get("story_0"), None);
    }

    #[test]
    fn clear_forgets_slots() {
        let mut frames = FrameAggregator::new();
        frames.report("story_0", Rect::new(0.0, 0.0, 80.0, 80.0));
        frames.report("story_1", Rect::new(90.0, 0.0, 80.0, 80.0));
        frames.clear();
        assert!(frames.is_empty());
        assert_eq!(frames.get("story_0"), None);

        frames.report("story_1", Rect::new(10.0, 0.0, 80.0, 80.0));
        assert_eq!(frames.snapshot()[0].0, "story_1");
    }

    fn update_strategy() -> impl Strategy<Value = Vec<(u8, (i16, i16))>> {
        prop::collection::vec((0u8..8, (any::<i16>(), any::<i16>())), 0..16)
    }

    fn to_rects(update: &[(u8, (i16, i16))]) -> Vec<(String, Rect)> {
        update
            .iter()
            .map(|&(id, (x, y))| {
                (
                    format!("story_{id}"),
                    Rect::new(f64::from(x), f64::from(y), 80.0, 80.0),
                )
            })
            .collect()
    }

    proptest! {
        #[test]
        fn merge_is_idempotent(base in update_strategy(), update in update_strategy()) {
            let mut once = FrameAggregator::new();
            once.merge(to_rects(&base));
            once.merge(to_rects(&update));

            let mut twice = once.clone();
            twice.merge(to_rects(&update));

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn merged_value_is_latest_report(update in update_strategy()) {
            let rects = to_rects(&update);
            let mut frames = FrameAggregator::new();
            frames.merge(rects.clone());
            for (id, _) in &rects {
                let latest = rects.iter().rev().find(|(k, _)| k == id).map(|(_, r)| *r);
                prop_assert_eq!(frames.get(id), latest);
            }
        }
    }
}
