//! Story catalog — the ordered stories, the mini-story prefix, and the
//! leading visible story pointer.
//!
//! Every mutation goes through [`StoryCatalog::reload`] or
//! [`StoryCatalog::reconfigure`]; both leave the derived fields consistent
//! with the story list before returning.

use super::source::StorySource;
use super::story::{Story, StoryId};

/// How many stories to load and how many of them feed the mini cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    pub stories_count: usize,
    pub mini_stories_bound: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            stories_count: 20,
            mini_stories_bound: 3,
        }
    }
}

/// Which derived collections a reconfiguration refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogChanges {
    pub stories: bool,
    pub mini_stories: bool,
}

impl CatalogChanges {
    pub fn any(&self) -> bool {
        self.stories || self.mini_stories
    }
}

#[derive(Debug, Clone, Default)]
pub struct StoryCatalog {
    config: CatalogConfig,
    stories: Vec<Story>,
    mini_stories: Vec<Story>,
    leading_visible: Option<StoryId>,
}

impl StoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything: stories, mini prefix, and the leading pointer
    /// (reset to the new first story).
    pub fn reload(&mut self, config: CatalogConfig, source: &dyn StorySource) {
        self.config = config;
        self.stories = source.list_stories(config.stories_count);
        self.refresh_mini_stories();
        self.reset_leading_visible();
        tracing::info!(
            stories = self.stories.len(),
            mini = self.mini_stories.len(),
            "story catalog reloaded"
        );
    }

    /// Apply a new configuration, refreshing only what the diff requires.
    ///
    /// A changed story count refetches the stories, which in turn invalidates
    /// the mini prefix and the leading pointer.  A changed bound alone only
    /// recomputes the prefix.
    pub fn reconfigure(&mut self, config: CatalogConfig, source: &dyn StorySource) -> CatalogChanges {
        let old = self.config;
        let stories = config.stories_count != old.stories_count;
        let mini_stories = stories || config.mini_stories_bound != old.mini_stories_bound;
        self.config = config;

        if stories {
            self.stories = source.list_stories(config.stories_count);
            self.reset_leading_visible();
        }
        if mini_stories {
            self.refresh_mini_stories();
        }

        let changes = CatalogChanges { stories, mini_stories };
        if changes.any() {
            tracing::info!(?changes, "story catalog reconfigured");
        }
        changes
    }

    /// Point at the first story visible in the carousel.  Ids that are not
    /// in the catalog are stored as-is and simply never match.
    pub fn set_leading_visible(&mut self, id: Option<StoryId>) {
        self.leading_visible = id;
    }

    pub fn reset_leading_visible(&mut self) {
        self.leading_visible = self.stories.first().map(|s| s.story_id.clone());
    }

    pub fn config(&self) -> CatalogConfig {
        self.config
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn mini_stories(&self) -> &[Story] {
        &self.mini_stories
    }

    pub fn leading_visible_id(&self) -> Option<&str> {
        self.leading_visible.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn story(&self, id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.story_id == id)
    }

    /// Stories from the leading visible one onwards, or the whole catalog if
    /// the pointer is unset or unknown.
    pub fn stories_from_leading(&self) -> &[Story] {
        self.leading_visible
            .as_deref()
            .and_then(|id| self.stories.iter().position(|s| s.story_id == id))
            .map_or(&self.stories[..], |start| &self.stories[start..])
    }

    /// Matched-geometry identity of mini slot `index`: the story that slot
    /// visually continues from the carousel, or a placeholder when the
    /// carousel has run out of stories past the leading one.
    pub fn mini_slot_identity(&self, index: usize) -> String {
        self.stories_from_leading()
            .get(index)
            .map_or_else(|| format!("none_{index}"), |s| s.story_id.clone())
    }

    fn refresh_mini_stories(&mut self) {
        let bound = self.config.mini_stories_bound.min(self.stories.len());
        self.mini_stories = self.stories[..bound].to_vec();
    }
}
