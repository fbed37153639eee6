//! Chats view-model — owns the data behind the screen and the debug knobs
//! that shape it.

use crate::core::catalog::CatalogConfig;
use crate::core::engine::HeaderEngine;
use crate::core::source::StorySource;
use crate::core::story::ConversationSummary;

/// Runtime knobs exposed through the debug popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugConfig {
    pub stories_count: usize,
    pub visible_mini_stories_count: usize,
    pub conversations_count: usize,
    /// Keep the full carousel on screen (dimmed) while it morphs.
    pub demystify_transitions: bool,
    /// Scroll the list a whole conversation row at a time.
    pub snap_to_rows: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            stories_count: 20,
            visible_mini_stories_count: 3,
            conversations_count: 30,
            demystify_transitions: false,
            snap_to_rows: true,
        }
    }
}

impl DebugConfig {
    fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            stories_count: self.stories_count,
            mini_stories_bound: self.visible_mini_stories_count,
        }
    }
}

/// What [`ChatsModel::set_debug_config`] refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelChanges {
    pub stories: bool,
    pub mini_stories: bool,
    pub conversations: bool,
    pub leading_reset: bool,
}

pub struct ChatsModel {
    debug_config: DebugConfig,
    pub engine: HeaderEngine,
    conversations: Vec<ConversationSummary>,
    source: Box<dyn StorySource>,
}

impl ChatsModel {
    pub fn new(engine: HeaderEngine, debug_config: DebugConfig, source: Box<dyn StorySource>) -> Self {
        Self {
            debug_config,
            engine,
            conversations: Vec::new(),
            source,
        }
    }

    pub fn debug_config(&self) -> DebugConfig {
        self.debug_config
    }

    pub fn conversations(&self) -> &[ConversationSummary] {
        &self.conversations
    }

    /// Load everything from scratch for the current config.
    pub fn reload_data(&mut self) {
        let config = self.debug_config;
        self.engine.reload_data(config.catalog_config(), self.source.as_ref());
        self.conversations = self.source.list_conversations(config.conversations_count);
    }

    /// Swap in a new config and refresh only what differs from the old one.
    pub fn set_debug_config(&mut self, config: DebugConfig) -> ModelChanges {
        let old = std::mem::replace(&mut self.debug_config, config);

        let catalog = self
            .engine
            .reconfigure(config.catalog_config(), self.source.as_ref());

        let conversations = config.conversations_count != old.conversations_count;
        if conversations {
            self.conversations = self.source.list_conversations(config.conversations_count);
        }

        let leading_reset = config.snap_to_rows != old.snap_to_rows;
        if leading_reset {
            self.engine.reset_leading_visible();
        }

        ModelChanges {
            stories: catalog.stories,
            mini_stories: catalog.mini_stories,
            conversations,
            leading_reset: leading_reset || catalog.stories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::MockSource;

    fn model() -> ChatsModel {
        let mut model = ChatsModel::new(
            HeaderEngine::default(),
            DebugConfig::default(),
            Box::new(MockSource),
        );
        model.reload_data();
        model
    }

    #[test]
    fn reload_populates_everything() {
        let model = model();
        assert_eq!(model.engine.catalog().stories().len(), 20);
        assert_eq!(model.engine.catalog().mini_stories().len(), 3);
        assert_eq!(model.conversations().len(), 30);
    }

    #[test]
    fn conversation_count_change_leaves_stories_alone() {
        let mut model = model();
        model.engine.set_leading_visible(Some("story_5".into()));
        let changes = model.set_debug_config(DebugConfig {
            conversations_count: 0,
            ..model.debug_config()
        });
        assert_eq!(
            changes,
            ModelChanges {
                conversations: true,
                ..ModelChanges::default()
            }
        );
        assert!(model.conversations().is_empty());
        assert_eq!(model.engine.catalog().leading_visible_id(), Some("story_5"));
    }

    #[test]
    fn container_toggle_resets_leading_story() {
        let mut model = model();
        model.engine.set_leading_visible(Some("story_5".into()));
        let changes = model.set_debug_config(DebugConfig {
            snap_to_rows: false,
            ..model.debug_config()
        });
        assert!(changes.leading_reset);
        assert!(!changes.stories);
        assert_eq!(model.engine.catalog().leading_visible_id(), Some("story_0"));
    }

    #[test]
    fn demystify_toggle_changes_nothing_derived() {
        let mut model = model();
        let changes = model.set_debug_config(DebugConfig {
            demystify_transitions: true,
            ..model.debug_config()
        });
        assert_eq!(changes, ModelChanges::default());
        assert!(model.debug_config().demystify_transitions);
    }
}
