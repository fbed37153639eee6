//! Where stories and conversations come from.
//!
//! The real app would hit a network or a local store; the binary ships with
//! [`MockSource`], which produces deterministic data keyed by seed.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::story::{ConversationSummary, LastMessage, Story};

/// Data layer consumed by the catalog and the conversation list.
pub trait StorySource {
    /// The first `count` stories, in display order.
    fn list_stories(&self, count: usize) -> Vec<Story>;

    /// The first `count` conversations, in display order.
    fn list_conversations(&self, count: usize) -> Vec<ConversationSummary>;
}

// ───────────────────────────────────────── mocks ─────────────

/// Deterministic fake data.  Story `i` is always `story_i`, so ids stay stable
/// across reloads with a different count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl MockSource {
    fn image_url(seed: usize) -> Option<String> {
        Some(format!("https://picsum.photos/id/{seed}/100"))
    }

    pub fn story(seed: usize) -> Story {
        Story {
            story_id: format!("story_{seed}"),
            author_id: format!("author_{seed}"),
            author_name: format!("Author {seed}"),
            image_url: Self::image_url(300 + seed),
        }
    }

    pub fn conversation(seed: usize) -> ConversationSummary {
        // Every third conversation has never been written to.
        let last_message = (seed % 3 != 2).then(|| LastMessage {
            date: Self::base_date() - Duration::minutes(37 * seed as i64),
            text: format!("Message #{seed}"),
        });
        ConversationSummary {
            conversation_id: format!("conversation_{seed}"),
            conversation_name: format!("Conversation {seed}"),
            icon_url: Self::image_url(400 + seed),
            last_message,
        }
    }

    fn base_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 30)
            .and_then(|d| d.and_hms_opt(18, 0, 0))
            .unwrap_or_default()
    }
}

impl StorySource for MockSource {
    fn list_stories(&self, count: usize) -> Vec<Story> {
        (0..count).map(Self::story).collect()
    }

    fn list_conversations(&self, count: usize) -> Vec<ConversationSummary> {
        (0..count).map(Self::conversation).collect()
    }
}
