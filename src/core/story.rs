//! Value objects supplied by the data layer.

use chrono::NaiveDateTime;

/// Stable identifier of a story.  Also used as the matched-geometry identity
/// of the avatar that represents it.
pub type StoryId = String;

/// One story in the carousel.  Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Story {
    pub story_id: StoryId,
    pub author_id: String,
    pub author_name: String,
    pub image_url: Option<String>,
}

impl Story {
    /// Up to two initials of the author, shown while the image is a placeholder.
    pub fn initials(&self) -> String {
        self.author_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

// ───────────────────────────────────────── conversations ─────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LastMessage {
    pub date: NaiveDateTime,
    pub text: String,
}

/// A row of the conversation list.  Display-only; the header engine never
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationSummary {
    pub conversation_id: String,
    pub conversation_name: String,
    pub icon_url: Option<String>,
    pub last_message: Option<LastMessage>,
}

impl ConversationSummary {
    pub fn last_message_text(&self) -> &str {
        self.last_message
            .as_ref()
            .map_or("No messages", |m| m.text.as_str())
    }

    /// Timestamp of the last message, e.g. `"14:05 Mar 30"`.
    pub fn last_message_date(&self) -> Option<String> {
        self.last_message
            .as_ref()
            .map(|m| m.date.format("%H:%M %b %d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn conversation(last_message: Option<LastMessage>) -> ConversationSummary {
        ConversationSummary {
            conversation_id: "conversation_0".into(),
            conversation_name: "Conversation 0".into(),
            icon_url: None,
            last_message,
        }
    }

    #[test]
    fn missing_last_message_falls_back() {
        let c = conversation(None);
        assert_eq!(c.last_message_text(), "No messages");
        assert_eq!(c.last_message_date(), None);
    }

    #[test]
    fn last_message_date_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 30)
            .and_then(|d| d.and_hms_opt(14, 5, 0))
            .unwrap();
        let c = conversation(Some(LastMessage {
            date,
            text: "See you".into(),
        }));
        assert_eq!(c.last_message_text(), "See you");
        assert_eq!(c.last_message_date().as_deref(), Some("14:05 Mar 30"));
    }

    #[test]
    fn initials_from_author_name() {
        let story = Story {
            story_id: "story_7".into(),
            author_id: "author_7".into(),
            author_name: "Author 7".into(),
            image_url: None,
        };
        assert_eq!(story.initials(), "A7");
    }
}
