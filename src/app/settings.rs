//! Debug menu model (data only).
//!
//! Items read and write a [`DebugConfig`] value; the handler applies the
//! edited copy to the model so the diff-and-update runs in one place.

use super::model::DebugConfig;

/// A single item in the debug menu.
pub enum DebugItem {
    /// Non-negative count adjusted with left/right.
    Stepper {
        label: &'static str,
        get: fn(&DebugConfig) -> usize,
        set: fn(&mut DebugConfig, usize),
    },
    /// Boolean toggle.
    Toggle {
        label: &'static str,
        get: fn(&DebugConfig) -> bool,
        set: fn(&mut DebugConfig, bool),
    },
}

impl DebugItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stepper { label, .. } | Self::Toggle { label, .. } => *label,
        }
    }

    /// Display value, e.g. `"20"` or `"ON"`.
    pub fn value(&self, config: &DebugConfig) -> String {
        match self {
            Self::Stepper { get, .. } => get(config).to_string(),
            Self::Toggle { get, .. } => String::from(if get(config) { "ON" } else { "OFF" }),
        }
    }

    /// Step a counter by `delta` (never below zero) or flip a toggle.
    pub fn adjust(&self, config: &DebugConfig, delta: isize) -> DebugConfig {
        let mut next = *config;
        match self {
            Self::Stepper { get, set, .. } => {
                set(&mut next, get(config).saturating_add_signed(delta));
            }
            Self::Toggle { get, set, .. } => set(&mut next, !get(config)),
        }
        next
    }
}

/// All items shown in the debug popup, in display order.
pub static DEBUG_ITEMS: &[DebugItem] = &[
    DebugItem::Stepper {
        label: "Stories",
        get: |c| c.stories_count,
        set: |c, v| c.stories_count = v,
    },
    DebugItem::Stepper {
        label: "Visible mini stories",
        get: |c| c.visible_mini_stories_count,
        set: |c, v| c.visible_mini_stories_count = v,
    },
    DebugItem::Stepper {
        label: "Conversations",
        get: |c| c.conversations_count,
        set: |c, v| c.conversations_count = v,
    },
    DebugItem::Toggle {
        label: "Demystify transitions",
        get: |c| c.demystify_transitions,
        set: |c, v| c.demystify_transitions = v,
    },
    DebugItem::Toggle {
        label: "Snap list to rows",
        get: |c| c.snap_to_rows,
        set: |c, v| c.snap_to_rows = v,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steppers_never_go_negative() {
        let config = DebugConfig {
            stories_count: 0,
            ..DebugConfig::default()
        };
        let next = DEBUG_ITEMS[0].adjust(&config, -1);
        assert_eq!(next.stories_count, 0);
        assert_eq!(DEBUG_ITEMS[0].adjust(&next, 1).stories_count, 1);
    }

    #[test]
    fn toggles_flip_regardless_of_direction() {
        let config = DebugConfig::default();
        let next = DEBUG_ITEMS[3].adjust(&config, -1);
        assert!(next.demystify_transitions);
        assert_eq!(DEBUG_ITEMS[3].value(&next), "ON");
        assert!(!DEBUG_ITEMS[3].adjust(&next, 1).demystify_transitions);
    }
}
