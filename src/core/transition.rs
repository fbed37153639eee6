//! Transition state machine — scroll delta in, display mode out.
//!
//! ```text
//!   hiding   = clamp(delta / H, 0, 1)
//!   hiding <  τ  →  Stories
//!   hiding >= τ  →  MiniStories(clamp((hiding - τ) / (1 - τ), 0, 1))
//! ```
//!
//! A flip between the two categories is committed animated; progress
//! updates inside `MiniStories` are committed immediately so they track the
//! finger; staying in `Stories` writes nothing.

use super::error::ConfigError;

/// Display mode of the header.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViewState {
    /// Full carousel inside the list.
    #[default]
    Stories,
    /// Mini cluster in the header; `progress` is how far the fan has collapsed.
    MiniStories { progress: f64 },
}

impl ViewState {
    pub fn is_mini(&self) -> bool {
        matches!(self, ViewState::MiniStories { .. })
    }

    pub fn progress(&self) -> Option<f64> {
        match *self {
            ViewState::Stories => None,
            ViewState::MiniStories { progress } => Some(progress),
        }
    }

    /// True when `self` and `other` are different categories.
    pub fn changes_category(&self, other: &ViewState) -> bool {
        self.is_mini() != other.is_mini()
    }
}

// ───────────────────────────────────────── config ────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    carousel_height: f64,
    threshold: f64,
}

impl TransitionConfig {
    pub const DEFAULT_CAROUSEL_HEIGHT: f64 = 110.0;
    pub const DEFAULT_THRESHOLD: f64 = 0.3;

    pub fn new(carousel_height: f64, threshold: f64) -> Result<Self, ConfigError> {
        if !(carousel_height > 0.0) || !carousel_height.is_finite() {
            return Err(ConfigError::NonPositiveCarouselHeight(carousel_height));
        }
        if !(0.0..1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        Ok(Self {
            carousel_height,
            threshold,
        })
    }

    pub fn carousel_height(&self) -> f64 {
        self.carousel_height
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Fraction of the carousel scrolled out of view, in [0, 1].
    pub fn hiding_progress(&self, delta_y: f64) -> f64 {
        (delta_y / self.carousel_height).clamp(0.0, 1.0)
    }

    /// Mode the header should be in for `delta_y`.
    pub fn target_state(&self, delta_y: f64) -> ViewState {
        let hiding = self.hiding_progress(delta_y);
        if hiding < self.threshold {
            return ViewState::Stories;
        }
        let progress = ((hiding - self.threshold) / (1.0 - self.threshold)).clamp(0.0, 1.0);
        ViewState::MiniStories { progress }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            carousel_height: Self::DEFAULT_CAROUSEL_HEIGHT,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

// ───────────────────────────────────────── machine ───────────

/// What a recomputation did to the view state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Commit {
    /// No write happened.
    Unchanged,
    /// Progress moved within `MiniStories`; apply without animation.
    Immediate(ViewState),
    /// Category flipped; apply under an animation.
    Animated(ViewState),
}

impl Commit {
    pub fn is_animated(&self) -> bool {
        matches!(self, Commit::Animated(_))
    }

    pub fn state(&self) -> Option<ViewState> {
        match *self {
            Commit::Unchanged => None,
            Commit::Immediate(state) | Commit::Animated(state) => Some(state),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransitionMachine {
    config: TransitionConfig,
    state: ViewState,
}

impl TransitionMachine {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            state: ViewState::Stories,
        }
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Recompute for a rounded delta.  Repeating the same delta is a no-op.
    pub fn apply(&mut self, delta_y: f64) -> Commit {
        let target = self.config.target_state(delta_y);
        if target == self.state {
            return Commit::Unchanged;
        }
        let animated = self.state.changes_category(&target);
        self.state = target;
        tracing::debug!(?target, animated, "view state committed");
        if animated {
            Commit::Animated(target)
        } else {
            Commit::Immediate(target)
        }
    }
}
