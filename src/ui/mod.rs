//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* engine output and turns it into cells on the
//! terminal.  Engine geometry is in abstract units; [`units`] maps between
//! the two.

pub mod avatar;
pub mod carousel;
pub mod conversations;
pub mod header;
pub mod layout;
pub mod matched;
pub mod popup;
pub mod scene;
pub mod theme;
pub mod units;
