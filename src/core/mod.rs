//! Core engine – story catalog, frame aggregation, scroll tracking, and the
//! header transition.
//!
//! Nothing in this module depends on any TUI or rendering crate.  All
//! geometry is in abstract layout units; the UI layer maps them to cells.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod frames;
pub mod geometry;
pub mod morph;
pub mod scroll;
pub mod source;
pub mod story;
pub mod transition;
