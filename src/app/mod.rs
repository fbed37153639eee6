//! Application orchestration — state management, event loop, and input handling.

pub mod event;
pub mod handler;
pub mod model;
pub mod settings;
pub mod state;
