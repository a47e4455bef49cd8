//! Flappy - Terminal Flappy Bird
//!
//! The game model and tick logic are terminal-agnostic; `input` and `ui`
//! adapt them to crossterm and ratatui.

pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;
pub mod logger;
pub mod ui;

pub use constants::*;
pub use game::{tick, Session, TickInput, TickOutcome};
