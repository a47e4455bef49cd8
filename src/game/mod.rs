//! Flappy Bird game model.
//!
//! A bird falls under gravity and flaps upward on demand while pipe pairs
//! scroll in from the right. Touching a pipe, the ground or the top of the
//! screen ends the run; each pipe passed scores one point.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
