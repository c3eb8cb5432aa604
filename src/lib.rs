//! Food Snake - a terminal Snake where each kind of food has its own effect
//!
//! This library provides:
//! - Core game rules and the food catalog (game module)
//! - A turtle-style canvas and its terminal implementation (render module)
//! - Keyboard mapping (input module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
