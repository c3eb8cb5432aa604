//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering dependencies.
//! The terminal front end in `modes` drives it one tick at a time.

pub mod color;
pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use color::Color;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use food::FoodVariant;
pub use state::{CollisionType, Food, GameState, GameStatus, Position, Snake};
