use serde::{Deserialize, Serialize};

/// Configuration for the game
///
/// All distances are in board units. The board is square and centered on the
/// origin, so a `board_size` of 600 spans -300..=300 on both axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board
    pub board_size: u32,
    /// Distance the head travels per tick
    pub grid_step: i32,
    /// The head dies once |x| or |y| exceeds this
    pub wall_limit: i32,
    /// Food spawns within [-food_margin, food_margin] on both axes
    pub food_margin: i32,
    /// Two shapes closer than this touch
    pub collision_radius: f64,

    /// Seconds between ticks at the start of a game
    pub initial_delay: f64,

    /// Title shown above the board
    pub title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 600,
            grid_step: 20,
            wall_limit: 290,
            food_margin: 280,
            collision_radius: 20.0,
            initial_delay: 0.15,
            title: "Snake".to_string(),
        }
    }
}
