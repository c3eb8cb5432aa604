use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::game::FoodVariant;

/// Per-game statistics shown in the header and logged when the game ends
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub foods_eaten: HashMap<FoodVariant, u32>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            foods_eaten: HashMap::new(),
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_food_eaten(&mut self, variant: FoodVariant) {
        *self.foods_eaten.entry(variant).or_insert(0) += 1;
    }

    pub fn eaten(&self, variant: FoodVariant) -> u32 {
        self.foods_eaten.get(&variant).copied().unwrap_or(0)
    }

    pub fn total_eaten(&self) -> u32 {
        self.foods_eaten.values().sum()
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }

    /// One-line breakdown such as `7 eaten (poisonous=1 fit=4 fatty=0 royal=2)`
    pub fn summary(&self) -> String {
        let breakdown = FoodVariant::ALL
            .iter()
            .map(|variant| format!("{}={}", variant.name(), self.eaten(*variant)))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} eaten ({breakdown})", self.total_eaten())
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
