//! Food variants and what eating each one does to the game
//!
//! Every variant is a plain enum value. Its color and effect live in a single
//! lookup table indexed by the variant, so adding a variant means adding one
//! row to `CATALOG`.

use rand::Rng;

use super::color::Color;
use super::state::GameState;

/// Points lost when eating poison. The score never drops below zero.
pub const POISON_PENALTY: u32 = 1;
/// Poison only shrinks snakes longer than this
pub const POISON_SHRINK_THRESHOLD: usize = 3;
/// Seconds added to the tick delay by fatty food
pub const FATTY_SLOWDOWN: f64 = 0.03;
/// Seconds removed from the tick delay by royal food
pub const ROYAL_SPEEDUP: f64 = 0.02;
/// Royal food never makes the delay shorter than this
pub const MIN_DELAY: f64 = 0.05;

/// Kind of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodVariant {
    Poisonous,
    Fit,
    Fatty,
    Royal,
}

/// Row of the food catalog
struct FoodEffect {
    color: Color,
    apply: fn(&mut GameState),
}

// Indexed by `FoodVariant as usize`
static CATALOG: [FoodEffect; 4] = [
    FoodEffect {
        color: Color::Purple,
        apply: eat_poisonous,
    },
    FoodEffect {
        color: Color::Green,
        apply: eat_fit,
    },
    FoodEffect {
        color: Color::Yellow,
        apply: eat_fatty,
    },
    FoodEffect {
        color: Color::Orange,
        apply: eat_royal,
    },
];

fn eat_poisonous(state: &mut GameState) {
    if state.snake.len() > POISON_SHRINK_THRESHOLD {
        state.snake.shrink();
    }
    state.score = state.score.saturating_sub(POISON_PENALTY);
}

fn eat_fit(state: &mut GameState) {
    state.snake.grow();
    state.score += 1;
}

fn eat_fatty(state: &mut GameState) {
    state.snake.grow();
    state.score += 3;
    state.delay += FATTY_SLOWDOWN;
}

fn eat_royal(state: &mut GameState) {
    state.snake.grow();
    state.score += 5;
    state.delay = (state.delay - ROYAL_SPEEDUP).max(MIN_DELAY);
}

impl FoodVariant {
    pub const ALL: [FoodVariant; 4] = [
        FoodVariant::Poisonous,
        FoodVariant::Fit,
        FoodVariant::Fatty,
        FoodVariant::Royal,
    ];

    /// Pick a variant uniformly at random. Consecutive picks are independent.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    fn entry(self) -> &'static FoodEffect {
        &CATALOG[self as usize]
    }

    pub fn color(self) -> Color {
        self.entry().color
    }

    /// Apply this food's effect in place
    pub fn apply_effect(self, state: &mut GameState) {
        (self.entry().apply)(state)
    }

    /// Return the state after eating this food
    pub fn applied(self, mut state: GameState) -> GameState {
        self.apply_effect(&mut state);
        state
    }

    pub fn name(self) -> &'static str {
        match self {
            FoodVariant::Poisonous => "poisonous",
            FoodVariant::Fit => "fit",
            FoodVariant::Fatty => "fatty",
            FoodVariant::Royal => "royal",
        }
    }
}
