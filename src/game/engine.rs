use super::{
    config::GameConfig,
    direction::Direction,
    food::FoodVariant,
    state::{CollisionType, Food, GameState, GameStatus, Position, Snake},
};
use rand::{Rng, rngs::ThreadRng};

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Food the snake ate this tick
    pub eaten: Option<FoodVariant>,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Whether the game has ended
    pub terminated: bool,
}

/// The game engine. Owns the game state and applies every rule to it.
///
/// Callers only get to read the state. Every change goes through
/// `change_direction`, `tick`, `grow_snake`, `shrink_snake` or `respawn_food`:
///
/// ```compile_fail
/// use food_snake::game::{GameConfig, GameEngine};
///
/// let mut engine = GameEngine::new(GameConfig::default());
/// engine.state_mut().delay = 0.0;
/// ```
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
    state: GameState,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food from `rng`
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let state = Self::initial_state(&config, &mut rng);
        Self { config, rng, state }
    }

    fn initial_state(config: &GameConfig, rng: &mut R) -> GameState {
        let food = Self::random_food(config, rng);
        GameState::new(Snake::new(Position::ORIGIN), food, config.initial_delay)
    }

    fn random_food(config: &GameConfig, rng: &mut R) -> Food {
        let margin = config.food_margin;
        let variant = FoodVariant::random(rng);
        let position = Position::new(
            rng.gen_range(-margin..=margin),
            rng.gen_range(-margin..=margin),
        );
        Food { position, variant }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access to the state, for setting up positions in tests
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Turn the snake unless the request reverses its current direction
    pub fn change_direction(&mut self, requested: Direction) {
        match self.state.direction {
            Some(current) if current.is_opposite(requested) => {}
            _ => self.state.direction = Some(requested),
        }
    }

    /// Execute one step of the game
    pub fn tick(&mut self) -> TickOutcome {
        if let GameStatus::GameOver(cause) = self.state.status {
            return TickOutcome {
                eaten: None,
                collision_type: Some(cause),
                terminated: true,
            };
        }

        let step = self.config.grid_step;
        self.state.snake.advance(self.state.direction, step);
        self.state.ticks += 1;

        let mut eaten = None;
        let head = self.state.snake.head();
        if head.distance(self.state.food.position) < self.config.collision_radius {
            let variant = self.state.food.variant;
            variant.apply_effect(&mut self.state);
            self.respawn_food();
            eaten = Some(variant);
        }

        let collision_type = self.check_collision();
        if let Some(cause) = collision_type {
            self.state.status = GameStatus::GameOver(cause);
        }

        TickOutcome {
            eaten,
            collision_type,
            terminated: collision_type.is_some(),
        }
    }

    /// Append a segment where the tail last was
    pub fn grow_snake(&mut self) {
        self.state.snake.grow();
    }

    /// Remove the tail segment if the snake has more than one
    pub fn shrink_snake(&mut self) {
        self.state.snake.shrink();
    }

    /// Put a new random food somewhere on the board
    pub fn respawn_food(&mut self) {
        self.state.food = Self::random_food(&self.config, &mut self.rng);
    }

    /// Whether the head has left the playable area
    pub fn is_out_of_bounds(&self) -> bool {
        let head = self.state.snake.head();
        let limit = self.config.wall_limit;
        head.x.abs() > limit || head.y.abs() > limit
    }

    /// Whether the head touches any other segment
    pub fn has_self_collision(&self) -> bool {
        let head = self.state.snake.head();
        self.state
            .snake
            .collides_with_body(head, self.config.collision_radius)
    }

    fn check_collision(&self) -> Option<CollisionType> {
        if self.is_out_of_bounds() {
            return Some(CollisionType::Wall);
        }

        if self.has_self_collision() {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn engine() -> GameEngine<StdRng> {
        GameEngine::with_rng(GameConfig::default(), StdRng::seed_from_u64(42))
    }

    /// Engine whose food sits far away from the snake
    fn engine_with_snake(snake: Snake) -> GameEngine<StdRng> {
        let mut engine = engine();
        engine.state_mut().snake = snake;
        engine.state_mut().food.position = Position::new(-280, -280);
        engine
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        let state = engine.state();

        assert!(state.is_alive());
        assert_eq!(state.score, 0);
        assert_eq!(state.delay, 0.15);
        assert_eq!(state.direction, None);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::ORIGIN);
    }

    #[test]
    fn test_no_movement_without_direction() {
        let mut engine = engine_with_snake(Snake::new(Position::ORIGIN));
        let outcome = engine.tick();

        assert!(!outcome.terminated);
        assert_eq!(engine.state().snake.head(), Position::ORIGIN);
        assert_eq!(engine.state().ticks, 1);
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine_with_snake(Snake::new(Position::ORIGIN));
        engine.change_direction(Direction::Up);
        engine.tick();
        assert_eq!(engine.state().snake.head(), Position::new(0, 20));
    }

    #[test]
    fn test_first_request_sets_direction() {
        for direction in Direction::ALL {
            let mut engine = engine();
            engine.change_direction(direction);
            assert_eq!(engine.state().direction, Some(direction));
        }
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        for moving in Direction::ALL {
            let reversed = moving.opposite();
            let mut engine = engine_with_snake(Snake::new(Position::ORIGIN));
            engine.change_direction(moving);
            engine.tick();
            engine.change_direction(reversed);
            engine.tick();
            assert_eq!(engine.state().direction, Some(moving));
        }
    }

    #[test]
    fn test_perpendicular_turn_accepted() {
        let mut engine = engine();
        engine.change_direction(Direction::Up);
        engine.change_direction(Direction::Left);
        assert_eq!(engine.state().direction, Some(Direction::Left));
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = engine_with_snake(Snake::new(Position::ORIGIN));
        engine.change_direction(Direction::Right);
        engine.state_mut().food = Food {
            position: Position::new(25, 5),
            variant: FoodVariant::Fit,
        };

        let outcome = engine.tick();

        assert_eq!(outcome.eaten, Some(FoodVariant::Fit));
        assert!(!outcome.terminated);
        assert_eq!(engine.state().score, 1);
        assert_eq!(engine.state().snake.len(), 2);
        assert_eq!(engine.state().snake.tail(), Position::ORIGIN);
    }

    #[test]
    fn test_food_just_out_of_reach() {
        let mut engine = engine_with_snake(Snake::new(Position::ORIGIN));
        engine.change_direction(Direction::Right);
        engine.state_mut().food.position = Position::new(40, 0);

        let outcome = engine.tick();

        assert_eq!(outcome.eaten, None);
        assert_eq!(engine.state().food.position, Position::new(40, 0));
    }

    #[test]
    fn test_respawned_food_within_margin() {
        let mut engine = engine();
        for _ in 0..500 {
            engine.respawn_food();
            let food = engine.state().food.position;
            assert!(food.x.abs() <= 280 && food.y.abs() <= 280);
        }
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = engine_with_snake(Snake::new(Position::new(290, 0)));
        engine.change_direction(Direction::Right);

        let outcome = engine.tick();

        assert_eq!(engine.state().snake.head(), Position::new(310, 0));
        assert!(engine.is_out_of_bounds());
        assert!(outcome.terminated);
        assert_eq!(outcome.collision_type, Some(CollisionType::Wall));
        assert_eq!(engine.status(), GameStatus::GameOver(CollisionType::Wall));
    }

    #[test]
    fn test_edge_cell_is_inside() {
        let mut engine = engine_with_snake(Snake::new(Position::new(270, 0)));
        engine.change_direction(Direction::Right);
        let outcome = engine.tick();
        assert!(!outcome.terminated);
        assert_eq!(engine.state().snake.head(), Position::new(290, 0));
    }

    #[test]
    fn test_self_collision_predicate() {
        let snake = Snake::from_segments(
            Position::new(0, 0),
            [Position::new(20, 0), Position::new(10, 10), Position::new(40, 0)],
        );
        let engine = engine_with_snake(snake);
        assert!(engine.has_self_collision());
    }

    #[test]
    fn test_self_collision() {
        // Square loop: the head turns back into the fifth segment
        let snake = Snake::from_segments(
            Position::new(0, 0),
            [
                Position::new(-20, 0),
                Position::new(-40, 0),
                Position::new(-60, 0),
                Position::new(-80, 0),
            ],
        );
        let mut engine = engine_with_snake(snake);
        engine.change_direction(Direction::Right);

        engine.change_direction(Direction::Down);
        assert!(!engine.tick().terminated);
        engine.change_direction(Direction::Left);
        assert!(!engine.tick().terminated);
        engine.change_direction(Direction::Up);
        let outcome = engine.tick();

        assert!(outcome.terminated);
        assert_eq!(outcome.collision_type, Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_terminated_game_no_update() {
        let mut engine = engine_with_snake(Snake::new(Position::new(290, 0)));
        engine.change_direction(Direction::Right);
        engine.tick();
        let before = engine.state().clone();

        let outcome = engine.tick();

        assert!(outcome.terminated);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_grow_then_shrink_restores_length() {
        let mut engine = engine();
        engine.grow_snake();
        engine.grow_snake();
        let length = engine.state().snake.len();

        engine.grow_snake();
        engine.shrink_snake();

        assert_eq!(engine.state().snake.len(), length);
    }
}
