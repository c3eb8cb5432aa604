use super::canvas::{Canvas, Font, ShapeId, ShapeKind};
use crate::game::{Color, GameState, Position};

pub const SNAKE_COLOR: Color = Color::White;
pub const SCORE_POSITION: Position = Position { x: 0, y: 260 };

/// Keeps canvas shapes in step with the game state.
///
/// Holds one shape per snake segment, in the same order as the segments, plus
/// the food marker.
pub struct BoardView {
    segments: Vec<ShapeId>,
    food: ShapeId,
    shown_score: Option<u32>,
}

impl BoardView {
    pub fn new<C: Canvas>(canvas: &mut C, state: &GameState) -> Self {
        let food = canvas.create_shape(
            ShapeKind::Circle,
            state.food.variant.color(),
            state.food.position,
        );

        let mut view = Self {
            segments: Vec::new(),
            food,
            shown_score: None,
        };
        view.sync(canvas, state);
        view
    }

    /// Bring every shape and the score line up to date
    pub fn sync<C: Canvas>(&mut self, canvas: &mut C, state: &GameState) {
        let body = state.snake.body();

        while self.segments.len() > body.len() {
            if let Some(id) = self.segments.pop() {
                canvas.hide_shape(id);
                canvas.remove_shape(id);
            }
        }
        for &position in &body[self.segments.len()..] {
            let id = canvas.create_shape(ShapeKind::Square, SNAKE_COLOR, position);
            self.segments.push(id);
        }
        for (&id, &position) in self.segments.iter().zip(body) {
            canvas.move_shape(id, position);
        }

        canvas.move_shape(self.food, state.food.position);
        canvas.set_color(self.food, state.food.variant.color());

        if self.shown_score != Some(state.score) {
            canvas.clear_text();
            canvas.write_text(SCORE_POSITION, &score_line(state.score), Font::SCORE);
            self.shown_score = Some(state.score);
        }
    }

    pub fn head(&self) -> ShapeId {
        self.segments[0]
    }

    pub fn food(&self) -> ShapeId {
        self.food
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

pub fn score_line(score: u32) -> String {
    format!("Score: {}", score)
}
