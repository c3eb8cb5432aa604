//! Drawing: the canvas abstraction, its terminal implementation, and the
//! view that mirrors game state onto a canvas.

pub mod board_view;
pub mod canvas;
pub mod renderer;
pub mod terminal;

pub use board_view::BoardView;
pub use canvas::{Canvas, Font, Scene, ShapeId, ShapeKind, WindowConfig};
pub use renderer::{Hud, Renderer};
pub use terminal::TerminalCanvas;
