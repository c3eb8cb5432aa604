//! Turtle-style drawing surface
//!
//! The game only ever asks for a handful of things: put a colored square or
//! circle somewhere, move or recolor it, hide it, write a line of text, and
//! redraw. `Canvas` captures exactly that. `Scene` is the in-memory
//! implementation; the terminal canvas keeps a `Scene` and paints it.

use anyhow::Result;

use crate::game::{Color, GameConfig, Position};

/// Handle to a shape on a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Square,
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub family: &'static str,
    pub size: u16,
}

impl Font {
    pub const SCORE: Font = Font {
        family: "Courier",
        size: 20,
    };
}

/// Window parameters
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub background: Color,
    pub width: u32,
    pub height: u32,
}

impl From<&GameConfig> for WindowConfig {
    fn from(config: &GameConfig) -> Self {
        Self {
            title: config.title.clone(),
            background: Color::Black,
            width: config.board_size,
            height: config.board_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: Color,
    pub position: Position,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position: Position,
    pub content: String,
    pub font: Font,
}

/// Operations the game needs from a drawing surface.
///
/// Operations on a shape that was removed are ignored.
pub trait Canvas {
    fn create_shape(&mut self, kind: ShapeKind, color: Color, position: Position) -> ShapeId;

    fn move_shape(&mut self, id: ShapeId, position: Position);

    fn set_color(&mut self, id: ShapeId, color: Color);

    fn shape_position(&self, id: ShapeId) -> Option<Position>;

    /// Distance between two shapes, `None` if either is gone
    fn distance(&self, a: ShapeId, b: ShapeId) -> Option<f64> {
        let a = self.shape_position(a)?;
        let b = self.shape_position(b)?;
        Some(a.distance(b))
    }

    fn hide_shape(&mut self, id: ShapeId);

    fn remove_shape(&mut self, id: ShapeId);

    /// Write text centered on `position`
    fn write_text(&mut self, position: Position, content: &str, font: Font);

    fn clear_text(&mut self);

    /// Redraw the frame
    fn update(&mut self) -> Result<()>;

    fn close(&mut self) -> Result<()>;
}

/// In-memory canvas
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Option<Shape>>,
    texts: Vec<Text>,
    closed: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0).and_then(Option::as_ref)
    }

    /// Shapes that should be drawn, in creation order
    pub fn visible_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().flatten().filter(|shape| shape.visible)
    }

    pub fn texts(&self) -> &[Text] {
        &self.texts
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id.0).and_then(Option::as_mut)
    }
}

impl Canvas for Scene {
    fn create_shape(&mut self, kind: ShapeKind, color: Color, position: Position) -> ShapeId {
        self.shapes.push(Some(Shape {
            kind,
            color,
            position,
            visible: true,
        }));
        ShapeId(self.shapes.len() - 1)
    }

    fn move_shape(&mut self, id: ShapeId, position: Position) {
        if let Some(shape) = self.shape_mut(id) {
            shape.position = position;
        }
    }

    fn set_color(&mut self, id: ShapeId, color: Color) {
        if let Some(shape) = self.shape_mut(id) {
            shape.color = color;
        }
    }

    fn shape_position(&self, id: ShapeId) -> Option<Position> {
        self.shape(id).map(|shape| shape.position)
    }

    fn hide_shape(&mut self, id: ShapeId) {
        if let Some(shape) = self.shape_mut(id) {
            shape.visible = false;
        }
    }

    fn remove_shape(&mut self, id: ShapeId) {
        if let Some(slot) = self.shapes.get_mut(id.0) {
            *slot = None;
        }
    }

    fn write_text(&mut self, position: Position, content: &str, font: Font) {
        self.texts.push(Text {
            position,
            content: content.to_string(),
            font,
        });
    }

    fn clear_text(&mut self) {
        self.texts.clear();
    }

    fn update(&mut self) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
