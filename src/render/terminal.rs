use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

use super::canvas::{Canvas, Font, Scene, ShapeId, ShapeKind, WindowConfig};
use super::renderer::{Hud, Renderer};
use crate::game::{Color, Position};

/// Canvas drawn in the terminal's alternate screen
pub struct TerminalCanvas {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    window: WindowConfig,
    scene: Scene,
    renderer: Renderer,
    hud: Hud,
    open: bool,
}

impl TerminalCanvas {
    /// Switch the terminal into raw mode and the alternate screen
    pub fn open(window: WindowConfig) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        Ok(Self {
            terminal,
            window,
            scene: Scene::new(),
            renderer: Renderer::new(),
            hud: Hud::default(),
            open: true,
        })
    }

    pub fn set_hud(&mut self, hud: Hud) {
        self.hud = hud;
    }

    fn restore(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl Canvas for TerminalCanvas {
    fn create_shape(&mut self, kind: ShapeKind, color: Color, position: Position) -> ShapeId {
        self.scene.create_shape(kind, color, position)
    }

    fn move_shape(&mut self, id: ShapeId, position: Position) {
        self.scene.move_shape(id, position);
    }

    fn set_color(&mut self, id: ShapeId, color: Color) {
        self.scene.set_color(id, color);
    }

    fn shape_position(&self, id: ShapeId) -> Option<Position> {
        self.scene.shape_position(id)
    }

    fn hide_shape(&mut self, id: ShapeId) {
        self.scene.hide_shape(id);
    }

    fn remove_shape(&mut self, id: ShapeId) {
        self.scene.remove_shape(id);
    }

    fn write_text(&mut self, position: Position, content: &str, font: Font) {
        self.scene.write_text(position, content, font);
    }

    fn clear_text(&mut self) {
        self.scene.clear_text();
    }

    fn update(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }

        let Self {
            terminal,
            window,
            scene,
            renderer,
            hud,
            ..
        } = self;
        terminal
            .draw(|frame| renderer.render(frame, window, scene, hud))
            .context("Failed to draw frame")?;
        scene.update()
    }

    fn close(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        self.scene.close()?;
        self.restore()
    }
}

impl Drop for TerminalCanvas {
    fn drop(&mut self) {
        if self.open {
            self.open = false;
            if let Err(err) = self.restore() {
                log::error!("failed to restore terminal: {err:#}");
            }
        }
    }
}
