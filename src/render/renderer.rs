use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color as TermColor, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph,
        canvas::{Canvas as CanvasWidget, Circle, Rectangle},
    },
};

use super::canvas::{Scene, ShapeKind, WindowConfig};
use crate::game::Color;

/// Side of a snake square and diameter of the food circle, in board units
const SHAPE_SIZE: f64 = 20.0;

/// Header values shown above the board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hud {
    pub score: u32,
    pub length: usize,
    pub delay: f64,
    pub elapsed: String,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, window: &WindowConfig, scene: &Scene, hud: &Hud) {
        let chunks = Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(hud);
        frame.render_widget(stats, chunks[0]);

        let board_area = board_rect(chunks[1]);
        self.render_board(frame, board_area, window, scene);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_board(&self, frame: &mut Frame, area: Rect, window: &WindowConfig, scene: &Scene) {
        let half_width = f64::from(window.width) / 2.0;
        let half_height = f64::from(window.height) / 2.0;
        let inner_width = area.width.saturating_sub(2).max(1);
        let units_per_column = f64::from(window.width) / f64::from(inner_width);

        let board = CanvasWidget::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(TermColor::White))
                    .title(format!(" {} ", window.title)),
            )
            .marker(Marker::Block)
            .background_color(term_color(window.background))
            .x_bounds([-half_width, half_width])
            .y_bounds([-half_height, half_height])
            .paint(|ctx| {
                for shape in scene.visible_shapes() {
                    let x = f64::from(shape.position.x);
                    let y = f64::from(shape.position.y);
                    let color = term_color(shape.color);
                    match shape.kind {
                        ShapeKind::Square => ctx.draw(&Rectangle {
                            x: x - SHAPE_SIZE / 2.0,
                            y: y - SHAPE_SIZE / 2.0,
                            width: SHAPE_SIZE,
                            height: SHAPE_SIZE,
                            color,
                        }),
                        ShapeKind::Circle => ctx.draw(&Circle {
                            x,
                            y,
                            radius: SHAPE_SIZE / 2.0,
                            color,
                        }),
                    }
                }

                // Font family and size have no terminal equivalent
                let style = Style::default().fg(TermColor::White);
                for text in scene.texts() {
                    let width = text.content.chars().count() as f64 * units_per_column;
                    ctx.print(
                        f64::from(text.position.x) - width / 2.0,
                        f64::from(text.position.y),
                        Span::styled(text.content.clone(), style),
                    );
                }
            });

        frame.render_widget(board, area);
    }

    fn render_stats(&self, hud: &Hud) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(TermColor::Yellow)),
            Span::styled(
                hud.score.to_string(),
                Style::default()
                    .fg(TermColor::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(TermColor::Yellow)),
            Span::styled(hud.length.to_string(), Style::default().fg(TermColor::White)),
            Span::raw("    "),
            Span::styled("Delay: ", Style::default().fg(TermColor::Yellow)),
            Span::styled(
                format!("{:.0}ms", hud.delay * 1000.0),
                Style::default().fg(TermColor::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(TermColor::Yellow)),
            Span::styled(hud.elapsed.clone(), Style::default().fg(TermColor::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(TermColor::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(TermColor::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(TermColor::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest centered area that looks square on screen. Terminal cells are
/// roughly twice as tall as they are wide.
fn board_rect(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    board
}

pub fn term_color(color: Color) -> TermColor {
    match color {
        Color::White => TermColor::White,
        Color::Black => TermColor::Black,
        Color::Purple => TermColor::Magenta,
        Color::Green => TermColor::Green,
        Color::Yellow => TermColor::Yellow,
        Color::Orange => TermColor::Rgb(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Position};
    use crate::render::canvas::{Canvas, Font};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_board_rect_is_square_on_screen() {
        let board = board_rect(Rect::new(0, 0, 100, 30));
        assert_eq!(board.height, 30);
        assert_eq!(board.width, 60);
        assert_eq!(board.x, 20);

        let narrow = board_rect(Rect::new(0, 0, 40, 30));
        assert_eq!(narrow.height, 20);
        assert_eq!(narrow.width, 40);
    }

    #[test]
    fn test_food_colors_map_to_terminal() {
        assert_eq!(term_color(Color::Purple), TermColor::Magenta);
        assert_eq!(term_color(Color::Orange), TermColor::Rgb(255, 165, 0));
    }

    #[test]
    fn test_render_draws_score_and_title() {
        let window = WindowConfig::from(&GameConfig::default());
        let mut scene = Scene::new();
        // Board text differs from the header so each is checked on its own
        scene.write_text(Position::new(0, 260), "Score: 42", Font::SCORE);
        scene.create_shape(ShapeKind::Circle, Color::Orange, Position::new(100, -60));
        let hud = Hud {
            score: 7,
            length: 3,
            delay: 0.15,
            elapsed: "00:12".to_string(),
        };

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, &window, &scene, &hud))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let header: String = (0..3).map(|y| row_text(buffer, y)).collect();
        assert!(header.contains("Score: 7"));
        assert!(header.contains("00:12"));
        assert!(!header.contains("42"));

        // Header and footer take three rows each
        let board: Vec<String> = (3..37).map(|y| row_text(buffer, y)).collect();
        assert!(board.iter().any(|row| row.contains("Score: 42")));
        assert!(board.iter().any(|row| row.contains("Snake")));
        assert!(!board.iter().any(|row| row.contains("Score: 7")));

        let orange = TermColor::Rgb(255, 165, 0);
        assert!(buffer.content().iter().any(|cell| cell.fg == orange));
    }
}
