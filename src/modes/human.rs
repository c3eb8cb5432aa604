use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::{debug, info};
use rand::{Rng, rngs::ThreadRng};
use std::time::Duration;
use tokio::time::{Instant, interval, sleep};

use crate::game::{Direction, GameConfig, GameEngine, GameState, GameStatus, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{BoardView, Canvas, Hud, TerminalCanvas, WindowConfig};

/// Keyboard-driven game on a canvas
pub struct HumanMode<C = TerminalCanvas, R = ThreadRng> {
    engine: GameEngine<R>,
    canvas: C,
    view: BoardView,
    metrics: GameMetrics,
    input_handler: InputHandler,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl HumanMode<TerminalCanvas, ThreadRng> {
    /// Open the terminal canvas and set up a new game on it
    pub fn open(config: GameConfig) -> Result<Self> {
        let canvas = TerminalCanvas::open(WindowConfig::from(&config))?;
        Ok(Self::with_parts(GameEngine::new(config), canvas))
    }

    /// Play until the snake dies or the player quits
    pub async fn run(&mut self) -> Result<()> {
        info!("game started");

        let result = self.run_game_loop().await;

        // Restore the terminal even if the loop failed
        self.canvas.close()?;

        result
    }

    async fn run_game_loop(&mut self) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The tick timer is re-armed after every tick because food changes the delay
        let tick_timer = sleep(self.delay());
        tokio::pin!(tick_timer);

        // Redraw at 30 FPS so the clock keeps moving between ticks
        let mut render_timer = interval(Duration::from_millis(33));

        self.redraw()?;

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                () = &mut tick_timer => {
                    let outcome = self.step()?;
                    if outcome.terminated {
                        break;
                    }
                    self.redraw()?;
                    tick_timer.as_mut().reset(Instant::now() + self.delay());
                }

                _ = render_timer.tick() => {
                    self.redraw()?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("player quit with score {}", self.engine.state().score);
                break;
            }
        }

        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        self.metrics.update();
        let state = self.engine.state();
        self.canvas.set_hud(Hud {
            score: state.score,
            length: state.snake.len(),
            delay: state.delay,
            elapsed: self.metrics.format_time(),
        });
        self.canvas.update()
    }
}

impl<C: Canvas, R: Rng> HumanMode<C, R> {
    pub fn with_parts(engine: GameEngine<R>, mut canvas: C) -> Self {
        let view = BoardView::new(&mut canvas, engine.state());

        Self {
            engine,
            canvas,
            view,
            metrics: GameMetrics::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            pending_direction: None,
        }
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    fn delay(&self) -> Duration {
        Duration::from_secs_f64(self.engine.state().delay)
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    // Last request before the tick wins
                    self.pending_direction = Some(direction);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// Run one tick and mirror the result onto the canvas. Closes the canvas
    /// when the game ends.
    fn step(&mut self) -> Result<TickOutcome> {
        if let Some(direction) = self.pending_direction.take() {
            self.engine.change_direction(direction);
            debug!("heading {:?}", self.engine.state().direction);
        }

        let outcome = self.engine.tick();
        let state = self.engine.state();

        if let Some(variant) = outcome.eaten {
            self.metrics.on_food_eaten(variant);
            info!(
                "ate {} food: score={} length={} delay={:.2}s",
                variant.name(),
                state.score,
                state.snake.len(),
                state.delay
            );
        }

        self.view.sync(&mut self.canvas, state);

        if let GameStatus::GameOver(cause) = state.status {
            self.metrics.update();
            info!(
                "game over ({:?}): score={} length={} time={} food: {}",
                cause,
                state.score,
                state.snake.len(),
                self.metrics.format_time(),
                self.metrics.summary()
            );
            self.canvas.update()?;
            self.canvas.close()?;
        }

        Ok(outcome)
    }
}
