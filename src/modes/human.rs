use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{GameConfig, GameSession};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Render at ~30 FPS
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct HumanMode {
    session: GameSession,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self::from_session(GameSession::new(config))
    }

    pub fn from_session(session: GameSession) -> Self {
        let renderer = Renderer::new(session.config().grid_size);
        Self {
            session,
            metrics: GameMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // The UI owns stdout; stderr stays free for logging
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    /// Timer ticks and key events are both handled on this one task, so the
    /// session never sees two writers and a tick is never interrupted.
    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.session.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut render_timer = interval(RENDER_INTERVAL);
        render_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "Starting game on a {0}x{0} grid, tick every {1} ms",
            self.session.config().grid_size,
            self.session.config().tick_rate_ms
        );

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

                _ = tick_timer.tick() => {
                    self.update_game();
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.session.state(), &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("Quitting after {} games", self.metrics.games_played);
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Turn(direction) => {
                self.session.change_direction(direction);
            }
            KeyAction::Reset => self.reset_game(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => debug!("Ignored key {:?}", key.code),
        }
    }

    fn update_game(&mut self) {
        let was_over = self.session.state().is_game_over();
        let result = self.session.tick();

        if result.terminated && !was_over {
            self.metrics.on_game_over();
        }
    }

    fn reset_game(&mut self) {
        self.session.reset();
        self.metrics.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameState, Position, Snack, Snake};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mode_with(state: GameState) -> HumanMode {
        HumanMode::from_session(GameSession::with_seed(GameConfig::small(), 1).with_state(state))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default());
        assert!(!mode.session.state().is_game_over());
        assert_eq!(mode.session.state().score, 0);
    }

    #[test]
    fn test_key_turns_snake() {
        let mut mode = mode_with(GameState::new(
            Snake::single(Position::new(5, 5)),
            Snack::new(Position::new(1, 1)),
        ));

        mode.handle_event(key(KeyCode::Left));
        assert_eq!(mode.session.state().playground.direction, Direction::Right);

        mode.handle_event(key(KeyCode::Up));
        mode.update_game();
        assert_eq!(mode.session.state().snake.head(), Position::new(5, 4));
    }

    #[test]
    fn test_game_over_counted_once() {
        let mut mode = mode_with(GameState::new(
            Snake::single(Position::new(10, 5)),
            Snack::new(Position::new(1, 1)),
        ));

        mode.update_game();
        mode.update_game();
        mode.update_game();
        assert!(mode.session.state().is_game_over());
        assert_eq!(mode.metrics.games_played, 1);
    }

    #[test]
    fn test_game_reset() {
        let mut state = GameState::new(
            Snake::single(Position::new(0, 5)),
            Snack::new(Position::new(1, 1)),
        );
        state.score = 10;
        let mut mode = mode_with(state);
        mode.update_game();

        mode.handle_event(key(KeyCode::Char('r')));
        assert_eq!(mode.session.state().score, 0);
        assert!(!mode.session.state().is_game_over());
    }

    #[test]
    fn test_quit_key() {
        let mut mode = HumanMode::new(GameConfig::small());
        mode.handle_event(key(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }
}
