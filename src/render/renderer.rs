use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::cell::CellClass;
use crate::game::GameState;
use crate::metrics::GameMetrics;

pub struct Renderer {
    grid_size: i32,
}

impl Renderer {
    pub fn new(grid_size: i32) -> Self {
        Self { grid_size }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);
        frame.render_widget(self.render_grid(state), chunks[1]);

        let footer = if state.is_game_over() {
            self.render_game_over(state)
        } else {
            self.render_controls()
        };
        frame.render_widget(footer, chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let head = state.snake.head();
        let lines: Vec<Line> = (0..=self.grid_size)
            .map(|y| {
                let spans: Vec<Span> = (0..=self.grid_size)
                    .map(|x| {
                        let class = CellClass::classify(state, self.grid_size, x, y);
                        Self::cell_span(class, head.x == x && head.y == y)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake! "),
            )
            .alignment(Alignment::Center)
    }

    fn cell_span(class: CellClass, is_head: bool) -> Span<'static> {
        if class.hit {
            Span::styled(
                "X ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else if class.snake && is_head {
            Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else if class.snake {
            Span::styled("□ ", Style::default().fg(Color::Green))
        } else if class.snack {
            Span::styled(
                "O ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else if class.border {
            Span::styled("▒▒", Style::default().fg(Color::Gray))
        } else {
            Span::styled(". ", Style::default().fg(Color::DarkGray))
        }
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.snake.len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  score {}  ", state.score),
                Style::default().fg(Color::White),
            ),
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "R",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to reset or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to reset | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Position, Snack, Snake};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_score_and_cells() {
        let mut state = GameState::new(
            Snake::single(Position::new(2, 2)),
            Snack::new(Position::new(3, 3)),
        );
        state.score = 4;
        let renderer = Renderer::new(5);
        let metrics = GameMetrics::new();

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, &state, &metrics))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 4"));
        assert!(text.contains('■'));
        assert!(text.contains('O'));
        assert!(text.contains("to reset"));
    }

    #[test]
    fn test_renders_game_over() {
        let mut state = GameState::new(
            Snake::single(Position::new(0, 2)),
            Snack::new(Position::new(3, 3)),
        );
        state.playground.is_game_over = true;
        let renderer = Renderer::new(5);
        let metrics = GameMetrics::new();

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, &state, &metrics))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains('X'));
    }
}
