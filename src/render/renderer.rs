use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Rectangle},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};

use crate::game::{GameState, Phase, Point, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::metrics::GameMetrics;

/// Draws the game into whatever terminal area it is given.
///
/// The playfield is scaled to fit, so the terminal size never affects the
/// simulation.
pub struct Renderer {
    segment_width: f32,
}

impl Renderer {
    pub fn new(segment_width: f32) -> Self {
        Self { segment_width }
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

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match state.phase {
            Phase::Running => self.render_playfield(frame, game_area, state),
            Phase::Idle => frame.render_widget(self.render_title(), game_area),
            Phase::GameOver => frame.render_widget(self.render_game_over(state), game_area),
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_playfield(&self, frame: &mut Frame, area: Rect, state: &GameState) {
        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, PLAYFIELD_WIDTH as f64])
            .y_bounds([0.0, PLAYFIELD_HEIGHT as f64])
            .paint(|ctx| {
                if let Some(fruit) = state.fruit {
                    self.draw_square(ctx, fruit, Color::Red);
                }

                let head = state.snake.head();
                for &segment in state.snake.segments() {
                    self.draw_square(ctx, segment, Color::Green);
                }
                self.draw_square(ctx, head, Color::Cyan);
            });

        frame.render_widget(canvas, area);
    }

    /// Draw a segment-sized square at whole-unit coordinates.
    ///
    /// Playfield y grows downwards, canvas y grows upwards.
    fn draw_square(&self, ctx: &mut Context, top_left: Point, color: Color) {
        let width = self.segment_width as f64;
        let x = top_left.x.trunc() as f64;
        let y = PLAYFIELD_HEIGHT as f64 - top_left.y.trunc() as f64 - width;

        ctx.draw(&Rectangle {
            x,
            y,
            width,
            height: width,
            color,
        });
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let mut spans = Vec::new();

        if state.score > 0 {
            spans.push(Span::styled("Score: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("    "));
        }

        spans.extend([
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_score.to_string(),
                Style::default().fg(Color::White),
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
        ]);

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_title(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White)),
        )
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Esc",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("A/←", Style::default().fg(Color::Cyan)),
            Span::raw(" steer left | "),
            Span::styled("D/→", Style::default().fg(Color::Cyan)),
            Span::raw(" steer right | "),
            Span::styled("Space", Style::default().fg(Color::Green)),
            Span::raw(" start | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
