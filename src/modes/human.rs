use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{
        Event, EventStream, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use futures::StreamExt;
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr, Write};
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

use crate::game::{Action, GameEngine, GameState};
use crate::input::{InputHandler, KeyStates};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive play in the terminal at a fixed frame rate
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    keys: KeyStates,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine) -> Self {
        let state = engine.initial_state();
        let renderer = Renderer::new(engine.config().segment_width);

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            keys: KeyStates::new(false),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut guard = TerminalGuard::default();
        let result = self.run_in_terminal(&mut guard).await;

        // Cleanup terminal, keeping the loop's error if there was one
        let restored = guard.restore(&mut stderr());
        if let (Err(_), Err(err)) = (&result, &restored) {
            warn!("terminal restore also failed: {:#}", err);
        }
        result.and(restored)
    }

    async fn run_in_terminal(&mut self, guard: &mut TerminalGuard) -> Result<()> {
        // Setup terminal. Each mode is marked before it is entered, since a
        // failed write may still have switched it.
        guard.raw_mode = true;
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        guard.alternate_screen = true;
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        // Key releases are only reported with keyboard enhancement
        let reports_release = matches!(supports_keyboard_enhancement(), Ok(true));
        if reports_release {
            guard.keyboard_enhancement = true;
            execute!(
                stderr,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("Failed to enable key release events")?;
        }
        self.keys = KeyStates::new(reports_release);
        info!("terminal ready, key release events: {}", reports_release);

        guard.cursor_hidden = true;
        execute!(stderr, Hide).context("Failed to hide cursor")?;

        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.clear().context("Failed to clear terminal")?;

        self.run_game_loop(&mut terminal).await
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Sleep out the rest of each frame; frame time never feeds into motion
        let fps = self.engine.config().target_fps;
        let mut frame_timer = interval(Duration::from_secs_f64(1.0 / fps as f64));
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Pending input is always drained before the next frame
                biased;

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }

                _ = frame_timer.tick() => {
                    self.update_game();
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                    self.keys.end_frame();
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            "quitting after {} games and {} frames, best score {}",
            self.metrics.games_played, self.metrics.frames_rendered, self.metrics.best_score
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => match self.input_handler.handle_key_event(key) {
                Some(Action::Quit) => {
                    if key.kind == KeyEventKind::Press {
                        self.should_quit = true;
                    }
                }
                Some(action) => self.keys.apply(action, key.kind),
                None => {}
            },
            Event::FocusLost => self.keys.clear(),
            _ => {}
        }
    }

    fn update_game(&mut self) {
        let controls = self.keys.snapshot();
        let result = self.engine.tick(&mut self.state, controls);

        if result.started {
            self.metrics.on_game_start();
        }
        if result.game_over {
            self.metrics.on_game_over(self.state.score);
        }
    }
}

/// Terminal modes switched on by `HumanMode`, undone on `restore` or drop
#[derive(Debug, Default)]
struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
    keyboard_enhancement: bool,
    cursor_hidden: bool,
}

impl TerminalGuard {
    /// Undo every active mode, even after one step fails, and return the first error
    fn restore<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let mut first_err = None;

        if std::mem::take(&mut self.keyboard_enhancement) {
            keep_first(
                &mut first_err,
                execute!(out, PopKeyboardEnhancementFlags)
                    .context("Failed to restore keyboard mode"),
            );
        }
        if std::mem::take(&mut self.raw_mode) {
            keep_first(
                &mut first_err,
                disable_raw_mode().context("Failed to disable raw mode"),
            );
        }
        if std::mem::take(&mut self.alternate_screen) {
            keep_first(
                &mut first_err,
                execute!(out, LeaveAlternateScreen)
                    .context("Failed to leave alternate screen"),
            );
        }
        if std::mem::take(&mut self.cursor_hidden) {
            keep_first(
                &mut first_err,
                execute!(out, Show).context("Failed to show cursor"),
            );
        }

        first_err.map_or(Ok(()), Err)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore(&mut stderr()) {
            warn!("terminal restore on drop failed: {:#}", err);
        }
    }
}

fn keep_first(first_err: &mut Option<anyhow::Error>, result: Result<()>) {
    if let Err(err) = result {
        first_err.get_or_insert(err);
    }
}
