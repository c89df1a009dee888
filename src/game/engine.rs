use log::{debug, info, warn};

use super::{
    action::Controls,
    config::GameConfig,
    fruit::FruitSpawner,
    geometry::Point,
    state::{GameState, Phase},
};

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepResult {
    /// A new game began this frame
    pub started: bool,
    /// The snake ate the fruit this frame
    pub ate_fruit: bool,
    /// Where a new fruit was placed, if one was
    pub spawned_fruit: Option<Point>,
    /// The snake ran into itself and the game ended
    pub game_over: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    spawner: FruitSpawner,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            spawner: FruitSpawner::new(),
        }
    }

    /// Create an engine whose fruit placement is reproducible
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            spawner: FruitSpawner::seeded(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh idle state for this engine's configuration
    pub fn initial_state(&self) -> GameState {
        GameState::new(&self.config)
    }

    /// Run one frame: handle the start signal, then simulate.
    pub fn tick(&mut self, state: &mut GameState, controls: Controls) -> StepResult {
        let started = controls.confirm && state.phase.can_start();
        if started {
            state.restart(&self.config);
            info!("game started");
        }

        StepResult {
            started,
            ..self.step(state, controls)
        }
    }

    /// Execute one simulation step. Does nothing unless the game is running.
    pub fn step(&mut self, state: &mut GameState, controls: Controls) -> StepResult {
        let mut result = StepResult::default();

        if state.phase != Phase::Running {
            return result;
        }

        let width = self.config.segment_width;

        if let Some(fruit) = state.fruit {
            if state.snake.overlaps(fruit, width) {
                state.fruit = None;
                state.score += 1;
                state.snake.growth += self.config.growth_per_fruit;
                result.ate_fruit = true;
                debug!("fruit eaten at {:?}, score {}", fruit, state.score);
            }
        }

        if state
            .snake
            .check_self_collision(self.config.lookahead_guard, width)
        {
            state.phase = Phase::GameOver;
            result.game_over = true;
            info!(
                "game over after {} frames: score {}, length {}",
                state.frames,
                state.score,
                state.snake.len()
            );
            return result;
        }

        if state.fruit.is_none() {
            match self.spawner.spawn(&state.snake, &self.config) {
                Some(pos) => {
                    state.fruit = Some(pos);
                    result.spawned_fruit = Some(pos);
                    debug!("fruit spawned at {:?}", pos);
                }
                None => warn!(
                    "no free spot for fruit after {} attempts, retrying next frame",
                    FruitSpawner::attempt_budget(state.snake.len(), &self.config)
                ),
            }
        }

        let delta = controls.heading_delta(self.config.turn_rate);
        state.snake.advance(delta, self.config.speed);
        state.frames += 1;

        result
    }
}
