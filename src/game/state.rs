use super::config::GameConfig;
use super::geometry::Point;
use super::snake::Snake;

/// Phase of the game state machine
///
/// | From     | Event          | To       |
/// |----------|----------------|----------|
/// | Idle     | confirm held   | Running  |
/// | GameOver | confirm held   | Running  |
/// | Running  | self-collision | GameOver |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Before the first game
    #[default]
    Idle,
    Running,
    GameOver,
}

impl Phase {
    /// Whether a start signal would begin a new game
    pub fn can_start(&self) -> bool {
        !matches!(self, Phase::Running)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub snake: Snake,
    pub fruit: Option<Point>,
    pub score: u32,
    /// Frames simulated in the current game
    pub frames: u64,
}

impl GameState {
    /// Create an idle state holding a fresh snake
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: Phase::Idle,
            snake: Snake::new(config),
            fruit: None,
            score: 0,
            frames: 0,
        }
    }

    /// Start a new game, whatever came before
    pub fn restart(&mut self, config: &GameConfig) {
        self.snake.reset(config);
        self.fruit = None;
        self.score = 0;
        self.frames = 0;
        self.phase = Phase::Running;
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
