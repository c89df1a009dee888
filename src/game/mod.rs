//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Motion is continuous: the snake moves a fixed distance per frame along a heading
//! that steering rotates, and every collision is a square overlap test.

pub mod action;
pub mod config;
pub mod engine;
pub mod fruit;
pub mod geometry;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Controls};
pub use config::{GameConfig, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
pub use engine::{GameEngine, StepResult};
pub use fruit::FruitSpawner;
pub use geometry::{squares_overlap, Point, Quad};
pub use snake::Snake;
pub use state::{GameState, Phase};
