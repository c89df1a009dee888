//! Scripted play without a terminal
//!
//! Starts a game, holds one steering input for a fixed number of frames and
//! reports where the snake ended up. Useful for checking the simulation from
//! scripts and CI where no terminal is available.

use log::info;

use crate::game::{Controls, GameEngine, GameState, Phase, Point};

/// Steering held for the whole headless run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Straight,
    Left,
    Right,
}

impl Steer {
    fn controls(&self) -> Controls {
        match self {
            Steer::Straight => Controls::steering(false, false),
            Steer::Left => Controls::steering(true, false),
            Steer::Right => Controls::steering(false, true),
        }
    }
}

/// Final state of a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSummary {
    pub frames: u64,
    pub score: u32,
    pub length: usize,
    pub head: Point,
    pub phase: Phase,
}

pub struct HeadlessMode {
    engine: GameEngine,
    state: GameState,
    frames: u64,
    steer: Steer,
}

impl HeadlessMode {
    pub fn new(engine: GameEngine, frames: u64, steer: Steer) -> Self {
        let state = engine.initial_state();
        Self {
            engine,
            state,
            frames,
            steer,
        }
    }

    /// Run the simulation and print a report
    pub fn run(&mut self) -> HeadlessSummary {
        self.print_header();
        let summary = self.simulate();
        self.print_summary(&summary);
        summary
    }

    /// Run up to the frame budget, stopping early on game over
    pub fn simulate(&mut self) -> HeadlessSummary {
        let steering = self.steer.controls();
        let start = Controls {
            confirm: true,
            ..steering
        };

        for frame in 0..self.frames {
            let controls = if frame == 0 { start } else { steering };
            let result = self.engine.tick(&mut self.state, controls);

            if result.game_over {
                info!("headless run ended by collision on frame {}", frame + 1);
                break;
            }
        }

        HeadlessSummary {
            frames: self.state.frames,
            score: self.state.score,
            length: self.state.snake.len(),
            head: self.state.snake.head(),
            phase: self.state.phase,
        }
    }

    fn print_header(&self) {
        let config = self.engine.config();
        println!("{}", "=".repeat(50));
        println!("Headless run");
        println!("{}", "=".repeat(50));
        println!("Frames: {}", self.frames);
        println!("Steering: {:?}", self.steer);
        println!("Speed: {} units/frame", config.speed);
        println!("Turn rate: {:.4} rad/frame", config.turn_rate);
        println!();
    }

    fn print_summary(&self, summary: &HeadlessSummary) {
        println!("Frames simulated: {}", summary.frames);
        println!("Final phase: {:?}", summary.phase);
        println!("Score: {}", summary.score);
        println!("Length: {}", summary.length);
        println!("Head: ({:.2}, {:.2})", summary.head.x, summary.head.y);
    }
}
