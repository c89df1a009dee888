//! Steer Snake - a continuous-motion Snake game for the terminal
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - Mapping from terminal keys to logical actions (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - Interactive and headless frame loops (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
