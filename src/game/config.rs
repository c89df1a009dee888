use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::path::Path;

use super::geometry::Point;

/// Width of the playfield in simulation units
pub const PLAYFIELD_WIDTH: f32 = 500.0;
/// Height of the playfield in simulation units
pub const PLAYFIELD_HEIGHT: f32 = 500.0;

/// Tuning constants for the simulation
///
/// Every field has a default, so a config file only needs to name the values
/// it changes.
///
/// # Example
///
/// ```rust
/// use steer_snake::game::GameConfig;
///
/// let config = GameConfig {
///     speed: 3.0,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.lookahead_guard, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distance the head travels per frame
    pub speed: f32,
    /// Heading change per frame while a steer key is held (radians)
    pub turn_rate: f32,
    /// Side length of the collision square for segments and fruit
    pub segment_width: f32,
    /// Segments this close to the head are exempt from self-collision
    pub lookahead_guard: usize,
    /// Growth credit added per fruit eaten
    pub growth_per_fruit: u32,
    /// Distance kept between a spawned fruit and the playfield edge
    pub fruit_margin: f32,
    /// Fruit placement tries per frame before giving up until the next frame
    pub max_spawn_attempts: u32,
    /// Segment overlap checks fruit placement may spend in one frame
    pub spawn_check_budget: usize,
    /// Tail position of a fresh snake
    pub initial_tail: Point,
    /// Segment count of a fresh snake
    pub initial_segments: usize,
    /// Horizontal spacing of a fresh snake's segments
    pub initial_spacing: f32,
    /// Frame rate of the interactive loop
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            turn_rate: PI / 60.0,
            segment_width: 10.0,
            lookahead_guard: 40,
            growth_per_fruit: 5,
            fruit_margin: 20.0,
            max_spawn_attempts: 256,
            spawn_check_budget: 200_000,
            initial_tail: Point::new(100.0, 100.0),
            initial_segments: 5,
            initial_spacing: 5.0,
            target_fps: 60,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config
            .validate()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }

    /// Check that all values are usable by the simulation
    ///
    /// # Example
    ///
    /// ```rust
    /// use steer_snake::game::GameConfig;
    ///
    /// let mut config = GameConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.initial_segments = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), String> {
        let floats = [
            ("speed", self.speed),
            ("turn_rate", self.turn_rate),
            ("segment_width", self.segment_width),
            ("fruit_margin", self.fruit_margin),
            ("initial_spacing", self.initial_spacing),
            ("initial_tail.x", self.initial_tail.x),
            ("initial_tail.y", self.initial_tail.y),
        ];
        if let Some((name, value)) = floats.iter().find(|(_, value)| !value.is_finite()) {
            return Err(format!("{} must be finite, got {}", name, value));
        }

        if self.speed <= 0.0 {
            return Err(format!("speed must be positive, got {}", self.speed));
        }

        if self.turn_rate < 0.0 {
            return Err(format!(
                "turn_rate must be non-negative, got {}",
                self.turn_rate
            ));
        }

        if self.segment_width <= 0.0 {
            return Err(format!(
                "segment_width must be positive, got {}",
                self.segment_width
            ));
        }

        if self.fruit_margin < 0.0 || self.fruit_margin * 2.0 > PLAYFIELD_WIDTH.min(PLAYFIELD_HEIGHT)
        {
            return Err(format!(
                "fruit_margin must leave room on the playfield, got {}",
                self.fruit_margin
            ));
        }

        if self.max_spawn_attempts == 0 {
            return Err("max_spawn_attempts must be at least 1".to_string());
        }

        if self.spawn_check_budget == 0 {
            return Err("spawn_check_budget must be at least 1".to_string());
        }

        if self.initial_segments == 0 {
            return Err("initial_segments must be at least 1".to_string());
        }

        if self.target_fps == 0 {
            return Err("target_fps must be at least 1".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.speed, 2.0);
        assert_eq!(config.turn_rate, PI / 60.0);
        assert_eq!(config.segment_width, 10.0);
        assert_eq!(config.lookahead_guard, 40);
        assert_eq!(config.growth_per_fruit, 5);
        assert_eq!(config.initial_segments, 5);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.speed = 0.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.fruit_margin = 300.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.max_spawn_attempts = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.target_fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_values() {
        let mut config = GameConfig::default();
        config.speed = f32::INFINITY;
        assert!(config.validate().unwrap_err().contains("speed"));

        let mut config = GameConfig::default();
        config.turn_rate = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.initial_spacing = f32::NEG_INFINITY;
        assert!(config.validate().unwrap_err().contains("initial_spacing"));

        let mut config = GameConfig::default();
        config.initial_tail = Point::new(100.0, f32::INFINITY);
        assert!(config.validate().unwrap_err().contains("initial_tail.y"));
    }

    #[test]
    fn test_load_rejects_overflowing_speed() {
        // Too large for f32, parses to infinity
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "speed": 1e39 }}"#).unwrap();
        assert!(GameConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "speed": 3.5, "lookahead_guard": 30 }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.speed, 3.5);
        assert_eq!(config.lookahead_guard, 30);
        assert_eq!(config.growth_per_fruit, 5);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "speed": -1.0 }}"#).unwrap();
        assert!(GameConfig::load(file.path()).is_err());

        let mut garbage = NamedTempFile::new().unwrap();
        write!(garbage, "not json").unwrap();
        assert!(GameConfig::load(garbage.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GameConfig::load(&dir.path().join("missing.json")).is_err());
    }
}
