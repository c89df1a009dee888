use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{GameConfig, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use super::geometry::Point;
use super::snake::Snake;

/// Places fruit at random free spots on the playfield
pub struct FruitSpawner {
    rng: StdRng,
}

impl FruitSpawner {
    /// Create a spawner seeded from the OS
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a spawner that always produces the same sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Number of candidates one `spawn` call may draw for a snake of `snake_len`.
    ///
    /// Every candidate is checked against each segment, so the count is
    /// capped by `max_spawn_attempts` and by `spawn_check_budget` overlap
    /// checks. At least one candidate is always drawn.
    pub fn attempt_budget(snake_len: usize, config: &GameConfig) -> u32 {
        let by_checks = config.spawn_check_budget / snake_len.max(1);
        let by_checks = u32::try_from(by_checks).unwrap_or(u32::MAX);
        config.max_spawn_attempts.min(by_checks).max(1)
    }

    /// Draw candidate spots until one does not overlap the snake.
    ///
    /// Returns `None` once the frame's attempt budget has been rejected.
    pub fn spawn(&mut self, snake: &Snake, config: &GameConfig) -> Option<Point> {
        let margin = config.fruit_margin as i32;
        let max_x = PLAYFIELD_WIDTH as i32 - margin;
        let max_y = PLAYFIELD_HEIGHT as i32 - margin;

        for _ in 0..Self::attempt_budget(snake.len(), config) {
            let x = self.rng.gen_range(margin..=max_x);
            let y = self.rng.gen_range(margin..=max_y);
            let pos = Point::new(x as f32, y as f32);

            if !snake.overlaps(pos, config.segment_width) {
                return Some(pos);
            }
        }

        None
    }
}

impl Default for FruitSpawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Segments every 5 units cover the whole playfield
    fn full_field_snake() -> Snake {
        Snake::from_segments(
            (0..=100).flat_map(|ix| {
                (0..=100).map(move |iy| Point::new(ix as f32 * 5.0, iy as f32 * 5.0))
            }),
            0.0,
        )
    }

    #[test]
    fn test_spawn_avoids_snake() {
        let config = GameConfig::default();
        let snake = Snake::new(&config);

        for seed in 0..50 {
            let mut spawner = FruitSpawner::seeded(seed);
            for _ in 0..20 {
                let fruit = spawner.spawn(&snake, &config).unwrap();
                assert!(!snake.overlaps(fruit, config.segment_width));
            }
        }
    }

    #[test]
    fn test_spawn_stays_inside_margin() {
        let config = GameConfig::default();
        let snake = Snake::new(&config);
        let mut spawner = FruitSpawner::seeded(7);

        for _ in 0..500 {
            let fruit = spawner.spawn(&snake, &config).unwrap();
            assert!(fruit.x >= 20.0 && fruit.x <= PLAYFIELD_WIDTH - 20.0);
            assert!(fruit.y >= 20.0 && fruit.y <= PLAYFIELD_HEIGHT - 20.0);
            assert_eq!(fruit.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_spawn_avoids_long_snake() {
        let config = GameConfig::default();
        // A dense band of segments across the middle of the field
        let snake = Snake::from_segments(
            (0..200).map(|i| Point::new(20.0 + 2.0 * i as f32, 250.0)),
            0.0,
        );

        for seed in 0..20 {
            let mut spawner = FruitSpawner::seeded(seed);
            let fruit = spawner.spawn(&snake, &config).unwrap();
            assert!(!snake.overlaps(fruit, config.segment_width));
        }
    }

    #[test]
    fn test_same_seed_same_fruit() {
        let config = GameConfig::default();
        let snake = Snake::new(&config);

        let a = FruitSpawner::seeded(42).spawn(&snake, &config);
        let b = FruitSpawner::seeded(42).spawn(&snake, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_spawn_gives_up_when_field_is_full() {
        let config = GameConfig {
            max_spawn_attempts: 100,
            ..Default::default()
        };
        let snake = full_field_snake();

        let mut spawner = FruitSpawner::seeded(1);
        assert_eq!(spawner.spawn(&snake, &config), None);
    }

    #[test]
    fn test_full_field_spawn_stays_within_check_budget() {
        let config = GameConfig::default();
        let snake = full_field_snake();
        assert_eq!(snake.len(), 101 * 101);

        let attempts = FruitSpawner::attempt_budget(snake.len(), &config);
        assert!(attempts >= 1);
        assert!(attempts as usize * snake.len() <= config.spawn_check_budget);
        assert!(attempts < config.max_spawn_attempts);

        let mut spawner = FruitSpawner::seeded(1);
        assert_eq!(spawner.spawn(&snake, &config), None);
    }

    #[test]
    fn test_attempt_budget_for_short_snake() {
        let config = GameConfig::default();
        assert_eq!(
            FruitSpawner::attempt_budget(5, &config),
            config.max_spawn_attempts
        );

        let tight = GameConfig {
            spawn_check_budget: 10,
            ..Default::default()
        };
        // A snake longer than the check budget still gets one candidate
        assert_eq!(FruitSpawner::attempt_budget(50, &tight), 1);
    }
}
