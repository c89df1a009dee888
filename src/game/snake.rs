use std::collections::VecDeque;

use super::config::GameConfig;
use super::geometry::{squares_overlap, Point};

/// The snake: an ordered trail of segment positions on the playfield
///
/// The tail is at the front of the deque and the head at the back. New head
/// positions are appended one motion step at a time, so consecutive segments
/// are one step apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: VecDeque<Point>,
    /// Current heading in radians, never normalised
    pub heading: f32,
    /// Pending growth steps
    pub growth: u32,
}

impl Snake {
    /// Create a fresh snake laid out horizontally from the configured tail
    pub fn new(config: &GameConfig) -> Self {
        let mut snake = Self {
            segments: VecDeque::new(),
            heading: 0.0,
            growth: 0,
        };
        snake.reset(config);
        snake
    }

    /// Build a snake from explicit segments, tail first
    ///
    /// `segments` must not be empty.
    pub fn from_segments(segments: impl IntoIterator<Item = Point>, heading: f32) -> Self {
        let segments: VecDeque<Point> = segments.into_iter().collect();
        debug_assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            segments,
            heading,
            growth: 0,
        }
    }

    /// Restore the starting layout, heading and growth credit
    pub fn reset(&mut self, config: &GameConfig) {
        let tail = config.initial_tail;
        self.segments = (0..config.initial_segments)
            .map(|i| tail.moved_by(config.initial_spacing * i as f32, 0.0))
            .collect();
        self.heading = 0.0;
        self.growth = 0;
    }

    /// Steer by `heading_delta` and move the head one step of `speed`.
    ///
    /// The tail is kept while growth credit remains, otherwise dropped.
    pub fn advance(&mut self, heading_delta: f32, speed: f32) {
        self.heading += heading_delta;

        let (dy, dx) = self.heading.sin_cos();
        let new_head = self.head().moved_by(speed * dx, speed * dy);
        self.segments.push_back(new_head);

        if self.growth > 0 {
            self.growth -= 1;
        } else {
            self.segments.pop_front();
        }
    }

    /// Whether the head overlaps a segment at least `guard` positions behind it
    pub fn check_self_collision(&self, guard: usize, width: f32) -> bool {
        let head = self.head();
        let checked = self.segments.len().saturating_sub(guard);

        self.segments
            .iter()
            .take(checked)
            .any(|&segment| squares_overlap(head, segment, width))
    }

    /// Whether a square at `pos` overlaps any segment
    pub fn overlaps(&self, pos: Point, width: f32) -> bool {
        self.segments
            .iter()
            .any(|&segment| squares_overlap(segment, pos, width))
    }

    pub fn head(&self) -> Point {
        *self.segments.back().expect("snake always has a segment")
    }

    pub fn tail(&self) -> Point {
        *self.segments.front().expect("snake always has a segment")
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Point> + '_ {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
