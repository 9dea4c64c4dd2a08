use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Params;

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left, // Player seat
    Right, // AI seat
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Player",
            Side::Right => "AI",
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to [0, arena_height - paddle_height]
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Movement intent for a human paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
    pub target_y: Option<f32>, // Pointer position, paddle centers on it
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

/// Kinds of collectible power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Paddle moves faster
    SpeedBoost,
    /// Paddle glows in the power-up color
    ColorShift,
}

/// Power-up effect currently applied to a paddle
#[derive(Debug, Clone, Copy)]
pub struct PaddleEffect {
    pub kind: PowerUpKind,
    pub expires_at: f32,
}

impl PaddleEffect {
    pub fn speed_multiplier(&self, boost: f32) -> f32 {
        match self.kind {
            PowerUpKind::SpeedBoost => boost,
            PowerUpKind::ColorShift => 1.0,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub prev_pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
    pub last_hit: Option<Side>,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            prev_pos: pos,
            vel,
            speed: vel.length(),
            last_hit: None,
        }
    }

    /// Re-center the ball and serve it back the other way.
    ///
    /// The horizontal direction is the reverse of the current one; the
    /// vertical component is a random angle within ±45°.
    pub fn reset(&mut self, center: Vec2, speed: f32, rng: &mut crate::GameRng) {
        use rand::Rng;

        let dir_x = if self.vel.x > 0.0 { -1.0 } else { 1.0 };
        let max_angle = Params::BALL_MAX_BOUNCE_ANGLE;
        let angle: f32 = rng.0.gen_range(-max_angle..max_angle);

        self.pos = center;
        self.prev_pos = center;
        self.speed = speed;
        self.vel = Vec2::new(angle.cos() * dir_x, angle.sin()) * speed;
        self.last_hit = None;
    }
}

/// Bounded history of recent ball positions, oldest first
#[derive(Debug, Clone)]
pub struct Trail {
    pub points: VecDeque<Vec2>,
    pub capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.min(Params::MAX_TRAIL_LENGTH)),
            capacity,
        }
    }

    pub fn push(&mut self, pos: Vec2) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(pos);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Collectible sitting on the table
#[derive(Debug, Clone, Copy)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub radius: f32,
    pub spawned_at: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_trail_drops_oldest_beyond_capacity() {
        let mut trail = Trail::new(3);
        for i in 0..5 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.points.len(), 3);
        assert_eq!(trail.points.front().map(|p| p.x), Some(2.0));
        assert_eq!(trail.points.back().map(|p| p.x), Some(4.0));
    }

    #[test]
    fn test_zero_capacity_trail_stays_empty() {
        let mut trail = Trail::new(0);
        trail.push(Vec2::ONE);
        assert!(trail.points.is_empty());
    }

    #[test]
    fn test_oversized_trail_does_not_preallocate() {
        let mut trail = Trail::new(usize::MAX);
        trail.push(Vec2::ONE);
        assert_eq!(trail.points.len(), 1);
    }

    #[test]
    fn test_ball_reset_reverses_horizontal_direction() {
        let mut rng = GameRng::new(7);
        let center = Vec2::new(400.0, 300.0);
        let mut ball = Ball::new(Vec2::new(-5.0, 100.0), Vec2::new(-300.0, 20.0));
        ball.last_hit = Some(Side::Left);

        ball.reset(center, 240.0, &mut rng);
        assert_eq!(ball.pos, center);
        assert!(ball.vel.x > 0.0);
        assert!((ball.vel.length() - 240.0).abs() < 0.01);
        assert_eq!(ball.last_hit, None);

        ball.reset(center, 240.0, &mut rng);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_serve_angle_stays_within_bounce_limit() {
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::X);
        for _ in 0..200 {
            ball.reset(Vec2::ZERO, 240.0, &mut rng);
            let angle = (ball.vel.y / ball.vel.x.abs()).atan();
            assert!(angle.abs() <= Params::BALL_MAX_BOUNCE_ANGLE + 1e-4);
        }
    }

    #[test]
    fn test_side_opponent_and_index() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
        assert_eq!(Side::Left.index(), 0);
        assert_eq!(Side::Right.index(), 1);
    }
}
