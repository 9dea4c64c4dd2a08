use glam::Vec2;

use crate::{Config, Side};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Table geometry
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
    paddle_width: f32,
    paddle_height: f32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
            paddle_width: config.paddle_width,
            paddle_height: config.paddle_height,
        }
    }

    /// Where the ball is served from
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Initial top-left corner of a paddle
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => self.width - self.paddle_width,
        };
        Vec2::new(x, (self.height - self.paddle_height) / 2.0)
    }

    /// Clamp a paddle's top edge so the whole paddle stays on the table
    pub fn clamp_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.height - self.paddle_height)
    }

    /// Bounding box of a paddle whose top edge is at `y`
    pub fn paddle_bounds(&self, side: Side, y: f32) -> Aabb {
        let x = self.paddle_spawn(side).x;
        Aabb::from_top_left(
            Vec2::new(x, y),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }

    /// Region power-ups may appear in, away from both goal lines
    pub fn powerup_field(&self, margin: f32, radius: f32) -> Aabb {
        let margin_x = margin.min(self.width / 2.0 - radius).max(radius);
        Aabb::new(
            Vec2::new(margin_x, radius),
            Vec2::new(self.width - margin_x, self.height - radius),
        )
    }
}
