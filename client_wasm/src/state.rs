//! Per-frame snapshot of everything the renderer draws

use game_core::{Color, Palette, Side};
use glam::Vec2;

/// Opacity of the oldest and newest trail points
const TRAIL_ALPHA_MIN: f32 = 0.05;
const TRAIL_ALPHA_MAX: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectView {
    pub pos: Vec2, // Top-left corner
    pub size: Vec2,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleView {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    pub alpha: f32,
}

/// Centered message drawn over the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Title,
    Paused,
    RoundOver { winner: Side, next_round: u8 },
    GameOver { winner: Side, tournament: bool },
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct FrameView {
    pub width: f32,
    pub height: f32,
    pub palette: &'static Palette,
    pub paddles: Vec<RectView>,
    pub ball: Option<CircleView>,
    pub trail: Vec<CircleView>,
    pub powerup: Option<CircleView>,
    pub score: [u8; 2],
    pub banner: Option<Banner>,
    pub footer: String,
}

/// Alpha for trail point `index` of `len`, oldest first
pub fn trail_alpha(index: usize, len: usize) -> f32 {
    if len <= 1 {
        return TRAIL_ALPHA_MAX;
    }
    let t = index as f32 / (len - 1) as f32;
    TRAIL_ALPHA_MIN + (TRAIL_ALPHA_MAX - TRAIL_ALPHA_MIN) * t
}

/// Fading circles for a ball trail, oldest first
pub fn trail_circles<'a>(
    points: impl ExactSizeIterator<Item = &'a Vec2>,
    radius: f32,
    color: Color,
) -> Vec<CircleView> {
    let len = points.len();
    points
        .enumerate()
        .map(|(i, p)| CircleView {
            center: *p,
            radius,
            color,
            alpha: trail_alpha(i, len),
        })
        .collect()
}
