pub mod draw;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use game_core::Color;
use glam::Vec2;

pub use draw::draw_frame;

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// The 2D drawing primitives a frame is made of
pub trait Surface {
    fn clear(&mut self, color: Color) -> Result<(), String>;

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) -> Result<(), String>;

    /// Filled circle; `alpha` is the opacity in `[0, 1]`
    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Color,
        alpha: f32,
    ) -> Result<(), String>;

    /// Text whose baseline starts at `pos`, `size` in pixels
    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        size: f32,
        align: TextAlign,
        color: Color,
    ) -> Result<(), String>;
}
