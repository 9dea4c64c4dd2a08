//! Color presets for the cosmetic options

use serde::{Deserialize, Serialize};

use crate::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#ff8800`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub background: Color,
    pub left_paddle: Color,
    pub right_paddle: Color,
    pub ball: Color,
    pub net: Color,
    pub text: Color,
    pub powerup: Color,
}

impl Palette {
    pub fn paddle(&self, side: Side) -> Color {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }
}

pub const PALETTES: [Palette; 4] = [
    Palette {
        name: "Classic",
        background: Color::rgb(0, 0, 0),
        left_paddle: Color::rgb(255, 255, 255),
        right_paddle: Color::rgb(255, 255, 255),
        ball: Color::rgb(255, 255, 255),
        net: Color::rgb(90, 90, 90),
        text: Color::rgb(255, 255, 255),
        powerup: Color::rgb(255, 215, 0),
    },
    Palette {
        name: "Neon",
        background: Color::rgb(10, 4, 24),
        left_paddle: Color::rgb(0, 255, 200),
        right_paddle: Color::rgb(255, 0, 170),
        ball: Color::rgb(255, 255, 80),
        net: Color::rgb(60, 30, 110),
        text: Color::rgb(200, 240, 255),
        powerup: Color::rgb(120, 255, 60),
    },
    Palette {
        name: "Retro",
        background: Color::rgb(16, 32, 16),
        left_paddle: Color::rgb(120, 220, 120),
        right_paddle: Color::rgb(120, 220, 120),
        ball: Color::rgb(190, 255, 190),
        net: Color::rgb(50, 90, 50),
        text: Color::rgb(150, 240, 150),
        powerup: Color::rgb(240, 240, 120),
    },
    Palette {
        name: "Sunset",
        background: Color::rgb(40, 16, 40),
        left_paddle: Color::rgb(255, 150, 60),
        right_paddle: Color::rgb(255, 90, 120),
        ball: Color::rgb(255, 230, 170),
        net: Color::rgb(110, 50, 80),
        text: Color::rgb(255, 220, 200),
        powerup: Color::rgb(120, 200, 255),
    },
];

/// Index into [`PALETTES`] that wraps in both directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaletteChoice(usize);

impl PaletteChoice {
    pub fn get(self) -> &'static Palette {
        &PALETTES[self.0 % PALETTES.len()]
    }

    pub fn next(self) -> Self {
        Self((self.0 + 1) % PALETTES.len())
    }

    pub fn prev(self) -> Self {
        Self((self.0 + PALETTES.len() - 1) % PALETTES.len())
    }
}
