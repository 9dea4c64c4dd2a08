use glam::Vec2;

use super::{Surface, TextAlign};
use crate::state::{Banner, FrameView};

const NET_WIDTH: f32 = 4.0;
const NET_DASH: f32 = 20.0;
const NET_GAP: f32 = 15.0;
const SCORE_SIZE: f32 = 48.0;
const BANNER_SIZE: f32 = 40.0;
const HINT_SIZE: f32 = 20.0;
const FOOTER_SIZE: f32 = 14.0;

/// Draw one frame, back to front
pub fn draw_frame<S: Surface>(surface: &mut S, view: &FrameView) -> Result<(), String> {
    let palette = view.palette;

    surface.clear(palette.background)?;
    draw_net(surface, view)?;

    for dot in &view.trail {
        surface.fill_circle(dot.center, dot.radius, dot.color, dot.alpha)?;
    }

    if let Some(powerup) = &view.powerup {
        surface.fill_circle(powerup.center, powerup.radius, powerup.color, powerup.alpha)?;
    }

    for paddle in &view.paddles {
        surface.fill_rect(paddle.pos, paddle.size, paddle.color)?;
    }

    if let Some(ball) = &view.ball {
        surface.fill_circle(ball.center, ball.radius, ball.color, ball.alpha)?;
    }

    // Scores
    let quarter = view.width / 4.0;
    for (i, score) in view.score.iter().enumerate() {
        surface.fill_text(
            &score.to_string(),
            Vec2::new(quarter * (1 + 2 * i) as f32, 60.0),
            SCORE_SIZE,
            TextAlign::Center,
            palette.text,
        )?;
    }

    if let Some(banner) = view.banner {
        draw_banner(surface, view, banner)?;
    }

    surface.fill_text(
        &view.footer,
        Vec2::new(10.0, view.height - 10.0),
        FOOTER_SIZE,
        TextAlign::Left,
        palette.text,
    )
}

fn draw_net<S: Surface>(surface: &mut S, view: &FrameView) -> Result<(), String> {
    let x = (view.width - NET_WIDTH) / 2.0;
    let mut y = 0.0;
    while y < view.height {
        let len = NET_DASH.min(view.height - y);
        surface.fill_rect(Vec2::new(x, y), Vec2::new(NET_WIDTH, len), view.palette.net)?;
        y += NET_DASH + NET_GAP;
    }
    Ok(())
}

/// Headline and hint line for each screen
fn banner_lines(banner: Banner) -> (String, String) {
    match banner {
        Banner::Title => (
            "PONG".to_string(),
            "Enter to start, Up/Down for difficulty".to_string(),
        ),
        Banner::Paused => ("PAUSED".to_string(), "P to resume".to_string()),
        Banner::RoundOver { winner, next_round } => (
            format!("{} takes the round", winner.name()),
            format!("Enter for round {}", next_round),
        ),
        Banner::GameOver { winner, tournament } => (
            if tournament {
                format!("{} wins the tournament", winner.name())
            } else {
                format!("GAME OVER: {} wins", winner.name())
            },
            "Enter to play again".to_string(),
        ),
    }
}

fn draw_banner<S: Surface>(
    surface: &mut S,
    view: &FrameView,
    banner: Banner,
) -> Result<(), String> {
    let center = Vec2::new(view.width / 2.0, view.height / 2.0);
    let (headline, hint) = banner_lines(banner);

    surface.fill_text(
        &headline,
        center,
        BANNER_SIZE,
        TextAlign::Center,
        view.palette.text,
    )?;
    surface.fill_text(
        &hint,
        center + Vec2::new(0.0, BANNER_SIZE),
        HINT_SIZE,
        TextAlign::Center,
        view.palette.text,
    )
}
