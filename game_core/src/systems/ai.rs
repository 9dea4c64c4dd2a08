use hecs::World;

use crate::{Ball, Config, Controller, GameMap, Paddle, PaddleEffect, Params, Time};

/// Move AI paddles toward the ball.
///
/// Proportional tracking with no prediction: each 1/60s frame the paddle
/// closes `difficulty.factor()` of the gap between its center and the ball.
pub fn track_ball(world: &mut World, time: &Time, map: &GameMap, config: &Config) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return,
    };

    let frames = time.dt / Params::FIXED_DT;
    let half_height = config.paddle_height / 2.0;

    for (_entity, (paddle, controller, effect)) in
        world.query_mut::<(&mut Paddle, &Controller, Option<&PaddleEffect>)>()
    {
        if *controller != Controller::Ai {
            continue;
        }
        let boost = effect.map_or(1.0, |e| e.speed_multiplier(config.powerup_speed_boost));
        let factor = (config.difficulty.factor() * boost * frames).min(1.0);

        paddle.y += (ball_y - (paddle.y + half_height)) * factor;
        paddle.y = map.clamp_y(paddle.y);
    }
}
