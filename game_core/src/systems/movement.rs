use crate::{Ball, Config, GameMap, Paddle, PaddleEffect, PaddleIntent, ServeState, Time, Trail};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, map: &GameMap, config: &Config) {
    for (_entity, (paddle, intent, effect)) in
        world.query_mut::<(&mut Paddle, &PaddleIntent, Option<&PaddleEffect>)>()
    {
        if let Some(target_y) = intent.target_y {
            // Pointer control centers the paddle on the cursor
            paddle.y = target_y - config.paddle_height / 2.0;
        } else if intent.dir != 0 {
            let boost = effect.map_or(1.0, |e| e.speed_multiplier(config.powerup_speed_boost));
            paddle.y += intent.dir as f32 * config.paddle_speed * boost * time.dt;
        }

        // Clamp to arena bounds
        paddle.y = map.clamp_y(paddle.y);
    }
}

/// Move ball based on velocity, holding it still during the serve delay
pub fn move_ball(world: &mut World, time: &Time, serve: &mut ServeState) {
    if !serve.is_ready() {
        serve.update(time.dt);
        return;
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.prev_pos = ball.pos;
        ball.pos += ball.vel * time.dt;
    }
}

/// Append the ball's position to its trail while it is in play
pub fn record_trail(world: &mut World, serve: &ServeState) {
    if !serve.is_ready() {
        return;
    }
    for (_entity, (ball, trail)) in world.query_mut::<(&Ball, &mut Trail)>() {
        trail.push(ball.pos);
    }
}
