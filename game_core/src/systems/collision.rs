use crate::{Ball, Config, Events, GameEvent, GameMap, Paddle, Params, Side};
use glam::Vec2;
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Collect paddle data first so the ball can be borrowed mutably
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    let r = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls
        if ball.pos.y - r <= 0.0 && ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = r;
            events.push(GameEvent::WallBounce);
        } else if ball.pos.y + r >= map.height && ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = map.height - r;
            events.push(GameEvent::WallBounce);
        }

        for &(side, paddle_y) in &paddles {
            if hits_paddle(ball, side, paddle_y, map, config) {
                bounce_off_paddle(ball, side, paddle_y, map, config);
                events.push(GameEvent::PaddleHit {
                    side,
                    speed: ball.speed,
                });
                break;
            }
        }
    }
}

/// Swept test of the ball's leading edge against a paddle face.
///
/// The ball must be moving toward the paddle, overlap it vertically, and
/// have its leading edge reach the face this step without having started
/// the step already behind the paddle.
fn hits_paddle(ball: &Ball, side: Side, paddle_y: f32, map: &GameMap, config: &Config) -> bool {
    let r = config.ball_radius;
    let bounds = map.paddle_bounds(side, paddle_y);

    let overlaps_y = ball.pos.y + r >= bounds.min.y && ball.pos.y - r <= bounds.max.y;
    if !overlaps_y {
        return false;
    }

    match side {
        Side::Left => {
            ball.vel.x < 0.0
                && ball.pos.x - r <= bounds.max.x
                && ball.prev_pos.x - r >= bounds.min.x
        }
        Side::Right => {
            ball.vel.x > 0.0
                && ball.pos.x + r >= bounds.min.x
                && ball.prev_pos.x + r <= bounds.max.x
        }
    }
}

fn bounce_off_paddle(ball: &mut Ball, side: Side, paddle_y: f32, map: &GameMap, config: &Config) {
    let r = config.ball_radius;
    let bounds = map.paddle_bounds(side, paddle_y);
    let half_height = config.paddle_height / 2.0;

    // -1 at the top edge, 1 at the bottom edge
    let hit_relative_y = ((ball.pos.y - (paddle_y + half_height)) / half_height).clamp(-1.0, 1.0);
    let angle = hit_relative_y * Params::BALL_MAX_BOUNCE_ANGLE;

    ball.speed += config.ball_speed_increment;

    let dir_x = match side {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };
    ball.vel = Vec2::new(angle.cos() * dir_x, angle.sin()) * ball.speed;

    // Push ball out of paddle
    ball.pos.x = match side {
        Side::Left => bounds.max.x + r,
        Side::Right => bounds.min.x - r,
    };
    ball.last_hit = Some(side);
}
