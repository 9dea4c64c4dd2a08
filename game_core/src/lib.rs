pub mod components;
pub mod config;
pub mod map;
pub mod palette;
pub mod params;
pub mod resources;
pub mod stats;
pub mod systems;
pub mod tournament;

pub use components::*;
pub use config::*;
pub use map::*;
pub use palette::*;
pub use params::*;
pub use resources::*;
pub use stats::*;
pub use tournament::*;

use hecs::World;
use systems::*;

/// Run the deterministic Pong game simulation for one frame
///
/// Events from every micro-step of the frame are collected in `events`.
/// Simulation stops early once a side reaches `config.win_score`.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    inputs: &mut InputQueue,
    rng: &mut GameRng,
    serve: &mut ServeState,
    schedule: &mut PowerUpSchedule,
) -> Option<Side> {
    events.clear();

    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Ingest inputs (apply to paddle intents)
        ingest_inputs(world, inputs);

        // 2. AI paddles follow the ball
        track_ball(world, &step_time, map, config);

        // 3. Move paddles based on intents
        move_paddles(world, &step_time, map, config);

        // 4. Drop power-up effects that ran out
        expire_effects(world, &step_time, events);

        // 5. Move ball and remember where it has been
        move_ball(world, &step_time, serve);
        record_trail(world, serve);

        // 6. Check collisions (ball vs walls, paddles)
        check_collisions(world, map, config, events);

        // 7. Ball picks up power-ups for its last hitter
        collect_powerups(world, &step_time, config, events);

        // 8. Check scoring (ball exited arena)
        check_scoring(world, map, score, events, rng, serve, config);

        // 9. Regenerate the power-up on its interval
        schedule_powerups(world, &step_time, map, config, schedule, rng, events);

        if let Some(winner) = score.has_winner(config.win_score) {
            events.push(GameEvent::MatchPoint(winner));
            log::info!(
                "{} wins the match {}-{}",
                winner.name(),
                score.left,
                score.right
            );
            time.now = step_time.now;
            return Some(winner);
        }
    }

    // Update time
    time.now += clamped_dt;
    None
}

/// Helper to create a paddle entity at its starting spot
pub fn create_paddle(
    world: &mut World,
    map: &GameMap,
    side: Side,
    controller: Controller,
) -> hecs::Entity {
    let y = map.paddle_spawn(side).y;
    world.spawn((Paddle::new(side, y), PaddleIntent::new(), controller))
}

/// Helper to create the ball entity with a trail of `trail_length` points
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    trail_length: usize,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel), Trail::new(trail_length)))
}
