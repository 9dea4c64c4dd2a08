use crate::{Ball, Config, Events, GameEvent, GameMap, GameRng, Score, ServeState, Side, Trail};
use hecs::World;

/// Check if ball left the table and award the point.
///
/// The ball is re-centered immediately, so a single crossing can only ever
/// be counted once.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    serve: &mut ServeState,
    config: &Config,
) {
    let r = config.ball_radius;

    for (_entity, (ball, trail)) in world.query_mut::<(&mut Ball, Option<&mut Trail>)>() {
        // Side whose goal line the ball crossed
        let conceded = if ball.pos.x - r < 0.0 {
            Side::Left
        } else if ball.pos.x + r > map.width {
            Side::Right
        } else {
            continue;
        };
        let scorer = conceded.opponent();

        score.increment(scorer);
        events.push(GameEvent::Scored(scorer));
        log::debug!(
            "{} scores ({}-{})",
            scorer.name(),
            score.left,
            score.right
        );

        ball.reset(map.ball_spawn(), config.ball_speed_initial, rng);
        if let Some(trail) = trail {
            trail.clear();
        }
        serve.start_delay(config.serve_delay);
    }
}
