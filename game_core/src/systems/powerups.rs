use glam::Vec2;
use hecs::World;

use crate::components::*;
use crate::resources::*;
use crate::{Config, GameMap, Params};

/// Regenerate the power-up on its fixed interval.
///
/// The old collectible is replaced by a fresh one at a random spot in the
/// middle of the table. Nothing spawns while a paddle effect is running, so
/// at most one power-up is ever live.
pub fn schedule_powerups(
    world: &mut World,
    time: &Time,
    map: &GameMap,
    config: &Config,
    schedule: &mut PowerUpSchedule,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if !schedule.is_due(time.now) {
        return;
    }
    schedule.advance(time.now, config.powerup_interval);

    if world.query::<&PaddleEffect>().iter().next().is_some() {
        return;
    }

    let stale: Vec<hecs::Entity> = world.query::<&PowerUp>().iter().map(|(e, _)| e).collect();
    for entity in stale {
        let _ = world.despawn(entity);
    }

    let field = map.powerup_field(Params::POWERUP_FIELD_MARGIN, config.powerup_radius);
    let pos = Vec2::new(
        rng.gen_range(field.min.x, field.max.x),
        rng.gen_range(field.min.y, field.max.y),
    );
    let kind = if rng.gen_bool() {
        PowerUpKind::SpeedBoost
    } else {
        PowerUpKind::ColorShift
    };

    world.spawn((PowerUp {
        kind,
        pos,
        radius: config.powerup_radius,
        spawned_at: time.now,
    },));
    events.push(GameEvent::PowerUpSpawned(kind));
}

/// Hand a touched power-up to whichever paddle last hit the ball
pub fn collect_powerups(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    let ball = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => *ball,
        None => return,
    };

    let touched: Vec<(hecs::Entity, PowerUp)> = world
        .query::<&PowerUp>()
        .iter()
        .filter(|(_e, p)| {
            let reach = p.radius + config.ball_radius;
            (p.pos - ball.pos).length_squared() <= reach * reach
        })
        .map(|(e, p)| (e, *p))
        .collect();

    for (entity, powerup) in touched {
        let _ = world.despawn(entity);

        if let Some(side) = ball.last_hit {
            let paddle = world
                .query::<&Paddle>()
                .iter()
                .find(|(_e, p)| p.side == side)
                .map(|(e, _)| e);
            if let Some(paddle) = paddle {
                let effect = PaddleEffect {
                    kind: powerup.kind,
                    expires_at: time.now + config.powerup_duration,
                };
                let _ = world.insert_one(paddle, effect);
            }
            log::debug!("{} collected {:?}", side.name(), powerup.kind);
        }

        events.push(GameEvent::PowerUpCollected {
            side: ball.last_hit,
            kind: powerup.kind,
        });
    }
}

/// Remove paddle effects whose time is up
pub fn expire_effects(world: &mut World, time: &Time, events: &mut Events) {
    let expired: Vec<(hecs::Entity, Side, PowerUpKind)> = world
        .query::<(&Paddle, &PaddleEffect)>()
        .iter()
        .filter(|(_e, (_p, effect))| effect.expires_at <= time.now)
        .map(|(e, (p, effect))| (e, p.side, effect.kind))
        .collect();

    for (entity, side, kind) in expired {
        let _ = world.remove_one::<PaddleEffect>(entity);
        events.push(GameEvent::PowerUpExpired { side, kind });
    }
}

/// Effect currently applied to a side's paddle
pub fn active_effect(world: &World, side: Side) -> Option<PaddleEffect> {
    world
        .query::<(&Paddle, &PaddleEffect)>()
        .iter()
        .find(|(_e, (p, _effect))| p.side == side)
        .map(|(_e, (_p, effect))| *effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup() -> (World, Config, GameMap, PowerUpSchedule, GameRng, Events) {
        let config = Config::new();
        let map = GameMap::new(&config);
        let schedule = PowerUpSchedule::new(config.powerup_interval);
        (World::new(), config, map, schedule, GameRng::new(99), Events::new())
    }

    fn powerup_count(world: &World) -> usize {
        world.query::<&PowerUp>().iter().count()
    }

    #[test]
    fn test_powerup_spawns_on_interval_inside_field() {
        let (mut world, config, map, mut schedule, mut rng, mut events) = setup();

        let early = Time::new(Params::FIXED_DT, 9.0);
        schedule_powerups(
            &mut world,
            &early,
            &map,
            &config,
            &mut schedule,
            &mut rng,
            &mut events,
        );
        assert_eq!(powerup_count(&world), 0);

        let due = Time::new(Params::FIXED_DT, 10.0);
        schedule_powerups(
            &mut world,
            &due,
            &map,
            &config,
            &mut schedule,
            &mut rng,
            &mut events,
        );
        assert_eq!(powerup_count(&world), 1);

        let field = map.powerup_field(Params::POWERUP_FIELD_MARGIN, config.powerup_radius);
        for (_e, p) in world.query::<&PowerUp>().iter() {
            assert!(field.contains(p.pos));
        }
        assert!(matches!(events.list[0], GameEvent::PowerUpSpawned(_)));
    }

    #[test]
    fn test_regeneration_replaces_uncollected_powerup() {
        let (mut world, config, map, mut schedule, mut rng, mut events) = setup();
        for now in [10.0, 20.0, 30.0] {
            let time = Time::new(Params::FIXED_DT, now);
            schedule_powerups(
                &mut world,
                &time,
                &map,
                &config,
                &mut schedule,
                &mut rng,
                &mut events,
            );
            assert_eq!(powerup_count(&world), 1, "At most one power-up at a time");
        }
    }

    #[test]
    fn test_no_spawn_while_effect_active() {
        let (mut world, config, map, mut schedule, mut rng, mut events) = setup();
        let paddle = create_paddle(&mut world, &map, Side::Left, Controller::Human);
        world
            .insert_one(
                paddle,
                PaddleEffect {
                    kind: PowerUpKind::SpeedBoost,
                    expires_at: 12.0,
                },
            )
            .unwrap();

        let due = Time::new(Params::FIXED_DT, 10.0);
        schedule_powerups(
            &mut world,
            &due,
            &map,
            &config,
            &mut schedule,
            &mut rng,
            &mut events,
        );
        assert_eq!(powerup_count(&world), 0);
        assert_eq!(schedule.next_at, 20.0);
    }

    #[test]
    fn test_collect_grants_effect_to_last_hitter() {
        let (mut world, config, map, _schedule, _rng, mut events) = setup();
        create_paddle(&mut world, &map, Side::Left, Controller::Human);
        let ball = create_ball(
            &mut world,
            Vec2::new(400.0, 300.0),
            Vec2::new(240.0, 0.0),
            0,
        );
        world.get::<&mut Ball>(ball).unwrap().last_hit = Some(Side::Left);
        world.spawn((PowerUp {
            kind: PowerUpKind::SpeedBoost,
            pos: Vec2::new(410.0, 305.0),
            radius: config.powerup_radius,
            spawned_at: 0.0,
        },));

        let time = Time::new(Params::FIXED_DT, 3.0);
        collect_powerups(&mut world, &time, &config, &mut events);

        assert_eq!(powerup_count(&world), 0);
        let effect = active_effect(&world, Side::Left).unwrap();
        assert_eq!(effect.kind, PowerUpKind::SpeedBoost);
        assert_eq!(effect.expires_at, 3.0 + config.powerup_duration);
        assert!(active_effect(&world, Side::Right).is_none());
    }

    #[test]
    fn test_unclaimed_powerup_is_consumed() {
        let (mut world, config, map, _schedule, _rng, mut events) = setup();
        create_paddle(&mut world, &map, Side::Left, Controller::Human);
        create_ball(
            &mut world,
            Vec2::new(400.0, 300.0),
            Vec2::new(240.0, 0.0),
            0,
        );
        world.spawn((PowerUp {
            kind: PowerUpKind::ColorShift,
            pos: Vec2::new(400.0, 300.0),
            radius: config.powerup_radius,
            spawned_at: 0.0,
        },));

        collect_powerups(&mut world, &Time::default(), &config, &mut events);

        assert_eq!(powerup_count(&world), 0);
        assert!(active_effect(&world, Side::Left).is_none());
        assert_eq!(
            events.list,
            vec![GameEvent::PowerUpCollected {
                side: None,
                kind: PowerUpKind::ColorShift
            }]
        );
    }

    #[test]
    fn test_distant_powerup_is_not_collected() {
        let (mut world, config, _map, _schedule, _rng, mut events) = setup();
        create_ball(
            &mut world,
            Vec2::new(200.0, 300.0),
            Vec2::new(240.0, 0.0),
            0,
        );
        world.spawn((PowerUp {
            kind: PowerUpKind::ColorShift,
            pos: Vec2::new(400.0, 300.0),
            radius: config.powerup_radius,
            spawned_at: 0.0,
        },));

        collect_powerups(&mut world, &Time::default(), &config, &mut events);
        assert_eq!(powerup_count(&world), 1);
    }

    #[test]
    fn test_effect_expires_at_deadline() {
        let (mut world, _config, map, _schedule, _rng, mut events) = setup();
        let paddle = create_paddle(&mut world, &map, Side::Right, Controller::Ai);
        world
            .insert_one(
                paddle,
                PaddleEffect {
                    kind: PowerUpKind::ColorShift,
                    expires_at: 5.0,
                },
            )
            .unwrap();

        expire_effects(&mut world, &Time::new(Params::FIXED_DT, 4.99), &mut events);
        assert!(active_effect(&world, Side::Right).is_some());

        expire_effects(&mut world, &Time::new(Params::FIXED_DT, 5.0), &mut events);
        assert!(active_effect(&world, Side::Right).is_none());
        assert_eq!(
            events.list,
            vec![GameEvent::PowerUpExpired {
                side: Side::Right,
                kind: PowerUpKind::ColorShift
            }]
        );
    }
}
