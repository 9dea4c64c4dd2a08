//! Local game session: one player against the AI (or AI against AI)

use game_core::systems::active_effect;
use game_core::{
    create_ball, create_paddle, step, Ball, Config, Controller, Events, GameMap, GameRng,
    InputQueue, MatchStats, Paddle, PaddleEffect, PaddleInput, PaddleIntent, PaletteChoice,
    Params, PowerUp, PowerUpKind, PowerUpSchedule, RoundOutcome, Score, ServeState, Side, Time,
    Tournament, Trail,
};
use glam::Vec2;
use hecs::World;

use crate::fsm::{FsmState, GameAction, GameFsm};
use crate::input::Command;
use crate::state::{trail_circles, Banner, CircleView, FrameView, RectView};

/// Seconds a fresh power-up takes to fade in
const POWERUP_FADE_IN: f32 = 0.5;
const POWERUP_MIN_ALPHA: f32 = 0.2;

pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub inputs: InputQueue,
    pub rng: GameRng,
    pub serve: ServeState,
    pub schedule: PowerUpSchedule,
    pub stats: MatchStats,
    pub tournament: Tournament,
    pub fsm: GameFsm,
    pub palette: PaletteChoice,
    pub tournament_mode: bool,
    pub spectator: bool,
    pub trail_enabled: bool,
    last_winner: Option<Side>,
}

impl LocalGame {
    pub fn new(seed: u64, config: Config) -> Self {
        let map = GameMap::new(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, &map, Side::Left, Controller::Human);
        create_paddle(&mut world, &map, Side::Right, Controller::Ai);

        let mut ball = Ball::new(map.ball_spawn(), Vec2::ZERO);
        ball.reset(map.ball_spawn(), config.ball_speed_initial, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel, config.trail_length);

        let mut serve = ServeState::new();
        serve.start_delay(config.serve_delay);

        Self {
            world,
            time: Time::default(),
            map,
            schedule: PowerUpSchedule::new(config.powerup_interval),
            tournament: Tournament::new(config.rounds_to_win),
            config,
            score: Score::new(),
            events: Events::new(),
            inputs: InputQueue::new(),
            rng,
            serve,
            stats: MatchStats::new(),
            fsm: GameFsm::new(),
            palette: PaletteChoice::default(),
            tournament_mode: false,
            spectator: false,
            trail_enabled: true,
            last_winner: None,
        }
    }

    /// Advance the session by one animation frame
    ///
    /// The world only moves while playing; other states just keep drawing.
    pub fn frame(&mut self, dt: f32) {
        if !self.fsm.is_playing() {
            return;
        }

        self.time.dt = dt;
        let winner = step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.inputs,
            &mut self.rng,
            &mut self.serve,
            &mut self.schedule,
        );
        self.stats.record(&self.events, dt.min(Params::MAX_DT));

        if let Some(winner) = winner {
            self.finish_round(winner);
        }
    }

    fn finish_round(&mut self, winner: Side) {
        self.last_winner = Some(winner);

        if !self.tournament_mode {
            self.stats.record_match(winner);
            self.fsm.transition(GameAction::MatchWon);
            return;
        }

        match self.tournament.record_round(winner) {
            RoundOutcome::NextRound(round) => {
                log::info!("{} takes the round, round {} next", winner.name(), round);
                self.fsm.transition(GameAction::RoundWon);
            }
            RoundOutcome::Champion(champion) => {
                self.stats.record_match(champion);
                self.fsm.transition(GameAction::MatchWon);
            }
        }
    }

    /// Apply a decoded key, button or script command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveUp => self.push_move(-1),
            Command::MoveDown => self.push_move(1),
            Command::StopMove => {
                self.inputs.push_input(Side::Left, PaddleInput::Direction(0));
            }
            Command::TogglePause => {
                let action = match self.fsm.state() {
                    FsmState::Paused => GameAction::Resume,
                    _ => GameAction::Pause,
                };
                self.fsm.transition(action);
            }
            Command::Confirm => self.confirm(),
            Command::HarderDifficulty => {
                self.config.difficulty = self.config.difficulty.harder();
                log::info!("Difficulty: {}", self.config.difficulty.name());
            }
            Command::EasierDifficulty => {
                self.config.difficulty = self.config.difficulty.easier();
                log::info!("Difficulty: {}", self.config.difficulty.name());
            }
            Command::NextPalette => self.palette = self.palette.next(),
            Command::PrevPalette => self.palette = self.palette.prev(),
            Command::ToggleTournament => {
                self.tournament_mode = !self.tournament_mode;
                log::info!("Tournament mode: {}", self.tournament_mode);
                self.restart();
            }
            Command::ToggleSpectator => {
                self.spectator = !self.spectator;
                log::info!("Spectator mode: {}", self.spectator);
                self.set_left_controller();
                self.restart();
            }
            Command::ToggleTrail => self.trail_enabled = !self.trail_enabled,
            Command::Restart => self.restart(),
            Command::Quit => {
                if self.fsm.transition(GameAction::Quit).success {
                    self.reset_match();
                }
            }
        }
    }

    /// Pointer moved over the canvas; `y` is in canvas coordinates
    pub fn pointer_move(&mut self, y: f32) {
        if self.fsm.is_playing() && !self.spectator {
            self.inputs.push_input(Side::Left, PaddleInput::PointerY(y));
        }
    }

    fn push_move(&mut self, dir: i8) {
        if self.fsm.is_playing() && !self.spectator {
            self.inputs.push_input(Side::Left, PaddleInput::Direction(dir));
        }
    }

    fn confirm(&mut self) {
        match self.fsm.state() {
            FsmState::Idle => {
                self.reset_match();
                self.fsm.transition(GameAction::Start);
            }
            FsmState::Paused => {
                self.fsm.transition(GameAction::Resume);
            }
            FsmState::RoundOver => {
                self.reset_round();
                self.fsm.transition(GameAction::NextRound);
            }
            FsmState::GameOver => {
                self.reset_match();
                self.fsm.transition(GameAction::PlayAgain);
            }
            FsmState::Playing => {}
        }
    }

    /// Start the match over; on the title screen only the board is reset
    pub fn restart(&mut self) {
        self.reset_match();
        self.fsm.transition(GameAction::Restart);
    }

    fn set_left_controller(&mut self) {
        let controller = if self.spectator {
            Controller::Ai
        } else {
            Controller::Human
        };
        for (_e, (paddle, ctrl)) in self.world.query_mut::<(&Paddle, &mut Controller)>() {
            if paddle.side == Side::Left {
                *ctrl = controller;
            }
        }
    }

    fn reset_match(&mut self) {
        self.tournament.reset();
        self.last_winner = None;
        self.reset_round();
    }

    /// Fresh board for the next round: score, ball, paddles and power-ups
    fn reset_round(&mut self) {
        self.score.reset();
        self.events.clear();
        self.inputs.clear();

        let powerups: Vec<hecs::Entity> = self
            .world
            .query::<&PowerUp>()
            .iter()
            .map(|(e, _)| e)
            .collect();
        for entity in powerups {
            let _ = self.world.despawn(entity);
        }

        let effects: Vec<hecs::Entity> = self
            .world
            .query::<&PaddleEffect>()
            .iter()
            .map(|(e, _)| e)
            .collect();
        for entity in effects {
            let _ = self.world.remove_one::<PaddleEffect>(entity);
        }

        for (_e, (paddle, intent)) in self.world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
            paddle.y = self.map.paddle_spawn(paddle.side).y;
            *intent = PaddleIntent::new();
        }

        let center = self.map.ball_spawn();
        for (_e, (ball, trail)) in self.world.query_mut::<(&mut Ball, &mut Trail)>() {
            ball.reset(center, self.config.ball_speed_initial, &mut self.rng);
            trail.clear();
        }

        self.serve.start_delay(self.config.serve_delay);
        self.schedule = PowerUpSchedule::new(self.time.now + self.config.powerup_interval);
    }

    /// Snapshot the session for the renderer
    pub fn view(&self) -> FrameView {
        let palette = self.palette.get();

        let mut paddles = Vec::with_capacity(2);
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            let bounds = self.map.paddle_bounds(paddle.side, paddle.y);
            let color = match active_effect(&self.world, paddle.side) {
                Some(effect) if effect.kind == PowerUpKind::ColorShift => palette.powerup,
                _ => palette.paddle(paddle.side),
            };
            paddles.push(RectView {
                pos: bounds.min,
                size: bounds.max - bounds.min,
                color,
            });
        }

        let mut ball_view = None;
        let mut trail = Vec::new();
        for (_e, (ball, ball_trail)) in self.world.query::<(&Ball, &Trail)>().iter() {
            ball_view = Some(CircleView {
                center: ball.pos,
                radius: self.config.ball_radius,
                color: palette.ball,
                alpha: 1.0,
            });
            if self.trail_enabled {
                trail = trail_circles(
                    ball_trail.points.iter(),
                    self.config.ball_radius,
                    palette.ball,
                );
            }
        }

        let powerup = self
            .world
            .query::<&PowerUp>()
            .iter()
            .next()
            .map(|(_e, p)| CircleView {
                center: p.pos,
                radius: p.radius,
                color: palette.powerup,
                alpha: ((self.time.now - p.spawned_at) / POWERUP_FADE_IN)
                    .clamp(POWERUP_MIN_ALPHA, 1.0),
            });

        FrameView {
            width: self.map.width,
            height: self.map.height,
            palette,
            paddles,
            ball: ball_view,
            trail,
            powerup,
            score: [self.score.left, self.score.right],
            banner: self.banner(),
            footer: self.footer(),
        }
    }

    fn banner(&self) -> Option<Banner> {
        match self.fsm.state() {
            FsmState::Idle => Some(Banner::Title),
            FsmState::Playing => None,
            FsmState::Paused => Some(Banner::Paused),
            FsmState::RoundOver => self.last_winner.map(|winner| Banner::RoundOver {
                winner,
                next_round: self.tournament.round,
            }),
            FsmState::GameOver => self.last_winner.map(|winner| Banner::GameOver {
                winner: self.tournament.champion.unwrap_or(winner),
                tournament: self.tournament_mode,
            }),
        }
    }

    fn footer(&self) -> String {
        let mut footer = format!(
            "Difficulty: {}   Colors: {}",
            self.config.difficulty.name(),
            self.palette.get().name
        );
        if self.tournament_mode {
            footer.push_str(&format!(
                "   Round {}/{} ({}-{})",
                self.tournament.round,
                self.tournament.max_rounds(),
                self.tournament.wins(Side::Left),
                self.tournament.wins(Side::Right)
            ));
        }
        if self.spectator {
            footer.push_str("   SPECTATOR");
        }
        footer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> LocalGame {
        let mut game = LocalGame::new(7, Config::new());
        game.apply(Command::Confirm);
        assert_eq!(game.fsm.state(), FsmState::Playing);
        game
    }

    fn ball(game: &LocalGame) -> Ball {
        *game
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| b)
            .unwrap()
    }

    fn paddle_y(game: &LocalGame, side: Side) -> f32 {
        game.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap()
    }

    #[test]
    fn test_title_screen_does_not_simulate() {
        let mut game = LocalGame::new(7, Config::new());
        let before = ball(&game).pos;
        for _ in 0..120 {
            game.frame(Params::FIXED_DT);
        }
        assert_eq!(ball(&game).pos, before);
        assert_eq!(game.view().banner, Some(Banner::Title));
    }

    #[test]
    fn test_pause_freezes_the_world() {
        let mut game = playing();
        for _ in 0..90 {
            game.frame(Params::FIXED_DT);
        }
        game.apply(Command::TogglePause);
        let frozen = ball(&game).pos;
        let now = game.time.now;
        for _ in 0..60 {
            game.frame(Params::FIXED_DT);
        }
        assert_eq!(ball(&game).pos, frozen);
        assert_eq!(game.time.now, now);

        game.apply(Command::Confirm);
        game.frame(Params::FIXED_DT);
        assert_ne!(ball(&game).pos, frozen);
    }

    #[test]
    fn test_keyboard_moves_player_paddle() {
        let mut game = playing();
        let start = paddle_y(&game, Side::Left);
        game.apply(Command::MoveUp);
        for _ in 0..10 {
            game.frame(Params::FIXED_DT);
        }
        assert!(paddle_y(&game, Side::Left) < start);

        game.apply(Command::StopMove);
        game.frame(Params::FIXED_DT);
        let stopped = paddle_y(&game, Side::Left);
        game.frame(Params::FIXED_DT);
        assert_eq!(paddle_y(&game, Side::Left), stopped);
    }

    #[test]
    fn test_spectator_ignores_the_pointer() {
        let mut game = playing();
        game.apply(Command::ToggleSpectator);
        assert!(game.spectator);
        assert_eq!(game.fsm.state(), FsmState::Playing);
        game.pointer_move(0.0);
        assert!(game.inputs.inputs.is_empty());

        let controllers: Vec<Controller> = game
            .world
            .query::<&Controller>()
            .iter()
            .map(|(_e, c)| *c)
            .collect();
        assert!(controllers.iter().all(|c| *c == Controller::Ai));

        game.apply(Command::ToggleSpectator);
        game.pointer_move(100.0);
        assert_eq!(game.inputs.inputs.len(), 1);
    }

    #[test]
    fn test_match_ends_in_game_over() {
        let mut game = playing();
        game.score.left = game.config.win_score - 1;
        game.finish_round(Side::Left);
        assert_eq!(game.fsm.state(), FsmState::GameOver);
        assert_eq!(game.stats.matches_played, 1);
        assert_eq!(
            game.view().banner,
            Some(Banner::GameOver {
                winner: Side::Left,
                tournament: false
            })
        );

        game.apply(Command::Confirm);
        assert_eq!(game.fsm.state(), FsmState::Playing);
        assert_eq!(game.score, Score::new());
    }

    #[test]
    fn test_tournament_rounds_until_champion() {
        let mut game = playing();
        game.apply(Command::ToggleTournament);
        assert!(game.tournament_mode);

        game.finish_round(Side::Right);
        assert_eq!(game.fsm.state(), FsmState::RoundOver);
        assert!(game.view().footer.contains("Round 2/3 (0-1)"));
        assert_eq!(
            game.view().banner,
            Some(Banner::RoundOver {
                winner: Side::Right,
                next_round: 2
            })
        );

        game.score.right = 3;
        game.apply(Command::Confirm);
        assert_eq!(game.fsm.state(), FsmState::Playing);
        assert_eq!(game.score, Score::new(), "next round starts from zero");

        game.finish_round(Side::Right);
        assert_eq!(game.fsm.state(), FsmState::GameOver);
        assert_eq!(game.tournament.champion, Some(Side::Right));
        assert_eq!(game.stats.match_wins, [0, 1]);
    }

    #[test]
    fn test_quit_returns_to_title_with_a_clean_board() {
        let mut game = playing();
        game.score.left = 3;
        game.apply(Command::Quit);
        assert_eq!(game.fsm.state(), FsmState::Idle);
        assert_eq!(game.score, Score::new());
    }

    #[test]
    fn test_difficulty_and_palette_cycle() {
        let mut game = LocalGame::new(7, Config::new());
        game.apply(Command::HarderDifficulty);
        assert_eq!(game.config.difficulty, game_core::Difficulty::Hard);
        game.apply(Command::PrevPalette);
        assert_eq!(game.view().palette.name, "Sunset");
        assert!(game.view().footer.contains("Hard"));
    }

    #[test]
    fn test_view_draws_both_paddles_and_hides_trail_on_request() {
        let mut game = playing();
        for _ in 0..90 {
            game.frame(Params::FIXED_DT);
        }
        let view = game.view();
        assert_eq!(view.paddles.len(), 2);
        assert!(!view.trail.is_empty());
        assert!(view.ball.is_some());

        game.apply(Command::ToggleTrail);
        assert!(game.view().trail.is_empty());
    }

    fn paddle_entity(game: &LocalGame, side: Side) -> hecs::Entity {
        game.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(e, _p)| e)
            .unwrap()
    }

    #[test]
    fn test_color_shift_overrides_paddle_color() {
        let mut game = playing();
        let palette = game.palette.get();
        let left = paddle_entity(&game, Side::Left);
        game.world
            .insert_one(
                left,
                PaddleEffect {
                    kind: PowerUpKind::ColorShift,
                    expires_at: 100.0,
                },
            )
            .unwrap();

        let view = game.view();
        let left_rect = view.paddles.iter().find(|r| r.pos.x == 0.0).unwrap();
        let right_rect = view.paddles.iter().find(|r| r.pos.x > 0.0).unwrap();
        assert_eq!(left_rect.color, palette.powerup);
        assert_eq!(right_rect.color, palette.right_paddle);
    }

    #[test]
    fn test_speed_boost_keeps_palette_color() {
        let mut game = playing();
        let palette = game.palette.get();
        let left = paddle_entity(&game, Side::Left);
        game.world
            .insert_one(
                left,
                PaddleEffect {
                    kind: PowerUpKind::SpeedBoost,
                    expires_at: 100.0,
                },
            )
            .unwrap();

        let view = game.view();
        let left_rect = view.paddles.iter().find(|r| r.pos.x == 0.0).unwrap();
        assert_eq!(left_rect.color, palette.left_paddle);
    }

    #[test]
    fn test_fresh_powerup_fades_in() {
        let mut game = playing();
        game.time.now = 2.0;
        game.world.spawn((PowerUp {
            kind: PowerUpKind::SpeedBoost,
            pos: Vec2::new(400.0, 200.0),
            radius: 14.0,
            spawned_at: game.time.now,
        },));

        let powerup = game.view().powerup.unwrap();
        assert_eq!(powerup.alpha, POWERUP_MIN_ALPHA);
        assert_eq!(powerup.center, Vec2::new(400.0, 200.0));
        assert_eq!(powerup.color, game.palette.get().powerup);

        game.time.now += POWERUP_FADE_IN;
        assert_eq!(game.view().powerup.unwrap().alpha, 1.0);
    }
}
