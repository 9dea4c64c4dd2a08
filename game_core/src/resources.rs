use crate::{PowerUpKind, Side};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32, // Delta time for this step
    pub now: f32, // Total elapsed simulation time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        use rand::Rng;
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }

    pub fn gen_bool(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Scored(Side),
    PaddleHit { side: Side, speed: f32 },
    WallBounce,
    PowerUpSpawned(PowerUpKind),
    PowerUpCollected {
        side: Option<Side>,
        kind: PowerUpKind,
    },
    PowerUpExpired { side: Side, kind: PowerUpKind },
    MatchPoint(Side),
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.list.iter()
    }

    pub fn scored(&self, side: Side) -> bool {
        self.list.contains(&GameEvent::Scored(side))
    }

    pub fn paddle_hits(&self) -> usize {
        self.list
            .iter()
            .filter(|e| matches!(e, GameEvent::PaddleHit { .. }))
            .count()
    }

    pub fn hit_wall(&self) -> bool {
        self.list.contains(&GameEvent::WallBounce)
    }

    pub fn match_point(&self) -> Option<Side> {
        self.list.iter().find_map(|e| match e {
            GameEvent::MatchPoint(side) => Some(*side),
            _ => None,
        })
    }
}

/// Serve delay after a point is scored
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeState {
    pub timer: f32, // Time remaining before the ball moves again
}

impl ServeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_delay(&mut self, delay: f32) {
        self.timer = delay;
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.timer <= 0.0
    }
}

/// A paddle command sampled from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleInput {
    /// Keyboard direction: -1 up, 0 stop, 1 down
    Direction(i8),
    /// Pointer y in canvas coordinates
    PointerY(f32),
}

/// Pending inputs for the next step
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, PaddleInput)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, side: Side, input: PaddleInput) {
        self.inputs.push((side, input));
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, (Side, PaddleInput)> {
        self.inputs.drain(..)
    }
}

/// When the next power-up regeneration happens
#[derive(Debug, Clone, Copy)]
pub struct PowerUpSchedule {
    pub next_at: f32,
}

impl PowerUpSchedule {
    pub fn new(interval: f32) -> Self {
        Self { next_at: interval }
    }

    pub fn is_due(&self, now: f32) -> bool {
        now >= self.next_at
    }

    /// Move to the first boundary after `now`, skipping any missed ones
    pub fn advance(&mut self, now: f32, interval: f32) {
        if self.next_at <= now {
            let missed = ((now - self.next_at) / interval).floor() + 1.0;
            self.next_at += missed * interval;
        }
    }
}
