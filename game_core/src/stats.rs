use serde::Serialize;

use crate::{Events, GameEvent, Side};

/// Running statistics for the session
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchStats {
    pub points: [u32; 2],
    pub paddle_hits: u32,
    pub wall_bounces: u32,
    pub current_rally: u32,
    pub longest_rally: u32,
    pub rallies: u32,
    pub powerups_collected: [u32; 2],
    pub top_ball_speed: f32,
    pub play_time: f32,
    pub matches_played: u32,
    pub match_wins: [u32; 2],
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one frame's events into the totals
    pub fn record(&mut self, events: &Events, dt: f32) {
        self.play_time += dt;

        for event in events.iter() {
            match *event {
                GameEvent::PaddleHit { speed, .. } => {
                    self.paddle_hits += 1;
                    self.current_rally += 1;
                    self.longest_rally = self.longest_rally.max(self.current_rally);
                    self.top_ball_speed = self.top_ball_speed.max(speed);
                }
                GameEvent::WallBounce => self.wall_bounces += 1,
                GameEvent::Scored(side) => {
                    self.points[side.index()] += 1;
                    self.rallies += 1;
                    self.current_rally = 0;
                }
                GameEvent::PowerUpCollected {
                    side: Some(side), ..
                } => self.powerups_collected[side.index()] += 1,
                _ => {}
            }
        }
    }

    pub fn record_match(&mut self, winner: Side) {
        self.matches_played += 1;
        self.match_wins[winner.index()] += 1;
    }

    /// Mean paddle hits per completed rally
    pub fn average_rally(&self) -> f32 {
        if self.rallies == 0 {
            0.0
        } else {
            self.paddle_hits as f32 / self.rallies as f32
        }
    }

    /// Totals plus the derived average rally, as a JSON object
    pub fn to_json(&self) -> String {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        if let Some(fields) = value.as_object_mut() {
            fields.insert("average_rally".to_string(), self.average_rally().into());
        }
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PowerUpKind;

    fn hit(side: Side, speed: f32) -> GameEvent {
        GameEvent::PaddleHit { side, speed }
    }

    #[test]
    fn test_rally_tracking() {
        let mut stats = MatchStats::new();
        let mut events = Events::new();
        events.push(hit(Side::Left, 270.0));
        events.push(hit(Side::Right, 300.0));
        events.push(hit(Side::Left, 330.0));
        stats.record(&events, 0.5);

        assert_eq!(stats.current_rally, 3);
        assert_eq!(stats.longest_rally, 3);
        assert_eq!(stats.top_ball_speed, 330.0);

        events.clear();
        events.push(GameEvent::Scored(Side::Left));
        events.push(hit(Side::Left, 270.0));
        stats.record(&events, 0.5);

        assert_eq!(stats.points, [1, 0]);
        assert_eq!(stats.rallies, 1);
        assert_eq!(stats.current_rally, 1);
        assert_eq!(stats.longest_rally, 3);
        assert_eq!(stats.play_time, 1.0);
    }

    #[test]
    fn test_powerups_and_walls() {
        let mut stats = MatchStats::new();
        let mut events = Events::new();
        events.push(GameEvent::WallBounce);
        events.push(GameEvent::PowerUpCollected {
            side: Some(Side::Right),
            kind: PowerUpKind::SpeedBoost,
        });
        events.push(GameEvent::PowerUpCollected {
            side: None,
            kind: PowerUpKind::ColorShift,
        });
        stats.record(&events, 0.0);

        assert_eq!(stats.wall_bounces, 1);
        assert_eq!(stats.powerups_collected, [0, 1]);
    }

    #[test]
    fn test_average_rally_and_json() {
        let mut stats = MatchStats::new();
        assert_eq!(stats.average_rally(), 0.0);
        stats.paddle_hits = 9;
        stats.rallies = 3;
        stats.record_match(Side::Right);
        assert_eq!(stats.average_rally(), 3.0);

        let json: serde_json::Value = serde_json::from_str(&stats.to_json()).unwrap();
        assert_eq!(json["paddle_hits"], 9);
        assert_eq!(json["match_wins"][1], 1);
        assert_eq!(json["average_rally"], 3.0);
    }
}
