//! Multi-round play: a round is one match to `win_score`, the tournament
//! goes to whoever first takes `rounds_to_win` rounds.

use serde::Serialize;

use crate::Side;

/// What a finished round means for the tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Keep playing; the next round number is given
    NextRound(u8),
    Champion(Side),
}

#[derive(Debug, Clone, Serialize)]
pub struct Tournament {
    pub rounds_to_win: u8,
    pub round: u8,
    pub wins: [u8; 2],
    pub champion: Option<Side>,
}

impl Tournament {
    pub fn new(rounds_to_win: u8) -> Self {
        Self {
            rounds_to_win: rounds_to_win.max(1),
            round: 1,
            wins: [0; 2],
            champion: None,
        }
    }

    /// Record the winner of the current round
    pub fn record_round(&mut self, winner: Side) -> RoundOutcome {
        if let Some(champion) = self.champion {
            return RoundOutcome::Champion(champion);
        }

        let wins = &mut self.wins[winner.index()];
        *wins = wins.saturating_add(1);

        if *wins >= self.rounds_to_win {
            self.champion = Some(winner);
            log::info!(
                "{} wins the tournament after {} rounds",
                winner.name(),
                self.round
            );
            RoundOutcome::Champion(winner)
        } else {
            self.round = self.round.saturating_add(1);
            RoundOutcome::NextRound(self.round)
        }
    }

    pub fn wins(&self, side: Side) -> u8 {
        self.wins[side.index()]
    }

    /// Maximum number of rounds the tournament can last
    pub fn max_rounds(&self) -> u8 {
        self.rounds_to_win.saturating_mul(2).saturating_sub(1)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.rounds_to_win);
    }
}
