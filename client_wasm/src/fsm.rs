//! Game State Machine
//!
//! Tracks which screen the game is on: title menu, live play, pause,
//! between tournament rounds, and game over.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Idle,
    Playing,
    Paused,
    RoundOver,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Pause,
    Resume,
    RoundWon,
    MatchWon,
    NextRound,
    PlayAgain,
    Restart,
    Quit,
}

impl GameAction {
    /// Parse the upper-snake name used by page scripts
    pub fn from_name(name: &str) -> Option<Self> {
        let action = match name {
            "START" => GameAction::Start,
            "PAUSE" => GameAction::Pause,
            "RESUME" => GameAction::Resume,
            "ROUND_WON" => GameAction::RoundWon,
            "MATCH_WON" => GameAction::MatchWon,
            "NEXT_ROUND" => GameAction::NextRound,
            "PLAY_AGAIN" => GameAction::PlayAgain,
            "RESTART" => GameAction::Restart,
            "QUIT" => GameAction::Quit,
            _ => return None,
        };
        Some(action)
    }
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Idle,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::debug!("{:?} --{:?}--> {:?}", from_state, action, next_state);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Transition using action string (for easier JS interop)
    pub fn transition_str(&mut self, action: &str) -> Option<TransitionResult> {
        GameAction::from_name(action).map(|action| self.transition(action))
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            // From Idle
            (FsmState::Idle, GameAction::Start) => Some(FsmState::Playing),

            // From Playing
            (FsmState::Playing, GameAction::Pause) => Some(FsmState::Paused),
            (FsmState::Playing, GameAction::RoundWon) => Some(FsmState::RoundOver),
            (FsmState::Playing, GameAction::MatchWon) => Some(FsmState::GameOver),

            // From Paused
            (FsmState::Paused, GameAction::Resume) => Some(FsmState::Playing),

            // From RoundOver
            (FsmState::RoundOver, GameAction::NextRound) => Some(FsmState::Playing),

            // From GameOver
            (FsmState::GameOver, GameAction::PlayAgain) => Some(FsmState::Playing),

            // Anywhere but the title screen
            (FsmState::Idle, GameAction::Restart | GameAction::Quit) => None,
            (_, GameAction::Restart) => Some(FsmState::Playing),
            (_, GameAction::Quit) => Some(FsmState::Idle),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if the simulation should advance
    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }

    /// Title or game-over screen, where menu keys apply
    pub fn in_menu(&self) -> bool {
        matches!(self.state, FsmState::Idle | FsmState::GameOver)
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), FsmState::Idle);
        assert!(fsm.in_menu());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, FsmState::Idle);
        assert_eq!(fsm.state(), FsmState::Playing);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::MatchWon);
        assert!(!result.success);
        assert_eq!(result.to_state, FsmState::Idle);
        assert_eq!(fsm.state(), FsmState::Idle);
        assert!(!fsm.can_transition(GameAction::Pause));
        assert!(!fsm.can_transition(GameAction::Quit));
    }

    #[test]
    fn test_pause_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::Pause);
        assert_eq!(fsm.state(), FsmState::Paused);
        assert!(!fsm.is_playing());
        assert!(!fsm.transition(GameAction::Pause).success);
        fsm.transition(GameAction::Resume);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_tournament_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::RoundWon);
        assert_eq!(fsm.state(), FsmState::RoundOver);
        fsm.transition(GameAction::NextRound);
        assert_eq!(fsm.state(), FsmState::Playing);
        fsm.transition(GameAction::MatchWon);
        assert_eq!(fsm.state(), FsmState::GameOver);
        fsm.transition(GameAction::PlayAgain);
        assert_eq!(fsm.state(), FsmState::Playing);
    }

    #[test]
    fn test_restart_and_quit_from_anywhere_in_game() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::Pause);
        fsm.transition(GameAction::Restart);
        assert_eq!(fsm.state(), FsmState::Playing);
        fsm.transition(GameAction::Quit);
        assert_eq!(fsm.state(), FsmState::Idle);
    }

    #[test]
    fn test_transition_str() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition_str("START").unwrap();
        assert!(result.success);
        assert_eq!(fsm.state(), FsmState::Playing);
        assert!(fsm.transition_str("JUMP").is_none());
    }
}
