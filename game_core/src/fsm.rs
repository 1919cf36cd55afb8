//! Game State Machine
//!
//! Title → Playing → GameOver → Playing ... driven by two actions.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Title,
    Playing,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Confirm key pressed on the title or game-over screen
    Start,
    /// Ball escaped past a paddle
    Score,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: State,
    pub to_state: State,
    pub action: Action,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: State,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: State::Title,
        }
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: Action) -> bool {
        next_state(self.state, action).is_some()
    }

    /// Attempt a transition; invalid actions leave the state untouched
    pub fn transition(&mut self, action: Action) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = next_state(from_state, action) {
            self.state = next_state;
            log::info!("{:?} --{:?}--> {:?}", from_state, action, next_state);
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

    pub fn is_playing(&self) -> bool {
        self.state == State::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == State::GameOver
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

/// Get next state for a given action (if valid)
pub fn next_state(state: State, action: Action) -> Option<State> {
    match (state, action) {
        (State::Title, Action::Start) => Some(State::Playing),
        (State::Playing, Action::Score) => Some(State::GameOver),
        (State::GameOver, Action::Start) => Some(State::Playing),

        // Invalid transition
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), State::Title);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(Action::Start);
        assert!(result.success);
        assert_eq!(result.from_state, State::Title);
        assert_eq!(result.to_state, State::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(Action::Score);
        assert!(!result.success);
        assert_eq!(result.to_state, State::Title);
        assert_eq!(fsm.state(), State::Title);
    }

    #[test]
    fn test_start_while_playing_is_rejected() {
        let mut fsm = GameFsm::new();
        fsm.transition(Action::Start);
        assert!(!fsm.can_transition(Action::Start), "No mid-game resets");
        assert!(!fsm.transition(Action::Start).success);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_game_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(Action::Start);
        fsm.transition(Action::Score);
        assert!(fsm.is_game_over());
        fsm.transition(Action::Start);
        assert_eq!(fsm.state(), State::Playing);
    }

    #[test]
    fn test_transition_table_is_exhaustive() {
        let states = [State::Title, State::Playing, State::GameOver];
        let actions = [Action::Start, Action::Score];
        let valid = [
            (State::Title, Action::Start, State::Playing),
            (State::Playing, Action::Score, State::GameOver),
            (State::GameOver, Action::Start, State::Playing),
        ];

        for state in states {
            for action in actions {
                let expected = valid
                    .iter()
                    .find(|(s, a, _)| *s == state && *a == action)
                    .map(|(_, _, to)| *to);
                assert_eq!(next_state(state, action), expected, "{:?} + {:?}", state, action);
            }
        }
    }
}
