//! Match phase state machine

/// Discrete state of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Active,
    Finished,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    /// Confirm key newly held this frame
    Confirm,
    /// A score reached the win threshold
    WinReached,
}

impl Phase {
    /// Get next phase for a given action (if valid)
    pub fn next(self, action: MatchAction) -> Option<Phase> {
        match (self, action) {
            (Phase::NotStarted, MatchAction::Confirm) => Some(Phase::Active),
            (Phase::Active, MatchAction::WinReached) => Some(Phase::Finished),
            (Phase::Finished, MatchAction::Confirm) => Some(Phase::Active),

            // Invalid transition
            _ => None,
        }
    }

    pub fn can_transition(self, action: MatchAction) -> bool {
        self.next(action).is_some()
    }

    pub fn is_active(self) -> bool {
        matches!(self, Phase::Active)
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Phase::Finished)
    }
}
