use crate::components::Side;

/// Match score tracking
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
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `None` when no threshold is configured (endless match)
    pub fn has_winner(&self, win_threshold: Option<u8>) -> Option<Side> {
        let threshold = win_threshold?;
        if self.left >= threshold {
            Some(Side::Left)
        } else if self.right >= threshold {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub match_started: bool,
    pub match_finished: bool,
    pub winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Seeded random number generator for serve velocities
pub struct MatchRng(pub rand::rngs::StdRng);

impl MatchRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for MatchRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
        assert_eq!(score.get(Side::Left), 2);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..4 {
            score.increment(Side::Right);
        }
        assert_eq!(score.has_winner(Some(4)), Some(Side::Right));
        assert_eq!(score.has_winner(Some(5)), None, "No winner below threshold");
        assert_eq!(score.has_winner(None), None, "Endless match never has a winner");
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.ball_hit_wall = true;
        events.match_finished = true;
        events.winner = Some(Side::Left);

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.ball_hit_wall);
        assert!(!events.match_finished);
        assert!(events.winner.is_none());
    }

    #[test]
    fn test_rng_is_deterministic() {
        use rand::Rng;
        let mut a = MatchRng::new(99);
        let mut b = MatchRng::new(99);
        for _ in 0..16 {
            assert_eq!(a.0.gen_range(0..=5), b.0.gen_range(0..=5));
        }
    }
}
