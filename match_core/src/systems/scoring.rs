use crate::components::{Ball, Side};
use crate::config::Config;
use crate::resources::{Events, MatchRng, Score};

/// Check whether the ball crossed a goal line. Increments the scorer and
/// serves a fresh ball unless the point decides the match, in which case the
/// ball stays where it died. Returns the scorer when the rally ended.
pub fn check_scoring(
    ball: &mut Ball,
    score: &mut Score,
    config: &Config,
    events: &mut Events,
    rng: &mut MatchRng,
) -> Option<Side> {
    let goal = config.goal_line();
    let scorer = if ball.pos.x >= goal {
        Side::Left
    } else if ball.pos.x <= -goal {
        Side::Right
    } else {
        return None;
    };

    score.increment(scorer);
    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }

    if score.has_winner(config.win_threshold).is_none() {
        ball.serve(config, rng);
    }
    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Config, Score, Events, MatchRng) {
        (Config::new(), Score::new(), Events::new(), MatchRng::new(12345))
    }

    #[test]
    fn test_left_player_scores_at_right_goal_line() {
        // field 800x600, ball 20x20: goal line at 400 - 10 = 390
        let (config, mut score, mut events, mut rng) = setup();
        let mut ball = Ball::new(&config);
        ball.pos = Vec2::new(395.0, 0.0);
        ball.vel = Vec2::new(4.0, 0.0);

        let scorer = check_scoring(&mut ball, &mut score, &config, &mut events, &mut rng);

        assert_eq!(scorer, Some(Side::Left));
        assert_eq!(score.left, 1);
        assert_eq!(score.right, 0);
        assert!(events.left_scored);
        assert_eq!(ball.pos, Vec2::ZERO, "Ball resets to exactly (0, 0)");
        assert!(ball.vel.x != 0.0, "Fresh serve has a live horizontal component");
    }

    #[test]
    fn test_right_player_scores_at_left_goal_line() {
        let (config, mut score, mut events, mut rng) = setup();
        let mut ball = Ball::new(&config);
        ball.pos = Vec2::new(-390.0, 12.0);
        ball.vel = Vec2::new(-4.0, 0.0);

        let scorer = check_scoring(&mut ball, &mut score, &config, &mut events, &mut rng);

        assert_eq!(scorer, Some(Side::Right));
        assert_eq!(score.right, 1);
        assert!(events.right_scored);
        assert_eq!(ball.pos, Vec2::ZERO);
    }

    #[test]
    fn test_no_score_inside_the_field() {
        let (config, mut score, mut events, mut rng) = setup();
        let mut ball = Ball::new(&config);
        ball.pos = Vec2::new(389.9, 0.0);

        let scorer = check_scoring(&mut ball, &mut score, &config, &mut events, &mut rng);

        assert_eq!(scorer, None);
        assert_eq!(score, Score::new());
        assert!(!events.left_scored && !events.right_scored);
    }

    #[test]
    fn test_deciding_point_leaves_ball_in_place() {
        let (config, mut score, mut events, mut rng) = setup();
        for _ in 0..3 {
            score.increment(Side::Left);
        }
        let mut ball = Ball::new(&config);
        ball.pos = Vec2::new(395.0, -7.0);

        check_scoring(&mut ball, &mut score, &config, &mut events, &mut rng);

        assert_eq!(score.left, 4);
        assert_eq!(score.has_winner(config.win_threshold), Some(Side::Left));
        assert_eq!(
            ball.pos,
            Vec2::new(395.0, -7.0),
            "No serve on the deciding point"
        );
    }

    #[test]
    fn test_endless_profile_always_serves() {
        let (_, mut score, mut events, mut rng) = setup();
        let config = Config::endless();
        let mut ball = Ball::new(&config);

        for expected in 1..=10u8 {
            ball.pos = Vec2::new(395.0, 0.0);
            check_scoring(&mut ball, &mut score, &config, &mut events, &mut rng);
            assert_eq!(score.left, expected, "Scores accumulate past 4");
            assert_eq!(ball.pos, Vec2::ZERO);
            assert_eq!(ball.vel, config.serve_velocity, "Fixed serve policy");
        }
    }
}
