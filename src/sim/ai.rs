//! Opponent paddle controller
//!
//! Tracks the ball with a dead-zone and a per-frame speed cap, so a fast or
//! sharply angled ball can beat it.

use super::geometry::{clamp_span, step_toward};
use super::state::{GameState, Paddle};
use crate::consts::{AI_DEAD_ZONE, AI_SPEED};

/// Move `paddle` one frame toward centering itself under `ball_x`
pub fn track(paddle: &mut Paddle, ball_x: f32, court_width: f32) {
    let target = ball_x - paddle.length / 2.0;
    let next = step_toward(paddle.position, target, AI_SPEED, AI_DEAD_ZONE);
    paddle.position = clamp_span(next, paddle.length, court_width);
}

/// Drive the opponent for this frame; inert outside Playing
pub fn drive_opponent(state: &mut GameState) {
    if !state.phase.is_playing() {
        return;
    }
    track(&mut state.opponent, state.ball.pos.x, state.court.width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Court, Phase, Role};

    #[test]
    fn test_tracks_monotonically_without_overshoot() {
        let court = Court::new(800.0, 500.0);
        let mut paddle = Paddle::centered(Role::Opponent, &court);
        paddle.set_position(0.0, court.width);
        let ball_x = 500.0;
        let target = ball_x - paddle.length / 2.0;

        let mut last = paddle.position;
        let mut frames = 0;
        while (paddle.position - target).abs() > AI_DEAD_ZONE {
            track(&mut paddle, ball_x, court.width);
            let moved = paddle.position - last;
            assert!(moved > 0.0 && moved <= AI_SPEED);
            assert!(paddle.position <= target);
            last = paddle.position;
            frames += 1;
            assert!(frames < 200);
        }

        // Inside the dead-zone it holds still
        track(&mut paddle, ball_x, court.width);
        assert_eq!(paddle.position, last);
    }

    #[test]
    fn test_track_clamps_to_court() {
        let court = Court::new(800.0, 500.0);
        let mut paddle = Paddle::centered(Role::Opponent, &court);
        paddle.set_position(800.0, court.width);
        track(&mut paddle, 799.0, court.width);
        assert_eq!(paddle.position, 800.0 - paddle.length);
    }

    #[test]
    fn test_inert_during_countdown() {
        let mut state = GameState::new(5, court(), 0.0);
        state.ball.pos.x = 20.0;
        let before = state.opponent.position;
        drive_opponent(&mut state);
        assert_eq!(state.opponent.position, before);

        state.phase = Phase::Playing;
        drive_opponent(&mut state);
        assert_eq!(state.opponent.position, before - AI_SPEED);
    }

    fn court() -> Court {
        Court::new(800.0, 500.0)
    }
}
