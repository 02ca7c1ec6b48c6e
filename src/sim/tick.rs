//! Per-frame simulation step
//!
//! Order within a frame: player intents, AI, ball integration, wall and paddle
//! resolution, then scoring. Time-driven phase changes (countdown expiry,
//! banner timeout) belong to the session; this step only ends the match on score.

use super::ai;
use super::collision::{self, Contacts};
use super::input::{Intents, apply_intents};
use super::state::{GameState, Outcome, Phase, Role, ServeDirection};
use crate::consts::WIN_SCORE;

/// What happened during one frame step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameEvents {
    pub contacts: Contacts,
    /// Side that won a point this frame
    pub point: Option<Role>,
    /// Set on the frame the match ended
    pub ended: Option<Outcome>,
}

/// Advance the match by one frame at wall-clock `now` (ms)
///
/// Does nothing once the match has ended.
pub fn tick(state: &mut GameState, intents: &mut Intents, now: f64) -> FrameEvents {
    let mut events = FrameEvents::default();
    if !state.phase.is_live() {
        return events;
    }
    state.frame += 1;

    apply_intents(state, intents);
    ai::drive_opponent(state);

    let playing = state.phase.is_playing();
    if playing {
        collision::integrate(&mut state.ball);
    }

    events.contacts.wall = collision::resolve_side_walls(&mut state.ball, state.court.width);
    events.contacts.opponent_paddle =
        collision::resolve_paddle(&mut state.ball, &state.opponent, &state.court);
    events.contacts.player_paddle =
        collision::resolve_paddle(&mut state.ball, &state.player, &state.court);

    if !playing || events.contacts.any_paddle() {
        return events;
    }

    if let Some(scorer) = collision::missed_ball(&state.ball, &state.court) {
        events.point = Some(scorer);
        events.ended = award_point(state, scorer, now);
    }

    events
}

/// Credit `scorer` and either re-serve or end the match
fn award_point(state: &mut GameState, scorer: Role, now: f64) -> Option<Outcome> {
    let total = state.score.award(scorer);
    log::debug!(
        "{:?} scored ({} - {})",
        scorer,
        state.score.opponent,
        state.score.player
    );

    if total >= WIN_SCORE {
        let outcome = match scorer {
            Role::Player => Outcome::Win,
            Role::Opponent => Outcome::Lose,
        };
        state.phase = Phase::Ended {
            outcome,
            since: now,
        };
        return Some(outcome);
    }

    state.reset_paddles();
    state.reset_ball(ServeDirection::toward(scorer));
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Court;
    use glam::Vec2;

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Court::new(800.0, 500.0), 0.0);
        state.phase = Phase::Playing;
        state
    }

    #[test]
    fn test_countdown_freezes_ball() {
        let mut state = GameState::new(1, Court::new(800.0, 500.0), 0.0);
        let ball = state.ball.clone();
        let mut intents = Intents::new();
        for i in 0..10 {
            tick(&mut state, &mut intents, i as f64 * 16.0);
        }
        assert_eq!(state.ball, ball);
        assert_eq!(state.frame, 10);
    }

    #[test]
    fn test_ball_moves_while_playing() {
        let mut state = playing(1);
        let start = state.ball.pos;
        let vel = state.ball.vel;
        tick(&mut state, &mut Intents::new(), 0.0);
        assert_eq!(state.ball.pos, start + vel);
    }

    #[test]
    fn test_player_scores_and_serves_toward_player() {
        let mut state = playing(2);
        state.ball.pos = Vec2::new(5.0, -3.0);
        state.ball.vel = Vec2::new(0.0, -6.0);
        state.opponent.set_position(600.0, 800.0);

        let events = tick(&mut state, &mut Intents::new(), 0.0);
        assert_eq!(events.point, Some(Role::Player));
        assert_eq!(events.ended, None);
        assert_eq!(state.score.player, 1);
        assert_eq!(state.ball.pos, state.court.center());
        assert!(state.ball.vel.y > 0.0);
        assert_eq!(state.opponent.position, (800.0 - state.opponent.length) / 2.0);
    }

    #[test]
    fn test_paddle_contact_blocks_point() {
        let mut state = playing(2);
        let rect = state.player.rect(&state.court);
        state.ball.pos = Vec2::new(state.player.center(), rect.y);
        state.ball.vel = Vec2::new(0.0, 6.0);

        let events = tick(&mut state, &mut Intents::new(), 0.0);
        assert!(events.contacts.player_paddle);
        assert_eq!(events.point, None);
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_winning_point_ends_match() {
        let mut state = playing(4);
        state.score.player = 4;
        state.ball.pos = Vec2::new(5.0, -3.0);
        state.ball.vel = Vec2::new(0.0, -6.0);
        state.opponent.set_position(600.0, 800.0);

        let events = tick(&mut state, &mut Intents::new(), 1234.0);
        assert_eq!(events.ended, Some(Outcome::Win));
        assert_eq!(
            state.phase,
            Phase::Ended {
                outcome: Outcome::Win,
                since: 1234.0
            }
        );

        // Frozen afterwards
        let frozen = serde_json::to_string(&state).unwrap();
        let events = tick(&mut state, &mut Intents::new(), 1250.0);
        assert_eq!(events, FrameEvents::default());
        assert_eq!(serde_json::to_string(&state).unwrap(), frozen);
    }

    #[test]
    fn test_determinism() {
        let mut a = playing(99_999);
        let mut b = playing(99_999);
        let mut intents_a = Intents::new();
        let mut intents_b = Intents::new();

        for frame in 0..2_000 {
            if frame % 37 == 0 {
                let x = (frame * 13 % 800) as f32;
                intents_a.pointer_at(x);
                intents_b.pointer_at(x);
            }
            let now = frame as f64 * 16.0;
            tick(&mut a, &mut intents_a, now);
            tick(&mut b, &mut intents_b, now);
        }

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
