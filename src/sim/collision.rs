//! Ball integration, collision response and miss detection
//!
//! One explicit Euler step per frame, no sub-stepping. Side walls are perfectly
//! elastic; paddle hits speed the ball up and steer it by where it landed.

use super::geometry::{deflect, relative_offset};
use super::state::{Ball, Court, Paddle, Role};
use crate::consts::*;

/// Contacts recorded during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub wall: bool,
    pub opponent_paddle: bool,
    pub player_paddle: bool,
}

impl Contacts {
    pub fn any_paddle(&self) -> bool {
        self.opponent_paddle || self.player_paddle
    }
}

/// Advance the ball by one frame of velocity
#[inline]
pub fn integrate(ball: &mut Ball) {
    ball.pos += ball.vel;
}

/// Keep the ball inside the side walls, reflecting its horizontal velocity
///
/// Returns true if a wall was hit.
pub fn resolve_side_walls(ball: &mut Ball, court_width: f32) -> bool {
    let r = ball.radius;
    if ball.pos.x < r {
        ball.pos.x = r;
        ball.vel.x = ball.vel.x.abs();
        true
    } else if ball.pos.x > court_width - r {
        ball.pos.x = court_width - r;
        ball.vel.x = -ball.vel.x.abs();
        true
    } else {
        false
    }
}

/// Bounce the ball off `paddle` if it has reached the paddle's front face
///
/// A hit needs all three: the ball's leading edge at or past the face, its
/// center within the paddle's horizontal span, and vertical motion toward the
/// paddle. Returns true on a hit.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, court: &Court) -> bool {
    let rect = paddle.rect(court);
    if !rect.spans_x(ball.pos.x) {
        return false;
    }

    match paddle.role {
        Role::Opponent => {
            let face = rect.bottom();
            if ball.vel.y >= 0.0 || ball.pos.y - ball.radius > face {
                return false;
            }
            ball.pos.y = face + ball.radius;
            ball.vel.y = ball.vel.y.abs() * PADDLE_SPEEDUP;
        }
        Role::Player => {
            let face = rect.y;
            if ball.vel.y <= 0.0 || ball.pos.y + ball.radius < face {
                return false;
            }
            ball.pos.y = face - ball.radius;
            ball.vel.y = -ball.vel.y.abs() * PADDLE_SPEEDUP;
        }
    }

    let offset = relative_offset(ball.pos.x, &rect);
    ball.vel.x = deflect(ball.vel.x, offset, DEFLECTION_GAIN, MAX_HORIZONTAL_SPEED);
    true
}

/// Who scores if the ball has escaped past an end edge
///
/// The leading edge must be more than `SCORE_MARGIN` beyond the edge.
pub fn missed_ball(ball: &Ball, court: &Court) -> Option<Role> {
    if ball.pos.y - ball.radius < -SCORE_MARGIN {
        Some(Role::Player)
    } else if ball.pos.y + ball.radius > court.height + SCORE_MARGIN {
        Some(Role::Opponent)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn court() -> Court {
        Court::new(800.0, 500.0)
    }

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(x, y));
        ball.vel = Vec2::new(vx, vy);
        ball
    }

    #[test]
    fn test_side_wall_reflects_horizontal_only() {
        let mut ball = ball_at(3.0, 200.0, -4.0, 2.5);
        assert!(resolve_side_walls(&mut ball, 800.0));
        assert_eq!(ball.pos.x, BALL_RADIUS);
        assert_eq!(ball.vel, Vec2::new(4.0, 2.5));

        let mut ball = ball_at(799.0, 200.0, 4.0, -2.5);
        assert!(resolve_side_walls(&mut ball, 800.0));
        assert_eq!(ball.pos.x, 800.0 - BALL_RADIUS);
        assert_eq!(ball.vel, Vec2::new(-4.0, -2.5));

        let mut ball = ball_at(400.0, 200.0, 4.0, 2.5);
        assert!(!resolve_side_walls(&mut ball, 800.0));
    }

    #[test]
    fn test_player_paddle_bounce() {
        let court = court();
        let paddle = Paddle::centered(Role::Player, &court);
        let face = paddle.rect(&court).y;
        let mut ball = ball_at(paddle.center(), face - 2.0, 1.0, 6.0);

        assert!(resolve_paddle(&mut ball, &paddle, &court));
        assert_eq!(ball.pos.y, face - BALL_RADIUS);
        assert!((ball.vel.y - (-6.0 * PADDLE_SPEEDUP)).abs() < 1e-5);
        // Dead center leaves horizontal speed untouched
        assert_eq!(ball.vel.x, 1.0);
    }

    #[test]
    fn test_opponent_paddle_bounce_deflects_and_clamps() {
        let court = court();
        let paddle = Paddle::centered(Role::Opponent, &court);
        let rect = paddle.rect(&court);
        let mut ball = ball_at(rect.right(), rect.bottom() + 3.0, 7.0, -9.0);

        assert!(resolve_paddle(&mut ball, &paddle, &court));
        assert_eq!(ball.pos.y, rect.bottom() + BALL_RADIUS);
        assert!((ball.vel.y - 9.0 * PADDLE_SPEEDUP).abs() < 1e-5);
        // 7 + 1.0 * 3 = 10, clamped
        assert_eq!(ball.vel.x, MAX_HORIZONTAL_SPEED);
    }

    #[test]
    fn test_no_bounce_when_moving_away_or_outside_span() {
        let court = court();
        let paddle = Paddle::centered(Role::Player, &court);
        let face = paddle.rect(&court).y;

        let mut away = ball_at(paddle.center(), face, 0.0, -6.0);
        assert!(!resolve_paddle(&mut away, &paddle, &court));

        let mut wide = ball_at(paddle.position - 1.0, face, 0.0, 6.0);
        assert!(!resolve_paddle(&mut wide, &paddle, &court));

        let mut short = ball_at(paddle.center(), face - BALL_RADIUS - 1.0, 0.0, 6.0);
        assert!(!resolve_paddle(&mut short, &paddle, &court));
    }

    #[test]
    fn test_ball_past_face_still_bounces() {
        let court = court();
        let paddle = Paddle::centered(Role::Player, &court);
        let rect = paddle.rect(&court);
        // Fully behind the paddle after a fast frame, no box overlap left
        let mut ball = ball_at(paddle.center(), rect.bottom() + BALL_RADIUS + 2.0, 0.0, 12.0);

        assert!(resolve_paddle(&mut ball, &paddle, &court));
        assert_eq!(ball.pos.y, rect.y - BALL_RADIUS);
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_missed_ball_margin() {
        let court = court();
        let r = BALL_RADIUS;
        assert_eq!(missed_ball(&ball_at(400.0, -SCORE_MARGIN + r, 0.0, -6.0), &court), None);
        assert_eq!(
            missed_ball(&ball_at(400.0, -SCORE_MARGIN + r - 0.5, 0.0, -6.0), &court),
            Some(Role::Player)
        );
        assert_eq!(
            missed_ball(&ball_at(400.0, 500.0 + SCORE_MARGIN - r, 0.0, 6.0), &court),
            None
        );
        assert_eq!(
            missed_ball(&ball_at(400.0, 500.0 + SCORE_MARGIN - r + 0.5, 0.0, 6.0), &court),
            Some(Role::Opponent)
        );
    }

    #[test]
    fn test_integrate() {
        let mut ball = ball_at(10.0, 10.0, 2.0, -3.0);
        integrate(&mut ball);
        assert_eq!(ball.pos, Vec2::new(12.0, 7.0));
    }
}
