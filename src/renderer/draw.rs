//! Frame painter
//!
//! Stateless: everything comes from the game state, the clock and the theme.

use super::surface::{Surface, TextAlign, TextBaseline, TextStyle};
use super::theme::Theme;
use crate::sim::{GameState, Outcome, Phase};

const COUNTDOWN_SCRIM: &str = "rgba(0,0,0,0.35)";
const GAME_OVER_SCRIM: &str = "rgba(0,0,0,0.45)";
const DIVIDER_DASH: [f32; 2] = [6.0, 8.0];
const DIVIDER_MARGIN: f32 = 10.0;

/// Font size scaled to the court width with a floor
fn font_px(width: f32, ratio: f32, min: f32) -> f32 {
    (width * ratio).round().max(min)
}

/// Countdown label for the time left: whole seconds rounded up, or "GO"
pub fn countdown_label(until: f64, now: f64) -> String {
    let secs = ((until - now).max(0.0) / 1000.0).ceil() as u32;
    if secs > 0 {
        secs.to_string()
    } else {
        "GO".to_string()
    }
}

/// Paint whatever the current phase calls for
///
/// Live phases get a full frame. An ended match only gets its banner laid over
/// the last frame; a stopped one gets nothing.
pub fn render(state: &GameState, now: f64, theme: &Theme, surface: &mut impl Surface) {
    match state.phase {
        Phase::Countdown { .. } | Phase::Playing => draw_frame(state, now, theme, surface),
        Phase::Ended { outcome, .. } => draw_game_over(outcome, theme, surface),
        Phase::Stopped => {}
    }
}

/// Court, paddles, ball, scores and the countdown overlay
pub fn draw_frame(state: &GameState, now: f64, theme: &Theme, surface: &mut impl Surface) {
    let court = &state.court;
    let (w, h) = (court.width, court.height);

    surface.fill_rect(0.0, 0.0, w, h, &theme.background);
    surface.stroke_dashed_line(
        (DIVIDER_MARGIN, h / 2.0),
        (w - DIVIDER_MARGIN, h / 2.0),
        DIVIDER_DASH,
        &theme.border,
    );

    for paddle in [&state.opponent, &state.player] {
        let rect = paddle.rect(court);
        surface.fill_rect(rect.x, rect.y, rect.w, rect.h, &theme.foreground);
    }

    let ball = &state.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, &theme.accent);

    let score_style = TextStyle {
        color: &theme.foreground,
        font_px: font_px(w, 0.05, 16.0),
        align: TextAlign::Center,
        baseline: TextBaseline::Alphabetic,
    };
    surface.fill_text(
        &state.score.opponent.to_string(),
        w / 2.0,
        (h * 0.22).round(),
        &score_style,
    );
    surface.fill_text(
        &state.score.player.to_string(),
        w / 2.0,
        (h * 0.78).round(),
        &score_style,
    );

    if let Phase::Countdown { until } = state.phase {
        surface.fill_rect(0.0, 0.0, w, h, COUNTDOWN_SCRIM);
        let style = TextStyle {
            color: &theme.foreground,
            font_px: font_px(w, 0.18, 28.0),
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        };
        surface.fill_text(&countdown_label(until, now), w / 2.0, h / 2.0, &style);
    }
}

/// Translucent scrim with the outcome message, drawn once over the last frame
pub fn draw_game_over(outcome: Outcome, theme: &Theme, surface: &mut impl Surface) {
    let (w, h) = surface.size();
    surface.fill_rect(0.0, 0.0, w, h, GAME_OVER_SCRIM);
    let style = TextStyle {
        color: &theme.foreground,
        font_px: font_px(w, 0.1, 28.0),
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
    };
    surface.fill_text(outcome.message(), w / 2.0, h / 2.0, &style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{DrawCommand, RecordingSurface};
    use crate::sim::Court;

    fn surface() -> RecordingSurface {
        RecordingSurface::new(800.0, 500.0)
    }

    #[test]
    fn test_countdown_label() {
        assert_eq!(countdown_label(3000.0, 0.0), "3");
        assert_eq!(countdown_label(3000.0, 1.0), "3");
        assert_eq!(countdown_label(3000.0, 2000.0), "1");
        assert_eq!(countdown_label(3000.0, 2999.0), "1");
        assert_eq!(countdown_label(3000.0, 3000.0), "GO");
    }

    #[test]
    fn test_draw_order_while_playing() {
        let mut state = GameState::new(1, Court::new(800.0, 500.0), 0.0);
        state.phase = Phase::Playing;
        state.score.opponent = 2;
        state.score.player = 3;
        let theme = Theme::default();
        let mut surface = surface();

        render(&state, 0.0, &theme, &mut surface);

        let cmds = &surface.commands;
        assert_eq!(cmds.len(), 7);
        assert!(matches!(&cmds[0], DrawCommand::FillRect { w, h, color, .. }
            if *w == 800.0 && *h == 500.0 && *color == theme.background));
        assert!(matches!(&cmds[1], DrawCommand::DashedLine { from, to, .. }
            if *from == (10.0, 250.0) && *to == (790.0, 250.0)));
        assert!(matches!(&cmds[2], DrawCommand::FillRect { y, .. } if *y == 20.0));
        assert!(matches!(&cmds[3], DrawCommand::FillRect { y, .. } if *y == 471.0));
        assert!(matches!(&cmds[4], DrawCommand::FillCircle { color, .. } if *color == theme.accent));
        assert!(matches!(&cmds[5], DrawCommand::Text { text, y, .. } if text == "2" && *y == 110.0));
        assert!(matches!(&cmds[6], DrawCommand::Text { text, y, .. } if text == "3" && *y == 390.0));
    }

    #[test]
    fn test_countdown_overlay() {
        let state = GameState::new(1, Court::new(800.0, 500.0), 0.0);
        let mut surface = surface();
        render(&state, 500.0, &Theme::default(), &mut surface);

        assert_eq!(surface.texts(), vec!["0", "0", "3"]);
        assert!(surface.commands.iter().any(|c| matches!(c,
            DrawCommand::FillRect { color, .. } if color == COUNTDOWN_SCRIM)));
    }

    #[test]
    fn test_game_over_draws_only_banner() {
        let mut state = GameState::new(1, Court::new(800.0, 500.0), 0.0);
        state.phase = Phase::Ended {
            outcome: Outcome::Lose,
            since: 0.0,
        };
        let mut surface = surface();
        render(&state, 0.0, &Theme::default(), &mut surface);

        assert_eq!(surface.commands.len(), 2);
        assert_eq!(surface.texts(), vec!["YOU LOSE"]);
    }

    #[test]
    fn test_theme_is_used_as_given() {
        let mut state = GameState::new(1, Court::new(800.0, 500.0), 0.0);
        state.phase = Phase::Playing;
        let theme = Theme {
            background: "#fff".into(),
            ..Theme::default()
        };
        let mut surface = surface();
        render(&state, 0.0, &theme, &mut surface);
        assert!(matches!(&surface.commands[0], DrawCommand::FillRect { color, .. } if color == "#fff"));
    }
}
