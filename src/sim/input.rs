//! Player input intents
//!
//! Event handlers only ever write into [`Intents`]; the frame step reads it once
//! per frame through [`apply_intents`].

use super::state::GameState;
use crate::consts::KEY_STEP;

/// Which way a held key pushes the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Left,
    Right,
}

impl KeyIntent {
    /// Arrow keys, with A/D as the fallback pair
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(KeyIntent::Left),
            "ArrowRight" | "d" | "D" => Some(KeyIntent::Right),
            _ => None,
        }
    }
}

/// Latest pointer target plus held-key state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intents {
    /// Pointer/touch x in court units, consumed by the next frame
    pub pointer_x: Option<f32>,
    pub move_left: bool,
    pub move_right: bool,
}

impl Intents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_at(&mut self, court_x: f32) {
        self.pointer_x = Some(court_x);
    }

    /// Record a key press or release; returns false for unmapped keys
    pub fn key_changed(&mut self, key: &str, pressed: bool) -> bool {
        match KeyIntent::from_key(key) {
            Some(KeyIntent::Left) => self.move_left = pressed,
            Some(KeyIntent::Right) => self.move_right = pressed,
            None => return false,
        }
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Map a device-space x into court units using the displayed-vs-logical ratio
///
/// Returns None when the surface has no displayed width yet.
pub fn device_to_court_x(
    client_x: f64,
    surface_left: f64,
    displayed_width: f64,
    logical_width: f64,
) -> Option<f32> {
    if displayed_width <= 0.0 {
        return None;
    }
    Some(((client_x - surface_left) * (logical_width / displayed_width)) as f32)
}

/// Apply this frame's intents to the player paddle
///
/// Pointer targets place the paddle absolutely (centered under the pointer) in
/// any live phase. Held keys only nudge it while Playing.
pub fn apply_intents(state: &mut GameState, intents: &mut Intents) {
    let width = state.court.width;

    if let Some(x) = intents.pointer_x.take() {
        let half = state.player.length / 2.0;
        state.player.set_position(x - half, width);
    }

    if state.phase.is_playing() {
        if intents.move_left {
            state.player.nudge(-KEY_STEP, width);
        }
        if intents.move_right {
            state.player.nudge(KEY_STEP, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Court, Phase};

    fn playing_state() -> GameState {
        let mut state = GameState::new(3, Court::new(800.0, 500.0), 0.0);
        state.phase = Phase::Playing;
        state
    }

    #[test]
    fn test_key_map() {
        let mut intents = Intents::new();
        assert!(intents.key_changed("ArrowLeft", true));
        assert!(intents.move_left);
        assert!(intents.key_changed("d", true));
        assert!(intents.move_right);
        assert!(intents.key_changed("a", false));
        assert!(!intents.move_left);
        assert!(!intents.key_changed("Enter", true));
    }

    #[test]
    fn test_device_to_court_x_scales() {
        // Canvas drawn at half its logical width
        assert_eq!(device_to_court_x(250.0, 50.0, 400.0, 800.0), Some(400.0));
        assert_eq!(device_to_court_x(10.0, 0.0, 0.0, 800.0), None);
    }

    #[test]
    fn test_pointer_places_paddle_and_clamps() {
        let mut state = playing_state();
        let mut intents = Intents::new();

        intents.pointer_at(400.0);
        apply_intents(&mut state, &mut intents);
        assert_eq!(state.player.center(), 400.0);
        assert_eq!(intents.pointer_x, None);

        intents.pointer_at(5_000.0);
        apply_intents(&mut state, &mut intents);
        assert_eq!(state.player.position, 800.0 - state.player.length);

        intents.pointer_at(-100.0);
        apply_intents(&mut state, &mut intents);
        assert_eq!(state.player.position, 0.0);
    }

    #[test]
    fn test_pointer_works_during_countdown() {
        let mut state = GameState::new(3, Court::new(800.0, 500.0), 0.0);
        let mut intents = Intents::new();
        intents.pointer_at(100.0);
        apply_intents(&mut state, &mut intents);
        assert_eq!(state.player.center(), 100.0);
    }

    #[test]
    fn test_keys_only_move_while_playing() {
        let mut state = GameState::new(3, Court::new(800.0, 500.0), 0.0);
        let mut intents = Intents::new();
        intents.key_changed("ArrowRight", true);
        let start = state.player.position;

        apply_intents(&mut state, &mut intents);
        assert_eq!(state.player.position, start);

        state.phase = Phase::Playing;
        apply_intents(&mut state, &mut intents);
        assert_eq!(state.player.position, start + KEY_STEP);
        // Held keys persist across frames
        apply_intents(&mut state, &mut intents);
        assert_eq!(state.player.position, start + 2.0 * KEY_STEP);
    }

    #[test]
    fn test_keys_clamp_at_wall() {
        let mut state = playing_state();
        let mut intents = Intents::new();
        state.player.set_position(3.0, 800.0);
        intents.key_changed("a", true);
        apply_intents(&mut state, &mut intents);
        assert_eq!(state.player.position, 0.0);
    }
}
