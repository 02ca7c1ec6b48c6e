//! Court geometry helpers
//!
//! Pure functions for clamping, deflection and paddle spans. Court coordinates
//! have the origin at the top-left corner, x to the right and y downward.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in court coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Whether `x` lies within the horizontal span (edges inclusive)
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.x && x <= self.right()
    }
}

/// Clamp the start of a segment of `length` so it stays inside `[0, extent]`
#[inline]
pub fn clamp_span(start: f32, length: f32, extent: f32) -> f32 {
    start.clamp(0.0, (extent - length).max(0.0))
}

/// Offset of `x` from the rect's horizontal center, normalized by half its width
///
/// Returns a value in `[-1, 1]`; a degenerate rect yields 0.
pub fn relative_offset(x: f32, rect: &Rect) -> f32 {
    let half = rect.w / 2.0;
    if half <= 0.0 {
        return 0.0;
    }
    ((x - rect.center_x()) / half).clamp(-1.0, 1.0)
}

/// Horizontal velocity after a paddle bounce: nudge by `offset * gain`, then clamp
#[inline]
pub fn deflect(vx: f32, offset: f32, gain: f32, max: f32) -> f32 {
    (vx + offset * gain).clamp(-max, max)
}

/// Move `current` toward `target` by at most `step`, holding still inside `dead_zone`
///
/// Never overshoots the target.
pub fn step_toward(current: f32, target: f32, step: f32, dead_zone: f32) -> f32 {
    if current + dead_zone < target {
        target.min(current + step)
    } else if current - dead_zone > target {
        target.max(current - step)
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_span() {
        assert_eq!(clamp_span(-5.0, 72.0, 400.0), 0.0);
        assert_eq!(clamp_span(500.0, 72.0, 400.0), 328.0);
        assert_eq!(clamp_span(100.0, 72.0, 400.0), 100.0);
        // Segment longer than the extent pins to the origin
        assert_eq!(clamp_span(10.0, 500.0, 400.0), 0.0);
    }

    #[test]
    fn test_spans_x_edges_inclusive() {
        let rect = Rect::new(100.0, 20.0, 120.0, 12.0);
        assert!(rect.spans_x(100.0));
        assert!(rect.spans_x(220.0));
        assert!(!rect.spans_x(99.9));
        assert!(!rect.spans_x(220.1));
    }

    #[test]
    fn test_relative_offset() {
        let rect = Rect::new(100.0, 20.0, 120.0, 12.0);
        assert_eq!(relative_offset(160.0, &rect), 0.0);
        assert_eq!(relative_offset(100.0, &rect), -1.0);
        assert_eq!(relative_offset(220.0, &rect), 1.0);
        assert_eq!(relative_offset(190.0, &rect), 0.5);
        assert_eq!(relative_offset(500.0, &rect), 1.0);
    }

    #[test]
    fn test_deflect_clamps() {
        assert_eq!(deflect(1.0, 0.5, 3.0, 8.0), 2.5);
        assert_eq!(deflect(7.0, 1.0, 3.0, 8.0), 8.0);
        assert_eq!(deflect(-7.0, -1.0, 3.0, 8.0), -8.0);
    }

    #[test]
    fn test_step_toward_respects_dead_zone() {
        assert_eq!(step_toward(100.0, 104.0, 6.0, 6.0), 100.0);
        assert_eq!(step_toward(100.0, 96.0, 6.0, 6.0), 100.0);
        assert_eq!(step_toward(100.0, 150.0, 6.0, 6.0), 106.0);
        assert_eq!(step_toward(100.0, 50.0, 6.0, 6.0), 94.0);
        // Final approach lands on the target instead of overshooting
        assert_eq!(step_toward(100.0, 107.0, 6.0, 6.0), 106.0);
        assert_eq!(step_toward(100.0, 103.0, 6.0, 2.0), 103.0);
    }
}
