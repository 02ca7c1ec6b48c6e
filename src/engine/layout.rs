//! Responsive court sizing
//!
//! Narrow viewports get a near edge-to-edge portrait court. Wide ones get a 4:3
//! landscape court inside comfortable margins, capped so ultra-wide screens
//! don't stretch it.

/// Host viewport in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// At or below the host's narrow-layout breakpoint
    pub narrow: bool,
}

/// Logical canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourtSize {
    pub width: u32,
    pub height: u32,
}

const ASPECT: f64 = 3.0 / 4.0; // height / width
const WIDE_PAD: f64 = 24.0;
const WIDE_MIN: f64 = 300.0;
const NARROW_MIN: f64 = 200.0;
const MAX_WIDTH: f64 = 1400.0;

pub fn court_size(viewport: &Viewport) -> CourtSize {
    let (w, h) = if viewport.narrow {
        let width = viewport.width.max(NARROW_MIN);
        let height = viewport
            .height
            .max(NARROW_MIN)
            .min((viewport.height * 0.998).round());
        (width, height)
    } else {
        let max_h = ((viewport.height * 0.94).round() - WIDE_PAD * 2.0).max(WIDE_MIN);
        let max_w = ((viewport.width * 0.9).round() - WIDE_PAD * 2.0).max(WIDE_MIN);
        let mut height = max_h;
        let mut width = (height / ASPECT).round();
        if width > max_w {
            width = max_w;
            height = (width * ASPECT).round();
        }
        if width > MAX_WIDTH {
            width = MAX_WIDTH;
            height = (width * ASPECT).round();
        }
        (width, height)
    };

    CourtSize {
        width: w.round() as u32,
        height: h.round() as u32,
    }
}
