//! Wave text effect
//!
//! Every character of a heading gets its own span whose vertical offset,
//! colour and glow follow a sine wave. The phase either advances with time
//! (a continuous frame loop) or is derived from how far the page is
//! scrolled.

use std::f64::consts::TAU;

/// Media query for the user's reduced-motion preference
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Scroll distance mapped onto the full wave cycle
pub const MAX_SCROLL_PX: f64 = 600.0;

const PHASE_SPEED: f64 = 0.005;
const GLOW_SPEED: f64 = 0.004;
const CHAR_PHASE: f64 = 0.55;
const CHAR_GLOW_PHASE: f64 = 0.4;
const AMPLITUDE_PX: f64 = 8.0;
const BASE_HUE: f64 = 215.0;
const HUE_SWING: f64 = 35.0;

/// Time value that makes the wave complete exactly one cycle
const SCROLL_PHASE_MS: f64 = TAU / PHASE_SPEED;

/// What drives the phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaveMode {
    /// Continuous animation from a frame loop
    Time,
    /// Recomputed on scroll only
    #[default]
    Scroll,
}

/// Split text into per-character cells. Spaces become non-breaking so
/// the span keeps its width.
pub fn wave_chars(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| if c == ' ' { '\u{a0}' } else { c })
        .collect()
}

/// Computed style of one character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveStyle {
    /// Raw wave value in [-1, 1]
    pub wave: f64,
    /// Glow strength in [0, 1]
    pub glow: f64,
}

impl WaveStyle {
    pub fn offset_px(&self) -> f64 {
        self.wave * AMPLITUDE_PX
    }

    pub fn hue(&self) -> f64 {
        BASE_HUE + self.wave * HUE_SWING
    }

    pub fn transform(&self) -> String {
        format!("translate3d(0, {:.2}px, 0)", self.offset_px())
    }

    pub fn color(&self) -> String {
        format!(
            "hsl({:.1}deg, 85%, {:.1}%)",
            self.hue(),
            68.0 + self.glow * 6.0
        )
    }

    pub fn text_shadow(&self) -> String {
        format!(
            "0 0 {:.1}px hsla({:.1}deg, 95%, 72%, {:.2})",
            10.0 + self.glow * 8.0,
            self.hue(),
            0.45 + self.glow * 0.35
        )
    }
}

/// Style of character `index` at `time_ms`
pub fn time_style(time_ms: f64, index: usize) -> WaveStyle {
    let i = index as f64;
    WaveStyle {
        wave: (time_ms * PHASE_SPEED + i * CHAR_PHASE).sin(),
        glow: ((time_ms * GLOW_SPEED + i * CHAR_GLOW_PHASE).cos() + 1.0) / 2.0,
    }
}

/// Scroll position as a fraction of [`MAX_SCROLL_PX`], clamped to [0, 1]
pub fn scroll_progress(scroll_y: f64, max_scroll: f64) -> f64 {
    if max_scroll <= 0.0 {
        return 1.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0)
}

/// Style of character `index` at a scroll progress in [0, 1]
pub fn scroll_style(progress: f64, index: usize) -> WaveStyle {
    time_style(progress.clamp(0.0, 1.0) * SCROLL_PHASE_MS, index)
}
