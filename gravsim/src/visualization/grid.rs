//! Adaptive reference grid
//!
//! Picks a "round" simulation-space spacing (1, 2 or 5 times a power of ten)
//! so gridlines never come closer than a fixed number of pixels, and walks the
//! gridlines that fall inside a screen interval.

/// Minimum on-screen distance between neighbouring gridlines, in pixels
pub const MIN_GRID_PIXELS: f64 = 60.0;

/// Multipliers tried within a decade, smallest first
const DECADE_STEPS: [f64; 3] = [2.0, 5.0, 10.0];

/// Smallest round spacing whose on-screen length at `zoom` is at least `min_px`
///
/// Equivalent to snapping the fractional part of `log10(min_px / zoom)` up to
/// `log10(2)`, `log10(5)` or 1, but done on the multipliers directly so the
/// result is never an ulp below the minimum.
/// Examples at `min_px / zoom`: 17 -> 20, 213 -> 500, 0.7 -> 1, 6000 -> 10000.
/// An exact power of ten snaps to the next candidate up: 1000 -> 2000
pub fn grid_spacing_for_zoom(zoom: f64, min_px: f64) -> f64 {
    let min_length = min_px / zoom;

    // log10 can land an ulp low on exact powers of ten, so settle the decade
    // against the length itself: 10^magnitude <= min_length < 10^(magnitude + 1)
    let mut magnitude = min_length.log10().floor() as i32;
    if 10f64.powi(magnitude) > min_length {
        magnitude -= 1;
    } else if 10f64.powi(magnitude + 1) <= min_length {
        magnitude += 1;
    }
    let base = 10f64.powi(magnitude);

    DECADE_STEPS
        .iter()
        .map(|step| step * base)
        .find(|spacing| *spacing >= min_length)
        .unwrap_or(10.0 * base)
}

/// One gridline: its simulation coordinate and where it lands on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub sim: f64,
    pub screen: f64,
}

/// Gridlines along one axis, lowest screen coordinate first
///
/// Line `k` sits at `k * spacing`; computing it from the index instead of
/// repeatedly adding `spacing` keeps long walks from drifting. The walk is
/// capped at the number of lines that can fit in the interval, and ends early
/// once the index is too large for `index + 1` to be representable
#[derive(Debug, Clone)]
pub struct GridLines {
    index: f64,
    spacing: f64,
    mid: f64, // screen coordinate of the camera center
    center: f64, // camera center on this axis
    zoom: f64,
    min_screen: f64,
    max_screen: f64,
    remaining: u64, // iterations left, including skipped lines
}

impl GridLines {
    pub(crate) fn new(spacing: f64, mid: f64, center: f64, zoom: f64, min_screen: f64, max_screen: f64) -> Self {
        let sim_min = (min_screen - mid) / zoom + center;
        let span = (max_screen - min_screen) / (spacing * zoom);
        let remaining = if span.is_finite() && span >= 0.0 {
            span.ceil() as u64 + 2
        } else {
            0
        };
        Self {
            index: (sim_min / spacing).floor(),
            spacing,
            mid,
            center,
            zoom,
            min_screen,
            max_screen,
            remaining,
        }
    }

    fn screen_of(&self, sim: f64) -> f64 {
        self.mid + (sim - self.center) * self.zoom
    }
}

impl Iterator for GridLines {
    type Item = GridLine;

    fn next(&mut self) -> Option<GridLine> {
        if !(self.spacing.is_finite() && self.spacing > 0.0 && self.index.is_finite()) {
            return None;
        }

        loop {
            if self.remaining == 0 || self.index + 1.0 == self.index {
                return None;
            }
            self.remaining -= 1;

            let sim = self.index * self.spacing;
            let screen = self.screen_of(sim);
            if screen > self.max_screen {
                return None;
            }
            self.index += 1.0;
            if screen >= self.min_screen {
                return Some(GridLine { sim, screen });
            }
        }
    }
}
