//! Mapping between simulation space and screen space
//!
//! Screen space starts at the bounds' minimum corner; simulation space is
//! centered on the camera. For a viewport with midpoints `mid_x, mid_y`:
//!
//! ```text
//! screen_x = mid_x + (x - center.x) * zoom
//! sim_x    = (screen_x - mid_x) / zoom + center.x
//! ```
//!
//! and the same for y. The mapper owns its camera, so every zoom change goes
//! through it and the cached grid spacing can tell when it has gone stale.

use crate::error::SimError;
use crate::simulation::states::NVec2;
use crate::visualization::camera::Camera;
use crate::visualization::grid::{grid_spacing_for_zoom, GridLines, MIN_GRID_PIXELS};

/// Clamp `value` into `[lo, hi]`
pub fn clip(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: NVec2,
    pub max: NVec2,
}

impl Bounds {
    pub fn new(min: NVec2, max: NVec2) -> Result<Self, SimError> {
        let ok = min.iter().chain(max.iter()).all(|c| c.is_finite()) && min.x < max.x && min.y < max.y;
        if !ok {
            return Err(SimError::InvalidBounds);
        }
        Ok(Self { min, max })
    }

    /// Rectangle anchored at the origin
    pub fn from_size(width: f64, height: f64) -> Result<Self, SimError> {
        Self::new(NVec2::zeros(), NVec2::new(width, height))
    }

    pub fn mid_x(&self) -> f64 {
        0.5 * (self.min.x + self.max.x)
    }

    pub fn mid_y(&self) -> f64 {
        0.5 * (self.min.y + self.max.y)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: NVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Open-interval overlap, rectangles that only touch do not intersect
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.x < other.max.x && other.min.x < self.max.x && self.min.y < other.max.y && other.min.y < self.max.y
    }
}

pub struct ViewportMapper {
    camera: Camera,
    bounds: Bounds,
    grid_spacing: f64,
    grid_zoom: f64, // zoom the cached spacing was computed for, 0 = never
}

impl ViewportMapper {
    /// New mapper; the grid spacing is computed once up front
    pub fn new(camera: Camera, bounds: Bounds) -> Self {
        let mut mapper = Self {
            camera,
            bounds,
            grid_spacing: 0.0,
            grid_zoom: 0.0,
        };
        mapper.update_grid_spacing();
        mapper
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for the input side. After changing the zoom,
    /// call [`update_grid_spacing`](Self::update_grid_spacing) before reading
    /// gridlines again
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Viewport resize
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    // Coordinate conversions

    pub fn to_screen_x(&self, x: f64) -> f64 {
        self.bounds.mid_x() + (x - self.camera.center().x) * self.camera.zoom()
    }

    pub fn to_screen_y(&self, y: f64) -> f64 {
        self.bounds.mid_y() + (y - self.camera.center().y) * self.camera.zoom()
    }

    pub fn to_sim_x(&self, sx: f64) -> f64 {
        (sx - self.bounds.mid_x()) / self.camera.zoom() + self.camera.center().x
    }

    pub fn to_sim_y(&self, sy: f64) -> f64 {
        (sy - self.bounds.mid_y()) / self.camera.zoom() + self.camera.center().y
    }

    pub fn to_screen(&self, p: NVec2) -> NVec2 {
        NVec2::new(self.to_screen_x(p.x), self.to_screen_y(p.y))
    }

    pub fn to_simulation(&self, p: NVec2) -> NVec2 {
        NVec2::new(self.to_sim_x(p.x), self.to_sim_y(p.y))
    }

    pub fn length_to_screen(&self, l: f64) -> f64 {
        l * self.camera.zoom()
    }

    pub fn length_to_simulation(&self, l: f64) -> f64 {
        l / self.camera.zoom()
    }

    /// Pan from a scroll-wheel delta given in pixels. Content follows the
    /// fingers horizontally, so x is inverted
    pub fn pan_by_screen_delta(&mut self, dx: f64, dy: f64) {
        let delta = NVec2::new(-self.length_to_simulation(dx), self.length_to_simulation(dy));
        self.camera.pan(delta);
    }

    // Grid

    /// Recompute the grid spacing if the zoom moved since the last call.
    /// Returns the current spacing
    pub fn update_grid_spacing(&mut self) -> f64 {
        let zoom = self.camera.zoom();
        if zoom != self.grid_zoom {
            self.grid_spacing = grid_spacing_for_zoom(zoom, MIN_GRID_PIXELS);
            self.grid_zoom = zoom;
        }
        self.grid_spacing
    }

    /// Cached spacing, `None` while a zoom change has not been followed by
    /// `update_grid_spacing`
    pub fn grid_spacing(&self) -> Option<f64> {
        (self.grid_zoom == self.camera.zoom()).then_some(self.grid_spacing)
    }

    /// Vertical gridlines, left to right across the bounds
    pub fn vertical_gridlines(&self) -> Option<GridLines> {
        let spacing = self.grid_spacing()?;
        Some(GridLines::new(
            spacing,
            self.bounds.mid_x(),
            self.camera.center().x,
            self.camera.zoom(),
            self.bounds.min.x,
            self.bounds.max.x,
        ))
    }

    /// Horizontal gridlines, bottom to top across the bounds
    pub fn horizontal_gridlines(&self) -> Option<GridLines> {
        let spacing = self.grid_spacing()?;
        Some(GridLines::new(
            spacing,
            self.bounds.mid_y(),
            self.camera.center().y,
            self.camera.zoom(),
            self.bounds.min.y,
            self.bounds.max.y,
        ))
    }

    // Axes and origin

    /// Screen y of the x axis, if a line of `line_width` there would be visible
    pub fn x_axis_screen_y(&self, line_width: f64) -> Option<f64> {
        let y = self.to_screen_y(0.0);
        let half = 0.5 * line_width;
        (y + half > self.bounds.min.y && y - half < self.bounds.max.y).then_some(y)
    }

    /// Screen x of the y axis, if a line of `line_width` there would be visible
    pub fn y_axis_screen_x(&self, line_width: f64) -> Option<f64> {
        let x = self.to_screen_x(0.0);
        let half = 0.5 * line_width;
        (x + half > self.bounds.min.x && x - half < self.bounds.max.x).then_some(x)
    }

    /// Square around the simulation origin with half-size `radius`, if it
    /// overlaps the viewport
    pub fn origin_marker(&self, radius: f64) -> Option<Bounds> {
        let o = self.to_screen(NVec2::zeros());
        let r = NVec2::new(radius, radius);
        let marker = Bounds { min: o - r, max: o + r };
        marker.intersects(&self.bounds).then_some(marker)
    }

    /// Screen position of a simulation point, clamped onto the viewport edge
    pub fn to_screen_clipped(&self, p: NVec2) -> NVec2 {
        let s = self.to_screen(p);
        NVec2::new(
            clip(s.x, self.bounds.min.x, self.bounds.max.x),
            clip(s.y, self.bounds.min.y, self.bounds.max.y),
        )
    }
}
