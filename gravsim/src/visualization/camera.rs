//! Simulation-space camera: the point shown at the viewport center and the
//! zoom factor in pixels per simulation unit

use crate::error::SimError;
use crate::simulation::states::NVec2;

/// Multiplier applied by a single `zoom_in` / `zoom_out`
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.25;

/// Zoom range; outside it viewport coordinates stop being finite
pub const MIN_ZOOM: f64 = 1e-100;
pub const MAX_ZOOM: f64 = 1e100;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    center: NVec2,
    zoom: f64,
}

fn check_zoom(zoom: f64) -> Result<f64, SimError> {
    if (MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
        Ok(zoom)
    } else {
        Err(SimError::InvalidZoom(zoom))
    }
}

fn check_factor(factor: f64) -> Result<f64, SimError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(SimError::InvalidZoomFactor(factor))
    }
}

impl Camera {
    pub fn new(center: NVec2, zoom: f64) -> Result<Self, SimError> {
        Ok(Self {
            center,
            zoom: check_zoom(zoom)?,
        })
    }

    pub fn center(&self) -> NVec2 {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Move the center by a simulation-space displacement
    pub fn pan(&mut self, delta: NVec2) {
        self.center += delta;
    }

    pub fn set_center(&mut self, center: NVec2) {
        self.center = center;
    }

    /// Zoom in by [`DEFAULT_ZOOM_FACTOR`]. At [`MAX_ZOOM`] the camera stays put
    /// and the error is returned
    pub fn zoom_in(&mut self) -> Result<(), SimError> {
        self.zoom_in_by(DEFAULT_ZOOM_FACTOR)
    }

    /// Zoom out by [`DEFAULT_ZOOM_FACTOR`], bounded below by [`MIN_ZOOM`]
    pub fn zoom_out(&mut self) -> Result<(), SimError> {
        self.zoom_out_by(DEFAULT_ZOOM_FACTOR)
    }

    pub fn zoom_in_by(&mut self, factor: f64) -> Result<(), SimError> {
        let zoom = check_zoom(self.zoom * check_factor(factor)?)?;
        self.zoom = zoom;
        Ok(())
    }

    pub fn zoom_out_by(&mut self, factor: f64) -> Result<(), SimError> {
        let zoom = check_zoom(self.zoom / check_factor(factor)?)?;
        self.zoom = zoom;
        Ok(())
    }

    /// Direct set; values outside `[MIN_ZOOM, MAX_ZOOM]` (zero, negative,
    /// non-finite included) are rejected and leave the camera untouched
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), SimError> {
        self.zoom = check_zoom(zoom)?;
        Ok(())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: NVec2::zeros(),
            zoom: 5.0,
        }
    }
}
