//! Editor zoom level

/// Font size in points at startup and after Reset Zoom
pub const DEFAULT_ZOOM: f64 = 10.0;
pub const MIN_ZOOM: f64 = 5.0;
pub const MAX_ZOOM: f64 = 200.0;
pub const ZOOM_STEP: f64 = 5.0;

/// Current editor font size, always within `[MIN_ZOOM, MAX_ZOOM]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    level: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            level: DEFAULT_ZOOM,
        }
    }
}

impl Zoom {
    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.set(self.level + ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.set(self.level - ZOOM_STEP)
    }

    pub fn reset(&mut self) -> f64 {
        self.set(DEFAULT_ZOOM)
    }

    fn set(&mut self, level: f64) -> f64 {
        self.level = level.clamp(MIN_ZOOM, MAX_ZOOM);
        self.level
    }
}
