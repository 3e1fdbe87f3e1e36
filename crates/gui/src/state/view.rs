//! Canvas view state: zoom level and lighting

use shared::LightMode;

pub const ZOOM_STEP: f64 = 0.1;
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Brightness factor of the night filter
pub const NIGHT_BRIGHTNESS: f32 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    zoom: f64,
    light: LightMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            light: LightMode::Day,
        }
    }
}

impl ViewState {
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn light_mode(&self) -> LightMode {
        self.light
    }

    /// Zoom in one step; returns false if already at the maximum
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom + ZOOM_STEP)
    }

    /// Zoom out one step; returns false if already at the minimum
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom - ZOOM_STEP)
    }

    /// Zoom in percent, for labels
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    pub fn toggle_light(&mut self) -> LightMode {
        self.light = self.light.toggled();
        self.light
    }

    /// Visual brightness factor for the current light mode
    pub fn brightness(&self, night_brightness: f32) -> f32 {
        match self.light {
            LightMode::Day => 1.0,
            LightMode::Night => night_brightness,
        }
    }

    fn set_zoom(&mut self, zoom: f64) -> bool {
        // Snap to the step grid so repeated steps land exactly on the bounds
        let zoom = ((zoom * 10.0).round() / 10.0).clamp(MIN_ZOOM, MAX_ZOOM);
        if zoom == self.zoom {
            return false;
        }
        self.zoom = zoom;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let v = ViewState::default();
        assert_eq!(v.zoom(), 1.0);
        assert_eq!(v.light_mode(), LightMode::Day);
        assert_eq!(v.zoom_percent(), 100);
    }

    #[test]
    fn test_zoom_clamps_high() {
        let mut v = ViewState::default();
        for _ in 0..15 {
            v.zoom_in();
        }
        assert_eq!(v.zoom(), MAX_ZOOM);
        assert!(!v.zoom_in());
    }

    #[test]
    fn test_zoom_clamps_low() {
        let mut v = ViewState::default();
        for _ in 0..15 {
            v.zoom_out();
        }
        assert_eq!(v.zoom(), MIN_ZOOM);
        assert!(!v.zoom_out());
    }

    #[test]
    fn test_zoom_round_trip() {
        let mut v = ViewState::default();
        v.zoom_in();
        v.zoom_in();
        v.zoom_out();
        assert_eq!(v.zoom(), 1.1);
        assert_eq!(v.zoom_percent(), 110);
    }

    #[test]
    fn test_light_toggle_and_brightness() {
        let mut v = ViewState::default();
        assert_eq!(v.brightness(NIGHT_BRIGHTNESS), 1.0);
        assert_eq!(v.toggle_light(), LightMode::Night);
        assert_eq!(v.brightness(NIGHT_BRIGHTNESS), 0.7);
        assert_eq!(v.toggle_light(), LightMode::Day);
    }
}
