//! Pointer and touch input mapping
//!
//! Coordinates are court-relative; the front-end subtracts the canvas
//! offset before calling in.

use crate::Config;

/// Target that puts the paddle's center under the pointer
pub fn pointer_target(pointer_y: f64, config: &Config) -> f64 {
    pointer_y - config.paddle_height / 2.0
}

/// Tracks whether a touch currently steers the human paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInput {
    touch_active: bool,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_active(&self) -> bool {
        self.touch_active
    }

    pub fn mouse_move(&self, y: f64, config: &Config) -> f64 {
        pointer_target(y, config)
    }

    /// A touch only grabs the paddle when it lands on the left half
    pub fn touch_start(&mut self, x: f64, y: f64, config: &Config) -> Option<f64> {
        if config.court().in_left_half(x) {
            self.touch_active = true;
            Some(pointer_target(y, config))
        } else {
            None
        }
    }

    pub fn touch_move(&self, y: f64, config: &Config) -> Option<f64> {
        self.touch_active.then(|| pointer_target(y, config))
    }

    pub fn touch_end(&mut self) {
        self.touch_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_centers_paddle() {
        let config = Config::new();
        assert_eq!(pointer_target(250.0, &config), 190.0);
    }

    #[test]
    fn test_touch_on_right_half_is_ignored() {
        let config = Config::new();
        let mut input = PointerInput::new();

        assert_eq!(input.touch_start(600.0, 100.0, &config), None);
        assert!(!input.touch_active());
        assert_eq!(input.touch_move(100.0, &config), None);
    }

    #[test]
    fn test_touch_drag_cycle() {
        let config = Config::new();
        let mut input = PointerInput::new();

        assert_eq!(input.touch_start(100.0, 300.0, &config), Some(240.0));
        assert_eq!(input.touch_move(400.0, &config), Some(340.0));
        // Dragging across the divider keeps control
        assert!(input.touch_active());

        input.touch_end();
        assert_eq!(input.touch_move(400.0, &config), None);
    }
}
