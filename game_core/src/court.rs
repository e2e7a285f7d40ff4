use glam::DVec2;

/// Rectangular playing field, fixed for the lifetime of a match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub width: f64,
    pub height: f64,
}

impl Court {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Top-left position that centers a square of `size` on the court
    pub fn ball_spawn(&self, size: f64) -> DVec2 {
        DVec2::new(self.width / 2.0 - size / 2.0, self.height / 2.0 - size / 2.0)
    }

    /// Top edge that centers a paddle vertically
    pub fn paddle_spawn(&self, paddle_height: f64) -> f64 {
        (self.height - paddle_height) / 2.0
    }

    /// Largest valid top edge for something `extent` tall
    pub fn max_y(&self, extent: f64) -> f64 {
        (self.height - extent).max(0.0)
    }

    /// Clamp a top edge so an object `extent` tall stays inside the court
    pub fn clamp_y(&self, y: f64, extent: f64) -> f64 {
        y.clamp(0.0, self.max_y(extent))
    }

    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    /// True if the point lies in the left half (where touch steers the paddle)
    pub fn in_left_half(&self, x: f64) -> bool {
        x < self.center_x()
    }
}
