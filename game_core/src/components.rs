use glam::DVec2;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left paddle, driven by pointer input
    Human,
    /// Right paddle, driven by the tracking controller
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }

    /// Name shown on the game-over overlay
    pub fn display_name(self) -> &'static str {
        match self {
            Side::Human => "Player",
            Side::Opponent => "AI",
        }
    }

    /// Horizontal serve direction that sends the ball toward this side
    pub fn direction(self) -> f64 {
        match self {
            Side::Human => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

/// Axis-aligned rectangle in court coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A paddle confined to one vertical column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f64,        // Fixed column, set at construction
    pub y: f64,        // Top edge
    pub target_y: f64, // Where the human paddle is easing toward
    pub width: f64,
    pub height: f64,
}

impl Paddle {
    pub fn new(side: Side, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            side,
            x,
            y,
            target_y: y,
            width,
            height,
        }
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The ball: a square whose position is its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
}

impl Ball {
    pub fn new(pos: DVec2, vel: DVec2, size: f64) -> Self {
        Self { pos, vel, size }
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Direction of travel in radians, screen coordinates
    pub fn heading(&self) -> f64 {
        self.vel.y.atan2(self.vel.x)
    }

    pub fn center(&self) -> DVec2 {
        self.pos + DVec2::splat(self.size / 2.0)
    }

    pub fn left(&self) -> f64 {
        self.pos.x
    }

    pub fn right(&self) -> f64 {
        self.pos.x + self.size
    }

    pub fn top(&self) -> f64 {
        self.pos.y
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}
