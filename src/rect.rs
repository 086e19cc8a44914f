//! Integer axis-aligned rectangle used for sprite placement and collision.

/// Axis-aligned rectangle in logical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost pixel.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottommost pixel.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict overlap test: rectangles that only share an edge do NOT
    /// intersect. A near-miss where the car's right edge equals the hazard's
    /// left edge is a miss, and it has to stay that way.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether a logical pixel falls inside this rect.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}
