//! Geometry types used for widget layout and hit testing.

/// A point in widget space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds anchored at the origin.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half-open containment test: left/top edges are inside, right/bottom are not.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Split into `count` equal rows stacked top to bottom.
    pub fn rows(&self, count: usize) -> Vec<Bounds> {
        if count == 0 {
            return Vec::new();
        }
        let row_height = self.height / count as f32;
        (0..count)
            .map(|i| Bounds::new(self.x, self.y + i as f32 * row_height, self.width, row_height))
            .collect()
    }

    /// Split into `count` equal columns left to right.
    pub fn columns(&self, count: usize) -> Vec<Bounds> {
        if count == 0 {
            return Vec::new();
        }
        let col_width = self.width / count as f32;
        (0..count)
            .map(|i| Bounds::new(self.x + i as f32 * col_width, self.y, col_width, self.height))
            .collect()
    }

    /// Shrink by `amount` on every side (never below zero size).
    pub fn shrink(&self, amount: f32) -> Bounds {
        Bounds::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }
}
