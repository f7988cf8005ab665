//! Integer rectangles in screen pixels.

/// Axis-aligned rectangle. `x`/`y` is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size whose centre sits at `(cx, cy)`.
    pub fn centered(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        let mut r = Self::new(0, 0, w, h);
        r.set_center(cx, cy);
        r
    }

    #[inline] pub fn left(&self) -> i32 { self.x }
    #[inline] pub fn top(&self) -> i32 { self.y }
    #[inline] pub fn right(&self) -> i32 { self.x + self.w }
    #[inline] pub fn bottom(&self) -> i32 { self.y + self.h }

    #[inline] pub fn set_left(&mut self, v: i32) { self.x = v; }
    #[inline] pub fn set_top(&mut self, v: i32) { self.y = v; }
    #[inline] pub fn set_right(&mut self, v: i32) { self.x = v - self.w; }
    #[inline] pub fn set_bottom(&mut self, v: i32) { self.y = v - self.h; }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn set_center(&mut self, cx: i32, cy: i32) {
        self.x = cx - self.w / 2;
        self.y = cy - self.h / 2;
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x as f32
            && px < self.right() as f32
            && py >= self.y as f32
            && py < self.bottom() as f32
    }

    /// Keep the rectangle inside `bounds`, sliding it back along each axis.
    pub fn clamp_within(&mut self, bounds: &Rect) {
        self.x = self.x.min(bounds.right() - self.w).max(bounds.x);
        self.y = self.y.min(bounds.bottom() - self.h).max(bounds.y);
    }
}
