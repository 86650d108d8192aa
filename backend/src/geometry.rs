/// Axis-aligned rectangle in screen space: top-left origin, y grows downward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.w)
    }

    #[inline]
    fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.h)
    }

    /// Strict AABB intersection. Rectangles sharing only an edge do not
    /// overlap, and a zero-sized rectangle never overlaps anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > i64::from(other.x)
            && i64::from(self.x) < other.right()
            && self.bottom() > i64::from(other.y)
            && i64::from(self.y) < other.bottom()
    }
}

pub fn check_collision(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}
