use std::mem;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[f32; 4] {
        let ary: &[f32; 4] = unsafe { mem::transmute(self) };
        ary
    }
}

/// Column-major 4x4 matrix, laid out the way `glUniformMatrix4fv` expects.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4x4 {
    pub c0: Vec4,
    pub c1: Vec4,
    pub c2: Vec4,
    pub c3: Vec4,
}

impl Mat4x4 {
    /// Orthographic projection mapping the box
    /// `[left, right] x [bottom, top] x [-1, 1]` onto clip space.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        Self {
            c0: Vec4::new(2.0 / rl, 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 2.0 / tb, 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, -1.0, 0.0),
            c3: Vec4::new(-(right + left) / rl, -(top + bottom) / tb, 0.0, 1.0),
        }
    }

    /// Pixel-space projection: origin at the top-left corner, y grows downward.
    pub fn screen(width: f32, height: f32) -> Self {
        Self::ortho(0.0, width, height, 0.0)
    }

    pub fn transform(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: self.c0.x * p.x + self.c1.x * p.y + self.c3.x,
            y: self.c0.y * p.x + self.c1.y * p.y + self.c3.y,
        }
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut arr = [0.0; 16];
        for (i, col) in [self.c0, self.c1, self.c2, self.c3].iter().enumerate() {
            arr[i * 4..i * 4 + 4].copy_from_slice(col.as_array());
        }
        arr
    }
}
