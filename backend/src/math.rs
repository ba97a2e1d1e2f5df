use std::mem;
use std::ops::{Index, IndexMut};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[f32; 4] {
        let ary: &[f32; 4] = unsafe { mem::transmute(self) };
        ary
    }
    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        let ary: &mut [f32; 4] = unsafe { mem::transmute(self) };
        ary
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    #[inline(always)]
    fn index(&self, i: usize) -> &f32 {
        self.as_array().index(i)
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        self.as_array_mut().index_mut(i)
    }
}

/// Column-major 4x4 matrix, laid out the way `glUniformMatrix4fv` expects it
/// with `transpose = FALSE`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4x4 {
    pub c0: Vec4,
    pub c1: Vec4,
    pub c2: Vec4,
    pub c3: Vec4,
}

impl Mat4x4 {
    pub fn identity() -> Self {
        Self {
            c0: Vec4::new(1.0, 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 1.0, 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, 1.0, 0.0),
            c3: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Orthographic projection, same parameter order as `glOrtho`.
    ///
    /// Passing `bottom = height, top = 0` gives a pixel space with the origin
    /// in the top-left corner and y growing downwards.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let fna = far - near;
        Self {
            c0: Vec4::new(2.0 / rl, 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 2.0 / tb, 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, -2.0 / fna, 0.0),
            c3: Vec4::new(
                -(right + left) / rl,
                -(top + bottom) / tb,
                -(far + near) / fna,
                1.0,
            ),
        }
    }

    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        let mut out = Vec4::new(0.0, 0.0, 0.0, 0.0);
        for row in 0..4 {
            out[row] = self.c0[row] * v.x + self.c1[row] * v.y + self.c2[row] * v.z + self.c3[row] * v.w;
        }
        out
    }

    pub fn as_cols(&self) -> [f32; 16] {
        [
            self.c0[0], self.c0[1], self.c0[2], self.c0[3], self.c1[0], self.c1[1], self.c1[2],
            self.c1[3], self.c2[0], self.c2[1], self.c2[2], self.c2[3], self.c3[0], self.c3[1],
            self.c3[2], self.c3[3],
        ]
    }
}

/// Integer rectangle in window pixels, origin top-left.
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

    /// Rectangle of the given size whose center is `(cx, cy)`.
    pub fn centered_at(cx: i32, cy: i32, w: u32, h: u32) -> Self {
        Self::new(cx - (w / 2) as i32, cy - (h / 2) as i32, w, h)
    }

    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let r = self.right().max(other.right());
        let b = self.bottom().max(other.bottom());
        Rect::new(x, y, (r - x) as u32, (b - y) as u32)
    }

    /// `[x, y, w, h]` as floats, for the `rect` shader uniform.
    pub fn to_vec4(&self) -> Vec4 {
        Vec4::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn ortho_maps_window_corners_to_clip_space() {
        let m = Mat4x4::ortho(0.0, 1280.0, 720.0, 0.0, -1.0, 1.0);

        let top_left = m.mul_vec4(Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert!(approx(top_left.x, -1.0) && approx(top_left.y, 1.0));

        let bottom_right = m.mul_vec4(Vec4::new(1280.0, 720.0, 0.0, 1.0));
        assert!(approx(bottom_right.x, 1.0) && approx(bottom_right.y, -1.0));

        let center = m.mul_vec4(Vec4::new(640.0, 360.0, 0.0, 1.0));
        assert!(approx(center.x, 0.0) && approx(center.y, 0.0));
        assert!(approx(center.w, 1.0));
    }

    #[test]
    fn identity_leaves_vectors_alone() {
        let v = Vec4::new(3.0, -2.0, 0.5, 1.0);
        assert_eq!(Mat4x4::identity().mul_vec4(v), v);
    }

    #[test]
    fn columns_are_flattened_in_order() {
        let cols = Mat4x4::ortho(0.0, 2.0, 2.0, 0.0, -1.0, 1.0).as_cols();
        assert!(approx(cols[0], 1.0));
        assert!(approx(cols[5], -1.0));
        assert!(approx(cols[12], -1.0));
        assert!(approx(cols[13], 1.0));
        assert!(approx(cols[15], 1.0));
    }

    #[test]
    fn vec4_indexing() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        v[2] = 7.0;
        assert_eq!(v[0], 1.0);
        assert_eq!(v.z, 7.0);
    }

    #[test]
    fn centered_rect_allows_negative_origin() {
        assert_eq!(Rect::centered_at(3, 100, 16, 16), Rect::new(-5, 92, 16, 16));
    }

    #[test]
    fn rect_edges_and_union() {
        let a = Rect::new(0, 0, 49, 49);
        let b = Rect::new(350, 350, 49, 49);
        assert!(a.contains(48, 48));
        assert!(!a.contains(49, 0));
        assert_eq!(a.union(&b), Rect::new(0, 0, 399, 399));
    }
}
