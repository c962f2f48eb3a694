use glam::{Mat4, Vec3, Vec4};

/// Fixed-function style modelview stack.
///
/// `rotate` and `translate` post-multiply the top matrix. An unbalanced
/// `pop` is ignored with a warning, leaving the top in place.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl MatrixStack {
    pub fn new() -> Self {
        Self {
            current: Mat4::IDENTITY,
            saved: Vec::with_capacity(8),
        }
    }

    /// Start from `base` (e.g. a view matrix) with an empty stack.
    pub fn with_base(base: Mat4) -> Self {
        Self {
            current: base,
            saved: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    pub fn pop(&mut self) {
        match self.saved.pop() {
            Some(m) => self.current = m,
            None => log::warn!("matrix stack underflow: pop without matching push"),
        }
    }

    /// Rotate by `degrees` about `axis` (normalized here).
    pub fn rotate(&mut self, degrees: f32, axis: Vec3) {
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        self.current *= Mat4::from_axis_angle(axis, degrees.to_radians());
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.current *= Mat4::from_translation(offset);
    }

    pub fn top(&self) -> Mat4 {
        self.current
    }

    /// Number of saved matrices.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Local point to world.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.current.transform_point3(p)
    }

    /// Local homogeneous coordinate to world, leaving `w` as transformed.
    pub fn transform_homogeneous(&self, p: Vec4) -> Vec4 {
        self.current * p
    }

    /// Accumulated rotation about +Z, in radians, read from the top matrix.
    pub fn z_rotation(&self) -> f32 {
        let x_axis = self.current.x_axis;
        x_axis.y.atan2(x_axis.x)
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn translate_moves_origin() {
        let mut stack = MatrixStack::new();
        stack.translate(Vec3::new(10.0, 0.0, 0.0));
        assert!(close(stack.transform_point(Vec3::ZERO), Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn rotate_then_translate_places_on_circle() {
        let mut stack = MatrixStack::new();
        stack.rotate(90.0, Vec3::Z);
        stack.translate(Vec3::new(10.0, 0.0, 0.0));
        assert!(close(stack.transform_point(Vec3::ZERO), Vec3::new(0.0, 10.0, 0.0)));
    }

    #[test]
    fn push_pop_restores() {
        let mut stack = MatrixStack::new();
        stack.translate(Vec3::new(1.0, 0.0, 0.0));
        stack.push();
        stack.rotate(30.0, Vec3::Z);
        stack.translate(Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(stack.depth(), 1);
        stack.pop();
        assert_eq!(stack.depth(), 0);
        assert!(close(stack.transform_point(Vec3::ZERO), Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn unbalanced_pop_keeps_top() {
        let mut stack = MatrixStack::new();
        stack.translate(Vec3::new(2.0, 0.0, 0.0));
        stack.pop();
        assert!(close(stack.transform_point(Vec3::ZERO), Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn zero_axis_rotation_is_ignored() {
        let mut stack = MatrixStack::new();
        stack.rotate(45.0, Vec3::ZERO);
        assert_eq!(stack.top(), Mat4::IDENTITY);
    }

    #[test]
    fn z_rotation_accumulates() {
        let mut stack = MatrixStack::new();
        stack.rotate(30.0, Vec3::Z);
        stack.translate(Vec3::new(4.0, 0.0, 0.0));
        stack.rotate(15.0, Vec3::Z);
        assert!((stack.z_rotation() - 45f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn with_base_starts_from_view() {
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -100.0));
        let stack = MatrixStack::with_base(view);
        assert!(close(stack.transform_point(Vec3::ZERO), Vec3::new(0.0, 0.0, -100.0)));
    }
}
