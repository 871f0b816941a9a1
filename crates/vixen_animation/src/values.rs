use glam::{Quat, Vec3, Vec4};

/// A value a keyframe track can blend between.
pub trait Interpolatable: Clone {
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self;

    /// Cubic Hermite segment as defined by glTF's `CUBICSPLINE` sampler.
    /// Tangents are scaled by the segment duration `dt`.
    fn interpolate_cubic(v0: &Self, out_tangent0: &Self, in_tangent1: &Self, v1: &Self, t: f32, dt: f32) -> Self;
}

/// Hermite basis weights for `(v0, m0, v1, m1)` at parameter `t`.
#[inline]
fn hermite(t: f32) -> (f32, f32, f32, f32) {
    let t2 = t * t;
    let t3 = t2 * t;
    (
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    )
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        a.lerp(*b, t)
    }

    fn interpolate_cubic(v0: &Self, out_tangent0: &Self, in_tangent1: &Self, v1: &Self, t: f32, dt: f32) -> Self {
        let (h00, h10, h01, h11) = hermite(t);
        *v0 * h00 + *out_tangent0 * (h10 * dt) + *v1 * h01 + *in_tangent1 * (h11 * dt)
    }
}

impl Interpolatable for Quat {
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        a.slerp(*b, t)
    }

    fn interpolate_cubic(v0: &Self, out_tangent0: &Self, in_tangent1: &Self, v1: &Self, t: f32, dt: f32) -> Self {
        let (h00, h10, h01, h11) = hermite(t);
        let blended = Vec4::from(*v0) * h00
            + Vec4::from(*out_tangent0) * (h10 * dt)
            + Vec4::from(*v1) * h01
            + Vec4::from(*in_tangent1) * (h11 * dt);
        Quat::from_vec4(blended).normalize()
    }
}
