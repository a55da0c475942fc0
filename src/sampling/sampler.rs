use crate::foundation::core::{Rgba, Vec2};

/// Read-only image lookup at a normalized coordinate.
///
/// `(0, 0)` is the bottom-left of the image and `v` grows upward. Coordinates
/// outside `[0, 1]` are the implementor's business; [`crate::ImageSampler`] clamps
/// to the edge. `Sync` lets one sampler serve every worker of a parallel pass.
pub trait Sampler: Sync {
    fn sample(&self, uv: Vec2) -> Rgba;
}

impl<F> Sampler for F
where
    F: Fn(Vec2) -> Rgba + Sync,
{
    fn sample(&self, uv: Vec2) -> Rgba {
        self(uv)
    }
}

/// A constant color everywhere.
impl Sampler for Rgba {
    fn sample(&self, _uv: Vec2) -> Rgba {
        *self
    }
}
