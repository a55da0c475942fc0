use crate::foundation::core::{Resolution, Vec2};

/// Which surface length normalizes a centered coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisNorm {
    /// Divide by the larger of width and height.
    Dominant,
    /// Always divide by the surface width.
    SurfaceWidth,
}

impl AxisNorm {
    fn divisor(self, surface: Resolution) -> f64 {
        match self {
            Self::Dominant => surface.max_axis(),
            Self::SurfaceWidth => surface.width,
        }
    }
}

/// Crop-to-fill ("cover") sampling coordinate.
///
/// Scales the image uniformly until it covers the whole surface, centers it, and
/// maps the raw surface coordinate `u` into the image's `[0, 1]` space. When both
/// aspect ratios agree this is the identity.
pub fn cover_uv(u: Vec2, surface: Resolution, image: Resolution) -> Vec2 {
    let (s, i) = (surface, image);
    if s.aspect() < i.aspect() {
        // full height, overflowing width
        let fit_w = i.width * s.height / i.height;
        let offset = (fit_w - s.width) / 2.0 / fit_w;
        Vec2::new(u.x * s.width / fit_w + offset, u.y)
    } else {
        let fit_h = i.height * s.width / i.width;
        let offset = (fit_h - s.height) / 2.0 / fit_h;
        Vec2::new(u.x, u.y * s.height / fit_h + offset)
    }
}

/// Origin at the surface center, scaled so one unit equals the chosen axis length.
///
/// Shapes drawn in this space keep their proportions whatever the surface aspect.
pub fn centered_uv(u: Vec2, surface: Resolution, norm: AxisNorm) -> Vec2 {
    let d = norm.divisor(surface);
    Vec2::new(
        (u.x - 0.5) * surface.width / d,
        (u.y - 0.5) * surface.height / d,
    )
}

/// Like [`centered_uv`] but keeps the origin in the bottom-left corner.
pub fn scaled_uv(u: Vec2, surface: Resolution, norm: AxisNorm) -> Vec2 {
    let d = norm.divisor(surface);
    Vec2::new(u.x * surface.width / d, u.y * surface.height / d)
}

/// Time-animated ripple displacement of a cover-mapped coordinate.
///
/// Waves travel along the vertical distance to the image center and push the
/// coordinate radially. At the exact center the direction is zero.
pub fn ripple_uv(uv: Vec2, time: f64) -> Vec2 {
    let dist_to_center = (uv.y - 0.5).abs();
    let d = (dist_to_center * 50.0 - time).sin();
    let delta = uv - Vec2::new(0.5, 0.5);
    let len = delta.hypot();
    let dir = if len > 0.0 { delta / len } else { Vec2::ZERO };
    uv + dir * (d * 0.2)
}

/// Snap a coordinate to the center of its cell on a `cells x cells` grid.
pub fn quantize_uv(uv: Vec2, cells: f64) -> Vec2 {
    Vec2::new(
        ((uv.x * cells).floor() + 0.5) / cells,
        ((uv.y * cells).floor() + 0.5) / cells,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/coords/mapping.rs"]
mod tests;
