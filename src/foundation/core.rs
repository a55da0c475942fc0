use crate::foundation::error::{SlideFxError, SlideFxResult};

pub use kurbo::Vec2;

/// Width/height pair in pixels. Both axes are strictly positive and finite.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    pub width: f64,
    pub height: f64,
}

impl Resolution {
    pub fn new(width: f64, height: f64) -> SlideFxResult<Self> {
        let res = Self { width, height };
        res.validate()?;
        Ok(res)
    }

    pub fn from_pixels(width: u32, height: u32) -> SlideFxResult<Self> {
        Self::new(f64::from(width), f64::from(height))
    }

    /// Re-check the invariant on values that bypassed [`Resolution::new`] (e.g. deserialized).
    pub fn validate(self) -> SlideFxResult<()> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(SlideFxError::validation("resolution must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SlideFxError::validation(format!(
                "resolution must be > 0 in both axes, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn aspect(self) -> f64 {
        self.width / self.height
    }

    pub fn max_axis(self) -> f64 {
        if self.width >= self.height {
            self.width
        } else {
            self.height
        }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Straight (non-premultiplied) RGBA with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(px: [u8; 4]) -> Self {
        Self {
            r: f32::from(px[0]) / 255.0,
            g: f32::from(px[1]) / 255.0,
            b: f32::from(px[2]) / 255.0,
            a: f32::from(px[3]) / 255.0,
        }
    }

    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Opaque output color produced by the evaluator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// `a * (1 - t) + b * t` per channel; exact at `t == 0` and `t == 1`.
    pub fn mix(a: Self, b: Self, t: f32) -> Self {
        let lerp = |x: f32, y: f32| x * (1.0 - t) + y * t;
        Self {
            r: lerp(a.r, b.r),
            g: lerp(a.g, b.g),
            b: lerp(a.b, b.b),
        }
    }

    /// Quantize to RGBA8 with opaque alpha.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn q(c: f32) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b), 255]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
