use crate::{
    foundation::core::{Resolution, Rgba, Vec2},
    foundation::error::SlideFxResult,
    sampling::sampler::Sampler,
};

/// Texel reconstruction used by [`ImageSampler`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Bilinear between the four nearest texel centers.
    #[default]
    Linear,
    /// The single texel containing the coordinate.
    Nearest,
}

/// Samples an RGBA8 image with clamp-to-edge addressing.
#[derive(Clone, Debug)]
pub struct ImageSampler {
    image: image::RgbaImage,
    filter: FilterMode,
}

impl ImageSampler {
    pub fn new(image: image::RgbaImage, filter: FilterMode) -> Self {
        Self { image, filter }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn resolution(&self) -> SlideFxResult<Resolution> {
        let (w, h) = self.image.dimensions();
        Resolution::from_pixels(w, h)
    }

    fn texel(&self, x: i64, y: i64) -> Rgba {
        let (w, h) = self.image.dimensions();
        let x = x.clamp(0, i64::from(w) - 1) as u32;
        // image rows run top-down, texture v runs bottom-up
        let y = (i64::from(h) - 1 - y.clamp(0, i64::from(h) - 1)) as u32;
        Rgba::from_rgba8(self.image.get_pixel(x, y).0)
    }
}

impl Sampler for ImageSampler {
    fn sample(&self, uv: Vec2) -> Rgba {
        let (w, h) = self.image.dimensions();
        if w == 0 || h == 0 {
            return Rgba::BLACK;
        }
        let (w, h) = (f64::from(w), f64::from(h));
        let u = uv.x.clamp(0.0, 1.0);
        let v = uv.y.clamp(0.0, 1.0);

        match self.filter {
            FilterMode::Nearest => {
                let x = (u * w).floor() as i64;
                let y = (v * h).floor() as i64;
                self.texel(x, y)
            }
            FilterMode::Linear => {
                let px = u * w - 0.5;
                let py = v * h - 0.5;
                let x0 = px.floor();
                let y0 = py.floor();
                let fx = (px - x0) as f32;
                let fy = (py - y0) as f32;
                let (x0, y0) = (x0 as i64, y0 as i64);

                let c00 = self.texel(x0, y0);
                let c10 = self.texel(x0 + 1, y0);
                let c01 = self.texel(x0, y0 + 1);
                let c11 = self.texel(x0 + 1, y0 + 1);

                let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;
                let bi = |a: f32, b: f32, c: f32, d: f32| lerp(lerp(a, b, fx), lerp(c, d, fx), fy);
                Rgba {
                    r: bi(c00.r, c10.r, c01.r, c11.r),
                    g: bi(c00.g, c10.g, c01.g, c11.g),
                    b: bi(c00.b, c10.b, c01.b, c11.b),
                    a: bi(c00.a, c10.a, c01.a, c11.a),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/texture.rs"]
mod tests;
