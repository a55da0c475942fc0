use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::SlideFxResult,
    sampling::texture::{FilterMode, ImageSampler},
};

/// Decode encoded image bytes into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> SlideFxResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode an image file into a sampler.
pub fn load_sampler(path: &Path, filter: FilterMode) -> SlideFxResult<ImageSampler> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let rgba = decode_image(&bytes).with_context(|| format!("decode image '{}'", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        width = rgba.width(),
        height = rgba.height(),
        "loaded image"
    );
    Ok(ImageSampler::new(rgba, filter))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
