use rayon::prelude::*;

use crate::{
    effects::evaluate::{TransitionInputs, TransitionParams, evaluate},
    foundation::core::Vec2,
    foundation::error::{SlideFxError, SlideFxResult},
};

/// Straight RGBA8 pixels, row-major, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderThreading {
    /// Evaluate rows on a dedicated rayon pool.
    pub parallel: bool,
    /// Worker count for the pool. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Normalized coordinate of a pixel center, `v` growing upward.
pub fn pixel_uv(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        (f64::from(x) + 0.5) / f64::from(width),
        1.0 - (f64::from(y) + 0.5) / f64::from(height),
    )
}

/// Progress of frame `idx` in an evenly spaced sweep from 0 to 1 inclusive.
pub fn sweep_progress(idx: usize, frames: usize) -> f64 {
    if frames <= 1 {
        return 0.0;
    }
    idx as f64 / (frames - 1) as f64
}

/// Evaluate every pixel of a `width x height` frame.
///
/// Sequential and parallel modes produce identical bytes.
#[tracing::instrument(skip(inputs))]
pub fn render_frame(
    inputs: &TransitionInputs<'_>,
    params: TransitionParams,
    width: u32,
    height: u32,
    threading: &RenderThreading,
) -> SlideFxResult<FrameRGBA> {
    let pool = thread_pool_for(threading)?;
    render_with(inputs, params, width, height, pool.as_ref())
}

/// Render `frames` evenly spaced progress values for one effect.
pub fn render_sweep(
    inputs: &TransitionInputs<'_>,
    effect_id: i32,
    time: f64,
    frames: usize,
    width: u32,
    height: u32,
    threading: &RenderThreading,
) -> SlideFxResult<Vec<FrameRGBA>> {
    if frames == 0 {
        return Err(SlideFxError::validation("sweep frame count must be >= 1"));
    }

    let pool = thread_pool_for(threading)?;
    (0..frames)
        .map(|idx| {
            let params = TransitionParams {
                effect_id,
                progress: sweep_progress(idx, frames),
                time,
            };
            render_with(inputs, params, width, height, pool.as_ref())
        })
        .collect()
}

fn render_with(
    inputs: &TransitionInputs<'_>,
    params: TransitionParams,
    width: u32,
    height: u32,
    pool: Option<&rayon::ThreadPool>,
) -> SlideFxResult<FrameRGBA> {
    if width == 0 || height == 0 {
        return Err(SlideFxError::validation("frame size must be > 0 in both axes"));
    }
    let row_len = (width as usize)
        .checked_mul(4)
        .ok_or_else(|| SlideFxError::render("frame row size overflow"))?;
    let len = row_len
        .checked_mul(height as usize)
        .ok_or_else(|| SlideFxError::render("frame buffer size overflow"))?;
    let mut data = vec![0u8; len];

    let shade_row = |(y, row): (usize, &mut [u8])| {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let u = pixel_uv(x as u32, y as u32, width, height);
            px.copy_from_slice(&evaluate(inputs, params, u).to_rgba8());
        }
    };

    match pool {
        Some(pool) => pool.install(|| {
            data.par_chunks_mut(row_len)
                .enumerate()
                .for_each(shade_row)
        }),
        None => data.chunks_mut(row_len).enumerate().for_each(shade_row),
    }

    Ok(FrameRGBA {
        width,
        height,
        data,
    })
}

fn thread_pool_for(threading: &RenderThreading) -> SlideFxResult<Option<rayon::ThreadPool>> {
    if threading.parallel {
        build_thread_pool(threading.threads).map(Some)
    } else {
        Ok(None)
    }
}

fn build_thread_pool(threads: Option<usize>) -> SlideFxResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SlideFxError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    tracing::debug!(?threads, "building render thread pool");
    builder
        .build()
        .map_err(|e| SlideFxError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
