use std::cell::OnceCell;

use crate::{
    coords::mapping::{AxisNorm, centered_uv, cover_uv, ripple_uv},
    effects::registry,
    foundation::core::{Resolution, Rgb, Rgba, Vec2},
    sampling::sampler::Sampler,
};

/// Images and resolutions bound for one evaluation pass.
///
/// Borrowed immutably for the whole pass, so no pixel can observe a rebinding.
#[derive(Clone, Copy)]
pub struct TransitionInputs<'a> {
    pub current: &'a dyn Sampler,
    pub next: &'a dyn Sampler,
    /// Unbound masks read as opaque black.
    pub mask: Option<&'a dyn Sampler>,
    pub surface: Resolution,
    pub image: Resolution,
}

impl std::fmt::Debug for TransitionInputs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionInputs")
            .field("mask", &self.mask.is_some())
            .field("surface", &self.surface)
            .field("image", &self.image)
            .finish_non_exhaustive()
    }
}

/// Scalars broadcast to every pixel of a pass. `Copy`, so each pass owns a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionParams {
    /// Catalog id; anything outside `0..=29` passes "current" through.
    pub effect_id: i32,
    /// Expected in `[0, 1]`; never clamped here.
    pub progress: f64,
    pub time: f64,
}

/// Everything one effect function may read for a single output pixel.
pub struct PixelCtx<'a> {
    /// Raw surface coordinate, `(0, 0)` bottom-left.
    pub u: Vec2,
    /// Cover-mapped image coordinate.
    pub uv: Vec2,
    pub progress: f64,
    pub time: f64,
    /// "current" sampled at `uv`.
    pub current: Rgba,
    /// "next" sampled at `uv`.
    pub next: Rgba,
    inputs: &'a TransitionInputs<'a>,
    mask: OnceCell<Rgba>,
}

impl<'a> PixelCtx<'a> {
    pub fn new(inputs: &'a TransitionInputs<'a>, params: TransitionParams, u: Vec2) -> Self {
        let uv = cover_uv(u, inputs.surface, inputs.image);
        Self {
            u,
            uv,
            progress: params.progress,
            time: params.time,
            current: inputs.current.sample(uv),
            next: inputs.next.sample(uv),
            inputs,
            mask: OnceCell::new(),
        }
    }

    pub fn surface(&self) -> Resolution {
        self.inputs.surface
    }

    /// Raw coordinate re-centered on the surface, see [`centered_uv`].
    pub fn centered(&self, norm: AxisNorm) -> Vec2 {
        centered_uv(self.u, self.inputs.surface, norm)
    }

    /// Mask sampled at `uv`, read at most once per pixel.
    pub fn mask(&self) -> Rgba {
        *self.mask.get_or_init(|| match self.inputs.mask {
            Some(m) => m.sample(self.uv),
            None => Rgba::BLACK,
        })
    }

    pub fn ripple(&self) -> Vec2 {
        ripple_uv(self.uv, self.time)
    }

    /// Sample "next" at an arbitrary coordinate.
    pub fn sample_next(&self, uv: Vec2) -> Rgba {
        self.inputs.next.sample(uv)
    }
}

/// Composite one output pixel.
///
/// `u` is the raw normalized surface coordinate with `v` growing upward. Ids outside
/// the catalog yield the "current" sample unchanged.
pub fn evaluate(inputs: &TransitionInputs<'_>, params: TransitionParams, u: Vec2) -> Rgb {
    let ctx = PixelCtx::new(inputs, params, u);
    registry::lookup(params.effect_id)(&ctx)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/evaluate.rs"]
mod tests;
