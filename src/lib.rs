//! slidefx composites animated transitions between two images.
//!
//! For every output pixel the evaluator blends a "current" and a "next" image (plus an
//! optional mask) according to one of thirty catalog effects and a progress scalar.
//!
//! # Pipeline overview
//!
//! 1. **Map**: raw surface coordinate -> cover-mapped image coordinate ([`cover_uv`]),
//!    plus centered coordinates for shape geometry ([`centered_uv`]).
//! 2. **Evaluate**: [`evaluate`] looks the effect id up in a fixed table of pure
//!    functions ([`lookup`]) and returns one opaque color. Unknown ids pass "current"
//!    through.
//! 3. **Render** (optional): [`render_frame`] runs the evaluator over a whole surface,
//!    sequentially or on a rayon pool, producing straight RGBA8.
//!
//! Evaluation is stateless. Inputs are borrowed for the whole pass and
//! [`TransitionParams`] is copied in, so a pass always sees one consistent snapshot.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod coords;
mod effects;
mod foundation;
mod render;
mod sampling;

pub use assets::decode::{decode_image, load_sampler};
pub use assets::store::PreparedImages;
pub use config::model::{EffectSelector, PASSTHROUGH_ID, TransitionConfig};
pub use coords::mapping::{
    AxisNorm, centered_uv, cover_uv, quantize_uv, ripple_uv, scaled_uv,
};
pub use effects::algorithms;
pub use effects::catalog::{TransitionKind, parse_transition_kind};
pub use effects::evaluate::{PixelCtx, TransitionInputs, TransitionParams, evaluate};
pub use effects::registry::{EffectFn, FALLBACK, lookup};
pub use foundation::core::{Resolution, Rgb, Rgba, Vec2};
pub use foundation::error::{SlideFxError, SlideFxResult};
pub use foundation::math::{fract, smoothstep, step};
pub use render::frame::{
    FrameRGBA, RenderThreading, pixel_uv, render_frame, render_sweep, sweep_progress,
};
pub use sampling::sampler::Sampler;
pub use sampling::texture::{FilterMode, ImageSampler};
