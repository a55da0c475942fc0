use crate::{
    effects::{algorithms as algo, catalog::TransitionKind, evaluate::PixelCtx},
    foundation::core::Rgb,
};

/// A pure per-pixel blending function.
pub type EffectFn = fn(&PixelCtx<'_>) -> Rgb;

/// Indexed by effect id; must stay in [`TransitionKind::ALL`] order.
const REGISTRY: [EffectFn; 30] = [
    algo::fade,
    algo::circle_center,
    algo::circle_top_right,
    algo::circle_top_left,
    algo::circle_center_left,
    algo::circle_center_right,
    algo::circle_bottom_left,
    algo::circle_bottom_right,
    algo::line_left_to_right,
    algo::line_right_to_left,
    algo::line_top_to_bottom,
    algo::line_bottom_to_top,
    algo::bars_left_to_right,
    algo::bars_right_to_left,
    algo::bars_top_to_bottom,
    algo::bars_bottom_to_top,
    algo::fine_bars_left_to_right,
    algo::fine_bars_right_to_left,
    algo::fine_bars_top_to_bottom,
    algo::fine_bars_bottom_to_top,
    algo::bars_vertical_center_out,
    algo::bars_horizontal_center_out,
    algo::cross_center_out,
    algo::cross_out_center,
    algo::red_channel,
    algo::sand,
    algo::mask,
    algo::mask_center_out,
    algo::pixelate_fine,
    algo::pixelate_coarse,
];

/// Used for every id outside the catalog.
pub const FALLBACK: EffectFn = algo::passthrough;

/// Resolve an effect id, falling back to [`FALLBACK`].
pub fn lookup(effect_id: i32) -> EffectFn {
    usize::try_from(effect_id)
        .ok()
        .and_then(|idx| REGISTRY.get(idx).copied())
        .unwrap_or(FALLBACK)
}

impl TransitionKind {
    pub fn effect_fn(self) -> EffectFn {
        REGISTRY[self as usize]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/registry.rs"]
mod tests;
