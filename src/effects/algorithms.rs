//! Per-pixel blending functions, one per catalog entry.
//!
//! Shape, line and pattern effects compute a threshold `st` and blend
//! `mix(next, current, st)`: a pixel stays on "current" while its signal is past the
//! boundary and flips to "next" once the boundary sweeps over it.

use crate::{
    coords::mapping::{AxisNorm, quantize_uv, scaled_uv},
    effects::evaluate::PixelCtx,
    foundation::core::{Rgb, Vec2},
    foundation::math::{fract, smoothstep, step},
};

/// Half-width of the smoothed threshold band.
const BAND: f64 = 0.1;
/// Circles use a much tighter edge than the other smoothed effects.
const CIRCLE_BAND: f64 = 0.01;

const BARS: f64 = 8.0;
const FINE_BARS: f64 = 80.0;

#[derive(Clone, Copy, Debug)]
enum Sweep {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Sweep {
    fn signal(self, uv: Vec2) -> f64 {
        match self {
            Self::LeftToRight => uv.x,
            Self::RightToLeft => -uv.x,
            Self::TopToBottom => -uv.y,
            Self::BottomToTop => uv.y,
        }
    }
}

fn reveal(ctx: &PixelCtx<'_>, st: f64) -> Rgb {
    Rgb::mix(ctx.next.rgb(), ctx.current.rgb(), st as f32)
}

fn smooth(boundary: f64, s: f64) -> f64 {
    smoothstep(boundary - BAND, boundary + BAND, s)
}

/// Shows "current" unchanged; the fallback for ids outside the catalog.
pub fn passthrough(ctx: &PixelCtx<'_>) -> Rgb {
    ctx.current.rgb()
}

/// 0: linear crossfade from "current" to "next".
pub fn fade(ctx: &PixelCtx<'_>) -> Rgb {
    Rgb::mix(ctx.current.rgb(), ctx.next.rgb(), ctx.progress as f32)
}

fn circle(ctx: &PixelCtx<'_>, center: Vec2, reach: f64) -> Rgb {
    let uv = ctx.centered(AxisNorm::Dominant);
    let dist = (uv - center).hypot();
    let radius = ctx.progress * reach;
    reveal(
        ctx,
        smoothstep(radius - CIRCLE_BAND, radius + CIRCLE_BAND, dist),
    )
}

/// 1: iris opening from the surface center.
pub fn circle_center(ctx: &PixelCtx<'_>) -> Rgb {
    circle(ctx, Vec2::ZERO, 0.8)
}

/// 2: iris growing from the top-right corner.
pub fn circle_top_right(ctx: &PixelCtx<'_>) -> Rgb {
    circle(ctx, Vec2::new(0.5, 0.5), 1.5)
}

/// 3: iris growing from the top-left corner.
pub fn circle_top_left(ctx: &PixelCtx<'_>) -> Rgb {
    circle(ctx, Vec2::new(-0.5, 0.5), 1.5)
}

/// 4: iris growing from the middle of the left edge.
pub fn circle_center_left(ctx: &PixelCtx<'_>) -> Rgb {
    circle(ctx, Vec2::new(-0.5, 0.0), 1.5)
}

/// 5: iris growing from the middle of the right edge.
pub fn circle_center_right(ctx: &PixelCtx<'_>) -> Rgb {
    circle(ctx, Vec2::new(0.5, 0.0), 1.5)
}

/// 6: iris growing from the bottom-left corner.
pub fn circle_bottom_left(ctx: &PixelCtx<'_>) -> Rgb {
    circle(ctx, Vec2::new(-0.5, -0.5), 1.5)
}

/// 7: iris growing from the bottom-right corner.
pub fn circle_bottom_right(ctx: &PixelCtx<'_>) -> Rgb {
    circle(ctx, Vec2::new(0.5, -0.5), 1.5)
}

fn line(ctx: &PixelCtx<'_>, sweep: Sweep) -> Rgb {
    let uv = ctx.centered(AxisNorm::SurfaceWidth);
    reveal(ctx, step(ctx.progress - 0.5, sweep.signal(uv)))
}

/// 8: hard edge sweeping left to right.
pub fn line_left_to_right(ctx: &PixelCtx<'_>) -> Rgb {
    line(ctx, Sweep::LeftToRight)
}

/// 9: hard edge sweeping right to left.
pub fn line_right_to_left(ctx: &PixelCtx<'_>) -> Rgb {
    line(ctx, Sweep::RightToLeft)
}

/// 10: hard edge sweeping top to bottom.
pub fn line_top_to_bottom(ctx: &PixelCtx<'_>) -> Rgb {
    line(ctx, Sweep::TopToBottom)
}

/// 11: hard edge sweeping bottom to top.
pub fn line_bottom_to_top(ctx: &PixelCtx<'_>) -> Rgb {
    line(ctx, Sweep::BottomToTop)
}

fn bars(ctx: &PixelCtx<'_>, sweep: Sweep, count: f64) -> Rgb {
    let uv = ctx.centered(AxisNorm::Dominant);
    reveal(ctx, step(ctx.progress, fract(sweep.signal(uv) * count)))
}

/// 12: eight vertical bars, each filling left to right.
pub fn bars_left_to_right(ctx: &PixelCtx<'_>) -> Rgb {
    bars(ctx, Sweep::LeftToRight, BARS)
}

/// 13: eight vertical bars, each filling right to left.
pub fn bars_right_to_left(ctx: &PixelCtx<'_>) -> Rgb {
    bars(ctx, Sweep::RightToLeft, BARS)
}

/// 14: eight horizontal bars, each filling top to bottom.
pub fn bars_top_to_bottom(ctx: &PixelCtx<'_>) -> Rgb {
    bars(ctx, Sweep::TopToBottom, BARS)
}

/// 15: eight horizontal bars, each filling bottom to top.
pub fn bars_bottom_to_top(ctx: &PixelCtx<'_>) -> Rgb {
    bars(ctx, Sweep::BottomToTop, BARS)
}

/// 16: like [`bars_left_to_right`] with eighty bars.
pub fn fine_bars_left_to_right(ctx: &PixelCtx<'_>) -> Rgb {
    bars(ctx, Sweep::LeftToRight, FINE_BARS)
}

/// 17: like [`bars_right_to_left`] with eighty bars.
pub fn fine_bars_right_to_left(ctx: &PixelCtx<'_>) -> Rgb {
    bars(ctx, Sweep::RightToLeft, FINE_BARS)
}

/// 18: like [`bars_top_to_bottom`] with eighty bars.
pub fn fine_bars_top_to_bottom(ctx: &PixelCtx<'_>) -> Rgb {
    bars(ctx, Sweep::TopToBottom, FINE_BARS)
}

/// 19: like [`bars_bottom_to_top`] with eighty bars.
pub fn fine_bars_bottom_to_top(ctx: &PixelCtx<'_>) -> Rgb {
    bars(ctx, Sweep::BottomToTop, FINE_BARS)
}

/// 20: vertical bars mirrored about the center, filling outward.
pub fn bars_vertical_center_out(ctx: &PixelCtx<'_>) -> Rgb {
    let uv = ctx.centered(AxisNorm::Dominant);
    reveal(ctx, step(ctx.progress, fract(uv.x.abs() * BARS)))
}

/// 21: horizontal bars mirrored about the center, filling outward.
pub fn bars_horizontal_center_out(ctx: &PixelCtx<'_>) -> Rgb {
    let uv = ctx.centered(AxisNorm::Dominant);
    reveal(ctx, step(ctx.progress, fract(uv.y.abs() * BARS)))
}

/// 22: hyperbolic cross pattern spreading from the center axes.
pub fn cross_center_out(ctx: &PixelCtx<'_>) -> Rgb {
    let uv = ctx.centered(AxisNorm::Dominant);
    reveal(ctx, smooth(ctx.progress, fract((uv.y * uv.x).abs() * BARS)))
}

/// 23: inverse of [`cross_center_out`], closing in on the axes.
pub fn cross_out_center(ctx: &PixelCtx<'_>) -> Rgb {
    let uv = ctx.centered(AxisNorm::Dominant);
    reveal(ctx, smooth(ctx.progress, fract(-(uv.y * uv.x).abs() * BARS)))
}

fn red_product(ctx: &PixelCtx<'_>) -> f64 {
    f64::from(ctx.current.r) * f64::from(ctx.next.r)
}

/// 24: dissolve ordered by the product of both images' red channels.
pub fn red_channel(ctx: &PixelCtx<'_>) -> Rgb {
    reveal(ctx, smooth(ctx.progress - 0.5, red_product(ctx)))
}

/// 25: red-channel dissolve jittered by the time-animated ripple.
pub fn sand(ctx: &PixelCtx<'_>) -> Rgb {
    let s = red_product(ctx) + ctx.ripple().x;
    reveal(ctx, smooth(ctx.progress, s))
}

/// 26: dissolve ordered by the mask's red channel.
pub fn mask(ctx: &PixelCtx<'_>) -> Rgb {
    reveal(ctx, smooth(ctx.progress, f64::from(ctx.mask().r)))
}

/// 27: mask dissolve weighted by distance from the vertical center line.
pub fn mask_center_out(ctx: &PixelCtx<'_>) -> Rgb {
    let uv = ctx.centered(AxisNorm::Dominant);
    let s = fract(uv.x.abs() * 2.0) * f64::from(ctx.mask().r);
    reveal(ctx, smooth(ctx.progress - 0.5, s))
}

/// Blends against a block-quantized "next" sample instead of the per-pixel one.
fn pixelate(ctx: &PixelCtx<'_>, cells: f64, offset: f64) -> Rgb {
    let uv = scaled_uv(ctx.u, ctx.surface(), AxisNorm::Dominant);
    let block = ctx.sample_next(quantize_uv(uv, cells));
    let s = f64::from(block.r) - f64::from(block.g);
    let st = smooth(ctx.progress - offset, s);
    Rgb::mix(block.rgb(), ctx.current.rgb(), st as f32)
}

/// 28: dissolve into "next" through a 56x56 block grid.
pub fn pixelate_fine(ctx: &PixelCtx<'_>) -> Rgb {
    pixelate(ctx, 56.0, 0.5)
}

/// 29: dissolve into "next" through an 8x8 block grid.
pub fn pixelate_coarse(ctx: &PixelCtx<'_>) -> Rgb {
    pixelate(ctx, 8.0, 0.8)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/algorithms.rs"]
mod tests;
