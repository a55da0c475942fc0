use crate::foundation::error::{SlideFxError, SlideFxResult};

/// Every transition the evaluator knows, in effect-id order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Fade,
    CircleCenter,
    CircleTopRight,
    CircleTopLeft,
    CircleCenterLeft,
    CircleCenterRight,
    CircleBottomLeft,
    CircleBottomRight,
    LineLeftToRight,
    LineRightToLeft,
    LineTopToBottom,
    LineBottomToTop,
    BarsLeftToRight,
    BarsRightToLeft,
    BarsTopToBottom,
    BarsBottomToTop,
    FineBarsLeftToRight,
    FineBarsRightToLeft,
    FineBarsTopToBottom,
    FineBarsBottomToTop,
    BarsVerticalCenterOut,
    BarsHorizontalCenterOut,
    CrossCenterOut,
    CrossOutCenter,
    RedChannel,
    Sand,
    Mask,
    MaskCenterOut,
    PixelateFine,
    PixelateCoarse,
}

impl TransitionKind {
    pub const ALL: [Self; 30] = [
        Self::Fade,
        Self::CircleCenter,
        Self::CircleTopRight,
        Self::CircleTopLeft,
        Self::CircleCenterLeft,
        Self::CircleCenterRight,
        Self::CircleBottomLeft,
        Self::CircleBottomRight,
        Self::LineLeftToRight,
        Self::LineRightToLeft,
        Self::LineTopToBottom,
        Self::LineBottomToTop,
        Self::BarsLeftToRight,
        Self::BarsRightToLeft,
        Self::BarsTopToBottom,
        Self::BarsBottomToTop,
        Self::FineBarsLeftToRight,
        Self::FineBarsRightToLeft,
        Self::FineBarsTopToBottom,
        Self::FineBarsBottomToTop,
        Self::BarsVerticalCenterOut,
        Self::BarsHorizontalCenterOut,
        Self::CrossCenterOut,
        Self::CrossOutCenter,
        Self::RedChannel,
        Self::Sand,
        Self::Mask,
        Self::MaskCenterOut,
        Self::PixelateFine,
        Self::PixelateCoarse,
    ];

    /// Numeric effect id; equal to the position in [`TransitionKind::ALL`].
    pub fn id(self) -> i32 {
        self as i32
    }

    /// `None` for ids outside the catalog (the evaluator passes "current" through).
    pub fn from_id(id: i64) -> Option<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::CircleCenter => "circle_center",
            Self::CircleTopRight => "circle_top_right",
            Self::CircleTopLeft => "circle_top_left",
            Self::CircleCenterLeft => "circle_center_left",
            Self::CircleCenterRight => "circle_center_right",
            Self::CircleBottomLeft => "circle_bottom_left",
            Self::CircleBottomRight => "circle_bottom_right",
            Self::LineLeftToRight => "line_left_to_right",
            Self::LineRightToLeft => "line_right_to_left",
            Self::LineTopToBottom => "line_top_to_bottom",
            Self::LineBottomToTop => "line_bottom_to_top",
            Self::BarsLeftToRight => "bars_left_to_right",
            Self::BarsRightToLeft => "bars_right_to_left",
            Self::BarsTopToBottom => "bars_top_to_bottom",
            Self::BarsBottomToTop => "bars_bottom_to_top",
            Self::FineBarsLeftToRight => "fine_bars_left_to_right",
            Self::FineBarsRightToLeft => "fine_bars_right_to_left",
            Self::FineBarsTopToBottom => "fine_bars_top_to_bottom",
            Self::FineBarsBottomToTop => "fine_bars_bottom_to_top",
            Self::BarsVerticalCenterOut => "bars_vertical_center_out",
            Self::BarsHorizontalCenterOut => "bars_horizontal_center_out",
            Self::CrossCenterOut => "cross_center_out",
            Self::CrossOutCenter => "cross_out_center",
            Self::RedChannel => "red_channel",
            Self::Sand => "sand",
            Self::Mask => "mask",
            Self::MaskCenterOut => "mask_center_out",
            Self::PixelateFine => "pixelate_fine",
            Self::PixelateCoarse => "pixelate_coarse",
        }
    }

    /// Reads the auxiliary mask image.
    pub fn uses_mask(self) -> bool {
        matches!(self, Self::Mask | Self::MaskCenterOut)
    }

    /// Reads the time-animated ripple displacement.
    pub fn uses_ripple(self) -> bool {
        matches!(self, Self::Sand)
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a user-facing effect name or decimal id.
///
/// Names are case-insensitive and accept `-` or spaces in place of `_`. Decimal ids
/// must fall inside the catalog; callers that want the pass-through behavior of
/// unknown ids should use the raw id instead.
pub fn parse_transition_kind(s: &str) -> SlideFxResult<TransitionKind> {
    let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    if key.is_empty() {
        return Err(SlideFxError::validation("transition name must be non-empty"));
    }

    if let Ok(id) = key.parse::<i64>() {
        return TransitionKind::from_id(id)
            .ok_or_else(|| SlideFxError::validation(format!("unknown transition id {id}")));
    }

    let alias = match key.as_str() {
        "crossfade" | "dissolve" => Some(TransitionKind::Fade),
        "circle" | "iris" => Some(TransitionKind::CircleCenter),
        "pixelate" | "pixels" => Some(TransitionKind::PixelateFine),
        "big_pixels" => Some(TransitionKind::PixelateCoarse),
        _ => None,
    };
    if let Some(kind) = alias {
        return Ok(kind);
    }

    TransitionKind::ALL
        .into_iter()
        .find(|k| k.name() == key)
        .ok_or_else(|| SlideFxError::validation(format!("unknown transition '{}'", s.trim())))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/catalog.rs"]
mod tests;
