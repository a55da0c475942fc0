use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    effects::catalog::{TransitionKind, parse_transition_kind},
    foundation::core::Resolution,
    foundation::error::{SlideFxError, SlideFxResult},
    render::frame::RenderThreading,
    sampling::texture::FilterMode,
};

/// Id outside the catalog, used for numeric ids that cannot be represented.
pub const PASSTHROUGH_ID: i32 = -1;

/// Effect chosen by catalog name or by raw numeric id.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum EffectSelector {
    Id(i64),
    Name(String),
}

impl Default for EffectSelector {
    fn default() -> Self {
        Self::Name(TransitionKind::Fade.name().to_string())
    }
}

impl EffectSelector {
    /// Resolve to the id handed to the evaluator.
    ///
    /// Unknown names are an error. Numeric ids are never rejected: ids outside the
    /// catalog select the pass-through behavior, and ids too wide for `i32` become
    /// [`PASSTHROUGH_ID`].
    pub fn resolve(&self) -> SlideFxResult<i32> {
        match self {
            Self::Id(id) => Ok(i32::try_from(*id).unwrap_or_else(|_| {
                tracing::warn!(effect_id = *id, "effect id does not fit i32, using pass-through");
                PASSTHROUGH_ID
            })),
            Self::Name(name) => parse_transition_kind(name).map(TransitionKind::id),
        }
    }
}

/// JSON description of a single transition render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionConfig {
    pub surface: Resolution,
    /// Defaults to the dimensions of the `current` image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<Resolution>,
    pub current: PathBuf,
    pub next: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<PathBuf>,
    #[serde(default)]
    pub effect: EffectSelector,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub filter: FilterMode,
    #[serde(default = "default_threading")]
    pub threading: RenderThreading,
}

fn default_threading() -> RenderThreading {
    RenderThreading {
        parallel: true,
        threads: None,
    }
}

impl TransitionConfig {
    pub fn from_json_str(s: &str) -> SlideFxResult<Self> {
        serde_json::from_str(s).map_err(|e| SlideFxError::serde(e.to_string()))
    }

    pub fn from_path(path: &Path) -> SlideFxResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), ?cfg, "loaded transition config");
        Ok(cfg)
    }

    pub fn to_json_pretty(&self) -> SlideFxResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SlideFxError::serde(e.to_string()))
    }

    pub fn validate(&self) -> SlideFxResult<()> {
        self.surface.validate()?;
        if let Some(size) = self.image_size {
            size.validate()?;
        }

        let effect_id = self.effect.resolve()?;
        match TransitionKind::from_id(i64::from(effect_id)) {
            None => {
                tracing::warn!(
                    effect_id,
                    "effect id outside the catalog, current image passes through"
                );
            }
            Some(kind) if kind.uses_mask() && self.mask.is_none() => {
                tracing::warn!(
                    effect = %kind,
                    "effect reads a mask but none is configured, mask reads as black"
                );
            }
            Some(_) => {}
        }

        if !self.progress.is_finite() {
            return Err(SlideFxError::validation("progress must be finite"));
        }
        if !(0.0..=1.0).contains(&self.progress) {
            tracing::warn!(progress = self.progress, "progress outside [0, 1] is not clamped");
        }
        if !self.time.is_finite() {
            return Err(SlideFxError::validation("time must be finite"));
        }

        if let Some(n) = self.threading.threads
            && n == 0
        {
            return Err(SlideFxError::validation(
                "threading.threads must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// Pixel size of the output frame, rounding the surface to whole pixels.
    pub fn frame_size(&self) -> SlideFxResult<(u32, u32)> {
        fn px(v: f64) -> u32 {
            v.round().clamp(1.0, f64::from(u32::MAX)) as u32
        }
        self.surface.validate()?;
        Ok((px(self.surface.width), px(self.surface.height)))
    }

    /// Resolve image paths relative to the directory holding the config file.
    pub fn resolve_paths(&mut self, base: &Path) {
        fn join(base: &Path, p: &mut PathBuf) {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
        join(base, &mut self.current);
        join(base, &mut self.next);
        if let Some(mask) = self.mask.as_mut() {
            join(base, mask);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
