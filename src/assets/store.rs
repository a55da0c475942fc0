use crate::{
    assets::decode::load_sampler,
    config::model::TransitionConfig,
    effects::evaluate::TransitionInputs,
    foundation::core::Resolution,
    foundation::error::SlideFxResult,
    sampling::sampler::Sampler,
    sampling::texture::ImageSampler,
};

/// Decoded images for one transition, loaded up front so rendering does no IO.
#[derive(Clone, Debug)]
pub struct PreparedImages {
    pub current: ImageSampler,
    pub next: ImageSampler,
    pub mask: Option<ImageSampler>,
    pub image_size: Resolution,
    pub surface: Resolution,
}

impl PreparedImages {
    /// Load every image a config names. Paths are used as given; see
    /// [`TransitionConfig::resolve_paths`].
    pub fn prepare(cfg: &TransitionConfig) -> SlideFxResult<Self> {
        cfg.validate()?;

        let current = load_sampler(&cfg.current, cfg.filter)?;
        let next = load_sampler(&cfg.next, cfg.filter)?;
        let mask = cfg
            .mask
            .as_deref()
            .map(|p| load_sampler(p, cfg.filter))
            .transpose()?;

        if current.dimensions() != next.dimensions() {
            let (cw, ch) = current.dimensions();
            let (nw, nh) = next.dimensions();
            tracing::warn!(
                current = %format!("{cw}x{ch}"),
                next = %format!("{nw}x{nh}"),
                "current and next images differ in size, cover mapping uses one image size for both"
            );
        }

        let image_size = match cfg.image_size {
            Some(size) => size,
            None => current.resolution()?,
        };

        Ok(Self {
            current,
            next,
            mask,
            image_size,
            surface: cfg.surface,
        })
    }

    pub fn inputs(&self) -> TransitionInputs<'_> {
        TransitionInputs {
            current: &self.current,
            next: &self.next,
            mask: self.mask.as_ref().map(|m| m as &dyn Sampler),
            surface: self.surface,
            image: self.image_size,
        }
    }
}
