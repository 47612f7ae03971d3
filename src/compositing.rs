use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::geometry::{rgb_of, Fp, Rgb, Rgba};
use crate::utils::{chi_above, clamp01};

pub const DEFAULT_ALPHA_CUTOFF: Fp = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlphaMode {
    #[default]
    Opaque,
    Mask,
    Blend,
}

impl AlphaMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlphaMode::Opaque => "OPAQUE",
            AlphaMode::Mask => "MASK",
            AlphaMode::Blend => "BLEND",
        }
    }

    /// Whether the surface shader must be mixed with a transparent BSDF.
    pub fn needs_transparent_mix(&self) -> bool {
        !matches!(self, AlphaMode::Opaque)
    }
}

impl FromStr for AlphaMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPAQUE" => Ok(AlphaMode::Opaque),
            "MASK" => Ok(AlphaMode::Mask),
            "BLEND" => Ok(AlphaMode::Blend),
            other => Err(Error::UnknownAlphaMode(other.to_string())),
        }
    }
}

impl fmt::Display for AlphaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<gltf::material::AlphaMode> for AlphaMode {
    fn from(mode: gltf::material::AlphaMode) -> Self {
        match mode {
            gltf::material::AlphaMode::Opaque => AlphaMode::Opaque,
            gltf::material::AlphaMode::Mask => AlphaMode::Mask,
            gltf::material::AlphaMode::Blend => AlphaMode::Blend,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureSample {
    pub rgb: Rgb,
    pub alpha: Fp,
}

impl TextureSample {
    pub fn new(rgb: Rgb, alpha: Fp) -> Self {
        TextureSample { rgb, alpha }
    }

    pub fn white() -> Self {
        TextureSample {
            rgb: Rgb::new(1.0, 1.0, 1.0),
            alpha: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorCompositeInput {
    pub base_factor: Rgba,
    pub texture_sample: Option<TextureSample>,
    pub alpha_mode: AlphaMode,
    /// Only read in `AlphaMode::Mask`.
    pub alpha_cutoff: Fp,
}

impl Default for ColorCompositeInput {
    fn default() -> Self {
        ColorCompositeInput {
            base_factor: Rgba::new(1.0, 1.0, 1.0, 1.0),
            texture_sample: None,
            alpha_mode: AlphaMode::Opaque,
            alpha_cutoff: DEFAULT_ALPHA_CUTOFF,
        }
    }
}

impl ColorCompositeInput {
    pub fn new(base_factor: Rgba, alpha_mode: AlphaMode) -> Self {
        ColorCompositeInput {
            base_factor,
            alpha_mode,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_texture(mut self, sample: TextureSample) -> Self {
        self.texture_sample = Some(sample);
        self
    }

    #[must_use]
    pub fn with_cutoff(mut self, alpha_cutoff: Fp) -> Self {
        self.alpha_cutoff = alpha_cutoff;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorCompositeResult {
    pub color: Rgb,
    pub alpha_factor: Fp,
}

pub fn composite(input: &ColorCompositeInput) -> ColorCompositeResult {
    let texture = input.texture_sample.unwrap_or_else(TextureSample::white);
    let color = rgb_of(&input.base_factor).component_mul(&texture.rgb);
    let combined_alpha = input.base_factor.w * texture.alpha;
    let alpha_factor = match input.alpha_mode {
        AlphaMode::Opaque => 1.0,
        AlphaMode::Blend => clamp01(combined_alpha),
        AlphaMode::Mask => chi_above(combined_alpha, input.alpha_cutoff),
    };
    ColorCompositeResult {
        color,
        alpha_factor,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetallicRoughnessSample {
    pub metalness: Fp,
    pub roughness: Fp,
}

/// Metalness lives in the blue channel, roughness in the green one.
pub fn metallic_roughness(
    sample: &Rgb,
    metallic_factor: Fp,
    roughness_factor: Fp,
) -> MetallicRoughnessSample {
    MetallicRoughnessSample {
        metalness: sample.z * metallic_factor,
        roughness: sample.y * roughness_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_ignores_alpha() {
        let input = ColorCompositeInput::new(Rgba::new(0.2, 0.4, 0.6, 0.1), AlphaMode::Opaque);
        let result = composite(&input);
        assert_eq!(result.color, Rgb::new(0.2, 0.4, 0.6));
        assert_eq!(result.alpha_factor, 1.0);

        let textured = input.with_texture(TextureSample::new(Rgb::new(1.0, 1.0, 1.0), 0.0));
        assert_eq!(composite(&textured).alpha_factor, 1.0);
    }

    #[test]
    fn texture_multiplies_color() {
        let input = ColorCompositeInput::new(Rgba::new(0.5, 1.0, 0.25, 1.0), AlphaMode::Opaque)
            .with_texture(TextureSample::new(Rgb::new(0.5, 0.5, 1.0), 1.0));
        assert_eq!(composite(&input).color, Rgb::new(0.25, 0.5, 0.25));
    }

    #[test]
    fn blend_without_texture_uses_base_alpha() {
        let input = ColorCompositeInput::new(Rgba::new(1.0, 1.0, 1.0, 0.3), AlphaMode::Blend);
        assert_eq!(composite(&input).alpha_factor, 0.3);
    }

    #[test]
    fn blend_multiplies_and_clamps() {
        let input = ColorCompositeInput::new(Rgba::new(1.0, 1.0, 1.0, 0.5), AlphaMode::Blend)
            .with_texture(TextureSample::new(Rgb::new(1.0, 1.0, 1.0), 0.5));
        assert_eq!(composite(&input).alpha_factor, 0.25);

        let overdriven = ColorCompositeInput::new(Rgba::new(2.0, 1.0, 1.0, 1.5), AlphaMode::Blend)
            .with_texture(TextureSample::new(Rgb::new(1.0, 1.0, 1.0), 2.0));
        let result = composite(&overdriven);
        assert_eq!(result.alpha_factor, 1.0);
        // colour is not clamped
        assert_eq!(result.color.x, 2.0);
    }

    #[test]
    fn mask_cutoff_is_strict() {
        let at_cutoff = ColorCompositeInput::new(Rgba::new(1.0, 1.0, 1.0, 0.5), AlphaMode::Mask)
            .with_cutoff(0.5);
        assert_eq!(composite(&at_cutoff).alpha_factor, 0.0);

        let above = at_cutoff.with_cutoff(0.49);
        assert_eq!(composite(&above).alpha_factor, 1.0);

        let textured = ColorCompositeInput::new(Rgba::new(1.0, 1.0, 1.0, 0.8), AlphaMode::Mask)
            .with_texture(TextureSample::new(Rgb::new(1.0, 1.0, 1.0), 0.5));
        assert_eq!(composite(&textured).alpha_factor, 0.0);
    }

    #[test]
    fn default_cutoff() {
        let input = ColorCompositeInput::new(Rgba::new(1.0, 1.0, 1.0, 0.6), AlphaMode::Mask);
        assert_eq!(input.alpha_cutoff, DEFAULT_ALPHA_CUTOFF);
        assert_eq!(composite(&input).alpha_factor, 1.0);
    }

    #[test]
    fn alpha_mode_strings() {
        assert_eq!("OPAQUE".parse::<AlphaMode>().unwrap(), AlphaMode::Opaque);
        assert_eq!("MASK".parse::<AlphaMode>().unwrap(), AlphaMode::Mask);
        assert_eq!("BLEND".parse::<AlphaMode>().unwrap(), AlphaMode::Blend);
        assert!(matches!(
            "mask".parse::<AlphaMode>(),
            Err(Error::UnknownAlphaMode(_))
        ));
        assert_eq!(AlphaMode::Blend.to_string(), "BLEND");
        assert!(!AlphaMode::Opaque.needs_transparent_mix());
        assert!(AlphaMode::Mask.needs_transparent_mix());
    }

    #[test]
    fn metallic_roughness_channels() {
        let sample = metallic_roughness(&Rgb::new(0.9, 0.5, 0.25), 0.5, 0.8);
        assert_eq!(sample.metalness, 0.125);
        assert_eq!(sample.roughness, 0.4);
    }
}
