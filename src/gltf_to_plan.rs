use std::path::Path;

use gltf::khr_lights_punctual::Kind;
use gltf::texture::Texture;
use gltf::Document;
use rayon::prelude::*;

use crate::compositing::{composite, AlphaMode, ColorCompositeInput, ColorCompositeResult};
use crate::config::ImportSettings;
use crate::error::Result;
use crate::geometry::{rgb_from_f32, rgba_from_f32, Fp, Rgba};
use crate::photometry::{convert_light, LightDescriptor, LightPlan};
use crate::sampler::{ResolvedSampler, SamplerCodes};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureRole {
    BaseColor,
    MetallicRoughness,
    Normal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSpace {
    Color,
    NonColor,
}

impl TextureRole {
    pub fn label(&self) -> &'static str {
        match self {
            TextureRole::BaseColor => "Base Color Texture",
            TextureRole::MetallicRoughness => "MetallicRoughness Texture",
            TextureRole::Normal => "Normal Texture",
        }
    }

    pub fn color_space(&self) -> ColorSpace {
        match self {
            TextureRole::Normal => ColorSpace::NonColor,
            _ => ColorSpace::Color,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TexturePlan {
    pub role: TextureRole,
    pub label: &'static str,
    pub color_space: ColorSpace,
    pub image_index: usize,
    pub uv_map: String,
    pub sampler: ResolvedSampler,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialPlan {
    pub name: String,
    /// Output of the colour group before any texel is sampled.
    pub color_group: ColorCompositeResult,
    pub base_color_factor: Rgba,
    pub alpha_mode: AlphaMode,
    pub alpha_cutoff: Option<Fp>,
    pub transparent_mix: bool,
    pub metallic_factor: Fp,
    pub roughness_factor: Fp,
    pub normal_strength: Option<Fp>,
    pub textures: Vec<TexturePlan>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportPlan {
    pub lights: Vec<LightPlan>,
    pub materials: Vec<MaterialPlan>,
    pub skipped_lights: usize,
}

pub fn load_plan<P: AsRef<Path>>(path: P, settings: &ImportSettings) -> Result<ImportPlan> {
    log::info!("opening {}", path.as_ref().display());
    let gltf = gltf::Gltf::open(path)?;
    Ok(plan_document(&gltf.document, settings))
}

pub fn plan_slice(bytes: &[u8], settings: &ImportSettings) -> Result<ImportPlan> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    Ok(plan_document(&gltf.document, settings))
}

pub fn plan_document(gltf: &Document, settings: &ImportSettings) -> ImportPlan {
    let descriptors = read_lights(gltf);
    let (lights, skipped_lights) = convert_lights(&descriptors, settings);
    let materials = gltf
        .materials()
        .map(|material| read_material(&material, settings))
        .collect::<Vec<_>>();
    log::info!(
        "planned {} lights ({} skipped), {} materials",
        lights.len(),
        skipped_lights,
        materials.len()
    );
    ImportPlan {
        lights,
        materials,
        skipped_lights,
    }
}

pub fn read_lights(gltf: &Document) -> Vec<LightDescriptor> {
    let Some(lights) = gltf.lights() else {
        return vec![];
    };
    lights
        .map(|light| {
            let color = rgb_from_f32(light.color());
            let intensity = light.intensity() as Fp;
            let descriptor = match light.kind() {
                Kind::Point => LightDescriptor::point(color, intensity),
                Kind::Directional => LightDescriptor::directional(color, intensity),
                Kind::Spot {
                    inner_cone_angle,
                    outer_cone_angle,
                } => LightDescriptor::spot(
                    color,
                    intensity,
                    inner_cone_angle as Fp,
                    outer_cone_angle as Fp,
                ),
            };
            match light.name() {
                Some(name) => descriptor.with_name(name),
                None => descriptor,
            }
        })
        .collect()
}

/// Converts every light, dropping the ones whose parameters are out of domain.
pub fn convert_lights(
    descriptors: &[LightDescriptor],
    settings: &ImportSettings,
) -> (Vec<LightPlan>, usize) {
    let converted = descriptors
        .par_iter()
        .map(|descriptor| convert_light(descriptor, settings.efficacy_factor))
        .collect::<Vec<_>>();
    let mut plans = Vec::with_capacity(converted.len());
    let mut skipped = 0;
    for (descriptor, result) in descriptors.iter().zip(converted) {
        match result {
            Ok(plan) => plans.push(plan),
            Err(e) => {
                log::warn!("skipping light {:?}: {}", descriptor.display_name(), e);
                skipped += 1;
            }
        }
    }
    (plans, skipped)
}

fn sampler_codes(texture: &Texture) -> SamplerCodes {
    let sampler = texture.sampler();
    SamplerCodes {
        mag_filter: sampler.mag_filter().map(|f| f.as_gl_enum()),
        min_filter: sampler.min_filter().map(|f| f.as_gl_enum()),
        wrap_s: Some(sampler.wrap_s().as_gl_enum()),
        wrap_t: Some(sampler.wrap_t().as_gl_enum()),
    }
}

fn texture_plan(role: TextureRole, texture: &Texture, tex_coord: u32) -> TexturePlan {
    TexturePlan {
        role,
        label: role.label(),
        color_space: role.color_space(),
        image_index: texture.source().index(),
        uv_map: format!("TEXCOORD_{}", tex_coord),
        sampler: sampler_codes(texture).resolve(),
    }
}

fn read_material(material: &gltf::Material, settings: &ImportSettings) -> MaterialPlan {
    let name = match material.name() {
        Some(name) => name.to_string(),
        None => format!("Material{}", material.index().unwrap_or_default()),
    };
    let pbr = material.pbr_metallic_roughness();
    let base_color_factor = rgba_from_f32(pbr.base_color_factor());
    let alpha_mode = AlphaMode::from(material.alpha_mode());
    let alpha_cutoff = match alpha_mode {
        AlphaMode::Mask => Some(
            material
                .alpha_cutoff()
                .map(|c| c as Fp)
                .unwrap_or(settings.default_alpha_cutoff),
        ),
        _ => None,
    };

    let mut input = ColorCompositeInput::new(base_color_factor, alpha_mode);
    if let Some(cutoff) = alpha_cutoff {
        input = input.with_cutoff(cutoff);
    }

    let mut textures = vec![];
    if let Some(info) = pbr.base_color_texture() {
        textures.push(texture_plan(
            TextureRole::BaseColor,
            &info.texture(),
            info.tex_coord(),
        ));
    }
    if let Some(info) = pbr.metallic_roughness_texture() {
        textures.push(texture_plan(
            TextureRole::MetallicRoughness,
            &info.texture(),
            info.tex_coord(),
        ));
    }
    let normal_strength = material.normal_texture().map(|normal| {
        textures.push(texture_plan(
            TextureRole::Normal,
            &normal.texture(),
            normal.tex_coord(),
        ));
        normal.scale() as Fp
    });

    log::debug!(
        "material {:?}: {} with {} textures",
        name,
        alpha_mode,
        textures.len()
    );
    MaterialPlan {
        name,
        color_group: composite(&input),
        base_color_factor,
        alpha_mode,
        alpha_cutoff,
        transparent_mix: alpha_mode.needs_transparent_mix(),
        metallic_factor: pbr.metallic_factor() as Fp,
        roughness_factor: pbr.roughness_factor() as Fp,
        normal_strength,
        textures,
    }
}
