extern crate nalgebra as na;

pub mod compositing;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gltf_to_plan;
pub mod photometry;
pub mod sampler;
pub mod utils;


pub use compositing::{
    composite, AlphaMode, ColorCompositeInput, ColorCompositeResult, TextureSample,
};
pub use config::ImportSettings;
pub use error::{Error, Result};
pub use gltf_to_plan::{load_plan, plan_document, plan_slice, ImportPlan, MaterialPlan};
pub use photometry::{
    convert_light, directional_power, point_light_solid_angle, point_or_directional_power,
    spot_blend, spot_light_solid_angle, LightDescriptor, LightKind, LightPlan, RadiometricResult,
};
pub use sampler::{resolve_filter, resolve_wrap, FilterMode, SamplerCodes, WrapMode};
