use std::f64::consts::PI;

use crate::error::{Error, Result};
use crate::geometry::{one_extend, Fp, Rgb, Rgba, FULL_TURN};

/// Luminous efficacy (lm/W) of an ideal monochromatic 555 nm source.
pub const PEAK_LUMINOUS_EFFICACY: Fp = 683.0;

pub const IDEAL_EFFICACY: Fp = 1.0;

/// Efficacy factor of a tungsten incandescent bulb relative to the 683 lm/W peak.
pub const INCANDESCENT_BULB_EFFICACY: Fp = 0.0249;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Point,
    Spot {
        inner_cone_angle: Fp,
        outer_cone_angle: Fp,
    },
    Directional,
}

impl LightKind {
    pub fn default_name(&self) -> &'static str {
        match self {
            LightKind::Point => "Point",
            LightKind::Spot { .. } => "Spot",
            LightKind::Directional => "Directional",
        }
    }
}

// intensity: candela for point/spot, lux for directional
#[derive(Clone, Debug, PartialEq)]
pub struct LightDescriptor {
    pub name: Option<String>,
    pub kind: LightKind,
    pub color: Rgb,
    pub intensity: Fp,
}

impl LightDescriptor {
    pub fn point(color: Rgb, intensity: Fp) -> Self {
        LightDescriptor {
            name: None,
            kind: LightKind::Point,
            color,
            intensity,
        }
    }

    pub fn spot(color: Rgb, intensity: Fp, inner_cone_angle: Fp, outer_cone_angle: Fp) -> Self {
        LightDescriptor {
            name: None,
            kind: LightKind::Spot {
                inner_cone_angle,
                outer_cone_angle,
            },
            color,
            intensity,
        }
    }

    pub fn directional(color: Rgb, intensity: Fp) -> Self {
        LightDescriptor {
            name: None,
            kind: LightKind::Directional,
            color,
            intensity,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.kind.default_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiometricResult {
    pub power_watts: Fp,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotShape {
    pub size: Fp,
    /// `inner / outer`, in [0, 1] for well-formed lights.
    pub blend: Fp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightPlan {
    pub name: String,
    pub kind: LightKind,
    pub emission_color: Rgba,
    pub strength_watts: Fp,
    pub spot: Option<SpotShape>,
}

fn check_efficacy(efficacy_factor: Fp) -> Result<()> {
    if efficacy_factor > 0.0 && efficacy_factor <= 1.0 {
        Ok(())
    } else {
        Err(Error::invalid(
            "efficacy_factor",
            efficacy_factor,
            "must lie in (0, 1]",
        ))
    }
}

fn check_outer_cone(outer_cone_angle: Fp) -> Result<()> {
    if outer_cone_angle > 0.0 && outer_cone_angle <= FULL_TURN {
        Ok(())
    } else {
        Err(Error::invalid(
            "outer_cone_angle",
            outer_cone_angle,
            "must lie in (0, 2π]",
        ))
    }
}

fn check_solid_angle(solid_angle: Fp) -> Result<()> {
    if solid_angle >= 0.0 && solid_angle.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(
            "solid_angle",
            solid_angle,
            "must be finite and non-negative",
        ))
    }
}

/// Watts emitted by a source of `intensity_candela` spread over `solid_angle` steradians.
pub fn point_or_directional_power(
    intensity_candela: Fp,
    efficacy_factor: Fp,
    solid_angle: Fp,
) -> Result<Fp> {
    check_efficacy(efficacy_factor)?;
    check_solid_angle(solid_angle)?;
    let lumens = intensity_candela * solid_angle;
    Ok(lumens / (efficacy_factor * PEAK_LUMINOUS_EFFICACY))
}

pub fn directional_power(illuminance_lux: Fp, efficacy_factor: Fp) -> Result<Fp> {
    check_efficacy(efficacy_factor)?;
    Ok(illuminance_lux / (efficacy_factor * PEAK_LUMINOUS_EFFICACY))
}

pub fn point_light_solid_angle() -> Fp {
    4.0 * PI
}

pub fn spot_light_solid_angle(outer_cone_angle: Fp) -> Result<Fp> {
    check_outer_cone(outer_cone_angle)?;
    Ok(FULL_TURN * (1.0 - (outer_cone_angle / 2.0).cos()))
}

pub fn spot_blend(inner_cone_angle: Fp, outer_cone_angle: Fp) -> Result<Fp> {
    if !(outer_cone_angle > 0.0 && outer_cone_angle.is_finite()) {
        return Err(Error::invalid(
            "outer_cone_angle",
            outer_cone_angle,
            "must be positive to derive the spot blend",
        ));
    }
    Ok(inner_cone_angle / outer_cone_angle)
}

pub fn light_power(light: &LightDescriptor, efficacy_factor: Fp) -> Result<RadiometricResult> {
    if !(light.intensity >= 0.0 && light.intensity.is_finite()) {
        return Err(Error::invalid(
            "intensity",
            light.intensity,
            "must be finite and non-negative",
        ));
    }
    let power_watts = match light.kind {
        LightKind::Point => point_or_directional_power(
            light.intensity,
            efficacy_factor,
            point_light_solid_angle(),
        )?,
        LightKind::Spot {
            outer_cone_angle, ..
        } => point_or_directional_power(
            light.intensity,
            efficacy_factor,
            spot_light_solid_angle(outer_cone_angle)?,
        )?,
        LightKind::Directional => directional_power(light.intensity, efficacy_factor)?,
    };
    Ok(RadiometricResult { power_watts })
}

pub fn convert_light(light: &LightDescriptor, efficacy_factor: Fp) -> Result<LightPlan> {
    let power = light_power(light, efficacy_factor)?;
    let spot = match light.kind {
        LightKind::Spot {
            inner_cone_angle,
            outer_cone_angle,
        } => Some(SpotShape {
            size: outer_cone_angle,
            blend: spot_blend(inner_cone_angle, outer_cone_angle)?,
        }),
        _ => None,
    };
    log::debug!(
        "light {:?}: {} -> {} W",
        light.display_name(),
        light.intensity,
        power.power_watts
    );
    Ok(LightPlan {
        name: light.display_name().to_string(),
        kind: light.kind,
        emission_color: one_extend(light.color),
        strength_watts: power.power_watts,
        spot,
    })
}
