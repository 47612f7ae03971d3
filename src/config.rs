use crate::compositing::DEFAULT_ALPHA_CUTOFF;
use crate::error::{Error, Result};
use crate::geometry::Fp;
use crate::photometry::IDEAL_EFFICACY;

/// Knobs for turning a glTF document into light and material plans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImportSettings {
    /// Fraction of the 683 lm/W peak efficacy the simulated sources reach.
    pub efficacy_factor: Fp,
    /// Cutoff for `MASK` materials that do not declare `alphaCutoff`.
    pub default_alpha_cutoff: Fp,
}

impl Default for ImportSettings {
    fn default() -> Self {
        ImportSettings {
            efficacy_factor: IDEAL_EFFICACY,
            default_alpha_cutoff: DEFAULT_ALPHA_CUTOFF,
        }
    }
}

impl ImportSettings {
    pub fn with_efficacy_factor(mut self, efficacy_factor: Fp) -> Result<Self> {
        if !(efficacy_factor > 0.0 && efficacy_factor <= 1.0) {
            return Err(Error::InvalidSetting(format!(
                "efficacy factor {efficacy_factor} is outside (0, 1]"
            )));
        }
        self.efficacy_factor = efficacy_factor;
        Ok(self)
    }

    pub fn with_default_alpha_cutoff(mut self, alpha_cutoff: Fp) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha_cutoff) {
            return Err(Error::InvalidSetting(format!(
                "alpha cutoff {alpha_cutoff} is outside [0, 1]"
            )));
        }
        self.default_alpha_cutoff = alpha_cutoff;
        Ok(self)
    }

    /// Positional command-line arguments after the input path: `[efficacy] [alpha_cutoff]`.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut settings = ImportSettings::default();
        if let Some(efficacy) = args.first() {
            settings = settings.with_efficacy_factor(parse_number("efficacy", efficacy)?)?;
        }
        if let Some(cutoff) = args.get(1) {
            settings = settings.with_default_alpha_cutoff(parse_number("alpha cutoff", cutoff)?)?;
        }
        Ok(settings)
    }
}

fn parse_number(what: &str, token: &str) -> Result<Fp> {
    token
        .trim()
        .parse::<Fp>()
        .map_err(|e| Error::InvalidSetting(format!("{what} {token:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = ImportSettings::default();
        assert_eq!(settings.efficacy_factor, 1.0);
        assert_eq!(settings.default_alpha_cutoff, 0.5);
    }

    #[test]
    fn from_args() {
        let settings = ImportSettings::from_args(&["0.0249".to_string()]).unwrap();
        assert_eq!(settings.efficacy_factor, 0.0249);
        assert_eq!(settings.default_alpha_cutoff, 0.5);

        let settings =
            ImportSettings::from_args(&["1".to_string(), " 0.25 ".to_string()]).unwrap();
        assert_eq!(settings.default_alpha_cutoff, 0.25);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            ImportSettings::from_args(&["zero".to_string()]),
            Err(Error::InvalidSetting(_))
        ));
        assert!(ImportSettings::from_args(&["0".to_string()]).is_err());
        assert!(ImportSettings::default().with_efficacy_factor(1.01).is_err());
        assert!(ImportSettings::default()
            .with_default_alpha_cutoff(-0.1)
            .is_err());
        assert!(ImportSettings::default()
            .with_default_alpha_cutoff(Fp::NAN)
            .is_err());
    }
}
