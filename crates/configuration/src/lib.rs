use crate::error::ConfigError;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Assumptions, Bounds, Config, GoalHorizons, GrowthLimits, MortgageLimits};

/// Prefix for environment overrides, e.g. `FINCALC__GROWTH__MAX_YEARS=60`.
pub const ENV_PREFIX: &str = "FINCALC";

/// Loads the bounds table and assumptions.
///
/// Sources are layered in order: the built-in defaults, then the TOML file at
/// `path` (if given), then `FINCALC__*` environment variables. The merged result
/// is deserialized into our strongly-typed `Config` and checked for consistency.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let defaults = config::Config::try_from(&Config::default())?;

    let mut builder = config::Config::builder().add_source(defaults);
    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "Reading configuration file.");
        builder = builder.add_source(config::File::from(path).required(true));
    }
    let builder = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}

impl Config {
    /// Rejects tables the validators could never satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.growth;
        let m = &self.mortgage;
        let ranges = [
            ("growth.principal", g.principal),
            ("growth.contribution", g.contribution),
            ("growth.annual_rate", g.annual_rate),
            ("growth.inflation_rate", g.inflation_rate),
            ("growth.tax_rate", g.tax_rate),
            ("mortgage.home_price", m.home_price),
            ("mortgage.annual_rate", m.annual_rate),
            ("mortgage.property_tax_annual", m.property_tax_annual),
            ("mortgage.insurance_annual", m.insurance_annual),
            ("mortgage.mortgage_insurance_monthly", m.mortgage_insurance_monthly),
            ("mortgage.hoa_monthly", m.hoa_monthly),
        ];

        for (name, bounds) in ranges {
            if bounds.min > bounds.max {
                return Err(ConfigError::ValidationError(format!(
                    "{}: min ({}) is greater than max ({})",
                    name, bounds.min, bounds.max
                )));
            }
            if bounds.min < Decimal::ZERO {
                return Err(ConfigError::ValidationError(format!(
                    "{}: min ({}) must not be negative",
                    name, bounds.min
                )));
            }
        }

        if g.max_years == 0 || m.max_term_years == 0 {
            return Err(ConfigError::ValidationError(
                "max_years and max_term_years must be at least 1".to_string(),
            ));
        }

        if m.min_down_payment_pct < Decimal::ZERO || m.min_down_payment_pct >= Decimal::ONE_HUNDRED {
            return Err(ConfigError::ValidationError(
                "mortgage.min_down_payment_pct must be in [0, 100)".to_string(),
            ));
        }

        let w = self.assumptions.withdrawal_rate;
        if w <= Decimal::ZERO || w > Decimal::ONE_HUNDRED {
            return Err(ConfigError::ValidationError(
                "assumptions.withdrawal_rate must be in (0, 100]".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line flag for pointing the loader at a configuration file.
#[cfg(feature = "clap")]
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Path to a TOML file overriding the built-in bounds table.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[cfg(feature = "clap")]
impl ConfigArgs {
    pub fn load(&self) -> Result<Config, ConfigError> {
        load_config(self.config.as_deref())
    }
}

/// Looks for `fincalc.toml` in the working directory.
pub fn default_config_path() -> Option<PathBuf> {
    let candidate = PathBuf::from("fincalc.toml");
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::GoalTag;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn built_in_defaults_are_consistent() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.growth.max_years, 50);
        assert_eq!(config.assumptions.withdrawal_rate, dec!(4));
        assert_eq!(config.assumptions.default_horizons.for_goal(GoalTag::Education), 18);
    }

    #[test]
    fn loading_without_a_file_yields_the_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn file_overrides_only_the_named_values() {
        let file = write_toml(
            r#"
            [growth]
            max_years = 60

            [mortgage]
            min_down_payment_pct = 5

            [mortgage.annual_rate]
            min = 0
            max = 15
            "#,
        );
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.growth.max_years, 60);
        assert_eq!(config.mortgage.min_down_payment_pct, dec!(5));
        assert_eq!(config.mortgage.annual_rate.max, dec!(15));
        assert_eq!(config.growth.principal, Config::default().growth.principal);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let mut config = Config::default();
        config.growth.annual_rate = Bounds::new(dec!(10), dec!(5));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("growth.annual_rate"));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn bounds_clamp_into_range() {
        let bounds = Bounds::new(dec!(1), dec!(50));
        assert_eq!(bounds.clamp(dec!(0)), dec!(1));
        assert_eq!(bounds.clamp(dec!(75)), dec!(50));
        assert_eq!(bounds.clamp(dec!(12.5)), dec!(12.5));
        assert!(bounds.contains(dec!(50)));
        assert!(!bounds.contains(dec!(50.01)));
    }
}
