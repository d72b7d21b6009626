use crate::Result;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Model validation and mutability policy.
///
/// The defaults describe a mutable model that ignores unknown input keys.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Whether instance fields may be reassigned
    pub allow_mutation: bool,

    /// Whether assignments are validated. Field-level `allow_mutation` is only
    /// enforced when this is set.
    pub validate_assignment: bool,

    /// How input keys that match no field are handled
    pub extra: Extra,

    /// Whether instances can be loaded from storage records
    pub orm_mode: bool,

    /// Whether aliased fields also accept their field name on input
    pub populate_by_name: bool,
}

/// Handling of input keys that match no field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extra {
    /// Unknown keys are dropped
    #[default]
    Ignore,

    /// Unknown keys are kept on the instance
    Allow,

    /// Unknown keys fail validation
    Forbid,
}

const CONFIG_FILE: &str = "config/fieldkit.toml";

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            allow_mutation: true,
            validate_assignment: false,
            extra: Extra::Ignore,
            orm_mode: false,
            populate_by_name: false,
        }
    }
}

impl ModelConfig {
    /// Configuration for models loaded from storage records.
    pub fn orm() -> Self {
        Self {
            orm_mode: true,
            ..Self::default()
        }
    }

    /// Configuration for create/update input: immutable, and unknown keys
    /// are rejected.
    pub fn crud() -> Self {
        Self {
            allow_mutation: false,
            extra: Extra::Forbid,
            ..Self::default()
        }
    }

    /// Loads the `model` section from `config/fieldkit.toml` (optional) and
    /// `FIELDKIT__MODEL__*` environment variables. Missing keys keep their
    /// defaults.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix("FIELDKIT").separator("__"))
            .build()
            .map_err(anyhow::Error::from)?;

        Self::from_settings(&settings)
    }

    /// Reads the `model` section of a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .map_err(anyhow::Error::from)?;

        Self::from_settings(&settings)
    }

    fn from_settings(settings: &Config) -> Result<Self> {
        match settings.get::<ModelConfig>("model") {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(err) => Err(anyhow::Error::from(err).into()),
        }
    }
}
