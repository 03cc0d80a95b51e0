//! tokenwind configuration
//!
//! Turns user-supplied options (JSON or TOML, all fields optional, legacy
//! names accepted) into one validated [`Config`]. Construction is the only
//! place the formatter can fail: everything downstream treats the config as
//! read-only and trusted.
//!
//! ```text
//! config file → ConfigOptions → Config::from_options() → Config
//! ```

pub mod config;
pub mod options;

pub use config::{
    ComponentHandling, Config, CustomVariants, ThemeSelector, ThemeSelectorKind,
    UtilityGeneration,
};
pub use options::{
    ComponentHandlingOptions, ConfigOptions, CustomVariantsOptions, LegacyThemeSelector,
    UtilityGenerationOptions,
};

/// Configuration error. Fatal to the build.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid themeSelector type: {0}. Must be one of: class, data")]
    InvalidThemeSelector(String),

    #[error("{0} must be a non-empty string")]
    EmptyField(&'static str),

    #[error("Config parse error: {0}")]
    Parse(String),
}
