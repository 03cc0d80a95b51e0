//! User-facing configuration as written in a config file.
//!
//! Every field is optional. Fields from earlier releases of the plugin
//! (`themeSelector`, `generateCustomVariants`, `createComponentClasses`,
//! `componentPrefix`, `tokenTypeMap`) are still accepted and folded into their
//! current counterparts by [`Config::from_options`](crate::Config::from_options).

use indexmap::IndexMap;
use serde::Deserialize;

use crate::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOptions {
    pub root_property_name: Option<String>,
    pub theme_pattern: Option<String>,

    pub color_prefix: Option<String>,
    pub spacing_prefix: Option<String>,
    pub shadow_prefix: Option<String>,
    pub number_prefix: Option<String>,

    pub theme_selector_type: Option<String>,
    pub theme_selector_property: Option<String>,

    pub custom_variants: Option<CustomVariantsOptions>,
    pub component_handling: Option<ComponentHandlingOptions>,
    pub utility_generation: Option<UtilityGenerationOptions>,

    pub component_layer: Option<String>,
    pub include_import: Option<bool>,
    pub import_path: Option<String>,
    pub indent_size: Option<usize>,

    pub token_type_mapping: Option<IndexMap<String, String>>,

    // Legacy fields
    pub theme_selector: Option<LegacyThemeSelector>,
    pub generate_custom_variants: Option<bool>,
    pub create_component_classes: Option<bool>,
    pub component_prefix: Option<String>,
    pub token_type_map: Option<IndexMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomVariantsOptions {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentHandlingOptions {
    pub enabled: Option<bool>,
    pub create_classes: Option<bool>,
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UtilityGenerationOptions {
    pub enabled: Option<bool>,
    pub prefix: Option<String>,
}

/// The old `themeSelector` field: either `"class"`/`"data"` or
/// `{ "type": ..., "property": ... }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyThemeSelector {
    Kind(String),
    Detailed {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        #[serde(default)]
        property: Option<String>,
    },
}

impl ConfigOptions {
    /// Parse options from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
