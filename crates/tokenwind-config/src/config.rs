//! The validated configuration consumed by the engine and the CSS assembler.

use indexmap::IndexMap;

use crate::options::{ConfigOptions, LegacyThemeSelector};
use crate::ConfigError;

/// How theme variants are selected in the generated CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSelectorKind {
    /// `.dark`
    Class,
    /// `[data-theme="dark"]`
    Data,
}

impl ThemeSelectorKind {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "class" => Ok(Self::Class),
            "data" => Ok(Self::Data),
            other => Err(ConfigError::InvalidThemeSelector(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSelector {
    pub kind: ThemeSelectorKind,
    /// Attribute suffix for the data strategy (`theme` → `data-theme`).
    pub property: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomVariants {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentHandling {
    /// Process `component` tokens at all.
    pub enabled: bool,
    /// Emit the component class layer.
    pub create_classes: bool,
    /// Class name prefix.
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityGeneration {
    pub enabled: bool,
    /// Prepended to every `@utility` name.
    pub prefix: String,
}

/// Validated formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root_property_name: String,
    pub theme_pattern: String,

    pub color_prefix: String,
    pub spacing_prefix: String,
    pub shadow_prefix: String,
    pub number_prefix: String,

    pub theme_selector: ThemeSelector,
    pub custom_variants: CustomVariants,
    pub component_handling: ComponentHandling,
    pub utility_generation: UtilityGeneration,

    pub component_layer: String,
    pub include_import: bool,
    pub import_path: String,
    pub indent_size: usize,

    /// Custom token type → built-in type or category.
    pub token_type_mapping: IndexMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_property_name: "_".into(),
            theme_pattern: "theme-content".into(),
            color_prefix: "color".into(),
            spacing_prefix: "spacing".into(),
            shadow_prefix: "shadow".into(),
            number_prefix: String::new(),
            theme_selector: ThemeSelector {
                kind: ThemeSelectorKind::Data,
                property: "theme".into(),
            },
            custom_variants: CustomVariants { enabled: false },
            component_handling: ComponentHandling {
                enabled: true,
                create_classes: false,
                prefix: "c-".into(),
            },
            utility_generation: UtilityGeneration {
                enabled: true,
                prefix: String::new(),
            },
            component_layer: "components".into(),
            include_import: true,
            import_path: "tailwindcss".into(),
            indent_size: 2,
            token_type_mapping: IndexMap::new(),
        }
    }
}

impl Config {
    /// Apply defaults, fold legacy fields into current ones, and validate.
    ///
    /// Current fields take precedence over legacy ones when both are set.
    pub fn from_options(opts: ConfigOptions) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let (legacy_kind, legacy_property) = match opts.theme_selector {
            Some(LegacyThemeSelector::Kind(kind)) => (Some(kind), None),
            Some(LegacyThemeSelector::Detailed { kind, property }) => (kind, property),
            None => (None, None),
        };
        let selector_kind = opts
            .theme_selector_type
            .or(legacy_kind)
            .map(|kind| ThemeSelectorKind::parse(&kind))
            .transpose()?
            .unwrap_or(defaults.theme_selector.kind);
        let selector_property = opts
            .theme_selector_property
            .or(legacy_property)
            .unwrap_or(defaults.theme_selector.property);

        let custom_variants = CustomVariants {
            enabled: opts
                .custom_variants
                .and_then(|cv| cv.enabled)
                .or(opts.generate_custom_variants)
                .unwrap_or(defaults.custom_variants.enabled),
        };

        let components = opts.component_handling.unwrap_or_default();
        let component_handling = ComponentHandling {
            enabled: components
                .enabled
                .unwrap_or(defaults.component_handling.enabled),
            create_classes: components
                .create_classes
                .or(opts.create_component_classes)
                .unwrap_or(defaults.component_handling.create_classes),
            prefix: components
                .prefix
                .or(opts.component_prefix)
                .unwrap_or(defaults.component_handling.prefix),
        };

        let utilities = opts.utility_generation.unwrap_or_default();
        let utility_generation = UtilityGeneration {
            enabled: utilities
                .enabled
                .unwrap_or(defaults.utility_generation.enabled),
            prefix: utilities
                .prefix
                .unwrap_or(defaults.utility_generation.prefix),
        };

        let token_type_mapping = opts
            .token_type_mapping
            .or(opts.token_type_map)
            .unwrap_or_default();

        let config = Config {
            root_property_name: opts
                .root_property_name
                .unwrap_or(defaults.root_property_name),
            theme_pattern: opts.theme_pattern.unwrap_or(defaults.theme_pattern),
            color_prefix: opts.color_prefix.unwrap_or(defaults.color_prefix),
            spacing_prefix: opts.spacing_prefix.unwrap_or(defaults.spacing_prefix),
            shadow_prefix: opts.shadow_prefix.unwrap_or(defaults.shadow_prefix),
            number_prefix: opts.number_prefix.unwrap_or(defaults.number_prefix),
            theme_selector: ThemeSelector {
                kind: selector_kind,
                property: selector_property,
            },
            custom_variants,
            component_handling,
            utility_generation,
            component_layer: opts.component_layer.unwrap_or(defaults.component_layer),
            include_import: opts.include_import.unwrap_or(defaults.include_import),
            import_path: opts.import_path.unwrap_or(defaults.import_path),
            indent_size: opts.indent_size.unwrap_or(defaults.indent_size),
            token_type_mapping,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.root_property_name.is_empty() {
            return Err(ConfigError::EmptyField("rootPropertyName"));
        }
        if self.theme_pattern.is_empty() {
            return Err(ConfigError::EmptyField("themePattern"));
        }
        if self.theme_selector.property.is_empty()
            && self.theme_selector.kind == ThemeSelectorKind::Data
        {
            return Err(ConfigError::EmptyField("themeSelectorProperty"));
        }
        Ok(())
    }

    /// Selector for a theme variant's rule block.
    pub fn theme_selector(&self, variant: &str) -> String {
        match self.theme_selector.kind {
            ThemeSelectorKind::Class => format!(".{variant}"),
            ThemeSelectorKind::Data => {
                format!("[data-{}=\"{variant}\"]", self.theme_selector.property)
            }
        }
    }

    /// Selector argument of the `@custom-variant` declaration for a variant.
    pub fn custom_variant_selector(&self, variant: &str) -> String {
        match self.theme_selector.kind {
            ThemeSelectorKind::Class => format!("&:where(.{variant}, .{variant} *)"),
            ThemeSelectorKind::Data => {
                let attr = format!("[data-{}={variant}]", self.theme_selector.property);
                format!("&:where({attr}, {attr} *)")
            }
        }
    }

    /// Target of a custom token type in the type mapping.
    pub fn mapped_type(&self, tag: &str) -> Option<&str> {
        self.token_type_mapping.get(tag).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ComponentHandlingOptions, CustomVariantsOptions};
    use pretty_assertions::assert_eq;

    fn from_json(json: &str) -> Result<Config, ConfigError> {
        Config::from_options(ConfigOptions::from_json_str(json).unwrap())
    }

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn test_defaults() {
        let config = Config::from_options(ConfigOptions::default()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.root_property_name, "_");
        assert_eq!(config.theme_pattern, "theme-content");
        assert_eq!(config.theme_selector.kind, ThemeSelectorKind::Data);
        assert!(config.include_import);
        assert!(!config.custom_variants.enabled);
        assert!(!config.component_handling.create_classes);
    }

    #[test]
    fn test_overrides() {
        let config = from_json(
            r#"{"rootPropertyName": "default", "colorPrefix": "c", "indentSize": 4, "importPath": "tw"}"#,
        )
        .unwrap();
        assert_eq!(config.root_property_name, "default");
        assert_eq!(config.color_prefix, "c");
        assert_eq!(config.indent_size, 4);
        assert_eq!(config.import_path, "tw");
        assert_eq!(config.spacing_prefix, "spacing");
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn test_invalid_selector_type() {
        let err = from_json(r#"{"themeSelectorType": "attribute"}"#).unwrap_err();
        assert_eq!(err, ConfigError::InvalidThemeSelector("attribute".into()));
        assert_eq!(
            err.to_string(),
            "Invalid themeSelector type: attribute. Must be one of: class, data"
        );
    }

    #[test]
    fn test_invalid_legacy_selector_type() {
        let err = from_json(r#"{"themeSelector": "media"}"#).unwrap_err();
        assert_eq!(err, ConfigError::InvalidThemeSelector("media".into()));
    }

    #[test]
    fn test_empty_root_property() {
        let err = from_json(r#"{"rootPropertyName": ""}"#).unwrap_err();
        assert_eq!(err, ConfigError::EmptyField("rootPropertyName"));
    }

    #[test]
    fn test_empty_theme_pattern() {
        let err = from_json(r#"{"themePattern": ""}"#).unwrap_err();
        assert_eq!(err, ConfigError::EmptyField("themePattern"));
    }

    // =========================================================================
    // Legacy fields
    // =========================================================================

    #[test]
    fn test_legacy_selector_string() {
        let config = from_json(r#"{"themeSelector": "class"}"#).unwrap();
        assert_eq!(config.theme_selector.kind, ThemeSelectorKind::Class);
        assert_eq!(config.theme_selector.property, "theme");
    }

    #[test]
    fn test_legacy_selector_object() {
        let config = from_json(r#"{"themeSelector": {"property": "mode"}}"#).unwrap();
        assert_eq!(config.theme_selector.kind, ThemeSelectorKind::Data);
        assert_eq!(config.theme_selector.property, "mode");
    }

    #[test]
    fn test_current_selector_beats_legacy() {
        let config = from_json(r#"{"themeSelector": "class", "themeSelectorType": "data"}"#).unwrap();
        assert_eq!(config.theme_selector.kind, ThemeSelectorKind::Data);
    }

    #[test]
    fn test_legacy_flags() {
        let config = from_json(
            r#"{"generateCustomVariants": true, "createComponentClasses": true, "componentPrefix": "ui-"}"#,
        )
        .unwrap();
        assert!(config.custom_variants.enabled);
        assert!(config.component_handling.create_classes);
        assert_eq!(config.component_handling.prefix, "ui-");
    }

    #[test]
    fn test_current_groups_beat_legacy_flags() {
        let opts = ConfigOptions {
            generate_custom_variants: Some(true),
            custom_variants: Some(CustomVariantsOptions {
                enabled: Some(false),
            }),
            component_prefix: Some("old-".into()),
            component_handling: Some(ComponentHandlingOptions {
                prefix: Some("new-".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = Config::from_options(opts).unwrap();
        assert!(!config.custom_variants.enabled);
        assert_eq!(config.component_handling.prefix, "new-");
    }

    #[test]
    fn test_legacy_type_map_used_when_mapping_absent() {
        let config = from_json(r#"{"tokenTypeMap": {"brandColor": "color"}}"#).unwrap();
        assert_eq!(config.mapped_type("brandColor"), Some("color"));
    }

    #[test]
    fn test_type_mapping_beats_legacy_map() {
        let config = from_json(
            r#"{"tokenTypeMap": {"brandColor": "color"}, "tokenTypeMapping": {"gap": "spacing"}}"#,
        )
        .unwrap();
        assert_eq!(config.mapped_type("gap"), Some("spacing"));
        assert_eq!(config.mapped_type("brandColor"), None);
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    #[test]
    fn test_theme_selector_data() {
        let config = Config::default();
        assert_eq!(config.theme_selector("dark"), "[data-theme=\"dark\"]");
        assert_eq!(
            config.custom_variant_selector("dark"),
            "&:where([data-theme=dark], [data-theme=dark] *)"
        );
    }

    #[test]
    fn test_theme_selector_class() {
        let config = from_json(r#"{"themeSelectorType": "class"}"#).unwrap();
        assert_eq!(config.theme_selector("dark"), ".dark");
        assert_eq!(config.custom_variant_selector("dark"), "&:where(.dark, .dark *)");
    }
}
