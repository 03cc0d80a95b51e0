//! tokenwind codegen
//!
//! Turns a resolved token dictionary into a Tailwind v4 stylesheet.
//!
//! ```text
//! Dictionary → TokenEngine (transformers) → ProcessedTokens → css::generate → String
//! ```
//!
//! # Example
//!
//! ```
//! use tokenwind_codegen::Formatter;
//! use tokenwind_config::ConfigOptions;
//! use tokenwind_tokens::Dictionary;
//!
//! let dict = Dictionary::from_json(
//!     r##"[{"name": "brand", "type": "color", "value": "#f00", "path": ["color", "brand"]}]"##,
//! )
//! .unwrap();
//! let css = Formatter::new(ConfigOptions::default()).unwrap().format(&dict);
//! assert!(css.contains("--color-brand: #f00;"));
//! ```

pub mod css;
pub mod engine;
pub mod entry;
pub mod naming;
pub mod path;
pub mod transform;
pub mod value;

use serde_json::Value;
use tokenwind_config::{Config, ConfigError, ConfigOptions};
use tokenwind_tokens::Dictionary;

pub use engine::TokenEngine;
pub use entry::{Diagnostic, EntryKind, ProcessedEntry, ProcessedTokens};
pub use path::{NormalizedPath, PathNormalizer};
pub use transform::{TransformContext, Transformer};

/// Why a single token could not be transformed. Never fatal to a build.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Transform error: {message}")]
pub struct TransformError {
    pub message: String,
}

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The token value does not have the shape the transformer needs.
    pub fn malformed(expected: &str, found: &Value) -> Self {
        Self::new(format!(
            "expected {expected} value, got {}",
            value::shape_of(found)
        ))
    }
}

/// Process and render a dictionary with an already validated config.
pub fn format(dictionary: &Dictionary, config: &Config) -> String {
    let tokens = TokenEngine::new(config).process(dictionary);
    css::generate(&tokens, config)
}

/// A configured formatter. Holds the validated config; formatting never
/// fails.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: Config,
}

impl Formatter {
    /// Validate `options` and build a formatter.
    pub fn new(options: ConfigOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            config: Config::from_options(options)?,
        })
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the engine without rendering; diagnostics are on the result.
    pub fn process(&self, dictionary: &Dictionary) -> ProcessedTokens {
        TokenEngine::new(&self.config).process(dictionary)
    }

    pub fn format(&self, dictionary: &Dictionary) -> String {
        format(dictionary, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokenwind_config::{ComponentHandlingOptions, CustomVariantsOptions, LegacyThemeSelector};
    use tokenwind_tokens::{Token, TokenType};

    fn format_default(tokens: Vec<Token>) -> String {
        Formatter::default().format(&Dictionary::new(tokens))
    }

    // =========================================================================
    // End-to-end scenarios
    // =========================================================================

    #[test]
    fn test_single_color_no_theme_layer() {
        let out = format_default(vec![Token::new(
            "sd-colors-surface",
            TokenType::Color,
            json!("#00ff00"),
            ["colors", "surface"],
        )]);
        assert_eq!(
            out,
            "@import 'tailwindcss';\n\n@theme {\n  --color-colors-surface: #00ff00;\n}\n"
        );
    }

    #[test]
    fn test_root_and_dark_variant() {
        let out = format_default(vec![
            Token::new("content-root", TokenType::Color, json!("#000000"), ["theme-content", "_"]),
            Token::new("content-dark", TokenType::Color, json!("#ffffff"), ["theme-content", "dark"]),
        ]);
        assert_eq!(
            out,
            "@import 'tailwindcss';\n\n@theme {\n  --color-theme-content: #000000;\n}\n\n@layer base {\n  [data-theme=\"dark\"] {\n    --color-theme-content: #ffffff;\n  }\n}\n"
        );
    }

    #[test]
    fn test_keyframes_scenario() {
        let out = format_default(vec![Token::new(
            "fade",
            TokenType::Keyframes,
            json!({"0%": {"backgroundColor": "red"}, "100%": {"backgroundColor": "blue"}}),
            ["keyframes", "fade"],
        )]);
        assert_eq!(
            out,
            "@import 'tailwindcss';\n\n@theme {\n  @keyframes fade {\n    0% {\n      background-color: red;\n    }\n    100% {\n      background-color: blue;\n    }\n  }\n  --animate-fade: fade 1s ease-in-out;\n}\n"
        );
    }

    #[test]
    fn test_utility_scenario() {
        let out = format_default(vec![Token::new(
            "stack",
            TokenType::Utility,
            json!({"display": "flex", "flex-direction": "column"}),
            ["stack"],
        )]);
        assert_eq!(
            out,
            "@import 'tailwindcss';\n\n@utility stack {\n  display: flex;\n  flex-direction: column;\n}\n"
        );
        assert!(!out.contains("@theme"));
    }

    // =========================================================================
    // Properties
    // =========================================================================

    #[test]
    fn test_empty_dictionary() {
        assert_eq!(format_default(Vec::new()), "@import 'tailwindcss';\n");
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let tokens = vec![
            Token::new("a", TokenType::Color, json!("#111"), ["theme-content", "brand"]),
            Token::new("b", TokenType::Color, json!("#222"), ["theme-content", "dark"]),
            Token::new("c", TokenType::Dimension, json!("4px"), ["spacing", "1"]),
        ];
        let dict = Dictionary::new(tokens);
        let formatter = Formatter::default();
        assert_eq!(formatter.format(&dict), formatter.format(&dict));
    }

    #[test]
    fn test_variant_order_is_first_seen() {
        let out = format_default(vec![
            Token::new("a", TokenType::Color, json!("#111"), ["theme-content", "brand"]),
            Token::new("b", TokenType::Color, json!("#222"), ["theme-content", "dark"]),
            Token::new("c", TokenType::Color, json!("#333"), ["theme-content", "muted", "brand"]),
        ]);
        let brand = out.find("[data-theme=\"brand\"]").unwrap();
        let dark = out.find("[data-theme=\"dark\"]").unwrap();
        assert!(brand < dark);
        assert!(out.contains("--color-theme-content: #111;\n    --color-theme-content-muted: #333;"));
    }

    #[test]
    fn test_unsupported_tokens_do_not_fail() {
        let dict = Dictionary::new(vec![
            Token::new("g", TokenType::parse("gradient"), json!("x"), ["g"]),
            Token::new("red", TokenType::Color, json!("#f00"), ["color", "red"]),
        ]);
        let formatter = Formatter::default();
        assert!(formatter.format(&dict).contains("--color-red: #f00;"));
        assert_eq!(formatter.process(&dict).diagnostics.len(), 1);
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    #[test]
    fn test_invalid_selector_type_rejected() {
        let err = Formatter::new(ConfigOptions {
            theme_selector_type: Some("attribute".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidThemeSelector("attribute".into()));
    }

    #[test]
    fn test_class_selector_with_custom_variants() {
        let formatter = Formatter::new(ConfigOptions {
            theme_selector: Some(LegacyThemeSelector::Kind("class".into())),
            custom_variants: Some(CustomVariantsOptions { enabled: Some(true) }),
            include_import: Some(false),
            ..Default::default()
        })
        .unwrap();
        let out = formatter.format(&Dictionary::new(vec![Token::new(
            "x",
            TokenType::Color,
            json!("#fff"),
            ["theme-content", "dark"],
        )]));
        assert_eq!(
            out,
            "@custom-variant dark (&:where(.dark, .dark *));\n\n@layer base {\n  .dark {\n    --color-theme-content: #fff;\n  }\n}\n"
        );
    }

    #[test]
    fn test_component_layer_enabled() {
        let formatter = Formatter::new(ConfigOptions {
            component_handling: Some(ComponentHandlingOptions {
                create_classes: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        })
        .unwrap();
        let dict = Dictionary::new(vec![
            Token::new("brand", TokenType::Color, json!("#00f"), ["color", "brand"]),
            Token::new("card", TokenType::Component, json!({"color": "{color.brand}"}), ["card"]),
        ]);
        let out = formatter.format(&dict);
        assert!(out.ends_with("@layer components {\n  .c-card {\n    color: var(--color-brand);\n  }\n}\n"));
    }
    #[test]
    fn test_component_class_uses_normalized_path() {
        let formatter = Formatter::new(ConfigOptions {
            component_handling: Some(ComponentHandlingOptions {
                create_classes: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        })
        .unwrap();
        let dict = Dictionary::new(vec![
            Token::new("card", TokenType::Component, json!({"display": "block"}), ["sd", "components", "card"]),
            Token::new("badge", TokenType::Component, json!({"display": "flex"}), ["badge", "theme-content", "_"]),
        ]);
        let out = formatter.format(&dict);
        assert!(out.contains("  .c-components-card {\n    display: block;\n  }"));
        assert!(out.contains("  .c-badge-theme-content {\n    display: flex;\n  }"));
        assert!(!out.contains(".c-sd-"));
    }
}
