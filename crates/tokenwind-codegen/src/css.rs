//! CSS assembly.
//!
//! Renders the processed tokens into the final Tailwind v4 stylesheet, in
//! fixed section order:
//!
//! ```text
//! @import → @custom-variant → @theme → @layer base → @layer components → @utility
//! ```
//!
//! Empty sections are left out; the rest are separated by one blank line.

use tokenwind_config::Config;

use crate::entry::ProcessedTokens;

/// Small helpers for indented CSS text.
#[derive(Debug, Clone, Copy)]
pub struct CssBuilder {
    indent_size: usize,
}

impl Default for CssBuilder {
    fn default() -> Self {
        Self { indent_size: 2 }
    }
}

impl CssBuilder {
    pub fn new(indent_size: usize) -> Self {
        Self { indent_size }
    }

    /// Indent every non-empty line by `level` steps.
    pub fn indent(&self, text: &str, level: usize) -> String {
        let pad = " ".repeat(self.indent_size * level);
        text.split('\n')
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{pad}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `{selector} { ... }`
    pub fn rule(&self, selector: &str, content: &str) -> String {
        format!("{selector} {}", self.block(content))
    }

    pub fn import(&self, path: &str) -> String {
        format!("@import '{path}';")
    }

    pub fn theme(&self, content: &str) -> String {
        format!("@theme {}", self.block(content))
    }

    pub fn layer(&self, name: &str, content: &str) -> String {
        format!("@layer {name} {}", self.block(content))
    }

    pub fn utility(&self, name: &str, content: &str) -> String {
        format!("@utility {name} {}", self.block(content))
    }

    pub fn keyframes(&self, name: &str, content: &str) -> String {
        format!("@keyframes {name} {}", self.block(content))
    }

    pub fn custom_variant(&self, name: &str, selector: &str) -> String {
        format!("@custom-variant {name} ({selector});")
    }

    /// `name: value;`
    pub fn property(&self, name: &str, value: &str) -> String {
        format!("{name}: {value};")
    }

    fn block(&self, content: &str) -> String {
        format!("{{\n{}\n}}", self.indent(content, 1))
    }
}

/// Render the complete stylesheet.
pub fn generate(tokens: &ProcessedTokens, config: &Config) -> String {
    let css = CssBuilder::new(config.indent_size);
    let mut sections: Vec<String> = Vec::new();

    if config.include_import {
        sections.push(css.import(&config.import_path));
    }

    if config.custom_variants.enabled && !tokens.theme_vars.is_empty() {
        let variants: Vec<String> = tokens
            .theme_vars
            .variants()
            .map(|variant| css.custom_variant(variant, &config.custom_variant_selector(variant)))
            .collect();
        sections.push(variants.join("\n"));
    }

    if tokens.has_theme_block() {
        let vars: Vec<&str> = tokens
            .base_vars
            .iter()
            .chain(&tokens.spacing)
            .map(String::as_str)
            .collect();
        sections.push(css.theme(&vars.join("\n")));
    }

    if !tokens.theme_vars.is_empty() {
        let rules: Vec<String> = tokens
            .theme_vars
            .iter()
            .map(|(variant, decls)| css.rule(&config.theme_selector(variant), &decls.join("\n")))
            .collect();
        sections.push(css.layer("base", &rules.join("\n\n")));
    }

    if config.component_handling.create_classes && !tokens.components.is_empty() {
        sections.push(css.layer(&config.component_layer, &tokens.components.join("\n\n")));
    }

    if !tokens.utilities.is_empty() {
        sections.push(tokens.utilities.join("\n\n"));
    }

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}
