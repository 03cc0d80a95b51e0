//! Type transformers.
//!
//! Each transformer claims the tokens it understands through
//! [`Transformer::accepts`] and turns one token into zero or more
//! [`ProcessedEntry`] records. The engine asks them in registration order and
//! uses the first that accepts, so more specific matchers are registered
//! ahead of general ones (typography before spacing for tracking dimensions,
//! composition before utility).

pub mod animation;
pub mod color;
pub mod component;
pub mod number;
pub mod shadow;
pub mod spacing;
pub mod typography;
pub mod utility;

use serde_json::{Map, Value};
use tokenwind_config::Config;
use tokenwind_tokens::{Token, TokenIndex};

use crate::css::CssBuilder;
use crate::entry::ProcessedEntry;
use crate::path::{NormalizedPath, PathNormalizer};
use crate::TransformError;

pub use animation::AnimationTransformer;
pub use color::ColorTransformer;
pub use component::ComponentTransformer;
pub use number::NumberTransformer;
pub use shadow::ShadowTransformer;
pub use spacing::SpacingTransformer;
pub use typography::TypographyTransformer;
pub use utility::{CompositionTransformer, UtilityTransformer};

/// Read-only state shared by all transformers during one run.
pub struct TransformContext<'a> {
    pub config: &'a Config,
    pub index: &'a TokenIndex<'a>,
    pub normalizer: &'a PathNormalizer,
    pub css: CssBuilder,
}

/// Converts one kind of token into processed entries.
pub trait Transformer {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    fn accepts(&self, token: &Token) -> bool;

    /// An empty result is a soft skip; an error is logged by the engine and
    /// the token contributes nothing.
    fn transform(
        &self,
        token: &Token,
        path: &NormalizedPath,
        ctx: &TransformContext<'_>,
    ) -> Result<Vec<ProcessedEntry>, TransformError>;
}

/// The built-in transformers in dispatch order.
pub fn default_transformers() -> Vec<Box<dyn Transformer>> {
    vec![
        Box::new(ColorTransformer),
        Box::new(TypographyTransformer),
        Box::new(SpacingTransformer),
        Box::new(ShadowTransformer),
        Box::new(AnimationTransformer),
        Box::new(NumberTransformer),
        Box::new(CompositionTransformer),
        Box::new(UtilityTransformer),
        Box::new(ComponentTransformer),
    ]
}

/// Render an object body as declarations, one per line.
///
/// Keys starting with `&` become nested rules; every other value goes through
/// `render_value`.
pub(crate) fn render_declarations(
    map: &Map<String, Value>,
    css: &CssBuilder,
    key_case: fn(&str) -> String,
    render_value: &dyn Fn(&Value) -> Result<String, TransformError>,
) -> Result<String, TransformError> {
    let mut lines = Vec::with_capacity(map.len());
    for (key, value) in map {
        if !key.starts_with('&') {
            lines.push(css.property(&key_case(key), &render_value(value)?));
            continue;
        }
        let Value::Object(inner) = value else {
            return Err(TransformError::malformed("an object for a nested rule", value));
        };
        let body = render_declarations(inner, css, key_case, render_value)?;
        lines.push(css.rule(key, &body));
    }
    Ok(lines.join("\n"))
}
