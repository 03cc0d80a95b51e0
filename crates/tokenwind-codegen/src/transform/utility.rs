use serde_json::Value;
use tokenwind_tokens::{normalize_token_name, to_kebab_case, Token, TokenType};

use super::{render_declarations, TransformContext, Transformer};
use crate::entry::{EntryKind, ProcessedEntry};
use crate::value::{scalar_to_css, unwrap_token_value};
use crate::path::NormalizedPath;
use crate::TransformError;

/// `utility` tokens → `@utility` directives.
pub struct UtilityTransformer;

/// `composition` tokens, and utilities tagged as such in `$extensions`, →
/// `@utility` directives.
pub struct CompositionTransformer;

impl Transformer for UtilityTransformer {
    fn name(&self) -> &'static str {
        "utility"
    }

    fn accepts(&self, token: &Token) -> bool {
        token.kind == TokenType::Utility
    }

    fn transform(
        &self,
        token: &Token,
        _path: &NormalizedPath,
        ctx: &TransformContext<'_>,
    ) -> Result<Vec<ProcessedEntry>, TransformError> {
        utility_directive(token, ctx)
    }
}

impl Transformer for CompositionTransformer {
    fn name(&self) -> &'static str {
        "composition"
    }

    fn accepts(&self, token: &Token) -> bool {
        match token.kind {
            TokenType::Composition => true,
            TokenType::Utility => token
                .extensions
                .as_ref()
                .and_then(|ext| ext.get("$type"))
                .and_then(Value::as_str)
                == Some("utility"),
            _ => false,
        }
    }

    fn transform(
        &self,
        token: &Token,
        _path: &NormalizedPath,
        ctx: &TransformContext<'_>,
    ) -> Result<Vec<ProcessedEntry>, TransformError> {
        utility_directive(token, ctx)
    }
}

fn utility_directive(
    token: &Token,
    ctx: &TransformContext<'_>,
) -> Result<Vec<ProcessedEntry>, TransformError> {
    let generation = &ctx.config.utility_generation;
    if !generation.enabled {
        return Ok(Vec::new());
    }
    let Value::Object(declarations) = &token.value else {
        return Err(TransformError::malformed("an object of declarations", &token.value));
    };

    let name = format!("{}{}", generation.prefix, normalize_token_name(&token.name));
    let body = render_declarations(declarations, &ctx.css, to_kebab_case, &|value| {
        let value = unwrap_token_value(value);
        scalar_to_css(value).ok_or_else(|| TransformError::malformed("a scalar", value))
    })?;
    let directive = ctx.css.utility(&name, &body);
    Ok(vec![ProcessedEntry::block(EntryKind::Utility, name, directive)])
}
