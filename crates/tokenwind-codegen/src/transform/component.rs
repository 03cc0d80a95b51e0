use serde_json::Value;
use tokenwind_tokens::{camel_to_kebab, kebab_path, reference_path, Token, TokenType};

use super::{render_declarations, TransformContext, Transformer};
use crate::entry::{EntryKind, ProcessedEntry};
use crate::naming::{variable_name, VariableFamily};
use crate::path::NormalizedPath;
use crate::value::{scalar_to_css, unwrap_token_value};
use crate::TransformError;

/// `component` tokens → class rules for the component layer.
///
/// Braced references in values become `var(--...)` pointing at the variable
/// the referenced token is emitted as.
pub struct ComponentTransformer;

impl Transformer for ComponentTransformer {
    fn name(&self) -> &'static str {
        "component"
    }

    fn accepts(&self, token: &Token) -> bool {
        token.kind == TokenType::Component
    }

    fn transform(
        &self,
        token: &Token,
        path: &NormalizedPath,
        ctx: &TransformContext<'_>,
    ) -> Result<Vec<ProcessedEntry>, TransformError> {
        let handling = &ctx.config.component_handling;
        if !handling.enabled {
            return Ok(Vec::new());
        }
        let raw = token.original_or_value();
        let Value::Object(declarations) = raw else {
            return Err(TransformError::malformed("an object of declarations", raw));
        };

        let class = format!(
            ".{}{}",
            handling.prefix,
            kebab_path(&path.final_path)
                .into_iter()
                .filter(|segment| !segment.is_empty())
                .collect::<Vec<_>>()
                .join("-")
        );
        let body = render_declarations(declarations, &ctx.css, camel_to_kebab, &|value| {
            component_value(unwrap_token_value(value), ctx)
        })?;
        let rule = ctx.css.rule(&class, &body);
        Ok(vec![ProcessedEntry::block(EntryKind::Component, class, rule)])
    }
}

fn component_value(value: &Value, ctx: &TransformContext<'_>) -> Result<String, TransformError> {
    match value {
        Value::String(s) => Ok(s
            .split(' ')
            .map(|part| resolve_reference(part, ctx))
            .collect::<Vec<_>>()
            .join(" ")),
        other => scalar_to_css(other).ok_or_else(|| TransformError::malformed("a scalar", other)),
    }
}

/// `{color.brand}` → `var(--color-brand)`; other text is returned unchanged.
fn resolve_reference(part: &str, ctx: &TransformContext<'_>) -> String {
    let Some(dotted) = reference_path(part) else {
        return part.to_string();
    };
    let name = ctx
        .index
        .get(dotted)
        .and_then(|target| referenced_variable(target, ctx))
        .unwrap_or_else(|| {
            let segments: Vec<&str> = dotted.split('.').collect();
            format!("--{}", kebab_path(&segments).join("-"))
        });
    format!("var({name})")
}

fn referenced_variable(target: &Token, ctx: &TransformContext<'_>) -> Option<String> {
    let family = VariableFamily::of(target, ctx.config)?;
    let path = ctx.normalizer.normalize(&target.path);
    variable_name(family, &path.final_path, ctx.config).ok()
}
