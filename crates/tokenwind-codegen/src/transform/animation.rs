use serde_json::{Map, Value};
use tokenwind_tokens::{to_kebab_case, Token, TokenType};

use super::{render_declarations, TransformContext, Transformer};
use crate::entry::{EntryKind, ProcessedEntry};
use crate::naming::{keyframes_name, variable_name, VariableFamily};
use crate::path::NormalizedPath;
use crate::value::{is_blank, require_scalar, scalar_to_css, scalar_with_unit};
use crate::TransformError;

/// Fields of a structured transition, in output order.
const TRANSITION_FIELDS: &[&str] = &["property", "duration", "timingFunction", "delay"];

/// Durations, easing curves, transitions and keyframes.
pub struct AnimationTransformer;

impl Transformer for AnimationTransformer {
    fn name(&self) -> &'static str {
        "animation"
    }

    fn accepts(&self, token: &Token) -> bool {
        matches!(
            token.kind,
            TokenType::Duration | TokenType::CubicBezier | TokenType::Transition | TokenType::Keyframes
        )
    }

    fn transform(
        &self,
        token: &Token,
        path: &NormalizedPath,
        ctx: &TransformContext<'_>,
    ) -> Result<Vec<ProcessedEntry>, TransformError> {
        let (family, value) = match token.kind {
            TokenType::Duration => (VariableFamily::Duration, duration(&token.value)?),
            TokenType::CubicBezier => (VariableFamily::Ease, cubic_bezier(&token.value)?),
            TokenType::Transition => (VariableFamily::Transition, transition(token, ctx)?),
            TokenType::Keyframes => return keyframes(token, path, ctx),
            _ => {
                return Err(TransformError::new(format!(
                    "not an animation token: {}",
                    token.kind
                )))
            }
        };
        let name = variable_name(family, &path.final_path, ctx.config)?;
        Ok(vec![ProcessedEntry::variable(name, value, path.variant.clone())])
    }
}

/// Bare numbers are milliseconds.
fn duration(value: &Value) -> Result<String, TransformError> {
    scalar_with_unit(value, "ms").ok_or_else(|| TransformError::malformed("a scalar", value))
}

/// `[x1, y1, x2, y2]` → `cubic-bezier(x1, y1, x2, y2)`; strings pass through.
fn cubic_bezier(value: &Value) -> Result<String, TransformError> {
    match value {
        Value::Array(points) if points.len() == 4 => {
            let joined = require_scalar(value)
                .map_err(|_| TransformError::malformed("four numeric control points", value))?;
            Ok(format!("cubic-bezier({joined})"))
        }
        Value::Array(_) => Err(TransformError::new(
            "cubic-bezier needs exactly four control points",
        )),
        other => require_scalar(other),
    }
}

/// Structured transitions are read from the unresolved value so their parts
/// can still name other tokens.
fn transition(token: &Token, ctx: &TransformContext<'_>) -> Result<String, TransformError> {
    let Value::Object(fields) = token.original_or_value() else {
        return require_scalar(&token.value);
    };
    let mut parts = Vec::with_capacity(TRANSITION_FIELDS.len());
    for key in TRANSITION_FIELDS {
        if let Some(field) = fields.get(*key).filter(|field| !is_blank(Some(field))) {
            parts.push(transition_part(field, ctx)?);
        }
    }
    Ok(parts.join(" "))
}

/// Render one transition field, resolving a `{reference}` to the referenced
/// token's rendered value.
fn transition_part(field: &Value, ctx: &TransformContext<'_>) -> Result<String, TransformError> {
    let referenced = field.as_str().and_then(|s| ctx.index.resolve(s));
    match referenced {
        Some(target) => match target.kind {
            TokenType::Duration => duration(&target.value),
            TokenType::CubicBezier => cubic_bezier(&target.value),
            _ => require_scalar(&target.value),
        },
        None => require_scalar(field),
    }
}

/// A `@keyframes` block plus a matching `--animate-*` variable.
fn keyframes(
    token: &Token,
    path: &NormalizedPath,
    ctx: &TransformContext<'_>,
) -> Result<Vec<ProcessedEntry>, TransformError> {
    let Value::Object(frames) = &token.value else {
        return Err(TransformError::malformed("an object of keyframes", &token.value));
    };
    let name = keyframes_name(&path.final_path);
    if name.is_empty() {
        return Err(TransformError::new("keyframes token has an empty name"));
    }

    let mut rules = Vec::with_capacity(frames.len());
    for (offset, frame) in frames {
        let Value::Object(declarations) = frame else {
            return Err(TransformError::malformed("an object per keyframe", frame));
        };
        rules.push(ctx.css.rule(offset, &frame_body(declarations, ctx)?));
    }
    let block = ctx.css.keyframes(&name, &rules.join("\n"));

    let variable = variable_name(VariableFamily::Animate, &path.final_path, ctx.config)?;
    Ok(vec![
        ProcessedEntry::block(EntryKind::Keyframes, name.clone(), block),
        ProcessedEntry::variable(
            variable,
            format!("{name} 1s ease-in-out"),
            path.variant.clone(),
        ),
    ])
}

fn frame_body(declarations: &Map<String, Value>, ctx: &TransformContext<'_>) -> Result<String, TransformError> {
    render_declarations(declarations, &ctx.css, to_kebab_case, &|value| {
        scalar_to_css(value).ok_or_else(|| TransformError::malformed("a scalar", value))
    })
}
