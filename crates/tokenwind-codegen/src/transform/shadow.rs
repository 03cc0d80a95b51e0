use serde::Deserialize;
use serde_json::Value;
use tokenwind_tokens::{Token, TokenType};

use super::{TransformContext, Transformer};
use crate::entry::ProcessedEntry;
use crate::naming::{variable_name, VariableFamily};
use crate::path::NormalizedPath;
use crate::value::{require_scalar, scalar_to_css};
use crate::TransformError;

/// `shadow` / `boxShadow` tokens → `--shadow-*`.
///
/// Structured values are rendered as `[inset] x y blur spread color`, layers
/// joined with `, `. Scalars pass through.
pub struct ShadowTransformer;

/// One shadow layer as exported by token tools.
///
/// Tokens Studio uses `x`/`y` and marks inner shadows with
/// `type: "innerShadow"` instead of `inset`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ShadowLayer {
    #[serde(alias = "x")]
    offset_x: Option<Value>,
    #[serde(alias = "y")]
    offset_y: Option<Value>,
    blur: Option<Value>,
    spread: Option<Value>,
    color: Option<Value>,
    inset: Option<bool>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl ShadowLayer {
    fn is_inset(&self) -> bool {
        self.inset.unwrap_or(false) || self.kind.as_deref() == Some("innerShadow")
    }

    fn render(&self) -> Result<String, TransformError> {
        let mut parts = Vec::with_capacity(6);
        if self.is_inset() {
            parts.push("inset".to_string());
        }
        parts.push(field(&self.offset_x, "0")?);
        parts.push(field(&self.offset_y, "0")?);
        parts.push(field(&self.blur, "0")?);
        parts.push(field(&self.spread, "0")?);
        parts.push(field(&self.color, "transparent")?);
        parts.retain(|part| !part.is_empty());
        Ok(parts.join(" "))
    }
}

fn field(value: &Option<Value>, default: &str) -> Result<String, TransformError> {
    match value {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(v) => scalar_to_css(v).ok_or_else(|| TransformError::malformed("a scalar shadow field", v)),
    }
}

fn render_layer(value: &Value) -> Result<String, TransformError> {
    match value {
        Value::Object(_) => ShadowLayer::deserialize(value)
            .map_err(|err| TransformError::new(format!("invalid shadow layer: {err}")))?
            .render(),
        other => require_scalar(other),
    }
}

impl Transformer for ShadowTransformer {
    fn name(&self) -> &'static str {
        "shadow"
    }

    fn accepts(&self, token: &Token) -> bool {
        matches!(token.kind, TokenType::Shadow | TokenType::BoxShadow)
    }

    fn transform(
        &self,
        token: &Token,
        path: &NormalizedPath,
        ctx: &TransformContext<'_>,
    ) -> Result<Vec<ProcessedEntry>, TransformError> {
        let value = match &token.value {
            Value::Array(layers) => layers
                .iter()
                .map(render_layer)
                .collect::<Result<Vec<_>, _>>()?
                .join(", "),
            other => render_layer(other)?,
        };
        let name = variable_name(VariableFamily::Shadow, &path.final_path, ctx.config)?;
        Ok(vec![ProcessedEntry::variable(name, value, path.variant.clone())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::test_support::run_one;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(value: Value) -> String {
        let token = Token::new("shadow-md", TokenType::Shadow, value, ["shadow", "md"]);
        run_one(&ShadowTransformer, token).unwrap().remove(0).declaration()
    }

    #[test]
    fn test_single_layer() {
        let out = render(json!({
            "offsetX": "0px", "offsetY": "4px", "blur": "6px", "spread": "-1px", "color": "rgb(0 0 0 / 0.1)"
        }));
        assert_eq!(out, "--shadow-md: 0px 4px 6px -1px rgb(0 0 0 / 0.1);");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let out = render(json!({"offsetY": "1px"}));
        assert_eq!(out, "--shadow-md: 0 1px 0 0 transparent;");
    }

    #[test]
    fn test_layers_and_inset() {
        let out = render(json!([
            {"x": 0, "y": 1, "blur": 2, "spread": 0, "color": "#0003", "type": "innerShadow"},
            {"offsetX": "0", "offsetY": "2px", "blur": "4px", "color": "#0001", "inset": false}
        ]));
        assert_eq!(out, "--shadow-md: inset 0 1 2 0 #0003, 0 2px 4px 0 #0001;");
    }

    #[test]
    fn test_scalar_passthrough() {
        assert_eq!(render(json!("0 1px 2px #000")), "--shadow-md: 0 1px 2px #000;");
    }

    #[test]
    fn test_box_shadow_type_accepted() {
        let token = Token::new("s", TokenType::BoxShadow, json!("none"), ["s"]);
        assert!(ShadowTransformer.accepts(&token));
    }

    #[test]
    fn test_nested_field_is_malformed() {
        let token = Token::new("s", TokenType::Shadow, json!({"color": {"r": 1}}), ["s"]);
        assert!(run_one(&ShadowTransformer, token).is_err());
    }
}
