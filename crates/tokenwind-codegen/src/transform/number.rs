use serde_json::Value;
use tokenwind_tokens::{Token, TokenType};

use super::{TransformContext, Transformer};
use crate::entry::ProcessedEntry;
use crate::naming::{variable_name, VariableFamily};
use crate::path::NormalizedPath;
use crate::value::require_scalar;
use crate::TransformError;

/// Unitless numbers; z-index scales land in `--z-*`.
pub struct NumberTransformer;

impl Transformer for NumberTransformer {
    fn name(&self) -> &'static str {
        "number"
    }

    fn accepts(&self, token: &Token) -> bool {
        token.kind == TokenType::Number
    }

    fn transform(
        &self,
        token: &Token,
        path: &NormalizedPath,
        ctx: &TransformContext<'_>,
    ) -> Result<Vec<ProcessedEntry>, TransformError> {
        if token.value.is_null() {
            return Ok(Vec::new());
        }
        let value = require_scalar(&token.value)?;
        let name = variable_name(VariableFamily::Number, &path.final_path, ctx.config)?;
        Ok(vec![ProcessedEntry::variable(name, value, path.variant.clone())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::test_support::run_one;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_z_index() {
        let token = Token::new("z-modal", TokenType::Number, json!(50), ["zIndex", "modal"]);
        let entries = run_one(&NumberTransformer, token).unwrap();
        assert_eq!(entries[0].declaration(), "--z-z-index-modal: 50;");
    }

    #[test]
    fn test_plain_number() {
        let token = Token::new("opacity-50", TokenType::Number, json!(0.5), ["opacity", "50"]);
        let entries = run_one(&NumberTransformer, token).unwrap();
        assert_eq!(entries[0].declaration(), "--opacity-50: 0.5;");
    }

    #[test]
    fn test_layout_number_has_no_prefix() {
        let token = Token::new("cols", TokenType::Number, json!(12), ["layout", "columns"]);
        let entries = run_one(&NumberTransformer, token).unwrap();
        assert_eq!(entries[0].declaration(), "--layout-columns: 12;");
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let token = Token::new("n", TokenType::Number, json!(1), Vec::<String>::new());
        let err = run_one(&NumberTransformer, token).unwrap_err();
        assert_eq!(err.message, "empty variable name for path ``");
    }

    #[test]
    fn test_null_value_is_soft_skip() {
        let token = Token::new("n", TokenType::Number, Value::Null, ["n"]);
        assert_eq!(run_one(&NumberTransformer, token).unwrap(), vec![]);
    }
}
