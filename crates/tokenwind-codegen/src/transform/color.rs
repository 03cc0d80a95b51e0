use tokenwind_tokens::{Token, TokenType};

use super::{TransformContext, Transformer};
use crate::entry::ProcessedEntry;
use crate::naming::{variable_name, VariableFamily};
use crate::path::NormalizedPath;
use crate::value::require_scalar;
use crate::TransformError;

/// `color` tokens → `--color-*`.
pub struct ColorTransformer;

impl Transformer for ColorTransformer {
    fn name(&self) -> &'static str {
        "color"
    }

    fn accepts(&self, token: &Token) -> bool {
        token.kind == TokenType::Color
    }

    fn transform(
        &self,
        token: &Token,
        path: &NormalizedPath,
        ctx: &TransformContext<'_>,
    ) -> Result<Vec<ProcessedEntry>, TransformError> {
        let value = require_scalar(&token.value)?;
        let name = variable_name(VariableFamily::Color, &path.final_path, ctx.config)?;
        Ok(vec![ProcessedEntry::variable(name, value, path.variant.clone())])
    }
}
