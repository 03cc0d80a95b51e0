use serde_json::Value;
use tokenwind_tokens::{to_kebab_case, Token};

use super::{TransformContext, Transformer};
use crate::entry::ProcessedEntry;
use crate::naming::{variable_name, VariableFamily};
use crate::path::NormalizedPath;
use crate::value::require_scalar;
use crate::TransformError;

/// Dimension-like tokens → `--spacing-*`, `--radius-*`, `--container-*`,
/// `--breakpoint-*` and `--aspect-*`.
pub struct SpacingTransformer;

impl Transformer for SpacingTransformer {
    fn name(&self) -> &'static str {
        "spacing"
    }

    fn accepts(&self, token: &Token) -> bool {
        token.kind.is_dimension() && !token.is_tracking_dimension()
    }

    fn transform(
        &self,
        token: &Token,
        path: &NormalizedPath,
        ctx: &TransformContext<'_>,
    ) -> Result<Vec<ProcessedEntry>, TransformError> {
        let is_aspect = path
            .final_path
            .first()
            .is_some_and(|first| to_kebab_case(first) == "aspect");

        // Resolvers turn `16/9` into a number; keep the ratio as written.
        let raw = match token.original_value() {
            Some(original @ Value::String(_)) if is_aspect => original,
            _ => &token.value,
        };
        let value = require_scalar(raw)?;
        let name = variable_name(VariableFamily::Spacing, &path.final_path, ctx.config)?;
        Ok(vec![ProcessedEntry::spacing(name, value, path.variant.clone())])
    }
}
