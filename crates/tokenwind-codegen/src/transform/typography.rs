use tokenwind_tokens::{Token, TokenType};

use super::{TransformContext, Transformer};
use crate::entry::ProcessedEntry;
use crate::naming::{variable_name, VariableFamily};
use crate::path::NormalizedPath;
use crate::value::{scalar_to_css, scalar_with_unit};
use crate::TransformError;

/// Font size, weight, family, line height and letter spacing.
///
/// Bare numbers get `rem` for font sizes and `em` for letter spacing. Font
/// family lists are comma-joined.
pub struct TypographyTransformer;

impl TypographyTransformer {
    fn family(token: &Token) -> Option<VariableFamily> {
        if token.is_tracking_dimension() {
            return Some(VariableFamily::LetterSpacing);
        }
        match token.kind {
            TokenType::FontSize => Some(VariableFamily::FontSize),
            TokenType::FontWeight => Some(VariableFamily::FontWeight),
            TokenType::LineHeight => Some(VariableFamily::LineHeight),
            TokenType::LetterSpacing => Some(VariableFamily::LetterSpacing),
            TokenType::FontFamily => Some(VariableFamily::FontFamily),
            _ => None,
        }
    }
}

impl Transformer for TypographyTransformer {
    fn name(&self) -> &'static str {
        "typography"
    }

    fn accepts(&self, token: &Token) -> bool {
        Self::family(token).is_some()
    }

    fn transform(
        &self,
        token: &Token,
        path: &NormalizedPath,
        ctx: &TransformContext<'_>,
    ) -> Result<Vec<ProcessedEntry>, TransformError> {
        let family = Self::family(token)
            .ok_or_else(|| TransformError::new(format!("not a typography token: {}", token.kind)))?;
        let value = match family {
            VariableFamily::FontSize => scalar_with_unit(&token.value, "rem"),
            VariableFamily::LetterSpacing => scalar_with_unit(&token.value, "em"),
            _ => scalar_to_css(&token.value),
        }
        .ok_or_else(|| TransformError::malformed("a scalar", &token.value))?;

        let name = variable_name(family, &path.final_path, ctx.config)?;
        Ok(vec![ProcessedEntry::variable(name, value, path.variant.clone())])
    }
}
