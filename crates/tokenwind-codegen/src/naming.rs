//! Custom property naming.
//!
//! Every variable name in the output comes from [`variable_name`], both when a
//! transformer emits a token and when a component resolves a reference to
//! one, so the two can never disagree.

use std::borrow::Cow;

use tokenwind_config::Config;
use tokenwind_tokens::{kebab_path, to_kebab_case, Token, TokenType};

use crate::TransformError;

/// Spacing categories that replace the spacing prefix.
pub const SPACING_CATEGORIES: &[&str] = &["radius", "container", "breakpoint", "aspect"];

/// The variable namespace a token lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableFamily {
    Color,
    Spacing,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    FontFamily,
    Shadow,
    Duration,
    Ease,
    Transition,
    Animate,
    Number,
}

impl VariableFamily {
    /// Family of a token, or `None` for block-producing types.
    pub fn of(token: &Token, config: &Config) -> Option<Self> {
        if token.is_tracking_dimension() {
            return Some(Self::LetterSpacing);
        }
        let family = match effective_type(token, config).as_ref() {
            TokenType::Color => Self::Color,
            TokenType::Dimension | TokenType::Sizing | TokenType::Spacing => Self::Spacing,
            TokenType::FontSize => Self::FontSize,
            TokenType::FontWeight => Self::FontWeight,
            TokenType::LineHeight => Self::LineHeight,
            TokenType::LetterSpacing => Self::LetterSpacing,
            TokenType::FontFamily => Self::FontFamily,
            TokenType::Shadow | TokenType::BoxShadow => Self::Shadow,
            TokenType::Duration => Self::Duration,
            TokenType::CubicBezier => Self::Ease,
            TokenType::Transition => Self::Transition,
            TokenType::Keyframes => Self::Animate,
            TokenType::Number => Self::Number,
            TokenType::Utility
            | TokenType::Composition
            | TokenType::Component
            | TokenType::Other(_) => return None,
        };
        Some(family)
    }
}

/// The type a token is processed as, after applying the type mapping to
/// custom tags.
///
/// A mapping target may be a type tag (`color`, `dimension`) or a category
/// name (`spacing`, `typography`, `animation`).
pub fn effective_type<'a>(token: &'a Token, config: &Config) -> Cow<'a, TokenType> {
    let TokenType::Other(tag) = &token.kind else {
        return Cow::Borrowed(&token.kind);
    };
    let Some(target) = config.mapped_type(tag) else {
        return Cow::Borrowed(&token.kind);
    };
    let mapped = match target {
        "spacing" => TokenType::Dimension,
        "typography" => TokenType::FontSize,
        "animation" => TokenType::Duration,
        other => TokenType::parse(other),
    };
    match mapped {
        // Mapping onto another custom tag would loop; leave it unrecognized.
        TokenType::Other(_) => Cow::Borrowed(&token.kind),
        known => Cow::Owned(known),
    }
}

/// Build the custom property name for a normalized path.
///
/// Fails when both the prefix and the path are empty, which would leave a
/// bare `--`.
pub fn variable_name(
    family: VariableFamily,
    final_path: &[String],
    config: &Config,
) -> Result<String, TransformError> {
    let mut path = kebab_path(final_path);
    let prefix: Cow<'_, str> = match family {
        VariableFamily::Color => Cow::Borrowed(config.color_prefix.as_str()),
        VariableFamily::Spacing => {
            let is_category = path
                .first()
                .is_some_and(|first| SPACING_CATEGORIES.contains(&first.as_str()));
            if is_category {
                Cow::Owned(path.remove(0))
            } else {
                let redundant = to_kebab_case(&config.spacing_prefix);
                strip_leading(&mut path, &[redundant.as_str()]);
                Cow::Borrowed(config.spacing_prefix.as_str())
            }
        }
        VariableFamily::FontSize => {
            strip_leading(&mut path, &["text"]);
            Cow::Borrowed("text")
        }
        VariableFamily::FontWeight => {
            strip_pair(&mut path, "font", "weight");
            Cow::Borrowed("font-weight")
        }
        VariableFamily::LineHeight => {
            strip_leading(&mut path, &["leading"]);
            Cow::Borrowed("leading")
        }
        VariableFamily::LetterSpacing => {
            strip_leading(&mut path, &["tracking"]);
            Cow::Borrowed("tracking")
        }
        VariableFamily::FontFamily => {
            strip_pair(&mut path, "font", "family");
            Cow::Borrowed("font")
        }
        VariableFamily::Shadow => {
            let redundant = to_kebab_case(&config.shadow_prefix);
            strip_leading(&mut path, &["shadow", redundant.as_str()]);
            Cow::Borrowed(config.shadow_prefix.as_str())
        }
        VariableFamily::Duration => {
            strip_animation(&mut path, "duration");
            Cow::Borrowed("duration")
        }
        VariableFamily::Ease => {
            strip_animation(&mut path, "easing");
            Cow::Borrowed("ease")
        }
        VariableFamily::Transition => {
            strip_animation(&mut path, "transition");
            Cow::Borrowed("transition")
        }
        VariableFamily::Animate => {
            strip_animation(&mut path, "keyframes");
            Cow::Borrowed("animate")
        }
        VariableFamily::Number => {
            if final_path.iter().any(|segment| is_z_index_marker(segment)) {
                Cow::Borrowed("z")
            } else if final_path.iter().any(|segment| segment == "layout") {
                Cow::Borrowed("")
            } else {
                Cow::Borrowed(config.number_prefix.as_str())
            }
        }
    };
    if prefix.is_empty() && path.iter().all(String::is_empty) {
        return Err(TransformError::new(format!(
            "empty variable name for path `{}`",
            final_path.join(".")
        )));
    }
    Ok(render_variable(&prefix, &path))
}

/// Name of the `@keyframes` rule for a keyframes token.
pub fn keyframes_name(final_path: &[String]) -> String {
    let mut path = kebab_path(final_path);
    strip_animation(&mut path, "keyframes");
    path.join("-")
}

/// `--{prefix}-{path}`, without a dangling dash when either side is empty.
pub fn render_variable(prefix: &str, path: &[String]) -> String {
    let joined = path.join("-");
    match (prefix.is_empty(), joined.is_empty()) {
        (true, _) => format!("--{joined}"),
        (false, true) => format!("--{prefix}"),
        (false, false) => format!("--{prefix}-{joined}"),
    }
}

fn strip_leading(path: &mut Vec<String>, candidates: &[&str]) {
    if path
        .first()
        .is_some_and(|first| candidates.iter().any(|c| !c.is_empty() && first == c))
    {
        path.remove(0);
    }
}

fn strip_pair(path: &mut Vec<String>, first: &str, second: &str) {
    if path.len() >= 3 && path[0] == first && path[1] == second {
        path.drain(..2);
    }
}

fn strip_animation(path: &mut Vec<String>, category: &str) {
    strip_leading(path, &["animation"]);
    strip_leading(path, &[category]);
}

fn is_z_index_marker(segment: &str) -> bool {
    segment == "zIndex" || segment == "z-index" || segment.to_lowercase().contains("zindex")
}
