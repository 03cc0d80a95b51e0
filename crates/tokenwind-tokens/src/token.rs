use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token type tag, as found in the `$type` field.
///
/// Known tags get their own variant; anything else is carried verbatim in
/// `Other` so a type mapping can still route it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TokenType {
    // Color
    Color,

    // Spacing / sizing
    Dimension,
    Sizing,
    Spacing,

    // Typography
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    FontFamily,

    // Shadows
    Shadow,
    BoxShadow,

    // Animation
    Duration,
    CubicBezier,
    Transition,
    Keyframes,

    // Plain values
    Number,

    // Composite blocks
    Utility,
    Composition,
    Component,

    /// A tag with no built-in meaning.
    Other(String),
}

impl TokenType {
    /// Parse a `$type` tag. Never fails: unknown tags become `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "color" => Self::Color,
            "dimension" => Self::Dimension,
            "sizing" => Self::Sizing,
            "spacing" => Self::Spacing,
            "fontSize" => Self::FontSize,
            "fontWeight" => Self::FontWeight,
            "lineHeight" => Self::LineHeight,
            "letterSpacing" => Self::LetterSpacing,
            "fontFamily" => Self::FontFamily,
            "shadow" => Self::Shadow,
            "boxShadow" => Self::BoxShadow,
            "duration" => Self::Duration,
            "cubicBezier" => Self::CubicBezier,
            "transition" => Self::Transition,
            "keyframes" => Self::Keyframes,
            "number" => Self::Number,
            "utility" => Self::Utility,
            "composition" => Self::Composition,
            "component" => Self::Component,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Color => "color",
            Self::Dimension => "dimension",
            Self::Sizing => "sizing",
            Self::Spacing => "spacing",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
            Self::LineHeight => "lineHeight",
            Self::LetterSpacing => "letterSpacing",
            Self::FontFamily => "fontFamily",
            Self::Shadow => "shadow",
            Self::BoxShadow => "boxShadow",
            Self::Duration => "duration",
            Self::CubicBezier => "cubicBezier",
            Self::Transition => "transition",
            Self::Keyframes => "keyframes",
            Self::Number => "number",
            Self::Utility => "utility",
            Self::Composition => "composition",
            Self::Component => "component",
            Self::Other(tag) => tag,
        }
    }

    /// True for `dimension`, `sizing` and `spacing`.
    pub fn is_dimension(&self) -> bool {
        matches!(self, Self::Dimension | Self::Sizing | Self::Spacing)
    }
}

impl From<String> for TokenType {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<TokenType> for String {
    fn from(kind: TokenType) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pre-resolution form of a token, kept by the resolver alongside the
/// resolved value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginalValue {
    #[serde(rename = "$value", alias = "value", default)]
    pub value: Option<Value>,
}

/// A single resolved design token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    #[serde(rename = "$type", alias = "type")]
    pub kind: TokenType,
    #[serde(rename = "$value", alias = "value", default)]
    pub value: Value,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<OriginalValue>,
    #[serde(rename = "$extensions", default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl Token {
    pub fn new(
        name: impl Into<String>,
        kind: TokenType,
        value: Value,
        path: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            value,
            path: path.into_iter().map(Into::into).collect(),
            original: None,
            extensions: None,
        }
    }

    /// Attach the unresolved value.
    pub fn with_original(mut self, original: Value) -> Self {
        self.original = Some(OriginalValue {
            value: Some(original),
        });
        self
    }

    pub fn with_extensions(mut self, extensions: Value) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// The unresolved value, if the resolver kept one.
    pub fn original_value(&self) -> Option<&Value> {
        self.original
            .as_ref()
            .and_then(|o| o.value.as_ref())
            .filter(|v| !v.is_null())
    }

    /// The unresolved value when present, the resolved one otherwise.
    pub fn original_or_value(&self) -> &Value {
        self.original_value().unwrap_or(&self.value)
    }

    /// Path segments joined with `.`, the form used by braced references.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    /// Whether the token is a letter-spacing value carried as a dimension.
    ///
    /// Tokens Studio exports tracking as `dimension` and records the original
    /// type under `$extensions["studio.tokens"].originalType`; older exports
    /// only leave `tracking` in the name.
    pub fn is_tracking_dimension(&self) -> bool {
        if !self.kind.is_dimension() {
            return false;
        }
        let original_type = self
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("studio.tokens"))
            .and_then(|studio| studio.get("originalType"))
            .and_then(Value::as_str);
        original_type == Some("letterSpacing") || self.name.contains("tracking")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_type_parse_known() {
        assert_eq!(TokenType::parse("color"), TokenType::Color);
        assert_eq!(TokenType::parse("cubicBezier"), TokenType::CubicBezier);
        assert_eq!(TokenType::parse("boxShadow"), TokenType::BoxShadow);
    }

    #[test]
    fn test_type_parse_unknown() {
        assert_eq!(
            TokenType::parse("brandColor"),
            TokenType::Other("brandColor".into())
        );
        assert_eq!(TokenType::parse("brandColor").as_str(), "brandColor");
    }

    #[test]
    fn test_deserialize_dollar_fields() {
        let token: Token = serde_json::from_value(json!({
            "name": "color-brand",
            "$type": "color",
            "$value": "#ff0000",
            "path": ["color", "brand"]
        }))
        .unwrap();
        assert_eq!(token.kind, TokenType::Color);
        assert_eq!(token.value, json!("#ff0000"));
        assert_eq!(token.path, vec!["color", "brand"]);
        assert!(token.original.is_none());
    }

    #[test]
    fn test_deserialize_plain_fields() {
        let token: Token = serde_json::from_value(json!({
            "name": "space",
            "type": "dimension",
            "value": "1rem",
            "original": { "value": "16px" }
        }))
        .unwrap();
        assert_eq!(token.kind, TokenType::Dimension);
        assert!(token.path.is_empty());
        assert_eq!(token.original_value(), Some(&json!("16px")));
    }

    #[test]
    fn test_original_or_value_falls_back() {
        let token = Token::new("a", TokenType::Color, json!("red"), ["a"]);
        assert_eq!(token.original_or_value(), &json!("red"));
        let token = token.with_original(json!("{color.red}"));
        assert_eq!(token.original_or_value(), &json!("{color.red}"));
    }

    #[test]
    fn test_tracking_by_name() {
        let token = Token::new(
            "font-tracking-wide",
            TokenType::Dimension,
            json!("0.05em"),
            ["font", "tracking", "wide"],
        );
        assert!(token.is_tracking_dimension());
    }

    #[test]
    fn test_tracking_by_extension() {
        let token = Token::new("letter-wide", TokenType::Dimension, json!("0.05em"), ["wide"])
            .with_extensions(json!({ "studio.tokens": { "originalType": "letterSpacing" } }));
        assert!(token.is_tracking_dimension());
    }

    #[test]
    fn test_tracking_requires_dimension() {
        let token = Token::new("tracking", TokenType::Color, json!("red"), ["tracking"]);
        assert!(!token.is_tracking_dimension());
    }
}
