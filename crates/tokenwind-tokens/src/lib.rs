//! tokenwind token model
//!
//! The resolved design-token dictionary as handed over by the token build
//! pipeline: typed tokens with hierarchical paths, a path index for braced
//! references, and the case helpers shared by every CSS name.
//!
//! # Example
//!
//! ```
//! use tokenwind_tokens::{Dictionary, TokenType};
//!
//! let dict = Dictionary::from_json(
//!     r##"[{"name": "brand", "$type": "color", "$value": "#f00", "path": ["color", "brand"]}]"##,
//! )
//! .unwrap();
//! assert_eq!(dict.all_tokens[0].kind, TokenType::Color);
//! assert!(dict.index().resolve("{color.brand}").is_some());
//! ```

pub mod case;
pub mod dictionary;
pub mod token;

pub use case::{camel_to_kebab, kebab_path, normalize_token_name, to_kebab_case};
pub use dictionary::{reference_path, Dictionary, TokenIndex};
pub use token::{OriginalValue, Token, TokenType};

/// Dictionary loading error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Dictionary error at line {line}, column {column}: {message}")]
pub struct DictionaryError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for DictionaryError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
