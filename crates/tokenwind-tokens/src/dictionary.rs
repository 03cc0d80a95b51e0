//! The resolved token dictionary handed over by the build pipeline.

use std::collections::HashMap;

use serde::Deserialize;

use crate::token::Token;
use crate::DictionaryError;

/// A flat, ordered list of resolved tokens.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dictionary {
    #[serde(rename = "allTokens", alias = "all_tokens", default)]
    pub all_tokens: Vec<Token>,
}

/// Accepted top-level shapes of a dictionary document.
#[derive(Deserialize)]
#[serde(untagged)]
enum DictionaryDocument {
    Wrapped(Dictionary),
    Bare(Vec<Token>),
}

impl Dictionary {
    pub fn new(all_tokens: Vec<Token>) -> Self {
        Self { all_tokens }
    }

    /// Parse a dictionary from JSON.
    ///
    /// Accepts either `{ "allTokens": [...] }` or a bare token array.
    pub fn from_json(source: &str) -> Result<Self, DictionaryError> {
        let document: DictionaryDocument = serde_json::from_str(source)?;
        Ok(match document {
            DictionaryDocument::Wrapped(dictionary) => dictionary,
            DictionaryDocument::Bare(all_tokens) => Self { all_tokens },
        })
    }

    pub fn len(&self) -> usize {
        self.all_tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.all_tokens.iter()
    }

    /// Build the path lookup used for reference resolution.
    pub fn index(&self) -> TokenIndex<'_> {
        TokenIndex::new(&self.all_tokens)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.all_tokens.iter()
    }
}

/// Read-only lookup from dotted path (`color.brand.primary`) to token.
///
/// Built once per formatting run. When two tokens share a path the first one
/// in input order is kept.
#[derive(Debug, Default)]
pub struct TokenIndex<'a> {
    by_path: HashMap<String, &'a Token>,
}

impl<'a> TokenIndex<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let mut by_path = HashMap::with_capacity(tokens.len());
        for token in tokens {
            by_path.entry(token.dotted_path()).or_insert(token);
        }
        Self { by_path }
    }

    /// Look up a token by its dotted path.
    pub fn get(&self, dotted_path: &str) -> Option<&'a Token> {
        self.by_path.get(dotted_path).copied()
    }

    /// Resolve a braced reference such as `{spacing.4}`.
    ///
    /// Returns `None` when the string is not a reference or nothing matches.
    pub fn resolve(&self, reference: &str) -> Option<&'a Token> {
        reference_path(reference).and_then(|path| self.get(path))
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

/// Strip the braces from a `{path.to.token}` reference.
pub fn reference_path(value: &str) -> Option<&str> {
    value
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .filter(|inner| !inner.is_empty())
}
