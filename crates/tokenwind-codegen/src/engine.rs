//! Token processing engine.
//!
//! Walks the dictionary once, in input order, and hands every token to the
//! first registered transformer that accepts it. A token that no transformer
//! accepts, or whose transformer fails, is logged and recorded as a
//! [`Diagnostic`]; the rest of the batch is unaffected.

use std::borrow::Cow;

use tokenwind_config::Config;
use tokenwind_tokens::{Dictionary, Token};
use tracing::{debug, warn};

use crate::css::CssBuilder;
use crate::entry::{Diagnostic, ProcessedTokens};
use crate::naming::effective_type;
use crate::path::PathNormalizer;
use crate::transform::{default_transformers, TransformContext, Transformer};

pub struct TokenEngine<'c> {
    config: &'c Config,
    transformers: Vec<Box<dyn Transformer>>,
}

impl<'c> TokenEngine<'c> {
    /// An engine with the built-in transformers.
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            transformers: default_transformers(),
        }
    }

    /// An engine with no transformers registered.
    pub fn empty(config: &'c Config) -> Self {
        Self {
            config,
            transformers: Vec::new(),
        }
    }

    /// Append a transformer; it is consulted after every earlier one.
    pub fn register(&mut self, transformer: Box<dyn Transformer>) {
        self.transformers.push(transformer);
    }

    pub fn transformer_names(&self) -> Vec<&'static str> {
        self.transformers.iter().map(|t| t.name()).collect()
    }

    pub fn process(&self, dictionary: &Dictionary) -> ProcessedTokens {
        let index = dictionary.index();
        let normalizer = PathNormalizer::new(self.config);
        let ctx = TransformContext {
            config: self.config,
            index: &index,
            normalizer: &normalizer,
            css: CssBuilder::new(self.config.indent_size),
        };

        let mut result = ProcessedTokens::default();
        for token in dictionary {
            self.process_token(token, &ctx, &mut result);
        }
        debug!(
            tokens = dictionary.len(),
            skipped = result.diagnostics.len(),
            "processed dictionary"
        );
        result
    }

    fn process_token(&self, token: &Token, ctx: &TransformContext<'_>, result: &mut ProcessedTokens) {
        let token: Cow<'_, Token> = match effective_type(token, self.config) {
            Cow::Borrowed(_) => Cow::Borrowed(token),
            Cow::Owned(kind) => {
                debug!(token = %token.name, from = %token.kind, to = %kind, "mapped token type");
                let mut mapped = token.clone();
                mapped.kind = kind;
                Cow::Owned(mapped)
            }
        };

        let Some(transformer) = self.transformers.iter().find(|t| t.accepts(&token)) else {
            warn!(token = %token.name, kind = %token.kind, "no transformer for token type");
            result.diagnostics.push(Diagnostic {
                token: token.name.clone(),
                message: format!("unsupported token type `{}`", token.kind),
            });
            return;
        };

        let path = ctx.normalizer.normalize(&token.path);
        match transformer.transform(&token, &path, ctx) {
            Ok(entries) if entries.is_empty() => {
                debug!(token = %token.name, transformer = transformer.name(), "token produced no output");
            }
            Ok(entries) => {
                for entry in entries {
                    result.push(entry);
                }
            }
            Err(err) => {
                warn!(token = %token.name, transformer = transformer.name(), error = %err, "skipping token");
                result.diagnostics.push(Diagnostic {
                    token: token.name.clone(),
                    message: err.message,
                });
            }
        }
    }
}
