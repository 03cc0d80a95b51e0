//! Transformer output and the aggregate the CSS assembler renders.

use indexmap::IndexMap;

/// What a processed entry contributes to the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A custom property for the `@theme` block (or a variant rule).
    Variable,
    /// A spacing custom property; rendered after all other variables.
    SpacingVariable,
    /// A complete `@keyframes` block, emitted verbatim.
    Keyframes,
    /// A complete `@utility` directive.
    Utility,
    /// A complete component class rule.
    Component,
}

/// Uniform record emitted by a transformer for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedEntry {
    pub kind: EntryKind,
    /// Custom property, keyframes, utility, or class name.
    pub name: String,
    /// Property value, or the full rendered block for block kinds.
    pub value: String,
    pub variant: Option<String>,
}

impl ProcessedEntry {
    pub fn variable(name: String, value: String, variant: Option<String>) -> Self {
        Self {
            kind: EntryKind::Variable,
            name,
            value,
            variant,
        }
    }

    pub fn spacing(name: String, value: String, variant: Option<String>) -> Self {
        Self {
            kind: EntryKind::SpacingVariable,
            name,
            value,
            variant,
        }
    }

    pub fn block(kind: EntryKind, name: String, body: String) -> Self {
        Self {
            kind,
            name,
            value: body,
            variant: None,
        }
    }

    /// `name: value;`
    pub fn declaration(&self) -> String {
        format!("{}: {};", self.name, self.value)
    }
}

/// Declarations grouped by theme variant.
///
/// Variants keep first-seen order; declarations keep input order within a
/// variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantGroups {
    groups: IndexMap<String, Vec<String>>,
}

impl VariantGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, variant: &str, declaration: String) {
        self.groups
            .entry(variant.to_string())
            .or_default()
            .push(declaration);
    }

    pub fn get(&self, variant: &str) -> Option<&[String]> {
        self.groups.get(variant).map(Vec::as_slice)
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(variant, decls)| (variant.as_str(), decls.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Why a token contributed nothing to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub token: String,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.token, self.message)
    }
}

/// Everything the engine collected from one dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedTokens {
    /// Rendered declarations and keyframes blocks for `@theme`, input order.
    pub base_vars: Vec<String>,
    /// Spacing declarations, appended to `@theme` after `base_vars`.
    pub spacing: Vec<String>,
    pub theme_vars: VariantGroups,
    /// `@utility` directives from utility and composition tokens.
    pub utilities: Vec<String>,
    /// Component class rules.
    pub components: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ProcessedTokens {
    /// Fold one entry into its bucket.
    pub fn push(&mut self, entry: ProcessedEntry) {
        match (entry.kind, entry.variant.as_deref()) {
            (EntryKind::Variable | EntryKind::SpacingVariable, Some(variant)) => {
                let decl = entry.declaration();
                self.theme_vars.push(variant, decl);
            }
            (EntryKind::Variable, None) => self.base_vars.push(entry.declaration()),
            (EntryKind::SpacingVariable, None) => self.spacing.push(entry.declaration()),
            (EntryKind::Keyframes, _) => self.base_vars.push(entry.value),
            (EntryKind::Utility, _) => self.utilities.push(entry.value),
            (EntryKind::Component, _) => self.components.push(entry.value),
        }
    }

    /// Whether `@theme` has anything to hold.
    pub fn has_theme_block(&self) -> bool {
        !self.base_vars.is_empty() || !self.spacing.is_empty()
    }
}
