//! Case conversions for CSS identifiers.

/// Convert a path segment or property key to kebab-case.
///
/// A dash is inserted at each lowercase→uppercase boundary, underscores become
/// dashes, and the result is lowercased: `fontSize` → `font-size`,
/// `line_height` → `line-height`, `2xl` → `2xl`.
pub fn to_kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev_lower = false;
    for ch in input.chars() {
        if ch.is_ascii_uppercase() && prev_lower {
            out.push('-');
        }
        prev_lower = ch.is_ascii_lowercase();
        match ch {
            '_' => out.push('-'),
            _ => out.push(ch.to_ascii_lowercase()),
        }
    }
    out
}

/// Convert a camelCase CSS property key to its dashed form.
///
/// Every uppercase letter gets a leading dash, so vendor keys keep their
/// prefix dash: `WebkitTransition` → `-webkit-transition`.
pub fn camel_to_kebab(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for ch in input.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Kebab-case every segment of a path.
pub fn kebab_path<S: AsRef<str>>(path: &[S]) -> Vec<String> {
    path.iter().map(|p| to_kebab_case(p.as_ref())).collect()
}

/// Turn a resolver token name into a utility identifier: a leading `sd.`
/// namespace is dropped and dots become dashes.
pub fn normalize_token_name(name: &str) -> String {
    name.strip_prefix("sd.").unwrap_or(name).replace('.', "-")
}
