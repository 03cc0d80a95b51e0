//! Path and theme-variant normalization shared by every transformer.
//!
//! A token path such as `["sd", "theme", "content", "dark"]` is reduced to the
//! segments that make up its CSS name (`["theme", "content"]`) plus the theme
//! variant it belongs to (`dark`). Tokens ending in the root sentinel (`_`)
//! are the always-active default and carry no variant.

use tokenwind_config::Config;

/// Leading segments dropped from every path, in order, each at most once.
pub const STRIPPED_PREFIXES: &[&str] = &["sd", "color"];

/// Result of normalizing a token path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPath {
    /// Segments that form the CSS name.
    pub final_path: Vec<String>,
    /// Theme variant, `None` for unthemed tokens and the root entry.
    pub variant: Option<String>,
    pub is_theme: bool,
    /// The path exactly as received.
    pub original_path: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PathNormalizer {
    root_property_name: String,
    marker_words: Vec<String>,
}

impl PathNormalizer {
    pub fn new(config: &Config) -> Self {
        Self::with_marker(&config.root_property_name, &config.theme_pattern)
    }

    pub fn with_marker(root_property_name: &str, theme_pattern: &str) -> Self {
        Self {
            root_property_name: root_property_name.to_string(),
            marker_words: theme_pattern.split('-').map(str::to_string).collect(),
        }
    }

    pub fn normalize(&self, path: &[String]) -> NormalizedPath {
        let mut stripped = path;
        for prefix in STRIPPED_PREFIXES {
            if stripped.first().map(String::as_str) == Some(*prefix) {
                stripped = &stripped[1..];
            }
        }

        let marker_end = self.marker_end(stripped);
        let mut final_path = stripped.to_vec();
        let mut variant = None;

        // Only a segment after the marker can name a variant.
        if let Some(end) = marker_end {
            if final_path.len() > end + 1 {
                if let Some(last) = final_path.pop() {
                    if last != self.root_property_name {
                        variant = Some(last);
                    }
                }
            }
        }

        NormalizedPath {
            final_path,
            variant,
            is_theme: marker_end.is_some(),
            original_path: path.to_vec(),
        }
    }

    /// Index of the segment holding the last word of the first theme-marker
    /// occurrence.
    ///
    /// The marker and the path are compared word by word after splitting on
    /// `-`, so `theme-content` matches both `["theme", "content"]` and
    /// `["theme-content"]`.
    fn marker_end(&self, path: &[String]) -> Option<usize> {
        let words: Vec<(usize, &str)> = path
            .iter()
            .enumerate()
            .flat_map(|(i, segment)| segment.split('-').map(move |w| (i, w)))
            .collect();
        let n = self.marker_words.len();
        if n == 0 || words.len() < n {
            return None;
        }
        words
            .windows(n)
            .find(|window| {
                window
                    .iter()
                    .zip(&self.marker_words)
                    .all(|((_, word), marker)| word == marker)
            })
            .map(|window| window[n - 1].0)
    }
}
