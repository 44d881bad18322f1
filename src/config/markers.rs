//! Line-level tokens recognized in annotated source.

use serde::{Deserialize, Serialize};

/// The fixed tokens the classifier matches against each trimmed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Prefix marking a prose comment line.
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,

    /// Token that toggles an equation block.
    #[serde(default = "default_equation_delimiter")]
    pub equation_delimiter: String,

    /// Directive line that is invisible to the state machine.
    #[serde(default = "default_pragma")]
    pub pragma: String,

    /// Lines dropped entirely: visibility labels and body braces.
    #[serde(default = "default_noise")]
    pub noise: Vec<String>,

    /// Prefix of a type-definition line, also dropped.
    #[serde(default = "default_type_prefix")]
    pub type_prefix: String,
}

fn default_comment_prefix() -> String {
    "/// ".to_string()
}

fn default_equation_delimiter() -> String {
    "/// $$".to_string()
}

fn default_pragma() -> String {
    "#pragma once".to_string()
}

fn default_noise() -> Vec<String> {
    ["public:", "private:", "{", "};"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_type_prefix() -> String {
    "class".to_string()
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            comment_prefix: default_comment_prefix(),
            equation_delimiter: default_equation_delimiter(),
            pragma: default_pragma(),
            noise: default_noise(),
            type_prefix: default_type_prefix(),
        }
    }
}

impl Markers {
    /// Returns true if the trimmed line is host-language scaffolding that
    /// carries no literate content.
    pub fn is_structural_noise(&self, trimmed: &str) -> bool {
        self.noise.iter().any(|n| n == trimmed) || trimmed.starts_with(&self.type_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let markers = Markers::default();
        assert_eq!(markers.comment_prefix, "/// ");
        assert_eq!(markers.equation_delimiter, "/// $$");
        assert_eq!(markers.pragma, "#pragma once");
        assert_eq!(markers.type_prefix, "class");
    }

    #[test]
    fn test_structural_noise_literals() {
        let markers = Markers::default();
        assert!(markers.is_structural_noise("public:"));
        assert!(markers.is_structural_noise("private:"));
        assert!(markers.is_structural_noise("{"));
        assert!(markers.is_structural_noise("};"));
    }

    #[test]
    fn test_structural_noise_type_prefix() {
        let markers = Markers::default();
        assert!(markers.is_structural_noise("class Mallet"));
        assert!(!markers.is_structural_noise("void reset();"));
        assert!(!markers.is_structural_noise("int x = 1;"));
    }
}
