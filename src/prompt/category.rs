//! Question categories that select a prompt template.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a submitted question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Numeric problems; answers are split into correct, sign variations and uncertain.
    Math,
    /// Reasoning problems; answers are split into correct and uncertain.
    #[default]
    Logic,
    /// Multiple-choice questions.
    Mcq,
    /// Anything else.
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Math,
        Category::Logic,
        Category::Mcq,
        Category::Other,
    ];

    /// Parse a category name. Matching is case-insensitive and ignores
    /// surrounding whitespace; unrecognized names fall back to `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "math" => Self::Math,
            "logic" => Self::Logic,
            "mcq" => Self::Mcq,
            _ => Self::Other,
        }
    }

    /// Resolve an optional, user-supplied category.
    ///
    /// A missing or blank value means `default`; anything else goes through
    /// [`Category::parse`].
    pub fn resolve(raw: Option<&str>, default: Category) -> Self {
        match raw.map(str::trim) {
            None | Some("") => default,
            Some(s) => Self::parse(s),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Logic => "logic",
            Self::Mcq => "mcq",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!(Category::parse("math"), Category::Math);
        assert_eq!(Category::parse("logic"), Category::Logic);
        assert_eq!(Category::parse("mcq"), Category::Mcq);
        assert_eq!(Category::parse("other"), Category::Other);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::parse("MCQ"), Category::Mcq);
        assert_eq!(Category::parse("  Math "), Category::Math);
    }

    #[test]
    fn test_unknown_category_is_other() {
        assert_eq!(Category::parse("physics"), Category::Other);
        assert_eq!(Category::parse("other questions"), Category::Other);
    }

    #[test]
    fn test_resolve_uses_default_when_missing() {
        assert_eq!(Category::resolve(None, Category::Logic), Category::Logic);
        assert_eq!(Category::resolve(Some("   "), Category::Mcq), Category::Mcq);
        assert_eq!(Category::resolve(Some("math"), Category::Mcq), Category::Math);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let yaml = serde_yaml::to_string(&Category::Mcq).unwrap();
        assert_eq!(yaml.trim(), "mcq");

        let parsed: Category = serde_yaml::from_str("math").unwrap();
        assert_eq!(parsed, Category::Math);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for category in Category::ALL {
            assert_eq!(Category::parse(&category.to_string()), category);
        }
    }
}
