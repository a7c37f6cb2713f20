//! Declaration matchers

use regex::Regex;

use super::{ExtractError, Symbols};

/// Recognizes function and class declarations in raw text
pub trait DeclarationMatcher: Send + Sync {
    /// Short name of the syntax convention this matcher understands
    fn name(&self) -> &str;

    /// Function names in order of appearance, duplicates kept
    fn functions(&self, content: &str) -> Vec<String>;

    /// Class names in order of appearance, duplicates kept
    fn classes(&self, content: &str) -> Vec<String>;

    fn extract(&self, content: &str) -> Symbols {
        Symbols {
            functions: self.functions(content),
            classes: self.classes(content),
        }
    }
}

/// Built-in declaration syntax conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// `def name(...):` and `class Name:` / `class Name(Base):`
    Python,
    /// `function name(` and `class Name`
    JavaScript,
    /// Modifier-prefixed method signatures and `class Name`
    Java,
}

impl Convention {
    pub const ALL: [Self; 3] = [Self::Python, Self::JavaScript, Self::Java];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Java => "java",
        }
    }

    /// Pattern whose first capture group is a function name
    #[must_use]
    pub const fn function_pattern(&self) -> &'static str {
        match self {
            Self::Python => r"def\s+(\w+)\s*\(.*?\):",
            Self::JavaScript => r"function\s+(\w+)\s*\(",
            Self::Java => r"(?:public|private|protected|static|\s) +[\w<>\[\]]+\s+(\w+) *\([^)]*\) *\{?",
        }
    }

    /// Pattern whose first capture group is a class name
    #[must_use]
    pub const fn class_pattern(&self) -> &'static str {
        match self {
            Self::Python => r"class\s+(\w+)(?:\(.*?\))?:",
            Self::JavaScript | Self::Java => r"class\s+(\w+)",
        }
    }

    /// Build the matcher for this convention
    ///
    /// # Errors
    /// Returns an error if a built-in pattern fails to compile.
    pub fn matcher(&self) -> Result<PatternMatcher, ExtractError> {
        PatternMatcher::new(self.name(), self.function_pattern(), self.class_pattern())
    }
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Declaration matcher driven by two regular expressions.
///
/// Each expression must put the declared name in capture group 1. Matches
/// are collected left to right without overlap.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    name: String,
    function_re: Regex,
    class_re: Regex,
}

impl PatternMatcher {
    /// Compile a matcher from a function pattern and a class pattern
    ///
    /// # Errors
    /// Returns [`ExtractError::InvalidPattern`] if either pattern is invalid.
    pub fn new(
        name: impl Into<String>,
        function_pattern: &str,
        class_pattern: &str,
    ) -> Result<Self, ExtractError> {
        let name = name.into();
        let function_re = compile(&name, "function", function_pattern)?;
        let class_re = compile(&name, "class", class_pattern)?;
        Ok(Self {
            name,
            function_re,
            class_re,
        })
    }
}

impl DeclarationMatcher for PatternMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn functions(&self, content: &str) -> Vec<String> {
        captured_names(&self.function_re, content)
    }

    fn classes(&self, content: &str) -> Vec<String> {
        captured_names(&self.class_re, content)
    }
}

fn compile(matcher: &str, kind: &'static str, pattern: &str) -> Result<Regex, ExtractError> {
    Regex::new(pattern).map_err(|source| ExtractError::InvalidPattern {
        matcher: matcher.to_string(),
        kind,
        source,
    })
}

fn captured_names(re: &Regex, content: &str) -> Vec<String> {
    re.captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}
