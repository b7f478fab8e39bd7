//! Lexical symbol classification for TypeScript-style sources.
//!
//! Declarations are recognized with regular expressions over the raw text,
//! not a grammar. Names inside comments or string literals that look like a
//! declaration are counted too; that is a known limitation of the approach.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// COMPILED REGEX PATTERNS
// =============================================================================

/// `function name(`, optionally exported and/or async. Arrow functions bound
/// to a `const` are not functions here.
static FUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:export\s+)?(?:async\s+)?function\s+(\w+)\s*\(").unwrap());

static CLASS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:export\s+)?class\s+(\w+)").unwrap());

static INTERFACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:export\s+)?interface\s+(\w+)").unwrap());

static TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:export\s+)?type\s+(\w+)\s*=").unwrap());

/// `const name:` or `const name =`
static CONST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:export\s+)?const\s+(\w+)\s*[:=]").unwrap());

/// `const name = (`, a likely function expression
static FUNCTION_EXPR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"const\s+(\w+)\s*=\s*\(").unwrap());

static EXPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+(?:const|function|class|interface|type)\s+(\w+)").unwrap()
});

/// Control-flow and declaration keywords that are never reported as symbols.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "if",
    "for",
    "while",
    "do",
    "switch",
    "case",
    "default",
    "try",
    "catch",
    "finally",
    "throw",
    "return",
    "break",
    "continue",
    "new",
    "this",
    "super",
    "extends",
    "implements",
    "import",
    "export",
    "from",
    "as",
    "typeof",
    "instanceof",
    "in",
    "of",
    "let",
    "var",
    "const",
];

/// Check whether a name is in the reserved keyword table
pub fn is_reserved(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(&name)
}

/// Symbols declared in one source file, grouped by declaration kind.
///
/// Every category is a set: a name declared twice is reported once.
/// `exports` is computed independently and overlaps the other categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSet {
    pub functions: BTreeSet<String>,
    pub classes: BTreeSet<String>,
    pub interfaces: BTreeSet<String>,
    pub types: BTreeSet<String>,
    pub constants: BTreeSet<String>,
    pub exports: BTreeSet<String>,
}

impl SymbolSet {
    /// Functions, classes and interfaces; the figure used for project totals
    pub fn primary_count(&self) -> usize {
        self.functions.len() + self.classes.len() + self.interfaces.len()
    }

    /// True when no declaration of any kind was recognized
    pub fn is_empty(&self) -> bool {
        self.category_counts().is_empty() && self.exports.is_empty()
    }

    /// Non-empty categories in display order: classes, interfaces,
    /// functions, types, constants.
    pub fn category_counts(&self) -> Vec<(&'static str, usize)> {
        [
            ("classes", &self.classes),
            ("interfaces", &self.interfaces),
            ("functions", &self.functions),
            ("types", &self.types),
            ("constants", &self.constants),
        ]
        .into_iter()
        .filter(|(_, names)| !names.is_empty())
        .map(|(label, names)| (label, names.len()))
        .collect()
    }
}

/// Classify the declarations found in `content`.
///
/// Never fails; content without declarations yields an empty set.
pub fn classify(content: &str) -> SymbolSet {
    let function_exprs: BTreeSet<&str> = captures(&FUNCTION_EXPR_RE, content).collect();

    SymbolSet {
        functions: collect_names(captures(&FUNCTION_RE, content)),
        classes: collect_names(captures(&CLASS_RE, content)),
        interfaces: collect_names(captures(&INTERFACE_RE, content)),
        types: collect_names(captures(&TYPE_RE, content)),
        constants: collect_names(
            captures(&CONST_RE, content).filter(|name| !function_exprs.contains(name)),
        ),
        exports: collect_names(captures(&EXPORT_RE, content)),
    }
}

/// First capture group of every non-overlapping match
fn captures<'a>(re: &'a Regex, content: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    re.captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// De-duplicate and drop keywords and single-character names
fn collect_names<'a>(names: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    names
        .filter(|name| name.chars().count() > 1 && !is_reserved(name))
        .map(str::to_string)
        .collect()
}
