// Test behavior extraction

use once_cell::sync::Lazy;
use regex::Regex;

/// Behavior descriptions in file order, duplicates kept
pub type TestBehaviors = Vec<String>;

/// `it("...")` and `test("...")` are synonyms
static BEHAVIOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:it|test)\(\s*['"]([^'"]+)['"]"#).unwrap());

/// Collect test behavior descriptions in the order they appear
pub fn extract_behaviors(content: &str) -> TestBehaviors {
    BEHAVIOR_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
