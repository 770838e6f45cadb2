//! Line-level recognition of `@import` directives.

use regex::Regex;
use std::sync::LazyLock;

/// `@import`, whitespace, a quoted path, optional semicolon.
///
/// Unanchored on purpose: a directive is recognized anywhere in a line, and
/// the opening and closing quotes are not required to be the same character.
static IMPORT_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@import\s+["'](.+?)["'];?"#).expect("import directive pattern is valid")
});

/// Return the quoted import path if `line` contains an include directive.
pub fn match_import(line: &str) -> Option<&str> {
    IMPORT_DIRECTIVE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
