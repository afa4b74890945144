use std::fmt;

use itertools::Itertools;

/// Number of dot-separated parts kept from a placeholder.
const REFERENCE_PARTS: usize = 3;

/// A token reference of the form `first.second.third`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reference(String);
impl Reference {
    /// Builds a reference from the inner text of a `{...}` placeholder.
    ///
    /// Only the first three parts are kept, so `{x.y.z.extra}` becomes
    /// `x.y.z`. Placeholders with fewer than three parts are not references.
    pub fn from_placeholder(inner: &str) -> Option<Reference> {
        let parts = inner.split('.').take(REFERENCE_PARTS).collect_vec();
        if parts.len() < REFERENCE_PARTS {
            return None;
        }
        Some(Reference(parts.join(".")))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

peg::parser! {
  grammar placeholder_parser() for str {
    rule placeholder() -> &'input str = "{" v:$([^'}']*) "}" { v }

    pub(crate) rule placeholders() -> Vec<&'input str>
        = v:(p:placeholder() { Some(p) } / [_] { None })* { v.into_iter().flatten().collect() }
  }
}

/// Returns the inner text of every `{...}` span in `text`, left to right.
///
/// Spans never overlap. An opening brace with no closing brace after it is
/// treated as plain text.
pub fn placeholders(text: &str) -> Vec<&str> {
    // The grammar accepts any input; an error here would be a grammar bug.
    placeholder_parser::placeholders(text).unwrap_or_default()
}
