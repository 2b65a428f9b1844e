pub mod ast;
pub mod matcher;
pub mod parser;

pub use parser::PatternSyntaxError;

/// Parse `pattern` and test it against the whole of `text`.
///
/// A malformed pattern is a parse error, never a `false` match. Each call
/// parses afresh and shares no state, so concurrent calls need no
/// synchronization.
pub fn regex_match(pattern: &str, text: &str) -> Result<bool, PatternSyntaxError> {
    let mut p = parser::Parser::new(pattern);
    let root = p.parse()?;
    Ok(matcher::is_match(&root, text))
}
