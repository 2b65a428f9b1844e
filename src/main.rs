use std::io::{self, Read};

use anyhow::Context;

// Reads the pattern from the first line of stdin and matches it against
// everything after the first newline, printing "true" or "false".
fn main() -> anyhow::Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let (pattern, text) = input.split_once('\n').unwrap_or((input.as_str(), ""));

    let matched = regex_matcher::regex_match(pattern, text)
        .with_context(|| format!("invalid pattern {:?}", pattern))?;
    println!("{}", matched);
    Ok(())
}
