//! Parser for the grammar description language.
//!
//! A rule is written `S -> a A | a`: a non-terminal head, an arrow, and
//! alternatives separated by `|`. Non-terminals start with an uppercase
//! letter, terminals are runs of lowercase letters and digits, and meta
//! characters such as `&` (epsilon), `(` or `'` are terminals of their own.
//!
//! The output is the tagged [`Tree`] consumed by [`grammar::Transformer`].

use nom::combinator::all_consuming;

use grammar::Tree;

mod error;
mod parser;

pub use error::Error;

/// Parse a single rule.
pub fn parse_rule(input: &str) -> Result<Tree, Error> {
    let (_, tree) = all_consuming(parser::rule)(input)?;
    Ok(tree)
}

/// Parse one rule per line.
pub fn parse_grammar(input: &str) -> Result<Vec<Tree>, Error> {
    let (_, trees) = all_consuming(parser::rules)(input)?;
    Ok(trees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_garbage() {
        match parse_rule("S -> a |").unwrap_err() {
            Error::Syntax { remaining, .. } => assert_eq!(remaining, "|"),
            err => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn rules_per_line() {
        let trees = parse_grammar("S -> a A\nA -> b\n").unwrap();
        assert_eq!(trees.len(), 2);
        assert!(trees.iter().all(|t| t.tag == "productions"));
    }

    #[test]
    fn empty_grammar() {
        assert!(parse_grammar("").is_err());
        assert!(parse_grammar("  \n").is_err());
    }
}
