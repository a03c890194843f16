//! Load grammar rules written as text into frozen productions.
//!
//! ```
//! let rule = chomsky::Loader::new().load_rule("S -> a A | a").unwrap();
//! assert_eq!(rule.to_string(), "S -> aA | a");
//! ```

use std::fmt::{self, Display};

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use grammar::{Config, Node, Production, Transformer, Tree};

/// A rule with its start production and alternatives, all frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub start: Production,
    pub alternatives: Vec<Production>,
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ->", self.start)?;
        for (i, alt) in self.alternatives.iter().enumerate() {
            if i > 0 {
                write!(f, " |")?;
            }
            write!(f, " {}", alt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Loader {
    transformer: Transformer,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Loader {
            transformer: Transformer::with_config(config),
        }
    }

    pub fn load_rule(&self, text: &str) -> Result<Rule> {
        let tree = meta::parse_rule(text).with_context(|| format!("parse rule '{}'", text))?;
        self.rule_from_tree(tree)
    }

    /// Load one rule per line.
    pub fn load_grammar(&self, text: &str) -> Result<Vec<Rule>> {
        let trees = meta::parse_grammar(text).context("parse grammar")?;
        trees
            .into_iter()
            .map(|tree| self.rule_from_tree(tree))
            .collect()
    }

    /// Transform a `productions` tree and freeze the result.
    pub fn rule_from_tree(&self, tree: Tree) -> Result<Rule> {
        let node = self.transformer.transform(tree)?;
        let mut children = node
            .into_children()
            .ok_or_else(|| anyhow!("rule did not transform into a list"))?
            .into_iter();

        let mut start = children
            .next()
            .and_then(Node::into_production)
            .ok_or_else(|| anyhow!("rule is missing its start production"))?;
        let mut alternatives = children
            .next()
            .and_then(Node::into_children)
            .ok_or_else(|| anyhow!("rule is missing its alternatives"))?
            .into_iter()
            .map(|node| {
                node.into_production()
                    .ok_or_else(|| anyhow!("alternative is not a production"))
            })
            .collect::<Result<Vec<_>>>()?;

        start.freeze();
        alternatives.iter_mut().for_each(Production::freeze);
        debug!(start = %start, alternatives = alternatives.len(), "assembled rule");

        Ok(Rule {
            start,
            alternatives,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grammar::{Child, Symbol};

    fn frozen(symbols: Vec<Symbol>) -> Production {
        let mut p = Production::from(symbols);
        p.freeze();
        p
    }

    #[test]
    fn rule_display() {
        let rule = Rule {
            start: frozen(vec![Symbol::non_terminal("S")]),
            alternatives: vec![
                frozen(vec![Symbol::terminal("a"), Symbol::non_terminal("A")]),
                frozen(vec![Symbol::terminal("&")]),
            ],
        };
        assert_eq!(rule.to_string(), "S -> aA | &");
    }

    #[test]
    fn tree_without_alternatives() {
        let tree = Tree::new(
            "productions",
            vec![Child::Tree(Tree::new(
                "non_terminal_start",
                vec![Child::Tree(Tree::leaf("non_terminal", "S"))],
            ))],
        );
        let err = Loader::new().rule_from_tree(tree).unwrap_err();
        assert_eq!(err.to_string(), "rule is missing its alternatives");
    }

    #[test]
    fn tree_that_is_not_a_rule() {
        let err = Loader::new()
            .rule_from_tree(Tree::leaf("terminal", "a"))
            .unwrap_err();
        assert_eq!(err.to_string(), "rule did not transform into a list");
    }
}
