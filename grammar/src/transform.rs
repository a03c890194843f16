//! Bottom-up transformation of a tagged tree into grammar values.
//!
//! For the rule `S -> a A | a` the description parser produces:
//!
//! ```text
//! productions
//!   non_terminal_start
//!     non_terminal    S
//!   non_terminals
//!     production
//!       terminal      a
//!       non_terminal  A
//!     production
//!       terminal      a
//! ```
//!
//! which transforms into a list holding the start production `[S]` followed by
//! a list of the productions `[a, A]` and `[a]`. Productions are returned
//! unfrozen, whoever assembles the grammar freezes them.

use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::production::Production;
use crate::symbol::{Symbol, SymbolKind};
use crate::tag::{Handler, Tag};
use crate::tree::{Child, Tree};

/// A transformed node.
#[derive(Clone, Debug)]
pub enum Node {
    Token(String),
    Symbol(Symbol),
    Production(Production),
    List { tag: Tag, children: Vec<Node> },
}

impl Node {
    fn type_name(&self) -> &'static str {
        match self {
            Node::Token(_) => "Token",
            Node::Symbol(s) => s.kind().as_str(),
            Node::Production(_) => "Production",
            Node::List { .. } => "List",
        }
    }

    fn is_lockable(&self) -> bool {
        matches!(self, Node::Symbol(_) | Node::Production(_))
    }

    /// Compare two nodes.
    ///
    /// Comparing a symbol or production with a node that is neither is an
    /// error rather than simply unequal.
    pub fn try_eq(&self, other: &Node) -> Result<bool> {
        if self.is_lockable() != other.is_lockable() {
            return Err(Error::IncompatibleComparison {
                left: self.type_name(),
                right: other.type_name(),
            });
        }

        match (self, other) {
            (Node::Token(a), Node::Token(b)) => Ok(a == b),
            (Node::Symbol(a), Node::Symbol(b)) => Ok(a == b),
            (Node::Production(a), Node::Production(b)) => Ok(a == b),
            (
                Node::List {
                    tag: tag_a,
                    children: a,
                },
                Node::List {
                    tag: tag_b,
                    children: b,
                },
            ) => {
                if tag_a != tag_b || a.len() != b.len() {
                    return Ok(false);
                }
                for (a, b) in a.iter().zip(b) {
                    if !a.try_eq(b)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Node::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_production(self) -> Option<Production> {
        match self {
            Node::Production(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_children(self) -> Option<Vec<Node>> {
        match self {
            Node::List { children, .. } => Some(children),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Transformer {
    config: Config,
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Transformer { config }
    }

    /// Transform a whole tree, children before their parent.
    ///
    /// The tag of a node is checked before any of its children are visited.
    pub fn transform(&self, tree: Tree) -> Result<Node> {
        let tag: Tag = tree.tag.parse()?;
        let children = tree
            .children
            .into_iter()
            .map(|child| match child {
                Child::Token(s) => Ok(Node::Token(s)),
                Child::Tree(t) => self.transform(t),
            })
            .collect::<Result<Vec<_>>>()?;
        self.apply(tag, children)
    }

    /// Transform a single node whose children have already been transformed.
    pub fn apply(&self, tag: Tag, children: Vec<Node>) -> Result<Node> {
        trace!(tag = tag.as_str(), children = children.len(), "transforming node");
        match tag.handler() {
            Handler::Literal(default) => literal(tag, default, children).map(Node::Symbol),
            Handler::Concatenate(kind) => concatenate(tag, kind, children).map(Node::Symbol),
            Handler::AssembleProduction => self.production(tag, children).map(Node::Production),
            Handler::StartSymbol => start_symbol(tag, children).map(Node::Production),
            Handler::Passthrough => Ok(Node::List { tag, children }),
        }
    }

    fn production(&self, tag: Tag, children: Vec<Node>) -> Result<Production> {
        let mut production = Production::new();
        for child in children {
            match child {
                Node::Symbol(symbol) => production.add(symbol)?,
                other if self.config.strict_productions => {
                    return Err(malformed(
                        tag,
                        format!("expected a symbol, found {:?}", other),
                    ));
                }
                other => debug!(child = ?other, "skipping non-symbol child of production"),
            }
        }
        debug!(production = ?production, "assembled production");
        Ok(production)
    }
}

fn malformed(tag: Tag, reason: String) -> Error {
    Error::MalformedChild {
        tag: tag.as_str(),
        reason,
    }
}

/// Text of every child joined together. Only tokens and symbols have text.
fn joined_text(tag: Tag, children: Vec<Node>) -> Result<String> {
    let mut text = String::new();
    for child in children {
        match child {
            Node::Token(s) => text.push_str(&s),
            Node::Symbol(s) => text.push_str(s.text()),
            other => {
                return Err(malformed(
                    tag,
                    format!("expected a token, found {}", other.type_name()),
                ))
            }
        }
    }
    Ok(text)
}

fn literal(tag: Tag, default: &'static str, children: Vec<Node>) -> Result<Symbol> {
    let text = joined_text(tag, children)?;
    if text.is_empty() {
        Ok(Symbol::terminal(default))
    } else {
        Ok(Symbol::terminal(text))
    }
}

fn concatenate(tag: Tag, kind: SymbolKind, children: Vec<Node>) -> Result<Symbol> {
    if children.is_empty() {
        return Err(malformed(tag, "expected at least one token".to_owned()));
    }
    let text = joined_text(tag, children)?;
    Ok(Symbol::new(kind, text))
}

fn start_symbol(tag: Tag, mut children: Vec<Node>) -> Result<Production> {
    if children.len() != 1 {
        return Err(malformed(
            tag,
            format!("expected one non-terminal, found {} children", children.len()),
        ));
    }

    match children.pop() {
        Some(Node::Symbol(symbol)) if symbol.kind() == SymbolKind::NonTerminal => {
            let mut production = Production::new();
            production.add(symbol)?;
            Ok(production)
        }
        Some(other) => Err(malformed(
            tag,
            format!("expected a non-terminal, found {}", other.type_name()),
        )),
        None => Err(malformed(tag, "no children".to_owned())),
    }
}
