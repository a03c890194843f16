/// A child of a tree node, either raw token text or a nested node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    Token(String),
    Tree(Tree),
}

impl From<Tree> for Child {
    fn from(tree: Tree) -> Self {
        Child::Tree(tree)
    }
}

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Child::Token(s.to_owned())
    }
}

/// A tagged tree as produced by a grammar description parser.
///
/// Tags are kept as plain strings, the transformer decides whether it knows
/// them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    pub tag: String,
    pub children: Vec<Child>,
}

impl Tree {
    pub fn new<S: Into<String>>(tag: S, children: Vec<Child>) -> Self {
        Tree {
            tag: tag.into(),
            children,
        }
    }

    /// A node holding a single token.
    pub fn leaf<S: Into<String>>(tag: S, token: &str) -> Self {
        Self::new(tag, vec![token.into()])
    }
}
