use std::fmt::{self, Debug, Display};

use crate::error::Result;
use crate::freeze::{Lockable, Render};

/// The variant of a grammar symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Terminal,
    NonTerminal,
}

impl SymbolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Terminal => "Terminal",
            SymbolKind::NonTerminal => "NonTerminal",
        }
    }

    fn sigil(self) -> char {
        match self {
            SymbolKind::Terminal => 't',
            SymbolKind::NonTerminal => 'n',
        }
    }
}

/// Payload of a [`Symbol`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    kind: SymbolKind,
    text: String,
}

impl Render for Label {
    fn render(&self) -> String {
        self.text.clone()
    }

    fn length(&self) -> usize {
        self.text.chars().count()
    }

    /// Variant and byte length prefixed, so that keys of consecutive symbols
    /// can be concatenated without ambiguity.
    fn key(&self) -> String {
        format!("{}{}:{}", self.kind.sigil(), self.text.len(), self.text)
    }
}

/// A terminal or non-terminal grammar symbol.
///
/// Symbols of different kinds never compare equal, even when their text is
/// the same.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Symbol(Lockable<Label>);

impl Symbol {
    pub fn new<S: Into<String>>(kind: SymbolKind, text: S) -> Self {
        Symbol(Lockable::new(Label {
            kind,
            text: text.into(),
        }))
    }

    pub fn terminal<S: Into<String>>(text: S) -> Self {
        Self::new(SymbolKind::Terminal, text)
    }

    pub fn non_terminal<S: Into<String>>(text: S) -> Self {
        Self::new(SymbolKind::NonTerminal, text)
    }

    pub fn kind(&self) -> SymbolKind {
        self.0.get().kind
    }

    pub fn is_terminal(&self) -> bool {
        self.kind() == SymbolKind::Terminal
    }

    pub fn text(&self) -> &str {
        &self.0.get().text
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) -> Result<()> {
        let text = text.into();
        self.0.update(|label| label.text = text)
    }

    /// Number of characters in the text.
    pub fn len(&self) -> usize {
        self.0.length()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn freeze(&mut self) {
        self.0.freeze()
    }

    pub fn unlock(&mut self) {
        self.0.unlock()
    }

    pub fn is_frozen(&self) -> bool {
        self.0.is_frozen()
    }

    pub fn duplicate(&self, keep_frozen: bool) -> Self {
        Symbol(self.0.duplicate(keep_frozen))
    }

    pub(crate) fn key(&self) -> String {
        self.0.key().into_owned()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({:?})", self.kind().as_str(), self.text())
    }
}
