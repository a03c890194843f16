use std::fmt::{self, Debug, Display};

use crate::error::Result;
use crate::freeze::{Lockable, Render};
use crate::symbol::Symbol;

/// Payload of a [`Production`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence(Vec<Symbol>);

impl Render for Sequence {
    fn render(&self) -> String {
        self.0.iter().map(|s| s.to_string()).collect()
    }

    fn length(&self) -> usize {
        self.0.len()
    }

    fn key(&self) -> String {
        self.0.iter().map(Symbol::key).collect()
    }
}

/// One right hand side of a grammar rule, read left to right.
///
/// Symbols are appended with [`Production::add`] while unlocked. Freezing a
/// production freezes all of its symbols.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Production(Lockable<Sequence>);

impl Production {
    pub fn new() -> Self {
        Production(Lockable::new(Sequence::default()))
    }

    pub fn add(&mut self, symbol: Symbol) -> Result<()> {
        self.0.update(|seq| seq.0.push(symbol))
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0.get().0
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.0.length()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn freeze(&mut self) {
        if self.0.is_frozen() {
            return;
        }
        // Can't fail, checked above.
        let _ = self.0.update(|seq| seq.0.iter_mut().for_each(Symbol::freeze));
        self.0.freeze();
    }

    /// Unlocks the production only; its symbols stay frozen.
    pub fn unlock(&mut self) {
        self.0.unlock()
    }

    pub fn is_frozen(&self) -> bool {
        self.0.is_frozen()
    }

    pub fn duplicate(&self, keep_frozen: bool) -> Self {
        Production(self.0.duplicate(keep_frozen))
    }
}

impl Default for Production {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Symbol>> for Production {
    fn from(symbols: Vec<Symbol>) -> Self {
        Production(Lockable::new(Sequence(symbols)))
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.symbols()).finish()
    }
}
