/// Options for the tree transformer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Reject children of a production node that are not symbols instead of
    /// skipping them.
    pub strict_productions: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_productions(mut self, strict: bool) -> Self {
        self.strict_productions = strict;
        self
    }
}
