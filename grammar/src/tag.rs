//! Tags of the grammar description tree and the handler each one selects.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::Error;
use crate::symbol::SymbolKind;

/// What the transformer does with a node of some tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Handler {
    /// A meta character of the grammar language. The node's own text is used
    /// if present, the default otherwise.
    Literal(&'static str),
    /// Join the children into a single symbol.
    Concatenate(SymbolKind),
    /// Collect child symbols into a production.
    AssembleProduction,
    /// Wrap the start non-terminal into a production.
    StartSymbol,
    /// Structural grouping node, children are passed on unchanged.
    Passthrough,
}

macro_rules! tags {
    ($($variant:ident => $name:literal,)*) => {
        /// A node tag produced by the grammar description parser.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum Tag {
            $($variant,)*
        }

        impl Tag {
            pub const ALL: &'static [Tag] = &[$(Tag::$variant,)*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Tag::$variant => $name,)*
                }
            }
        }

        impl FromStr for Tag {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Tag::$variant),)*
                    _ => Err(Error::UnrecognizedTag(s.to_owned())),
                }
            }
        }
    };
}

tags! {
    Epsilon => "epsilon",
    Quote => "quote",
    Minus => "minus",
    Plus => "plus",
    Star => "star",
    Comma => "comma",
    Colon => "colon",
    Dot => "dot",
    DoubleQuote => "double_quote",
    Percentage => "percentage",
    Dollar => "dollar",
    AtSign => "at_sign",
    Sharp => "sharp",
    Exclamation => "exclamation",
    Backtick => "backtick",
    Tick => "tick",
    Caret => "caret",
    Tilde => "tilde",
    Question => "question",
    Equals => "equals",
    Semicolon => "semicolon",
    Slash => "slash",
    Backslash => "backslash",
    OpenParen => "open_paren",
    CloseParen => "close_paren",
    OpenBracket => "open_bracket",
    CloseBracket => "close_bracket",
    OpenBrace => "open_brace",
    CloseBrace => "close_brace",
    Terminal => "terminal",
    NonTerminal => "non_terminal",
    Production => "production",
    NonTerminalStart => "non_terminal_start",
    Productions => "productions",
    NonTerminals => "non_terminals",
}

impl Tag {
    pub fn handler(self) -> Handler {
        match self {
            Tag::Epsilon => Handler::Literal("&"),
            Tag::Quote => Handler::Literal("'"),
            Tag::Minus => Handler::Literal("-"),
            Tag::Plus => Handler::Literal("+"),
            Tag::Star => Handler::Literal("*"),
            Tag::Comma => Handler::Literal(","),
            Tag::Colon => Handler::Literal(":"),
            Tag::Dot => Handler::Literal("."),
            Tag::DoubleQuote => Handler::Literal("\""),
            Tag::Percentage => Handler::Literal("%"),
            Tag::Dollar => Handler::Literal("$"),
            Tag::AtSign => Handler::Literal("@"),
            Tag::Sharp => Handler::Literal("#"),
            Tag::Exclamation => Handler::Literal("!"),
            Tag::Backtick => Handler::Literal("`"),
            Tag::Tick => Handler::Literal("´"),
            Tag::Caret => Handler::Literal("^"),
            Tag::Tilde => Handler::Literal("~"),
            Tag::Question => Handler::Literal("?"),
            Tag::Equals => Handler::Literal("="),
            Tag::Semicolon => Handler::Literal(";"),
            Tag::Slash => Handler::Literal("/"),
            Tag::Backslash => Handler::Literal("\\"),
            Tag::OpenParen => Handler::Literal("("),
            Tag::CloseParen => Handler::Literal(")"),
            Tag::OpenBracket => Handler::Literal("["),
            Tag::CloseBracket => Handler::Literal("]"),
            Tag::OpenBrace => Handler::Literal("{"),
            Tag::CloseBrace => Handler::Literal("}"),
            Tag::Terminal => Handler::Concatenate(SymbolKind::Terminal),
            Tag::NonTerminal => Handler::Concatenate(SymbolKind::NonTerminal),
            Tag::Production => Handler::AssembleProduction,
            Tag::NonTerminalStart => Handler::StartSymbol,
            Tag::Productions | Tag::NonTerminals => Handler::Passthrough,
        }
    }

    /// The tag for a meta character, if it has one.
    pub fn for_literal(c: char) -> Option<Tag> {
        let mut buf = [0; 4];
        let s: &str = c.encode_utf8(&mut buf);
        Tag::ALL
            .iter()
            .copied()
            .find(|tag| matches!(tag.handler(), Handler::Literal(default) if default == s))
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_round_trip() {
        for tag in Tag::ALL {
            assert_eq!(tag.as_str().parse::<Tag>().unwrap(), *tag);
        }
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            "ampersand".parse::<Tag>().unwrap_err(),
            Error::UnrecognizedTag("ampersand".to_owned())
        );
        assert!("Terminal".parse::<Tag>().is_err());
    }

    #[test]
    fn literal_defaults_are_single_distinct_chars() {
        let mut seen = HashSet::new();
        for tag in Tag::ALL {
            if let Handler::Literal(default) = tag.handler() {
                assert_eq!(default.chars().count(), 1, "tag: {}", tag);
                assert!(seen.insert(default), "duplicate default for {}", tag);
            }
        }
        assert_eq!(seen.len(), 29);
    }

    #[test]
    fn literal_lookup() {
        let tests = vec![
            ('&', Some(Tag::Epsilon)),
            ('\'', Some(Tag::Quote)),
            ('´', Some(Tag::Tick)),
            ('\\', Some(Tag::Backslash)),
            ('}', Some(Tag::CloseBrace)),
            ('a', None),
            ('|', None),
        ];
        for test in tests {
            assert_eq!(Tag::for_literal(test.0), test.1, "test case: {:?}", test);
        }
    }

    #[test]
    fn structural_handlers() {
        assert_eq!(
            Tag::Terminal.handler(),
            Handler::Concatenate(SymbolKind::Terminal)
        );
        assert_eq!(
            Tag::NonTerminal.handler(),
            Handler::Concatenate(SymbolKind::NonTerminal)
        );
        assert_eq!(Tag::Production.handler(), Handler::AssembleProduction);
        assert_eq!(Tag::NonTerminalStart.handler(), Handler::StartSymbol);
        assert_eq!(Tag::Productions.handler(), Handler::Passthrough);
    }
}
