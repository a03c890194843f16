use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1, take_while_m_n},
    character::complete::{multispace0, one_of, space0},
    combinator::{map, map_opt, recognize},
    multi::{many1, separated_list1},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use grammar::{Child, Tag, Tree};

/// Characters of the description language that stand for themselves when
/// written on the right hand side of a rule.
const META_CHARS: &str = "&'-+*,:.\"%$@#!`´^~?=;/\\()[]{}";

fn char_leaves(tag: &str, s: &str) -> Tree {
    Tree::new(tag, s.chars().map(|c| Child::Token(c.to_string())).collect())
}

/// Uppercase letter followed by uppercase letters, digits or underscores.
pub fn non_terminal(input: &str) -> IResult<&str, Tree> {
    let (rem, matched) = recognize(pair(
        take_while_m_n(1, 1, |c: char| c.is_ascii_uppercase()),
        take_while(|c: char| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
    ))(input)?;
    Ok((rem, char_leaves(Tag::NonTerminal.as_str(), matched)))
}

/// Run of lowercase letters and digits.
pub fn terminal(input: &str) -> IResult<&str, Tree> {
    let (rem, matched) =
        take_while1(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit())(input)?;
    Ok((rem, char_leaves(Tag::Terminal.as_str(), matched)))
}

/// A single meta character as a terminal. Epsilon is left implicit, the
/// transformer fills in its text.
pub fn literal(input: &str) -> IResult<&str, Tree> {
    map_opt(one_of(META_CHARS), |c: char| {
        let tag = Tag::for_literal(c)?;
        let inner = match tag {
            Tag::Epsilon => Tree::new(tag.as_str(), Vec::new()),
            _ => Tree::leaf(tag.as_str(), &c.to_string()),
        };
        Some(Tree::new(Tag::Terminal.as_str(), vec![inner.into()]))
    })(input)
}

fn symbol(input: &str) -> IResult<&str, Tree> {
    alt((non_terminal, terminal, literal))(input)
}

pub fn production(input: &str) -> IResult<&str, Tree> {
    map(many1(preceded(space0, symbol)), |symbols| {
        Tree::new(
            Tag::Production.as_str(),
            symbols.into_iter().map(Child::from).collect(),
        )
    })(input)
}

pub fn rule(input: &str) -> IResult<&str, Tree> {
    let (rem, (start, _, alternatives)) = terminated(
        tuple((
            preceded(space0, non_terminal),
            preceded(space0, tag("->")),
            separated_list1(preceded(space0, tag("|")), production),
        )),
        space0,
    )(input)?;

    let start = Tree::new(Tag::NonTerminalStart.as_str(), vec![start.into()]);
    let alternatives = Tree::new(
        Tag::NonTerminals.as_str(),
        alternatives.into_iter().map(Child::from).collect(),
    );
    Ok((
        rem,
        Tree::new(
            Tag::Productions.as_str(),
            vec![start.into(), alternatives.into()],
        ),
    ))
}

/// One rule per line, blank lines are skipped.
pub fn rules(input: &str) -> IResult<&str, Vec<Tree>> {
    many1(delimited(multispace0, rule, multispace0))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Debug;

    struct TestCase<T> {
        input: &'static str,
        // Some indicates success, None indicates error.
        out: Option<IResult<&'static str, T>>,
    }

    fn assert_test_cases<T, F>(f: F, tests: Vec<TestCase<T>>)
    where
        T: Debug + Eq,
        F: Fn(&'static str) -> IResult<&'static str, T>,
    {
        for t in tests {
            let res = f(t.input);
            match t.out {
                Some(out) => assert_eq!(res, out, "input: {:?}", t.input),
                None => assert!(res.is_err(), "expected error: {:?}", res),
            }
        }
    }

    fn node(tag: &str, children: Vec<Tree>) -> Tree {
        Tree::new(tag, children.into_iter().map(Child::from).collect())
    }

    fn escaped(tag: &str, c: &str) -> Tree {
        node("terminal", vec![Tree::leaf(tag, c)])
    }

    #[test]
    fn parse_non_terminal() {
        let tests = vec![
            TestCase {
                input: "S",
                out: Some(Ok(("", char_leaves("non_terminal", "S")))),
            },
            TestCase {
                input: "EXPR_1 a",
                out: Some(Ok((" a", char_leaves("non_terminal", "EXPR_1")))),
            },
            TestCase {
                input: "Ab",
                out: Some(Ok(("b", char_leaves("non_terminal", "A")))),
            },
            TestCase {
                input: "a",
                out: None,
            },
        ];

        assert_test_cases(non_terminal, tests);
    }

    #[test]
    fn parse_terminal() {
        let tests = vec![
            TestCase {
                input: "abc",
                out: Some(Ok(("", char_leaves("terminal", "abc")))),
            },
            TestCase {
                input: "a1B",
                out: Some(Ok(("B", char_leaves("terminal", "a1")))),
            },
            TestCase {
                input: "A",
                out: None,
            },
        ];

        assert_test_cases(terminal, tests);
    }

    #[test]
    fn parse_literal() {
        let tests = vec![
            TestCase {
                input: "&",
                out: Some(Ok(("", node("terminal", vec![node("epsilon", vec![])])))),
            },
            TestCase {
                input: "'a",
                out: Some(Ok(("a", escaped("quote", "'")))),
            },
            TestCase {
                input: "´",
                out: Some(Ok(("", escaped("tick", "´")))),
            },
            TestCase {
                input: "|",
                out: None,
            },
        ];

        assert_test_cases(literal, tests);
    }

    #[test]
    fn parse_production() {
        let tests = vec![
            TestCase {
                input: "a A",
                out: Some(Ok((
                    "",
                    node(
                        "production",
                        vec![
                            char_leaves("terminal", "a"),
                            char_leaves("non_terminal", "A"),
                        ],
                    ),
                ))),
            },
            TestCase {
                input: "aA( | b",
                out: Some(Ok((
                    " | b",
                    node(
                        "production",
                        vec![
                            char_leaves("terminal", "a"),
                            char_leaves("non_terminal", "A"),
                            escaped("open_paren", "("),
                        ],
                    ),
                ))),
            },
        ];

        assert_test_cases(production, tests);
    }

    #[test]
    fn parse_rule() {
        let tests = vec![
            TestCase {
                input: "S -> a A | a",
                out: Some(Ok((
                    "",
                    node(
                        "productions",
                        vec![
                            node("non_terminal_start", vec![char_leaves("non_terminal", "S")]),
                            node(
                                "non_terminals",
                                vec![
                                    node(
                                        "production",
                                        vec![
                                            char_leaves("terminal", "a"),
                                            char_leaves("non_terminal", "A"),
                                        ],
                                    ),
                                    node("production", vec![char_leaves("terminal", "a")]),
                                ],
                            ),
                        ],
                    ),
                ))),
            },
            TestCase {
                input: "S a",
                out: None,
            },
            TestCase {
                input: "S ->",
                out: None,
            },
        ];

        assert_test_cases(rule, tests);
    }

    #[test]
    fn parse_rules() {
        let (rem, rules) = rules("S -> a A | a\n\n  A -> b | &\n").unwrap();
        assert_eq!(rem, "");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].children.len(), 2);
    }
}
