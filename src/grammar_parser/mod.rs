//! Textual grammar format.
//!
//! One rule per line, alternatives separated by `|`:
//!
//! ```text
//! S   -> NP VP
//! Det -> the | a
//! Sum -> Sum "+" Product | Product
//! Opt -> ε | x
//! ```
//!
//! Symbols are identifiers or double-quoted strings. `ε`, or an empty
//! alternative, is the empty production. Arrows may be `->`, `::=` or `→`.
//! Several lines for the same left-hand side add to its alternatives.

#[cfg(test)]
mod tests;
#[cfg(test)]
mod tests_rejections;

use chumsky::{
    prelude::*,
    text::{inline_whitespace, newline},
};
use thiserror::Error;

use crate::grammar::Grammar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Str<'gr> {
    pub text: &'gr str,
    pub span: SimpleSpan,
}

impl<'gr> std::ops::Deref for Str<'gr> {
    type Target = &'gr str;
    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl<'gr> std::fmt::Display for Str<'gr> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.text.fmt(f)
    }
}

impl<'gr> Str<'gr> {
    pub fn new(text: &'gr str, span: SimpleSpan) -> Self {
        Self { text, span }
    }
}

impl<'gr> PartialEq<&str> for Str<'gr> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol<'gr> {
    /// A bare identifier.
    Name(Str<'gr>),
    /// A double-quoted symbol, for tokens that are not identifiers.
    Quoted(Str<'gr>),
    Epsilon(SimpleSpan),
}

impl<'gr> Symbol<'gr> {
    /// The symbol as the recognizer sees it; `None` for `ε`.
    pub fn text(&self) -> Option<&'gr str> {
        match self {
            Symbol::Name(s) | Symbol::Quoted(s) => Some(s.text),
            Symbol::Epsilon(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule<'gr> {
    pub lhs: Str<'gr>,
    pub alternatives: Vec<Vec<Symbol<'gr>>>,
}

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("Error(s) while parsing the grammar : {0}")]
    Syntax(String),
}

type Extra<'gr> = extra::Err<Rich<'gr, char>>;

pub fn rules<'gr>() -> impl Parser<'gr, &'gr str, Vec<Rule<'gr>>, Extra<'gr>> {
    rule()
        .padded_by(inline_whitespace())
        .separated_by(newline().then(inline_whitespace()).repeated().at_least(1))
        .allow_leading()
        .allow_trailing()
        .collect()
        .padded()
}

fn rule<'gr>() -> impl Parser<'gr, &'gr str, Rule<'gr>, Extra<'gr>> {
    ident()
        .then_ignore(arrow().padded_by(inline_whitespace()))
        .then(alternatives())
        .map(|(lhs, alternatives)| Rule { lhs, alternatives })
}

fn arrow<'gr>() -> impl Parser<'gr, &'gr str, (), Extra<'gr>> {
    choice((just("->"), just("::="), just("→"))).ignored()
}

fn ident<'gr>() -> impl Parser<'gr, &'gr str, Str<'gr>, Extra<'gr>> {
    text::ident().map_with(|s, extra| Str::new(s, extra.span()))
}

fn quoted<'gr>() -> impl Parser<'gr, &'gr str, Str<'gr>, Extra<'gr>> {
    just('"')
        .ignore_then(
            any()
                .filter(|c: &char| *c != '"' && *c != '\n')
                .repeated()
                .at_least(1)
                .to_slice(),
        )
        .then_ignore(just('"'))
        .map_with(|s, extra| Str::new(s, extra.span()))
}

fn symbol<'gr>() -> impl Parser<'gr, &'gr str, Symbol<'gr>, Extra<'gr>> {
    choice((
        quoted().map(Symbol::Quoted),
        ident().filter(|s| s.text != "ε").map(Symbol::Name),
        just('ε').map_with(|_, extra| Symbol::Epsilon(extra.span())),
    ))
}

fn alternatives<'gr>() -> impl Parser<'gr, &'gr str, Vec<Vec<Symbol<'gr>>>, Extra<'gr>> {
    symbol()
        .padded_by(inline_whitespace())
        .repeated()
        .collect::<Vec<_>>()
        .separated_by(just('|'))
        .at_least(1)
        .collect()
}

/// Parses `text` into a [`Grammar`] whose symbols borrow from `text`.
pub fn parse_grammar(text: &str) -> Result<Grammar<'_>, GrammarError> {
    rules()
        .parse(text)
        .into_result()
        .map(Grammar::from)
        .map_err(|errors| {
            let mut error_string = String::new();
            for e in errors {
                error_string += &format!("\n{} at {}", e, e.span());
            }
            GrammarError::Syntax(error_string)
        })
}
