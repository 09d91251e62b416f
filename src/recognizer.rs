use std::collections::HashSet;

use thiserror::Error;

use crate::grammar::{Grammar, ProdId};
use crate::trace::{ChartObserver, NoopObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}

/// The production an item is working through. `Root` is the synthetic
/// `γ -> start` production seeded into the first column; it is not part
/// of any grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProdRef {
    Root,
    Rule(ProdId),
}

/// Left-hand side of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Head<'gr> {
    Root,
    Named(&'gr str),
}

impl std::fmt::Display for Head<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Head::Root => write!(f, "γ"),
            Head::Named(name) => write!(f, "{}", name),
        }
    }
}

/// What a column may scan: the token at its position, or the end marker
/// past the last token. No grammar symbol matches the end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead<'t> {
    Token(&'t str),
    EndOfInput,
}

impl std::fmt::Display for Lookahead<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookahead::Token(tok) => write!(f, "{:?}", tok),
            Lookahead::EndOfInput => write!(f, "<EOF>"),
        }
    }
}

/// A dotted production with its span. Equality and hashing are over all
/// fields, which is what keeps each column a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Item {
    pub prod: ProdRef,
    pub dot: usize,
    pub origin: usize,
    pub end: usize,
}

impl Item {
    pub fn new(prod: ProdRef, dot: usize, origin: usize, end: usize) -> Self {
        Item {
            prod,
            dot,
            origin,
            end,
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.origin, self.end)
    }

    fn advance(self, end: usize) -> Self {
        Item {
            dot: self.dot + 1,
            end,
            ..self
        }
    }
}

/// One item set of the chart. Items keep their insertion order, which
/// doubles as the worklist while the column is being closed.
#[derive(Debug, Clone, Default)]
pub struct Column {
    items: Vec<Item>,
    seen: HashSet<Item>,
}

impl Column {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.seen.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns false if a structurally equal item was already present.
    pub fn insert(&mut self, item: Item) -> bool {
        if self.seen.insert(item) {
            self.items.push(item);
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecognizeError {
    #[error("Unknown start symbol : {0}")]
    UnknownStartSymbol(String),
}

pub struct Chart<'gr> {
    pub grammar: &'gr Grammar<'gr>,
    pub start: &'gr str,
    columns: Vec<Column>,
}

impl<'gr> Chart<'gr> {
    /// An empty chart with one column per input position, `0..=token_count`.
    pub fn new(grammar: &'gr Grammar<'gr>, start: &'gr str, token_count: usize) -> Self {
        Self {
            grammar,
            start,
            columns: vec![Column::default(); token_count + 1],
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn rhs(&self, prod: ProdRef) -> &[&'gr str] {
        match prod {
            ProdRef::Root => std::slice::from_ref(&self.start),
            ProdRef::Rule(id) => &self.grammar.production(id).rhs,
        }
    }

    pub fn head(&self, prod: ProdRef) -> Head<'gr> {
        match prod {
            ProdRef::Root => Head::Root,
            ProdRef::Rule(id) => Head::Named(self.grammar.production(id).lhs),
        }
    }

    pub fn is_complete(&self, item: &Item) -> bool {
        item.dot == self.rhs(item.prod).len()
    }

    pub fn next_symbol(&self, item: &Item) -> Option<&'gr str> {
        self.rhs(item.prod).get(item.dot).copied()
    }

    /// True once the last column holds the completed root item spanning
    /// the whole input.
    pub fn accepted(&self) -> bool {
        let n = self.columns.len() - 1;
        self.columns[n].contains(&Item::new(ProdRef::Root, 1, 0, n))
    }

    /// Formatting helper: `lhs -> a • b [origin - end]`
    pub fn format_item(&self, item: &Item) -> String {
        let rhs = self.rhs(item.prod);
        let mut parts = Vec::with_capacity(rhs.len() + 1);
        for (i, &sym) in rhs.iter().enumerate() {
            if i == item.dot {
                parts.push("•");
            }
            parts.push(sym);
        }
        if item.dot == rhs.len() {
            parts.push("•");
        }
        format!("{} -> {} {}", self.head(item.prod), parts.join(" "), item.span())
    }

    pub(crate) fn fill<T: AsRef<str>>(&mut self, tokens: &[T], observer: &mut dyn ChartObserver) {
        self.columns[0].insert(Item::new(ProdRef::Root, 0, 0, 0));

        for pos in 0..self.columns.len() {
            let lookahead = tokens
                .get(pos)
                .map_or(Lookahead::EndOfInput, |tok| Lookahead::Token(tok.as_ref()));
            self.close_column(pos, lookahead);
            observer.column_closed(self, pos, lookahead);
        }
    }

    fn close_column(&mut self, pos: usize, lookahead: Lookahead<'_>) {
        // Non-terminals completed with an empty span in this column.
        let mut nullable: HashSet<&'gr str> = HashSet::new();
        let mut cursor = 0;

        while cursor < self.columns[pos].len() {
            let item = self.columns[pos].items[cursor];
            cursor += 1;
            match self.next_symbol(&item) {
                Some(sym) if self.grammar.is_nonterminal(sym) => {
                    self.predict(pos, item, sym, &nullable)
                }
                Some(sym) => self.scan(pos, item, sym, lookahead),
                None => self.complete(pos, item, &mut nullable),
            }
        }
    }

    fn predict(&mut self, pos: usize, item: Item, sym: &str, nullable: &HashSet<&'gr str>) {
        let grammar = self.grammar;
        for (id, _) in grammar.productions_of(sym) {
            self.columns[pos].insert(Item::new(ProdRef::Rule(id), 0, pos, pos));
        }
        // The completion for `sym` may already have run before this item
        // was added, so it would never be revisited.
        if nullable.contains(sym) {
            self.columns[pos].insert(item.advance(pos));
        }
    }

    fn scan(&mut self, pos: usize, item: Item, sym: &str, lookahead: Lookahead<'_>) {
        if lookahead == Lookahead::Token(sym) {
            self.columns[pos + 1].insert(item.advance(pos + 1));
        }
    }

    fn complete(&mut self, pos: usize, item: Item, nullable: &mut HashSet<&'gr str>) {
        let Head::Named(lhs) = self.head(item.prod) else {
            return;
        };
        if item.origin == pos {
            nullable.insert(lhs);
        }

        let waiting: Vec<Item> = self.columns[item.origin]
            .items
            .iter()
            .filter(|w| self.next_symbol(w) == Some(lhs))
            .copied()
            .collect();

        for w in waiting {
            self.columns[pos].insert(w.advance(pos));
        }
    }
}

/// Earley recognizer bound to a grammar and a start symbol.
#[derive(Debug, Clone, Copy)]
pub struct Recognizer<'gr> {
    grammar: &'gr Grammar<'gr>,
    start: &'gr str,
}

impl<'gr> Recognizer<'gr> {
    /// Fails if `start` is not a key of `grammar`. A key without any
    /// production is accepted and simply never recognizes anything.
    pub fn new(grammar: &'gr Grammar<'gr>, start: &str) -> Result<Self, RecognizeError> {
        let start = grammar
            .key(start)
            .ok_or_else(|| RecognizeError::UnknownStartSymbol(start.to_string()))?;
        Ok(Self { grammar, start })
    }

    pub fn chart<T: AsRef<str>>(&self, tokens: &[T]) -> Chart<'gr> {
        self.chart_observed(tokens, &mut NoopObserver)
    }

    /// Builds the chart, calling `observer` once per column after its
    /// closure. The observer only watches.
    pub fn chart_observed<T: AsRef<str>>(
        &self,
        tokens: &[T],
        observer: &mut dyn ChartObserver,
    ) -> Chart<'gr> {
        let mut chart = Chart::new(self.grammar, self.start, tokens.len());
        chart.fill(tokens, observer);
        chart
    }

    pub fn recognize<T: AsRef<str>>(&self, tokens: &[T]) -> bool {
        self.chart(tokens).accepted()
    }

    pub fn recognize_observed<T: AsRef<str>>(
        &self,
        tokens: &[T],
        observer: &mut dyn ChartObserver,
    ) -> bool {
        self.chart_observed(tokens, observer).accepted()
    }
}

/// Decides whether `tokens` derive from `start` in `grammar`.
pub fn recognize<'gr, T: AsRef<str>>(
    grammar: &'gr Grammar<'gr>,
    start: &str,
    tokens: &[T],
) -> Result<bool, RecognizeError> {
    Ok(Recognizer::new(grammar, start)?.recognize(tokens))
}
