use std::collections::HashMap;

/// Index of a production inside its [`Grammar`].
pub type ProdId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production<'gr> {
    pub lhs: &'gr str,
    pub rhs: Vec<&'gr str>,
}

impl<'gr> Production<'gr> {
    pub fn new(lhs: &'gr str, rhs: Vec<&'gr str>) -> Self {
        Self { lhs, rhs }
    }

    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }
}

impl std::fmt::Display for Production<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ->", self.lhs)?;
        if self.rhs.is_empty() {
            return write!(f, " ε");
        }
        for sym in &self.rhs {
            write!(f, " {}", sym)?;
        }
        Ok(())
    }
}

/// A context-free grammar: every production, in insertion order, plus an
/// index from each non-terminal to the ids of its alternatives.
///
/// A symbol is a non-terminal iff it is a key of the grammar, even a key
/// declared without productions. Everything else is matched literally
/// against tokens.
#[derive(Debug, Clone, Default)]
pub struct Grammar<'gr> {
    productions: Vec<Production<'gr>>,
    by_lhs: HashMap<&'gr str, Vec<ProdId>>,
}

impl<'gr> Grammar<'gr> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grammar from `(lhs, alternatives)` pairs. A pair with no
    /// alternatives still registers `lhs` as a key of the grammar.
    pub fn from_rules<I, A, R>(rules: I) -> Self
    where
        I: IntoIterator<Item = (&'gr str, A)>,
        A: IntoIterator<Item = R>,
        R: IntoIterator<Item = &'gr str>,
    {
        let mut grammar = Self::new();
        for (lhs, alternatives) in rules {
            grammar.declare(lhs);
            for rhs in alternatives {
                grammar.add_production(lhs, rhs);
            }
        }
        grammar
    }

    /// Registers `lhs` as a key without giving it any production.
    pub fn declare(&mut self, lhs: &'gr str) {
        self.by_lhs.entry(lhs).or_default();
    }

    pub fn add_production(
        &mut self,
        lhs: &'gr str,
        rhs: impl IntoIterator<Item = &'gr str>,
    ) -> ProdId {
        let id = self.productions.len();
        self.productions
            .push(Production::new(lhs, rhs.into_iter().collect()));
        self.by_lhs.entry(lhs).or_default().push(id);
        id
    }

    pub fn production(&self, id: ProdId) -> &Production<'gr> {
        &self.productions[id]
    }

    pub fn productions(&self) -> &[Production<'gr>] {
        &self.productions
    }

    /// Alternatives of `symbol` in the order they were added; empty for
    /// terminals.
    pub fn productions_of<'s>(
        &'s self,
        symbol: &str,
    ) -> impl Iterator<Item = (ProdId, &'s Production<'gr>)> + 's {
        self.by_lhs
            .get(symbol)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&id| (id, &self.productions[id]))
    }

    /// The grammar's own copy of `symbol`, if it is a key.
    pub fn key(&self, symbol: &str) -> Option<&'gr str> {
        self.by_lhs.get_key_value(symbol).map(|(key, _)| *key)
    }

    pub fn is_nonterminal(&self, symbol: &str) -> bool {
        self.by_lhs.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }
}

impl<'gr, R> FromIterator<(&'gr str, R)> for Grammar<'gr>
where
    R: IntoIterator<Item = &'gr str>,
{
    fn from_iter<T: IntoIterator<Item = (&'gr str, R)>>(iter: T) -> Self {
        let mut grammar = Self::new();
        for (lhs, rhs) in iter {
            grammar.add_production(lhs, rhs);
        }
        grammar
    }
}

impl std::fmt::Display for Grammar<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for prod in &self.productions {
            writeln!(f, "{}", prod)?;
        }
        Ok(())
    }
}
