use crate::{grammar::Grammar, grammar_parser::Rule};

// `ε` contributes nothing to a production, so `A -> ε` and `A ->` both
// become the empty production.
impl<'gr> From<Vec<Rule<'gr>>> for Grammar<'gr> {
    fn from(rules: Vec<Rule<'gr>>) -> Self {
        Grammar::from_rules(rules.into_iter().map(|rule| {
            let alternatives = rule
                .alternatives
                .into_iter()
                .map(|alt| alt.into_iter().filter_map(|sym| sym.text()).collect::<Vec<_>>());
            (rule.lhs.text, alternatives)
        }))
    }
}
