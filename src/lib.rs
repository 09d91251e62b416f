use thiserror::Error;

pub mod conversion;
pub mod grammar;
pub mod grammar_parser;
pub mod recognizer;
pub mod tokenize;
pub mod trace;

pub use grammar::{Grammar, ProdId, Production};
pub use grammar_parser::{parse_grammar, GrammarError};
pub use recognizer::{recognize, Chart, Item, RecognizeError, Recognizer};
pub use tokenize::tokenize;
pub use trace::{ChartObserver, ChartPrinter, ColumnLog, NoopObserver};

#[derive(Debug, Error)]
pub enum EarleyError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Recognize(#[from] RecognizeError),
}

/// A grammar read from text, ready to recognize sentences.
pub struct Earley<'gr> {
    grammar: Grammar<'gr>,
}

impl<'gr> Earley<'gr> {
    pub fn from_text(grammar_text: &'gr str) -> Result<Self, EarleyError> {
        Ok(Self {
            grammar: parse_grammar(grammar_text)?,
        })
    }

    /// Tokenizes `input` and recognizes it from `start`.
    pub fn recognize(&self, input: &str, start: &str) -> Result<bool, EarleyError> {
        let tokens = tokenize(input);
        Ok(recognize(&self.grammar, start, &tokens)?)
    }

    pub fn recognize_observed(
        &self,
        input: &str,
        start: &str,
        observer: &mut dyn ChartObserver,
    ) -> Result<bool, EarleyError> {
        let tokens = tokenize(input);
        let recognizer = Recognizer::new(&self.grammar, start)?;
        Ok(recognizer.recognize_observed(&tokens, observer))
    }
}

#[cfg(test)]
mod sentence_tests {
    use super::*;

    fn make_engine() -> Earley<'static> {
        let grammar = r#"
S -> NP VP
NP -> Det N | Det Adj N
VP -> V NP | V
Det -> the | a
Adj -> big | small
N -> dog | cat
V -> chased | saw | slept
"#;

        Earley::from_text(grammar).expect("invalid grammar")
    }

    #[test]
    fn recognize_full_sentence() {
        let engine = make_engine();
        assert!(engine.recognize("the big dog chased a cat", "S").unwrap());
        assert!(engine.recognize("a cat slept", "S").unwrap());
    }

    #[test]
    fn reject_sentence() {
        let engine = make_engine();
        assert!(!engine.recognize("the dog dog", "S").unwrap());
        assert!(!engine.recognize("big dog slept", "S").unwrap());
    }

    #[test]
    fn recognize_from_inner_symbol() {
        let engine = make_engine();
        assert!(engine.recognize("the small cat", "NP").unwrap());
    }

    #[test]
    fn unknown_start_symbol() {
        let engine = make_engine();
        let err = engine.recognize("the dog", "Sentence").unwrap_err();
        assert!(matches!(
            err,
            EarleyError::Recognize(RecognizeError::UnknownStartSymbol(ref s)) if s == "Sentence"
        ));
    }

    #[test]
    fn invalid_grammar_text() {
        assert!(matches!(
            Earley::from_text("S -> \"oops"),
            Err(EarleyError::Grammar(_))
        ));
    }
}
