use chumsky::Parser;

use crate::grammar_parser::{parse_grammar, rules, GrammarError};

#[cfg(test)]
mod invalid_input_tests {
    use super::*;

    #[test]
    fn test_missing_arrow() {
        let input = "S NP VP";
        let result = rules().parse(input);

        assert!(
            result.has_errors(),
            "Expected parser to fail when the arrow is missing"
        );
    }

    #[test]
    fn test_unclosed_quote() {
        let input = r#"S -> "unclosed"#;
        let result = rules().parse(input);

        assert!(
            result.has_errors(),
            "Expected parser to fail on unclosed quote"
        );
    }

    #[test]
    fn test_empty_quote() {
        let input = r#"S -> """#;
        let result = rules().parse(input);

        assert!(result.has_errors(), "Expected parser to fail on empty quote");
    }

    #[test]
    fn test_two_rules_on_one_line() {
        let input = "S -> a T -> b";
        let result = rules().parse(input);

        assert!(
            result.has_errors(),
            "Expected parser to fail on a second arrow in one rule"
        );
    }

    #[test]
    fn test_missing_lhs() {
        let input = "-> a b";
        let result = rules().parse(input);

        assert!(result.has_errors(), "Expected parser to fail without lhs");
    }

    #[test]
    fn test_error_message_has_span() {
        let err = parse_grammar("S -> a\nT b").unwrap_err();
        let GrammarError::Syntax(message) = err;
        assert!(message.contains(".."), "message: {}", message);
    }
}
