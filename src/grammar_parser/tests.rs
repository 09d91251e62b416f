use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chumsky::prelude::*;

    #[test]
    fn test_single_rule() {
        let input = "S -> NP VP";
        let result = rules().parse(input);

        assert!(!result.has_errors());
        let rules = result.output().expect("Should have output");
        assert_eq!(rules.len(), 1);

        let rule = &rules[0];
        assert_eq!(rule.lhs, "S");
        assert_eq!(rule.alternatives.len(), 1);

        let alt = &rule.alternatives[0];
        assert_eq!(alt.len(), 2);
        if let Symbol::Name(name) = &alt[1] {
            assert_eq!(*name, "VP");
        } else {
            panic!("Expected name symbol");
        }
    }

    #[test]
    fn test_alternatives_and_quotes() {
        let input = r#"Sum -> Sum "+" Product | Product"#;
        let result = rules().parse(input);

        assert!(!result.has_errors());
        let rules = result.output().expect("Should have output");
        let rule = &rules[0];
        assert_eq!(rule.alternatives.len(), 2);

        if let Symbol::Quoted(text) = &rule.alternatives[0][1] {
            assert_eq!(*text, "+");
            // span covers the quotes
            assert_eq!(text.span.start, 11);
            assert_eq!(text.span.end, 14);
        } else {
            panic!("Expected quoted symbol");
        }
        assert_eq!(rule.alternatives[1].len(), 1);
    }

    #[test]
    fn test_epsilon_forms() {
        let input = "A -> ε | x\nB -> | y\nC ->";
        let result = rules().parse(input);

        assert!(!result.has_errors());
        let rules = result.output().expect("Should have output");
        assert_eq!(rules.len(), 3);

        assert!(matches!(rules[0].alternatives[0][..], [Symbol::Epsilon(_)]));
        assert!(rules[1].alternatives[0].is_empty());
        assert_eq!(rules[2].alternatives, vec![Vec::<Symbol>::new()]);
    }

    #[test]
    fn test_other_arrows() {
        let input = "A ::= a\nB → b";
        let result = rules().parse(input);

        assert!(!result.has_errors());
        assert_eq!(result.output().expect("Should have output").len(), 2);
    }

    #[test]
    fn test_blank_lines_and_padding() {
        let input = "\n\n   S -> a   \n   \n\nT -> b\n\n";
        let result = rules().parse(input);

        assert!(!result.has_errors());
        let rules = result.output().expect("Should have output");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].lhs, "T");
    }

    #[test]
    fn test_grammar_from_text() {
        let grammar = parse_grammar(
            r#"
S -> NP VP
NP -> Det N
VP -> V NP
Det -> the | a
N -> dog | cat
V -> chased | saw
N -> "hot dog"
"#,
        )
        .expect("valid grammar");

        assert_eq!(grammar.len(), 10);
        let nouns: Vec<_> = grammar
            .productions_of("N")
            .map(|(_, p)| p.rhs.clone())
            .collect();
        assert_eq!(nouns, vec![vec!["dog"], vec!["cat"], vec!["hot dog"]]);
    }

    #[test]
    fn test_epsilon_becomes_empty_production() {
        let grammar = parse_grammar("S -> ε | a S").expect("valid grammar");
        let alts: Vec<_> = grammar.productions_of("S").map(|(_, p)| p.is_empty()).collect();
        assert_eq!(alts, vec![true, false]);
    }

    #[test]
    fn test_quoted_epsilon_is_a_terminal() {
        let grammar = parse_grammar(r#"S -> "ε""#).expect("valid grammar");
        assert_eq!(grammar.production(0).rhs, vec!["ε"]);
    }
}
