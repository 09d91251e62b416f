use chumsky::Parser;
use colored::*;
use earleyrec::grammar_parser::rules;
use earleyrec::{tokenize, ChartPrinter, Grammar, Recognizer};
use std::io::{self, Read};
use std::process::ExitCode;

const USAGE: &str = "usage: earleyrec <grammar-file> <start-symbol> [--trace] < sentence";

fn main() -> ExitCode {
    let mut trace = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--trace" => trace = true,
            _ => positional.push(arg),
        }
    }
    let [grammar_path, start] = positional.as_slice() else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    let grammar_text = match std::fs::read_to_string(grammar_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Could not read {}: {}", grammar_path, e);
            return ExitCode::from(2);
        }
    };

    let result = rules().parse(grammar_text.as_str());
    if result.has_errors() {
        for e in result.errors() {
            eprintln!("Error: {} at {}", e, e.span());
        }
        return ExitCode::from(2);
    }
    let grammar = match result.into_output() {
        Some(rules) => Grammar::from(rules),
        None => {
            eprintln!("No rules parsed.");
            return ExitCode::from(2);
        }
    };

    let recognizer = match Recognizer::new(&grammar, start) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read input: {}", e);
        return ExitCode::from(2);
    }
    let tokens = tokenize(&input);

    let accepted = if trace {
        let mut printer = ChartPrinter::stdout();
        let accepted = recognizer.recognize_observed(&tokens, &mut printer);
        if let Err(e) = printer.finish() {
            eprintln!("Could not print chart: {}", e);
        }
        accepted
    } else {
        recognizer.recognize(&tokens)
    };

    if accepted {
        println!("{}", "accepted".green().bold());
        ExitCode::SUCCESS
    } else {
        println!("{}", "rejected".red().bold());
        ExitCode::from(1)
    }
}
