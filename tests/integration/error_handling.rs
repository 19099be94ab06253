//! Error handling integration tests

use octconf::eval::EvalError;
use octconf::frontend::lexer::LexError;
use octconf::frontend::parser::ParseError;
use octconf::{convert, Error};

#[test]
fn test_unknown_character() {
    let err = convert("def A := 0o1\ndef B := @").unwrap_err();
    assert!(matches!(err, Error::Lex(LexError::UnexpectedChar { ch: '@', .. })));
    assert_eq!(err.to_string(), "unexpected character '@' at 2:10");
}

#[test]
fn test_syntax_error() {
    let err = convert("def A := (0o1").unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::ExpectedToken { .. })));
    assert_eq!(err.to_string(), "expected RPAREN, found end of input at 1:14");
}

#[test]
fn test_undefined_reference() {
    let err = convert("def A := ![MISSING]").unwrap_err();
    assert!(matches!(
        &err,
        Error::Eval(EvalError::UndefinedReference { name, .. }) if name == "MISSING"
    ));
    assert!(err.to_string().contains("MISSING"));
}

#[test]
fn test_cyclic_reference() {
    let err = convert("def A := ![B]\ndef B := ![A]").unwrap_err();
    assert!(matches!(err, Error::Eval(EvalError::CyclicReference { .. })));
}

#[test]
fn test_deep_reference_chain_is_an_error_not_a_crash() {
    let mut source = String::new();
    for i in 0..10_000 {
        source.push_str(&format!("def N{} := ![N{}]\n", i, i + 1));
    }
    source.push_str("def N10000 := 0o1\n");

    let err = convert(&source).unwrap_err();
    assert!(matches!(err, Error::Eval(EvalError::DepthExceeded { .. })));
}

#[test]
fn test_deep_chain_defined_dependencies_first_is_an_error() {
    // every step reuses the memoized value of the one before it
    let mut source = String::from("def A0 := (0o1)\n");
    for i in 1..10_000 {
        source.push_str(&format!("def A{} := (![A{}])\n", i, i - 1));
    }

    let err = convert(&source).unwrap_err();
    assert!(matches!(
        err,
        Error::Eval(EvalError::DepthExceeded { limit: 256 })
    ));
}

#[test]
fn test_literal_overflow() {
    let err = convert("def A := 0o7777777777777777777777").unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::LiteralTooLarge { .. })));
}
