//! Parser tests
//!
//! - basic: 定义与值解析测试
//! - errors: 语法错误测试
//! - fuzz: proptest 性质测试


use crate::frontend::lexer::tokenize;
use crate::frontend::parser::ast::*;
use crate::frontend::parser::{parse, parse_with_depth, ParseError};

fn parse_source(source: &str) -> Result<Vec<Definition>, ParseError> {
    parse(&tokenize(source).expect("source should tokenize"))
}

/// Strip spans so structure can be compared directly
#[derive(Debug, PartialEq)]
enum Shape {
    Num(i64),
    Arr(Vec<Shape>),
    Ref(String),
}

fn shape(value: &Value) -> Shape {
    match value {
        Value::Number(n, _) => Shape::Num(*n),
        Value::Array(elements, _) => Shape::Arr(elements.iter().map(shape).collect()),
        Value::ConstRef(name, _) => Shape::Ref(name.clone()),
    }
}

fn single(source: &str) -> Shape {
    let defs = parse_source(source).unwrap();
    assert_eq!(defs.len(), 1, "expected one definition in {:?}", source);
    shape(&defs[0].value)
}
