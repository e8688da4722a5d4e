//! Pattern 5: Tagged-Union Dispatch
//! Example: Text-or-number value matched exhaustively
//!
//! Run with: cargo run --bin p5_value_dispatch

/// A value that is exactly one of text or a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Number(i64),
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Number(number)
    }
}

/// Character count for text, double for numbers. Total over both
/// variants of the union.
pub fn process_value(value: &Value) -> i64 {
    match value {
        Value::Text(text) => text.chars().count() as i64,
        Value::Number(number) => number * 2,
    }
}

fn main() {
    println!("=== Tagged-Union Dispatch ===\n");

    let inputs = [Value::from("Hello"), Value::from(5)];
    for input in &inputs {
        println!("process_value({:?}) = {}", input, process_value(input));
    }
}
