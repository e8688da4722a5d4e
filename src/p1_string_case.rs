//! Pattern 1: String Case Transform
//! Example: Uppercase/lowercase selection via an optional flag
//!
//! Run with: cargo run --bin p1_string_case

/// Transform `input` to uppercase or lowercase based on `to_upper`.
///
/// Only an explicit `Some(false)` selects lowercase. An omitted flag
/// (`None`) behaves exactly like `Some(true)` and uppercases — kept for
/// parity with the original exercise, which checked the flag with a
/// loose truthiness test.
pub fn format_string(input: &str, to_upper: Option<bool>) -> String {
    match to_upper {
        Some(false) => input.to_lowercase(),
        _ => input.to_uppercase(),
    }
}

fn main() {
    println!("=== String Case Transform ===\n");

    let samples = [
        ("Hello", None),
        ("Hello", Some(true)),
        ("Hello", Some(false)),
    ];

    for (input, flag) in samples {
        println!(
            "format_string({:?}, {:?}) = {:?}",
            input,
            flag,
            format_string(input, flag)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_true_uppercases() {
        assert_eq!(format_string("Hello", Some(true)), "HELLO");
    }

    #[test]
    fn test_explicit_false_lowercases() {
        assert_eq!(format_string("Hello", Some(false)), "hello");
    }

    #[test]
    fn test_omitted_flag_behaves_like_true() {
        assert_eq!(format_string("Hello", None), "HELLO");
        assert_eq!(
            format_string("MiXeD case 123", None),
            format_string("MiXeD case 123", Some(true))
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_string("", None), "");
        assert_eq!(format_string("", Some(false)), "");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(format_string("grüße", None), "GRÜSSE");
        assert_eq!(format_string("GRÜSSE", Some(false)), "grüsse");
    }
}
