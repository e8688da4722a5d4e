// Fundamentals Patterns
// Each pattern is a self-contained, runnable program with its own tests.

pub mod patterns {
    //! # Fundamentals Patterns
    //!
    //! This crate provides runnable warm-up programs for:
    //!
    //! ## Pattern 1: String Case Transform
    //! - Uppercase/lowercase selection via an optional flag
    //! - An omitted flag behaves like `true`
    //!
    //! ## Pattern 2: Rating Filter
    //! - Threshold filtering that preserves relative order
    //! - Idempotent, no mutation of the input
    //!
    //! ## Pattern 3: Sequence Concatenation
    //! - Generic flattening of any number of slices
    //! - Argument order and per-source element order preserved
    //!
    //! ## Pattern 4: Composed Records
    //! - A base record extended by composition, not inheritance
    //! - Delegating accessor instead of dynamic dispatch
    //!
    //! ## Pattern 5: Tagged-Union Dispatch
    //! - Text-or-number value matched exhaustively
    //! - `From` conversions for both variants
    //!
    //! ## Pattern 6: Max by Price
    //! - Borrow-based maximum query, `None` on empty input
    //! - No sort and no mutation of the caller's data
    //!
    //! ## Pattern 7: Day Classifier
    //! - Closed seven-variant enum, exhaustive match
    //! - Compile-checked totality instead of a runtime fallback
    //!
    //! ## Pattern 8: Delayed Square
    //! - Timer-delayed async computation on tokio
    //! - Explicit error path for non-positive input
    //!
    //! Run individual patterns with:
    //! ```text
    //! cargo run --bin p1_string_case
    //! cargo run --bin p8_delayed_square
    //! ```
}
