//! Pattern 3: Sequence Concatenation
//! Example: Generic flattening of any number of slices
//!
//! Run with: cargo run --bin p3_concat_arrays

/// Concatenate any number of slices into one `Vec`, in argument order,
/// preserving element order within each source. Inputs are borrowed and
/// left untouched.
pub fn concatenate<T: Clone>(arrays: &[&[T]]) -> Vec<T> {
    arrays.iter().flat_map(|array| array.iter().cloned()).collect()
}

fn main() {
    println!("=== Sequence Concatenation ===\n");

    let letters = concatenate(&[&["a", "b"], &["c"]]);
    println!("[a, b] + [c] = {:?}", letters);

    let numbers = concatenate(&[&[1, 2], &[3, 4], &[5, 6]]);
    println!("[1, 2] + [3, 4] + [5, 6] = {:?}", numbers);
}
