//! Pattern 2: Rating Filter
//! Example: Threshold filtering that preserves relative order
//!
//! Run with: cargo run --bin p2_rating_filter

/// Minimum rating an item needs to survive the filter.
pub const RATING_THRESHOLD: f64 = 4.0;

/// A rated item, e.g. a book in a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Rated {
    pub title: String,
    pub rating: f64,
}

impl Rated {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Rated {
            title: title.into(),
            rating,
        }
    }
}

/// Keep the items whose rating meets or exceeds [`RATING_THRESHOLD`],
/// preserving their relative order. The input is left untouched.
pub fn filter_by_rating(items: &[Rated]) -> Vec<Rated> {
    items
        .iter()
        .filter(|item| item.rating >= RATING_THRESHOLD)
        .cloned()
        .collect()
}

fn sample_books() -> Vec<Rated> {
    vec![
        Rated::new("Book A", 4.5),
        Rated::new("Book B", 3.2),
        Rated::new("Book C", 5.0),
        Rated::new("Book C", 4.0),
        Rated::new("Book C", 4.1),
    ]
}

fn main() {
    println!("=== Rating Filter ===\n");

    let books = sample_books();
    println!("Catalog ({} items):", books.len());
    for book in &books {
        println!("  {} ({})", book.title, book.rating);
    }

    let kept = filter_by_rating(&books);
    println!("\nRated {} or higher ({} items):", RATING_THRESHOLD, kept.len());
    for book in &kept {
        println!("  {} ({})", book.title, book.rating);
    }
}
