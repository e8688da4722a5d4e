//! Pattern 6: Max by Price
//! Example: Borrow-based maximum query, `None` on empty input
//!
//! Run with: cargo run --bin p6_max_by_price

/// A priced product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Product {
            name: name.into(),
            price,
        }
    }
}

/// Return the product with the highest price, or `None` for an empty
/// slice. Ties are broken arbitrarily. The original exercise answered
/// this query with a destructive in-place sort; a single borrowing pass
/// leaves the caller's data alone.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    products
        .iter()
        .max_by(|a, b| a.price.total_cmp(&b.price))
}

fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Pen", 10.0),
        Product::new("Bag", 50.0),
        Product::new("Notebook", 25.0),
    ]
}

fn main() {
    println!("=== Max by Price ===\n");

    let products = sample_products();
    for product in &products {
        println!("  {} ({})", product.name, product.price);
    }

    match most_expensive(&products) {
        Some(product) => println!("\nMost expensive: {} at {}", product.name, product.price),
        None => println!("\nNo products to compare"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_highest_priced_product() {
        let products = sample_products();
        let best = most_expensive(&products).unwrap();
        assert_eq!(best.name, "Bag");
        assert_eq!(best.price, 50.0);
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert_eq!(most_expensive(&[]), None);
    }

    #[test]
    fn test_single_product() {
        let products = [Product::new("Pen", 10.0)];
        assert_eq!(most_expensive(&products), Some(&products[0]));
    }

    #[test]
    fn test_tie_returns_one_of_the_tied() {
        let products = [Product::new("A", 50.0), Product::new("B", 50.0)];
        let best = most_expensive(&products).unwrap();
        assert_eq!(best.price, 50.0);
    }

    #[test]
    fn test_input_order_is_not_disturbed() {
        let products = sample_products();
        let before = products.clone();
        let _ = most_expensive(&products);
        assert_eq!(products, before);
    }
}
