//! Pattern 8: Delayed Square
//! Example: Timer-delayed async computation with an explicit error path
//!
//! Run with: cargo run --bin p8_delayed_square

use std::time::Duration;
use thiserror::Error;

/// Flat delay before a successful result settles. Not derived from the
/// input.
pub const SQUARE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("negative number not allowed")]
    NotPositive,
}

/// Square `n` after [`SQUARE_DELAY`]. Non-positive input fails
/// immediately; the timer is only armed on the success path, matching
/// the original exercise.
pub async fn square_after_delay(n: i64) -> Result<i64, SquareError> {
    if n <= 0 {
        return Err(SquareError::NotPositive);
    }
    tokio::time::sleep(SQUARE_DELAY).await;
    Ok(n * n)
}

#[tokio::main]
async fn main() {
    println!("=== Delayed Square ===\n");

    match square_after_delay(4).await {
        Ok(squared) => println!("square_after_delay(4) = {}", squared),
        Err(e) => println!("square_after_delay(4) failed: {}", e),
    }

    match square_after_delay(-3).await {
        Ok(squared) => println!("square_after_delay(-3) = {}", squared),
        Err(e) => println!("square_after_delay(-3) failed: {}", e),
    }
}
