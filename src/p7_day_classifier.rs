//! Pattern 7: Day Classifier
//! Example: Closed seven-variant enum, exhaustive match
//!
//! Run with: cargo run --bin p7_day_classifier

use std::fmt;

/// Day of the week, a closed set of seven values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All seven days, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];
}

/// Whether a day falls on the weekend or during the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayKind::Weekday => write!(f, "Weekday"),
            DayKind::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Classify a day as weekday or weekend. The match covers every
/// variant, so there is no runtime fallback: adding an eighth day would
/// fail to compile instead of hitting an "invalid day" branch.
pub fn classify(day: Day) -> DayKind {
    match day {
        Day::Saturday | Day::Sunday => DayKind::Weekend,
        Day::Monday | Day::Tuesday | Day::Wednesday | Day::Thursday | Day::Friday => {
            DayKind::Weekday
        }
    }
}

fn main() {
    println!("=== Day Classifier ===\n");

    for day in Day::ALL {
        println!("{:?}: {}", day, classify(day));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuesday_is_a_weekday() {
        assert_eq!(classify(Day::Tuesday), DayKind::Weekday);
        assert_eq!(classify(Day::Tuesday).to_string(), "Weekday");
    }

    #[test]
    fn test_sunday_is_a_weekend() {
        assert_eq!(classify(Day::Sunday), DayKind::Weekend);
        assert_eq!(classify(Day::Sunday).to_string(), "Weekend");
    }

    #[test]
    fn test_exactly_two_weekend_days() {
        let weekend_count = Day::ALL
            .iter()
            .filter(|&&day| classify(day) == DayKind::Weekend)
            .count();
        assert_eq!(weekend_count, 2);
    }

    #[test]
    fn test_weekdays_are_monday_through_friday() {
        for day in [Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday] {
            assert_eq!(classify(day), DayKind::Weekday);
        }
        for day in [Day::Saturday, Day::Sunday] {
            assert_eq!(classify(day), DayKind::Weekend);
        }
    }
}
