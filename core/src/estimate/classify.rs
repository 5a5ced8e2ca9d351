use crate::prelude::Classification;
use std::cmp::Ordering;

/// Three-way comparison of a computed total against the country baseline.
///
/// The `Moderate` branch relies on exact f64 equality between two
/// independently computed sums; inherited behavior, effectively unreachable
/// with real inputs. NaN never classifies as `Good`.
pub fn classify(total_tons: f64, baseline_tons: f64) -> Classification {
    match total_tons.partial_cmp(&baseline_tons) {
        Some(Ordering::Less) => Classification::Good,
        Some(Ordering::Equal) => Classification::Moderate,
        _ => Classification::Bad,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_three_way_comparison() {
        assert_eq!(classify(1.0, 2.0), Classification::Good);
        assert_eq!(classify(2.0, 2.0), Classification::Moderate);
        assert_eq!(classify(3.0, 2.0), Classification::Bad);
    }

    #[test]
    fn each_classification_carries_a_message() {
        for (total, baseline) in [(1.0, 2.0), (2.0, 2.0), (3.0, 2.0)] {
            let classification = classify(total, baseline);
            assert!(!classification.message().is_empty());
        }
    }
}
