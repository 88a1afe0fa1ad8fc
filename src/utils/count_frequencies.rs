use std::collections::HashMap;
use std::hash::Hash;

/// Counts the frequency of each distinct value in the given list.
///
/// # Example
/// ```ignore
/// let frequencies = count_frequencies(&["AAPL", "GOOGL", "AAPL"]);
/// assert_eq!(frequencies.get("AAPL"), Some(&2));
/// assert_eq!(frequencies.get("GOOGL"), Some(&1));
/// ```
pub fn count_frequencies<T: Eq + Hash + Clone>(values: &[T]) -> HashMap<T, usize> {
    let mut frequencies: HashMap<T, usize> = HashMap::new();

    for value in values {
        *frequencies.entry(value.clone()).or_insert(0) += 1;
    }

    frequencies
}

/// The most frequent value, or `None` for an empty list.
///
/// Ties go to the value which appears first in `values`.
pub fn most_common<T: Eq + Hash + Clone>(values: &[T]) -> Option<T> {
    let frequencies = count_frequencies(values);

    let mut most_common: Option<(&T, usize)> = None;
    for value in values {
        let frequency = frequencies[value];
        if most_common.map_or(true, |(_, best)| frequency > best) {
            most_common = Some((value, frequency));
        }
    }

    most_common.map(|(value, _)| value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_frequencies() {
        let frequencies = count_frequencies(&["AAPL", "GOOGL", "AAPL"]);

        assert_eq!(frequencies.get("AAPL"), Some(&2));
        assert_eq!(frequencies.get("GOOGL"), Some(&1));
    }

    #[test]
    fn test_most_common() {
        assert_eq!(most_common(&["Short", "Long", "Long"]), Some("Long"));
        assert_eq!(most_common::<&str>(&[]), None);
    }

    #[test]
    fn test_most_common_ties_go_to_first_seen() {
        assert_eq!(most_common(&["Low", "High", "High", "Low"]), Some("Low"));
    }
}
