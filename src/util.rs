//! Small shared helpers: pattern anchoring and sorting a table for
//! binary-search lookup.

/// Anchors a user pattern so a compiled [`regex::Regex`] only ever matches at
/// the very start of the haystack it's given — this is how per-rule matching
/// anchored at the current cursor is built on top of a search-oriented regex
/// engine.
pub(crate) fn anchor_pattern(pattern: &str) -> String {
    format!("^(?:{pattern})")
}

/// Sorts `items` ascending by `key`, the way the matcher table is sorted by
/// state id for logarithmic lookup.
pub(crate) fn sort_by_key<T>(mut items: Vec<T>, key: impl Fn(&T) -> u32) -> Vec<T> {
    items.sort_by_key(key);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_wraps_pattern_in_a_non_capturing_group() {
        assert_eq!(anchor_pattern("a|b"), "^(?:a|b)");
    }

    #[test]
    fn sort_by_key_orders_ascending() {
        let sorted = sort_by_key(vec![(3u32, "c"), (1, "a"), (2, "b")], |(k, _)| *k);
        assert_eq!(
            sorted.into_iter().map(|(_, v)| v).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }
}
