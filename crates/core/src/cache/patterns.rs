//! Glob matching for cache keys, used by adapters that cannot ask the
//! backend to enumerate keys by pattern.

/// Checks if a cache key matches a glob pattern.
///
/// The pattern supports `*` as a wildcard that matches any sequence
/// of characters (including empty strings).
///
/// # Examples
///
/// ```
/// use catalog_core::cache::pattern_matches;
///
/// assert!(pattern_matches("products:*", "products:list:limit_20:offset_0:sort_name_asc"));
/// assert!(pattern_matches("products:list:*:sort_*", "products:list:limit_5:offset_0:sort_price_desc"));
/// assert!(!pattern_matches("products:*", "product:00000000-0000-0000-0000-000000000000"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    if pattern.is_empty() {
        return key.is_empty();
    }

    if pattern == "*" {
        return true;
    }

    let segments: Vec<&str> = pattern.split('*').collect();

    if segments.len() == 1 {
        return pattern == key;
    }

    let mut remaining = key;
    let starts_with_wildcard = pattern.starts_with('*');
    let ends_with_wildcard = pattern.ends_with('*');

    for (i, segment) in segments.iter().enumerate() {
        // Adjacent or leading/trailing wildcards produce empty segments.
        if segment.is_empty() {
            continue;
        }

        let is_first = i == 0;
        let is_last = i == segments.len() - 1;

        if is_first && !starts_with_wildcard {
            if !remaining.starts_with(segment) {
                return false;
            }
            remaining = &remaining[segment.len()..];
        } else if is_last && !ends_with_wildcard {
            if !remaining.ends_with(segment) {
                return false;
            }
        } else {
            match remaining.find(segment) {
                Some(pos) => {
                    remaining = &remaining[pos + segment.len()..];
                }
                None => return false,
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_KEY: &str = "products:list:cat_00000000-0000-0000-0000-000000000000:limit_20:offset_0:sort_created_at_desc";
    const PRODUCT_KEY: &str = "product:00000000-0000-0000-0000-000000000000";

    #[test]
    fn test_exact_match() {
        assert!(pattern_matches(PRODUCT_KEY, PRODUCT_KEY));
        assert!(!pattern_matches(
            PRODUCT_KEY,
            "product:11111111-1111-1111-1111-111111111111"
        ));
    }

    #[test]
    fn test_trailing_wildcard() {
        assert!(pattern_matches("products:*", LIST_KEY));
        assert!(pattern_matches("products:*", "products:"));
        assert!(!pattern_matches("products:*", PRODUCT_KEY));
        assert!(!pattern_matches("products:*", "product"));
    }

    #[test]
    fn test_leading_wildcard() {
        assert!(pattern_matches("*:sort_created_at_desc", LIST_KEY));
        assert!(!pattern_matches("*:sort_name_asc", LIST_KEY));
    }

    #[test]
    fn test_inner_wildcards() {
        assert!(pattern_matches("products:list:cat_*:limit_*", LIST_KEY));
        assert!(pattern_matches("products:*:offset_0:*", LIST_KEY));
        assert!(!pattern_matches("products:list:active_*:limit_*", LIST_KEY));
    }

    #[test]
    fn test_wildcard_only() {
        assert!(pattern_matches("*", LIST_KEY));
        assert!(pattern_matches("*", ""));
    }

    #[test]
    fn test_empty_pattern_and_key() {
        assert!(pattern_matches("", ""));
        assert!(!pattern_matches("", "products:list"));
        assert!(!pattern_matches("products:*", ""));
    }

    #[test]
    fn test_adjacent_wildcards() {
        assert!(pattern_matches("products:**", LIST_KEY));
        assert!(pattern_matches("**", "anything"));
    }

    #[test]
    fn test_segment_must_not_overlap() {
        assert!(!pattern_matches("ab*ba", "aba"));
        assert!(pattern_matches("ab*ba", "abba"));
    }
}
