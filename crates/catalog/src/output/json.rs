//! JSON output formatting.

/// Format a value as single-line JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::catalog::ProductPage;

    #[test]
    fn test_format_json_page() {
        let page = ProductPage::new(Vec::new(), 3);
        assert_eq!(format_json(&page), r#"{"products":[],"total":3}"#);
    }
}
