//! Product collection query builder.
//!
//! Translates a normalized `ProductFilters` into a WHERE clause with
//! positional parameters. Pure, no database access.

use catalog_core::catalog::{ProductFilters, SortField, SortOrder};
use rusqlite::types::Value;

use super::schema::PRODUCT_COLUMNS;

/// SQL fragments and parameters for one collection query.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    where_clause: String,
    params: Vec<Value>,
    order_by: String,
    limit: i64,
    offset: i64,
}

impl ProductQuery {
    /// Builds the query for a normalized filter set.
    pub fn from_filters(filters: &ProductFilters) -> Self {
        let mut conditions: Vec<&'static str> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        if let Some(category_id) = filters.category_id {
            conditions.push("category_id = ?");
            params.push(Value::Text(category_id.to_string()));
        }
        if let Some(min_price) = filters.min_price {
            conditions.push("price >= ?");
            params.push(Value::Real(min_price));
        }
        if let Some(max_price) = filters.max_price {
            conditions.push("price <= ?");
            params.push(Value::Real(max_price));
        }
        if let Some(is_active) = filters.is_active {
            conditions.push("is_active = ?");
            params.push(Value::Integer(i64::from(is_active)));
        }
        if filters.in_stock == Some(true) {
            conditions.push("stock > 0");
        }
        if let Some(term) = filters.search_term() {
            // LIKE folds ASCII case only.
            conditions.push("(name LIKE ? ESCAPE '\\' OR description LIKE ? ESCAPE '\\')");
            let pattern = format!("%{}%", escape_like(term));
            params.push(Value::Text(pattern.clone()));
            params.push(Value::Text(pattern));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let column = match filters.sort_by.unwrap_or_default() {
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::CreatedAt => "created_at",
        };
        let direction = match filters.sort_order.unwrap_or_default() {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };

        Self {
            where_clause,
            params,
            order_by: format!("{column} {direction}, id ASC"),
            limit: filters.limit,
            offset: filters.offset,
        }
    }

    /// SELECT for the requested page.
    pub fn select_sql(&self) -> String {
        format!(
            "SELECT {PRODUCT_COLUMNS} FROM products{} ORDER BY {} LIMIT ? OFFSET ?",
            self.where_clause, self.order_by
        )
    }

    /// COUNT over every match, ignoring pagination.
    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM products{}", self.where_clause)
    }

    /// Parameters for `count_sql`.
    pub fn filter_params(&self) -> Vec<Value> {
        self.params.clone()
    }

    /// Parameters for `select_sql`: the filter parameters followed by limit and offset.
    pub fn page_params(&self) -> Vec<Value> {
        let mut params = self.params.clone();
        params.push(Value::Integer(self.limit));
        params.push(Value::Integer(self.offset));
        params
    }
}

/// Escapes LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}


#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_unfiltered_query_has_no_where_clause() {
        let query = ProductQuery::from_filters(&ProductFilters::new().normalize());

        assert_eq!(query.count_sql(), "SELECT COUNT(*) FROM products");
        assert!(query
            .select_sql()
            .ends_with("ORDER BY created_at DESC, id ASC LIMIT ? OFFSET ?"));
        assert_eq!(
            query.page_params(),
            vec![Value::Integer(20), Value::Integer(0)]
        );
    }

    #[test]
    fn test_conditions_and_params_line_up() {
        let category_id = Uuid::new_v4();
        let filters = ProductFilters::new()
            .for_category(category_id)
            .with_min_price(5.0)
            .with_max_price(50.0)
            .with_active(true)
            .with_in_stock(true)
            .paginate(10, 30)
            .normalize();

        let query = ProductQuery::from_filters(&filters);

        assert_eq!(
            query.count_sql(),
            "SELECT COUNT(*) FROM products WHERE category_id = ? AND price >= ? \
             AND price <= ? AND is_active = ? AND stock > 0"
        );
        assert_eq!(
            query.filter_params(),
            vec![
                Value::Text(category_id.to_string()),
                Value::Real(5.0),
                Value::Real(50.0),
                Value::Integer(1),
            ]
        );
        let page = query.page_params();
        assert_eq!(&page[4..], &[Value::Integer(10), Value::Integer(30)]);
    }

    #[test]
    fn test_out_of_stock_flag_adds_no_condition() {
        let filters = ProductFilters::new().with_in_stock(false).normalize();
        let query = ProductQuery::from_filters(&filters);
        assert_eq!(query.count_sql(), "SELECT COUNT(*) FROM products");
    }

    #[test]
    fn test_search_is_bound_twice_as_typed() {
        let filters = ProductFilters::new().with_search("Wire").normalize();
        let query = ProductQuery::from_filters(&filters);

        assert!(query.count_sql().contains("(name LIKE ? ESCAPE"));
        assert!(!query.count_sql().contains("LOWER("));
        assert_eq!(
            query.filter_params(),
            vec![
                Value::Text("%Wire%".to_string()),
                Value::Text("%Wire%".to_string()),
            ]
        );
    }

    #[test]
    fn test_sort_columns() {
        let filters = ProductFilters::new()
            .sorted_by(SortField::Price, SortOrder::Asc)
            .normalize();
        assert!(ProductQuery::from_filters(&filters)
            .select_sql()
            .contains("ORDER BY price ASC, id ASC"));

        let filters = ProductFilters::new()
            .sorted_by(SortField::Name, SortOrder::Desc)
            .normalize();
        assert!(ProductQuery::from_filters(&filters)
            .select_sql()
            .contains("ORDER BY name DESC, id ASC"));
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }
}
