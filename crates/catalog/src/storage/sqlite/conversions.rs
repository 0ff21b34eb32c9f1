//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use catalog_core::catalog::{Category, Product};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;
use uuid::Uuid;

/// Convert a SQLite row to a Product.
///
/// Expected columns: see `schema::PRODUCT_COLUMNS`.
pub fn row_to_product(row: &Row) -> rusqlite::Result<Product> {
    let id: String = row.get(0)?;
    let category_id: String = row.get(4)?;
    let created_at: String = row.get(9)?;
    let updated_at: String = row.get(10)?;

    Ok(Product {
        id: parse_uuid(&id)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        category_id: parse_uuid(&category_id)?,
        stock: row.get(5)?,
        image_url: row.get(6)?,
        sku: row.get(7)?,
        is_active: row.get(8)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to a Category with no children loaded.
///
/// Expected columns: id, name, description, parent_id, is_active, created_at, updated_at
pub fn row_to_category(row: &Row) -> rusqlite::Result<Category> {
    let id: String = row.get(0)?;
    let parent_id: Option<String> = row.get(3)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(Category {
        id: parse_uuid(&id)?,
        name: row.get(1)?,
        description: row.get(2)?,
        parent_id: parent_id.as_deref().map(parse_uuid).transpose()?,
        children: Vec::new(),
        is_active: row.get(4)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Fixed nanosecond precision with a `Z` suffix, so stored values are lossless
/// and sort lexicographically in time order.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime_is_fixed_width() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        assert_eq!(format_datetime(&dt), "2024-03-15T10:30:00.000000000Z");
    }

    #[test]
    fn test_formatted_datetimes_sort_in_time_order() {
        let earlier = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        let later = earlier + chrono::Duration::nanoseconds(1);
        assert!(format_datetime(&earlier) < format_datetime(&later));
    }

    #[test]
    fn test_parse_datetime_preserves_nanoseconds() {
        let dt = Utc::now();
        assert_eq!(parse_datetime(&format_datetime(&dt)).unwrap(), dt);
    }

    #[test]
    fn test_parse_uuid_rejects_garbage() {
        assert!(parse_uuid("not-a-uuid").is_err());
    }
}
