/// Parses a stored Discord snowflake at the repository boundary.
///
/// # Arguments
/// - `field` - Column name, used in the error message
/// - `value` - Stored string value
///
/// # Returns
/// - `Ok(u64)` - Parsed snowflake
/// - `Err(DbErr::Custom)` - Stored value is not a valid snowflake
pub fn parse_snowflake(field: &str, value: &str) -> Result<u64, sea_orm::DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| sea_orm::DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
}

/// Reads a JSON array of strings stored in a JSON column.
///
/// Non-string elements are rejected so a corrupted column surfaces as an error
/// instead of silently shrinking a role restriction.
pub fn parse_string_array(field: &str, value: serde_json::Value) -> Result<Vec<String>, sea_orm::DbErr> {
    serde_json::from_value(value)
        .map_err(|e| sea_orm::DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
}
