use serde::{Deserialize, Deserializer};

/// Normalizes a name by stripping surrounding whitespace and
/// decomposing it into Unicode Normalization Form D.
///
/// ```
/// use loader::normalization::normalize_name;
/// assert_eq!(normalize_name(" ETH Global 2025 "), "ETH Global 2025");
/// ```
pub fn normalize_name(name: impl AsRef<str>) -> String {
    use unicode_normalization::UnicodeNormalization;

    name.as_ref().trim().nfd().to_string()
}

/// Returns the case-insensitive key under which a name is compared
/// against rows already in the table.
pub fn dedup_key(name: impl AsRef<str>) -> String {
    normalize_name(name).to_lowercase()
}

/// Deserializes an optional `String` after running it through
/// `normalize_name`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let o: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(o.map(normalize_name))
}
