//! Identifier case conversion and table naming

/// Convert an identifier to snake_case
///
/// A word boundary is placed before a non-initial upper-case character that follows a
/// lower-case character (`userID` → `user_id`) or that is itself followed by a lower-case
/// character (`HTTPServer` → `http_server`, `S3Object` → `s3_object`). No boundary is
/// added after an existing `_`.
pub fn snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev != '_' && (prev.is_lowercase() || next_is_lower) {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// Derive a table name from a type identifier: snake_case plus a plural `s`
pub fn table_name_for(type_name: &str) -> String {
    format!("{}s", snake_case(type_name))
}
