//! Single-line CSV field splitter
//!
//! Supports double-quoted fields with `""` escapes. Quoted fields never span
//! lines; an unterminated quote runs to the end of the line.

/// Split one line into trimmed fields
///
/// Always returns at least one field.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// True when every field is empty
pub fn is_blank(fields: &[String]) -> bool {
    fields.iter().all(|f| f.is_empty())
}
