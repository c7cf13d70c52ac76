// String helpers shared by the engine and the host tree

/// Capitalize the first letter of a string
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let first_upper = first.to_uppercase().to_string();
            first_upper + chars.as_str()
        }
    }
}

/// Lower-case the first letter of a string, leaving the rest untouched
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let first_lower = first.to_lowercase().to_string();
            first_lower + chars.as_str()
        }
    }
}

/// Escape text for inclusion in serialized markup
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value for a double-quoted attribute
pub fn escape_attribute(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
