/// Cuts `text` to `max_len` characters, appending `...` when anything was
/// dropped.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Two-letter initials: first and last word, or the first two letters of a
/// single word. Empty names give `??`.
pub fn get_initials(name: &str) -> String {
    if name.is_empty() {
        return "??".to_string();
    }

    let parts: Vec<&str> = name.split(' ').collect();
    let initials: String = match parts.as_slice() {
        [single] => single.chars().take(2).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
        [] => String::new(),
    };

    initials.to_uppercase()
}

/// Renders ten-digit numbers as `(555) 123-4567`; anything else is returned
/// untouched.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

/// Lowercase, dash-separated, ASCII word characters only.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for c in text.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        }
    }

    let mut collapsed = String::with_capacity(slug.len());
    for c in slug.chars() {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }

    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_text() {
        assert_eq!(truncate_text("Freightliner Cascadia", 12), "Freightliner...");
        assert_eq!(truncate_text("short", 50), "short");
        assert_eq!(truncate_text("exact", 5), "exact");
        assert_eq!(truncate_text("", 5), "");
        assert_eq!(truncate_text("Zürich depot", 6), "Zürich...");
    }

    #[test]
    fn initials() {
        assert_eq!(get_initials("John Smith"), "JS");
        assert_eq!(get_initials("Maria de la Garcia"), "MG");
        assert_eq!(get_initials("cher"), "CH");
        assert_eq!(get_initials(""), "??");
    }

    #[test]
    fn phone_numbers() {
        assert_eq!(format_phone_number("555.123.4567"), "(555) 123-4567");
        assert_eq!(format_phone_number("+44 20 7946 0958"), "+44 20 7946 0958");
        assert_eq!(format_phone_number(""), "");
    }

    #[test]
    fn slugs() {
        assert_eq!(slugify("  Dry Van Loads  "), "dry-van-loads");
        assert_eq!(slugify("Acme Logistics, Inc."), "acme-logistics-inc");
        assert_eq!(slugify("a ! b"), "a-b");
        assert_eq!(slugify("--fleet--safety--"), "fleet-safety");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    }
}
