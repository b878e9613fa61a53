//! Translation of date-fns style patterns (`MMM dd, yyyy h:mm a`) into
//! chrono `strftime` strings.

use crate::error::FormatError;

pub const DEFAULT_DATE_PATTERN: &str = "MMM dd, yyyy";
pub const DATE_TIME_PATTERN: &str = "MMM dd, yyyy h:mm a";
pub const TIME_PATTERN: &str = "h:mm a";

pub fn to_strftime(pattern: &str) -> Result<String, FormatError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            i = copy_quoted(&chars, i + 1, &mut out)
                .ok_or_else(|| FormatError::UnterminatedLiteral(pattern.to_string()))?;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let run = chars[i..].iter().take_while(|&&next| next == c).count();
            let directive = directive(c, run).ok_or_else(|| FormatError::UnsupportedToken {
                token: c,
                pattern: pattern.to_string(),
            })?;
            out.push_str(directive);
            i += run;
            continue;
        }

        push_literal(&mut out, c);
        i += 1;
    }

    Ok(out)
}

/// Copies a quoted literal starting after the opening quote. Returns the index
/// just past the closing quote, or `None` when the quote never closes.
fn copy_quoted(chars: &[char], mut i: usize, out: &mut String) -> Option<usize> {
    while i < chars.len() {
        if chars[i] == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            return Some(i + 1);
        }
        push_literal(out, chars[i]);
        i += 1;
    }
    None
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn directive(token: char, run: usize) -> Option<&'static str> {
    let directive = match (token, run) {
        ('y', 2) => "%y",
        ('y', 1 | 3 | 4) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', 4) => "%B",
        ('d', 1) => "%-d",
        ('d', 2) => "%d",
        ('E', 1..=3) => "%a",
        ('E', 4) => "%A",
        ('H', 1) => "%-H",
        ('H', 2) => "%H",
        ('h', 1) => "%-I",
        ('h', 2) => "%I",
        ('m', 1) => "%-M",
        ('m', 2) => "%M",
        ('s', 1) => "%-S",
        ('s', 2) => "%S",
        ('a', 1..=3) => "%p",
        _ => return None,
    };
    Some(directive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_default_patterns() {
        assert_eq!(to_strftime(DEFAULT_DATE_PATTERN).unwrap(), "%b %d, %Y");
        assert_eq!(to_strftime(DATE_TIME_PATTERN).unwrap(), "%b %d, %Y %-I:%M %p");
        assert_eq!(to_strftime(TIME_PATTERN).unwrap(), "%-I:%M %p");
    }

    #[test]
    fn quoted_text_is_copied_verbatim() {
        assert_eq!(to_strftime("yyyy 'at' HH").unwrap(), "%Y at %H");
        assert_eq!(to_strftime("'it''s' d").unwrap(), "it's %-d");
        assert_eq!(to_strftime("HH''mm").unwrap(), "%H'%M");
    }

    #[test]
    fn percent_signs_are_escaped() {
        assert_eq!(to_strftime("d%").unwrap(), "%-d%%");
    }

    #[test]
    fn unknown_letters_are_rejected() {
        assert_eq!(
            to_strftime("yyyy-QQ"),
            Err(FormatError::UnsupportedToken {
                token: 'Q',
                pattern: "yyyy-QQ".to_string()
            })
        );
        assert!(to_strftime("MMMMM").is_err());
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        assert!(matches!(
            to_strftime("yyyy 'oops"),
            Err(FormatError::UnterminatedLiteral(_))
        ));
    }
}
