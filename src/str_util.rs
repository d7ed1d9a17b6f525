/// Escape text for inclusion in literal HTML (element content or
/// double-quoted attribute values).
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Lowercase, with every run of non-alphanumeric characters replaced
/// by a single `-`, and no leading or trailing `-`. Can be empty.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_hyphen = false;
    for c in s.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// `past-day` -> `pastDay`. Expects a slug as returned by `slugify`.
pub fn slug_to_camel_case(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    let mut upper_next = false;
    for c in slug.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Whether `s` can be written as a bare identifier in a template
/// expression (ASCII letters, digits and `_`, not starting with a
/// digit).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        None => false,
        Some(c) if c.is_ascii_alphabetic() || c == '_' =>
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        Some(_) => false,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_escape_html() {
        assert_eq!(escape_html("<script>alert(\"x\") & 'y'</script>"),
                   "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;");
        assert_eq!(escape_html("HDJ2123F"), "HDJ2123F");
    }

    #[test]
    fn t_slugify() {
        assert_eq!(slugify("Past day"), "past-day");
        assert_eq!(slugify("A B"), "a-b");
        assert_eq!(slugify("  Hello,   World!! "), "hello-world");
        assert_eq!(slugify("Über Größe"), "über-größe");
        assert_eq!(slugify("2024 / 25"), "2024-25");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn t_slug_to_camel_case() {
        assert_eq!(slug_to_camel_case("past-day"), "pastDay");
        assert_eq!(slug_to_camel_case("a"), "a");
        assert_eq!(slug_to_camel_case("tab-2024-25"), "tab202425");
    }

    #[test]
    fn t_is_identifier() {
        assert!(is_identifier("idPrefix"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("data-module"));
        assert!(!is_identifier(""));
    }
}
