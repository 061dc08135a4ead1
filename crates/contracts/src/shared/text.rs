//! Small string helpers shared by routing and data normalization.

/// `klondike volleyball` -> `Klondike Volleyball`.
///
/// Dashes are treated as word separators and runs of separators collapse.
pub fn title_case(value: &str) -> String {
    value
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let rest: String = chars.collect();
                    format!("{}{}", first.to_uppercase(), rest.to_lowercase())
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Klondike Volleyball` -> `klondike-volleyball`
pub fn slugify(value: &str) -> String {
    value
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Lower-cased alphanumerics only. Used as the last-resort name comparison.
pub fn normalize_name(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Capitalize the first letter only (`schedule` -> `Schedule`).
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// The upstream dumps are produced by pandas and may contain bare `NaN` or
/// `undefined` tokens, which are not JSON. Rewrite them to `null` outside of
/// string literals.
pub fn sanitize_json_literals(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = raw;

    while let Some(c) = rest.chars().next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            rest = &rest[1..];
        } else if let Some(tail) = rest.strip_prefix("NaN") {
            out.push_str("null");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("undefined") {
            out.push_str("null");
            rest = tail;
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("klondike volleyball"), "Klondike Volleyball");
        assert_eq!(title_case("KLONDIKE--volleyball-"), "Klondike Volleyball");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Klondike  Volleyball"), "klondike-volleyball");
        assert_eq!(slugify("PVF Pro"), "pvf-pro");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("St. Mary's (CA)"), "stmarysca");
    }

    #[test]
    fn test_sanitize_json_literals() {
        let raw = r#"[{"name": "NaN Tigers", "division": NaN, "level": undefined}]"#;
        assert_eq!(
            sanitize_json_literals(raw),
            r#"[{"name": "NaN Tigers", "division": null, "level": null}]"#
        );
        let escaped = r#"{"a": "quote \" NaN", "b": NaN}"#;
        assert_eq!(
            sanitize_json_literals(escaped),
            r#"{"a": "quote \" NaN", "b": null}"#
        );
    }
}
