//! Name substring rule.

/// True when `name` contains `text`, ignoring case.
///
/// A missing or empty `text` matches every name.
pub fn name_includes(name: &str, text: Option<&str>) -> bool {
    match text {
        None | Some("") => true,
        Some(text) => name.to_lowercase().contains(&text.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_includes_ignores_case() {
        assert!(name_includes("Mojito", Some("moj")));
        assert!(name_includes("Mojito", Some("JITO")));
        assert!(name_includes("Tom Collins", Some("m c")));
        assert!(!name_includes("Mojito", Some("daiquiri")));
    }

    #[test]
    fn test_name_includes_empty_text_matches_everything() {
        assert!(name_includes("Mojito", None));
        assert!(name_includes("Mojito", Some("")));
        assert!(name_includes("", None));
    }

    #[test]
    fn test_name_includes_non_ascii() {
        assert!(name_includes("Caipiriña", Some("PIRIÑA")));
    }
}
