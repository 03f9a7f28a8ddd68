// src/core/sanitize.rs

/// Undo backslash-escaped quotes left over from the catalog's string
/// literals, e.g. `24\" Drum Shade` → `24" Drum Shade`.
pub fn unescape_quotes(s: &str) -> String {
    s.replace("\\\"", "\"").replace("\\'", "'")
}

/// First whitespace-separated word, used to match a product name against
/// image alt text.
pub fn first_word(s: &str) -> &str {
    s.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_both_quote_kinds() {
        assert_eq!(unescape_quotes(r#"24\" Drum"#), r#"24" Drum"#);
        assert_eq!(unescape_quotes(r"It\'s"), "It's");
        assert_eq!(unescape_quotes("plain"), "plain");
    }

    #[test]
    fn first_word_variants() {
        assert_eq!(first_word("Crystal Orb Chandelier"), "Crystal");
        assert_eq!(first_word("  Lamp"), "Lamp");
        assert_eq!(first_word(""), "");
    }
}
