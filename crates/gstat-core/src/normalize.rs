use unicode_normalization::UnicodeNormalization;

/// Canonical form of a typed player name: NFKC, then letters and spaces
/// only, then each word title-cased. Hebrew letters are caseless and pass
/// through unchanged. Idempotent.
pub fn normalize_query(raw: &str) -> String {
    let filtered: String = raw.nfkc().filter(|c| is_permitted(*c)).collect();

    filtered
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

/// ASCII letters, the Hebrew letter block א..ת (final forms included),
/// and whitespace. Everything else is stripped.
fn is_permitted(c: char) -> bool {
    c.is_ascii_alphabetic() || ('א'..='ת').contains(&c) || c.is_whitespace()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
