//! Answer matching and meaning masking for the spelling quiz.

/// Placeholder that replaces the answer inside a meaning.
pub const MASK: &str = "___";

/// Normalize an answer for comparison: trim surrounding whitespace and
/// fold ASCII case.
pub fn normalize_answer(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

/// Compare a typed answer to the expected spelling.
pub fn answers_match(typed: &str, spell: &str) -> bool {
    normalize_answer(typed) == normalize_answer(spell)
}

/// Hide every occurrence of `spell` in `meaning`, ignoring ASCII case.
///
/// The spelling is matched literally. An empty spelling leaves the meaning
/// untouched.
pub fn mask_meaning(meaning: &str, spell: &str) -> String {
    if spell.is_empty() {
        return meaning.to_string();
    }

    // ASCII folding keeps byte offsets identical between the two strings.
    let haystack = meaning.to_ascii_lowercase();
    let needle = spell.to_ascii_lowercase();

    let mut masked = String::with_capacity(meaning.len());
    let mut last = 0;
    for (start, _) in haystack.match_indices(&needle) {
        masked.push_str(&meaning[last..start]);
        masked.push_str(MASK);
        last = start + needle.len();
    }
    masked.push_str(&meaning[last..]);
    masked
}
