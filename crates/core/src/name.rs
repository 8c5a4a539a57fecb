// Person-name canonicalization. Names arrive pasted from spreadsheets with
// uneven spacing; some layouts append free text after the name proper.

/// Token count of a full name: surname, given name, patronymic.
pub const FULL_NAME_WORDS: usize = 3;

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `words` whitespace-separated tokens, joined with single spaces.
/// Used for name fields that carry trailing free text.
pub fn name_prefix(raw: &str, words: usize) -> String {
    raw.split_whitespace().take(words).collect::<Vec<_>>().join(" ")
}
