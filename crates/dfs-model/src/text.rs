//! Name canonicalization shared by identity keys and ownership matching.

const GENERATIONAL_SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii"];

/// Canonical form of a player name.
///
/// Whole-word generational suffixes (Jr, Sr, II, III) are removed, the
/// result is lowercased, everything other than `a-z`, digits and whitespace
/// is dropped, and whitespace runs collapse to a single space.
///
/// ```
/// use dfs_model::canonical_name;
///
/// assert_eq!(canonical_name("Ja'Marr Chase"), "jamarr chase");
/// assert_eq!(canonical_name("Kenneth Walker III"), "kenneth walker");
/// ```
pub fn canonical_name(raw: &str) -> String {
    let without_suffixes = strip_generational_suffixes(raw);
    let lowered = without_suffixes.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Drop every maximal run of word characters that is a generational suffix.
fn strip_generational_suffixes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut word = String::new();
    for ch in raw.chars() {
        if is_word_char(ch) {
            word.push(ch);
            continue;
        }
        flush_word(&mut out, &mut word);
        out.push(ch);
    }
    flush_word(&mut out, &mut word);
    out
}

fn flush_word(out: &mut String, word: &mut String) {
    if !GENERATIONAL_SUFFIXES.contains(&word.to_ascii_lowercase().as_str()) {
        out.push_str(word);
    }
    word.clear();
}
