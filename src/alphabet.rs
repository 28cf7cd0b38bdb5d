pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// Index of `a` in [`ALPHABET`], or `None` for anything outside `a`-`z`.
pub fn get_idx(a: char) -> Option<usize> {
    if a.is_ascii_lowercase() {
        Some((a as u8 - b'a') as usize)
    } else {
        None
    }
}

pub fn letter(idx: usize) -> char {
    ALPHABET[idx] as char
}

/// Lowercases `s`. Characters outside the alphabet are kept so that lookups
/// can reject them instead of silently matching a different word.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}
