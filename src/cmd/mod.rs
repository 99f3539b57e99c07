pub mod crack;
pub mod score;

/// Strips whitespace and lowercases, the shape the core expects.
pub fn normalize_ciphertext(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
