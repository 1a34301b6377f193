//! Text helpers.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::conf::{C_PASSWORD_DIGITS, C_PASSWORD_LETTERS, C_PASSWORD_SYMBOLS};

/// Generate a random password of `tamanho` characters.
///
/// Characters are drawn uniformly, with replacement, from letters, the symbol
/// set and the digit set in [`crate::conf`]. The source is `rand::thread_rng`,
/// a general-purpose generator: output is fine for throwaway credentials in
/// test fixtures and scripts but must not be treated as secret-grade.
pub fn generate_password(tamanho: usize) -> String {
    let c_alphabet = format!("{C_PASSWORD_LETTERS}{C_PASSWORD_SYMBOLS}{C_PASSWORD_DIGITS}");
    let v_alphabet = c_alphabet.as_bytes();

    let mut rng = rand::thread_rng();
    (0..tamanho)
        .map(|_| v_alphabet[rng.gen_range(0..v_alphabet.len())] as char)
        .collect()
}

// Unicode general category Nd: ASCII digits plus other scripts' decimal digits.
static RE_DECIMAL_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Nd}+").expect("constant pattern compiles"));

/// Keep only decimal-digit characters (any script) from `text`, preserving order.
///
/// Superscripts, fractions and other numeric symbols outside `Nd` are dropped.
pub fn extract_digits(text: &str) -> String {
    RE_DECIMAL_DIGITS
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}
