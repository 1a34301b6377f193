//! Fixed alphabets and lookup tables.

/// ASCII letters used by [`crate::text::generate_password`].
pub const C_PASSWORD_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Punctuation used by [`crate::text::generate_password`].
pub const C_PASSWORD_SYMBOLS: &str = "!@#$%&-";
/// Digits used by [`crate::text::generate_password`].
///
/// `7` is absent; generated passwords never contain it.
pub const C_PASSWORD_DIGITS: &str = "012345689";

/// Weekday names indexed Monday = 0 through Sunday = 6.
pub const TUP_WEEKDAY_NAMES_PT: [&str; 7] = [
    "segunda", "terca", "quarta", "quinta", "sexta", "sabado", "domingo",
];
