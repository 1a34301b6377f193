//! `pacskit_util` v1:
//! Small stateless helpers shared by pipeline scripts.
//!
//! - `conf` : alphabets and fixed name tables
//! - `spec` : error types
//! - `text` : password generation and digit filtering
//! - `date` : weekday names and month boundaries
pub mod conf;
pub mod date;
pub mod spec;
pub mod text;

pub use conf::{
    C_PASSWORD_DIGITS, C_PASSWORD_LETTERS, C_PASSWORD_SYMBOLS, TUP_WEEKDAY_NAMES_PT,
};
pub use date::{month_date_range, weekday_name};
pub use spec::UtilError;
pub use text::{extract_digits, generate_password};
