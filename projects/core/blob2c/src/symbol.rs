//! Validation of the user supplied base identifier.
//!
//! The rules are intentionally conservative so that every accepted name is a valid
//! identifier in both C and C++:
//!
//! - 1 to 255 characters long
//! - does not begin with a decimal digit
//! - contains only ASCII letters, ASCII digits and underscores
//!
//! Non-ASCII characters are always rejected. Reserved words (`int`, `class`, ...) are
//! NOT checked; passing one will produce source that fails to compile downstream.

use core::fmt;
use core::str::FromStr;
use thiserror::Error;

/// Maximum length of a symbol name, in bytes.
pub const MAX_SYMBOL_NAME_LEN: usize = 255;

/// Reasons a candidate symbol name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolNameError {
    /// The name is empty
    #[error("name is empty")]
    Empty,

    /// The name exceeds [`MAX_SYMBOL_NAME_LEN`] bytes
    #[error("name is {len} bytes long, the maximum is {MAX_SYMBOL_NAME_LEN}")]
    TooLong { len: usize },

    /// The name starts with a decimal digit
    #[error("name must not start with a digit")]
    LeadingDigit,

    /// The name contains a character outside `[A-Za-z0-9_]`
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Checks a candidate name, returning the first rule it breaks.
pub fn validate_symbol_name(name: &str) -> Result<(), SymbolNameError> {
    let bytes = name.as_bytes();

    if bytes.is_empty() {
        return Err(SymbolNameError::Empty);
    }

    if bytes.len() > MAX_SYMBOL_NAME_LEN {
        return Err(SymbolNameError::TooLong { len: bytes.len() });
    }

    if bytes[0].is_ascii_digit() {
        return Err(SymbolNameError::LeadingDigit);
    }

    if let Some((position, character)) = name
        .char_indices()
        .find(|&(_, ch)| !(ch.is_ascii_alphanumeric() || ch == '_'))
    {
        return Err(SymbolNameError::InvalidCharacter {
            character,
            position,
        });
    }

    Ok(())
}

/// Returns `true` if `name` can be used as a base identifier for generated code.
#[inline]
pub fn is_valid_symbol_name(name: &str) -> bool {
    validate_symbol_name(name).is_ok()
}

/// A validated identifier used as the base name of every generated declaration.
///
/// Can only be constructed through [`SymbolName::new`] (or the equivalent
/// [`FromStr`]/[`TryFrom`] impls), so holding one guarantees the name passed
/// [`validate_symbol_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolName(String);

impl SymbolName {
    /// Validates `name` and wraps it.
    pub fn new(name: &str) -> Result<Self, SymbolNameError> {
        validate_symbol_name(name)?;
        Ok(Self(name.to_owned()))
    }

    /// The name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SymbolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SymbolName {
    type Err = SymbolNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for SymbolName {
    type Error = SymbolNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
