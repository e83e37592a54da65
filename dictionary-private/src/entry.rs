//! Private dictionary entry types.

use crate::pattern::TagPattern;

/// A private attribute record as written in a static table.
///
/// The pattern is kept in its textual form,
/// and is only validated once the entry is registered.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PrivateDictionaryEntryRef<'a> {
    /// The tag pattern, such as `"0027xx41"`
    pub pattern: &'a str,
    /// The human readable name of the attribute
    pub name: &'a str,
}

/// A validated private attribute record with full ownership.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PrivateDictionaryEntryBuf {
    /// The tag pattern
    pub pattern: TagPattern,
    /// The human readable name of the attribute
    pub name: String,
}

/// A block of private attributes defined by one private creator.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct PrivateDictionaryBlock {
    /// The private creator identifier
    pub creator: String,
    /// The attributes, in declaration order
    pub entries: Vec<PrivateDictionaryEntryBuf>,
}

/// Check whether the text can be used as an attribute name:
/// it must have visible content and no control characters.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.chars().any(char::is_control)
}

/// Normalize a private creator identifier.
///
/// Private creator values are stored as `LO` and padded to even length,
/// so surrounding spaces and trailing null characters are insignificant.
pub fn normalize_creator(creator: &str) -> &str {
    creator.trim_end_matches(|c: char| c == ' ' || c == '\0').trim_start_matches(' ')
}
