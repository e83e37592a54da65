//! Private attribute tag patterns.
//!
//! A private data element is only fixed in its group
//! and in the low byte of its element number.
//! The high byte of the element is the private block number,
//! reserved at run time by a private creator element
//! (`(gggg,0010)` to `(gggg,00FF)`).
//! Private dictionaries therefore describe their attributes
//! with a wildcard in place of the block number,
//! such as `0027xx41`.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use dicom_core::Tag;
use snafu::{ensure, Backtrace, Snafu};

/// The values which a wildcard byte may stand for:
/// the private block numbers which a private creator can reserve.
pub const PRIVATE_BLOCK_RANGE: RangeInclusive<u8> = 0x10..=0xFF;

/// An error returned when parsing an invalid tag pattern.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum TagPatternParseError {
    #[snafu(display("tag pattern contains non-ASCII characters"))]
    NonAscii { backtrace: Backtrace },
    #[snafu(display("tag pattern has an invalid length: got {} but must be 8", got))]
    InvalidLength { got: usize, backtrace: Backtrace },
    #[snafu(display(
        "tag component `group` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidGroupLength { got: usize, backtrace: Backtrace },
    #[snafu(display(
        "tag component `element` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidElementLength { got: usize, backtrace: Backtrace },
    #[snafu(display("invalid tag component `group`: `{}`", text))]
    InvalidGroup { text: String, backtrace: Backtrace },
    #[snafu(display("invalid tag component `element`: `{}`", text))]
    InvalidElement { text: String, backtrace: Backtrace },
    #[snafu(display("wildcards are not allowed in the group of a private tag"))]
    WildcardInGroup { backtrace: Backtrace },
    #[snafu(display("private tag pattern has no `xx` wildcard in its element"))]
    MissingWildcard { backtrace: Backtrace },
    #[snafu(display("private tag pattern has no fixed byte in its element"))]
    MissingFixedByte { backtrace: Backtrace },
}

/// An error returned when parsing a concrete DICOM tag.
#[derive(Debug, Snafu)]
#[snafu(display("invalid tag `{}`, expected `ggggeeee` or `(gggg,eeee)`", text))]
pub struct TagParseError {
    text: String,
}

/// A parsed private attribute tag pattern.
///
/// The pattern is kept as a 32-bit tag value
/// (group in the upper half, element in the lower half)
/// and a mask over the same bits.
/// Bytes covered by a wildcard are zero in both.
///
/// Textual patterns are 8 hexadecimal digits, `GGGGEEEE`,
/// in which one byte of the element is `xx`.
/// The other element byte must be fixed,
/// so that the pattern names a single attribute per private block.
/// The forms `(GGGG,EEEE)` and `GGGG,EEEE` are also accepted.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagPattern {
    value: u32,
    mask: u32,
}

impl TagPattern {
    pub(crate) fn from_raw_parts(value: u32, mask: u32) -> Self {
        TagPattern { value, mask }
    }

    /// The fixed bits of the pattern, wildcard bytes zeroed.
    #[inline]
    pub fn value(self) -> u32 {
        self.value
    }

    /// The mask of fixed bits over a 32-bit tag value.
    #[inline]
    pub fn mask(self) -> u32 {
        self.mask
    }

    /// The attribute group, which is always fixed.
    #[inline]
    pub fn group(self) -> u16 {
        (self.value >> 16) as u16
    }

    /// Check whether the given concrete tag is described by this pattern.
    ///
    /// Fixed digits must be equal,
    /// and each wildcard byte of the tag
    /// must be within [`PRIVATE_BLOCK_RANGE`].
    pub fn matches(self, tag: Tag) -> bool {
        let bits = tag_bits(tag);
        bits & self.mask == self.value
            && wildcard_shifts(self.mask)
                .all(|shift| PRIVATE_BLOCK_RANGE.contains(&((bits >> shift) as u8)))
    }

    /// Check whether some concrete tag is described
    /// by both this pattern and `other`.
    pub fn overlaps(self, other: TagPattern) -> bool {
        if (self.value ^ other.value) & self.mask & other.mask != 0 {
            return false;
        }
        // a byte fixed by only one of them must be a block number
        [8_u32, 0].into_iter().all(|shift| {
            let here = (self.mask >> shift) & 0xFF != 0;
            let there = (other.mask >> shift) & 0xFF != 0;
            match (here, there) {
                (true, false) => PRIVATE_BLOCK_RANGE.contains(&((self.value >> shift) as u8)),
                (false, true) => PRIVATE_BLOCK_RANGE.contains(&((other.value >> shift) as u8)),
                _ => true,
            }
        })
    }

    /// Produce the concrete tag of this attribute
    /// in the given private block.
    ///
    /// Returns `None` if `block` is not a valid private block number.
    pub fn instantiate(self, block: u8) -> Option<Tag> {
        if !PRIVATE_BLOCK_RANGE.contains(&block) {
            return None;
        }
        let bits = wildcard_shifts(self.mask)
            .fold(self.value, |bits, shift| bits | (u32::from(block) << shift));
        Some(Tag((bits >> 16) as u16, bits as u16))
    }
}

impl fmt::Debug for TagPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TagPattern({})", self)
    }
}

impl fmt::Display for TagPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04X}", self.group())?;
        for shift in [8, 0] {
            if (self.mask >> shift) & 0xFF == 0 {
                f.write_str("xx")?;
            } else {
                write!(f, "{:02X}", (self.value >> shift) as u8)?;
            }
        }
        Ok(())
    }
}

impl FromStr for TagPattern {
    type Err = TagPatternParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ensure!(s.is_ascii(), NonAsciiSnafu);
        let (group, elem) = split_components(s).ok_or_else(|| {
            InvalidLengthSnafu { got: s.len() }.build()
        })?;
        ensure!(
            group.len() == 4,
            InvalidGroupLengthSnafu { got: group.len() }
        );
        ensure!(
            elem.len() == 4,
            InvalidElementLengthSnafu { got: elem.len() }
        );

        let mut value = 0;
        let mut mask = 0;
        for (pair, shift) in group.as_bytes().chunks(2).zip([24, 16]) {
            match byte_part(pair) {
                Some(BytePart::Fixed(b)) => {
                    value |= u32::from(b) << shift;
                    mask |= 0xFF << shift;
                }
                Some(BytePart::Wildcard) => return WildcardInGroupSnafu.fail(),
                None => return InvalidGroupSnafu { text: group }.fail(),
            }
        }
        for (pair, shift) in elem.as_bytes().chunks(2).zip([8, 0]) {
            match byte_part(pair) {
                Some(BytePart::Fixed(b)) => {
                    value |= u32::from(b) << shift;
                    mask |= 0xFF << shift;
                }
                Some(BytePart::Wildcard) => {}
                None => return InvalidElementSnafu { text: elem }.fail(),
            }
        }
        ensure!(mask & 0xFFFF != 0xFFFF, MissingWildcardSnafu);
        ensure!(mask & 0xFFFF != 0, MissingFixedByteSnafu);

        Ok(TagPattern { value, mask })
    }
}

/// Parse a concrete DICOM tag,
/// as `ggggeeee`, `gggg,eeee` or `(gggg,eeee)`.
pub fn parse_tag(s: &str) -> Result<Tag, TagParseError> {
    let fail = || TagParseSnafu { text: s }.build();
    if !s.is_ascii() {
        return Err(fail());
    }
    let (group, elem) = split_components(s).ok_or_else(fail)?;
    if group.len() != 4 || elem.len() != 4 {
        return Err(fail());
    }
    let mut bits = 0;
    for pair in group.as_bytes().chunks(2).chain(elem.as_bytes().chunks(2)) {
        match byte_part(pair) {
            Some(BytePart::Fixed(b)) => bits = (bits << 8) | u32::from(b),
            _ => return Err(fail()),
        }
    }
    Ok(Tag((bits >> 16) as u16, bits as u16))
}

/// The tag as a single number, group first.
#[inline]
pub(crate) fn tag_bits(tag: Tag) -> u32 {
    (u32::from(tag.group()) << 16) | u32::from(tag.element())
}

/// Bit shifts of the element bytes which the mask leaves open.
fn wildcard_shifts(mask: u32) -> impl Iterator<Item = u32> {
    [8, 0]
        .into_iter()
        .filter(move |shift| (mask >> shift) & 0xFF == 0)
}

/// Separate group and element text.
/// Input must be ASCII.
fn split_components(mut s: &str) -> Option<(&str, &str)> {
    if s.starts_with('(') && s.ends_with(')') && s.len() >= 2 {
        s = &s[1..s.len() - 1];
    }
    match s.split_once(',') {
        Some(parts) => Some(parts),
        None if s.len() == 8 => Some(s.split_at(4)),
        None => None,
    }
}

enum BytePart {
    Fixed(u8),
    Wildcard,
}

fn byte_part(pair: &[u8]) -> Option<BytePart> {
    match pair {
        [b'x' | b'X', b'x' | b'X'] => Some(BytePart::Wildcard),
        [hi, lo] => Some(BytePart::Fixed((hex_digit(*hi)? << 4) | hex_digit(*lo)?)),
        _ => None,
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    char::from(c).to_digit(16).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::{parse_tag, TagPattern, TagPatternParseError};
    use dicom_core::Tag;

    #[test]
    fn test_parse_tag_pattern() {
        let pattern: TagPattern = "0027xx41".parse().unwrap();
        assert_eq!(pattern.value(), 0x0027_0041);
        assert_eq!(pattern.mask(), 0xFFFF_00FF);
        assert_eq!(pattern.group(), 0x0027);

        let same: TagPattern = "(0027,xx41)".parse().unwrap();
        assert_eq!(pattern, same);
        let same: TagPattern = "0027,XX41".parse().unwrap();
        assert_eq!(pattern, same);

        let pattern: TagPattern = "0029xx1c".parse().unwrap();
        assert_eq!(pattern.to_string(), "0029xx1C");

        // low byte wildcard
        let pattern: TagPattern = "001910xx".parse().unwrap();
        assert_eq!(pattern.mask(), 0xFFFF_FF00);
        assert_eq!(pattern.to_string(), "001910xx");
    }

    #[test]
    fn test_reject_malformed_patterns() {
        assert!(matches!(
            "0027x1".parse::<TagPattern>(),
            Err(TagPatternParseError::InvalidLength { got: 6, .. })
        ));
        assert!(matches!(
            "002741".parse::<TagPattern>(),
            Err(TagPatternParseError::InvalidLength { got: 6, .. })
        ));
        assert!(matches!(
            "00271041".parse::<TagPattern>(),
            Err(TagPatternParseError::MissingWildcard { .. })
        ));
        assert!(matches!(
            "0027xxxx".parse::<TagPattern>(),
            Err(TagPatternParseError::MissingFixedByte { .. })
        ));
        assert!(matches!(
            "(0029,XXxx)".parse::<TagPattern>(),
            Err(TagPatternParseError::MissingFixedByte { .. })
        ));
        assert!(matches!(
            "00xx1041".parse::<TagPattern>(),
            Err(TagPatternParseError::WildcardInGroup { .. })
        ));
        assert!(matches!(
            "0027x441".parse::<TagPattern>(),
            Err(TagPatternParseError::InvalidElement { .. })
        ));
        assert!(matches!(
            "+027xx41".parse::<TagPattern>(),
            Err(TagPatternParseError::InvalidGroup { .. })
        ));
        assert!(matches!(
            "(0027,xx4)".parse::<TagPattern>(),
            Err(TagPatternParseError::InvalidElementLength { got: 3, .. })
        ));
        assert!(matches!(
            "0027ẋx41".parse::<TagPattern>(),
            Err(TagPatternParseError::NonAscii { .. })
        ));
        assert!("".parse::<TagPattern>().is_err());
    }

    #[test]
    fn test_pattern_matching() {
        let pattern: TagPattern = "0027xx41".parse().unwrap();
        assert!(pattern.matches(Tag(0x0027, 0x1041)));
        assert!(pattern.matches(Tag(0x0027, 0xFF41)));
        // wrong group
        assert!(!pattern.matches(Tag(0x0028, 0x1041)));
        // wrong element byte
        assert!(!pattern.matches(Tag(0x0027, 0x1042)));
        // not a private block number
        assert!(!pattern.matches(Tag(0x0027, 0x0041)));
        assert!(!pattern.matches(Tag(0x0027, 0x0F41)));

        let pattern: TagPattern = "001910xx".parse().unwrap();
        assert!(pattern.matches(Tag(0x0019, 0x1010)));
        assert!(!pattern.matches(Tag(0x0019, 0x1110)));
    }

    #[test]
    fn test_overlaps() {
        let p = |s: &str| s.parse::<TagPattern>().unwrap();
        assert!(p("0029xx10").overlaps(p("002910xx")));
        assert!(p("0029xx10").overlaps(p("0029xx10")));
        assert!(!p("0029xx10").overlaps(p("0029xx11")));
        assert!(p("0029xx10").overlaps(p("002920xx")));
        // (0029,0510) is not a private data element
        assert!(!p("0029xx10").overlaps(p("002905xx")));
        assert!(!p("0029xx10").overlaps(p("0027xx10")));
    }

    #[test]
    fn test_instantiate() {
        let pattern: TagPattern = "0027xx41".parse().unwrap();
        assert_eq!(pattern.instantiate(0x10), Some(Tag(0x0027, 0x1041)));
        assert_eq!(pattern.instantiate(0xAB), Some(Tag(0x0027, 0xAB41)));
        assert_eq!(pattern.instantiate(0x0F), None);

        for block in 0x10..=0xFF {
            let tag = pattern.instantiate(block).unwrap();
            assert!(pattern.matches(tag));
        }
    }

    #[test]
    fn test_parse_concrete_tag() {
        assert_eq!(parse_tag("00271041").unwrap(), Tag(0x0027, 0x1041));
        assert_eq!(parse_tag("0027,1041").unwrap(), Tag(0x0027, 0x1041));
        assert_eq!(parse_tag("(0029,10ff)").unwrap(), Tag(0x0029, 0x10FF));

        assert!(parse_tag("0027xx41").is_err());
        assert!(parse_tag("0027104").is_err());
        assert!(parse_tag("(0027.1041)").is_err());
        assert!(parse_tag("").is_err());
    }
}
