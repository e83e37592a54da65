//! The private data element dictionary registry.
//!
//! Private attributes are only meaningful within the namespace
//! of the private creator which reserved their block,
//! so every query takes the private creator identifier
//! in addition to the concrete tag.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use dicom_core::Tag;
use snafu::{ensure, OptionExt, ResultExt, Snafu};
use tracing::{debug, trace, warn};

use crate::entry::{
    is_valid_name, normalize_creator, PrivateDictionaryBlock, PrivateDictionaryEntryBuf,
    PrivateDictionaryEntryRef,
};
use crate::pattern::{parse_tag, tag_bits, TagParseError, TagPattern, TagPatternParseError};

/// An error which rejects a whole registration call.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RegisterError {
    /// The private creator identifier is empty
    #[snafu(display("invalid private creator identifier {:?}", creator))]
    InvalidCreator { creator: String },
    /// A tag pattern is malformed
    #[snafu(display("invalid tag pattern `{}`", pattern))]
    InvalidPattern {
        pattern: String,
        source: TagPatternParseError,
    },
    /// An attribute name is empty or has control characters
    #[snafu(display("invalid name {:?} for tag pattern `{}`", name, pattern))]
    InvalidName { pattern: String, name: String },
}

/// An error when looking up a private attribute.
///
/// These are expected in normal operation,
/// since not every private attribute is known.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ResolveError {
    /// No attributes are registered for the private creator
    #[snafu(display("unknown private creator `{}`", creator))]
    UnknownCreator { creator: String },
    /// No pattern of the private creator matches the tag
    #[snafu(display("no private attribute {} for creator `{}`", tag, creator))]
    UnknownTag { creator: String, tag: Tag },
    /// The concrete tag text is malformed
    #[snafu(display("could not read concrete tag"))]
    InvalidTag { source: TagParseError },
}

/// Type trait for anything able to name private attributes.
///
/// Components which display private attributes
/// should receive a resolver rather than reach for a global registry.
pub trait PrivateTagResolver {
    /// Fetch the name of the private attribute
    /// with the given concrete tag,
    /// as defined by the given private creator.
    fn resolve_name(&self, creator: &str, tag: Tag) -> Result<Cow<'_, str>, ResolveError>;

    /// Produce a display label for the private attribute.
    ///
    /// This never fails:
    /// unknown attributes are labelled with the tag itself
    /// followed by `(private)`.
    fn label(&self, creator: &str, tag: Tag) -> String {
        match self.resolve_name(creator, tag) {
            Ok(name) => name.into_owned(),
            Err(e) => {
                trace!("{}", e);
                format!("{} (private)", tag)
            }
        }
    }
}

impl<T> PrivateTagResolver for &T
where
    T: PrivateTagResolver + ?Sized,
{
    fn resolve_name(&self, creator: &str, tag: Tag) -> Result<Cow<'_, str>, ResolveError> {
        (**self).resolve_name(creator, tag)
    }
}

/// The attributes of a single private creator.
#[derive(Debug, Clone)]
struct CreatorBlock {
    creator: String,
    /// entries in registration order
    entries: Vec<PrivateDictionaryEntryBuf>,
    /// mapping: pattern → index in `entries`
    by_pattern: HashMap<TagPattern, usize>,
    /// distinct pattern masks, in order of first registration
    masks: Vec<u32>,
}

impl CreatorBlock {
    fn new(creator: String) -> Self {
        CreatorBlock {
            creator,
            entries: Vec::new(),
            by_pattern: HashMap::new(),
            masks: Vec::new(),
        }
    }

    /// Insert or rename an attribute. Returns whether it is new.
    fn insert(&mut self, pattern: TagPattern, name: String) -> bool {
        if let Some(&i) = self.by_pattern.get(&pattern) {
            let entry = &mut self.entries[i];
            if entry.name != name {
                warn!(
                    "Private attribute {} of `{}` renamed from {:?} to {:?}",
                    pattern, self.creator, entry.name, name
                );
                entry.name = name;
            }
            return false;
        }

        if !self.masks.contains(&pattern.mask()) {
            self.masks.push(pattern.mask());
        }
        self.by_pattern.insert(pattern, self.entries.len());
        self.entries.push(PrivateDictionaryEntryBuf { pattern, name });
        true
    }

    /// Find the entry matching the concrete tag.
    /// If more than one pattern matches,
    /// the one registered first is chosen.
    fn find(&self, tag: Tag) -> Option<&PrivateDictionaryEntryBuf> {
        let bits = tag_bits(tag);
        self.masks
            .iter()
            .filter_map(|&mask| {
                self.by_pattern
                    .get(&TagPattern::from_raw_parts(bits & mask, mask))
            })
            .copied()
            .filter(|&i| self.entries[i].pattern.matches(tag))
            .min()
            .map(|i| &self.entries[i])
    }
}

/// A dictionary of private attributes,
/// organized by private creator.
///
/// The registry is built by one registration per vendor block,
/// typically at start-up,
/// and is then shared by reference for look-ups.
/// Registration requires exclusive access;
/// see [`SharedPrivateDictionary`](crate::SharedPrivateDictionary)
/// for registering more blocks while look-ups take place.
///
/// Look-up cost does not depend on the number of attributes,
/// only on the number of distinct wildcard layouts in a block
/// (one, in practice).
#[derive(Debug, Default, Clone)]
pub struct PrivateDataDictionaryRegistry {
    /// mapping: normalized creator → index in `blocks`
    by_creator: HashMap<String, usize>,
    /// creator blocks in registration order
    blocks: Vec<CreatorBlock>,
}

impl PrivateDataDictionaryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry containing the built-in vendor dictionaries
    /// enabled at compile time.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::builtin::register_builtins(&mut registry);
        registry
    }

    /// Merge a batch of `(pattern, name)` pairs
    /// into the namespace of the given private creator.
    ///
    /// The namespace is created if it does not exist
    /// and the batch is not empty.
    /// A pattern which is already registered takes the new name.
    /// If any creator, pattern or name is invalid,
    /// the whole batch is rejected and the registry is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// # use dicom_dictionary_private::PrivateDataDictionaryRegistry;
    /// # use dicom_core::Tag;
    /// let mut registry = PrivateDataDictionaryRegistry::new();
    /// registry.register("GEMS_IMAG_01", [("0027xx41", "Image Location")])?;
    /// assert_eq!(
    ///     registry.resolve("GEMS_IMAG_01", Tag(0x0027, 0x1041))?,
    ///     "Image Location",
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn register<C, I, P, N>(&mut self, creator: C, entries: I) -> Result<(), RegisterError>
    where
        C: AsRef<str>,
        I: IntoIterator<Item = (P, N)>,
        P: AsRef<str>,
        N: Into<String>,
    {
        let creator = validate_creator(creator.as_ref())?;
        let entries = entries
            .into_iter()
            .map(|(pattern, name)| validate_entry(pattern.as_ref(), name.into()))
            .collect::<Result<Vec<_>, _>>()?;
        self.merge(creator, entries);
        Ok(())
    }

    /// Register a static table of private attributes.
    pub fn register_entries(
        &mut self,
        creator: &str,
        entries: &[PrivateDictionaryEntryRef<'_>],
    ) -> Result<(), RegisterError> {
        self.register(creator, entries.iter().map(|e| (e.pattern, e.name)))
    }

    /// Register a block of private attributes,
    /// such as one loaded from a dictionary file.
    pub fn register_block(&mut self, block: &PrivateDictionaryBlock) -> Result<(), RegisterError> {
        let creator = validate_creator(&block.creator)?;
        for e in &block.entries {
            ensure!(
                is_valid_name(&e.name),
                InvalidNameSnafu {
                    pattern: e.pattern.to_string(),
                    name: &e.name,
                }
            );
        }
        self.merge(
            creator,
            block
                .entries
                .iter()
                .map(|e| (e.pattern, e.name.clone()))
                .collect(),
        );
        Ok(())
    }

    fn merge(&mut self, creator: &str, entries: Vec<(TagPattern, String)>) {
        let index = match self.by_creator.get(creator) {
            Some(&i) => i,
            None if entries.is_empty() => {
                debug!("Nothing to register for `{}`", creator);
                return;
            }
            None => {
                let i = self.blocks.len();
                self.blocks.push(CreatorBlock::new(creator.to_string()));
                self.by_creator.insert(creator.to_string(), i);
                i
            }
        };
        let block = &mut self.blocks[index];
        let total = entries.len();
        let mut added = 0;
        for (pattern, name) in entries {
            if block.insert(pattern, name) {
                added += 1;
            }
        }
        debug!(
            "Registered {} private attributes for `{}` ({} new)",
            total, creator, added
        );
    }

    /// Fetch the name of a private attribute by its concrete tag.
    pub fn resolve(&self, creator: &str, tag: Tag) -> Result<&str, ResolveError> {
        let block = self
            .block(creator)
            .context(UnknownCreatorSnafu { creator })?;
        block
            .find(tag)
            .map(|e| e.name.as_str())
            .context(UnknownTagSnafu { creator, tag })
    }

    /// Fetch the name of a private attribute
    /// by its concrete tag in text form,
    /// such as `"00271041"` or `"(0027,1041)"`.
    pub fn resolve_str(&self, creator: &str, tag: &str) -> Result<&str, ResolveError> {
        let tag = parse_tag(tag).context(InvalidTagSnafu)?;
        self.resolve(creator, tag)
    }

    /// Fetch the entry registered with exactly the given pattern.
    pub fn get(&self, creator: &str, pattern: TagPattern) -> Option<&PrivateDictionaryEntryBuf> {
        let block = self.block(creator)?;
        block.by_pattern.get(&pattern).map(|&i| &block.entries[i])
    }

    /// Iterate over the registered private creators,
    /// in order of first registration.
    pub fn creators(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.creator.as_str())
    }

    /// Retrieve all entries of a private creator,
    /// in order of first registration.
    pub fn entries(&self, creator: &str) -> Option<&[PrivateDictionaryEntryBuf]> {
        self.block(creator).map(|b| b.entries.as_slice())
    }

    /// Take an owned copy of every creator block.
    pub fn to_blocks(&self) -> Vec<PrivateDictionaryBlock> {
        self.blocks
            .iter()
            .map(|b| PrivateDictionaryBlock {
                creator: b.creator.clone(),
                entries: b.entries.clone(),
            })
            .collect()
    }

    /// The total number of private attributes registered.
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|b| b.entries.len()).sum()
    }

    /// Whether no private attributes are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn block(&self, creator: &str) -> Option<&CreatorBlock> {
        self.by_creator
            .get(normalize_creator(creator))
            .map(|&i| &self.blocks[i])
    }
}

impl PrivateTagResolver for PrivateDataDictionaryRegistry {
    fn resolve_name(&self, creator: &str, tag: Tag) -> Result<Cow<'_, str>, ResolveError> {
        self.resolve(creator, tag).map(Cow::Borrowed)
    }
}

impl fmt::Display for PrivateDataDictionaryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Private DICOM Data Dictionary ({} creators, {} attributes)",
            self.blocks.len(),
            self.len()
        )
    }
}

/// Normalize and check a private creator identifier.
pub(crate) fn validate_creator(creator: &str) -> Result<&str, RegisterError> {
    let normalized = normalize_creator(creator);
    ensure!(
        !normalized.is_empty() && !normalized.chars().any(char::is_control),
        InvalidCreatorSnafu { creator }
    );
    Ok(normalized)
}

/// Parse and check one private attribute record.
pub(crate) fn validate_entry(
    pattern: &str,
    name: String,
) -> Result<(TagPattern, String), RegisterError> {
    let parsed: TagPattern = pattern
        .parse()
        .context(InvalidPatternSnafu { pattern })?;
    ensure!(is_valid_name(&name), InvalidNameSnafu { pattern, name: &name });
    Ok((parsed, name))
}

#[cfg(test)]
mod tests {
    use super::{PrivateDataDictionaryRegistry, PrivateTagResolver, RegisterError, ResolveError};
    use dicom_core::Tag;

    const GEMS: &str = "GEMS_IMAG_01";

    fn registry() -> PrivateDataDictionaryRegistry {
        let mut registry = PrivateDataDictionaryRegistry::new();
        registry
            .register(
                GEMS,
                [
                    ("0027xx06", "Image Archive Flag"),
                    ("0027xx41", "Image Location"),
                    ("0027xx62", "Number Of Excitations"),
                ],
            )
            .unwrap();
        registry
    }

    #[test]
    fn resolve_known_attributes() {
        let registry = registry();
        assert_eq!(
            registry.resolve(GEMS, Tag(0x0027, 0x1041)).unwrap(),
            "Image Location"
        );
        assert_eq!(
            registry.resolve(GEMS, Tag(0x0027, 0x2106)).unwrap(),
            "Image Archive Flag"
        );
        assert_eq!(
            registry.resolve_str(GEMS, "(0027,FF62)").unwrap(),
            "Number Of Excitations"
        );
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn resolve_failures() {
        let registry = registry();
        assert!(matches!(
            registry.resolve(GEMS, Tag(0x0028, 0x1041)),
            Err(ResolveError::UnknownTag { .. })
        ));
        assert!(matches!(
            registry.resolve(GEMS, Tag(0x0027, 0x0041)),
            Err(ResolveError::UnknownTag { .. })
        ));
        assert!(matches!(
            registry.resolve("ACME_01", Tag(0x0027, 0x1041)),
            Err(ResolveError::UnknownCreator { .. })
        ));
        assert!(matches!(
            registry.resolve_str(GEMS, "0027xx41"),
            Err(ResolveError::InvalidTag { .. })
        ));
    }

    #[test]
    fn padded_creator_is_the_same_namespace() {
        let mut registry = registry();
        assert_eq!(
            registry.resolve("GEMS_IMAG_01 ", Tag(0x0027, 0x1041)).unwrap(),
            "Image Location"
        );
        registry
            .register("GEMS_IMAG_01\0", [("0027xx10", "Scout Type")])
            .unwrap();
        assert_eq!(registry.creators().collect::<Vec<_>>(), vec![GEMS]);
        assert_eq!(registry.entries(GEMS).unwrap().len(), 4);
    }

    #[test]
    fn empty_creator_is_rejected() {
        let mut registry = PrivateDataDictionaryRegistry::new();
        let err = registry
            .register("  ", [("0027xx41", "Image Location")])
            .unwrap_err();
        assert!(matches!(err, RegisterError::InvalidCreator { .. }));
        assert!(registry.is_empty());
        assert_eq!(registry.creators().count(), 0);
    }

    #[test]
    fn empty_batch_creates_no_namespace() {
        let mut registry = registry();
        registry
            .register("ACME_01", Vec::<(&str, &str)>::new())
            .unwrap();
        assert_eq!(registry.creators().collect::<Vec<_>>(), vec![GEMS]);
        assert!(matches!(
            registry.resolve("ACME_01", Tag(0x0029, 0x1010)),
            Err(ResolveError::UnknownCreator { .. })
        ));
        assert!(registry.entries("ACME_01").is_none());

        // an existing namespace is kept as is
        registry.register(GEMS, Vec::<(&str, &str)>::new()).unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn invalid_name_rejects_batch() {
        let mut registry = registry();
        let err = registry
            .register(GEMS, [("0027xx10", "Scout Type"), ("0027xx20", "")])
            .unwrap_err();
        assert!(matches!(err, RegisterError::InvalidName { .. }));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn overlapping_patterns_first_registered_wins() {
        let mut registry = PrivateDataDictionaryRegistry::new();
        registry
            .register("ACME_01", [("0029xx10", "Block Wide"), ("002910xx", "Block Ten")])
            .unwrap();
        // (0029,1010) is matched by both patterns
        assert_eq!(
            registry.resolve("ACME_01", Tag(0x0029, 0x1010)).unwrap(),
            "Block Wide"
        );
        assert_eq!(
            registry.resolve("ACME_01", Tag(0x0029, 0x1011)).unwrap(),
            "Block Ten"
        );
        assert_eq!(
            registry.resolve("ACME_01", Tag(0x0029, 0x2010)).unwrap(),
            "Block Wide"
        );
    }

    #[test]
    fn labels_fall_back_to_tag() {
        let registry = registry();
        assert_eq!(registry.label(GEMS, Tag(0x0027, 0x1041)), "Image Location");
        assert_eq!(
            registry.label(GEMS, Tag(0x0027, 0x1099)),
            "(0027,1099) (private)"
        );
        assert_eq!(
            registry.label("ACME_01", Tag(0x0027, 0x1041)),
            "(0027,1041) (private)"
        );
    }

    #[test]
    fn get_by_pattern() {
        let registry = registry();
        let entry = registry
            .get(GEMS, "0027xx62".parse().unwrap())
            .expect("entry should exist");
        assert_eq!(entry.name, "Number Of Excitations");
        assert!(registry.get(GEMS, "0027xx63".parse().unwrap()).is_none());
        assert!(registry.get("ACME_01", "0027xx62".parse().unwrap()).is_none());
    }
}
