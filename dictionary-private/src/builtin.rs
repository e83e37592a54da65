//! The built-in private data element dictionary.
//!
//! Vendor dictionaries compiled in through Cargo features
//! are registered here on first use.

use crate::entry::PrivateDictionaryEntryRef;
use crate::registry::{PrivateDataDictionaryRegistry, PrivateTagResolver, ResolveError};
use dicom_core::Tag;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::error;

static DICT: Lazy<PrivateDataDictionaryRegistry> =
    Lazy::new(PrivateDataDictionaryRegistry::with_builtins);

/// Retrieve a singleton instance of the built-in private dictionary registry.
///
/// It contains every vendor dictionary enabled through Cargo features,
/// and cannot be extended.
/// Create a registry with
/// [`PrivateDataDictionaryRegistry::with_builtins`]
/// in order to register more private attributes.
#[inline]
pub fn builtin() -> &'static PrivateDataDictionaryRegistry {
    &DICT
}

/// The vendor tables compiled into this crate,
/// as `(private creator, entries)`.
#[allow(unused_mut)]
pub fn builtin_blocks() -> Vec<(&'static str, &'static [PrivateDictionaryEntryRef<'static>])> {
    let mut blocks: Vec<(&'static str, &'static [PrivateDictionaryEntryRef<'static>])> = Vec::new();
    #[cfg(feature = "gems-imag-01")]
    blocks.push((
        crate::vendors::gems_imag_01::PRIVATE_CREATOR,
        crate::vendors::gems_imag_01::ENTRIES,
    ));
    blocks
}

pub(crate) fn register_builtins(registry: &mut PrivateDataDictionaryRegistry) {
    for (creator, entries) in builtin_blocks() {
        if let Err(e) = registry.register_entries(creator, entries) {
            error!("Built-in dictionary `{}` is corrupt: {}", creator, e);
        }
    }
}

/// A private data element dictionary which consults
/// the library's built-in vendor dictionaries.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrivateDataDictionary;

impl PrivateTagResolver for PrivateDataDictionary {
    fn resolve_name(&self, creator: &str, tag: Tag) -> Result<Cow<'_, str>, ResolveError> {
        builtin().resolve(creator, tag).map(Cow::Borrowed)
    }
}

impl Display for PrivateDataDictionary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str("Built-in Private DICOM Data Dictionary")
    }
}
