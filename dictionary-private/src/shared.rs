//! A private dictionary registry which can grow while in use.

use std::borrow::Cow;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dicom_core::Tag;

use crate::entry::{PrivateDictionaryBlock, PrivateDictionaryEntryRef};
use crate::registry::{
    PrivateDataDictionaryRegistry, PrivateTagResolver, RegisterError, ResolveError,
};

/// A thread safe handle to a private dictionary registry,
/// for when vendor dictionaries are loaded at run time.
///
/// Any number of look-ups may take place concurrently,
/// whereas registrations are exclusive.
/// Cloning the handle shares the same registry.
#[derive(Debug, Clone, Default)]
pub struct SharedPrivateDictionary {
    inner: Arc<RwLock<PrivateDataDictionaryRegistry>>,
}

impl SharedPrivateDictionary {
    /// Share an existing registry.
    pub fn new(registry: PrivateDataDictionaryRegistry) -> Self {
        SharedPrivateDictionary {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Merge a batch of `(pattern, name)` pairs into the registry.
    ///
    /// See [`PrivateDataDictionaryRegistry::register`].
    pub fn register<C, I, P, N>(&self, creator: C, entries: I) -> Result<(), RegisterError>
    where
        C: AsRef<str>,
        I: IntoIterator<Item = (P, N)>,
        P: AsRef<str>,
        N: Into<String>,
    {
        self.write().register(creator, entries)
    }

    /// Register a static table of private attributes.
    pub fn register_entries(
        &self,
        creator: &str,
        entries: &[PrivateDictionaryEntryRef<'_>],
    ) -> Result<(), RegisterError> {
        self.write().register_entries(creator, entries)
    }

    /// Register a block of private attributes.
    pub fn register_block(&self, block: &PrivateDictionaryBlock) -> Result<(), RegisterError> {
        self.write().register_block(block)
    }

    /// Fetch an owned copy of a private attribute name.
    pub fn resolve(&self, creator: &str, tag: Tag) -> Result<String, ResolveError> {
        self.read().resolve(creator, tag).map(str::to_string)
    }

    /// The total number of private attributes registered.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no private attributes are registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// The registered private creators, in order of first registration.
    pub fn creators(&self) -> Vec<String> {
        self.read().creators().map(str::to_string).collect()
    }

    /// Take a copy of the registry as it is now.
    ///
    /// Later registrations through this handle
    /// are not seen by the copy.
    pub fn snapshot(&self) -> PrivateDataDictionaryRegistry {
        self.read().clone()
    }

    // guards must not escape: registering while one is held deadlocks
    fn read(&self) -> RwLockReadGuard<'_, PrivateDataDictionaryRegistry> {
        // registrations are atomic, so a poisoned registry is still consistent
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PrivateDataDictionaryRegistry> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<PrivateDataDictionaryRegistry> for SharedPrivateDictionary {
    fn from(registry: PrivateDataDictionaryRegistry) -> Self {
        SharedPrivateDictionary::new(registry)
    }
}

impl PrivateTagResolver for SharedPrivateDictionary {
    fn resolve_name(&self, creator: &str, tag: Tag) -> Result<Cow<'_, str>, ResolveError> {
        self.resolve(creator, tag).map(Cow::Owned)
    }
}
