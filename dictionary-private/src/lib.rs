//! This crate implements a dictionary of private DICOM attributes.
//!
//! Private data elements are defined by equipment vendors
//! rather than by the standard.
//! Their meaning depends on the _private creator_
//! which reserved the block of elements they belong to,
//! and the block number itself is only known at run time.
//! This dictionary names private attributes
//! by private creator and [tag pattern](TagPattern),
//! such as `GEMS_IMAG_01` and `0027xx41` (_Image Location_).
//!
//! ## Registries
//!
//! - [`PrivateDataDictionaryRegistry`]:
//!   a registry built by the application,
//!   one registration per vendor block,
//!   then shared by reference.
//! - [`SharedPrivateDictionary`]:
//!   the same registry behind a read-write lock,
//!   for registering vendor blocks while look-ups take place.
//! - [`PrivateDataDictionary`]:
//!   a lazy loaded singleton with the built-in vendor dictionaries.
//!
//! All of them implement [`PrivateTagResolver`],
//! which is what display components should depend on.
//!
//! ## Built-in vendor dictionaries
//!
//! The modules in [`vendors`] are enabled through Cargo features:
//!
//! - **gems-imag-01** (default):
//!   GE Medical Systems image attributes
//!   (private creator `GEMS_IMAG_01`)
//!
//! Other vendor dictionaries can be read at run time
//! from JSON files with the [`file`] module.
//!
//! ## Example
//!
//! ```
//! use dicom_core::Tag;
//! use dicom_dictionary_private::{PrivateDataDictionaryRegistry, PrivateTagResolver};
//!
//! let mut registry = PrivateDataDictionaryRegistry::with_builtins();
//! registry.register("ACME_01", [("0029xx10", "Widget Count")])?;
//!
//! assert_eq!(registry.label("ACME_01", Tag(0x0029, 0x1110)), "Widget Count");
//! assert_eq!(
//!     registry.label("ACME_01", Tag(0x0029, 0x1111)),
//!     "(0029,1111) (private)",
//! );
//! # Ok::<(), dicom_dictionary_private::RegisterError>(())
//! ```
pub mod builtin;
pub mod entry;
pub mod file;
pub mod pattern;
pub mod registry;
pub mod shared;
pub mod vendors;

pub use builtin::{builtin, PrivateDataDictionary};
pub use entry::{PrivateDictionaryBlock, PrivateDictionaryEntryBuf, PrivateDictionaryEntryRef};
pub use pattern::{TagPattern, TagPatternParseError};
pub use registry::{
    PrivateDataDictionaryRegistry, PrivateTagResolver, RegisterError, ResolveError,
};
pub use shared::SharedPrivateDictionary;
