//! Reading and writing private dictionary files.
//!
//! A private dictionary file is a JSON object
//! with the private creator identifier in the `privateCreator` key,
//! followed by one key per attribute,
//! mapping its tag pattern to its name:
//!
//! ```json
//! {
//!   "privateCreator": "GEMS_IMAG_01",
//!   "0027xx06": "Image Archive Flag",
//!   "0027xx41": "Image Location"
//! }
//! ```
//!
//! A file may also contain a JSON array of such objects,
//! one per private creator.
//! Attributes are kept in the order in which they appear in the file.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use snafu::{OptionExt, ResultExt, Snafu};
use tracing::debug;

use crate::entry::{PrivateDictionaryBlock, PrivateDictionaryEntryBuf};
use crate::registry::{
    validate_creator, validate_entry, PrivateDataDictionaryRegistry, RegisterError,
};

/// The key holding the private creator identifier.
pub const PRIVATE_CREATOR_KEY: &str = "privateCreator";

/// An error when loading a private dictionary file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum LoadError {
    #[snafu(display("could not read dictionary file {}", path.display()))]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("dictionary is not valid JSON"))]
    Json { source: serde_json::Error },
    #[snafu(display("dictionary block #{} is not a JSON object", index))]
    NotAnObject { index: usize },
    #[snafu(display("dictionary block #{} has no `{}` string", index, PRIVATE_CREATOR_KEY))]
    MissingCreator { index: usize },
    #[snafu(display("name of `{}` in block `{}` is not a string", key, creator))]
    NonStringName { creator: String, key: String },
    #[snafu(display("invalid entry in dictionary block `{}`", creator))]
    InvalidEntry {
        creator: String,
        source: RegisterError,
    },
}

/// Parse the blocks of a private dictionary file.
pub fn load_str(text: &str) -> Result<Vec<PrivateDictionaryBlock>, LoadError> {
    let value: Value = serde_json::from_str(text).context(JsonSnafu)?;
    blocks_from_value(value)
}

/// Read the blocks of a private dictionary file from a byte source.
pub fn load_reader<R: Read>(reader: R) -> Result<Vec<PrivateDictionaryBlock>, LoadError> {
    let value: Value = serde_json::from_reader(reader).context(JsonSnafu)?;
    blocks_from_value(value)
}

/// Read the blocks of a private dictionary file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<PrivateDictionaryBlock>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).context(ReadFileSnafu { path })?;
    debug!("Loading private dictionary file {}", path.display());
    load_str(&text)
}

/// Read a private dictionary file and register all of its blocks.
///
/// Every block is validated before any of them is registered,
/// so a faulty file leaves the registry unchanged.
/// Returns the number of blocks registered.
pub fn load_file_into(
    registry: &mut PrivateDataDictionaryRegistry,
    path: impl AsRef<Path>,
) -> Result<usize, LoadError> {
    let blocks = load_file(path)?;
    for block in &blocks {
        registry
            .register_block(block)
            .context(InvalidEntrySnafu {
                creator: &block.creator,
            })?;
    }
    Ok(blocks.len())
}

fn blocks_from_value(value: Value) -> Result<Vec<PrivateDictionaryBlock>, LoadError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| block_from_value(index, item))
            .collect(),
        other => Ok(vec![block_from_value(0, other)?]),
    }
}

fn block_from_value(index: usize, value: Value) -> Result<PrivateDictionaryBlock, LoadError> {
    let map = match value {
        Value::Object(map) => map,
        _ => return NotAnObjectSnafu { index }.fail(),
    };
    let creator = map
        .get(PRIVATE_CREATOR_KEY)
        .and_then(Value::as_str)
        .context(MissingCreatorSnafu { index })?;
    let creator = validate_creator(creator)
        .context(InvalidEntrySnafu { creator })?
        .to_string();

    let mut entries = Vec::with_capacity(map.len().saturating_sub(1));
    for (key, value) in map {
        if key == PRIVATE_CREATOR_KEY {
            continue;
        }
        let name = match value {
            Value::String(name) => name,
            _ => return NonStringNameSnafu { creator, key }.fail(),
        };
        let (pattern, name) =
            validate_entry(&key, name).context(InvalidEntrySnafu { creator: &creator })?;
        entries.push(PrivateDictionaryEntryBuf { pattern, name });
    }

    Ok(PrivateDictionaryBlock { creator, entries })
}

impl PrivateDictionaryBlock {
    /// Write this block as a private dictionary JSON object.
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(self.entries.len() + 1);
        map.insert(
            PRIVATE_CREATOR_KEY.to_string(),
            Value::String(self.creator.clone()),
        );
        for e in &self.entries {
            map.insert(e.pattern.to_string(), Value::String(e.name.clone()));
        }
        Value::Object(map)
    }
}

impl PrivateDataDictionaryRegistry {
    /// Write the whole registry as a private dictionary file,
    /// one JSON object per private creator.
    pub fn to_json(&self) -> Value {
        Value::Array(self.to_blocks().iter().map(|b| b.to_json()).collect())
    }
}
