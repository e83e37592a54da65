//! Code generation of built-in vendor dictionaries.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs::create_dir_all;
use std::io::Write as _;
use std::path::PathBuf;

use clap::Parser;
use dicom_dictionary_private::{file, PrivateDictionaryBlock, TagPattern};
use eyre::{bail, Context, Result};
use heck::ToShoutySnakeCase;
use tracing::info;

/// Generate the Rust module of a built-in vendor dictionary
#[derive(Debug, Parser)]
#[clap(name = "rust")]
pub struct RustApp {
    /// Path to the dictionary file,
    /// which must contain a single private creator block
    from: PathBuf,

    /// The output file (standard output by default)
    #[clap(short('o'))]
    output: Option<PathBuf>,

    /// A short description of the vendor dictionary
    /// for the module documentation
    /// (the private creator by default)
    #[clap(long)]
    title: Option<String>,
}

pub fn run(app: RustApp) -> Result<()> {
    let RustApp {
        from,
        output,
        title,
    } = app;

    info!("Reading from file {}", from.display());
    let blocks = file::load_file(&from)
        .wrap_err_with(|| format!("could not load {}", from.display()))?;
    let block = match blocks.as_slice() {
        [block] => block,
        _ => bail!(
            "expected a single private creator block, found {}",
            blocks.len()
        ),
    };

    let code = to_code(block, title.as_deref())?;

    match output {
        Some(path) => {
            if let Some(p_dir) = path.parent() {
                create_dir_all(p_dir)?;
            }
            std::fs::write(&path, code)?;
            info!(
                "Wrote {} attributes of `{}` to {}",
                block.entries.len(),
                block.creator,
                path.display()
            );
        }
        None => std::io::stdout().write_all(code.as_bytes())?,
    }

    Ok(())
}

/// Write a private creator block as a Rust module.
fn to_code(block: &PrivateDictionaryBlock, title: Option<&str>) -> Result<String> {
    let mut f = String::new();

    writeln!(
        f,
        "//! Private attributes of {}.",
        title.unwrap_or(block.creator.as_str())
    )?;
    f.push_str("// Automatically generated. Edit at your own risk.\n\n");
    f.push_str("use crate::entry::PrivateDictionaryEntryRef;\n\n");
    f.push_str("/// Private creator identifier\n");
    writeln!(f, "pub const PRIVATE_CREATOR: &str = {:?};", block.creator)?;
    f.push('\n');

    let mut used = HashSet::new();
    for e in &block.entries {
        writeln!(f, "/// {}", e.name)?;
        writeln!(
            f,
            "#[rustfmt::skip]\npub const {}: &str = \"{}\";",
            constant_name(&e.name, e.pattern, &mut used),
            e.pattern,
        )?;
    }

    f.push_str("\ntype E = PrivateDictionaryEntryRef<'static>;\n\n");
    f.push_str("#[rustfmt::skip]\npub const ENTRIES: &[E] = &[\n");
    for e in &block.entries {
        writeln!(
            f,
            "    E {{ pattern: \"{}\", name: {:?} }},",
            e.pattern, e.name
        )?;
    }
    f.push_str("];\n");

    Ok(f)
}

/// Derive a unique constant identifier from an attribute name.
fn constant_name(name: &str, pattern: TagPattern, used: &mut HashSet<String>) -> String {
    let mut ident = name.to_shouty_snake_case();
    ident.retain(|c| c.is_ascii_alphanumeric() || c == '_');
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident = format!("TAG_{}", ident);
    }
    if ident == "PRIVATE_CREATOR" || ident == "ENTRIES" || used.contains(&ident) {
        ident = format!("{}_{}", ident, pattern.to_string().to_uppercase());
    }
    used.insert(ident.clone());
    ident
}

#[cfg(test)]
mod tests {
    use super::{constant_name, to_code};
    use dicom_dictionary_private::{file, TagPattern};
    use std::collections::HashSet;

    #[test]
    fn constant_names() {
        let mut used = HashSet::new();
        let p = |s: &str| -> TagPattern { s.parse().unwrap() };
        assert_eq!(
            constant_name("Table Start Location (Scout)", p("0027xx50"), &mut used),
            "TABLE_START_LOCATION_SCOUT"
        );
        assert_eq!(
            constant_name("Image Location", p("0027xx41"), &mut used),
            "IMAGE_LOCATION"
        );
        assert_eq!(
            constant_name("Image Location", p("0029xx41"), &mut used),
            "IMAGE_LOCATION_0029XX41"
        );
        assert_eq!(
            constant_name("Entries", p("0029xx42"), &mut used),
            "ENTRIES_0029XX42"
        );
        assert_eq!(
            constant_name("3 Flag", p("0029xx43"), &mut used),
            "TAG_3_FLAG"
        );
    }

    #[test]
    fn small_module() {
        let blocks = file::load_str(
            r#"{"privateCreator": "ACME_01", "0029xx10": "Widget \"Count\""}"#,
        )
        .unwrap();
        let code = to_code(&blocks[0], None).unwrap();
        assert!(code.starts_with("//! Private attributes of ACME_01.\n"));
        assert!(code.contains("pub const PRIVATE_CREATOR: &str = \"ACME_01\";\n"));
        assert!(code.contains("pub const WIDGET_COUNT: &str = \"0029xx10\";\n"));
        assert!(code.contains("    E { pattern: \"0029xx10\", name: \"Widget \\\"Count\\\"\" },\n"));
        assert!(code.ends_with("];\n"));
    }

    // the built-in table is generated from the bundled dictionary file
    #[test]
    fn regenerates_builtin_gems_table() {
        let blocks = file::load_str(include_str!(
            "../../../dictionary-private/data/GEMS_IMAG_01.json"
        ))
        .unwrap();
        let code = to_code(&blocks[0], Some("GE Medical Systems image data")).unwrap();
        assert_eq!(
            code,
            include_str!("../../../dictionary-private/src/vendors/gems_imag_01.rs")
        );
    }
}
