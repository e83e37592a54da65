//! Validation of private dictionary files.

use std::path::PathBuf;

use clap::Parser;
use dicom_dictionary_private::{file, PrivateDataDictionaryRegistry, PrivateDictionaryBlock};
use eyre::{ensure, Context, Result};
use tracing::{debug, error, info, warn};

/// Validate private dictionary files
#[derive(Debug, Parser)]
#[clap(name = "check")]
pub struct CheckApp {
    /// The dictionary files to check
    #[clap(required = true)]
    files: Vec<PathBuf>,

    /// Also check for renamed attributes
    /// against the built-in vendor dictionaries
    #[clap(long)]
    with_builtins: bool,
}

pub fn run(app: CheckApp) -> Result<()> {
    let CheckApp {
        files,
        with_builtins,
    } = app;

    let mut registry = if with_builtins {
        PrivateDataDictionaryRegistry::with_builtins()
    } else {
        PrivateDataDictionaryRegistry::new()
    };

    let mut failed = 0;
    for path in &files {
        let blocks = match file::load_file(path) {
            Ok(blocks) => blocks,
            Err(e) => {
                error!("{}: {:#}", path.display(), eyre::Report::new(e));
                failed += 1;
                continue;
            }
        };

        for block in &blocks {
            for warning in lint_block(&registry, block) {
                warn!("{}: {}", path.display(), warning);
            }
            registry
                .register_block(block)
                .wrap_err_with(|| format!("could not register {}", path.display()))?;
            info!(
                "{}: `{}` with {} attributes",
                path.display(),
                block.creator,
                block.entries.len()
            );
        }
    }

    debug!("{}", registry);
    ensure!(
        failed == 0,
        "{} of {} dictionary files are invalid",
        failed,
        files.len()
    );
    Ok(())
}

/// Find suspicious entries in a block which is about to be registered.
fn lint_block(registry: &PrivateDataDictionaryRegistry, block: &PrivateDictionaryBlock) -> Vec<String> {
    let mut warnings = Vec::new();

    for (i, a) in block.entries.iter().enumerate() {
        for b in &block.entries[i + 1..] {
            if a.pattern == b.pattern {
                warnings.push(format!(
                    "`{}` {} is declared twice, as {:?} and {:?}",
                    block.creator, a.pattern, a.name, b.name
                ));
            } else if a.pattern.overlaps(b.pattern) {
                warnings.push(format!(
                    "`{}` {} ({:?}) overlaps with {} ({:?})",
                    block.creator, a.pattern, a.name, b.pattern, b.name
                ));
            }
        }

        if let Some(existing) = registry.get(&block.creator, a.pattern) {
            if existing.name != a.name {
                warnings.push(format!(
                    "`{}` {} renames {:?} to {:?}",
                    block.creator, a.pattern, existing.name, a.name
                ));
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::{lint_block, run, CheckApp};
    use dicom_dictionary_private::{file, PrivateDataDictionaryRegistry};
    use std::path::PathBuf;

    #[test]
    fn lint_finds_overlaps_and_renames() {
        let mut registry = PrivateDataDictionaryRegistry::new();
        registry
            .register("ACME_01", [("0029xx10", "Widget Count")])
            .unwrap();

        let blocks = file::load_str(
            r#"{
                "privateCreator": "ACME_01",
                "0029xx10": "Gadget Count",
                "002910xx": "Widget Table",
                "0029xx05": "Widget Size"
            }"#,
        )
        .unwrap();
        let warnings = lint_block(&registry, &blocks[0]);
        assert_eq!(warnings.len(), 2, "{:?}", warnings);
        assert!(warnings[0].contains("overlaps"));
        assert!(warnings[1].contains("renames"));
    }

    #[test]
    fn lint_finds_duplicate_spellings() {
        let blocks = file::load_str(
            r#"{
                "privateCreator": "GEMS_IMAG_01",
                "0027xx1c": "Vma Mamp",
                "(0027,xx1C)": "Vma Mamp Again"
            }"#,
        )
        .unwrap();
        let registry = PrivateDataDictionaryRegistry::new();
        let warnings = lint_block(&registry, &blocks[0]);
        assert_eq!(
            warnings,
            vec![
                "`GEMS_IMAG_01` 0027xx1C is declared twice, as \"Vma Mamp\" and \"Vma Mamp Again\""
                    .to_string()
            ]
        );
    }

    #[test]
    fn missing_file_fails_the_check() {
        let missing = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("no-such-dictionary.json");
        let result = run(CheckApp {
            files: vec![missing],
            with_builtins: false,
        });
        let e = result.unwrap_err();
        assert!(e.to_string().contains("1 of 1"), "{}", e);
    }

    #[test]
    fn bundled_dictionary_is_clean() {
        let blocks = file::load_str(include_str!(
            "../../../dictionary-private/data/GEMS_IMAG_01.json"
        ))
        .unwrap();
        let registry = PrivateDataDictionaryRegistry::new();
        assert_eq!(lint_block(&registry, &blocks[0]), Vec::<String>::new());
    }
}
