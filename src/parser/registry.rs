//! Level registry loader.
//! The registry decides which maps are converted and which `[index]` each
//! one gets in the output table.

use anyhow::{Context, Result, anyhow};
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::model::{LevelEntry, LevelRegistry};

/// The two shapes accepted in the JSON file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRegistry {
    /// `["a.tmx", "b.tmx"]` – index is position + 1.
    List(Vec<String>),
    /// `{"a.tmx": 1, "b.tmx": 2}` – explicit indices.
    Table(BTreeMap<String, u32>),
}

pub fn load_registry(path: &Path) -> Result<LevelRegistry> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Reading level registry {}", path.display()))?;
    let registry =
        parse_registry(&json).with_context(|| format!("Parsing {}", path.display()))?;
    info!(
        "Level registry {} lists {} maps",
        path.display(),
        registry.len()
    );
    Ok(registry)
}

pub fn parse_registry(json: &str) -> Result<LevelRegistry> {
    let raw: RawRegistry = serde_json::from_str(json)
        .map_err(|e| anyhow!("expected a list of file names or a file -> index table: {e}"))?;

    let registry = match raw {
        RawRegistry::List(files) => LevelRegistry::from_files(files),
        RawRegistry::Table(table) => {
            let mut entries: Vec<LevelEntry> = table
                .into_iter()
                .map(|(file, index)| LevelEntry { file, index })
                .collect();
            entries.sort_by_key(|e| e.index);

            for pair in entries.windows(2) {
                if pair[0].index == pair[1].index {
                    return Err(anyhow!(
                        "level index {} used by both `{}` and `{}`",
                        pair[0].index,
                        pair[0].file,
                        pair[1].file
                    ));
                }
            }
            LevelRegistry { entries }
        }
    };

    if registry.is_empty() {
        return Err(anyhow!("level registry is empty"));
    }
    Ok(registry)
}
