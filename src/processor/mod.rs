//! Component 2 – the functional core.
//!
//! Every encoder looks up one section of a map. A section that is simply not
//! there comes back as `Err(MissingSection)` inside an `Ok`, anything that is
//! there but malformed is a hard error.
pub mod bullets;
pub mod entities;
pub mod tiles;
pub mod walls;

use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::{Level, LevelRegistry, Options};
use crate::parser::{self, Element};

/// An expected part of the map that could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingSection {
    #[error("no tile layer")]
    TileLayer,
    #[error("no object group named `{0}`")]
    ObjectGroup(&'static str),
    #[error("no map properties")]
    MapProperties,
}

/// First `<objectgroup>` under the map root whose name matches.
pub(crate) fn find_group<'a>(root: &'a Element, name: &str) -> Option<&'a Element> {
    root.children_named("objectgroup")
        .find(|g| g.attr("name") == Some(name))
}

/// Runs every registered map through the encoders, in registry order.
pub fn run(registry: &LevelRegistry, input_dir: &Path, opts: &Options) -> Result<Vec<Level>> {
    let mut levels = Vec::with_capacity(registry.len());

    for entry in &registry.entries {
        let path = input_dir.join(&entry.file);
        info!("[{}] {}", entry.index, path.display());

        let root = parser::load_map(&path)?;
        let level = process_map(&root, entry.index, path, opts)
            .with_context(|| format!("Converting level {} ({})", entry.index, entry.file))?;
        check_sections(&level, opts.strict)?;

        levels.push(level);
    }

    Ok(levels)
}

/// Extracts every section of one already loaded map.
pub fn process_map(root: &Element, index: u32, source: PathBuf, opts: &Options) -> Result<Level> {
    let tiles = tiles::encode_tiles(root, opts.grid)?;
    let entities = entities::encode_entities(root)?;
    let walls = walls::encode_walls(root)?;
    let bullets = opts.bullets.then(|| bullets::extract_bullets(root));

    if let Ok(list) = &entities {
        debug!("level {index}: {} entities", list.len());
    }
    if let Ok(list) = &walls {
        debug!("level {index}: {} walls", list.len());
    }

    Ok(Level {
        index,
        source,
        tiles,
        entities,
        walls,
        bullets,
    })
}

fn check_sections(level: &Level, strict: bool) -> Result<()> {
    for missing in level.missing() {
        if strict {
            return Err(anyhow!(
                "level {} ({}): {}. Is this a Tiled .tmx file?",
                level.index,
                level.source.display(),
                missing
            ));
        }
        warn!(
            "level {} ({}): {}, section left out of the output",
            level.index,
            level.source.display(),
            missing
        );
    }
    Ok(())
}
