// numeric constants that describe the visible level grid
pub const WIDTH: usize = 16;
pub const HEIGHT: usize = 14;

use crate::processor::MissingSection;
use std::path::PathBuf;

/// Size of the visible tile area every level is cropped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

impl GridSize {
    /// Length of the hex string an in-range grid encodes to,
    /// `None` when it does not fit in `usize`.
    pub fn encoded_len(&self) -> Option<usize> {
        self.width.checked_mul(self.height)?.checked_mul(2)
    }
}

/// ─────────────────────────────────────────────────────
/// Records pulled out of the object groups
/// ─────────────────────────────────────────────────────

/// One object of the "entities" group.
///
/// Coordinates are kept as the raw attribute text; the engine reads them
/// back as numbers, we never renormalise them.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: String,
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
    /// `(name, value)` pairs in source order.
    pub props: Vec<(String, String)>,
}

/// One rectangle of the "walls" group.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulletBudget {
    pub max_bullets: Option<String>,
    pub medal_bullets: Option<String>,
}

/// ─────────────────────────────────────────────────────
/// Level registry
/// ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEntry {
    pub file: String,
    pub index: u32,
}

/// Ordered `file -> level index` list. Order here is output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelRegistry {
    pub entries: Vec<LevelEntry>,
}

impl LevelRegistry {
    /// Registry whose indices follow list position, starting at 1.
    pub fn from_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = files
            .into_iter()
            .enumerate()
            .map(|(i, file)| LevelEntry {
                file: file.into(),
                index: i as u32 + 1,
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How the walls section is laid out in the output literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum WallFormat {
    /// `walls = {{ x, y, w, h }, ...}`
    #[default]
    Records,
    /// `walls = "x,y,w,h,..."`
    Flat,
}

/// Knobs shared by the processor and the writer.
#[derive(Debug, Clone)]
pub struct Options {
    pub grid: GridSize,
    pub wall_format: WallFormat,
    pub bullets: bool,
    pub strict: bool,
    pub table_name: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            wall_format: WallFormat::default(),
            bullets: false,
            strict: false,
            table_name: "LEVELS".to_string(),
        }
    }
}

/// Fully processed map handed to `writer`.
///
/// Every section keeps the reason it is missing so the writer can simply
/// leave it out.
#[derive(Debug, Clone)]
pub struct Level {
    pub index: u32,
    pub source: PathBuf,
    pub tiles: Result<String, MissingSection>,
    pub entities: Result<Vec<Entity>, MissingSection>,
    pub walls: Result<Vec<Wall>, MissingSection>,
    /// `None` when bullet extraction is disabled.
    pub bullets: Option<Result<BulletBudget, MissingSection>>,
}

impl Level {
    /// Sections that could not be found, in output order.
    pub fn missing(&self) -> Vec<MissingSection> {
        let mut missing = Vec::new();
        if let Err(m) = &self.tiles {
            missing.push(*m);
        }
        if let Err(m) = &self.entities {
            missing.push(*m);
        }
        if let Err(m) = &self.walls {
            missing.push(*m);
        }
        if let Some(Err(m)) = &self.bullets {
            missing.push(*m);
        }
        missing
    }
}
