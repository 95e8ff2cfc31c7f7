//! Emit the Lua level table.
//!
//! The layout is byte-for-byte what the game's loader has always been fed,
//! including the odd spacing inside `props = {  }`, so keep it that way.

use crate::model::{BulletBudget, Entity, Level, Options, Wall, WallFormat};
use std::fs;
use std::io;
use std::path::Path;

/// Render all levels and write them in one go.
pub fn emit(levels: &[Level], opts: &Options, path: &Path) -> io::Result<()> {
    fs::write(path, render(levels, opts))
}

pub fn render(levels: &[Level], opts: &Options) -> String {
    let mut out = format!("local {} = {{", opts.table_name);
    for level in levels {
        out.push_str(&render_level(level, opts));
    }
    out.push_str("}\n");
    out
}

/// `[index] = {...},` with every section that was found.
pub fn render_level(level: &Level, opts: &Options) -> String {
    let mut out = format!("[{}] = {{", level.index);

    if let Ok(tiles) = &level.tiles {
        out.push_str(&format!("tiles = {},", quote(tiles)));
    }
    if let Ok(entities) = &level.entities {
        out.push_str("entities = {");
        for entity in entities {
            out.push_str(&render_entity(entity));
            out.push_str(",\n");
        }
        out.push_str("},");
    }
    if let Ok(walls) = &level.walls {
        out.push_str(&render_walls(walls, opts.wall_format));
    }
    if let Some(Ok(budget)) = &level.bullets {
        out.push_str(&render_bullets(budget));
    }

    out.push_str("},");
    out
}

pub fn render_entity(entity: &Entity) -> String {
    format!(
        "{{ entityType = {}, x = {}, y = {}, width = {}, height = {}, props = {{ {} }} }}",
        quote(&entity.kind),
        entity.x,
        entity.y,
        entity.width,
        entity.height,
        render_props(&entity.props),
    )
}

/// `name = "value",` per property, nothing at all for none.
pub fn render_props(props: &[(String, String)]) -> String {
    props
        .iter()
        .map(|(name, value)| format!("{} = {},", name, quote(value)))
        .collect()
}

pub fn render_walls(walls: &[Wall], format: WallFormat) -> String {
    match format {
        WallFormat::Records => {
            let mut out = String::from("walls = {");
            for w in walls {
                // list instead of named fields, the engine unpacks by position
                out.push_str(&format!(
                    "{{ {}, {}, {}, {} }},\n",
                    w.x, w.y, w.width, w.height
                ));
            }
            out.push_str("},");
            out
        }
        WallFormat::Flat => {
            let numbers: Vec<&str> = walls
                .iter()
                .flat_map(|w| [&w.x, &w.y, &w.width, &w.height])
                .map(String::as_str)
                .collect();
            format!("walls = {},", quote(&numbers.join(",")))
        }
    }
}

pub fn render_bullets(budget: &BulletBudget) -> String {
    format!(
        "maxBullets = {}, medalBullets = {},",
        budget.max_bullets.as_deref().unwrap_or("nil"),
        budget.medal_bullets.as_deref().unwrap_or("nil"),
    )
}

/// Double-quoted Lua string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
