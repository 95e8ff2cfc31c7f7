//! Tile layer encoder.
//!
//! The single tile layer is stored by Tiled as CSV rows. The engine wants the
//! visible WIDTH×HEIGHT window as one string of two-digit hex codes, row-major,
//! where `00` is an empty cell and any other code is `tile index - 1`.

use anyhow::{Result, anyhow};
use log::warn;

use super::MissingSection;
use crate::model::GridSize;
use crate::parser::Element;

pub fn encode_tiles(root: &Element, grid: GridSize) -> Result<Result<String, MissingSection>> {
    let text = match root
        .child("layer")
        .and_then(|layer| layer.first_child())
        .map(|data| data.text.as_str())
    {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(Err(MissingSection::TileLayer)),
    };

    let mut rows = text.lines();
    // Line 0 is skipped unconditionally: Tiled starts the CSV block with a
    // newline, and maps are authored one row taller than the visible area.
    rows.next();

    let len = grid
        .encoded_len()
        .ok_or_else(|| anyhow!("grid {}x{} is too large", grid.width, grid.height))?;
    let mut out = String::with_capacity(len);
    for y in 0..grid.height {
        let row = rows
            .next()
            .ok_or_else(|| anyhow!("tile data has no row {} (need {})", y + 1, grid.height))?;
        let mut cells = row.split(',');

        for x in 0..grid.width {
            let cell = cells
                .next()
                .ok_or_else(|| anyhow!("tile row {} has no column {}", y + 1, x))?;
            let tile: u32 = cell
                .trim()
                .parse()
                .map_err(|e| anyhow!("tile ({x}, {}) `{}`: {e}", y + 1, cell.trim()))?;

            if tile > 256 {
                warn!("tile ({x}, {}) index {tile} does not fit in one byte", y + 1);
            }
            out.push_str(&encode_tile(tile));
        }
    }

    Ok(Ok(out))
}

/// Hex code for one cell.
#[inline]
pub fn encode_tile(tile: u32) -> String {
    match tile {
        0 => "00".to_string(),
        t => format!("{:02x}", t - 1),
    }
}

/// Reverse of the encoding, mainly for checking generated levels.
pub fn decode_tiles(hex: &str) -> Result<Vec<u32>> {
    if hex.len() % 2 != 0 {
        return Err(anyhow!("odd tile string length {}", hex.len()));
    }
    hex.as_bytes()
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| -> Result<u32> {
            let pair = std::str::from_utf8(pair)?;
            let v = u32::from_str_radix(pair, 16)
                .map_err(|e| anyhow!("cell {i} `{pair}`: {e}"))?;
            Ok(if v == 0 { 0 } else { v + 1 })
        })
        .collect()
}
