use serde::{Serialize, Deserialize};

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, Serialize, Deserialize)]
pub enum TileType {
    Tree,
    Open,
}

pub fn tile_walkable (tt: TileType) -> bool {
    match tt {
        TileType::Open => true,
        _ => false,
    }
}

pub fn tile_opaque (tt: TileType) -> bool {
    match tt {
        TileType::Tree => true,
        _ => false,
    }
}

/// Glyph used by the diagnostic text dump.
pub fn tile_glyph (tt: TileType) -> char {
    match tt {
        TileType::Tree => '#',
        TileType::Open => '.',
    }
}
