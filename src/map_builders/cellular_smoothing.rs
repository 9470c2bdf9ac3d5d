use super::{BuilderMap, BuildResult, MetaMapBuilder};
use crate::map::{Map, TileType};

/// Reshapes the raw scatter into organic groves: each pass counts tree
/// neighbors in the 8-neighborhood and grows or thins the cell accordingly.
/// Counts 3 and 4 form a neutral band where the cell keeps its value.
pub struct CellularSmoothing {
    iterations: i32,
}

impl CellularSmoothing {
    pub fn new (iterations: i32) -> Box<CellularSmoothing> {
        Box::new(CellularSmoothing { iterations })
    }
}

fn count_tree_neighbors (map: &Map, x: i32, y: i32) -> i32 {
    let mut count = 0;
    for dy in -1 ..= 1 {
        for dx in -1 ..= 1 {
            if dx == 0 && dy == 0 { continue; }
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || nx >= map.width || ny < 0 || ny >= map.height {
                /* Everything beyond the rim counts as forest */
                count += 1;
            } else if map.tiles[map.xy_idx(nx, ny)] == TileType::Tree {
                count += 1;
            }
        }
    }
    count
}

impl MetaMapBuilder for CellularSmoothing {
    fn build_map (&mut self, _rng: &mut rltk::RandomNumberGenerator, build_data: &mut BuilderMap) -> BuildResult {
        for _ in 0..self.iterations {
            /* Counts must all come from the previous pass, so each pass
               writes into a fresh buffer. */
            let mut next = build_data.map.tiles.clone();
            for y in 0..build_data.map.height {
                for x in 0..build_data.map.width {
                    let neighbors = count_tree_neighbors(&build_data.map, x, y);
                    let idx = build_data.map.xy_idx(x, y);
                    if neighbors > 4 {
                        next[idx] = TileType::Tree;
                    } else if neighbors < 3 {
                        next[idx] = TileType::Open;
                    }
                }
            }
            build_data.map.tiles = next;
            build_data.take_snapshot();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth_once (build_data: &mut BuilderMap) {
        let mut rng = rltk::RandomNumberGenerator::seeded(0);
        CellularSmoothing::new(1)
            .build_map(&mut rng, build_data)
            .expect("smoothing cannot fail");
    }

    #[test]
    fn solid_forest_stays_solid () {
        let mut build_data = BuilderMap::new(9, 9, "test");
        smooth_once(&mut build_data);
        assert!(build_data.map.tiles.iter().all(|t| *t == TileType::Tree));
    }

    #[test]
    fn lone_gap_grows_shut () {
        let mut build_data = BuilderMap::new(9, 9, "test");
        let hole = build_data.map.xy_idx(4, 4);
        build_data.map.tiles[hole] = TileType::Open;
        smooth_once(&mut build_data);
        assert_eq!(build_data.map.tiles[hole], TileType::Tree);
    }

    #[test]
    fn sparse_cells_open_and_rim_regrows () {
        let mut build_data = BuilderMap::new(9, 9, "test");
        for t in build_data.map.tiles.iter_mut() { *t = TileType::Open; }
        smooth_once(&mut build_data);

        /* Interior cells see no trees at all */
        let center = build_data.map.xy_idx(4, 4);
        assert_eq!(build_data.map.tiles[center], TileType::Open);
        /* Edge cells count the out-of-range ring as forest */
        let corner = build_data.map.xy_idx(0, 0);
        assert_eq!(build_data.map.tiles[corner], TileType::Tree);
        let edge = build_data.map.xy_idx(4, 0);
        assert_eq!(build_data.map.tiles[edge], TileType::Tree);
    }

    #[test]
    fn neutral_band_keeps_the_cell () {
        /* Exactly four tree neighbors: the cell must not change either way */
        let mut build_data = BuilderMap::new(9, 9, "test");
        for t in build_data.map.tiles.iter_mut() { *t = TileType::Open; }
        for (x, y) in [(3, 3), (5, 3), (3, 5), (5, 5)].iter() {
            let idx = build_data.map.xy_idx(*x, *y);
            build_data.map.tiles[idx] = TileType::Tree;
        }
        let center = build_data.map.xy_idx(4, 4);
        smooth_once(&mut build_data);
        assert_eq!(build_data.map.tiles[center], TileType::Open);
    }
}
