use super::{BuilderMap, BuildResult, InitialMapBuilder};
use crate::map::TileType;

/// Seeds the grid: a solid rim of trees, then a random scatter inside it.
pub struct ForestFillBuilder {
    fill_percent: i32,
}

impl ForestFillBuilder {
    pub fn new (fill_percent: i32) -> Box<ForestFillBuilder> {
        Box::new(ForestFillBuilder { fill_percent })
    }
}

impl InitialMapBuilder for ForestFillBuilder {
    fn build_map (&mut self, rng: &mut rltk::RandomNumberGenerator, build_data: &mut BuilderMap) -> BuildResult {
        let w = build_data.map.width;
        let h = build_data.map.height;
        for y in 0..h {
            for x in 0..w {
                let idx = build_data.map.xy_idx(x, y);
                if x == 0 || y == 0 || x == w-1 || y == h-1 {
                    build_data.map.tiles[idx] = TileType::Tree;
                } else if rng.range(0, 100) < self.fill_percent {
                    build_data.map.tiles[idx] = TileType::Tree;
                } else {
                    build_data.map.tiles[idx] = TileType::Open;
                }
            }
        }
        build_data.take_snapshot();
        Ok(())
    }
}
