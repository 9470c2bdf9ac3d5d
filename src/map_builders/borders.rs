use super::{BuilderMap, BuildResult, MetaMapBuilder};
use crate::map::Map;

/// Wraps the finished interior in a solid ring of trees. The map is
/// reallocated at the larger size and every recorded coordinate is shifted
/// into bordered space, so downstream consumers only ever see one
/// coordinate system.
pub struct BorderExpansion {
    border_size: i32,
}

impl BorderExpansion {
    pub fn new (border_size: i32) -> Box<BorderExpansion> {
        Box::new(BorderExpansion { border_size })
    }
}

impl MetaMapBuilder for BorderExpansion {
    fn build_map (&mut self, _rng: &mut rltk::RandomNumberGenerator, build_data: &mut BuilderMap) -> BuildResult {
        let b = self.border_size;
        let old = &build_data.map;
        let mut bordered = Map::new(old.width + 2*b, old.height + 2*b, old.name.clone());
        for y in 0..old.height {
            for x in 0..old.width {
                let src = old.xy_idx(x, y);
                let dst = bordered.xy_idx(x + b, y + b);
                bordered.tiles[dst] = old.tiles[src];
            }
        }

        build_data.width = bordered.width;
        build_data.height = bordered.height;
        build_data.map = bordered;

        if let Some(start) = build_data.start_position.as_mut() {
            start.x += b;
            start.y += b;
        }
        if let Some(end) = build_data.end_position.as_mut() {
            end.x += b;
            end.y += b;
        }
        for center in build_data.clearing_centers.iter_mut() {
            center.x += b;
            center.y += b;
        }
        for visited in build_data.visit_order.iter_mut() {
            visited.x += b;
            visited.y += b;
        }
        build_data.take_snapshot();
        Ok(())
    }
}
