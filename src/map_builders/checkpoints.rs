use rltk::Point;

use super::{BuilderMap, BuildResult, MetaMapBuilder};
use super::utils::{carve_circle, clamped_range};

/// Radius of the breathing room opened around each checkpoint so it is
/// never boxed in by trees.
const CLEAR_RADIUS: i32 = 3;

/// Picks the start point on a random edge and the end point in the
/// diagonally opposite quadrant, then clears space around both. Checkpoints
/// are recorded as coordinates only; the tiles stay plain Tree/Open so the
/// smoother and border stages never see a marker.
pub struct CheckpointPlacement {
    offset: i32,
}

impl CheckpointPlacement {
    pub fn new (offset: i32) -> Box<CheckpointPlacement> {
        Box::new(CheckpointPlacement { offset })
    }
}

impl MetaMapBuilder for CheckpointPlacement {
    fn build_map (&mut self, rng: &mut rltk::RandomNumberGenerator, build_data: &mut BuilderMap) -> BuildResult {
        let w = build_data.width;
        let h = build_data.height;

        let start = match rng.range(0, 4) {
            0 => Point::new(clamped_range(rng, self.offset, w - self.offset), 0),
            1 => Point::new(clamped_range(rng, self.offset, w - self.offset), h - 1),
            2 => Point::new(0, clamped_range(rng, self.offset, h - self.offset)),
            _ => Point::new(w - 1, clamped_range(rng, self.offset, h - self.offset)),
        };

        /* Opposite quadrant, inset 2 from the outer edges */
        let end_x = if start.x < w / 2 {
            clamped_range(rng, w / 2, w - 2)
        } else {
            clamped_range(rng, 2, w / 2)
        };
        let end_y = if start.y < h / 2 {
            clamped_range(rng, h / 2, h - 2)
        } else {
            clamped_range(rng, 2, h / 2)
        };
        let end = Point::new(end_x, end_y);

        carve_circle(&mut build_data.map, start, CLEAR_RADIUS);
        carve_circle(&mut build_data.map, end, CLEAR_RADIUS);

        build_data.start_position = Some(start);
        build_data.end_position = Some(end);
        build_data.take_snapshot();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileType;

    fn placed (seed: u64) -> BuilderMap {
        let mut build_data = BuilderMap::new(40, 30, "test");
        let mut rng = rltk::RandomNumberGenerator::seeded(seed);
        CheckpointPlacement::new(4)
            .build_map(&mut rng, &mut build_data)
            .expect("placement cannot fail");
        build_data
    }

    #[test]
    fn start_lands_on_an_edge () {
        for seed in 0..24 {
            let build_data = placed(seed);
            let start = build_data.start_position.expect("start missing");
            let on_edge = start.x == 0 || start.x == 39 || start.y == 0 || start.y == 29;
            assert!(on_edge, "start {:?} not on an edge", start);
        }
    }

    #[test]
    fn end_sits_in_the_opposite_quadrant () {
        for seed in 0..24 {
            let build_data = placed(seed);
            let start = build_data.start_position.expect("start missing");
            let end = build_data.end_position.expect("end missing");
            assert_eq!(start.x < 20, end.x >= 20, "start {:?} end {:?}", start, end);
            assert_eq!(start.y < 15, end.y >= 15, "start {:?} end {:?}", start, end);
            assert!(end.x >= 2 && end.x < 38);
            assert!(end.y >= 2 && end.y < 28);
        }
    }

    #[test]
    fn both_checkpoints_are_cleared () {
        let build_data = placed(11);
        let start = build_data.start_position.expect("start missing");
        let end = build_data.end_position.expect("end missing");
        for p in [start, end].iter() {
            let idx = build_data.map.xy_idx(p.x, p.y);
            assert_eq!(build_data.map.tiles[idx], TileType::Open);
        }
    }
}
