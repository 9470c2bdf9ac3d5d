use rltk::{DistanceAlg, Point};

use super::{BuilderMap, BuildResult, MetaMapBuilder};
use super::utils::{carve_circle, clamped_range};
use crate::error::GenError;

/// Rejection-sampling budget, per requested clearing. Exhausting it aborts
/// the run instead of spinning on an impossible layout.
const ATTEMPTS_PER_CLEARING: i32 = 64;

/// Carves circular clearings at random interior centers. A center is
/// rejected (and redrawn without counting) while it sits too close to either
/// checkpoint. Clearings are never checked against each other; overlaps
/// merge into larger meadows.
pub struct ClearingCarver {
    count: i32,
    radius: i32,
}

impl ClearingCarver {
    pub fn new (count: i32, radius: i32) -> Box<ClearingCarver> {
        Box::new(ClearingCarver { count, radius })
    }
}

impl MetaMapBuilder for ClearingCarver {
    fn build_map (&mut self, rng: &mut rltk::RandomNumberGenerator, build_data: &mut BuilderMap) -> BuildResult {
        if self.count <= 0 {
            return Ok(());
        }
        let start = build_data.start_position.expect("checkpoints must be placed before clearings");
        let end = build_data.end_position.expect("checkpoints must be placed before clearings");
        let w = build_data.width;
        let h = build_data.height;
        let min_checkpoint_dist = (self.radius + 2) as f32;
        let budget = self.count * ATTEMPTS_PER_CLEARING;

        let mut attempts = 0;
        let mut placed = 0;
        while placed < self.count {
            if attempts >= budget {
                return Err(GenError::ClearingPlacementExhausted { attempts: attempts as u32 });
            }
            attempts += 1;

            let center = Point::new(clamped_range(rng, 2, w - 2), clamped_range(rng, 2, h - 2));
            if DistanceAlg::Pythagoras.distance2d(center, start) < min_checkpoint_dist { continue; }
            if DistanceAlg::Pythagoras.distance2d(center, end) < min_checkpoint_dist { continue; }

            carve_circle(&mut build_data.map, center, self.radius);
            build_data.clearing_centers.push(center);
            placed += 1;
        }
        build_data.take_snapshot();
        Ok(())
    }
}
