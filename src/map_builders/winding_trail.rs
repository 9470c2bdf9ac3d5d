use rltk::{DistanceAlg, Point};

use super::{BuilderMap, BuildResult, MetaMapBuilder};
use crate::map::{Map, TileType};

/// Float-space control point for one trail connection. Transient; a fresh
/// sequence is built per connection.
#[derive(Clone, Copy, PartialEq, Debug)]
struct PathPoint {
    x: f32,
    y: f32,
}

impl PathPoint {
    fn from_point (p: Point) -> PathPoint {
        PathPoint { x: p.x as f32, y: p.y as f32 }
    }
}

/// Connects the start point to every clearing and finally the exit with
/// curved, walkable trails. Waypoints are visited greedily by distance and
/// each one exactly once.
pub struct WindingTrail {
    segments: i32,
    max_deviation: f32,
}

impl WindingTrail {
    pub fn new (segments: i32, max_deviation: f32) -> Box<WindingTrail> {
        Box::new(WindingTrail { segments, max_deviation })
    }
}

/// Recursive midpoint displacement. The segment midpoint is pushed along the
/// perpendicular by a random amount, then both halves recurse with the
/// deviation range halved, so each level adds finer, gentler wiggles.
/// Midpoints are clamped to stay at least one cell inside the grid.
fn curved_path (rng: &mut rltk::RandomNumberGenerator, from: PathPoint, to: PathPoint,
                segments: i32, max_deviation: f32, width: i32, height: i32,
                points: &mut Vec<PathPoint>) {
    if segments <= 0 {
        if points.last() != Some(&from) {
            points.push(from);
        }
        points.push(to);
        return;
    }

    let mut mid = PathPoint {
        x: (from.x + to.x) * 0.5,
        y: (from.y + to.y) * 0.5,
    };
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = (dx*dx + dy*dy).sqrt();
    /* A zero-length segment has no perpendicular; leave its midpoint alone */
    if length > f32::EPSILON {
        let deviation = (rng.rand::<f32>() * 2.0 - 1.0) * max_deviation;
        mid.x += (-dy / length) * deviation;
        mid.y += (dx / length) * deviation;
    }
    mid.x = mid.x.max(1.0).min((width - 2) as f32);
    mid.y = mid.y.max(1.0).min((height - 2) as f32);

    curved_path(rng, from, mid, segments - 1, max_deviation * 0.5, width, height, points);
    curved_path(rng, mid, to, segments - 1, max_deviation * 0.5, width, height, points);
}

fn open_cell (map: &mut Map, x: i32, y: i32) {
    if x >= 0 && x < map.width && y >= 0 && y < map.height {
        let idx = map.xy_idx(x, y);
        map.tiles[idx] = TileType::Open;
    }
}

/// Walks the straight line between two control points, opening the nearest
/// cell at each step plus one random 4-neighbor to widen the trail.
fn rasterize_segment (rng: &mut rltk::RandomNumberGenerator, map: &mut Map, a: PathPoint, b: PathPoint) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let steps = dx.abs().max(dy.abs()) as i32 + 1;
    for i in 0 ..= steps {
        let t = i as f32 / steps as f32;
        let x = (a.x + dx * t).round() as i32;
        let y = (a.y + dy * t).round() as i32;
        open_cell(map, x, y);
        match rng.range(0, 4) {
            0 => open_cell(map, x + 1, y),
            1 => open_cell(map, x - 1, y),
            2 => open_cell(map, x, y + 1),
            _ => open_cell(map, x, y - 1),
        }
    }
}

impl MetaMapBuilder for WindingTrail {
    fn build_map (&mut self, rng: &mut rltk::RandomNumberGenerator, build_data: &mut BuilderMap) -> BuildResult {
        let start = build_data.start_position.expect("checkpoints must be placed before trails");
        let end = build_data.end_position.expect("checkpoints must be placed before trails");
        let w = build_data.width;
        let h = build_data.height;

        let mut waypoints: Vec<Point> = build_data.clearing_centers.clone();
        waypoints.push(end);

        let mut current = start;
        while !waypoints.is_empty() {
            /* Greedy nearest; ties fall to the earliest entry */
            let mut nearest = 0;
            let mut nearest_dist = f32::MAX;
            for (i, waypoint) in waypoints.iter().enumerate() {
                let dist = DistanceAlg::Pythagoras.distance2d(current, *waypoint);
                if dist < nearest_dist {
                    nearest_dist = dist;
                    nearest = i;
                }
            }
            let target = waypoints.remove(nearest);

            let mut curve: Vec<PathPoint> = Vec::new();
            curved_path(rng, PathPoint::from_point(current), PathPoint::from_point(target),
                self.segments, self.max_deviation, w, h, &mut curve);
            for pair in curve.windows(2) {
                rasterize_segment(rng, &mut build_data.map, pair[0], pair[1]);
            }

            build_data.visit_order.push(target);
            current = target;
        }
        build_data.take_snapshot();
        Ok(())
    }
}
