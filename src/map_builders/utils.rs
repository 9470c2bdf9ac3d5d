use rltk::Point;

use crate::map::{Map, TileType};

/// Opens every cell within `radius` of `center`. Squared-distance test,
/// boundary inclusive; writes outside the map are skipped.
pub fn carve_circle (map: &mut Map, center: Point, radius: i32) {
    for dy in -radius ..= radius {
        for dx in -radius ..= radius {
            if dx*dx + dy*dy > radius*radius { continue; }
            let x = center.x + dx;
            let y = center.y + dy;
            if x >= 0 && x < map.width && y >= 0 && y < map.height {
                let idx = map.xy_idx(x, y);
                map.tiles[idx] = TileType::Open;
            }
        }
    }
}

/// Draws from [min, max), resolving to `min` when the band is empty rather
/// than panicking inside the RNG. Only degenerate tiny-grid configs hit the
/// fallback.
pub fn clamped_range (rng: &mut rltk::RandomNumberGenerator, min: i32, max: i32) -> i32 {
    if min < max {
        rng.range(min, max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carve_respects_radius_and_bounds () {
        let mut map = Map::new(11, 11, "test");
        carve_circle(&mut map, Point::new(5, 5), 2);

        let inside = map.xy_idx(5, 3);
        assert_eq!(map.tiles[inside], TileType::Open);
        let diagonal = map.xy_idx(6, 6);
        assert_eq!(map.tiles[diagonal], TileType::Open);
        let outside = map.xy_idx(7, 7);
        assert_eq!(map.tiles[outside], TileType::Tree);

        /* Clamped at the map edge, no panic */
        carve_circle(&mut map, Point::new(0, 0), 3);
        assert_eq!(map.tiles[map.xy_idx(0, 0)], TileType::Open);
    }

    #[test]
    fn clamped_range_survives_empty_bands () {
        let mut rng = rltk::RandomNumberGenerator::seeded(1);
        assert_eq!(clamped_range(&mut rng, 4, 4), 4);
        assert_eq!(clamped_range(&mut rng, 5, 3), 5);
        let drawn = clamped_range(&mut rng, 2, 8);
        assert!(drawn >= 2 && drawn < 8);
    }
}
