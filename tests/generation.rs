use rltk::{DistanceAlg, Point};

use forestgen::{generate_level, GenConfig, GenError, TileType};

fn test_config (seed: &str) -> GenConfig {
    GenConfig {
        seed: seed.to_string(),
        ..Default::default()
    }
}

#[test]
fn fixed_seed_runs_are_bit_identical () {
    let config = test_config("reproducible-forest");
    let a = generate_level(&config).expect("generation failed");
    let b = generate_level(&config).expect("generation failed");

    assert_eq!(a.map.tiles, b.map.tiles);
    assert_eq!(a.map.width, b.map.width);
    assert_eq!(a.map.height, b.map.height);
    assert_eq!(a.start, b.start);
    assert_eq!(a.end, b.end);
    assert_eq!(a.visit_order, b.visit_order);
}

#[test]
fn seeds_change_the_forest () {
    let a = generate_level(&test_config("first")).expect("generation failed");
    let b = generate_level(&test_config("second")).expect("generation failed");
    assert_ne!(a.map.tiles, b.map.tiles);
}

#[test]
fn border_ring_is_solid_trees () {
    for seed in ["a", "b", "c"].iter() {
        let config = GenConfig { border_size: 3, ..test_config(seed) };
        let level = generate_level(&config).expect("generation failed");

        assert_eq!(level.map.width, 64 + 6);
        assert_eq!(level.map.height, 64 + 6);
        for y in 0..level.map.height {
            for x in 0..level.map.width {
                let in_ring = x < 3 || y < 3 || x >= level.map.width - 3 || y >= level.map.height - 3;
                if in_ring {
                    let idx = level.map.xy_idx(x, y);
                    assert_eq!(level.map.tiles[idx], TileType::Tree,
                        "border cell ({}, {}) is not a tree", x, y);
                }
            }
        }
    }
}

#[test]
fn recorded_coordinates_sit_inside_the_border () {
    let config = test_config("bounds");
    let level = generate_level(&config).expect("generation failed");
    let b = config.border_size;

    let mut recorded = vec![level.start, level.end];
    recorded.extend(level.visit_order.iter().cloned());
    for p in recorded {
        assert!(p.x >= b && p.x < level.map.width - b, "{:?} outside interior", p);
        assert!(p.y >= b && p.y < level.map.height - b, "{:?} outside interior", p);
    }
}

#[test]
fn clearings_keep_their_distance_from_checkpoints () {
    let config = test_config("clearing-distance");
    let level = generate_level(&config).expect("generation failed");

    /* The visit order is the clearing centers plus the end point */
    assert_eq!(level.visit_order.len() as i32, config.num_clearings + 1);
    let min_dist = (config.clearing_radius + 2) as f32;
    for center in level.visit_order.iter().filter(|p| **p != level.end) {
        assert!(DistanceAlg::Pythagoras.distance2d(*center, level.start) >= min_dist);
        assert!(DistanceAlg::Pythagoras.distance2d(*center, level.end) >= min_dist);
    }
}

#[test]
fn trail_links_start_to_every_waypoint () {
    for seed in ["trail-1", "trail-2", "trail-3"].iter() {
        let level = generate_level(&test_config(seed)).expect("generation failed");

        let start_idx = level.map.xy_idx(level.start.x, level.start.y);
        let max_depth = (level.map.width * level.map.height) as f32;
        let dijkstra = rltk::DijkstraMap::new(
            level.map.width, level.map.height, &[start_idx], &level.map, max_depth);

        for waypoint in level.visit_order.iter() {
            let idx = level.map.xy_idx(waypoint.x, waypoint.y);
            assert_eq!(level.map.tiles[idx], TileType::Open,
                "waypoint {:?} is not open", waypoint);
            assert!(dijkstra.map[idx] < std::f32::MAX,
                "waypoint {:?} unreachable from start {:?} (seed {})", waypoint, level.start, seed);
        }
    }
}

#[test]
fn all_disabled_scenario_yields_a_seven_by_seven_ring () {
    let config = GenConfig {
        width: 5,
        height: 5,
        border_size: 1,
        checkpoint_offset: 1,
        fill_percent: 0,
        num_clearings: 0,
        smoothing_iterations: 0,
        segments: 2,
        max_deviation: 1.5,
        ..test_config("tiny")
    };
    let level = generate_level(&config).expect("generation failed");

    assert_eq!(level.map.width, 7);
    assert_eq!(level.map.height, 7);
    for y in 0..7 {
        for x in 0..7 {
            if x == 0 || y == 0 || x == 6 || y == 6 {
                let idx = level.map.xy_idx(x, y);
                assert_eq!(level.map.tiles[idx], TileType::Tree);
            }
        }
    }

    /* Only the end point was woven into the trail */
    assert_eq!(level.visit_order.len(), 1);
    assert_eq!(level.visit_order[0], level.end);

    let start_idx = level.map.xy_idx(level.start.x, level.start.y);
    let end_idx = level.map.xy_idx(level.end.x, level.end.y);
    assert_eq!(level.map.tiles[start_idx], TileType::Open);
    assert_eq!(level.map.tiles[end_idx], TileType::Open);
    let dijkstra = rltk::DijkstraMap::new(7, 7, &[start_idx], &level.map, 64.0);
    assert!(dijkstra.map[end_idx] < std::f32::MAX);
}

#[test]
fn oversized_clearing_radius_fails_instead_of_hanging () {
    let config = GenConfig {
        width: 20,
        height: 20,
        checkpoint_offset: 4,
        num_clearings: 1,
        clearing_radius: 30,
        ..test_config("hopeless")
    };
    match generate_level(&config) {
        Err(GenError::ClearingPlacementExhausted { attempts }) => assert!(attempts > 0),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("generation should not have succeeded"),
    }
}

#[test]
fn render_coords_center_the_origin () {
    let config = test_config("render");
    let level = generate_level(&config).expect("generation failed");
    let (rx, rz) = level.render_coords(Point::new(level.map.width / 2, level.map.height / 2));
    assert_eq!((rx, rz), (0, 0));
}

#[test]
fn invalid_config_fails_before_any_work () {
    let config = GenConfig { width: -1, ..Default::default() };
    match generate_level(&config) {
        Err(GenError::InvalidConfig(_)) => {},
        _ => panic!("expected a configuration error"),
    }
}
