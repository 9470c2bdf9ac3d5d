use rltk::Point;

use forestgen::{generate_level, generate_level_with_history, tile_glyph, GenConfig, GenError, TileType};

fn usage () -> ! {
    println!("usage: forestgen [config.json] [seed] [--json] [--trace]");
    std::process::exit(2);
}

fn main () {
    if let Err(e) = run() {
        rltk::console::log(format!("generation failed: {}", e));
        std::process::exit(1);
    }
}

fn run () -> Result<(), GenError> {
    let mut json_out = false;
    let mut trace = false;
    let mut config_path: Option<String> = None;
    let mut seed_override: Option<String> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_out = true,
            "--trace" => trace = true,
            "--help" | "-h" => usage(),
            _ if arg.ends_with(".json") => config_path = Some(arg),
            _ => seed_override = Some(arg),
        }
    }

    let mut config = match config_path {
        Some(path) => GenConfig::from_file(path)?,
        None => GenConfig::default(),
    };
    if let Some(seed) = seed_override {
        config.seed = seed;
        config.use_random_seed = false;
    }

    let level = if trace {
        let (level, history) = generate_level_with_history(&config)?;
        for (i, snapshot) in history.iter().enumerate() {
            let trees = snapshot.tiles.iter().filter(|t| **t == TileType::Tree).count();
            rltk::console::log(format!("snapshot {:02}: {}x{}, {} trees / {} open",
                i, snapshot.width, snapshot.height, trees, snapshot.tiles.len() - trees));
        }
        level
    } else {
        generate_level(&config)?
    };

    if json_out {
        println!("{}", serde_json::to_string_pretty(&level)?);
        return Ok(());
    }

    let seed_desc = if config.use_random_seed { "(random)" } else { config.seed.as_str() };
    rltk::console::log(format!("'{}' seed '{}': {}x{}, start {:?}, end {:?}, {} waypoints",
        level.map.name, seed_desc, level.map.width, level.map.height,
        level.start, level.end, level.visit_order.len()));

    for y in 0..level.map.height {
        let mut line = String::with_capacity(level.map.width as usize);
        for x in 0..level.map.width {
            let here = Point::new(x, y);
            if here == level.start {
                line.push('S');
            } else if here == level.end {
                line.push('E');
            } else {
                line.push(tile_glyph(level.map.tiles[level.map.xy_idx(x, y)]));
            }
        }
        println!("{}", line);
    }
    Ok(())
}
