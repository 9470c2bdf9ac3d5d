/* ------------------------------- ForestGen -------------------------------- */
use rltk::Point;
use serde::{Serialize, Deserialize};

/* Resources */
mod config;
pub use config::GenConfig;
mod error;
pub use error::GenError;
mod rng;
pub use rng::seeded_rng;
mod map;
pub use map::*;
/* Modules */
pub mod map_builders;

/// The finished product of one generation run. All coordinates are in
/// bordered space; the start and end cells are plain Open tiles, their
/// marker-ness lives only in these coordinates.
#[derive(Serialize, Deserialize, Clone)]
pub struct GeneratedLevel {
    pub map: Map,
    pub start: Point,
    pub end: Point,
    /// Order the trail visited its waypoints, for diagnostics and tests.
    pub visit_order: Vec<Point>,
}

impl GeneratedLevel {
    /// Origin-centering convention renderers use to place markers.
    pub fn render_coords (&self, p: Point) -> (i32, i32) {
        (p.x - self.map.width / 2, p.y - self.map.height / 2)
    }
}

/// Runs the whole pipeline: validate, seed the stream, fill, place
/// checkpoints, carve clearings, smooth, weave trails, wrap the border.
pub fn generate_level (config: &GenConfig) -> Result<GeneratedLevel, GenError> {
    run_pipeline(config, false).map(|(level, _)| level)
}

/// Same pipeline, but every stage leaves a snapshot behind so a caller can
/// replay generation at its own pace.
pub fn generate_level_with_history (config: &GenConfig) -> Result<(GeneratedLevel, Vec<Map>), GenError> {
    run_pipeline(config, true)
}

fn run_pipeline (config: &GenConfig, record_history: bool) -> Result<(GeneratedLevel, Vec<Map>), GenError> {
    config.validate()?;
    let mut rng = rng::seeded_rng(config);
    let mut chain = map_builders::forest_builder(config);
    chain.build_data.record_history = record_history;
    chain.build_map(&mut rng)?;

    let build_data = chain.build_data;
    let start = build_data.start_position.expect("checkpoint placement always records a start");
    let end = build_data.end_position.expect("checkpoint placement always records an end");
    let level = GeneratedLevel {
        map: build_data.map,
        start,
        end,
        visit_order: build_data.visit_order,
    };
    Ok((level, build_data.history))
}
/* -------------------------------------------------------------------------- */
