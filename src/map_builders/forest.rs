use super::{BuilderChain, ForestFillBuilder, CheckpointPlacement, ClearingCarver,
    CellularSmoothing, WindingTrail, BorderExpansion};
use crate::config::GenConfig;

pub fn forest_builder (config: &GenConfig) -> BuilderChain {
    let mut chain = BuilderChain::new(config.width, config.height, "Into the Woods...");
    chain.start_with(ForestFillBuilder::new(config.fill_percent));
    chain.with(CheckpointPlacement::new(config.checkpoint_offset));
    chain.with(ClearingCarver::new(config.num_clearings, config.clearing_radius));
    chain.with(CellularSmoothing::new(config.smoothing_iterations));

    /* Connectivity, then the final wrap */
    chain.with(WindingTrail::new(config.segments, config.max_deviation));
    chain.with(BorderExpansion::new(config.border_size));
    chain
}
