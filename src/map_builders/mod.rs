use rltk::Point;

use super::{Map, GenError};

mod utils;
mod forest_fill;
use forest_fill::ForestFillBuilder;
mod checkpoints;
use checkpoints::CheckpointPlacement;
mod clearings;
use clearings::ClearingCarver;
mod cellular_smoothing;
use cellular_smoothing::CellularSmoothing;
mod winding_trail;
use winding_trail::WindingTrail;
mod borders;
use borders::BorderExpansion;

mod forest;
pub use forest::forest_builder;

pub type BuildResult = Result<(), GenError>;

pub trait InitialMapBuilder {
    fn build_map (&mut self, rng: &mut rltk::RandomNumberGenerator, build_data: &mut BuilderMap) -> BuildResult;
}

pub trait MetaMapBuilder {
    fn build_map (&mut self, rng: &mut rltk::RandomNumberGenerator, build_data: &mut BuilderMap) -> BuildResult;
}

pub struct BuilderMap {
    pub map: Map,
    pub start_position: Option<Point>,
    pub end_position: Option<Point>,
    pub clearing_centers: Vec<Point>,
    pub visit_order: Vec<Point>,
    pub history: Vec<Map>,
    pub record_history: bool,
    pub width: i32,
    pub height: i32,
}

pub struct BuilderChain {
    starter: Option<Box<dyn InitialMapBuilder>>,
    builders: Vec<Box<dyn MetaMapBuilder>>,
    pub build_data: BuilderMap,
}

impl BuilderMap {
    pub fn new <S: ToString>(width: i32, height: i32, name: S) -> BuilderMap {
        BuilderMap {
            map: Map::new(width, height, name),
            start_position: None,
            end_position: None,
            clearing_centers: Vec::new(),
            visit_order: Vec::new(),
            history: Vec::new(),
            record_history: false,
            width,
            height,
        }
    }

    pub fn take_snapshot (&mut self) {
        if self.record_history {
            self.history.push(self.map.clone());
        }
    }
}

impl BuilderChain {
    pub fn new <S: ToString>(width: i32, height: i32, name: S) -> BuilderChain {
        BuilderChain {
            starter: None,
            builders: Vec::new(),
            build_data: BuilderMap::new(width, height, name),
        }
    }

    pub fn start_with (&mut self, starter: Box<dyn InitialMapBuilder>) {
        match self.starter {
            None => self.starter = Some(starter),
            Some(_) => panic!("You can only have one starting builder."),
        }
    }

    pub fn with (&mut self, metabuilder: Box<dyn MetaMapBuilder>) {
        self.builders.push(metabuilder);
    }

    pub fn build_map (&mut self, rng: &mut rltk::RandomNumberGenerator) -> BuildResult {
        match &mut self.starter {
            None => panic!("Cannot run a map builder chain without a starting build system"),
            Some(starter) => {
                starter.build_map(rng, &mut self.build_data)?;
            },
        }

        for metabuilder in self.builders.iter_mut() {
            metabuilder.build_map(rng, &mut self.build_data)?;
        };
        Ok(())
    }
}
