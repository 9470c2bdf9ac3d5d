use rltk::{ BaseMap, Algorithm2D, Point };
use serde::{Serialize, Deserialize};

mod tiletype;
pub use tiletype::{TileType, tile_walkable, tile_opaque, tile_glyph};

#[derive(Default, Serialize, Deserialize, Clone)]
pub struct Map {
    pub tiles: Vec<TileType>,
    pub width: i32,
    pub height: i32,
    pub name: String,
}

impl Map {
    pub fn xy_idx (&self, x: i32, y: i32) -> usize {
        (y as usize * self.width as usize) + x as usize
    }

    fn is_exit_valid (&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width || y < 0 || y >= self.height { return false; }
        let idx = self.xy_idx(x, y);
        tile_walkable(self.tiles[idx])
    }

    /// Generates a new map, solid trees throughout
    pub fn new <S: ToString>(width: i32, height: i32, name: S) -> Map {
        let map_tile_count = (width * height) as usize;
        Map {
            tiles: vec![TileType::Tree; map_tile_count],
            width,
            height,
            name: name.to_string(),
        }
    }
}

impl Algorithm2D for Map {
    fn dimensions (&self) -> Point {
        Point::new(self.width, self.height)
    }
}

impl BaseMap for Map {
    fn is_opaque (&self, idx: usize) -> bool {
        if idx < self.tiles.len() {
            tile_opaque(self.tiles[idx])
        } else {
            true
        }
    }

    fn get_available_exits (&self, idx: usize) -> rltk::SmallVec<[(usize, f32); 10]> {
        let mut exits = rltk::SmallVec::new();
        let x = idx as i32 % self.width;
        let y = idx as i32 / self.width;
        let w = self.width as usize;

        /* Normal Directions */
        if self.is_exit_valid(x-1, y) { exits.push((idx-1, 1.0)) };
        if self.is_exit_valid(x+1, y) { exits.push((idx+1, 1.0)) };
        if self.is_exit_valid(x, y-1) { exits.push((idx-w, 1.0)) };
        if self.is_exit_valid(x, y+1) { exits.push((idx+w, 1.0)) };

        /* Diagonals */
        if self.is_exit_valid(x-1, y-1) { exits.push(((idx-w)-1, 1.45)) };
        if self.is_exit_valid(x+1, y-1) { exits.push(((idx-w)+1, 1.45)) };
        if self.is_exit_valid(x-1, y+1) { exits.push(((idx+w)-1, 1.45)) };
        if self.is_exit_valid(x+1, y+1) { exits.push(((idx+w)+1, 1.45)) };
        exits
    }

    fn get_pathing_distance (&self, idx1: usize, idx2: usize) -> f32 {
        let w = self.width as usize;
        let p1 = Point::new(idx1 % w, idx1 / w);
        let p2 = Point::new(idx2 % w, idx2 / w);
        rltk::DistanceAlg::Pythagoras.distance2d(p1, p2)
    }
}
