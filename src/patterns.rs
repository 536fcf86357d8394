use crate::world::{Cell, World};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(19, 19), (20, 20), (21, 20), (21, 19), (21, 18)],
};

impl Pattern {
    pub fn stamp(&self, world: &mut World) {
        for &(row, col) in self.cells {
            world.set(row, col, Cell::Alive);
        }
    }
}
