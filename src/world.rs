use crate::patterns::Pattern;

/// Side length of the square world. The grid is bounded, not toroidal:
/// cells outside [0, N) simply do not exist.
pub const N: usize = 40;

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => '-',
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct World {
    cells: Vec<Cell>, // row * N + col
}

impl World {
    #[inline]
    pub fn new() -> Self {
        World {
            cells: vec![Cell::Dead; N * N],
        }
    }

    #[inline]
    pub fn from_pattern(pattern: &Pattern) -> Self {
        let mut world = Self::new();
        pattern.stamp(&mut world);
        world
    }

    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || col < 0 || row >= N as i32 || col >= N as i32 {
            None
        } else {
            Some(self.cells[row as usize * N + col as usize])
        }
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * N + col] = cell;
    }

    /// How many of the up-to-8 adjacent cells equal `target`. Positions
    /// outside the grid are skipped, so edges see 5 and corners 3.
    pub fn neighbors(&self, row: usize, col: usize, target: Cell) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| self.get(row as i32 + dr, col as i32 + dc))
            .filter(|&c| c == target)
            .count()
    }

    /// Writes the next generation of `self` into every cell of `next`.
    pub fn step_into(&self, next: &mut World) {
        for row in 0..N {
            for col in 0..N {
                let alive = self.neighbors(row, col, Cell::Alive);
                next.cells[row * N + col] = match self.cells[row * N + col] {
                    Cell::Alive if alive < 2 || alive > 3 => Cell::Dead,
                    Cell::Alive => Cell::Alive,
                    Cell::Dead if alive == 3 => Cell::Alive,
                    Cell::Dead => Cell::Dead,
                };
            }
        }
    }

    /// One line per row, each cell as its glyph followed by a space.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(N * (2 * N + 1));
        for row in 0..N {
            for col in 0..N {
                out.push(self.cells[row * N + col].glyph());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| (c == Cell::Alive).then_some((i / N, i % N)))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
