use rand::Rng;

use crate::config::{CELL_CHANCE, MAX_CELL_HEIGHT, MAX_CELL_WIDTH};

/// How a freshly created grid is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Empty,
    Random,
}

/// Finite, fixed-size board of alive/dead cells plus a running population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    width: usize,
    height: usize,
    cells: Vec<Vec<bool>>, // indexed [row][col]
    population: usize,
}

/// Zero or anything at or past the maximum falls back to the maximum.
fn clamp_dimension(requested: usize, max: usize) -> usize {
    if requested == 0 || requested >= max {
        max
    } else {
        requested
    }
}

impl GridState {
    pub fn empty(width: usize, height: usize) -> Self {
        let width = clamp_dimension(width, MAX_CELL_WIDTH);
        let height = clamp_dimension(height, MAX_CELL_HEIGHT);

        Self {
            width,
            height,
            cells: vec![vec![false; width]; height],
            population: 0,
        }
    }

    /// Each cell starts alive independently with `CELL_CHANCE` in 101.
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut grid = Self::empty(width, height);

        for row in grid.cells.iter_mut() {
            for cell in row.iter_mut() {
                if rng.gen_range(0..=100) < CELL_CHANCE {
                    *cell = true;
                    grid.population += 1;
                }
            }
        }

        grid
    }

    pub fn create<R: Rng + ?Sized>(width: usize, height: usize, fill: Fill, rng: &mut R) -> Self {
        match fill {
            Fill::Empty => Self::empty(width, height),
            Fill::Random => Self::random(width, height, rng),
        }
    }

    /// Builds a grid from row-major cell data; rows must all share one length.
    pub fn from_rows(cells: Vec<Vec<bool>>) -> Self {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);
        debug_assert!(cells.iter().all(|row| row.len() == width));
        let population = cells.iter().flatten().filter(|&&alive| alive).count();

        Self {
            width,
            height,
            cells,
            population,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
    }

    /// Out-of-bounds reads report a dead cell; callers are expected to check `contains` first.
    pub fn get(&self, col: usize, row: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Writes one cell and moves the population by the signed change.
    /// Writes outside the board are dropped.
    pub fn set(&mut self, col: usize, row: usize, alive: bool) {
        let Some(cell) = self.cells.get_mut(row).and_then(|cells| cells.get_mut(col)) else {
            return;
        };

        match (*cell, alive) {
            (false, true) => self.population += 1,
            (true, false) => self.population -= 1,
            _ => {}
        }
        *cell = alive;
    }

    /// Alive cell coordinates as (col, row), row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &alive)| alive)
                .map(move |(col, _)| (col, row))
        })
    }

    /// Full recount, independent of the running tally.
    pub fn count_alive(&self) -> usize {
        self.live_cells().count()
    }
}
