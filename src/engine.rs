use crate::grid::GridState;

#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Live neighbours of an in-bounds cell, or `None` when the cell itself is off the board.
/// Edges do not wrap: positions past the border are skipped, not counted as dead.
pub fn neighbor_count(grid: &GridState, col: i32, row: i32) -> Option<u8> {
    if !grid.contains(col, row) {
        return None;
    }

    let count = NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dx, dy)| (col + dx, row + dy))
        .filter(|&(c, r)| grid.contains(c, r) && grid.get(c as usize, r as usize))
        .count();

    Some(count as u8)
}

/// B3/S23
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // survival
        (false, 3) => true,            // birth
        _ => false,
    }
}

/// Advances one generation. Every rule evaluation reads `grid`; results land in a fresh
/// board whose population is tallied as it is built.
pub fn step(grid: &GridState) -> GridState {
    let rows = (0..grid.height())
        .map(|row| {
            (0..grid.width())
                .map(|col| {
                    let neighbors = neighbor_count(grid, col as i32, row as i32).unwrap_or(0);
                    next_state(grid.get(col, row), neighbors)
                })
                .collect()
        })
        .collect();

    GridState::from_rows(rows)
}
