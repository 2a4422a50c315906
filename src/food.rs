use rand::Rng;

use crate::grid::{Cell, Grid};

/// Draws a fresh food cell. Snake bodies are not avoided; only the cell in
/// `previous` is redrawn so that eaten food always moves, unless the grid has
/// a single cell.
pub fn spawn_food<R: Rng + ?Sized>(grid: Grid, previous: Option<Cell>, rng: &mut R) -> Cell {
    loop {
        let cell = grid.random_cell(rng);
        if grid.cell_count() <= 1 || Some(cell) != previous {
            return cell;
        }
    }
}
