use crate::config::{MODULE_COLS, MODULE_ROWS, WORKSPACE_COLS, WORKSPACE_ROWS};
use crate::types::{GridPos, ModuleId};

/// Occupancy table for the workspace.
/// Each cell records which module (if any) claims it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<ModuleId>; WORKSPACE_COLS]; WORKSPACE_ROWS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[None; WORKSPACE_COLS]; WORKSPACE_ROWS],
        }
    }

    /// Whether a footprint anchored at `anchor` fits inside the grid
    /// without touching cells claimed by anyone other than `ignore`.
    pub fn can_place(&self, anchor: GridPos, ignore: Option<ModuleId>) -> bool {
        if !Self::in_bounds(anchor) {
            return false;
        }
        Self::footprint_cells(anchor).all(|(col, row)| match self.cells[row][col] {
            Some(owner) => Some(owner) == ignore,
            None => true,
        })
    }

    /// Claims the footprint for `id` without any checks.
    /// Callers must have a successful `can_place` first.
    pub fn occupy(&mut self, anchor: GridPos, id: ModuleId) {
        for (col, row) in Self::footprint_cells(anchor) {
            self.cells[row][col] = Some(id);
        }
    }

    /// Clears footprint cells claimed by `id`; other claims are left alone.
    pub fn release(&mut self, id: ModuleId, anchor: GridPos) {
        for (col, row) in Self::footprint_cells(anchor) {
            if self.cells[row][col] == Some(id) {
                self.cells[row][col] = None;
            }
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<ModuleId> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    pub fn cells_claimed_by(&self, id: ModuleId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(id))
            .count()
    }

    fn in_bounds(anchor: GridPos) -> bool {
        anchor.col >= 0
            && anchor.row >= 0
            && anchor.col as usize + MODULE_COLS <= WORKSPACE_COLS
            && anchor.row as usize + MODULE_ROWS <= WORKSPACE_ROWS
    }

    /// Footprint cells that land inside the table
    fn footprint_cells(anchor: GridPos) -> impl Iterator<Item = (usize, usize)> {
        (0..MODULE_ROWS as i32).flat_map(move |dr| {
            (0..MODULE_COLS as i32).filter_map(move |dc| {
                let col = usize::try_from(anchor.col.checked_add(dc)?).ok()?;
                let row = usize::try_from(anchor.row.checked_add(dr)?).ok()?;
                (col < WORKSPACE_COLS && row < WORKSPACE_ROWS).then_some((col, row))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ModuleId = ModuleId(0);
    const B: ModuleId = ModuleId(1);

    fn max_col() -> i32 {
        (WORKSPACE_COLS - MODULE_COLS) as i32
    }

    fn max_row() -> i32 {
        (WORKSPACE_ROWS - MODULE_ROWS) as i32
    }

    #[test]
    fn test_every_legal_anchor_is_placeable_on_empty_grid() {
        let grid = Grid::new();
        for row in 0..=max_row() {
            for col in 0..=max_col() {
                assert!(grid.can_place(GridPos::new(col, row), None), "({col}, {row})");
            }
        }
    }

    #[test]
    fn test_out_of_bounds_anchors_are_rejected() {
        let grid = Grid::new();
        let outside = [
            GridPos::new(-1, 0),
            GridPos::new(0, -1),
            GridPos::new(max_col() + 1, 0),
            GridPos::new(0, max_row() + 1),
            GridPos::new(WORKSPACE_COLS as i32, WORKSPACE_ROWS as i32),
            GridPos::new(i32::MIN, i32::MIN),
        ];
        for anchor in outside {
            assert!(!grid.can_place(anchor, None), "{anchor}");
        }
    }

    #[test]
    fn test_bounds_win_over_ignore_id() {
        let mut grid = Grid::new();
        grid.occupy(GridPos::new(max_col(), 0), A);
        assert!(!grid.can_place(GridPos::new(max_col() + 1, 0), Some(A)));
    }

    #[test]
    fn test_occupy_then_release() {
        let mut grid = Grid::new();
        let anchor = GridPos::new(2, 3);
        grid.occupy(anchor, A);

        for row in 3..5 {
            for col in 2..6 {
                assert_eq!(grid.cell(col, row), Some(A));
            }
        }
        assert_eq!(grid.cells_claimed_by(A), MODULE_ROWS * MODULE_COLS);

        grid.release(A, anchor);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_release_then_occupy_restores_table() {
        let mut grid = Grid::new();
        grid.occupy(GridPos::new(0, 0), A);
        grid.occupy(GridPos::new(4, 2), B);
        let before = grid.clone();

        grid.release(B, GridPos::new(4, 2));
        assert_ne!(grid, before);
        grid.occupy(GridPos::new(4, 2), B);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_release_leaves_foreign_claims() {
        let mut grid = Grid::new();
        grid.occupy(GridPos::new(0, 0), A);
        grid.occupy(GridPos::new(4, 0), B);

        // Footprint at (2,0) covers two cells of each module
        grid.release(A, GridPos::new(2, 0));
        assert_eq!(grid.cell(2, 0), None);
        assert_eq!(grid.cell(4, 0), Some(B));
        assert_eq!(grid.cell(0, 0), Some(A));
        assert_eq!(grid.cells_claimed_by(B), 8);
    }

    #[test]
    fn test_overlap_rejected_unless_ignored() {
        let mut grid = Grid::new();
        grid.occupy(GridPos::new(0, 0), A);

        assert!(!grid.can_place(GridPos::new(2, 1), None));
        assert!(!grid.can_place(GridPos::new(2, 1), Some(B)));
        assert!(grid.can_place(GridPos::new(2, 1), Some(A)));
        assert!(grid.can_place(GridPos::new(4, 0), None));
    }

    #[test]
    fn test_cell_out_of_range_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.cell(WORKSPACE_COLS, 0), None);
        assert_eq!(grid.cell(0, WORKSPACE_ROWS), None);
    }
}
