/// Pixel size of one grid cell
pub const CELL_SIZE: f64 = 60.0;

pub const WORKSPACE_COLS: usize = 12;
pub const WORKSPACE_ROWS: usize = 6;

/// Footprint of every module, in cells
pub const MODULE_ROWS: usize = 2;
pub const MODULE_COLS: usize = 4;

pub const WORKSPACE_WIDTH: f64 = WORKSPACE_COLS as f64 * CELL_SIZE;
pub const WORKSPACE_HEIGHT: f64 = WORKSPACE_ROWS as f64 * CELL_SIZE;

pub const MODULE_WIDTH: f64 = MODULE_COLS as f64 * CELL_SIZE;
pub const MODULE_HEIGHT: f64 = MODULE_ROWS as f64 * CELL_SIZE;

/// Drag-data format the payload is stored under
pub const DRAG_FORMAT: &str = "application/x-module-grid+json";
