use crate::config::CELL_SIZE;
use crate::error::{PayloadError, PlacementError};
use crate::types::{GridPos, ModuleId, ModuleKind, Point};
use crate::workspace::Workspace;
use serde::{Deserialize, Serialize};

/// What a drag gesture carries from drag-start to drop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum DragPayload {
    /// A palette template; dropping it creates a new module
    Template {
        #[serde(rename = "type")]
        kind: ModuleKind,
    },
    /// An already placed module being moved
    Placed {
        id: ModuleId,
        offset_x: f64,
        offset_y: f64,
    },
}

impl DragPayload {
    pub fn template(kind: ModuleKind) -> Self {
        DragPayload::Template { kind }
    }

    pub fn placed(id: ModuleId, grab_offset: Point) -> Self {
        DragPayload::Placed {
            id,
            offset_x: grab_offset.x,
            offset_y: grab_offset.y,
        }
    }

    /// Pointer offset inside the dragged module at grab time
    pub fn grab_offset(&self) -> Point {
        match self {
            DragPayload::Template { .. } => Point::zero(),
            DragPayload::Placed {
                offset_x, offset_y, ..
            } => Point::new(*offset_x, *offset_y),
        }
    }

    pub fn encode(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(data: &str) -> Result<Self, PayloadError> {
        if data.trim().is_empty() {
            return Err(PayloadError::Missing);
        }
        Ok(serde_json::from_str(data)?)
    }
}

/// Nearest grid cell for a drop, given the pointer and workspace origin in
/// client pixels.
pub fn drop_cell(pointer: Point, workspace_origin: Point, grab_offset: Point) -> GridPos {
    let dx = pointer.x - workspace_origin.x - grab_offset.x;
    let dy = pointer.y - workspace_origin.y - grab_offset.y;
    GridPos::new(pixels_to_cell(dx), pixels_to_cell(dy))
}

fn pixels_to_cell(delta: f64) -> i32 {
    // `as` saturates, so wild pointer values stay out of bounds
    (delta / CELL_SIZE + 0.5).floor() as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed(ModuleId),
    Moved(ModuleId),
    /// Illegal target or stale module; nothing changed
    Rejected,
}

/// Commit a drop against the workspace, or revert it
pub fn apply_drop(workspace: &mut Workspace, payload: &DragPayload, cell: GridPos) -> DropOutcome {
    let result = match *payload {
        DragPayload::Template { kind } => workspace.request_place(kind, cell).map(DropOutcome::Placed),
        DragPayload::Placed { id, .. } => workspace.request_move(id, cell).map(|()| DropOutcome::Moved(id)),
    };

    result.unwrap_or_else(|err: PlacementError| {
        log::debug!("drop reverted: {}", err);
        DropOutcome::Rejected
    })
}
