use crate::types::{GridPos, ModuleId};
use thiserror::Error;

/// Why a place or move command was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("footprint at {anchor} is out of bounds or overlaps another module")]
    IllegalPlacement { anchor: GridPos },

    #[error("module {0} is not on the workspace")]
    UnknownModule(ModuleId),
}

/// Drag data that could not be turned into a payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("drag carried no module data")]
    Missing,

    #[error("malformed drag payload: {0}")]
    Malformed(String),

    #[error("invalid module id `{0}`")]
    BadModuleId(String),

    #[error("unknown module type `{0}`")]
    UnknownKind(String),
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        PayloadError::Malformed(err.to_string())
    }
}
