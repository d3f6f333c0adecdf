use crate::error::PlacementError;
use crate::grid::Grid;
use crate::types::{GridPos, ModuleId, ModuleKind, PlacedModule};

/// Owns the occupancy grid and every placed module.
/// All placement changes go through the `request_*` commands.
#[derive(Clone, Debug, PartialEq)]
pub struct Workspace {
    grid: Grid,
    /// Placed modules in creation order
    modules: Vec<PlacedModule>,
    /// Counter for the next module ID, never reused
    next_id: u64,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            modules: Vec::new(),
            next_id: 0,
        }
    }

    /// Create a module of `kind` anchored at `anchor`
    pub fn request_place(
        &mut self,
        kind: ModuleKind,
        anchor: GridPos,
    ) -> Result<ModuleId, PlacementError> {
        if !self.grid.can_place(anchor, None) {
            log::debug!("rejected {} at {}", kind.as_str(), anchor);
            return Err(PlacementError::IllegalPlacement { anchor });
        }

        let id = ModuleId(self.next_id);
        self.next_id += 1;
        self.grid.occupy(anchor, id);
        self.modules.push(PlacedModule::new(id, kind, anchor));
        log::debug!("placed {} {} at {}", kind.as_str(), id, anchor);
        Ok(id)
    }

    /// Re-anchor an existing module. The target is validated against the
    /// table with the module's own claim ignored, so a failed move never
    /// touches the table.
    pub fn request_move(&mut self, id: ModuleId, anchor: GridPos) -> Result<(), PlacementError> {
        let module = self
            .modules
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(PlacementError::UnknownModule(id))?;

        if !self.grid.can_place(anchor, Some(id)) {
            log::debug!("rejected move of {} to {}", id, anchor);
            return Err(PlacementError::IllegalPlacement { anchor });
        }

        self.grid.release(id, module.anchor);
        self.grid.occupy(anchor, id);
        log::debug!("moved {} from {} to {}", id, module.anchor, anchor);
        module.anchor = anchor;
        Ok(())
    }

    /// Remove a module and free its cells
    pub fn request_delete(&mut self, id: ModuleId) -> Option<PlacedModule> {
        let pos = self.modules.iter().position(|m| m.id == id)?;
        let module = self.modules.remove(pos);
        self.grid.release(id, module.anchor);
        log::debug!("deleted {}", id);
        Some(module)
    }

    pub fn module(&self, id: ModuleId) -> Option<&PlacedModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn modules(&self) -> &[PlacedModule] {
        &self.modules
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
