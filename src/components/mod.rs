mod module_view;
mod palette;
mod workspace_view;

pub use module_view::{ModuleCells, ModuleView};
pub use palette::Palette;
pub use workspace_view::WorkspaceView;
