use yew::prelude::*;

use crate::components::{Palette, WorkspaceView};
use crate::drag::{apply_drop, DragPayload, DropOutcome};
use crate::types::{GridPos, ModuleId};
use crate::workspace::Workspace;

#[function_component(App)]
pub fn app() -> Html {
    let workspace = use_state(Workspace::new);

    let on_drop = {
        let workspace = workspace.clone();
        Callback::from(move |(payload, cell): (DragPayload, GridPos)| {
            let mut next = (*workspace).clone();
            match apply_drop(&mut next, &payload, cell) {
                DropOutcome::Rejected => {}
                DropOutcome::Placed(_) | DropOutcome::Moved(_) => workspace.set(next),
            }
        })
    };

    let on_delete = {
        let workspace = workspace.clone();
        Callback::from(move |id: ModuleId| {
            let mut next = (*workspace).clone();
            if next.request_delete(id).is_some() {
                workspace.set(next);
            }
        })
    };

    html! {
        <div class="editor">
            <Palette />
            <WorkspaceView
                modules={workspace.modules().to_vec()}
                {on_drop}
                {on_delete}
            />
        </div>
    }
}
