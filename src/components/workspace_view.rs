use crate::components::ModuleView;
use crate::config::{CELL_SIZE, DRAG_FORMAT, WORKSPACE_COLS, WORKSPACE_HEIGHT, WORKSPACE_ROWS, WORKSPACE_WIDTH};
use crate::drag::{drop_cell, DragPayload};
use crate::types::{GridPos, ModuleId, PlacedModule};
use crate::utils::{client_point, element_origin};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WorkspaceViewProps {
    pub modules: Vec<PlacedModule>,
    /// Fired with the decoded payload and the target cell of a drop
    pub on_drop: Callback<(DragPayload, GridPos)>,
    pub on_delete: Callback<ModuleId>,
}

/// The grid that placed modules live on
#[function_component(WorkspaceView)]
pub fn workspace_view(props: &WorkspaceViewProps) -> Html {
    let workspace_ref = use_node_ref();

    // Without this the browser refuses drops over the workspace
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());

    let ondrop = {
        let workspace_ref = workspace_ref.clone();
        let on_drop = props.on_drop.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let Some(workspace) = workspace_ref.cast::<Element>() else {
                return;
            };
            let data = e
                .data_transfer()
                .and_then(|data| data.get_data(DRAG_FORMAT).ok())
                .unwrap_or_default();

            match DragPayload::decode(&data) {
                Ok(payload) => {
                    let cell = drop_cell(client_point(&e), element_origin(&workspace), payload.grab_offset());
                    on_drop.emit((payload, cell));
                }
                Err(err) => log::warn!("ignoring drop: {}", err),
            }
        })
    };

    let background = format!(
        "position: relative; width: {w}px; height: {h}px; \
         background-size: {c}px {c}px; \
         background-image: linear-gradient(to right, #ddd 1px, transparent 1px), \
         linear-gradient(to bottom, #ddd 1px, transparent 1px);",
        w = WORKSPACE_WIDTH,
        h = WORKSPACE_HEIGHT,
        c = CELL_SIZE,
    );

    html! {
        <div
            id="workspace"
            ref={workspace_ref}
            class="workspace"
            style={background}
            data-cols={WORKSPACE_COLS.to_string()}
            data-rows={WORKSPACE_ROWS.to_string()}
            {ondragover}
            {ondrop}
        >
            {
                props.modules.iter().map(|module| html! {
                    <ModuleView
                        key={module.id.to_string()}
                        module={*module}
                        on_delete={props.on_delete.clone()}
                    />
                }).collect::<Html>()
            }
        </div>
    }
}
