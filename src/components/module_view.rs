use crate::config::{CELL_SIZE, DRAG_FORMAT, MODULE_COLS, MODULE_HEIGHT, MODULE_ROWS, MODULE_WIDTH};
use crate::drag::DragPayload;
use crate::types::{ModuleId, ModuleKind, PlacedModule, Point};
use crate::utils::client_to_element_coords;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModuleCellsProps {
    pub kind: ModuleKind,
}

/// The H x W arrangement of sub-cells shared by templates and placed modules
#[function_component(ModuleCells)]
pub fn module_cells(props: &ModuleCellsProps) -> Html {
    let style = format!(
        "display: grid; grid-template-columns: repeat({}, {}px); grid-template-rows: repeat({}, {}px);",
        MODULE_COLS, CELL_SIZE, MODULE_ROWS, CELL_SIZE
    );

    html! {
        <div class="module-cells" {style}>
            {
                (0..MODULE_ROWS * MODULE_COLS).map(|idx| html! {
                    <div key={idx} class="cell">
                        <div class={classes!("component", props.kind.cell_class())} />
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModuleViewProps {
    pub module: PlacedModule,
    pub on_delete: Callback<ModuleId>,
}

/// A placed module, positioned from its grid anchor
#[function_component(ModuleView)]
pub fn module_view(props: &ModuleViewProps) -> Html {
    let module_ref = use_node_ref();
    let module = props.module;
    let pos = module.pixel_position();

    let ondragstart = {
        let module_ref = module_ref.clone();
        Callback::from(move |e: DragEvent| {
            let Some(data) = e.data_transfer() else {
                return;
            };
            let grab_offset = module_ref
                .cast::<Element>()
                .map(|el| client_to_element_coords(&e, &el))
                .unwrap_or_else(Point::zero);

            match DragPayload::placed(module.id, grab_offset).encode() {
                Ok(encoded) => {
                    if let Err(err) = data.set_data(DRAG_FORMAT, &encoded) {
                        log::warn!("could not start drag for {}: {:?}", module.id, err);
                    }
                }
                Err(err) => log::warn!("could not encode drag for {}: {}", module.id, err),
            }
        })
    };

    let ondelete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(module.id);
        })
    };

    html! {
        <div
            ref={module_ref}
            class="module placed"
            draggable="true"
            data-id={module.id.to_string()}
            data-type={module.kind.as_str()}
            title={module.kind.label()}
            style={format!(
                "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px;",
                pos.x, pos.y, MODULE_WIDTH, MODULE_HEIGHT
            )}
            {ondragstart}
        >
            <ModuleCells kind={module.kind} />
            <button class="delete" onclick={ondelete}>{"×"}</button>
        </div>
    }
}
