use crate::components::ModuleCells;
use crate::config::DRAG_FORMAT;
use crate::drag::DragPayload;
use crate::types::ModuleKind;
use yew::prelude::*;

/// One draggable template per module kind
#[function_component(Palette)]
pub fn palette() -> Html {
    html! {
        <div id="palette" class="palette">
            {
                ModuleKind::ALL.iter().map(|&kind| {
                    let ondragstart = Callback::from(move |e: DragEvent| {
                        let Some(data) = e.data_transfer() else {
                            return;
                        };
                        match DragPayload::template(kind).encode() {
                            Ok(encoded) => {
                                if let Err(err) = data.set_data(DRAG_FORMAT, &encoded) {
                                    log::warn!("could not start drag for {}: {:?}", kind.as_str(), err);
                                }
                            }
                            Err(err) => log::warn!("could not encode drag for {}: {}", kind.as_str(), err),
                        }
                    });

                    html! {
                        <div
                            key={kind.as_str()}
                            class="module template"
                            draggable="true"
                            data-type={kind.as_str()}
                            title={kind.label()}
                            {ondragstart}
                        >
                            <ModuleCells {kind} />
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
