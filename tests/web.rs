#![cfg(target_arch = "wasm32")]

use module_grid::config::DRAG_FORMAT;
use module_grid::drag::{apply_drop, DragPayload, DropOutcome};
use module_grid::types::{GridPos, ModuleKind, Point};
use module_grid::workspace::Workspace;
use wasm_bindgen_test::*;
use web_sys::DataTransfer;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_payload_survives_data_transfer() {
    let data = DataTransfer::new().unwrap();
    let payload = DragPayload::template(ModuleKind::Slider);
    data.set_data(DRAG_FORMAT, &payload.encode().unwrap()).unwrap();

    let decoded = DragPayload::decode(&data.get_data(DRAG_FORMAT).unwrap()).unwrap();
    assert_eq!(decoded, payload);
}

#[wasm_bindgen_test]
fn test_drop_round_trip_through_data_transfer() {
    let mut ws = Workspace::new();
    let id = ws.request_place(ModuleKind::Pot, GridPos::new(0, 0)).unwrap();

    let data = DataTransfer::new().unwrap();
    let payload = DragPayload::placed(id, Point::new(30.0, 30.0));
    data.set_data(DRAG_FORMAT, &payload.encode().unwrap()).unwrap();

    let decoded = DragPayload::decode(&data.get_data(DRAG_FORMAT).unwrap()).unwrap();
    assert_eq!(apply_drop(&mut ws, &decoded, GridPos::new(4, 2)), DropOutcome::Moved(id));
    assert_eq!(ws.module(id).unwrap().anchor, GridPos::new(4, 2));
}
