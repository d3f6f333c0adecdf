mod app;
mod components;
mod utils;

pub mod config;
pub mod drag;
pub mod error;
pub mod grid;
pub mod types;
pub mod workspace;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
