//! Tabbed panel control for Leptos CSR front-ends, plus a small demo app
//! mounted by the WASM start hook.

pub mod app;
pub mod shared;

pub use shared::components::ui::{
    use_tabs_context, SelectionMode, TabValue, Tabs, TabsContent, TabsContext, TabsList,
    TabsTrigger,
};

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // routes `log` output to the browser console
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("mounting tabs demo");
    leptos::mount::mount_to_body(app::App);
}
