use std::cell::RefCell;

use glide_platform::{WebApp, WebOptions, run_web_app};
use wasm_bindgen::prelude::*;

use crate::App;

thread_local! {
    static RUNNING: RefCell<Option<WebApp>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let slides = crate::slides().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let options = WebOptions::default().page(crate::page_options());
    let app = run_web_app(options, move || App::new(slides))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("gallery started");

    // keep the app alive for the lifetime of the page
    RUNNING.with(|running| *running.borrow_mut() = Some(app));
    Ok(())
}
