//! Personal portfolio site: an animated starfield backdrop behind the
//! usual sections (hero, about, projects, skills, contact).
//!
//! Compiles to a native eframe window and to a WASM module that binds to
//! a `canvas` element in the hosting page.

pub mod app;
pub mod content;
pub mod starfield;
pub mod theme;
pub mod time;

pub use app::PortfolioApp;

#[cfg(target_arch = "wasm32")]
mod wasm_entry {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::PortfolioApp;

    /// Browser entry point. The page is purely decorative chrome around
    /// the canvas; if the canvas or a GL context is missing we log and
    /// stop, and nothing else on the page is affected.
    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        // Route tracing to the browser console.
        tracing_wasm::set_as_global_default();

        let web_options = eframe::WebOptions::default();

        wasm_bindgen_futures::spawn_local(async {
            let Some(canvas) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("canvas"))
                .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            else {
                tracing::warn!("no #canvas element, starfield disabled");
                return;
            };

            if let Err(e) = eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc)))),
                )
                .await
            {
                tracing::warn!(?e, "failed to start renderer");
            }
        });
    }
}
