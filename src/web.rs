//! JavaScript entry points.
//!
//! The host page creates one [`AngleCanvas`] per canvas element and forwards
//! `pointerup`, resize, upload and "clear" events to it. Every call runs to
//! completion synchronously except the image and font loads, which resolve
//! later and are checked against the latest load before being applied.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::geom::Size;
use crate::input::PointerUp;
use crate::loader::{LoadOutcome, LoadTicket};
use crate::logging;

/// Install the console logger when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    logging::init(log::Level::Info);
}

/// Change the console log level, e.g. `"debug"`.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) {
    log::set_max_level(logging::parse_level(level).to_level_filter());
}

/// Angle overlay bound to one canvas element.
#[wasm_bindgen]
pub struct AngleCanvas {
    engine: Rc<RefCell<Engine>>,
}

#[wasm_bindgen]
impl AngleCanvas {
    /// Bind to `canvas`. `config` is an optional JSON object of overrides.
    ///
    /// # Errors
    ///
    /// Fails if `config` is invalid or the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config: Option<String>) -> Result<AngleCanvas, JsValue> {
        let config = match config {
            Some(json) => EngineConfig::from_json(&json)?,
            None => EngineConfig::default(),
        };
        let engine = Engine::new(canvas, config)?;
        engine.render()?;
        Ok(Self { engine: engine.shared() })
    }

    /// Handle a pointer release at canvas-local `(x, y)`.
    ///
    /// # Errors
    ///
    /// Fails if the redraw fails.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&self, x: f64, y: f64) -> Result<(), JsValue> {
        self.engine.borrow_mut().on_pointer_up(PointerUp::new(x, y))?;
        Ok(())
    }

    /// Remove every vertex and edge.
    ///
    /// # Errors
    ///
    /// Fails if the redraw fails.
    pub fn clear(&self) -> Result<(), JsValue> {
        Ok(self.engine.borrow_mut().clear()?)
    }

    /// Refit the canvas to a window of `width × height` with the canvas starting `top` pixels down.
    ///
    /// # Errors
    ///
    /// Fails if the redraw fails.
    pub fn resize(&self, width: f64, height: f64, top: f64) -> Result<(), JsValue> {
        Ok(self.engine.borrow_mut().set_window(Size::new(width, height), top)?)
    }

    /// Refit the canvas to the current browser window.
    ///
    /// # Errors
    ///
    /// Fails outside a browser window or if the redraw fails.
    #[wasm_bindgen(js_name = fitToWindow)]
    pub fn fit_to_window(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        let top = self.engine.borrow().canvas().get_bounding_client_rect().top();
        self.resize(width, height, top)
    }

    /// Load `url` as the background image. Only the latest call wins.
    ///
    /// # Errors
    ///
    /// Fails if an image element cannot be created.
    #[wasm_bindgen(js_name = loadBackground)]
    pub fn load_background(&self, url: String) -> Result<(), JsValue> {
        let image = HtmlImageElement::new()?;
        let ticket = self.engine.borrow_mut().begin_background_load();
        image.set_src(&url);

        let decoding: Promise = image.decode();
        let engine = Rc::clone(&self.engine);
        spawn_local(async move {
            if let Err(err) = JsFuture::from(decoding).await {
                warn!("background {url} failed to decode: {err:?}");
                return;
            }
            match engine.borrow_mut().finish_background_load(ticket, image) {
                Ok(LoadOutcome::Applied) => info!("background {url} shown"),
                Ok(LoadOutcome::Stale) => {}
                Err(err) => warn!("background {url} failed to apply: {err}"),
            }
        });
        Ok(())
    }

    /// Remove the background image.
    ///
    /// # Errors
    ///
    /// Fails if the redraw fails.
    #[wasm_bindgen(js_name = clearBackground)]
    pub fn clear_background(&self) -> Result<(), JsValue> {
        Ok(self.engine.borrow_mut().clear_background()?)
    }

    /// Announce that the host started loading a font. Pass the returned
    /// ticket to [`AngleCanvas::font_loaded`] when it is ready.
    #[wasm_bindgen(js_name = beginFontLoad)]
    pub fn begin_font_load(&self) -> u32 {
        self.engine.borrow_mut().begin_font_load().generation()
    }

    /// Use `font` for labels if `ticket` is still the latest font load.
    /// Returns whether it was applied.
    ///
    /// # Errors
    ///
    /// Fails if the redraw fails.
    #[wasm_bindgen(js_name = fontLoaded)]
    pub fn font_loaded(&self, ticket: u32, font: String) -> Result<bool, JsValue> {
        let outcome = self
            .engine
            .borrow_mut()
            .finish_font_load(LoadTicket::from_generation(ticket), font)?;
        Ok(outcome == LoadOutcome::Applied)
    }

    /// Switch labels to `font` once `loading` resolves, typically the promise
    /// from `FontFace.load()`. A later font load supersedes this one.
    #[wasm_bindgen(js_name = loadFont)]
    pub fn load_font(&self, loading: Promise, font: String) {
        let ticket = self.engine.borrow_mut().begin_font_load();
        let engine = Rc::clone(&self.engine);
        spawn_local(async move {
            if let Err(err) = JsFuture::from(loading).await {
                warn!("font {font} failed to load: {err:?}");
                return;
            }
            if let Err(err) = engine.borrow_mut().finish_font_load(ticket, font) {
                warn!("font load failed to apply: {err}");
            }
        });
    }

    /// The current drawing as a `data:image/png` URL.
    ///
    /// # Errors
    ///
    /// Fails if the canvas cannot be encoded.
    #[wasm_bindgen(js_name = exportPng)]
    pub fn export_png(&self) -> Result<String, JsValue> {
        Ok(self.engine.borrow().export_png()?)
    }

    #[wasm_bindgen(getter, js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.engine.borrow().core.graph.len()
    }

    #[wasm_bindgen(getter, js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.engine.borrow().core.graph.edges().len()
    }
}
