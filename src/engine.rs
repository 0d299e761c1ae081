use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::geom::{self, Size};
use crate::graph::Graph;
use crate::input::{self, Interaction, InteractionState, PointerUp};
use crate::layout::{self, PivotLayout};
use crate::loader::{LoadOutcome, LoadTicket, ResourceSlot};
use crate::render::{self, CanvasSurface, Scene};
use crate::surface::DrawSurface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A click was applied to the graph.
    Interacted(Interaction),
    /// The canvas element should take this CSS size.
    Resize(Size),
    RenderNeeded,
}

/// Engine state that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub graph: Graph,
    pub config: EngineConfig,
    /// Natural size of the loaded background image.
    pub background: ResourceSlot<Size>,
    /// CSS font shorthand of the loaded label font.
    pub font: ResourceSlot<String>,
    pub window: Size,
    /// Distance from the top of the viewport to the canvas.
    pub canvas_top: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            graph: Graph::new(),
            config,
            background: ResourceSlot::new(),
            font: ResourceSlot::new(),
            window: Size::default(),
            canvas_top: 0.0,
        }
    }

    // --- Input events ---

    /// Apply a click, then request a redraw.
    pub fn on_pointer_up(&mut self, event: PointerUp) -> Vec<Action> {
        let interaction =
            input::apply_pointer_up(&mut self.graph, event, self.config.vertex_size, self.config.select_policy);
        debug!("pointer up at ({}, {}): {interaction:?}", event.x, event.y);
        vec![Action::Interacted(interaction), Action::RenderNeeded]
    }

    /// Drop every vertex and edge.
    pub fn clear(&mut self) -> Vec<Action> {
        info!("clearing graph of {} vertices and {} edges", self.graph.len(), self.graph.edges().len());
        self.graph.clear();
        vec![Action::RenderNeeded]
    }

    // --- Viewport ---

    /// Record the window size and refit the canvas.
    pub fn set_window(&mut self, window: Size, canvas_top: f64) -> Vec<Action> {
        self.window = window;
        self.canvas_top = canvas_top;
        vec![Action::Resize(self.canvas_size()), Action::RenderNeeded]
    }

    /// Canvas size for the current window, matching the background's aspect ratio when one is loaded.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        let fitted = geom::fit_canvas(self.window, self.canvas_top);
        match self.background.current() {
            Some(image) => geom::fit_to_image(fitted, *image),
            None => fitted,
        }
    }

    // --- Resource loads ---

    /// Start loading a background image.
    pub fn begin_background_load(&mut self) -> LoadTicket {
        let ticket = self.background.begin();
        debug!("background load {} started", ticket.generation());
        ticket
    }

    /// Finish a background load. Stale completions produce no actions.
    ///
    /// An image of natural size `0 × 0` counts as "no image".
    pub fn finish_background_load(&mut self, ticket: LoadTicket, natural: Size) -> (LoadOutcome, Vec<Action>) {
        if natural.is_empty() {
            if !self.background.is_current(ticket) {
                return stale("background", ticket);
            }
            self.background.reset();
            info!("background load {} produced no image", ticket.generation());
            return (LoadOutcome::Applied, vec![Action::Resize(self.canvas_size()), Action::RenderNeeded]);
        }
        match self.background.complete(ticket, natural) {
            LoadOutcome::Applied => {
                info!("background load {} applied ({}x{})", ticket.generation(), natural.width, natural.height);
                (LoadOutcome::Applied, vec![Action::Resize(self.canvas_size()), Action::RenderNeeded])
            }
            LoadOutcome::Stale => stale("background", ticket),
        }
    }

    /// Remove the background image and cancel any load in flight.
    pub fn clear_background(&mut self) -> Vec<Action> {
        self.background.reset();
        vec![Action::Resize(self.canvas_size()), Action::RenderNeeded]
    }

    /// Start loading a label font.
    pub fn begin_font_load(&mut self) -> LoadTicket {
        self.font.begin()
    }

    /// Finish a font load; on success `font` becomes the label font.
    pub fn finish_font_load(&mut self, ticket: LoadTicket, font: String) -> (LoadOutcome, Vec<Action>) {
        match self.font.complete(ticket, font) {
            LoadOutcome::Applied => {
                info!("font load {} applied", ticket.generation());
                (LoadOutcome::Applied, vec![Action::RenderNeeded])
            }
            LoadOutcome::Stale => stale("font", ticket),
        }
    }

    // --- Render ---

    /// Arc layouts for every pivot in the graph.
    #[must_use]
    pub fn layouts(&self) -> Vec<PivotLayout> {
        layout::layout_graph(&self.graph, self.config.wrap_correction)
    }

    /// Draw the whole scene to a `surface` whose drawing buffer is `canvas`.
    ///
    /// `canvas` is the buffer's actual size, which differs from
    /// [`Self::canvas_size`] until the host has applied the last resize.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if any primitive fails.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S, canvas: Size) -> Result<(), S::Error> {
        let layouts = self.layouts();
        let mut style = self.config.style.clone();
        if let Some(font) = self.font.current() {
            style.font.clone_from(font);
        }
        let scene = Scene {
            graph: &self.graph,
            layouts: &layouts,
            canvas,
            background_image: self.background.current().is_some(),
            vertex_size: self.config.vertex_size,
            style: &style,
        };
        render::draw(surface, &scene)
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> InteractionState {
        InteractionState::of(&self.graph)
    }
}

fn stale(what: &str, ticket: LoadTicket) -> (LoadOutcome, Vec<Action>) {
    warn!("discarding stale {what} load {}", ticket.generation());
    (LoadOutcome::Stale, Vec::new())
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Decoded background image, kept in step with `core.background`.
    image: Option<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoContext`] if the canvas cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: EngineConfig) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(EngineError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::NoContext)?;
        Ok(Self { canvas, ctx, image: None, core: EngineCore::new(config) })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Shared handle for async callbacks.
    #[must_use]
    pub fn shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    // --- Input events ---

    /// Apply a click and redraw.
    ///
    /// # Errors
    ///
    /// Returns an error if the redraw fails.
    pub fn on_pointer_up(&mut self, event: PointerUp) -> Result<Option<Interaction>, EngineError> {
        let actions = self.core.on_pointer_up(event);
        self.apply(&actions)?;
        Ok(actions.iter().find_map(|a| match a {
            Action::Interacted(i) => Some(*i),
            _ => None,
        }))
    }

    /// Clear the graph and redraw.
    ///
    /// # Errors
    ///
    /// Returns an error if the redraw fails.
    pub fn clear(&mut self) -> Result<(), EngineError> {
        let actions = self.core.clear();
        self.apply(&actions)
    }

    /// Refit the canvas to a new window size.
    ///
    /// # Errors
    ///
    /// Returns an error if the redraw fails.
    pub fn set_window(&mut self, window: Size, canvas_top: f64) -> Result<(), EngineError> {
        let actions = self.core.set_window(window, canvas_top);
        self.apply(&actions)
    }

    // --- Resource loads ---

    pub fn begin_background_load(&mut self) -> LoadTicket {
        self.core.begin_background_load()
    }

    /// Hand a decoded image back to the engine. Stale images are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the resize or redraw fails.
    pub fn finish_background_load(&mut self, ticket: LoadTicket, image: HtmlImageElement) -> Result<LoadOutcome, EngineError> {
        let natural = Size::new(f64::from(image.natural_width()), f64::from(image.natural_height()));
        let (outcome, actions) = self.core.finish_background_load(ticket, natural);
        if outcome == LoadOutcome::Applied {
            self.image = if natural.is_empty() { None } else { Some(image) };
        }
        self.apply(&actions)?;
        Ok(outcome)
    }

    /// Remove the background image.
    ///
    /// # Errors
    ///
    /// Returns an error if the resize or redraw fails.
    pub fn clear_background(&mut self) -> Result<(), EngineError> {
        self.image = None;
        let actions = self.core.clear_background();
        self.apply(&actions)
    }

    pub fn begin_font_load(&mut self) -> LoadTicket {
        self.core.begin_font_load()
    }

    /// Switch labels to `font` if `ticket` is still current.
    ///
    /// # Errors
    ///
    /// Returns an error if the redraw fails.
    pub fn finish_font_load(&mut self, ticket: LoadTicket, font: String) -> Result<LoadOutcome, EngineError> {
        let (outcome, actions) = self.core.finish_font_load(ticket, font);
        self.apply(&actions)?;
        Ok(outcome)
    }

    // --- Render ---

    /// Carry out the host-side effects of `actions`.
    ///
    /// # Errors
    ///
    /// Returns an error if the redraw fails.
    pub fn apply(&mut self, actions: &[Action]) -> Result<(), EngineError> {
        for action in actions {
            match action {
                Action::Interacted(_) => {}
                Action::Resize(size) => self.resize(*size),
                Action::RenderNeeded => self.render()?,
            }
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&self, size: Size) {
        self.canvas.set_width(size.width.round().max(0.0) as u32);
        self.canvas.set_height(size.height.round().max(0.0) as u32);
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Js`] if a canvas call fails.
    pub fn render(&self) -> Result<(), EngineError> {
        let canvas = Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        let mut surface = CanvasSurface::new(&self.ctx, self.image.as_ref());
        self.core.draw(&mut surface, canvas).map_err(|err| {
            let err = EngineError::from(err);
            warn!("render failed: {err}");
            err
        })
    }

    /// Serialize the canvas as a `data:image/png` URL.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Js`] if the canvas is tainted or cannot be encoded.
    pub fn export_png(&self) -> Result<String, EngineError> {
        Ok(self.canvas.to_data_url_with_type("image/png")?)
    }
}
