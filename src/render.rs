//! Rendering: draws the full scene to a [`DrawSurface`].
//!
//! Every redraw repaints everything in four layers: background, edges,
//! vertices, then the angle arcs and labels of every pivot. Nothing is
//! cached between frames; a redraw only happens after a click, a clear or a
//! finished resource load, so the cost of a full pass is irrelevant.
//!
//! [`CanvasSurface`] is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. Its fallible calls propagate
//! `JsValue` errors to the caller ([`crate::engine::Engine::render`]).

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::config::Style;
use crate::geom::{Point, Size};
use crate::graph::Graph;
use crate::layout::{Arc, PivotLayout};
use crate::surface::DrawSurface;

/// Read-only inputs for one redraw.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub graph: &'a Graph,
    pub layouts: &'a [PivotLayout],
    /// Size of the drawing buffer being painted.
    pub canvas: Size,
    /// Whether a background image is loaded and should be painted.
    pub background_image: bool,
    pub vertex_size: f64,
    pub style: &'a Style,
}

/// Draw the full scene.
///
/// # Errors
///
/// Returns the surface's error if any primitive fails.
pub fn draw<S: DrawSurface>(surface: &mut S, scene: &Scene<'_>) -> Result<(), S::Error> {
    let style = scene.style;

    // Layer 1: background.
    if scene.background_image {
        surface.draw_background_image(scene.canvas)?;
    } else {
        surface.clear_background(scene.canvas, &style.background)?;
    }

    // Layer 2: edges.
    let vertices = scene.graph.vertices();
    for edge in scene.graph.edges() {
        let (Some(a), Some(b)) = (vertices.get(edge.a), vertices.get(edge.b)) else {
            continue;
        };
        surface.stroke_line(a.position(), b.position(), &style.edge)?;
    }

    // Layer 3: vertices.
    for v in vertices {
        surface.fill_rect(v.position(), scene.vertex_size, &style.vertex)?;
        if v.active {
            surface.stroke_rect(v.position(), scene.vertex_size, &style.active_outline, style.active_line_width)?;
        }
    }

    // Layer 4: angles.
    for layout in scene.layouts {
        draw_pivot(surface, layout, style)?;
    }

    Ok(())
}

fn draw_pivot<S: DrawSurface>(surface: &mut S, layout: &PivotLayout, style: &Style) -> Result<(), S::Error> {
    match layout {
        PivotLayout::Single { arc, .. } => surface.stroke_arc(arc, &style.arc),
        PivotLayout::Gaps { gaps, .. } => {
            for gap in gaps {
                surface.stroke_arc(&gap.arc, &style.arc)?;
                surface.draw_text(&gap.label.text, gap.label.position, &style.label, &style.font)?;
            }
            Ok(())
        }
    }
}

// =============================================================
// Browser canvas
// =============================================================

/// [`DrawSurface`] backed by a browser 2D context.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    image: Option<&'a HtmlImageElement>,
}

impl<'a> CanvasSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d, image: Option<&'a HtmlImageElement>) -> Self {
        Self { ctx, image }
    }
}

impl DrawSurface for CanvasSurface<'_> {
    type Error = JsValue;

    fn clear_background(&mut self, size: Size, color: &str) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, size.width, size.height);
        Ok(())
    }

    fn draw_background_image(&mut self, size: Size) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
        if let Some(image) = self.image {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, size.width, size.height)?;
        }
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &str) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_rect(&mut self, center: Point, size: f64, color: &str) -> Result<(), JsValue> {
        let half = size * 0.5;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(center.x - half, center.y - half, size, size);
        Ok(())
    }

    fn stroke_rect(&mut self, center: Point, size: f64, color: &str, line_width: f64) -> Result<(), JsValue> {
        let half = size * 0.5;
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.stroke_rect(center.x - half, center.y - half, size, size);
        Ok(())
    }

    fn stroke_arc(&mut self, arc: &Arc, color: &str) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(arc.center.x, arc.center.y, arc.radius, arc.start, arc.end)?;
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Point, color: &str, font: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.fill_text(text, position.x, position.y)
    }
}
