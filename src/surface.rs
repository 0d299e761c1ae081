//! Drawing surface abstraction.
//!
//! The renderer issues a handful of primitives in a fixed order and never
//! reads anything back, so any 2D target that can paint rectangles, lines,
//! arcs and text can host the scene. [`crate::render::CanvasSurface`] paints
//! a browser canvas; [`RecordingSurface`] captures the calls for inspection.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::convert::Infallible;

use crate::geom::{Point, Size};
use crate::layout::Arc;

/// Paint primitives consumed by [`crate::render::draw`].
pub trait DrawSurface {
    type Error;

    /// Wipe the whole surface and fill it with `color`.
    fn clear_background(&mut self, size: Size, color: &str) -> Result<(), Self::Error>;

    /// Paint the loaded background image stretched over `size`.
    fn draw_background_image(&mut self, size: Size) -> Result<(), Self::Error>;

    fn stroke_line(&mut self, from: Point, to: Point, color: &str) -> Result<(), Self::Error>;

    /// Fill a square of side `size` centered on `center`.
    fn fill_rect(&mut self, center: Point, size: f64, color: &str) -> Result<(), Self::Error>;

    /// Outline a square of side `size` centered on `center`.
    fn stroke_rect(&mut self, center: Point, size: f64, color: &str, line_width: f64) -> Result<(), Self::Error>;

    fn stroke_arc(&mut self, arc: &Arc, color: &str) -> Result<(), Self::Error>;

    /// Draw `text` centered on `position`.
    fn draw_text(&mut self, text: &str, position: Point, color: &str, font: &str) -> Result<(), Self::Error>;
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    ClearBackground { size: Size, color: String },
    BackgroundImage { size: Size },
    Line { from: Point, to: Point, color: String },
    FillRect { center: Point, size: f64, color: String },
    StrokeRect { center: Point, size: f64, color: String, line_width: f64 },
    Arc { arc: Arc, color: String },
    Text { text: String, position: Point, color: String, font: String },
}

/// Surface that records every call instead of painting.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded arcs, in draw order.
    #[must_use]
    pub fn arcs(&self) -> Vec<Arc> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Arc { arc, .. } => Some(*arc),
                _ => None,
            })
            .collect()
    }

    /// Recorded label texts, in draw order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    type Error = Infallible;

    fn clear_background(&mut self, size: Size, color: &str) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::ClearBackground { size, color: color.to_owned() });
        Ok(())
    }

    fn draw_background_image(&mut self, size: Size) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::BackgroundImage { size });
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &str) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Line { from, to, color: color.to_owned() });
        Ok(())
    }

    fn fill_rect(&mut self, center: Point, size: f64, color: &str) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::FillRect { center, size, color: color.to_owned() });
        Ok(())
    }

    fn stroke_rect(&mut self, center: Point, size: f64, color: &str, line_width: f64) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::StrokeRect { center, size, color: color.to_owned(), line_width });
        Ok(())
    }

    fn stroke_arc(&mut self, arc: &Arc, color: &str) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Arc { arc: *arc, color: color.to_owned() });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Point, color: &str, font: &str) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            position,
            color: color.to_owned(),
            font: font.to_owned(),
        });
        Ok(())
    }
}
