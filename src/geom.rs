#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::consts::{CANVAS_BOTTOM_MARGIN_RATIO, CANVAS_MAX_WIDTH, CANVAS_MIN_WIDTH, CANVAS_WIDTH_RATIO};

/// A point in canvas-local CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `radius` away from `self` in direction `angle` (radians).
    #[must_use]
    pub fn polar_offset(self, angle: f64, radius: f64) -> Self {
        Self { x: self.x + angle.cos() * radius, y: self.y + angle.sin() * radius }
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A `0 × 0` size stands for "nothing loaded".
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 && self.height <= 0.0
    }
}

/// Size the canvas for a window of `window` CSS pixels whose canvas starts
/// `top` pixels from the top of the viewport.
///
/// Width is clamped to `[320, 860]` and otherwise takes 95% of the window;
/// height fills the window below `top`, leaving 8% of the window height free.
#[must_use]
pub fn fit_canvas(window: Size, top: f64) -> Size {
    let width = if window.width > CANVAS_MAX_WIDTH {
        CANVAS_MAX_WIDTH
    } else if window.width < CANVAS_MIN_WIDTH {
        CANVAS_MIN_WIDTH
    } else {
        window.width * CANVAS_WIDTH_RATIO
    };
    let height = (window.height - top - window.height * CANVAS_BOTTOM_MARGIN_RATIO).max(0.0);
    Size { width, height }
}

/// Keep `fitted.width` but take the aspect ratio of `image`.
///
/// Returns `fitted` unchanged when `image` is empty or degenerate.
#[must_use]
pub fn fit_to_image(fitted: Size, image: Size) -> Size {
    if image.width <= 0.0 || image.height <= 0.0 {
        return fitted;
    }
    Size { width: fitted.width, height: fitted.width * image.height / image.width }
}
