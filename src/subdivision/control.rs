use crate::error::{Result, SubdivisionError};

use super::MAX_DEPTH;

/// Recursion depth and zoom level driven by interactive input.
///
/// Owned by the rendering loop and passed to the subdividers by value
/// through [`DepthControl::depth`]. Increasing the depth zooms in by
/// `zoom_step`; decreasing zooms back out. Depth never drops below zero
/// or rises above [`MAX_DEPTH`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthControl {
    initial_depth: u32,
    depth: u32,
    zoom: f64,
    zoom_step: f64,
}

impl DepthControl {
    /// Creates a control starting at `initial_depth` with zoom `1.0`.
    ///
    /// `initial_depth` is clamped to [`MAX_DEPTH`].
    ///
    /// # Errors
    ///
    /// Returns [`SubdivisionError::InvalidZoomStep`] if `zoom_step` is not
    /// finite and positive.
    pub fn new(initial_depth: u32, zoom_step: f64) -> Result<Self> {
        if !zoom_step.is_finite() || zoom_step <= 0.0 {
            return Err(SubdivisionError::InvalidZoomStep(zoom_step).into());
        }
        let initial_depth = initial_depth.min(MAX_DEPTH);
        Ok(Self {
            initial_depth,
            depth: initial_depth,
            zoom: 1.0,
            zoom_step,
        })
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// One level deeper, zooming in. No-op at [`MAX_DEPTH`].
    pub fn increase(&mut self) {
        if self.depth < MAX_DEPTH {
            self.depth += 1;
            self.zoom *= self.zoom_step;
        }
    }

    /// One level shallower, zooming out. No-op at depth zero.
    pub fn decrease(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
            self.zoom /= self.zoom_step;
        }
    }

    /// Restores the initial depth and a zoom of `1.0`.
    pub fn reset(&mut self) {
        self.depth = self.initial_depth;
        self.zoom = 1.0;
    }
}

impl Default for DepthControl {
    fn default() -> Self {
        Self {
            initial_depth: 1,
            depth: 1,
            zoom: 1.0,
            zoom_step: 1.4,
        }
    }
}
