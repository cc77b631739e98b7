//! Overlay drawing adapter
//!
//! `OverlayDrawingAdapter` resolves brushes and fonts from its
//! [`DrawConfig`] and forwards every primitive to the backend unmodified.
//! It is a pure pass-through: no caching, no validation, no recovery —
//! backend failures propagate to the caller as-is.
//!
//! Expected call sequence, from a single rendering thread:
//! `initialize` once, then per frame `begin_scene` → draws → `end_scene`.
//! Calling a draw method before `initialize` is a precondition violation;
//! the surface receives the call unbound and its behavior applies.

use tracing::info;

use crate::config::DrawConfig;
use crate::locator::TargetWindowLocator;
use crate::surface::{OverlayWindowOptions, RenderSurface, SurfaceError};

/// Forwards overlay drawing primitives to a render backend
pub struct OverlayDrawingAdapter<S, L> {
    config: DrawConfig,
    surface: S,
    locator: L,
}

impl<S, L> OverlayDrawingAdapter<S, L>
where
    S: RenderSurface,
    L: TargetWindowLocator,
{
    /// Create a new adapter. `initialize` must be called before drawing.
    pub fn new(config: DrawConfig, surface: S, locator: L) -> Self {
        Self {
            config,
            surface,
            locator,
        }
    }

    /// Configure the surface and create the overlay window.
    ///
    /// Not guarded against double invocation: calling this twice
    /// re-creates backend resources, with backend-defined results.
    pub fn initialize(&mut self) -> Result<(), SurfaceError> {
        self.surface.set_measure_fps(true);
        self.surface.set_primitive_antialias(true);
        self.surface.set_text_antialias(true);
        self.surface.set_vsync(true);
        self.surface.set_multithreaded_factories(true);

        let options = OverlayWindowOptions {
            target: self.locator.main_window_handle(),
            topmost: true,
            visible: true,
            fps: self.config.fps,
        };

        let handle = self.surface.create_window(&options)?;
        self.surface.set_window_handle(handle);
        self.surface.setup()?;

        info!(fps = self.config.fps, "initialized overlay drawing");
        Ok(())
    }

    /// Draw text at `(x, y)` in the configured font and text color
    pub fn draw_text(&mut self, x: f32, y: f32, text: &str) -> Result<(), SurfaceError> {
        let font = self
            .surface
            .create_font(&self.config.font_name, self.config.font_size)?;
        let brush = self.surface.create_solid_brush(self.config.text_color)?;
        self.surface.draw_text(&font, &brush, x, y, text)
    }

    /// Draw a line segment in the configured line color
    pub fn draw_line(
        &mut self,
        x: f32,
        y: f32,
        end_x: f32,
        end_y: f32,
        stroke: f32,
    ) -> Result<(), SurfaceError> {
        let brush = self.surface.create_solid_brush(self.config.line_color)?;
        self.surface.draw_line(&brush, x, y, end_x, end_y, stroke)
    }

    /// Draw a bordered, filled rectangle
    pub fn draw_box(&mut self, rect: tiny_skia::Rect, stroke: f32) -> Result<(), SurfaceError> {
        let border = self.surface.create_solid_brush(self.config.box_color)?;
        let fill = self
            .surface
            .create_solid_brush(self.config.box_fill_color)?;
        self.surface.draw_box(&border, &fill, rect, stroke)
    }

    /// Draw a horizontal progress bar.
    ///
    /// `fraction` is the filled portion of `rect`'s width, expected in
    /// `[0, 1]`. The caller is responsible for clamping; the value is
    /// forwarded to the backend unchanged.
    pub fn draw_progress_bar(
        &mut self,
        rect: tiny_skia::Rect,
        stroke: f32,
        fraction: f32,
    ) -> Result<(), SurfaceError> {
        let border = self
            .surface
            .create_solid_brush(self.config.progress_bar_color)?;
        let fill = self
            .surface
            .create_solid_brush(self.config.progress_bar_fill_color)?;
        self.surface
            .draw_horizontal_progress_bar(&border, &fill, rect, stroke, fraction)
    }

    /// Begin a new scene and clear it. No reentrancy guard: an unpaired
    /// second call is forwarded to the backend as-is.
    pub fn begin_scene(&mut self) -> Result<(), SurfaceError> {
        self.surface.begin_scene()?;
        self.surface.clear_scene()
    }

    /// Finish and present the active scene
    pub fn end_scene(&mut self) -> Result<(), SurfaceError> {
        self.surface.end_scene()
    }

    /// Get the drawing configuration
    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Get mutable access to the underlying surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
