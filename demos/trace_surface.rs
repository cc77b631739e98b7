//! Example wiring the adapter to a tracing-backed surface
//!
//! This stands in for a real graphics backend: every forwarded call is
//! logged instead of drawn, which makes it easy to inspect exactly what
//! a backend would receive. In production the surface would wrap an
//! actual overlay graphics context.

use overdraw::{
    Color, DrawConfig, FixedWindowLocator, OverlayDrawingAdapter, OverlayWindowOptions, Rect,
    RenderSurface, SurfaceError, WindowHandle,
};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Surface that logs every call it receives
struct TraceSurface;

impl RenderSurface for TraceSurface {
    type Font = (String, u32);
    type Brush = Color;

    fn set_measure_fps(&mut self, enabled: bool) {
        info!(enabled, "measure fps");
    }

    fn set_primitive_antialias(&mut self, enabled: bool) {
        info!(enabled, "primitive antialias");
    }

    fn set_text_antialias(&mut self, enabled: bool) {
        info!(enabled, "text antialias");
    }

    fn set_vsync(&mut self, enabled: bool) {
        info!(enabled, "vsync");
    }

    fn set_multithreaded_factories(&mut self, enabled: bool) {
        info!(enabled, "multithreaded factories");
    }

    fn create_window(
        &mut self,
        options: &OverlayWindowOptions,
    ) -> Result<WindowHandle, SurfaceError> {
        info!(?options, "create overlay window");
        Ok(WindowHandle(1))
    }

    fn set_window_handle(&mut self, handle: WindowHandle) {
        info!(?handle, "bind window handle");
    }

    fn setup(&mut self) -> Result<(), SurfaceError> {
        info!("surface setup");
        Ok(())
    }

    fn begin_scene(&mut self) -> Result<(), SurfaceError> {
        info!("begin scene");
        Ok(())
    }

    fn clear_scene(&mut self) -> Result<(), SurfaceError> {
        info!("clear scene");
        Ok(())
    }

    fn end_scene(&mut self) -> Result<(), SurfaceError> {
        info!("end scene");
        Ok(())
    }

    fn create_font(&mut self, family: &str, size: u32) -> Result<Self::Font, SurfaceError> {
        Ok((family.to_string(), size))
    }

    fn create_solid_brush(&mut self, color: Color) -> Result<Self::Brush, SurfaceError> {
        Ok(color)
    }

    fn draw_text(
        &mut self,
        font: &Self::Font,
        _brush: &Self::Brush,
        x: f32,
        y: f32,
        text: &str,
    ) -> Result<(), SurfaceError> {
        info!(font = %font.0, size = font.1, x, y, text, "draw text");
        Ok(())
    }

    fn draw_line(
        &mut self,
        _brush: &Self::Brush,
        x: f32,
        y: f32,
        end_x: f32,
        end_y: f32,
        stroke: f32,
    ) -> Result<(), SurfaceError> {
        info!(x, y, end_x, end_y, stroke, "draw line");
        Ok(())
    }

    fn draw_box(
        &mut self,
        _border: &Self::Brush,
        _fill: &Self::Brush,
        rect: Rect,
        stroke: f32,
    ) -> Result<(), SurfaceError> {
        info!(?rect, stroke, "draw box");
        Ok(())
    }

    fn draw_horizontal_progress_bar(
        &mut self,
        _border: &Self::Brush,
        _fill: &Self::Brush,
        rect: Rect,
        stroke: f32,
        fraction: f32,
    ) -> Result<(), SurfaceError> {
        info!(?rect, stroke, fraction, "draw progress bar");
        Ok(())
    }
}

fn main() -> Result<(), SurfaceError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DrawConfig::default().with_fps(60);
    let locator = FixedWindowLocator(WindowHandle(0x42));
    let mut drawing = OverlayDrawingAdapter::new(config, TraceSurface, locator);

    drawing.initialize()?;

    // A few frames of sample HUD content
    for frame in 0..3u32 {
        drawing.begin_scene()?;

        drawing.draw_text(20.0, 20.0, &format!("frame {}", frame))?;
        drawing.draw_line(0.0, 50.0, 320.0, 50.0, 1.0)?;

        let box_rect = Rect::from_xywh(40.0, 80.0, 120.0, 60.0).expect("valid rect");
        drawing.draw_box(box_rect, 2.0)?;

        let bar_rect = Rect::from_xywh(40.0, 160.0, 200.0, 14.0).expect("valid rect");
        drawing.draw_progress_bar(bar_rect, 1.0, frame as f32 / 2.0)?;

        drawing.end_scene()?;

        std::thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}
