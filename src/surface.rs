//! Render surface abstraction
//!
//! This module defines the trait an overlay graphics backend must
//! implement, allowing the drawing adapter to stay backend-agnostic.
//! The backend owns window compositing, font rasterization, and
//! primitive rendering; the adapter only forwards calls.

use tiny_skia::{Color, Rect};

/// Opaque platform window identifier.
///
/// On Windows this is an HWND value; on X11 an XID; on other platforms
/// whatever the backend uses to address a native window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// Options for creating the overlay window during initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayWindowOptions {
    /// Handle of the window to overlay onto
    pub target: WindowHandle,
    /// Keep the overlay above all other windows
    pub topmost: bool,
    /// Show the overlay immediately after creation
    pub visible: bool,
    /// Frame pacing for the overlay window
    pub fps: u32,
}

/// Errors surfaced by a render backend
#[derive(Debug)]
pub enum SurfaceError {
    /// Overlay window creation failed
    WindowCreation(String),
    /// One-time surface setup failed
    Setup(String),
    /// Font or brush creation failed
    Resource(String),
    /// A draw or scene operation failed
    Draw(String),
    /// Generic backend error
    Other(String),
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceError::WindowCreation(s) => write!(f, "Window creation failed: {}", s),
            SurfaceError::Setup(s) => write!(f, "Surface setup failed: {}", s),
            SurfaceError::Resource(s) => write!(f, "Resource creation failed: {}", s),
            SurfaceError::Draw(s) => write!(f, "Draw failed: {}", s),
            SurfaceError::Other(s) => write!(f, "Surface error: {}", s),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Trait an overlay graphics backend must implement.
///
/// `Font` and `Brush` are backend-chosen resource types: a GPU backend
/// might hand out device objects, a software backend plain descriptors.
/// The adapter creates them per draw call and never stores them, so no
/// lifetime management beyond scope-local ownership is required.
pub trait RenderSurface {
    type Font;
    type Brush;

    /// Enable frame-time measurement on the backend
    fn set_measure_fps(&mut self, enabled: bool);

    /// Enable anti-aliasing for geometry primitives
    fn set_primitive_antialias(&mut self, enabled: bool);

    /// Enable anti-aliasing for text rendering
    fn set_text_antialias(&mut self, enabled: bool);

    /// Enable vertical sync
    fn set_vsync(&mut self, enabled: bool);

    /// Allow the backend to create resources from multiple worker threads.
    /// Opaque to the adapter; purely a backend concern.
    fn set_multithreaded_factories(&mut self, enabled: bool);

    /// Create the overlay window and return its native handle.
    /// The window is owned by the backend from this point on.
    fn create_window(
        &mut self,
        options: &OverlayWindowOptions,
    ) -> Result<WindowHandle, SurfaceError>;

    /// Bind the surface to a native window handle
    fn set_window_handle(&mut self, handle: WindowHandle);

    /// One-time surface setup after the window handle is bound
    fn setup(&mut self) -> Result<(), SurfaceError>;

    /// Begin a new scene. All draws must happen between `begin_scene`
    /// and `end_scene`.
    fn begin_scene(&mut self) -> Result<(), SurfaceError>;

    /// Clear the active scene
    fn clear_scene(&mut self) -> Result<(), SurfaceError>;

    /// Finish the active scene and present it
    fn end_scene(&mut self) -> Result<(), SurfaceError>;

    /// Create a font resource from a family name and pixel size
    fn create_font(&mut self, family: &str, size: u32) -> Result<Self::Font, SurfaceError>;

    /// Create a solid-color brush
    fn create_solid_brush(&mut self, color: Color) -> Result<Self::Brush, SurfaceError>;

    /// Draw text at the given position
    fn draw_text(
        &mut self,
        font: &Self::Font,
        brush: &Self::Brush,
        x: f32,
        y: f32,
        text: &str,
    ) -> Result<(), SurfaceError>;

    /// Draw a line segment with the given stroke width
    fn draw_line(
        &mut self,
        brush: &Self::Brush,
        x: f32,
        y: f32,
        end_x: f32,
        end_y: f32,
        stroke: f32,
    ) -> Result<(), SurfaceError>;

    /// Draw a rectangle with a stroked border and filled interior
    fn draw_box(
        &mut self,
        border: &Self::Brush,
        fill: &Self::Brush,
        rect: Rect,
        stroke: f32,
    ) -> Result<(), SurfaceError>;

    /// Draw a horizontal progress bar. `fraction` is the portion of
    /// `rect`'s width to fill, normally in `[0, 1]`; the backend receives
    /// it exactly as supplied.
    fn draw_horizontal_progress_bar(
        &mut self,
        border: &Self::Brush,
        fill: &Self::Brush,
        rect: Rect,
        stroke: f32,
        fraction: f32,
    ) -> Result<(), SurfaceError>;
}
