//! Overdraw
//!
//! A thin adapter that forwards overlay drawing primitives (text, line,
//! box, progress bar) to an externally supplied graphics context.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    adapter                          │
//! │              OverlayDrawingAdapter                  │
//! │        (scene pairing + primitive forwarding)       │
//! ├─────────────────────────────────────────────────────┤
//! │              surface / locator                      │
//! │      RenderSurface, TargetWindowLocator traits      │
//! │           (external collaborator seams)             │
//! ├─────────────────────────────────────────────────────┤
//! │                config / colors                      │
//! │         DrawConfig (font, colors, frame rate)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The adapter owns no rendering logic of its own: window creation,
//! rasterization, and primitive drawing all live behind [`RenderSurface`].
//! Its job is resolving brushes and fonts from [`DrawConfig`] and passing
//! every call through unmodified.

pub mod adapter;
pub mod colors;
pub mod config;
pub mod locator;
pub mod surface;

// Re-export commonly used types
pub use adapter::OverlayDrawingAdapter;
pub use config::DrawConfig;
pub use locator::{FixedWindowLocator, TargetWindowLocator};
pub use surface::{OverlayWindowOptions, RenderSurface, SurfaceError, WindowHandle};

// Re-export tiny_skia geometry for external use
pub use tiny_skia::{Color, Rect};
