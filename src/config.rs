//! Drawing configuration
//!
//! All appearance settings are supplied once at adapter construction and
//! are never mutated afterwards. Every field can be overridden
//! independently through the `with_*` builders.

use tiny_skia::Color;

use crate::colors;

/// Appearance settings for the overlay drawing adapter
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// Font family used by `draw_text`
    pub font_name: String,
    /// Font size in pixels
    pub font_size: u32,
    /// Color of text drawn with `draw_text`
    pub text_color: Color,
    /// Color of line segments
    pub line_color: Color,
    /// Border color of boxes
    pub box_color: Color,
    /// Interior fill color of boxes
    pub box_fill_color: Color,
    /// Border/track color of progress bars
    pub progress_bar_color: Color,
    /// Fill color of progress bars
    pub progress_bar_fill_color: Color,
    /// Target frame rate of the overlay window (must be positive)
    pub fps: u32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            font_name: "Futura".to_string(),
            font_size: 12,
            text_color: colors::white(),
            line_color: colors::white(),
            box_color: colors::white(),
            box_fill_color: colors::transparent(),
            progress_bar_color: colors::white(),
            progress_bar_fill_color: colors::green(),
            fps: 120,
        }
    }
}

impl DrawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, name: impl Into<String>, size: u32) -> Self {
        self.font_name = name.into();
        self.font_size = size;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_box_color(mut self, color: Color) -> Self {
        self.box_color = color;
        self
    }

    pub fn with_box_fill_color(mut self, color: Color) -> Self {
        self.box_fill_color = color;
        self
    }

    pub fn with_progress_bar_color(mut self, color: Color) -> Self {
        self.progress_bar_color = color;
        self
    }

    pub fn with_progress_bar_fill_color(mut self, color: Color) -> Self {
        self.progress_bar_fill_color = color;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }
}
