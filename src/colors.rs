//! Color constructor helpers shared by config defaults and callers.

use tiny_skia::Color;

#[inline]
pub fn transparent() -> Color {
    Color::from_rgba8(0, 0, 0, 0)
}

#[inline]
pub fn black() -> Color {
    Color::from_rgba8(0, 0, 0, 255)
}

#[inline]
pub fn white() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}

#[inline]
pub fn red() -> Color {
    Color::from_rgba8(255, 0, 0, 255)
}

/// Web/GDI green, not full-brightness lime
#[inline]
pub fn green() -> Color {
    Color::from_rgba8(0, 128, 0, 255)
}

#[inline]
pub fn blue() -> Color {
    Color::from_rgba8(0, 0, 255, 255)
}
