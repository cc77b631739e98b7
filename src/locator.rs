//! Target window resolution

use crate::surface::WindowHandle;

/// Resolves the native handle of the window to overlay onto.
///
/// Typically backed by a process/window enumeration service; the adapter
/// reads it exactly once, during initialization.
pub trait TargetWindowLocator {
    fn main_window_handle(&self) -> WindowHandle;
}

/// Locator for an already-known window handle
#[derive(Debug, Clone, Copy)]
pub struct FixedWindowLocator(pub WindowHandle);

impl TargetWindowLocator for FixedWindowLocator {
    fn main_window_handle(&self) -> WindowHandle {
        self.0
    }
}
