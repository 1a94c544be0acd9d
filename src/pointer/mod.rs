//! Pointer output
//!
//! The pipeline drives the OS cursor through a [`PointerSink`]. Platform
//! adapters inject real input; [`RecordingSink`] and [`LoggingSink`] are used
//! for replay, tests and hosts without injection support.

pub mod sink;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

use crate::error::PointerResult;
use serde::{Deserialize, Serialize};

pub use sink::{LoggingSink, RecordingSink};

/// Capability to move the cursor and press the primary button
///
/// Calls are fire-and-forget from the pipeline's point of view: failures are
/// logged and the next frame carries on.
pub trait PointerSink: Send {
    /// Move the cursor to absolute surface coordinates
    fn set_cursor_position(&mut self, x: i32, y: i32) -> PointerResult<()>;

    /// Press and immediately release the primary button
    fn click_primary_button(&mut self) -> PointerResult<()>;
}

impl<S: PointerSink + ?Sized> PointerSink for Box<S> {
    fn set_cursor_position(&mut self, x: i32, y: i32) -> PointerResult<()> {
        (**self).set_cursor_position(x, y)
    }

    fn click_primary_button(&mut self) -> PointerResult<()> {
        (**self).click_primary_button()
    }
}

/// One call made against a pointer sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerEvent {
    CursorMove { x: i32, y: i32 },
    Click,
}

/// Sink for the current platform
///
/// Hosts without an injection backend get a [`LoggingSink`].
pub fn platform_sink() -> PointerResult<Box<dyn PointerSink>> {
    #[cfg(target_os = "macos")]
    {
        Ok(Box::new(macos::MacPointerSink::new()?))
    }

    #[cfg(target_os = "windows")]
    {
        Ok(Box::new(windows::WindowsPointerSink::new()))
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        tracing::warn!("No pointer injection backend for this platform, logging events only");
        Ok(Box::new(LoggingSink::new()))
    }
}
