//! macOS pointer injection via Quartz event services

use crate::error::{PointerError, PointerResult};
use crate::pointer::PointerSink;
use core_graphics::event::{CGEvent, CGEventTapLocation, CGEventType, CGMouseButton};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use core_graphics::geometry::CGPoint;

/// Posts synthetic mouse events at the HID level
///
/// Requires the Accessibility permission for the host process.
#[derive(Debug)]
pub struct MacPointerSink {
    _private: (),
}

impl MacPointerSink {
    /// Fails when no event source can be created (e.g. no window server session)
    pub fn new() -> PointerResult<Self> {
        event_source()?;
        Ok(Self { _private: () })
    }

    fn post(&self, event_type: CGEventType, location: CGPoint) -> PointerResult<()> {
        let event = CGEvent::new_mouse_event(event_source()?, event_type, location, CGMouseButton::Left)
            .map_err(|_| PointerError::Platform("Failed to create mouse event".to_string()))?;
        event.post(CGEventTapLocation::HID);
        Ok(())
    }

    fn current_location(&self) -> PointerResult<CGPoint> {
        let event = CGEvent::new(event_source()?)
            .map_err(|_| PointerError::Platform("Failed to query cursor location".to_string()))?;
        Ok(event.location())
    }
}

fn event_source() -> PointerResult<CGEventSource> {
    CGEventSource::new(CGEventSourceStateID::HIDSystemState)
        .map_err(|_| PointerError::Platform("Failed to create CGEventSource".to_string()))
}

impl PointerSink for MacPointerSink {
    fn set_cursor_position(&mut self, x: i32, y: i32) -> PointerResult<()> {
        self.post(CGEventType::MouseMoved, CGPoint::new(f64::from(x), f64::from(y)))
    }

    fn click_primary_button(&mut self) -> PointerResult<()> {
        let location = self.current_location()?;
        self.post(CGEventType::LeftMouseDown, location)?;
        self.post(CGEventType::LeftMouseUp, location)
    }
}
