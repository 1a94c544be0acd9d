use crate::error::PointerResult;
use crate::pointer::{PointerEvent, PointerSink};
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;

/// In-memory sink that keeps every call
///
/// Clones share the same buffer, so a handle kept outside the pipeline sees
/// what the pipeline emitted.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<ParkingMutex<Vec<PointerEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PointerEvent> {
        self.events.lock().clone()
    }

    pub fn moves(&self) -> Vec<(i32, i32)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match *event {
                PointerEvent::CursorMove { x, y } => Some((x, y)),
                PointerEvent::Click => None,
            })
            .collect()
    }

    pub fn click_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, PointerEvent::Click))
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl PointerSink for RecordingSink {
    fn set_cursor_position(&mut self, x: i32, y: i32) -> PointerResult<()> {
        self.events.lock().push(PointerEvent::CursorMove { x, y });
        Ok(())
    }

    fn click_primary_button(&mut self) -> PointerResult<()> {
        self.events.lock().push(PointerEvent::Click);
        Ok(())
    }
}

/// Sink that only reports calls through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl LoggingSink {
    pub fn new() -> Self {
        Self
    }
}

impl PointerSink for LoggingSink {
    fn set_cursor_position(&mut self, x: i32, y: i32) -> PointerResult<()> {
        tracing::trace!("cursor -> ({}, {})", x, y);
        Ok(())
    }

    fn click_primary_button(&mut self) -> PointerResult<()> {
        tracing::info!("primary button click");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_events() {
        let sink = RecordingSink::new();
        let mut handle = sink.clone();

        handle.set_cursor_position(10, 20).unwrap();
        handle.click_primary_button().unwrap();
        handle.set_cursor_position(11, 21).unwrap();

        assert_eq!(
            sink.events(),
            vec![
                PointerEvent::CursorMove { x: 10, y: 20 },
                PointerEvent::Click,
                PointerEvent::CursorMove { x: 11, y: 21 },
            ]
        );
        assert_eq!(sink.moves(), vec![(10, 20), (11, 21)]);
        assert_eq!(sink.click_count(), 1);

        sink.clear();
        assert!(handle.events().is_empty());
    }

    #[test]
    fn test_boxed_sink_forwards() {
        let sink = RecordingSink::new();
        let mut boxed: Box<dyn PointerSink> = Box::new(sink.clone());

        boxed.set_cursor_position(1, 2).unwrap();
        boxed.click_primary_button().unwrap();

        assert_eq!(sink.events().len(), 2);
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_string(&PointerEvent::CursorMove { x: 3, y: 4 }).unwrap();
        assert_eq!(json, r#"{"type":"cursorMove","x":3,"y":4}"#);
        let json = serde_json::to_string(&PointerEvent::Click).unwrap();
        assert_eq!(json, r#"{"type":"click"}"#);
    }
}
