//! Windows pointer injection via `SetCursorPos` and `SendInput`

use crate::error::{PointerError, PointerResult};
use crate::pointer::PointerSink;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP,
    MOUSEINPUT, MOUSE_EVENT_FLAGS,
};
use windows::Win32::UI::WindowsAndMessaging::SetCursorPos;

#[derive(Debug, Default)]
pub struct WindowsPointerSink;

impl WindowsPointerSink {
    pub fn new() -> Self {
        Self
    }
}

fn mouse_input(flags: MOUSE_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx: 0,
                dy: 0,
                mouseData: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

impl PointerSink for WindowsPointerSink {
    fn set_cursor_position(&mut self, x: i32, y: i32) -> PointerResult<()> {
        unsafe { SetCursorPos(x, y) }
            .map_err(|e| PointerError::Platform(format!("SetCursorPos failed: {}", e)))
    }

    fn click_primary_button(&mut self) -> PointerResult<()> {
        let inputs = [
            mouse_input(MOUSEEVENTF_LEFTDOWN),
            mouse_input(MOUSEEVENTF_LEFTUP),
        ];
        let sent = unsafe { SendInput(&inputs, std::mem::size_of::<INPUT>() as i32) };

        if sent as usize != inputs.len() {
            return Err(PointerError::Platform(format!(
                "SendInput injected {} of {} events",
                sent,
                inputs.len()
            )));
        }
        Ok(())
    }
}
