//! Input translation.
//!
//! The program recognizes exactly two exit triggers — a window close request
//! and an Escape key-down. Everything else is discarded here so the runtime
//! never sees it.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Engine-level input event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputEvent {
    /// The user asked to leave: close request or Escape pressed.
    Exit,
}

/// Translates a winit `WindowEvent` into an engine [`InputEvent`].
///
/// Returns `None` for every event that is not an exit trigger.
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::Exit),

        WindowEvent::KeyboardInput { event, .. }
            if event.state == ElementState::Pressed
                && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
        {
            Some(InputEvent::Exit)
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_request_is_an_exit() {
        assert_eq!(
            translate_window_event(&WindowEvent::CloseRequested),
            Some(InputEvent::Exit)
        );
    }

    #[test]
    fn unrelated_events_are_discarded() {
        use winit::dpi::PhysicalSize;

        assert_eq!(translate_window_event(&WindowEvent::Focused(true)), None);
        assert_eq!(
            translate_window_event(&WindowEvent::Resized(PhysicalSize::new(640, 480))),
            None
        );
    }
}
