//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into core `Event`s.
//
// Architecture:
//   Winit Events → InputProcessor → Event (core type) → EventSender
//
// Stateful tracking: caches modifier state from ModifiersChanged and the
// last cursor position from CursorMoved, applying them to subsequent key
// and mouse-button events (Winit reports neither on those events). Key
// auto-repeat and unmapped keys (F13-F24, exotic keyboards) are filtered
// (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{Event, KeyCode, Modifiers, MouseButton};

//=== Constants ===========================================================

/// Pixel-precise wheel deltas (touchpads) are reported in lines by the core.
const PIXELS_PER_LINE: f64 = 20.0;

//=== InputProcessor ======================================================

/// Converts Winit events to core events with stateful modifier and cursor
/// tracking.
pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
    cursor: (f64, f64),
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
            cursor: (0.0, 0.0),
        }
    }

    //--- State Management -------------------------------------------------

    /// Updates cached modifier state (applied to subsequent events).
    pub(crate) fn update_modifiers(&mut self, modifiers_state: ModifiersState) {
        self.current_modifiers = Modifiers::from(modifiers_state);
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent (filters repeats and unmapped keys).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<Event> {
        let key_code = match key_event.physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        self.create_key_event(key_code, key_event.state, key_event.repeat)
    }

    /// Converts a mouse button event, stamped with the last cursor position.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> Event {
        let button = MouseButton::from(button);
        let (x, y) = self.cursor;

        match state {
            ElementState::Pressed => Event::MouseButtonPressed { button, x, y },
            ElementState::Released => Event::MouseButtonReleased { button, x, y },
        }
    }

    /// Records the cursor position and creates a move event (window pixels).
    pub(crate) fn process_mouse_move(&mut self, x: f64, y: f64) -> Event {
        self.cursor = (x, y);
        Event::MouseMoved { x, y }
    }

    /// Converts a wheel delta to a vertical line count.
    pub(crate) fn process_mouse_wheel(&self, delta: MouseScrollDelta) -> Event {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y as f64,
            MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_LINE,
        };
        Event::MouseWheelScrolled { delta: lines }
    }

    /// Converts a window resize (physical pixels).
    pub(crate) fn process_resize(&self, size: PhysicalSize<u32>) -> Event {
        Event::Resized {
            width: i32::try_from(size.width).unwrap_or(i32::MAX),
            height: i32::try_from(size.height).unwrap_or(i32::MAX),
        }
    }

    pub(crate) fn process_focus(&self, focused: bool) -> Event {
        if focused {
            Event::FocusGained
        } else {
            Event::FocusLost
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_key_event(&self, key: KeyCode, state: ElementState, repeat: bool) -> Option<Event> {
        if repeat || key == KeyCode::Unidentified {
            return None;
        }

        let modifiers = self.current_modifiers;
        Some(match state {
            ElementState::Pressed => Event::KeyPressed { key, modifiers },
            ElementState::Released => Event::KeyReleased { key, modifiers },
        })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit ModifiersState to core Modifiers.
///
/// Winit normalizes platform keys (macOS Cmd → Ctrl, Option → Alt).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Converts Winit physical key codes to core key codes.
///
/// Maps A-Z, 0-9, arrows, and common special keys. Unmapped keys (F13-F24,
/// numpad, media keys) return `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0,
            Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2,
            Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4,
            Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6,
            Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8,
            Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts Winit mouse buttons to core buttons.
///
/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
