//=========================================================================
// Window Event Types
//
// Defines the internal representation of window and input events.
//
// This module abstracts away platform-specific events (e.g. Winit, SDL)
// into a unified, engine-friendly format consumed by screens.
//
// Responsibilities:
// - Represent window lifecycle (close, resize) in a portable way
// - Represent keyboard and mouse inputs with modifier state
// - Provide a catch-all for kinds screens do not react to
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    Event (this module)
//         ↓
//    EventQueue (FIFO)
//         ↓
//    Screen::handle_input()
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// For example, `KeyA` is always the same physical key regardless of
/// keyboard layout (QWERTY vs AZERTY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys not explicitly mapped by the platform layer.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// The system does not distinguish between left/right variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Shift key held (either left or right).
    pub shift: bool,

    /// Ctrl key held (either left or right, Command on macOS).
    pub ctrl: bool,

    /// Alt key held (either left or right, Option on macOS).
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Only Shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    /// Only Ctrl held.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };

    /// Only Alt held.
    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
    };

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

//=== Event ===============================================================

/// A window or input event, in arrival order.
///
/// Pointer coordinates are in window pixels (top-left origin). Screens map
/// them to world space through whichever viewport they mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The user or OS asked to close the window.
    Closed,

    /// The window's drawable area changed size.
    ///
    /// Dimensions are signed because some platforms briefly report zero or
    /// negative extents; consumers clamp with [`PixelSize::clamped`].
    ///
    /// [`PixelSize::clamped`]: crate::core::geometry::PixelSize::clamped
    Resized { width: i32, height: i32 },

    /// Key pressed down.
    KeyPressed { key: KeyCode, modifiers: Modifiers },

    /// Key released.
    KeyReleased { key: KeyCode, modifiers: Modifiers },

    /// Cursor moved to a new window position.
    MouseMoved { x: f64, y: f64 },

    /// Mouse button pressed at the current cursor position.
    MouseButtonPressed { button: MouseButton, x: f64, y: f64 },

    /// Mouse button released at the current cursor position.
    MouseButtonReleased { button: MouseButton, x: f64, y: f64 },

    /// Vertical wheel movement in lines (positive = away from the user).
    MouseWheelScrolled { delta: f64 },

    /// Window lost keyboard focus.
    FocusLost,

    /// Window gained keyboard focus.
    FocusGained,

    /// Unrecognized or unsupported event, ignored by screens.
    Unidentified,
}

//=========================================================================
// Unit Tests
//=========================================================================
