//=========================================================================
// Input
//
// Window/input event types and the FIFO that carries them from the
// platform layer to the active screen.
//
// Notes:
// There is no persistent input state here: screens react to events as
// they are drained, in arrival order, once per frame.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod queue;

//=== Public API ==========================================================

pub use event::{Event, KeyCode, Modifiers, MouseButton};
pub use queue::{event_channel, EventQueue, EventSender, EventSource};
