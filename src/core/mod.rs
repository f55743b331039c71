//=========================================================================
// Core
//
// Platform-independent application shell: geometry, cameras, the screen
// stack and the frame driver that runs it.
//
// Responsibilities:
// - Map world coordinates to window pixels (`viewport`)
// - Own screens exclusively and apply stack transitions (`screen`)
// - Run input → update → draw on the active screen (`Application`)
// - Abstract rendering and input behind collaborators (`render`, `input`)
//
// Notes:
// Nothing in here touches the OS. The `platform` layer feeds events in
// through an `EventSource` and calls `Application::run_frame` once per
// redraw.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod geometry;
pub mod input;
pub mod render;
pub mod screen;
pub mod viewport;

mod app;
mod context;

//=== Public API ==========================================================

pub use app::{Application, FrameStatus};
pub use context::AppContext;
pub use geometry::{Color, PixelSize, Rect, Vec2};
pub use screen::Screen;
pub use viewport::Viewport;
