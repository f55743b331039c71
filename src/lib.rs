//=========================================================================
// Proscenium: Library Root
//
// A screen-stack application shell: one active screen at a time, each
// drawing through cameras that stay 1:1 with the window however it is
// resized.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the platform-independent core (screens, viewports, stack)
// - Keep the Winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use proscenium::EngineBuilder;
// use proscenium::screens::MenuScreen;
//
// fn main() -> Result<(), proscenium::PlatformError> {
//     EngineBuilder::new().build().run(MenuScreen::new)
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that does not touch the OS and is fully usable
// headless (tests drive `Application::run_frame` directly).
//
// `screens` holds the built-in menu and editor screens.
//
pub mod core;
pub mod logging;
pub mod prelude;
pub mod screens;
pub mod time;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event loop) and is kept private.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use platform::PlatformError;
