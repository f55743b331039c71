//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the core `Application`.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌─────────────────────────────────────────────────┐
//  │  Winit Event Loop                               │
//  │   ↓                                             │
//  │  InputProcessor                                 │
//  │   ├─ Converts Winit → core Event                │
//  │   └─ Tracks modifiers + cursor                  │
//  │   ↓                                             │
//  │  EventSender ──(crossbeam FIFO)──> EventQueue   │
//  │                                       ↓         │
//  │  RedrawRequested                  AppContext    │
//  │   ↓                                   ↓         │
//  │  FrameClock::tick() ──dt──> Application::run_frame
//  │   ↓                                             │
//  │  Terminated? → exit : request_redraw            │
//  └─────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: every event forwarded since the
//   previous frame is drained by the active screen in arrival order
// - **Sticky modifiers**: Modifier state persists across events until
//   explicitly changed (matches platform behavior)
// - **Close is a request**: CloseRequested is forwarded as `Event::Closed`;
//   the loop only exits once the application reports termination
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::geometry::PixelSize;
use crate::core::input::{Event, EventSender};
use crate::core::{Application, FrameStatus};
use crate::time::FrameClock;
use input_processor::InputProcessor;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: if the event loop can't be created, nothing runs.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
        }
    }
}

//=== WindowConfig ========================================================

/// OS window parameters.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub size: PixelSize,
}

//=== Platform ============================================================

/// Window owner and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(app, sender, config)`
/// 2. **Execution**: `platform.run()` starts the event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: `run_frame` reports `Terminated` → loop exits
///
/// # Thread Safety
///
/// This type is NOT Send/Sync - it must remain on the main thread.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// The application driven once per redraw.
    app: Application,

    /// Feeds the application's event queue.
    events: EventSender,

    /// Converts Winit events to core events.
    input_processor: InputProcessor,

    clock: FrameClock,
    config: WindowConfig,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance.
    ///
    /// Does not create window yet - that happens lazily in `resumed()`.
    pub fn new(app: Application, events: EventSender, config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            app,
            events,
            input_processor: InputProcessor::new(),
            clock: FrameClock::new(),
            config,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the application terminates.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Queues an event for the active screen.
    fn forward(&self, event: Event) {
        trace!(target: "platform::input", "Forwarding {:?}", event);
        self.events.send(event);
    }

    /// Runs one application frame and schedules the next one.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.clock.tick();

        match self.app.run_frame(frame.dt) {
            FrameStatus::Running => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            FrameStatus::Terminated => {
                info!(
                    target: "platform",
                    "Application terminated after {} frame(s)",
                    frame.frame_index + 1
                );
                event_loop.exit();
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet and reports its actual
    /// size, which may differ from the one requested.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.clock.reset();

        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.size.width(), self.config.size.height()));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                self.forward(self.input_processor.process_resize(size));
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.forward(Event::Closed);
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Window resized to {}x{}", size.width, size.height);
                self.forward(self.input_processor.process_resize(size));
            }

            WindowEvent::Focused(focused) => {
                self.forward(self.input_processor.process_focus(focused));
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_mouse_move(position.x, position.y);
                self.forward(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(&key_event) {
                    Some(event) => self.forward(event),
                    None => trace!(target: "platform::input", "Unmapped or repeated key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.forward(self.input_processor.process_mouse_button(button, state));
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.forward(self.input_processor.process_mouse_wheel(delta));
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
