//=========================================================================
// Proscenium Engine
//
// Main entry point: wires the window, the event queue and the screen
// stack together and runs them.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(bootstrap)──>  [Runtime]
//         │                          │
//         ├─ with_title()            ├─ creates event channel + context
//         ├─ with_window_size()      ├─ pushes the first screen
//         ├─ with_clear_color()      └─ runs platform, blocks until exit
//         └─ with_background_size()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Color, PixelSize};
use crate::core::input::{event_channel, EventSender};
use crate::core::render::{RecordingSurface, Sprite, TextureId};
use crate::core::screen::Screen;
use crate::core::{AppContext, Application};
use crate::platform::{Platform, PlatformError, WindowConfig};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: "Proscenium"
/// - **Window size**: 1024×768
/// - **Clear color**: black
/// - **Background native size**: same as the window size
///
/// # Examples
///
/// ```no_run
/// use proscenium::EngineBuilder;
/// use proscenium::screens::MenuScreen;
///
/// fn main() -> Result<(), proscenium::PlatformError> {
///     EngineBuilder::new()
///         .with_title("Level Editor")
///         .with_window_size(1280, 720)
///         .build()
///         .run(MenuScreen::new)
/// }
/// ```
pub struct EngineBuilder {
    title: String,
    window_size: PixelSize,
    clear_color: Color,
    background_size: Option<PixelSize>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Proscenium".to_owned(),
            window_size: PixelSize::new(1024, 768),
            clear_color: Color::BLACK,
            background_size: None,
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in physical pixels.
    ///
    /// The OS may pick a different size; screens always size themselves
    /// from the first `Resized` event.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be positive, got {}x{}",
            width,
            height
        );
        self.window_size = PixelSize::new(width, height);
        self
    }

    /// Sets the color screens clear the surface with.
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Sets the native pixel size of the background texture.
    ///
    /// Default: the initial window size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_background_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Background size must be positive, got {}x{}",
            width,
            height
        );
        self.background_size = Some(PixelSize::new(width, height));
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (window: {}x{}, background: {:?})",
            self.window_size.width(),
            self.window_size.height(),
            self.background_size
        );

        Engine {
            window: WindowConfig {
                title: self.title,
                size: self.window_size,
            },
            clear_color: self.clear_color,
            background_size: self.background_size.unwrap_or(self.window_size),
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Proscenium runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   └─► Platform (Event Loop)
///         ├─► Window, Input → EventQueue
///         └─► Application::run_frame per redraw
///               └─► active Screen
/// ```
pub struct Engine {
    window: WindowConfig,
    clear_color: Color,
    background_size: PixelSize,
}

impl Engine {
    /// Creates the shared context the first screen is built from.
    fn create_application(&self) -> (Application, EventSender) {
        let (sender, queue) = event_channel();

        let mut context = AppContext::new(
            Box::new(RecordingSurface::new(self.window.size)),
            Box::new(queue),
            Sprite::new(TextureId(0), self.background_size),
        );
        context.clear_color = self.clear_color;

        (Application::new(context), sender)
    }

    //--- Execution --------------------------------------------------------

    /// Pushes the screen built by `bootstrap` and runs until the stack is
    /// empty.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the event queue and shared context
    /// 2. Builds the first screen from the context and pushes it
    /// 3. Runs platform event loop (blocks here)
    /// 4. Returns once a frame reports termination
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run<S, F>(self, bootstrap: F) -> Result<(), PlatformError>
    where
        S: Screen + 'static,
        F: FnOnce(&AppContext) -> S,
    {
        info!("Starting engine runtime");

        //--- 1. Create queue + context -----------------------------------
        let (mut app, sender) = self.create_application();
        info!("Event channel created");

        //--- 2. Push the first screen ------------------------------------
        let first = bootstrap(app.context());
        info!("Initial screen: {}", first.name());
        app.push_state(first);

        //--- 3. Launch the platform subsystem ----------------------------
        let platform = Platform::new(app, sender, self.window);
        platform.run()?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Event;
    use crate::core::FrameStatus;
    use crate::screens::MenuScreen;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.title, "Proscenium");
        assert_eq!(builder.window_size, PixelSize::new(1024, 768));
        assert_eq!(builder.clear_color, Color::BLACK);
        assert_eq!(builder.background_size, None);
    }

    #[test]
    fn builder_with_title() {
        let builder = EngineBuilder::new().with_title("Editor");
        assert_eq!(builder.title, "Editor");
    }

    #[test]
    fn builder_with_window_size() {
        let builder = EngineBuilder::new().with_window_size(800, 600);
        assert_eq!(builder.window_size, PixelSize::new(800, 600));
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_window_size_panics_on_zero() {
        EngineBuilder::new().with_window_size(0, 600);
    }

    #[test]
    #[should_panic(expected = "Background size must be positive")]
    fn builder_with_background_size_panics_on_zero() {
        EngineBuilder::new().with_background_size(1920, 0);
    }

    #[test]
    fn builder_chaining() {
        let builder = EngineBuilder::new()
            .with_window_size(640, 480)
            .with_clear_color(Color::WHITE)
            .with_background_size(256, 128);

        assert_eq!(builder.window_size, PixelSize::new(640, 480));
        assert_eq!(builder.clear_color, Color::WHITE);
        assert_eq!(builder.background_size, Some(PixelSize::new(256, 128)));
    }

    //=====================================================================
    // Engine Tests
    //=====================================================================

    #[test]
    fn background_defaults_to_window_size() {
        let engine = EngineBuilder::new().with_window_size(640, 480).build();
        assert_eq!(engine.background_size, PixelSize::new(640, 480));

        let engine = EngineBuilder::new().with_background_size(1920, 1080).build();
        assert_eq!(engine.background_size, PixelSize::new(1920, 1080));
    }

    #[test]
    fn application_is_wired_to_channel() {
        let engine = EngineBuilder::new()
            .with_window_size(640, 480)
            .with_clear_color(Color::WHITE)
            .build();
        let (mut app, sender) = engine.create_application();

        assert_eq!(app.context().clear_color, Color::WHITE);
        assert_eq!(app.context().window_size(), PixelSize::new(640, 480));

        let menu = MenuScreen::new(app.context());
        app.push_state(menu);
        assert!(sender.send(Event::Closed));
        assert_eq!(app.run_frame(0.0), FrameStatus::Terminated);
    }

    #[test]
    fn close_after_long_backlog_still_terminates() {
        let engine = EngineBuilder::new().with_window_size(640, 480).build();
        let (mut app, sender) = engine.create_application();
        let menu = MenuScreen::new(app.context());
        app.push_state(menu);

        // Several hundred events pile up while no frame runs.
        for i in 0..500 {
            assert!(sender.send(Event::MouseMoved { x: i as f64, y: 1.0 }));
        }
        assert!(sender.send(Event::Resized { width: 800, height: 600 }));
        assert!(sender.send(Event::Closed));

        assert_eq!(app.run_frame(0.0), FrameStatus::Terminated);
        assert_eq!(app.context().window_size(), PixelSize::new(800, 600));
        assert!(!app.is_running());
    }
}
