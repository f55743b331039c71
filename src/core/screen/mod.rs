//=========================================================================
// Screen System
//=========================================================================
//
// Mutually-exclusive application modes and the stack that owns them.
//
// Architecture:
//   ScreenStack
//     └─ screens: Vec<Box<dyn Screen>>   (top = active)
//
// Flow (per frame, active screen only):
//   handle_input() → [transitions] → update(dt) → [transitions] → draw(dt)
//
//=========================================================================

//=== Module Declarations =================================================

mod screen_stack;
mod transition_queue;

//=== Public API ==========================================================

pub use screen_stack::ScreenStack;
pub use transition_queue::{Transition, TransitionQueue};

//=== Internal Dependencies ===============================================

use log::trace;

use crate::core::geometry::{PixelSize, Vec2};
use crate::core::input::{Event, KeyCode, Modifiers, MouseButton};
use crate::core::AppContext;

//=== Screen Trait ========================================================

/// One application mode with its own input, update, and draw behavior.
///
/// Required: `name`, `update`, `draw`, and `on_resize`. Input handling has a
/// default that drains every pending event and routes it to the hooks below.
///
/// # Minimal Implementation
///
/// ```rust
/// # use proscenium::prelude::*;
/// struct Splash {
///     view: Viewport,
/// }
///
/// impl Screen for Splash {
///     fn name(&self) -> &'static str {
///         "splash"
///     }
///
///     fn update(&mut self, _dt: f64, _ctx: &mut AppContext) {}
///
///     fn draw(&mut self, _dt: f64, ctx: &mut AppContext) {
///         let background = ctx.background;
///         ctx.surface.bind(&self.view).draw(Visual::Sprite(background));
///     }
///
///     fn on_resize(&mut self, size: PixelSize, ctx: &mut AppContext) {
///         self.view.apply_no_stretch(size);
///         ctx.background.fit_to_viewport(&self.view, size);
///     }
/// }
/// ```
pub trait Screen {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    //--- Frame Callbacks --------------------------------------------------

    /// Drains all pending events in arrival order.
    fn handle_input(&mut self, ctx: &mut AppContext) {
        while let Some(event) = ctx.poll_event() {
            self.on_event(event, ctx);
        }
    }

    /// Advances screen-local state by `dt` seconds (non-negative, may be 0).
    fn update(&mut self, dt: f64, ctx: &mut AppContext);

    /// Draws the screen, binding each owned viewport before drawing through it.
    fn draw(&mut self, dt: f64, ctx: &mut AppContext);

    //--- Event Routing ----------------------------------------------------

    /// Reacts to one event. The default routes to the hooks below and
    /// ignores kinds it does not recognize.
    fn on_event(&mut self, event: Event, ctx: &mut AppContext) {
        match event {
            Event::Closed => self.on_close(ctx),
            Event::Resized { width, height } => {
                self.on_resize(PixelSize::clamped(width.into(), height.into()), ctx)
            }
            Event::KeyPressed { key, modifiers } => self.on_key(key, modifiers, ctx),
            Event::MouseMoved { x, y } => self.on_mouse_moved(Vec2::new(x, y), ctx),
            Event::MouseButtonPressed { button, x, y } => {
                self.on_mouse_button(button, true, Vec2::new(x, y), ctx)
            }
            Event::MouseButtonReleased { button, x, y } => {
                self.on_mouse_button(button, false, Vec2::new(x, y), ctx)
            }
            other => trace!("{}: ignoring {:?}", self.name(), other),
        }
    }

    /// Window close request. Default: shut the application down.
    fn on_close(&mut self, ctx: &mut AppContext) {
        ctx.request_shutdown();
    }

    /// Window resized (dimensions already clamped to at least 1).
    ///
    /// Implementations apply the no-stretch policy to every owned viewport
    /// and refit the shared background.
    fn on_resize(&mut self, size: PixelSize, ctx: &mut AppContext);

    /// Key pressed. Default: no binding.
    fn on_key(&mut self, _key: KeyCode, _modifiers: Modifiers, _ctx: &mut AppContext) {}

    /// Cursor moved, in window pixels. Default: ignored.
    fn on_mouse_moved(&mut self, _position: Vec2, _ctx: &mut AppContext) {}

    /// Mouse button pressed or released, in window pixels. Default: ignored.
    fn on_mouse_button(
        &mut self,
        _button: MouseButton,
        _pressed: bool,
        _position: Vec2,
        _ctx: &mut AppContext,
    ) {
    }

    //--- Lifecycle --------------------------------------------------------

    /// Called once the screen becomes the active top after a push/replace.
    ///
    /// Default re-syncs to the current window size.
    fn on_enter(&mut self, ctx: &mut AppContext) {
        let size = ctx.window_size();
        self.on_resize(size, ctx);
    }

    /// Called when another screen is pushed on top of this one.
    fn on_pause(&mut self, _ctx: &mut AppContext) {}

    /// Called when this screen becomes active again after a pop.
    ///
    /// Default re-syncs to the current window size, which may have changed
    /// while the screen was dormant.
    fn on_resume(&mut self, ctx: &mut AppContext) {
        let size = ctx.window_size();
        self.on_resize(size, ctx);
    }

    /// Called right before the stack drops this screen.
    fn on_exit(&mut self, _ctx: &mut AppContext) {}
}
