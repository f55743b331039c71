//=========================================================================
// Application Context
//=========================================================================
//
// Shared resources handed to screens during their callbacks.
//
// Contains:
// - surface: the render target every screen draws into
// - background: the full-window sprite every screen keeps fitted
// - events: pending window/input events (drained by the active screen)
// - transitions: stack changes requested by the active screen
//
// Screens only ever hold `&mut AppContext` for the duration of a single
// callback, so they cannot keep the application (or each other) alive.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Color, PixelSize};
use crate::core::input::{Event, EventSource};
use crate::core::render::{RenderSurface, Sprite};
use crate::core::screen::{Screen, Transition, TransitionQueue};

//=== AppContext ==========================================================

/// Shared context accessible to screens.
pub struct AppContext {
    /// Render target shared by all screens.
    pub surface: Box<dyn RenderSurface>,

    /// Full-window background visual shared by all screens.
    pub background: Sprite,

    /// Color the active screen clears the surface with.
    pub clear_color: Color,

    events: Box<dyn EventSource>,
    transitions: TransitionQueue,
    shutdown_requested: bool,
}

impl AppContext {
    //--- Construction -----------------------------------------------------

    pub fn new(
        surface: Box<dyn RenderSurface>,
        events: Box<dyn EventSource>,
        background: Sprite,
    ) -> Self {
        Self {
            surface,
            background,
            clear_color: Color::BLACK,
            events,
            transitions: TransitionQueue::new(),
            shutdown_requested: false,
        }
    }

    //--- Window -----------------------------------------------------------

    /// Current window extent in pixels.
    pub fn window_size(&self) -> PixelSize {
        self.surface.pixel_size()
    }

    //--- Events -----------------------------------------------------------

    /// Returns the oldest pending event.
    ///
    /// A `Resized` event updates the surface's pixel size before it is
    /// returned, so anything a screen constructs while handling it already
    /// sees the new window size.
    pub fn poll_event(&mut self) -> Option<Event> {
        let event = self.events.poll_event()?;
        trace!(target: "input", "{:?}", event);

        if let Event::Resized { width, height } = event {
            let size = PixelSize::clamped(width.into(), height.into());
            self.surface.resize(size);
        }

        Some(event)
    }

    //--- Transition Requests ----------------------------------------------

    /// Requests that `screen` be pushed on top of the active one.
    pub fn push<S: Screen + 'static>(&mut self, screen: S) {
        self.request(Transition::Push(Box::new(screen)));
    }

    /// Requests that the active screen be replaced by `screen`.
    pub fn replace<S: Screen + 'static>(&mut self, screen: S) {
        self.request(Transition::Replace(Box::new(screen)));
    }

    /// Requests that the active screen be popped.
    pub fn pop(&mut self) {
        self.request(Transition::Pop);
    }

    /// Requests application shutdown.
    ///
    /// Shutdown is final: the stack is cleared once the current callback
    /// returns and any other pending or later transition is discarded.
    pub fn request_shutdown(&mut self) {
        if !self.shutdown_requested {
            info!("Shutdown requested");
        }
        self.shutdown_requested = true;
    }

    /// Whether shutdown has been requested.
    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested
    }

    /// Number of transitions waiting to be applied.
    pub fn pending_transitions(&self) -> usize {
        self.transitions.len()
    }

    fn request(&mut self, transition: Transition) {
        if self.shutdown_requested {
            debug!("Ignoring {:?} after shutdown request", transition);
            return;
        }
        debug!("Queued {:?}", transition);
        self.transitions.push(transition);
    }

    pub(crate) fn take_transitions(&mut self) -> Vec<Transition> {
        self.transitions.take()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{RecordingSurface, TextureId};
    use std::collections::VecDeque;

    fn context(events: Vec<Event>) -> AppContext {
        AppContext::new(
            Box::new(RecordingSurface::new(PixelSize::new(1024, 768))),
            Box::new(VecDeque::from(events)),
            Sprite::new(TextureId(0), PixelSize::new(1024, 768)),
        )
    }

    #[test]
    fn resize_event_updates_window_size_when_polled() {
        let mut ctx = context(vec![Event::Resized { width: 800, height: 600 }]);
        assert_eq!(ctx.window_size(), PixelSize::new(1024, 768));

        ctx.poll_event();
        assert_eq!(ctx.window_size(), PixelSize::new(800, 600));
    }

    #[test]
    fn degenerate_resize_is_clamped() {
        let mut ctx = context(vec![Event::Resized { width: 0, height: -5 }]);
        ctx.poll_event();
        assert_eq!(ctx.window_size(), PixelSize::new(1, 1));
    }

    #[test]
    fn requests_after_shutdown_are_discarded() {
        let mut ctx = context(vec![]);
        ctx.pop();
        ctx.request_shutdown();
        ctx.pop();

        assert!(ctx.is_shutdown_requested());
        assert_eq!(ctx.pending_transitions(), 1);
    }

    #[test]
    fn poll_on_empty_queue_returns_none() {
        let mut ctx = context(vec![]);
        assert_eq!(ctx.poll_event(), None);
    }
}
