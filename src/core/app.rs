//=========================================================================
// Application
//=========================================================================
//
// Owns the screen stack and the shared context, and drives one frame at a
// time on the active screen.
//
// Frame flow:
// ```text
//   run_frame(dt)
//     ├─ stack empty? ───────────────────────────> Terminated
//     ├─ active.handle_input(ctx) ─> apply transitions ─> empty? Terminated
//     ├─ active.update(dt, ctx)   ─> apply transitions ─> empty? Terminated
//     └─ active.draw(dt, ctx)     ─> apply transitions ─> Running/Terminated
// ```
//
// "Active" is re-read after every transition pass, so a screen pushed
// during input already receives this frame's update and draw.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::context::AppContext;
use crate::core::screen::{Screen, ScreenStack};

//=== FrameStatus =========================================================

/// Outcome of a single [`Application::run_frame`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// At least one screen remains; keep calling `run_frame`.
    Running,

    /// The stack is empty (shutdown or last screen popped).
    Terminated,
}

//=== Application =========================================================

/// Screen stack plus the context its screens share.
pub struct Application {
    stack: ScreenStack,
    context: AppContext,
}

impl Application {
    //--- Construction -----------------------------------------------------

    /// Creates an application with an empty stack.
    ///
    /// Push the first screen with [`push_state`](Self::push_state) before
    /// running frames.
    pub fn new(context: AppContext) -> Self {
        Self {
            stack: ScreenStack::new(),
            context,
        }
    }

    //--- Stack Control ----------------------------------------------------

    /// Makes `screen` the active top, pausing the previous one.
    ///
    /// Ignored once shutdown has been requested.
    pub fn push_state<S: Screen + 'static>(&mut self, screen: S) {
        if self.context.is_shutdown_requested() {
            warn!("Ignoring push of {} after shutdown", screen.name());
            return;
        }
        self.stack.push(Box::new(screen), &mut self.context);
        self.stack.apply_transitions(&mut self.context);
    }

    /// Destroys the active screen and resumes the one beneath it.
    pub fn pop_state(&mut self) {
        self.stack.pop(&mut self.context);
        self.stack.apply_transitions(&mut self.context);
    }

    /// Destroys the active screen and activates `screen` in its place.
    ///
    /// Ignored once shutdown has been requested.
    pub fn change_state<S: Screen + 'static>(&mut self, screen: S) {
        if self.context.is_shutdown_requested() {
            warn!("Ignoring change to {} after shutdown", screen.name());
            return;
        }
        self.stack.replace(Box::new(screen), &mut self.context);
        self.stack.apply_transitions(&mut self.context);
    }

    //--- Queries ----------------------------------------------------------

    /// Whether any screen remains to run.
    pub fn is_running(&self) -> bool {
        !self.stack.is_empty() && !self.context.is_shutdown_requested()
    }

    pub fn screen_count(&self) -> usize {
        self.stack.len()
    }

    /// Name of the active screen, if any.
    pub fn active_screen_name(&self) -> Option<&'static str> {
        self.stack.top().map(|screen| screen.name())
    }

    /// Screen names from bottom to top.
    pub fn screen_names(&self) -> Vec<&'static str> {
        self.stack.names()
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut AppContext {
        &mut self.context
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one frame on the active screen.
    ///
    /// `dt` is the elapsed time in seconds since the previous frame and
    /// must be non-negative (0 is allowed).
    pub fn run_frame(&mut self, dt: f64) -> FrameStatus {
        debug_assert!(dt >= 0.0, "Frame delta must be non-negative, got {}", dt);

        if self.stack.is_empty() {
            return FrameStatus::Terminated;
        }

        trace!("Frame dt={:.4} on {:?}", dt, self.active_screen_name());

        self.stack.active_mut().handle_input(&mut self.context);
        if self.settle() == FrameStatus::Terminated {
            return FrameStatus::Terminated;
        }

        self.stack.active_mut().update(dt, &mut self.context);
        if self.settle() == FrameStatus::Terminated {
            return FrameStatus::Terminated;
        }

        self.stack.active_mut().draw(dt, &mut self.context);
        self.settle()
    }

    /// Applies pending transitions and reports whether any screen is left.
    fn settle(&mut self) -> FrameStatus {
        self.stack.apply_transitions(&mut self.context);

        if self.stack.is_empty() {
            info!("Screen stack empty, application terminated");
            FrameStatus::Terminated
        } else {
            FrameStatus::Running
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
