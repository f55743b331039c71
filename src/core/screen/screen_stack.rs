//=========================================================================
// Screen Stack
//=========================================================================
//
// Owns screens and applies stack transitions with lifecycle callbacks.
//
// Screens are boxed and owned exclusively by the stack from push until
// they are popped, replaced, or cleared, at which point `on_exit` runs and
// the box is dropped. Screens below the top are dormant: kept alive but
// receiving no frame callbacks until a pop resumes them.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Screen, Transition};
use crate::core::AppContext;

//=== Screen Stack ========================================================

/// Stack of exclusively-owned screens; the top one is active.
pub struct ScreenStack {
    screens: Vec<Box<dyn Screen>>,
}

impl ScreenStack {
    //--- Construction -----------------------------------------------------

    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// The active screen, if any.
    pub fn top(&self) -> Option<&(dyn Screen + 'static)> {
        self.screens.last().map(|screen| screen.as_ref())
    }

    /// Names from bottom to top.
    pub fn names(&self) -> Vec<&'static str> {
        self.screens.iter().map(|screen| screen.name()).collect()
    }

    /// The active screen, for dispatching a frame callback.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty: callers must check for termination
    /// before dispatching.
    pub(crate) fn active_mut(&mut self) -> &mut (dyn Screen + 'static) {
        match self.screens.last_mut() {
            Some(screen) => screen.as_mut(),
            None => panic!("Screen callback dispatched with an empty screen stack"),
        }
    }

    //--- Stack Operations -------------------------------------------------

    /// Pauses the current top and makes `screen` active.
    pub fn push(&mut self, mut screen: Box<dyn Screen>, ctx: &mut AppContext) {
        if let Some(top) = self.screens.last_mut() {
            debug!("Pausing screen {}", top.name());
            top.on_pause(ctx);
        }

        debug!("Pushing screen {} (depth {})", screen.name(), self.screens.len() + 1);
        screen.on_enter(ctx);
        self.screens.push(screen);
    }

    /// Destroys the current top and resumes the one beneath it.
    pub fn pop(&mut self, ctx: &mut AppContext) {
        let Some(mut screen) = self.screens.pop() else {
            warn!("Attempted to pop an empty screen stack");
            return;
        };

        debug!("Popping screen {}", screen.name());
        screen.on_exit(ctx);
        drop(screen);

        if let Some(top) = self.screens.last_mut() {
            debug!("Resuming screen {}", top.name());
            top.on_resume(ctx);
        }
    }

    /// Destroys the current top and activates `screen` in its place.
    ///
    /// On an empty stack this behaves like a push.
    pub fn replace(&mut self, mut screen: Box<dyn Screen>, ctx: &mut AppContext) {
        match self.screens.pop() {
            Some(mut old) => {
                debug!("Replacing screen {} with {}", old.name(), screen.name());
                old.on_exit(ctx);
            }
            None => warn!("Replacing on an empty screen stack, pushing {}", screen.name()),
        }

        screen.on_enter(ctx);
        self.screens.push(screen);
    }

    /// Destroys every screen, top first.
    pub fn clear(&mut self, ctx: &mut AppContext) {
        debug!("Clearing {} screen(s)", self.screens.len());

        while let Some(mut screen) = self.screens.pop() {
            screen.on_exit(ctx);
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies every queued transition in FIFO order.
    ///
    /// Lifecycle hooks may queue further transitions; those are applied in
    /// the same call. A shutdown request clears the stack and discards
    /// anything still queued.
    pub(crate) fn apply_transitions(&mut self, ctx: &mut AppContext) {
        loop {
            let transitions = ctx.take_transitions();

            if ctx.is_shutdown_requested() {
                if !transitions.is_empty() {
                    debug!("Discarding {} transition(s) after shutdown", transitions.len());
                }
                drop(transitions);
                if !self.is_empty() {
                    self.clear(ctx);
                }
                // on_exit hooks may have queued more; they are moot now.
                drop(ctx.take_transitions());
                return;
            }

            if transitions.is_empty() {
                return;
            }

            for transition in transitions {
                match transition {
                    Transition::Push(screen) => self.push(screen, ctx),
                    Transition::Pop => self.pop(ctx),
                    Transition::Replace(screen) => self.replace(screen, ctx),
                }
            }
        }
    }
}

impl Default for ScreenStack {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::PixelSize;
    use crate::core::render::{RecordingSurface, Sprite, TextureId};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    //--- Test Fixtures ----------------------------------------------------

    type Journal = Rc<RefCell<Vec<String>>>;

    /// Screen that writes its lifecycle into a shared journal.
    struct Journaled {
        name: &'static str,
        journal: Journal,
        on_enter_push: Option<&'static str>,
    }

    impl Journaled {
        fn new(name: &'static str, journal: &Journal) -> Box<dyn Screen> {
            Box::new(Self {
                name,
                journal: journal.clone(),
                on_enter_push: None,
            })
        }

        fn log(&self, what: &str) {
            self.journal.borrow_mut().push(format!("{}:{}", self.name, what));
        }
    }

    impl Screen for Journaled {
        fn name(&self) -> &'static str {
            self.name
        }
        fn update(&mut self, _dt: f64, _ctx: &mut AppContext) {}
        fn draw(&mut self, _dt: f64, _ctx: &mut AppContext) {}
        fn on_resize(&mut self, _size: PixelSize, _ctx: &mut AppContext) {}

        fn on_enter(&mut self, ctx: &mut AppContext) {
            self.log("enter");
            if let Some(next) = self.on_enter_push.take() {
                ctx.push(Journaled {
                    name: next,
                    journal: self.journal.clone(),
                    on_enter_push: None,
                });
            }
        }
        fn on_pause(&mut self, _ctx: &mut AppContext) {
            self.log("pause");
        }
        fn on_resume(&mut self, _ctx: &mut AppContext) {
            self.log("resume");
        }
        fn on_exit(&mut self, _ctx: &mut AppContext) {
            self.log("exit");
        }
    }

    impl Drop for Journaled {
        fn drop(&mut self) {
            self.log("drop");
        }
    }

    fn context() -> AppContext {
        AppContext::new(
            Box::new(RecordingSurface::new(PixelSize::new(640, 480))),
            Box::new(VecDeque::new()),
            Sprite::new(TextureId(0), PixelSize::new(640, 480)),
        )
    }

    fn entries(journal: &Journal) -> Vec<String> {
        journal.borrow_mut().drain(..).collect()
    }

    //--- Stack Operation Tests --------------------------------------------

    #[test]
    fn push_pauses_previous_top() {
        let journal = Journal::default();
        let mut ctx = context();
        let mut stack = ScreenStack::new();

        stack.push(Journaled::new("menu", &journal), &mut ctx);
        stack.push(Journaled::new("editor", &journal), &mut ctx);

        assert_eq!(stack.names(), vec!["menu", "editor"]);
        assert_eq!(stack.top().map(|s| s.name()), Some("editor"));
        assert_eq!(entries(&journal), vec!["menu:enter", "menu:pause", "editor:enter"]);
    }

    #[test]
    fn pop_destroys_top_once_and_resumes_dormant() {
        let journal = Journal::default();
        let mut ctx = context();
        let mut stack = ScreenStack::new();
        stack.push(Journaled::new("menu", &journal), &mut ctx);
        stack.push(Journaled::new("editor", &journal), &mut ctx);
        entries(&journal);

        stack.pop(&mut ctx);

        assert_eq!(stack.names(), vec!["menu"]);
        assert_eq!(entries(&journal), vec!["editor:exit", "editor:drop", "menu:resume"]);
    }

    #[test]
    fn pop_on_empty_stack_is_noop() {
        let mut ctx = context();
        let mut stack = ScreenStack::new();
        stack.pop(&mut ctx);
        assert!(stack.is_empty());
    }

    #[test]
    fn replace_destroys_old_top_without_resuming_below() {
        let journal = Journal::default();
        let mut ctx = context();
        let mut stack = ScreenStack::new();
        stack.push(Journaled::new("base", &journal), &mut ctx);
        stack.push(Journaled::new("menu", &journal), &mut ctx);
        entries(&journal);

        stack.replace(Journaled::new("editor", &journal), &mut ctx);

        assert_eq!(stack.names(), vec!["base", "editor"]);
        assert_eq!(entries(&journal), vec!["menu:exit", "menu:drop", "editor:enter"]);
    }

    #[test]
    fn clear_exits_top_first() {
        let journal = Journal::default();
        let mut ctx = context();
        let mut stack = ScreenStack::new();
        stack.push(Journaled::new("a", &journal), &mut ctx);
        stack.push(Journaled::new("b", &journal), &mut ctx);
        entries(&journal);

        stack.clear(&mut ctx);

        assert!(stack.is_empty());
        assert_eq!(entries(&journal), vec!["b:exit", "b:drop", "a:exit", "a:drop"]);
    }

    #[test]
    fn dropping_stack_drops_each_screen_once() {
        let journal = Journal::default();
        let mut ctx = context();
        let mut stack = ScreenStack::new();
        stack.push(Journaled::new("a", &journal), &mut ctx);
        stack.push(Journaled::new("b", &journal), &mut ctx);
        entries(&journal);

        drop(stack);

        let drops: Vec<_> = entries(&journal).into_iter().filter(|e| e.ends_with(":drop")).collect();
        assert_eq!(drops.len(), 2);
    }

    #[test]
    #[should_panic(expected = "empty screen stack")]
    fn dispatch_on_empty_stack_panics() {
        let mut stack = ScreenStack::new();
        stack.active_mut();
    }

    //--- Transition Processing Tests --------------------------------------

    #[test]
    fn transitions_apply_in_fifo_order() {
        let journal = Journal::default();
        let mut ctx = context();
        let mut stack = ScreenStack::new();

        ctx.push(Journaled {
            name: "a",
            journal: journal.clone(),
            on_enter_push: None,
        });
        ctx.push(Journaled {
            name: "b",
            journal: journal.clone(),
            on_enter_push: None,
        });
        ctx.pop();
        stack.apply_transitions(&mut ctx);

        assert_eq!(stack.names(), vec!["a"]);
        assert_eq!(ctx.pending_transitions(), 0);
    }

    #[test]
    fn transitions_queued_by_hooks_are_applied_in_same_pass() {
        let journal = Journal::default();
        let mut ctx = context();
        let mut stack = ScreenStack::new();

        ctx.push(Journaled {
            name: "loader",
            journal: journal.clone(),
            on_enter_push: Some("menu"),
        });
        stack.apply_transitions(&mut ctx);

        assert_eq!(stack.names(), vec!["loader", "menu"]);
    }

    #[test]
    fn shutdown_clears_stack_and_discards_queue() {
        let journal = Journal::default();
        let mut ctx = context();
        let mut stack = ScreenStack::new();
        stack.push(Journaled::new("menu", &journal), &mut ctx);

        ctx.push(Journaled {
            name: "editor",
            journal: journal.clone(),
            on_enter_push: None,
        });
        ctx.request_shutdown();
        stack.apply_transitions(&mut ctx);

        assert!(stack.is_empty());
        let log = entries(&journal);
        assert!(!log.iter().any(|e| e == "editor:enter"));
        assert!(log.iter().any(|e| e == "editor:drop"));
        assert!(log.iter().any(|e| e == "menu:exit"));
    }
}
