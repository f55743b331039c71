//=========================================================================
// Recording Surface
//=========================================================================
//
// Headless `RenderSurface` that keeps the calls of the current frame.
// Backs the demo binary (no GPU backend is bundled) and the test-suite.
//
// A `clear` starts a new frame and discards the previous frame's log, so
// a long-running demo does not accumulate history.
//
// The log lives behind a shared `DrawLog` handle: the surface itself is
// boxed into the application context, the handle stays with whoever wants
// to inspect what was drawn.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::RefCell;
use std::rc::Rc;

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::{RenderSurface, Visual};
use crate::core::geometry::{Color, PixelSize};
use crate::core::viewport::Viewport;

//=== DrawCall ============================================================

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Draw { viewport: Viewport, visual: Visual },
}

//=== DrawLog =============================================================

/// Shared view of a recording surface's current frame.
#[derive(Debug, Clone, Default)]
pub struct DrawLog {
    calls: Rc<RefCell<Vec<DrawCall>>>,
}

impl DrawLog {
    /// Calls received since the last clear (or [`take`](Self::take)).
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }

    /// Draw calls only, paired with the viewport each was issued through.
    pub fn draws(&self) -> Vec<(Viewport, Visual)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                DrawCall::Draw { viewport, visual } => Some((viewport.clone(), *visual)),
                DrawCall::Clear(_) => None,
            })
            .collect()
    }

    /// Takes the recorded calls, leaving the log empty.
    pub fn take(&self) -> Vec<DrawCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    fn record(&self, call: DrawCall) {
        self.calls.borrow_mut().push(call);
    }

    fn start_frame(&self) {
        self.calls.borrow_mut().clear();
    }
}

//=== RecordingSurface ====================================================

/// Render surface that records instead of rasterizing.
#[derive(Debug)]
pub struct RecordingSurface {
    size: PixelSize,
    log: DrawLog,
}

impl RecordingSurface {
    pub fn new(size: PixelSize) -> Self {
        Self {
            size,
            log: DrawLog::default(),
        }
    }

    /// Returns a handle to this surface's call log.
    pub fn log(&self) -> DrawLog {
        self.log.clone()
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        trace!(target: "render", "clear {:?}", color);
        self.log.start_frame();
        self.log.record(DrawCall::Clear(color));
    }

    fn draw(&mut self, viewport: &Viewport, visual: Visual) {
        trace!(target: "render", "draw {:?} via {:?}", visual, viewport);
        self.log.record(DrawCall::Draw {
            viewport: viewport.clone(),
            visual,
        });
    }

    fn pixel_size(&self) -> PixelSize {
        self.size
    }

    fn resize(&mut self, size: PixelSize) {
        self.size = size;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Rect;

    fn marker() -> Visual {
        Visual::Rect {
            bounds: Rect::new(0.0, 0.0, 1.0, 1.0),
            color: Color::WHITE,
        }
    }

    #[test]
    fn records_calls_in_order() {
        let mut surface = RecordingSurface::new(PixelSize::new(10, 10));
        let log = surface.log();
        let view = Viewport::from_window_size(surface.pixel_size());

        surface.clear(Color::BLACK);
        surface.draw(&view, marker());

        assert_eq!(
            log.calls(),
            vec![
                DrawCall::Clear(Color::BLACK),
                DrawCall::Draw { viewport: view, visual: marker() },
            ]
        );
    }

    #[test]
    fn take_empties_log() {
        let mut surface = RecordingSurface::new(PixelSize::new(10, 10));
        let log = surface.log();
        surface.clear(Color::BLACK);

        assert_eq!(log.take().len(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn clear_starts_new_frame() {
        let mut surface = RecordingSurface::new(PixelSize::new(10, 10));
        let log = surface.log();
        let view = Viewport::from_window_size(surface.pixel_size());

        surface.clear(Color::BLACK);
        surface.draw(&view, marker());
        surface.clear(Color::WHITE);

        assert_eq!(log.calls(), vec![DrawCall::Clear(Color::WHITE)]);
    }

    #[test]
    fn resize_updates_pixel_size() {
        let mut surface = RecordingSurface::new(PixelSize::new(10, 10));
        surface.resize(PixelSize::new(640, 480));
        assert_eq!(surface.pixel_size(), PixelSize::new(640, 480));
    }
}
