//=========================================================================
// Render Collaborators
//=========================================================================
//
// Interface between screens and whatever actually puts pixels on the
// window. The core never talks to a graphics API directly.
//
// Architecture:
// ```text
//   Screen::draw()
//     └─ ctx.surface.bind(&viewport)  ──>  ViewportPass
//          └─ pass.draw(visual)       ──>  RenderSurface::draw(&viewport, visual)
// ```
//
// There is no ambient "current view": every draw call carries the viewport
// it was issued through, so multi-viewport screens stay unambiguous.
//
//=========================================================================

//=== Module Declarations =================================================

mod recording;
mod sprite;

//=== Public API ==========================================================

pub use recording::{DrawCall, DrawLog, RecordingSurface};
pub use sprite::{Sprite, TextureId};

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Color, PixelSize, Rect, Vec2};
use crate::core::viewport::Viewport;

//=== Visual ==============================================================

/// Something a render surface knows how to draw, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visual {
    /// A textured quad.
    Sprite(Sprite),

    /// A solid rectangle.
    Rect { bounds: Rect, color: Color },
}

//=== RenderSurface =======================================================

/// A render target owned by the application and shared by every screen.
///
/// Implementations are supplied by the embedding program (a GPU backend,
/// a software rasterizer, or [`RecordingSurface`] for headless runs).
pub trait RenderSurface {
    /// Clears the whole target.
    fn clear(&mut self, color: Color);

    /// Draws a visual through the given viewport.
    fn draw(&mut self, viewport: &Viewport, visual: Visual);

    /// Current target extent in pixels.
    fn pixel_size(&self) -> PixelSize;

    /// Called by the platform layer when the OS window changes size.
    fn resize(&mut self, size: PixelSize);
}

impl<'s> dyn RenderSurface + 's {
    /// Binds a viewport for a run of draw calls.
    pub fn bind<'a>(&'a mut self, viewport: &'a Viewport) -> ViewportPass<'a> {
        ViewportPass {
            surface: self,
            viewport,
        }
    }
}

//=== ViewportPass ========================================================

/// A render surface with one viewport bound.
///
/// Binding again (on the surface) after this pass is dropped overrides the
/// viewport for subsequent draws; there is no blending between viewports.
pub struct ViewportPass<'a> {
    surface: &'a mut dyn RenderSurface,
    viewport: &'a Viewport,
}

impl<'a> ViewportPass<'a> {
    pub fn draw(&mut self, visual: Visual) {
        self.surface.draw(self.viewport, visual);
    }

    /// Maps a window pixel to world space through the bound viewport.
    pub fn map_pixel_to_world(&self, pixel: Vec2) -> Vec2 {
        self.viewport
            .map_pixel_to_world(pixel, self.surface.pixel_size())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
