//=========================================================================
// Viewport
//=========================================================================
//
// 2D camera mapping a rectangle of world coordinates onto a normalized
// region of a render target.
//
// Mapping (per axis, no rotation):
// ```text
//   target px region:  [rect.left * W, (rect.left + rect.width) * W)
//   world region:      [center - size / 2, center + size / 2)
//
//   world = center + ((pixel - px_left) / px_width - 0.5) * size
// ```
//
// No-stretch policy: on every resize the owner calls
// `apply_no_stretch(new_size)`, keeping one world unit per pixel.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::{PixelSize, Rect, Vec2};

//=== Viewport ============================================================

/// A camera over world space.
///
/// The viewport never looks up the render target it is drawn into: every
/// mapping takes the target size explicitly, so a screen with several
/// viewports can map through the one it actually means.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    center: Vec2,
    size: Vec2,
    rect: Rect,
}

impl Viewport {
    //--- Construction -----------------------------------------------------

    /// Creates a viewport covering the whole target.
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            size,
            rect: Rect::FULL,
        }
    }

    /// Creates a 1:1 viewport for a window: world extent equals the pixel
    /// extent and world origin sits at the window's top-left corner.
    pub fn from_window_size(window: PixelSize) -> Self {
        let size = window.as_vec2();
        Self::new(size * 0.5, size)
    }

    //--- Accessors --------------------------------------------------------

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Normalized region of the render target this viewport draws into.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    //--- Mutation ---------------------------------------------------------

    /// Sets the world extent shown. The center is left untouched.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Vec2::new(width, height);
    }

    /// Sets the world point shown at the middle of the viewport rect.
    pub fn set_center(&mut self, x: f64, y: f64) {
        self.center = Vec2::new(x, y);
    }

    /// Pans the camera by a world-space offset.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.center = self.center + Vec2::new(dx, dy);
    }

    /// Sets the normalized target region, e.g. `(0.5, 0.0, 0.5, 1.0)` for the
    /// right half of the window.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Applies the no-stretch resize policy: the new pixel dimensions become
    /// the world extent directly.
    pub fn apply_no_stretch(&mut self, window: PixelSize) {
        self.set_size(window.width() as f64, window.height() as f64);
    }

    //--- Coordinate Mapping -----------------------------------------------

    /// The viewport rect expressed in target pixels.
    pub fn pixel_rect(&self, target: PixelSize) -> Rect {
        let (w, h) = (target.width() as f64, target.height() as f64);
        Rect::new(
            self.rect.left * w,
            self.rect.top * h,
            self.rect.width * w,
            self.rect.height * h,
        )
    }

    /// The world rectangle currently visible through this viewport.
    pub fn visible_world_rect(&self) -> Rect {
        Rect::new(
            self.center.x - self.size.x * 0.5,
            self.center.y - self.size.y * 0.5,
            self.size.x,
            self.size.y,
        )
    }

    /// Maps a target pixel to the world coordinate shown there.
    pub fn map_pixel_to_world(&self, pixel: Vec2, target: PixelSize) -> Vec2 {
        let px = self.pixel_rect(target);
        Vec2::new(
            self.center.x + ((pixel.x - px.left) / px.width - 0.5) * self.size.x,
            self.center.y + ((pixel.y - px.top) / px.height - 0.5) * self.size.y,
        )
    }

    /// Maps a world coordinate to the target pixel it is drawn at.
    pub fn map_world_to_pixel(&self, world: Vec2, target: PixelSize) -> Vec2 {
        let px = self.pixel_rect(target);
        Vec2::new(
            px.left + ((world.x - self.center.x) / self.size.x + 0.5) * px.width,
            px.top + ((world.y - self.center.y) / self.size.y + 0.5) * px.height,
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
