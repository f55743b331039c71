//=========================================================================
// Sprite
//=========================================================================
//
// A positioned, scaled texture reference. Used for the shared full-window
// background; the texture's pixel contents live outside the core.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::{PixelSize, Rect, Vec2};
use crate::core::viewport::Viewport;

//=== TextureId ===========================================================

/// Opaque handle to a texture owned by the render backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

//=== Sprite ==============================================================

/// Textured quad positioned in world space.
///
/// Rendered extent is `native_size * scale`, anchored at `position`
/// (top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    texture: TextureId,
    native_size: PixelSize,
    position: Vec2,
    scale: Vec2,
}

impl Sprite {
    pub fn new(texture: TextureId, native_size: PixelSize) -> Self {
        Self {
            texture,
            native_size,
            position: Vec2::zero(),
            scale: Vec2::new(1.0, 1.0),
        }
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }

    pub fn native_size(&self) -> PixelSize {
        self.native_size
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Vec2::new(x, y);
    }

    pub fn set_scale(&mut self, sx: f64, sy: f64) {
        self.scale = Vec2::new(sx, sy);
    }

    /// World rectangle covered when drawn.
    pub fn world_bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.native_size.width() as f64 * self.scale.x,
            self.native_size.height() as f64 * self.scale.y,
        )
    }

    /// Stretches the sprite over the whole window as seen through `viewport`.
    ///
    /// Must run after the viewport has been resized for `window`, so the
    /// pixel (0,0) lookup uses the updated transform.
    pub fn fit_to_viewport(&mut self, viewport: &Viewport, window: PixelSize) {
        let origin = viewport.map_pixel_to_world(Vec2::zero(), window);
        self.set_position(origin.x, origin.y);
        self.set_scale(
            window.width() as f64 / self.native_size.width() as f64,
            window.height() as f64 / self.native_size.height() as f64,
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
