//=========================================================================
// Menu Screen
//=========================================================================
//
// Entry screen: a single full-window view showing the background.
//
// Bindings:
//   Escape → shut the application down
//   Space  → push the editor on top
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::EditorScreen;
use crate::core::geometry::PixelSize;
use crate::core::input::{KeyCode, Modifiers};
use crate::core::render::Visual;
use crate::core::screen::Screen;
use crate::core::viewport::Viewport;
use crate::core::AppContext;

//=== MenuScreen ==========================================================

pub struct MenuScreen {
    view: Viewport,
}

impl MenuScreen {
    /// Creates the menu with its view sized to the current window.
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            view: Viewport::from_window_size(ctx.window_size()),
        }
    }

    pub fn view(&self) -> &Viewport {
        &self.view
    }
}

impl Screen for MenuScreen {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn update(&mut self, _dt: f64, _ctx: &mut AppContext) {}

    fn draw(&mut self, _dt: f64, ctx: &mut AppContext) {
        ctx.surface.clear(ctx.clear_color);

        let background = ctx.background;
        ctx.surface.bind(&self.view).draw(Visual::Sprite(background));
    }

    fn on_resize(&mut self, size: PixelSize, ctx: &mut AppContext) {
        self.view.apply_no_stretch(size);
        ctx.background.fit_to_viewport(&self.view, size);
    }

    fn on_key(&mut self, key: KeyCode, _modifiers: Modifiers, ctx: &mut AppContext) {
        match key {
            KeyCode::Escape => ctx.request_shutdown(),
            KeyCode::Space => {
                info!("Opening editor");
                let editor = EditorScreen::new(ctx);
                ctx.push(editor);
            }
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Vec2;
    use crate::core::render::{RecordingSurface, Sprite, TextureId};
    use std::collections::VecDeque;

    fn context(window: PixelSize) -> AppContext {
        AppContext::new(
            Box::new(RecordingSurface::new(window)),
            Box::new(VecDeque::new()),
            Sprite::new(TextureId(1), PixelSize::new(1600, 1200)),
        )
    }

    #[test]
    fn view_starts_one_to_one_with_window() {
        let ctx = context(PixelSize::new(1024, 768));
        let menu = MenuScreen::new(&ctx);

        assert_eq!(menu.view().size(), Vec2::new(1024.0, 768.0));
        assert_eq!(menu.view().center(), Vec2::new(512.0, 384.0));
    }

    #[test]
    fn resize_keeps_center_and_refits_background() {
        let mut ctx = context(PixelSize::new(1024, 768));
        let mut menu = MenuScreen::new(&ctx);

        menu.on_resize(PixelSize::new(800, 600), &mut ctx);

        assert_eq!(menu.view().size(), Vec2::new(800.0, 600.0));
        assert_eq!(menu.view().center(), Vec2::new(512.0, 384.0));
        assert_eq!(ctx.background.scale(), Vec2::new(0.5, 0.5));
        assert_eq!(ctx.background.position(), Vec2::new(112.0, 84.0));
    }

    #[test]
    fn escape_requests_shutdown() {
        let mut ctx = context(PixelSize::new(640, 480));
        let mut menu = MenuScreen::new(&ctx);

        menu.on_key(KeyCode::Escape, Modifiers::NONE, &mut ctx);

        assert!(ctx.is_shutdown_requested());
        assert_eq!(ctx.pending_transitions(), 0);
    }

    #[test]
    fn space_queues_exactly_one_push() {
        let mut ctx = context(PixelSize::new(640, 480));
        let mut menu = MenuScreen::new(&ctx);

        menu.on_key(KeyCode::Space, Modifiers::NONE, &mut ctx);

        assert_eq!(ctx.pending_transitions(), 1);
        assert!(!ctx.is_shutdown_requested());
    }

    #[test]
    fn other_keys_are_unbound() {
        let mut ctx = context(PixelSize::new(640, 480));
        let mut menu = MenuScreen::new(&ctx);

        menu.on_key(KeyCode::KeyQ, Modifiers::CTRL, &mut ctx);

        assert_eq!(ctx.pending_transitions(), 0);
        assert!(!ctx.is_shutdown_requested());
    }
}
