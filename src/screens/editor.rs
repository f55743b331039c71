//=========================================================================
// Editor Screen
//=========================================================================
//
// Two-viewport screen: a pannable world camera and a HUD camera that
// stays locked to the window.
//
// Draw order:
//   1. clear
//   2. hud_view:   background, HUD bar
//   3. world_view: origin marker
//
// Bindings:
//   Middle-drag → pan the world camera (1 pixel = 1 world unit)
//   Backspace   → pop back to the screen underneath
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Color, PixelSize, Rect, Vec2};
use crate::core::input::{KeyCode, Modifiers, MouseButton};
use crate::core::render::Visual;
use crate::core::screen::Screen;
use crate::core::viewport::Viewport;
use crate::core::AppContext;

//=== Constants ===========================================================

const HUD_BAR_HEIGHT: f64 = 24.0;
const HUD_BAR_COLOR: Color = Color::rgb(32, 36, 48);

const ORIGIN_MARKER: Rect = Rect::new(-4.0, -4.0, 8.0, 8.0);
const ORIGIN_MARKER_COLOR: Color = Color::rgb(224, 64, 64);

//=== EditorScreen ========================================================

pub struct EditorScreen {
    world_view: Viewport,
    hud_view: Viewport,

    /// Last cursor position while a middle-button drag is in progress.
    panning: Option<Vec2>,
}

impl EditorScreen {
    /// Creates the editor with both views sized to the current window.
    pub fn new(ctx: &AppContext) -> Self {
        let window = ctx.window_size();
        Self {
            world_view: Viewport::from_window_size(window),
            hud_view: Viewport::from_window_size(window),
            panning: None,
        }
    }

    pub fn world_view(&self) -> &Viewport {
        &self.world_view
    }

    pub fn hud_view(&self) -> &Viewport {
        &self.hud_view
    }

    pub fn is_panning(&self) -> bool {
        self.panning.is_some()
    }
}

impl Screen for EditorScreen {
    fn name(&self) -> &'static str {
        "editor"
    }

    fn update(&mut self, _dt: f64, _ctx: &mut AppContext) {}

    fn draw(&mut self, _dt: f64, ctx: &mut AppContext) {
        ctx.surface.clear(ctx.clear_color);

        let background = ctx.background;
        {
            let mut hud = ctx.surface.bind(&self.hud_view);
            hud.draw(Visual::Sprite(background));

            let visible = self.hud_view.visible_world_rect();
            hud.draw(Visual::Rect {
                bounds: Rect::new(visible.left, visible.top, visible.width, HUD_BAR_HEIGHT),
                color: HUD_BAR_COLOR,
            });
        }

        ctx.surface.bind(&self.world_view).draw(Visual::Rect {
            bounds: ORIGIN_MARKER,
            color: ORIGIN_MARKER_COLOR,
        });
    }

    fn on_resize(&mut self, size: PixelSize, ctx: &mut AppContext) {
        self.world_view.apply_no_stretch(size);
        self.hud_view.apply_no_stretch(size);
        ctx.background.fit_to_viewport(&self.hud_view, size);
    }

    fn on_key(&mut self, key: KeyCode, _modifiers: Modifiers, ctx: &mut AppContext) {
        if key == KeyCode::Backspace {
            info!("Leaving editor");
            ctx.pop();
        }
    }

    fn on_mouse_moved(&mut self, position: Vec2, _ctx: &mut AppContext) {
        if let Some(last) = self.panning {
            let delta = position - last;
            self.world_view.move_by(-delta.x, -delta.y);
            self.panning = Some(position);
        }
    }

    fn on_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        position: Vec2,
        _ctx: &mut AppContext,
    ) {
        if button != MouseButton::Middle {
            return;
        }

        if pressed {
            self.panning = Some(position);
        } else if self.panning.take().is_some() {
            debug!("Pan ended at world center {:?}", self.world_view.center());
        }
    }

    fn on_pause(&mut self, _ctx: &mut AppContext) {
        self.panning = None;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{RecordingSurface, Sprite, TextureId};
    use std::collections::VecDeque;

    fn context(window: PixelSize) -> AppContext {
        AppContext::new(
            Box::new(RecordingSurface::new(window)),
            Box::new(VecDeque::new()),
            Sprite::new(TextureId(1), PixelSize::new(1024, 768)),
        )
    }

    #[test]
    fn both_views_follow_resize() {
        let mut ctx = context(PixelSize::new(1024, 768));
        let mut editor = EditorScreen::new(&ctx);

        editor.on_resize(PixelSize::new(800, 600), &mut ctx);

        assert_eq!(editor.world_view().size(), Vec2::new(800.0, 600.0));
        assert_eq!(editor.hud_view().size(), Vec2::new(800.0, 600.0));
        assert_eq!(ctx.background.scale(), Vec2::new(0.78125, 0.78125));
    }

    #[test]
    fn middle_drag_pans_world_only() {
        let mut ctx = context(PixelSize::new(640, 480));
        let mut editor = EditorScreen::new(&ctx);

        editor.on_mouse_button(MouseButton::Middle, true, Vec2::new(100.0, 100.0), &mut ctx);
        editor.on_mouse_moved(Vec2::new(130.0, 90.0), &mut ctx);
        editor.on_mouse_moved(Vec2::new(140.0, 90.0), &mut ctx);
        editor.on_mouse_button(MouseButton::Middle, false, Vec2::new(140.0, 90.0), &mut ctx);
        editor.on_mouse_moved(Vec2::new(500.0, 500.0), &mut ctx);

        assert_eq!(editor.world_view().center(), Vec2::new(280.0, 250.0));
        assert_eq!(editor.hud_view().center(), Vec2::new(320.0, 240.0));
        assert!(!editor.is_panning());
    }

    #[test]
    fn other_buttons_do_not_pan() {
        let mut ctx = context(PixelSize::new(640, 480));
        let mut editor = EditorScreen::new(&ctx);

        editor.on_mouse_button(MouseButton::Left, true, Vec2::new(0.0, 0.0), &mut ctx);
        editor.on_mouse_moved(Vec2::new(50.0, 50.0), &mut ctx);

        assert_eq!(editor.world_view().center(), Vec2::new(320.0, 240.0));
    }

    #[test]
    fn pause_cancels_drag() {
        let mut ctx = context(PixelSize::new(640, 480));
        let mut editor = EditorScreen::new(&ctx);

        editor.on_mouse_button(MouseButton::Middle, true, Vec2::new(10.0, 10.0), &mut ctx);
        editor.on_pause(&mut ctx);

        assert!(!editor.is_panning());
    }

    #[test]
    fn escape_is_unbound_and_backspace_pops() {
        let mut ctx = context(PixelSize::new(640, 480));
        let mut editor = EditorScreen::new(&ctx);

        editor.on_key(KeyCode::Escape, Modifiers::NONE, &mut ctx);
        assert_eq!(ctx.pending_transitions(), 0);
        assert!(!ctx.is_shutdown_requested());

        editor.on_key(KeyCode::Backspace, Modifiers::NONE, &mut ctx);
        assert_eq!(ctx.pending_transitions(), 1);
    }

    #[test]
    fn hud_bar_sits_at_top_left_of_window() {
        let mut ctx = context(PixelSize::new(640, 480));
        let log = {
            let surface = RecordingSurface::new(PixelSize::new(640, 480));
            let log = surface.log();
            ctx.surface = Box::new(surface);
            log
        };
        let mut editor = EditorScreen::new(&ctx);
        editor.on_resize(ctx.window_size(), &mut ctx);

        editor.draw(0.0, &mut ctx);

        let draws = log.draws();
        assert_eq!(draws.len(), 3);
        assert_eq!(draws[0].0, *editor.hud_view());
        assert_eq!(
            draws[1].1,
            Visual::Rect {
                bounds: Rect::new(0.0, 0.0, 640.0, HUD_BAR_HEIGHT),
                color: HUD_BAR_COLOR,
            }
        );
        assert_eq!(draws[2].0, *editor.world_view());
    }
}
