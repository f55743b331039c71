//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use proscenium::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};

// Application and screens
pub use crate::core::screen::Screen;
pub use crate::core::{AppContext, Application, FrameStatus};
pub use crate::screens::{EditorScreen, MenuScreen};

// Geometry and cameras
pub use crate::core::geometry::{Color, PixelSize, Rect, Vec2};
pub use crate::core::viewport::Viewport;

// Rendering
pub use crate::core::render::{RenderSurface, Sprite, TextureId, Visual};

// Input
pub use crate::core::input::{Event, KeyCode, Modifiers, MouseButton};
