//=========================================================================
// Built-in Screens
//=========================================================================
//
// Two concrete screens over the core `Screen` trait:
//
//   MenuScreen    ──Space──>    EditorScreen
//       ↑                            │
//       └──────────Backspace─────────┘
//
// The menu stays dormant underneath the editor and resumes when the editor
// is popped.
//
//=========================================================================

mod editor;
mod menu;

pub use editor::EditorScreen;
pub use menu::MenuScreen;
