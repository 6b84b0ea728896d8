//! UI components for CheatNotes
//!
//! Panels draw from a [`ViewSnapshot`](crate::core::navigator::ViewSnapshot)
//! and report what was clicked. They never touch the stores directly.

pub mod category_detail;
pub mod dialogs;
pub mod language_list;
pub mod prompt;
pub mod status_bar;
pub mod toolbar;
