//! The presentation layer: user actions, the views they produce, and the
//! terminal console that drives them.

pub mod action;
pub mod console;
pub mod render;

pub use action::{apply, Action, View};
pub use console::Console;
