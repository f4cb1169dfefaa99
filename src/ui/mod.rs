//! Terminal presentation loop.
//!
//! Split so the game-facing parts stay testable without a terminal:
//! - `palette`: colour table
//! - `view`: pure `Board` → `Frame` rendering and the `Presentation` context
//! - `input`: crossterm key events → `Input`
//! - `terminal`: raw mode, drawing and the blocking event loop

pub mod palette;
pub mod view;
pub mod input;
pub mod terminal;

pub use palette::{Palette, Rgb};
pub use view::{Frame, Line, Presentation, Span};
pub use input::{map_key, Input};
pub use terminal::{draw, run};
