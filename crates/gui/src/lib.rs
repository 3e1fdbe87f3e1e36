// Library crate: the placement engine, command protocol and headless harness.
// Desktop-specific modules (app, ui, i18n) stay in the binary crate; the wasm
// bridge links this library with the `native` feature off.

pub mod canvas;
pub mod catalog;
pub mod command;
pub mod dnd;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod harness;
pub mod state;
pub mod viewport;

pub use canvas::{CanvasCommand, SceneCanvas, SceneSnapshot};
pub use error::{EditorError, EditorResult};
