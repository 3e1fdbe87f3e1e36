//! Screen/scene coordinate transform, fullscreen capability and the render
//! model shared by every host (egui shell, wasm bridge, headless harness).

pub mod coords;
pub mod fullscreen;
pub mod render;

pub use coords::{ContainerRect, ScreenRect};
pub use fullscreen::{FullscreenHost, HeadlessFullscreen};
pub use render::{RenderFrame, RenderItem};
