pub mod scene;
pub mod selection;
pub mod settings;
pub mod view;

use shared::Product;

pub use scene::{item_display_name, short_id, ItemList, SceneState};
pub use selection::SelectionState;
pub use settings::{CanvasSettings, EditorSettings, Language, UiSettings};
pub use view::ViewState;

use crate::canvas::SceneCanvas;
use crate::dnd::DragSource;

/// Panel visibility flags
pub struct PanelVisibility {
    pub catalog: bool,
    pub status_bar: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            catalog: true,
            status_bar: true,
        }
    }
}

/// Combined application state
pub struct AppState {
    pub canvas: SceneCanvas,
    /// One drag source per catalog product, in catalog order
    pub catalog: Vec<DragSource>,
    pub panels: PanelVisibility,
    pub settings: EditorSettings,
    /// Show settings window
    pub show_settings_window: bool,
}

impl AppState {
    pub fn new(products: Vec<Product>, settings: EditorSettings) -> Self {
        let settings = settings.sanitized();
        let canvas = SceneCanvas::new().with_night_brightness(settings.canvas.night_brightness);
        Self {
            canvas,
            catalog: products.into_iter().map(DragSource::new).collect(),
            panels: PanelVisibility::default(),
            settings,
            show_settings_window: false,
        }
    }

    /// Push changed settings into the canvas
    pub fn apply_settings(&mut self) {
        self.settings = self.settings.clone().sanitized();
        self.canvas
            .set_night_brightness(self.settings.canvas.night_brightness);
    }

    /// Mark every catalog source as idle once a drag ended anywhere
    pub fn end_drags(&mut self) {
        for source in &mut self.catalog {
            source.end_drag();
        }
    }
}
