mod app;
pub mod i18n;
mod ui;

// Re-export library modules so that `crate::state`, `crate::viewport`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use room_editor_lib::canvas;
pub use room_editor_lib::catalog;
pub use room_editor_lib::dnd;
pub use room_editor_lib::export;
pub use room_editor_lib::state;
pub use room_editor_lib::viewport;

use app::RoomApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "room_editor=info,room_editor_lib=info".into()),
        )
        .init();

    // Parse --catalog <path> argument
    let products = parse_catalog_arg().unwrap_or_else(catalog::demo_catalog);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Room Editor")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "room-editor",
        native_options,
        Box::new(move |cc| Ok(Box::new(RoomApp::new(cc, products)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_catalog_arg() -> Option<Vec<shared::Product>> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--catalog" && i + 1 < args.len() {
            let path = &args[i + 1];
            match std::fs::read_to_string(path) {
                Ok(json) => match catalog::parse_catalog(&json) {
                    Ok(products) => {
                        tracing::info!("Loaded catalog from {path}");
                        return Some(products);
                    }
                    Err(e) => {
                        tracing::warn!("Rejected catalog {path}, using demo catalog: {e}");
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read catalog file {path}: {e}");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
