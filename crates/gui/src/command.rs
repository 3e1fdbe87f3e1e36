//! JSON command protocol for hosts driving the editor.
//!
//! Every command maps onto `SceneCanvas`; unknown ids and out-of-range drops
//! still succeed and report what happened in `data`.

use serde::{Deserialize, Serialize};
use shared::{Point2D, Product, RotateDirection, ScaleDirection};

use crate::canvas::{CanvasCommand, CommandOutcome, SceneCanvas};
use crate::catalog::validate_product;
use crate::dnd::{DragPayload, DropHandler};
use crate::error::{EditorError, EditorResult};
use crate::viewport::ScreenRect;

/// A command a host can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HostCommand {
    /// Release a dragged product at a screen point
    DropProduct {
        product: Product,
        #[serde(default)]
        client_offset: Option<Point2D>,
    },
    /// Place a product directly at scene coordinates
    PlaceProduct { product: Product, x: f64, y: f64 },
    /// Remove an item by ID
    Remove { id: String },
    Rotate {
        id: String,
        direction: RotateDirection,
    },
    Scale {
        id: String,
        direction: ScaleDirection,
    },
    /// Select an item by ID.
    Select { id: String },
    /// Clear selection.
    ClearSelection,
    /// Remove every item.
    Clear,
    ZoomIn,
    ZoomOut,
    ToggleLight,
    /// Report the visual bounds of the scene layer
    SetContainer {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },
    /// Report the unscaled bounds of the canvas root
    SetBounds {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },
    /// Inspect the scene: list all items.
    Inspect,
    /// Export the design records.
    SaveDesign,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn changed(outcome: CommandOutcome) -> serde_json::Value {
    serde_json::json!({ "changed": outcome != CommandOutcome::Ignored })
}

fn checked_rect(left: f64, top: f64, width: f64, height: f64) -> Result<ScreenRect, String> {
    if !(width >= 0.0 && height >= 0.0) {
        return Err(format!("Invalid rect size {width}x{height}"));
    }
    Ok(ScreenRect::new(left, top, width, height))
}

fn zoom_response(canvas: &mut SceneCanvas, command: CanvasCommand) -> CommandResponse {
    let mut data = changed(canvas.apply(command));
    data["zoom"] = serde_json::json!(canvas.zoom());
    CommandResponse::ok_with_data(data)
}

/// Execute a single command on the canvas.
pub fn execute_command(canvas: &mut SceneCanvas, cmd: HostCommand) -> CommandResponse {
    match cmd {
        HostCommand::DropProduct {
            product,
            client_offset,
        } => {
            if let Err(e) = validate_product(&product) {
                return CommandResponse::err(e.to_string());
            }
            let id = canvas.on_drop(&DragPayload::product(product), client_offset);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        HostCommand::PlaceProduct { product, x, y } => {
            if let Err(e) = validate_product(&product) {
                return CommandResponse::err(e.to_string());
            }
            let id = canvas.add(&product, x, y);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        HostCommand::Remove { id } => {
            let removed = canvas.remove(&id);
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        HostCommand::Rotate { id, direction } => {
            let outcome = canvas.apply(CanvasCommand::Rotate(id.clone(), direction));
            let rotation = canvas.items().get(&id).map(|item| item.rotation);
            let mut data = changed(outcome);
            data["rotation"] = serde_json::json!(rotation);
            CommandResponse::ok_with_data(data)
        }

        HostCommand::Scale { id, direction } => {
            let outcome = canvas.apply(CanvasCommand::Scale(id.clone(), direction));
            let scale = canvas.items().get(&id).map(|item| item.scale);
            let mut data = changed(outcome);
            data["scale"] = serde_json::json!(scale);
            CommandResponse::ok_with_data(data)
        }

        HostCommand::Select { id } => {
            canvas.apply(CanvasCommand::ClickItem(id.clone()));
            if canvas.selection() == Some(&id) {
                CommandResponse::ok_with_data(serde_json::json!({ "selected": id }))
            } else {
                CommandResponse::err(format!("No item with id {id}"))
            }
        }

        HostCommand::ClearSelection => {
            canvas.apply(CanvasCommand::ClickEmpty);
            CommandResponse::ok()
        }

        HostCommand::Clear => {
            let removed = canvas.items().len();
            canvas.apply(CanvasCommand::Clear);
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        HostCommand::ZoomIn => zoom_response(canvas, CanvasCommand::ZoomIn),

        HostCommand::ZoomOut => zoom_response(canvas, CanvasCommand::ZoomOut),

        HostCommand::ToggleLight => {
            canvas.apply(CanvasCommand::ToggleLight);
            CommandResponse::ok_with_data(serde_json::json!({ "light_mode": canvas.light_mode() }))
        }

        HostCommand::SetContainer {
            left,
            top,
            width,
            height,
        } => match checked_rect(left, top, width, height) {
            Ok(rect) => {
                canvas.set_container(rect);
                CommandResponse::ok()
            }
            Err(msg) => CommandResponse::err(msg),
        },

        HostCommand::SetBounds {
            left,
            top,
            width,
            height,
        } => match checked_rect(left, top, width, height) {
            Ok(rect) => {
                canvas.set_bounds(rect);
                CommandResponse::ok()
            }
            Err(msg) => CommandResponse::err(msg),
        },

        HostCommand::Inspect => {
            let snapshot = canvas.snapshot();
            let items: Vec<serde_json::Value> = snapshot
                .items
                .iter()
                .map(|item| {
                    serde_json::json!({
                        "id": item.id,
                        "product_id": item.product_id,
                        "name": item.name,
                        "x": item.position.x,
                        "y": item.position.y,
                        "rotation": item.rotation,
                        "scale": item.scale,
                        "z_index": item.z_index,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "item_count": items.len(),
                "items": items,
                "selection": snapshot.selection,
                "zoom": snapshot.zoom_level,
                "light_mode": snapshot.light_mode,
            }))
        }

        HostCommand::SaveDesign => match serde_json::to_value(canvas.save_design()) {
            Ok(records) => CommandResponse::ok_with_data(serde_json::json!({ "items": records })),
            Err(e) => CommandResponse::err(EditorError::Export(e).to_string()),
        },
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(canvas: &mut SceneCanvas, json: &str) -> EditorResult<CommandResponse> {
    let cmd: HostCommand = serde_json::from_str(json).map_err(EditorError::InvalidCommand)?;
    Ok(execute_command(canvas, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    canvas: &mut SceneCanvas,
    json: &str,
) -> EditorResult<Vec<CommandResponse>> {
    let cmds: Vec<HostCommand> = serde_json::from_str(json).map_err(EditorError::InvalidCommand)?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(canvas, cmd))
        .collect())
}
