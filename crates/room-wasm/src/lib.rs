use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, DomRect, Element};

use room_editor_lib::catalog::validate_product;
use room_editor_lib::command::execute_json;
use room_editor_lib::dnd::{DragPayload, DropHandler};
use room_editor_lib::export::design_json;
use room_editor_lib::viewport::{FullscreenHost, ScreenRect};
use room_editor_lib::{EditorError, EditorResult, SceneCanvas};
use shared::{Point2D, Product};

/// Пишет предупреждение в консоль браузера
fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

fn to_js_error(e: EditorError) -> JsError {
    JsError::new(&e.to_string())
}

/// Разбирает и проверяет товар каталога из JSON
fn parse_product(product_json: &str) -> EditorResult<Product> {
    let product: Product =
        serde_json::from_str(product_json).map_err(|e| EditorError::Catalog(e.to_string()))?;
    validate_product(&product)?;
    Ok(product)
}

fn to_screen_rect(r: &DomRect) -> ScreenRect {
    ScreenRect::new(r.left(), r.top(), r.width(), r.height())
}

/// Ошибка полноэкранного режима для метода DOM `method`
fn fullscreen_error(method: &str, detail: &str) -> EditorError {
    EditorError::Fullscreen(format!("{method}: {detail}"))
}

/// Вызывает `requestFullscreen` / `exitFullscreen`. Браузер отклоняет запрос
/// через Promise, поэтому отказ ловится асинхронно и пишется в консоль.
fn call_fullscreen_method(target: &JsValue, method: &str) -> EditorResult<()> {
    let function: js_sys::Function = js_sys::Reflect::get(target, &JsValue::from_str(method))
        .ok()
        .and_then(|f| f.dyn_into().ok())
        .ok_or_else(|| EditorError::Fullscreen(format!("{method} is not supported")))?;
    let returned = function.call0(target).map_err(|e| {
        let error = fullscreen_error(method, &format!("{:?}", e));
        console_warn(&error.to_string());
        error
    })?;
    // Старые движки возвращают undefined вместо Promise
    if let Ok(promise) = returned.dyn_into::<js_sys::Promise>() {
        let method = method.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                console_warn(&fullscreen_error(&method, &format!("{:?}", e)).to_string());
            }
        });
    }
    Ok(())
}

fn document() -> Result<Document, JsError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsError::new("No document available"))
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, JsError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsError::new(&format!("Element '{}' not found", id)))
}

/// Полноэкранный режим через DOM. Состояние всегда читается из
/// `document.fullscreenElement`, браузер применяет запрос асинхронно.
struct DomFullscreen<'a> {
    document: Document,
    root: &'a Element,
}

impl FullscreenHost for DomFullscreen<'_> {
    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn request_fullscreen(&mut self) -> EditorResult<()> {
        call_fullscreen_method(self.root.as_ref(), "requestFullscreen")
    }

    fn exit_fullscreen(&mut self) -> EditorResult<()> {
        call_fullscreen_method(self.document.as_ref(), "exitFullscreen")
    }
}

/// Редактор комнаты для браузера: холст сцены плюс привязка к DOM
#[wasm_bindgen]
pub struct RoomEditor {
    canvas: SceneCanvas,
    /// Корневой элемент холста (для полноэкранного режима)
    root: Option<Element>,
    /// Масштабируемый слой сцены, его размеры уже учитывают zoom
    layer: Option<Element>,
}

impl Default for RoomEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl RoomEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RoomEditor {
        RoomEditor {
            canvas: SceneCanvas::new(),
            root: None,
            layer: None,
        }
    }

    /// Привязывает корневой элемент и слой сцены по их id
    pub fn attach(&mut self, root_id: &str, layer_id: &str) -> Result<(), JsError> {
        let document = document()?;
        self.root = Some(element_by_id(&document, root_id)?);
        self.layer = Some(element_by_id(&document, layer_id)?);
        self.measure();
        Ok(())
    }

    /// Перечитывает границы корня (без масштаба) и слоя сцены (с масштабом)
    pub fn measure(&mut self) {
        if let Some(root) = &self.root {
            self.canvas
                .set_bounds(to_screen_rect(&root.get_bounding_client_rect()));
        }
        if let Some(layer) = &self.layer {
            self.canvas
                .set_container(to_screen_rect(&layer.get_bounding_client_rect()));
        }
    }

    /// Выполняет JSON-команду и возвращает JSON-ответ
    pub fn execute(&mut self, command_json: &str) -> Result<String, JsError> {
        let response = execute_json(&mut self.canvas, command_json).map_err(to_js_error)?;
        serde_json::to_string(&response).map_err(|e| to_js_error(EditorError::Export(e)))
    }

    /// Начало перетаскивания товара из каталога
    pub fn drag_start(&mut self, product_json: &str) -> Result<(), JsError> {
        let product = parse_product(product_json).map_err(to_js_error)?;
        self.canvas.on_drag_start(&DragPayload::product(product));
        Ok(())
    }

    /// Отпускание товара в точке (x, y) окна. Без координат бросок отбрасывается.
    /// Возвращает id нового объекта или undefined.
    pub fn drop_product(
        &mut self,
        product_json: &str,
        x: Option<f64>,
        y: Option<f64>,
    ) -> Result<Option<String>, JsError> {
        let product = parse_product(product_json).map_err(to_js_error)?;
        self.measure();
        let offset = x.zip(y).map(|(x, y)| Point2D::new(x, y));
        Ok(self.canvas.on_drop(&DragPayload::product(product), offset))
    }

    /// Переключает полноэкранный режим корневого элемента
    pub fn toggle_fullscreen(&mut self) -> Result<(), JsError> {
        let Some(root) = &self.root else {
            console_warn("Fullscreen toggle before attach()");
            return Ok(());
        };
        let mut host = DomFullscreen {
            document: document()?,
            root,
        };
        self.canvas.toggle_fullscreen(&mut host);
        Ok(())
    }

    /// Текущее состояние полноэкранного режима (для подписи кнопки)
    pub fn is_fullscreen(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|d| d.fullscreen_element().is_some())
            .unwrap_or(false)
    }

    /// Id объектов в порядке добавления
    pub fn item_ids(&self) -> js_sys::Array {
        self.canvas
            .items()
            .iter()
            .map(|item| JsValue::from_str(&item.id))
            .collect()
    }

    pub fn zoom_percent(&self) -> u32 {
        self.canvas.view().zoom_percent()
    }

    /// Кадр для отрисовки в JSON
    pub fn render_frame(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.canvas.render())
            .map_err(|e| to_js_error(EditorError::Export(e)))
    }

    /// Снимок сцены в JSON
    pub fn snapshot(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.canvas.snapshot())
            .map_err(|e| to_js_error(EditorError::Export(e)))
    }

    /// «Сохранить дизайн»: плоский список записей
    pub fn save_design(&self) -> Result<String, JsError> {
        design_json(self.canvas.items()).map_err(to_js_error)
    }

    /// Версия сцены, растёт при каждом изменении объектов
    pub fn version(&self) -> f64 {
        self.canvas.version() as f64
    }
}

/// Проверяет и возвращает каталог в нормализованном JSON
#[wasm_bindgen]
pub fn load_catalog(catalog_json: &str) -> Result<String, JsError> {
    let products = room_editor_lib::catalog::parse_catalog(catalog_json).map_err(to_js_error)?;
    serde_json::to_string(&products).map_err(|e| to_js_error(EditorError::Export(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product() {
        let json = r#"{"id": "sofa", "name": "Sofa", "image": "/s.png",
            "dimensions": {"width": 180, "height": 200, "depth": 90}}"#;
        let product = parse_product(json).unwrap();
        assert_eq!(product.id, "sofa");
        assert_eq!(product.dimensions.height, 200.0);
    }

    #[test]
    fn test_parse_product_rejects_garbage() {
        assert!(matches!(parse_product("[]"), Err(EditorError::Catalog(_))));
    }

    #[test]
    fn test_parse_product_rejects_negative_dimensions() {
        let json = r#"{"id": "sofa", "name": "Sofa", "image": "/s.png",
            "dimensions": {"width": -180, "height": 200, "depth": 90}}"#;
        let err = parse_product(json).unwrap_err();
        assert!(err.to_string().contains("non-positive footprint"));
    }

    #[test]
    fn test_fullscreen_rejection_message() {
        let err = fullscreen_error("requestFullscreen", "NotAllowedError");
        assert!(matches!(err, EditorError::Fullscreen(_)));
        assert_eq!(
            err.to_string(),
            "Fullscreen request failed: requestFullscreen: NotAllowedError"
        );
    }
}
