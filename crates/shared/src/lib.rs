use serde::{Deserialize, Serialize};

/// Уникальный идентификатор размещённого объекта
pub type ItemId = String;

/// Идентификатор товара в каталоге (слабая ссылка)
pub type ProductId = String;

/// Габариты товара в сантиметрах
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Товар каталога. Ядро только читает эти записи.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// URL изображения
    pub image: String,
    pub dimensions: Dimensions,
}

/// 2D-точка (экранные или сценовые координаты, в зависимости от контекста)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Размер на сцене
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size2D {
    pub width: f64,
    pub height: f64,
}

/// Товар, размещённый на сцене
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItem {
    pub id: ItemId,
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub position: Point2D,
    pub size: Size2D,
    /// Градусы, кратные 90, в диапазоне [0, 360)
    pub rotation: i32,
    pub z_index: i32,
    /// Масштаб в диапазоне [0.5, 2.0]
    pub scale: f64,
}

/// Режим освещения сцены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightMode {
    #[default]
    Day,
    Night,
}

impl LightMode {
    pub fn toggled(self) -> Self {
        match self {
            LightMode::Day => LightMode::Night,
            LightMode::Night => LightMode::Day,
        }
    }
}

/// Направление поворота
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotateDirection {
    Left,
    Right,
}

impl RotateDirection {
    /// Знак шага поворота: вправо по часовой стрелке
    pub fn sign(self) -> i32 {
        match self {
            RotateDirection::Left => -1,
            RotateDirection::Right => 1,
        }
    }
}

/// Направление масштабирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleDirection {
    Up,
    Down,
}

impl ScaleDirection {
    pub fn sign(self) -> f64 {
        match self {
            ScaleDirection::Up => 1.0,
            ScaleDirection::Down => -1.0,
        }
    }
}

/// Тип перетаскиваемого объекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Product,
}

/// Плоская запись для «Сохранить дизайн»
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub id: ItemId,
    pub product_id: ProductId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: i32,
    pub z_index: i32,
    pub scale: f64,
}

impl From<&PlacedItem> for SavedItem {
    fn from(item: &PlacedItem) -> Self {
        Self {
            id: item.id.clone(),
            product_id: item.product_id.clone(),
            x: item.position.x,
            y: item.position.y,
            width: item.size.width,
            height: item.size.height,
            rotation: item.rotation,
            z_index: item.z_index,
            scale: item.scale,
        }
    }
}
