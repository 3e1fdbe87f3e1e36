use std::sync::atomic::{AtomicU8, Ordering};

use crate::state::Language;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ru,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::Ru,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::En => 0,
            Lang::Ru => 1,
        },
        Ordering::Relaxed,
    );
}

/// Follow the language chosen in settings
pub fn sync_with(language: Language) {
    set_lang(match language {
        Language::English => Lang::En,
        Language::Russian => Lang::Ru,
    });
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Catalog panel ───────────────────────────────────
        "catalog.title" => if ru { "Каталог" } else { "Catalog" },
        "catalog.hint" => if ru { "Перетащите товар на холст" } else { "Drag a product onto the canvas" },
        "catalog.empty" => if ru { "Каталог пуст" } else { "Catalog is empty" },

        // ── Toolbar ─────────────────────────────────────────
        "toolbar.zoom_in" => if ru { "Приблизить  Ctrl+" } else { "Zoom in  Ctrl+" },
        "toolbar.zoom_out" => if ru { "Отдалить  Ctrl-" } else { "Zoom out  Ctrl-" },
        "toolbar.day" => if ru { "☀ День" } else { "☀ Day" },
        "toolbar.night" => if ru { "☾ Ночь" } else { "☾ Night" },
        "toolbar.light_hint" => if ru { "Переключить освещение  L" } else { "Toggle lighting  L" },
        "toolbar.fullscreen" => if ru { "На весь экран" } else { "Fullscreen" },
        "toolbar.exit_fullscreen" => if ru { "Выйти из полноэкранного режима" } else { "Exit fullscreen" },
        "toolbar.clear" => if ru { "Очистить" } else { "Clear" },
        "toolbar.clear_hint" => if ru { "Убрать все объекты" } else { "Remove all items" },
        "toolbar.save" => if ru { "Сохранить дизайн" } else { "Save design" },
        "toolbar.settings" => if ru { "Настройки" } else { "Settings" },
        "toolbar.catalog" => if ru { "Каталог" } else { "Catalog" },

        // ── Item toolbar ────────────────────────────────────
        "item.rotate_left" => if ru { "Повернуть влево  Shift+R" } else { "Rotate left  Shift+R" },
        "item.rotate_right" => if ru { "Повернуть вправо  R" } else { "Rotate right  R" },
        "item.scale_up" => if ru { "Увеличить  +" } else { "Scale up  +" },
        "item.scale_down" => if ru { "Уменьшить  -" } else { "Scale down  -" },
        "item.remove" => if ru { "Удалить  Del" } else { "Remove  Del" },

        // ── Status bar ──────────────────────────────────────
        "status.items" => if ru { "Объекты" } else { "Items" },
        "status.selected" => if ru { "Выбрано" } else { "Selected" },
        "status.ready" => if ru { "Готово" } else { "Ready" },
        "status.zoom" => if ru { "Масштаб" } else { "Zoom" },
        "status.dragging" => if ru { "Перетаскивание" } else { "Dragging" },
        "status.saved" => if ru { "Дизайн скопирован в буфер обмена" } else { "Design copied to clipboard" },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },
        "settings.language" => if ru { "Язык" } else { "Language" },
        "settings.canvas" => if ru { "Холст" } else { "Canvas" },
        "settings.bg_color" => if ru { "Цвет фона" } else { "Background color" },
        "settings.item_color" => if ru { "Цвет объектов" } else { "Item color" },
        "settings.sel_color" => if ru { "Цвет выделения" } else { "Selection color" },
        "settings.night_brightness" => if ru { "Яркость ночью" } else { "Night brightness" },
        "settings.apply" => if ru { "Применить" } else { "Apply" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}
