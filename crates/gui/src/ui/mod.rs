pub mod canvas_view;
pub mod catalog_panel;
pub mod status_bar;
pub mod toolbar;
