pub mod canvas;
pub mod card;
pub mod color_picker;
pub mod engine_ext;
pub mod header;
pub mod menu_bar;
pub mod panels;
pub mod slider;
