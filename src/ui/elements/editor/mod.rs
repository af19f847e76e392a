// src/ui/elements/editor/mod.rs

pub mod main_editor;
pub mod state;
pub mod table_body;

pub use main_editor::prediction_table_editor_ui;
