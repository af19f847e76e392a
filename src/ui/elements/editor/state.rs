// src/ui/elements/editor/state.rs
use bevy::prelude::*;

/// Per-window editor state that outlives a single frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct EditorWindowState {
    /// Set by the Add Row button; cleared once the new row is known.
    pub request_scroll_to_new_row: bool,
    /// One-shot scroll target consumed by the next table render.
    pub scroll_to_row_index: Option<usize>,
}
