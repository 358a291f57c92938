use geotool_core::Color;

use crate::shape::ShapeId;
use crate::shape_store::ShapeStore;

/// Tracks the single selected shape and applies the two-state highlight.
///
/// The manager holds only the id of the selected shape; the shape itself
/// stays in the [`ShapeStore`]. On every change the previously selected shape
/// is recolored to the default color and the new one to the highlight color,
/// so a deselected shape always ends up at exactly the default color.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<ShapeId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected shape.
    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected_id
    }

    pub fn has_selection(&self) -> bool {
        self.selected_id.is_some()
    }

    /// Selects `id` (or nothing) and recolors the affected shapes.
    ///
    /// An id that is not in the store clears the selection. Returns true if
    /// the selected id changed.
    pub fn select(
        &mut self,
        id: Option<ShapeId>,
        store: &mut ShapeStore,
        default_color: Color,
        selected_color: Color,
    ) -> bool {
        let id = id.filter(|id| store.contains(*id));

        if let Some(previous) = self.selected_id {
            if let Some(shape) = store.get_mut(previous) {
                shape.set_color(default_color);
            }
        }
        if let Some(next) = id {
            if let Some(shape) = store.get_mut(next) {
                shape.set_color(selected_color);
            }
        }

        let changed = self.selected_id != id;
        self.selected_id = id;
        changed
    }
}
