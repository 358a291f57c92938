//! Interaction state machine.
//!
//! | tool          | pointer down         | pointer move           | pointer up | arrow key |
//! |---------------|----------------------|------------------------|------------|-----------|
//! | select        | hit-test, (de)select | -                      | -          | -         |
//! | move          | start drag           | drag selected shape    | end drag   | nudge     |
//! | closest-point | -                    | move marker            | -          | -         |
//! | anything else | -                    | -                      | -          | -         |
//!
//! Every handler first reconciles drag and marker state with the active tool,
//! so switching tools mid-gesture never leaves a stale drag or marker behind.

use geotool_core::{InputEvent, Key};

use super::{DragState, Marker, Scene};
use crate::error::{SceneError, SceneResult};
use crate::model::Point;
use crate::shape::Direction;
use crate::tools::Tool;
use crate::viewport::Viewport;

fn arrow_direction(key: &Key) -> Option<Direction> {
    match key {
        Key::ArrowUp => Some(Direction::Up),
        Key::ArrowDown => Some(Direction::Down),
        Key::ArrowLeft => Some(Direction::Left),
        Key::ArrowRight => Some(Direction::Right),
        Key::Other(_) => None,
    }
}

impl Scene {
    fn require_viewport(&self) -> SceneResult<&Viewport> {
        self.viewport.as_ref().ok_or(SceneError::SurfaceNotAttached)
    }

    /// Drops drag and marker state that the active tool no longer allows.
    pub(super) fn sync_with_tool(&mut self) {
        let tool = self.active_tool();
        if tool != Tool::Move && self.drag.take().is_some() {
            tracing::debug!("Drag cancelled by switch to {}", tool);
        }
        if tool != Tool::ClosestPoint && self.marker.take().is_some() {
            tracing::debug!("Marker removed by switch to {}", tool);
        }
    }

    /// Dispatches one host input event.
    pub fn handle_input(&mut self, event: &InputEvent) -> SceneResult<()> {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(*x, *y),
            InputEvent::PointerMove { x, y } => self.pointer_move(*x, *y),
            InputEvent::PointerUp { x, y } => self.pointer_up(*x, *y),
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::Resize { width, height } => self.resize(*width, *height),
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> SceneResult<()> {
        self.require_viewport()?;
        self.sync_with_tool();

        match self.active_tool() {
            Tool::Select => self.select_at(x, y),
            Tool::Move => self.begin_drag(x, y),
            _ => Ok(()),
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> SceneResult<()> {
        let world = self.require_viewport()?.device_to_world(x, y);
        self.sync_with_tool();

        match self.active_tool() {
            Tool::Move => {
                if let Some(drag) = self.drag {
                    if let Some(shape) = self.store.get_mut(drag.shape_id) {
                        shape.set_position(world - drag.offset);
                    }
                }
            }
            Tool::ClosestPoint => self.probe(world),
            _ => {}
        }
        Ok(())
    }

    pub fn pointer_up(&mut self, _x: f64, _y: f64) -> SceneResult<()> {
        self.require_viewport()?;
        self.sync_with_tool();

        if let Some(drag) = self.drag.take() {
            tracing::debug!("Drag of {} finished", drag.shape_id);
        }
        Ok(())
    }

    pub fn key_down(&mut self, key: &Key) -> SceneResult<()> {
        self.require_viewport()?;
        self.sync_with_tool();

        if self.active_tool() != Tool::Move {
            return Ok(());
        }
        let (Some(direction), Some(id)) = (arrow_direction(key), self.selected_shape()) else {
            return Ok(());
        };
        let step = self.config.interaction.nudge_step;
        if let Some(shape) = self.store.get_mut(id) {
            shape.nudge(direction, step);
            tracing::trace!("Nudged {} {:?} to {}", id, direction, shape.position());
        }
        Ok(())
    }

    /// Rebuilds the projection for the new container size.
    pub fn resize(&mut self, width: f64, height: f64) -> SceneResult<()> {
        let viewport = self.viewport.as_mut().ok_or(SceneError::SurfaceNotAttached)?;
        viewport.set_canvas_size(width, height);
        let bounds = viewport.bounds();
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(bounds.width, bounds.height);
        }
        tracing::debug!("Viewport resized to {}x{}", bounds.width, bounds.height);
        Ok(())
    }

    fn select_at(&mut self, x: f64, y: f64) -> SceneResult<()> {
        let ray = self.require_viewport()?.device_to_ray(x, y);
        let hit = self.raycaster.first_hit(&ray, &self.store);
        let appearance = &self.config.appearance;

        let changed = self.selection.select(
            hit.map(|h| h.shape_id),
            &mut self.store,
            appearance.default_color,
            appearance.selected_color,
        );
        if !self.selection.has_selection() {
            self.marker = None;
        }
        if changed {
            match self.selection.selected_id() {
                Some(id) => tracing::debug!("Selected {}", id),
                None => tracing::debug!("Selection cleared"),
            }
        }
        Ok(())
    }

    fn begin_drag(&mut self, x: f64, y: f64) -> SceneResult<()> {
        let world = self.require_viewport()?.device_to_world(x, y);
        let Some(shape) = self.selected_shape().and_then(|id| self.store.get(id)) else {
            return Ok(());
        };

        let drag = DragState {
            shape_id: shape.id(),
            offset: world - shape.position(),
        };
        tracing::debug!("Drag of {} started, offset {}", drag.shape_id, drag.offset);
        self.drag = Some(drag);
        Ok(())
    }

    fn probe(&mut self, world: Point) {
        let Some(shape) = self.selected_shape().and_then(|id| self.store.get(id)) else {
            return;
        };
        let position = shape.nearest_boundary_point(world);
        if self.marker.is_none() {
            tracing::debug!("Marker created at {}", position);
        }
        self.marker = Some(Marker { position });
    }
}
