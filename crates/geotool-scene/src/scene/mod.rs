//! # Scene
//!
//! The scene owns the shape collection, the selection, the drag and marker
//! state and the projection. It reacts to input for whatever tool the shell
//! has made active, and draws the full collection once per frame.
//!
//! ## Lifecycle
//!
//! 1. [`Scene::new`] with a config and a tool reader.
//! 2. [`Scene::attach`] binds a render surface and registers one input
//!    listener and one frame callback with the host. Both hold a `Weak`
//!    reference, so the host never keeps a scene alive.
//! 3. [`Scene::dispose`] releases both registrations. It is the only
//!    cancellation point; nothing reaches the scene afterwards.
//!
//! Input handling and rendering need the projection, so calling them before a
//! surface is attached returns [`SceneError::SurfaceNotAttached`].

use std::rc::Rc;

use geotool_core::{Color, EventFilter, FrameClock, InputBus, Shared};
use geotool_settings::EngineConfig;

use crate::error::{GeometryError, SceneError, SceneResult};
use crate::hit_test::Raycaster;
use crate::model::{ShapeKind, ShapeSpec};
use crate::serialization;
use crate::shape::{Shape, ShapeId};
use crate::shape_store::ShapeStore;
use crate::selection_manager::SelectionManager;
use crate::surface::{DrawItem, Frame, MarkerItem, RenderSurface};
use crate::tools::{Tool, ToolStateReader};
use crate::viewport::{ContainerBounds, Viewport};

mod interaction;
mod types;

pub use types::{DragState, InteractionState, Marker};
use types::HostBinding;

pub struct Scene {
    config: EngineConfig,
    tools: Rc<dyn ToolStateReader>,
    store: ShapeStore,
    selection: SelectionManager,
    raycaster: Raycaster,
    viewport: Option<Viewport>,
    surface: Option<Box<dyn RenderSurface>>,
    drag: Option<DragState>,
    marker: Option<Marker>,
    binding: Option<HostBinding>,
    frames_rendered: u64,
    disposed: bool,
}

impl Scene {
    pub fn new(config: EngineConfig, tools: Rc<dyn ToolStateReader>) -> Self {
        let raycaster = Raycaster::from_camera(&config.camera);
        Self {
            config,
            tools,
            store: ShapeStore::new(),
            selection: SelectionManager::new(),
            raycaster,
            viewport: None,
            surface: None,
            drag: None,
            marker: None,
            binding: None,
            frames_rendered: 0,
            disposed: false,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Binds a render surface and builds the projection for its size.
    ///
    /// Returns false, leaving the scene untouched, if a surface was already
    /// attached or the scene has been disposed.
    pub fn attach_surface(&mut self, surface: Box<dyn RenderSurface>) -> bool {
        if self.disposed {
            tracing::warn!("Ignoring surface attach on a disposed scene");
            return false;
        }
        if self.surface.is_some() {
            tracing::debug!("Surface already attached");
            return false;
        }

        let (width, height) = surface.size();
        self.viewport = Some(Viewport::new(
            ContainerBounds::sized(width, height),
            self.config.camera.clone(),
        ));
        self.surface = Some(surface);
        tracing::info!(
            "Surface attached ({}x{}, {} projection)",
            width,
            height,
            self.config.camera.projection
        );
        true
    }

    /// Attaches `surface` and wires the scene into the host input bus and
    /// frame clock. A second call is a no-op returning `false`.
    pub fn attach(
        scene: &Shared<Scene>,
        surface: Box<dyn RenderSurface>,
        bus: Rc<InputBus>,
        clock: Rc<FrameClock>,
    ) -> bool {
        let mut this = scene.borrow_mut();
        if !this.attach_surface(surface) {
            return false;
        }

        let weak = Rc::downgrade(scene);
        let subscription = bus.subscribe(EventFilter::All, move |event| {
            let Some(scene) = weak.upgrade() else {
                return;
            };
            let Ok(mut scene) = scene.try_borrow_mut() else {
                tracing::error!("Scene busy, dropping {}", event.description());
                return;
            };
            if let Err(e) = scene.handle_input(event) {
                tracing::error!("Input handler failed on {}: {}", event.description(), e);
            }
        });

        let weak = Rc::downgrade(scene);
        let frame = clock.request(move |number| {
            let Some(scene) = weak.upgrade() else {
                return;
            };
            let Ok(mut scene) = scene.try_borrow_mut() else {
                tracing::error!("Scene busy, skipping frame {}", number);
                return;
            };
            if let Err(e) = scene.render(number) {
                tracing::error!("Frame {} failed: {}", number, e);
            }
        });

        this.binding = Some(HostBinding {
            bus,
            subscription,
            clock,
            frame,
        });
        true
    }

    /// Releases host registrations and tears the scene down.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(binding) = self.binding.take() {
            binding.release();
        }
        self.drag = None;
        self.marker = None;
        self.surface = None;
        self.viewport = None;
        self.disposed = true;
        tracing::info!("Scene disposed ({} shapes)", self.store.len());
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Adds a shape of `kind` with the configured default size and color at the origin.
    ///
    /// The new shape is drawn above every earlier one, but hit-testing keeps
    /// insertion order, so on an overlap the earlier shape is still selected.
    pub fn add_shape(&mut self, kind: ShapeKind) -> SceneResult<ShapeId> {
        let shapes = &self.config.shapes;
        self.add_shape_with(ShapeSpec::new(
            kind,
            shapes.default_width,
            shapes.default_height,
        ))
    }

    pub fn add_shape_with(&mut self, spec: ShapeSpec) -> SceneResult<ShapeId> {
        let shape = Shape::new(spec, self.config.appearance.default_color)?;
        let id = self.store.insert(shape);
        tracing::debug!("Added {} {} ({} shapes)", spec.kind(), id, self.store.len());
        Ok(id)
    }

    /// Adds a shape by kind name. Unknown kinds are logged and ignored.
    pub fn add_shape_named(&mut self, kind: &str) -> SceneResult<Option<ShapeId>> {
        match kind.parse::<ShapeKind>() {
            Ok(kind) => self.add_shape(kind).map(Some),
            Err(GeometryError::UnsupportedKind(name)) => {
                tracing::warn!("Unsupported shape kind '{}', scene unchanged", name);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// JSON array of shape records in add order.
    pub fn serialize(&self) -> SceneResult<String> {
        serialization::to_json(&self.store)
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.store.get(id)
    }

    pub fn shapes(&self) -> &ShapeStore {
        &self.store
    }

    pub fn shape_count(&self) -> usize {
        self.store.len()
    }

    pub fn selected_shape(&self) -> Option<ShapeId> {
        self.selection.selected_id()
    }

    /// Fill color of the selected shape.
    pub fn selected_color(&self) -> Option<Color> {
        self.selected_shape()
            .and_then(|id| self.store.get(id))
            .map(Shape::color)
    }

    pub fn drag_state(&self) -> Option<DragState> {
        self.drag
    }

    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    pub fn active_tool(&self) -> Tool {
        self.tools.active_tool()
    }

    pub fn interaction_state(&self) -> InteractionState {
        if self.drag.is_some() {
            return InteractionState::Dragging;
        }
        match self.active_tool() {
            Tool::Select => InteractionState::Selecting,
            Tool::ClosestPoint => InteractionState::ClosestPointProbing,
            _ => InteractionState::Idle,
        }
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Moves the canvas inside the host window. Size changes go through resize.
    pub fn set_container_bounds(&mut self, bounds: ContainerBounds) -> SceneResult<()> {
        let viewport = self.viewport.as_mut().ok_or(SceneError::SurfaceNotAttached)?;
        viewport.set_container(bounds);
        let bounds = viewport.bounds();
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(bounds.width, bounds.height);
        }
        Ok(())
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Draws the full collection plus the marker, outside the frame clock.
    pub fn render_frame(&mut self) -> SceneResult<()> {
        self.render(0)
    }

    fn render(&mut self, number: u64) -> SceneResult<()> {
        self.sync_with_tool();

        let viewport = self.viewport.clone().ok_or(SceneError::SurfaceNotAttached)?;
        let appearance = &self.config.appearance;
        let frame = Frame {
            number,
            viewport,
            background: appearance.background_color,
            items: self
                .store
                .iter()
                .map(|shape| DrawItem {
                    shape_id: shape.id(),
                    kind: shape.kind(),
                    color: shape.color(),
                    triangles: shape.world_triangles().collect(),
                    outline: shape.world_vertices(),
                })
                .collect(),
            marker: self.marker.map(|marker| MarkerItem {
                center: marker.position,
                radius: appearance.marker_radius,
                color: appearance.marker_color,
            }),
        };

        let surface = self.surface.as_mut().ok_or(SceneError::SurfaceNotAttached)?;
        surface.present(&frame)?;
        self.frames_rendered += 1;
        Ok(())
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        if let Some(binding) = self.binding.take() {
            binding.release();
        }
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("shapes", &self.store.len())
            .field("selected", &self.selection.selected_id())
            .field("drag", &self.drag)
            .field("marker", &self.marker)
            .field("attached", &self.is_attached())
            .field("disposed", &self.disposed)
            .finish()
    }
}
