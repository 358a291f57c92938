//! Explicit root handle for the engine.
//!
//! A [`Workspace`] owns the tool store, the scene and the host channels, and
//! is passed to whatever needs engine access: the shell, tests, a devtools
//! bridge. It is the command surface the shell talks to.

use std::rc::Rc;

use geotool_core::{shared, Color, FrameClock, InputBus, InputEvent, Shared};
use geotool_settings::EngineConfig;

use crate::error::SceneResult;
use crate::model::ShapeKind;
use crate::scene::Scene;
use crate::shape::ShapeId;
use crate::surface::RenderSurface;
use crate::tools::{Tool, ToolStateReader, ToolStore};

/// Result of choosing a tool
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// An edit tool (or none) became active.
    ToolChanged(Tool),
    /// An add tool became active and added a shape.
    ShapeAdded(Option<ShapeId>),
    /// The scene was serialized; the active tool is unchanged.
    Saved(String),
    /// The tool name was not recognized; nothing changed.
    Ignored(String),
}

pub struct Workspace {
    tools: Rc<ToolStore>,
    scene: Shared<Scene>,
    bus: Rc<InputBus>,
    clock: Rc<FrameClock>,
}

impl Workspace {
    pub fn new(config: EngineConfig) -> Self {
        let tools = Rc::new(ToolStore::new());
        let scene = shared(Scene::new(config, tools.clone()));
        Self {
            tools,
            scene,
            bus: Rc::new(InputBus::new()),
            clock: Rc::new(FrameClock::new()),
        }
    }

    /// Attaches the scene to `surface` and to this workspace's bus and clock.
    /// Returns false if a surface was already attached.
    pub fn attach_surface(&self, surface: Box<dyn RenderSurface>) -> bool {
        Scene::attach(
            &self.scene,
            surface,
            Rc::clone(&self.bus),
            Rc::clone(&self.clock),
        )
    }

    pub fn set_active_tool(&self, tool: Tool) -> SceneResult<ToolOutcome> {
        match tool {
            Tool::Save => {
                let json = self.serialize()?;
                tracing::info!("Scene saved ({} bytes)", json.len());
                Ok(ToolOutcome::Saved(json))
            }
            Tool::Add(kind) => {
                self.tools.set_active_tool(tool);
                let id = self.add_shape(kind)?;
                Ok(ToolOutcome::ShapeAdded(Some(id)))
            }
            _ => {
                self.tools.set_active_tool(tool);
                Ok(ToolOutcome::ToolChanged(tool))
            }
        }
    }

    /// Chooses a tool by identifier (`select`, `add-square`, ...). Unknown
    /// identifiers are logged and leave everything unchanged.
    pub fn set_active_tool_named(&self, name: &str) -> SceneResult<ToolOutcome> {
        match name.parse::<Tool>() {
            Ok(tool) => self.set_active_tool(tool),
            Err(e) => {
                tracing::warn!("Ignoring tool '{}': {}", name, e);
                Ok(ToolOutcome::Ignored(name.to_string()))
            }
        }
    }

    pub fn add_shape(&self, kind: ShapeKind) -> SceneResult<ShapeId> {
        self.scene.borrow_mut().add_shape(kind)
    }

    pub fn add_shape_named(&self, kind: &str) -> SceneResult<Option<ShapeId>> {
        self.scene.borrow_mut().add_shape_named(kind)
    }

    pub fn serialize(&self) -> SceneResult<String> {
        self.scene.borrow().serialize()
    }

    /// Delivers a host input event. Returns the number of listeners reached.
    pub fn publish(&self, event: InputEvent) -> usize {
        self.bus.publish(event)
    }

    /// Advances the host frame clock by one frame.
    pub fn tick(&self) -> usize {
        self.clock.tick()
    }

    pub fn dispose(&self) {
        self.scene.borrow_mut().dispose();
    }

    pub fn active_tool(&self) -> Tool {
        self.tools.active_tool()
    }

    pub fn selected_shape(&self) -> Option<ShapeId> {
        self.scene.borrow().selected_shape()
    }

    pub fn selected_color(&self) -> Option<Color> {
        self.scene.borrow().selected_color()
    }

    pub fn scene(&self) -> Shared<Scene> {
        Rc::clone(&self.scene)
    }

    pub fn bus(&self) -> Rc<InputBus> {
        Rc::clone(&self.bus)
    }

    pub fn clock(&self) -> Rc<FrameClock> {
        Rc::clone(&self.clock)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("active_tool", &self.active_tool())
            .field("scene", &self.scene.borrow())
            .field("bus", &self.bus)
            .field("clock", &self.clock)
            .finish()
    }
}
