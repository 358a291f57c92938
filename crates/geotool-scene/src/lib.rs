//! # Geotool Scene
//!
//! The scene interaction engine: shape geometry, camera mapping, ray-cast
//! hit-testing, closest-point probing and the select/move/probe state
//! machine, plus the render surfaces it draws into.
//!
//! Everything runs on one thread. The host feeds input through a
//! [`geotool_core::InputBus`] and drives rendering with a
//! [`geotool_core::FrameClock`]; [`Workspace`] bundles both with a scene and
//! a tool store.

pub mod error;
pub mod model;
pub mod raster;
pub mod scene;
pub mod selection_manager;
pub mod serialization;
pub mod shape;
pub mod shape_store;
pub mod surface;
pub mod tools;
pub mod viewport;
pub mod workspace;

pub use error::{GeometryError, GeometryResult, SceneError, SceneResult};
pub use hit_test::{Hit, Intersection, Ray, Raycaster};
pub use model::{build_polygon, Bounds, Mesh, Point, PolygonLoop, ShapeKind, ShapeSpec};
pub use raster::RasterSurface;
pub use scene::{DragState, InteractionState, Marker, Scene};
pub use selection_manager::SelectionManager;
pub use serialization::{read_records, RecordPosition, ShapeRecord};
pub use shape::{Direction, Shape, ShapeId};
pub use shape_store::ShapeStore;
pub use surface::{DrawItem, Frame, FrameLog, MarkerItem, RecordingSurface, RenderSurface};
pub use tools::{Tool, ToolStateReader, ToolStore};
pub use viewport::{device_to_world, ContainerBounds, Viewport};
pub use workspace::{ToolOutcome, Workspace};
