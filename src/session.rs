//! Scripted headless session.
//!
//! Drives a [`Workspace`] the way the shell would: choose tools, send pointer
//! and keyboard events, tick the frame clock. The binary uses it to produce a
//! PNG and the serialized scene without a window.

use anyhow::Context;
use geotool_core::{InputEvent, Key};
use geotool_scene::model::Point;
use geotool_scene::{ShapeKind, Tool, ToolOutcome, Workspace};

/// What a finished session produced.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub shapes: usize,
    pub frames: u64,
    pub selected_color: Option<String>,
    pub serialized: String,
}

/// Device position of a world point in the current projection.
fn device(ws: &Workspace, world: Point) -> anyhow::Result<(f64, f64)> {
    let scene = ws.scene();
    let scene = scene.borrow();
    let viewport = scene
        .viewport()
        .context("session needs an attached surface")?;
    Ok(viewport.world_to_device(world))
}

fn click(ws: &Workspace, at: (f64, f64)) {
    ws.publish(InputEvent::PointerDown { x: at.0, y: at.1 });
    ws.publish(InputEvent::PointerUp { x: at.0, y: at.1 });
}

fn drag(ws: &Workspace, from: (f64, f64), to: (f64, f64), steps: usize) {
    ws.publish(InputEvent::PointerDown {
        x: from.0,
        y: from.1,
    });
    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        ws.publish(InputEvent::PointerMove {
            x: from.0 + (to.0 - from.0) * t,
            y: from.1 + (to.1 - from.1) * t,
        });
        ws.tick();
    }
    ws.publish(InputEvent::PointerUp { x: to.0, y: to.1 });
}

/// Lays out one shape of each kind, probes the hexagon and saves.
///
/// The workspace must already have a surface attached.
pub fn run(ws: &Workspace) -> anyhow::Result<SessionReport> {
    let layout = [
        (ShapeKind::Triangle, Point::new(-0.8, 0.0)),
        (ShapeKind::Hexagon, Point::new(0.8, 0.0)),
        (ShapeKind::Square, Point::ORIGIN),
    ];

    for (kind, target) in layout {
        ws.set_active_tool(Tool::Add(kind))?;
        ws.tick();

        // New shapes appear at the origin, which the earlier ones have already left
        let origin = device(ws, Point::ORIGIN)?;
        ws.set_active_tool(Tool::Select)?;
        click(ws, origin);
        ws.set_active_tool(Tool::Move)?;
        drag(ws, origin, device(ws, target)?, 4);
        tracing::debug!("Placed {} at {}", kind, target);
    }

    // Nudge the square up a little
    ws.set_active_tool(Tool::Select)?;
    click(ws, device(ws, Point::ORIGIN)?);
    ws.set_active_tool(Tool::Move)?;
    for code in ["ArrowUp", "ArrowUp"] {
        ws.publish(InputEvent::KeyDown(Key::from_code(code)));
    }

    // Probe the hexagon from above
    ws.set_active_tool(Tool::Select)?;
    click(ws, device(ws, Point::new(0.8, 0.0))?);
    ws.set_active_tool(Tool::ClosestPoint)?;
    let probe = device(ws, Point::new(0.9, 0.6))?;
    ws.publish(InputEvent::PointerMove {
        x: probe.0,
        y: probe.1,
    });
    ws.tick();

    let ToolOutcome::Saved(serialized) = ws.set_active_tool(Tool::Save)? else {
        anyhow::bail!("save did not produce output");
    };

    let scene = ws.scene();
    let scene = scene.borrow();
    Ok(SessionReport {
        shapes: scene.shape_count(),
        frames: scene.frames_rendered(),
        selected_color: scene.selected_color().map(|c| c.to_string()),
        serialized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotool_scene::{read_records, RasterSurface};
    use geotool_settings::EngineConfig;

    fn run_session() -> (Workspace, RasterSurface, SessionReport) {
        let workspace = Workspace::new(EngineConfig::default());
        let surface = RasterSurface::new(400, 300).unwrap();
        assert!(workspace.attach_surface(Box::new(surface.clone())));
        let report = run(&workspace).unwrap();
        (workspace, surface, report)
    }

    #[test]
    fn test_session_lays_out_three_shapes() {
        let (_workspace, _surface, report) = run_session();
        assert_eq!(report.shapes, 3);
        assert!(report.frames > 0);

        let records = read_records(&report.serialized).unwrap();
        let kinds: Vec<&str> = records.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, vec!["triangle", "hexagon", "square"]);

        let triangle = &records[0];
        assert!((triangle.position.x + 0.8).abs() < 1e-6);
        let hexagon = &records[1];
        assert!((hexagon.position.x - 0.8).abs() < 1e-6);

        let square = &records[2];
        assert!(square.position.x.abs() < 1e-6);
        assert!((square.position.y - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_session_leaves_hexagon_selected_with_marker() {
        let (workspace, _surface, report) = run_session();
        assert!(report.selected_color.is_some());

        let scene = workspace.scene();
        let scene = scene.borrow();
        let selected = scene.selected_shape().unwrap();
        let hexagon = scene.shape(selected).unwrap();
        assert_eq!(hexagon.kind(), ShapeKind::Hexagon);
        assert!(scene.marker().is_some());
    }

    #[test]
    fn test_session_png_written() {
        let (_workspace, surface, _report) = run_session();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        surface.save_png(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
