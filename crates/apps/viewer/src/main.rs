use std::env;
use std::path::Path;
use std::process::ExitCode;

use camera::CameraController;
use catalog::{CatalogManifest, read_catalog};
use runtime::frame::Frame;
use runtime::input::InputSample;
use scene::instances::{InstanceTransform, build_instances};
use scene::positions::project_catalog;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Frames of the headless smoke loop run after loading.
const SMOKE_FRAMES: u64 = 300;
const SMOKE_DT_S: f64 = 1.0 / 60.0;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match real_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn real_main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/catalogs.json".to_string());

    let manifest = CatalogManifest::load(&manifest_path)?;
    info!(
        manifest = %manifest_path,
        catalogs = manifest.catalogs.len(),
        "manifest loaded"
    );

    // Catalog file paths are relative to the manifest.
    let root = Path::new(&manifest_path)
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    // Load phase: read, project, and build every instance buffer up front.
    // Any reader failure aborts startup before the interactive loop exists.
    let mut buffers: Vec<(String, Vec<InstanceTransform>)> = Vec::new();
    for source in &manifest.catalogs {
        let catalog = read_catalog(root.join(&source.path), source.kind)?;
        let positions = project_catalog(&catalog, source.sphere_radius);
        let instances = build_instances(&positions, source.point_scale);
        info!(
            id = %source.id,
            kind = ?source.kind,
            points = catalog.len(),
            "catalog loaded"
        );
        buffers.push((source.id.clone(), instances));
    }

    let total_points: usize = buffers.iter().map(|(_, b)| b.len()).sum();
    info!(total_points, "load phase complete");

    // The renderer is an external collaborator; this bounded loop stands in
    // for it and exercises the per-tick camera update deterministically.
    let mut cam = CameraController::new();
    let mut frame = Frame::first(SMOKE_DT_S);
    while frame.index < SMOKE_FRAMES {
        // Flip into free-look halfway through to cover both modes.
        let input = if frame.index == SMOKE_FRAMES / 2 {
            InputSample {
                mode_toggle: true,
                ..InputSample::idle()
            }
        } else {
            InputSample::idle()
        };
        cam.update(frame.dt_s, &input);
        frame = frame.next();
    }

    let pose = cam.pose();
    info!(
        frames = frame.index,
        mode = ?cam.mode(),
        position = ?pose.position,
        target = ?pose.target,
        "smoke loop complete"
    );

    Ok(())
}
