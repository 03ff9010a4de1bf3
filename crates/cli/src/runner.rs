//! Entry points for each subcommand

// standard library
use std::path::Path;

// crate modules
use crate::config::{load_config, TubesConfig, VoxelsConfig};
use crate::error::Result;

// nxgeom modules
use nxgeom_nexus::{detector_group, emit, DetectorGeometry, ToleranceCheck};
use nxgeom_off::write_off;
use nxgeom_tubes::generate_detector;
use nxgeom_voxels::{assemble_mesh, read_lookup_table};

// external crates
use log::{info, warn};

/// Generate tube detector pixels and write the document
pub fn run_tubes(path: &Path) -> Result<()> {
    let config: TubesConfig = load_config(path)?;
    config.validate()?;
    let mode = config.output_mode()?;

    let detector = generate_detector(&config.instrument)?;
    let node = detector_group(&config.detector_name, &detector);
    emit(node, &mode, &config.output_path, config.layout)?;

    info!(
        "{} pixels written to {}",
        detector.len(),
        config.output_path.display()
    );
    Ok(())
}

/// Build the voxel mesh from a lookup table and write it as OFF
pub fn run_voxels(path: &Path) -> Result<()> {
    let config: VoxelsConfig = load_config(path)?;
    config.validate()?;

    let rows = read_lookup_table(&config.lookup_table)?;
    if rows.is_empty() {
        warn!("{} holds no voxels", config.lookup_table.display());
    }

    let mesh = assemble_mesh(&rows, &config.placement)?;
    mesh.check_topology()?;
    write_off(&mesh.to_polyhedron(), &config.comment, &config.output_path)?;

    info!(
        "{} voxels written to {}",
        mesh.voxel_count(),
        config.output_path.display()
    );
    Ok(())
}

/// Optional reference check for `inspect`
#[derive(Debug, Clone, Copy)]
pub struct Expectation {
    /// Expected distance between the two pixels
    pub distance: f64,
    /// Allowed absolute difference
    pub precision: f64,
    /// Fail instead of warning
    pub fatal: bool,
}

/// Print the position of one pixel, or the separation of two
pub fn run_inspect(
    path: &Path,
    first: u64,
    second: Option<u64>,
    expectation: Option<Expectation>,
) -> Result<()> {
    let geometry = DetectorGeometry::read(path)?;
    info!("{} pixels in {}", geometry.len(), path.display());

    let a = geometry.pixel_to_coordinate(first)?;
    println!("pixel {first}: [{}, {}, {}]", a.x, a.y, a.z);

    let Some(second) = second else {
        return Ok(());
    };

    let b = geometry.pixel_to_coordinate(second)?;
    let v = geometry.vector_between(first, second)?;
    let distance = geometry.distance(first, second)?;
    println!("pixel {second}: [{}, {}, {}]", b.x, b.y, b.z);
    println!("vector: [{}, {}, {}]", v.x, v.y, v.z);
    println!("distance: {distance}");

    match DetectorGeometry::angle(&a, &b) {
        Ok(angle) => println!("angle from origin: {} deg", angle.to_degrees()),
        Err(e) => warn!("{e}"),
    }

    if let Some(expected) = expectation {
        let check = ToleranceCheck {
            fatal: expected.fatal,
        };
        if check.check(distance, expected.distance, expected.precision)? {
            println!("distance within {} of {}", expected.precision, expected.distance);
        }
    }

    Ok(())
}

/// Default configuration for a pipeline as pretty JSON
pub fn example_config(voxels: bool) -> Result<String> {
    Ok(if voxels {
        serde_json::to_string_pretty(&VoxelsConfig::default())?
    } else {
        serde_json::to_string_pretty(&TubesConfig::default())?
    })
}
