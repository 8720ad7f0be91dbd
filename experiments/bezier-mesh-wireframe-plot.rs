// Tessellate the dome demo patch and draw every quad face as a closed outline.
//
// usage: bezier-mesh-wireframe-plot [output.png]

use bezier_mesh::constants::{DEFAULT_DOME_EXTENT, DEFAULT_RESOLUTION};
use bezier_mesh::modules::generate::dome_grid;
use bezier_mesh::{tessellate, Mesh, Point3};
use log::info;
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::Range;
use std::time::Instant;

const DEFAULT_OUTPUT: &str = "bezier-mesh-wireframe.png";
const IMAGE_SIZE: (u32, u32) = (1024, 1024);
const SEED: u64 = 5;

fn bounds(mesh: &Mesh, coord: impl Fn(&Point3) -> f64) -> Range<f64> {
    let (min, max) = mesh
        .vertices
        .iter()
        .map(coord)
        .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    // keep flat patches drawable
    if max - min < f64::EPSILON {
        min - 1.0..max + 1.0
    } else {
        min..max
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let mut rng = StdRng::seed_from_u64(SEED);
    let grid = dome_grid(&mut rng, DEFAULT_DOME_EXTENT);

    let start_time = Instant::now();
    let mesh = tessellate(&grid, DEFAULT_RESOLUTION)?;
    info!("V num : {}", mesh.vertex_count());
    info!("F num : {}", mesh.face_count());
    info!("Tessellated in {:.2?}", start_time.elapsed());

    let root = BitMapBackend::new(&output, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // plotters' y axis points up, so the patch height goes there
    let mut chart = ChartBuilder::on(&root)
        .caption("Bicubic Bezier patch", ("sans-serif", 30))
        .margin(20)
        .build_cartesian_3d(
            bounds(&mesh, |p| p.x),
            bounds(&mesh, |p| p.z),
            bounds(&mesh, |p| p.y),
        )?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.6;
        pb.yaw = 0.6;
        pb.scale = 0.8;
        pb.into_matrix()
    });
    chart.configure_axes().draw()?;

    for face in &mesh.faces {
        let [v0, v1, v2, v3] = mesh.face_vertices(face);
        let outline = [v0, v1, v2, v3, v0].map(|p| (p.x, p.z, p.y));
        chart.draw_series(LineSeries::new(outline, &BLUE))?;
    }

    root.present()?;
    info!("Wireframe written to {}", output);

    Ok(())
}
